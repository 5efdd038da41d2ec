//! Общие константы: sentinel-значения, параметры по умолчанию, константы хешей.

// -------- Buckets --------
/// Заполнитель незанятых слотов bucket (занятость считает count).
pub const NO_PAGE: u64 = u64::MAX;

// -------- Defaults (demo-конфигурация) --------
pub const DEFAULT_PAGE_CAPACITY: usize = 5;
pub const DEFAULT_NUM_BUCKETS: u32 = 11;
pub const DEFAULT_BUCKET_CAPACITY: usize = 3;

// Запас слотов при auto-sizing: NB = next_prime(trunc(ceil(NR/FR) + NR * 0.2))
pub const AUTO_BUCKETS_RESERVE: f64 = 0.2;

// -------- Hash: Jenkins one-at-a-time --------
// Дополнительный whitening-шаг после классического финала.
pub const JENKINS_WHITEN_PRIME: u32 = 35969;

// -------- Hash: FNV-1 (64) --------
pub const FNV1_OFFSET_BASIS: u64 = 14695981039346656037;
pub const FNV1_PRIME: u64 = 1099511628211;

// -------- ENV --------
pub const ENV_PAGE_CAPACITY: &str = "SH_PAGE_CAPACITY";
pub const ENV_NUM_BUCKETS: &str = "SH_NUM_BUCKETS";
pub const ENV_BUCKET_CAPACITY: &str = "SH_BUCKET_CAPACITY";
pub const ENV_HASH_KIND: &str = "SH_HASH_KIND";
