//! Stable hashing utilities for keys and slots.
//!
//! Goals:
//! - Use a stable, explicit hash (not std::DefaultHasher) so that key -> slot mapping
//!   is identical across runs, toolchains and platforms.
//! - Jenkins one-at-a-time is the default slot hash; FNV-1 and xxhash64 are kept
//!   for comparing collision/overflow behaviour on the same data.

use anyhow::{anyhow, Error, Result};
use std::fmt;
use std::hash::Hasher;
use std::str::FromStr;
use twox_hash::XxHash64;

use crate::consts::{FNV1_OFFSET_BASIS, FNV1_PRIME, JENKINS_WHITEN_PRIME};

/// Type of stable hash used by an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashKind {
    /// Jenkins one-at-a-time (32 bit) + multiply-by-prime whitening.
    Jenkins = 1,
    /// FNV-1, 64 bit, over UTF-8 bytes.
    Fnv1 = 2,
    /// 64-bit xxhash with seed=0, over UTF-8 bytes.
    Xx64 = 3,
}

impl HashKind {
    pub const ALL: [HashKind; 3] = [HashKind::Jenkins, HashKind::Fnv1, HashKind::Xx64];

    /// Compact u32 code, also accepted by `FromStr` and the CLI `--hash` flag.
    pub fn to_u32(self) -> u32 {
        match self {
            HashKind::Jenkins => 1,
            HashKind::Fnv1 => 2,
            HashKind::Xx64 => 3,
        }
    }

    /// Unknown codes return None.
    pub fn from_u32(code: u32) -> Option<Self> {
        match code {
            1 => Some(HashKind::Jenkins),
            2 => Some(HashKind::Fnv1),
            3 => Some(HashKind::Xx64),
            _ => None,
        }
    }

    /// Short name, used by config/CLI.
    pub fn name(self) -> &'static str {
        match self {
            HashKind::Jenkins => "jenkins",
            HashKind::Fnv1 => "fnv1",
            HashKind::Xx64 => "xx64",
        }
    }
}

impl fmt::Display for HashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashKind::Jenkins => write!(f, "jenkins-oaat(x{})", JENKINS_WHITEN_PRIME),
            HashKind::Fnv1 => write!(f, "fnv1-64"),
            HashKind::Xx64 => write!(f, "xxhash64(seed=0)"),
        }
    }
}

impl FromStr for HashKind {
    type Err = Error;

    /// Принимает имя (jenkins|fnv1|xx64 и синонимы) или числовой код.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(code) = s.parse::<u32>() {
            return HashKind::from_u32(code)
                .ok_or_else(|| anyhow!("unknown hash kind code {} (expected 1..=3)", code));
        }
        match s.to_ascii_lowercase().as_str() {
            "jenkins" | "oaat" => Ok(HashKind::Jenkins),
            "fnv1" | "fnv" => Ok(HashKind::Fnv1),
            "xx64" | "xxhash" => Ok(HashKind::Xx64),
            other => Err(anyhow!(
                "unknown hash kind '{}' (expected jenkins|fnv1|xx64 or 1|2|3)",
                other
            )),
        }
    }
}

/// Default hash kind for new indexes.
pub const HASH_KIND_DEFAULT: HashKind = HashKind::Jenkins;

/// Jenkins one-at-a-time по кодовым точкам ключа.
///
/// Вся арифметика - u32 с переполнением (mod 2^32). Пустой ключ -> 0.
pub fn jenkins_one_at_a_time(key: &str) -> u32 {
    let mut h: u32 = 0;
    for c in key.chars() {
        h = h.wrapping_add(c as u32);
        h = h.wrapping_add(h << 10);
        h ^= h >> 6;
    }
    h = h.wrapping_add(h << 3);
    h ^= h >> 11;
    h = h.wrapping_add(h << 15);
    h.wrapping_mul(JENKINS_WHITEN_PRIME)
}

/// FNV-1 (multiply, then xor), 64 bit.
pub fn fnv1_64(bytes: &[u8]) -> u64 {
    let mut h = FNV1_OFFSET_BASIS;
    for &b in bytes {
        h = h.wrapping_mul(FNV1_PRIME);
        h ^= b as u64;
    }
    h
}

/// Compute a hash of a key for given kind, widened to u64.
pub fn hash64(kind: HashKind, key: &str) -> u64 {
    match kind {
        HashKind::Jenkins => jenkins_one_at_a_time(key) as u64,
        HashKind::Fnv1 => fnv1_64(key.as_bytes()),
        HashKind::Xx64 => {
            let mut h = XxHash64::with_seed(0);
            h.write(key.as_bytes());
            h.finish()
        }
    }
}

/// Compute slot index from a hash value.
#[inline]
pub fn slot_index(hash: u64, num_buckets: u32) -> u32 {
    debug_assert!(num_buckets > 0, "num_buckets must be > 0");
    (hash % (num_buckets as u64)) as u32
}

/// Stable mapping from key -> slot using the selected hash kind.
#[inline]
pub fn slot_of_key(kind: HashKind, key: &str, num_buckets: u32) -> u32 {
    slot_index(hash64(kind, key), num_buckets)
}
