//! Centralized configuration and builder for StaticHashDB.
//!
//! Goals:
//! - Single place to collect construction parameters (page capacity, slot count,
//!   bucket capacity, hash kind) instead of passing loose integers around.
//! - IndexConfig::from_env() reads SH_* env vars on top of the defaults.
//! - IndexBuilder returns an IndexConfig, which PagedTable/HashIndex consume.
//!
//! Defaults (demo-конфигурация):
//! - page_capacity = 5
//! - num_buckets = 11
//! - bucket_capacity = 3
//! - hash_kind = jenkins
//!
//! Все параметры фиксируются на время жизни индекса: рехеширования нет.

use anyhow::{anyhow, Result};
use std::fmt;

use crate::consts::{
    AUTO_BUCKETS_RESERVE, DEFAULT_BUCKET_CAPACITY, DEFAULT_NUM_BUCKETS, DEFAULT_PAGE_CAPACITY,
    ENV_BUCKET_CAPACITY, ENV_HASH_KIND, ENV_NUM_BUCKETS, ENV_PAGE_CAPACITY,
};
use crate::hash::{HashKind, HASH_KIND_DEFAULT};
use crate::util::{env_parse, next_prime};

/// Top-level configuration: how records are paginated and how the index is shaped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexConfig {
    /// Records per page.
    /// Env: SH_PAGE_CAPACITY (default 5)
    pub page_capacity: usize,

    /// Fixed number of slots (chains) in the index.
    /// Env: SH_NUM_BUCKETS (default 11)
    pub num_buckets: u32,

    /// Page addresses per bucket, shared by all buckets.
    /// Env: SH_BUCKET_CAPACITY (default 3)
    pub bucket_capacity: usize,

    /// Slot hash.
    /// Env: SH_HASH_KIND = jenkins|fnv1|xx64 (default jenkins)
    pub hash_kind: HashKind,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            page_capacity: DEFAULT_PAGE_CAPACITY,
            num_buckets: DEFAULT_NUM_BUCKETS,
            bucket_capacity: DEFAULT_BUCKET_CAPACITY,
            hash_kind: HASH_KIND_DEFAULT,
        }
    }
}

impl IndexConfig {
    /// Load configuration from environment variables on top of the defaults.
    /// Unparsable values are ignored (with a warning).
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Some(n) = env_parse::<usize>(ENV_PAGE_CAPACITY) {
            cfg.page_capacity = n;
        }
        if let Some(n) = env_parse::<u32>(ENV_NUM_BUCKETS) {
            cfg.num_buckets = n;
        }
        if let Some(n) = env_parse::<usize>(ENV_BUCKET_CAPACITY) {
            cfg.bucket_capacity = n;
        }
        if let Some(kind) = env_parse::<HashKind>(ENV_HASH_KIND) {
            cfg.hash_kind = kind;
        }

        cfg
    }

    /// Fluent setters (builder-style) to override specific fields.

    pub fn with_page_capacity(mut self, n: usize) -> Self {
        self.page_capacity = n;
        self
    }

    pub fn with_num_buckets(mut self, n: u32) -> Self {
        self.num_buckets = n;
        self
    }

    pub fn with_bucket_capacity(mut self, n: usize) -> Self {
        self.bucket_capacity = n;
        self
    }

    pub fn with_hash_kind(mut self, kind: HashKind) -> Self {
        self.hash_kind = kind;
        self
    }

    /// Подобрать num_buckets под число записей:
    /// next_prime(trunc(ceil(records / bucket_capacity) + records * 0.2)).
    /// Результат всегда простое число >= 2 (0 записей -> 2).
    ///
    /// bucket_capacity должен быть уже задан (0 трактуется как 1).
    pub fn auto_buckets(mut self, record_count: usize) -> Self {
        let fr = self.bucket_capacity.max(1) as u64;
        let nr = record_count as u64;
        let wanted = (nr.div_ceil(fr) as f64 + nr as f64 * AUTO_BUCKETS_RESERVE) as u64;
        let nb = next_prime(wanted).min(u32::MAX as u64);
        self.num_buckets = nb as u32;
        self
    }

    /// Все параметры должны быть > 0.
    pub fn validate(&self) -> Result<()> {
        if self.page_capacity == 0 {
            return Err(anyhow!("page_capacity must be > 0"));
        }
        if self.num_buckets == 0 {
            return Err(anyhow!("num_buckets must be > 0"));
        }
        if self.bucket_capacity == 0 {
            return Err(anyhow!("bucket_capacity must be > 0"));
        }
        Ok(())
    }

    /// Finish the builder and obtain the configuration.
    pub fn build(self) -> Self {
        self
    }
}

impl fmt::Display for IndexConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IndexConfig {{ \
             page_capacity: {}, \
             num_buckets: {}, \
             bucket_capacity: {}, \
             hash_kind: {} \
             }}",
            self.page_capacity, self.num_buckets, self.bucket_capacity, self.hash_kind,
        )
    }
}

/// Lightweight builder that produces an IndexConfig.
#[derive(Clone, Debug)]
pub struct IndexBuilder {
    cfg: IndexConfig,
}

impl Default for IndexBuilder {
    fn default() -> Self {
        // Start from env, then allow overrides.
        Self {
            cfg: IndexConfig::from_env(),
        }
    }
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a clean default (without reading env).
    pub fn from_default() -> Self {
        Self {
            cfg: IndexConfig::default(),
        }
    }

    pub fn page_capacity(mut self, n: usize) -> Self {
        self.cfg.page_capacity = n;
        self
    }

    pub fn num_buckets(mut self, n: u32) -> Self {
        self.cfg.num_buckets = n;
        self
    }

    pub fn bucket_capacity(mut self, n: usize) -> Self {
        self.cfg.bucket_capacity = n;
        self
    }

    pub fn hash_kind(mut self, kind: HashKind) -> Self {
        self.cfg.hash_kind = kind;
        self
    }

    /// Finish the builder and validate the configuration.
    pub fn build(self) -> Result<IndexConfig> {
        self.cfg.validate()?;
        Ok(self.cfg)
    }
}
