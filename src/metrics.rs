//! Lightweight global metrics for StaticHashDB.
//!
//! Потокобезопасные атомарные счётчики для подсистем:
//! - Index (insert / overflow buckets / lookup)
//! - Probe (chain scan)
//! - Table scan
//! - Loader

use std::sync::atomic::{AtomicU64, Ordering};

// ----- Index -----
static INDEX_INSERTS_TOTAL: AtomicU64 = AtomicU64::new(0);
static OVERFLOW_BUCKETS_CREATED: AtomicU64 = AtomicU64::new(0);
static LOOKUP_HITS: AtomicU64 = AtomicU64::new(0);
static LOOKUP_MISSES: AtomicU64 = AtomicU64::new(0);

// ----- Probe -----
static PROBE_BUCKETS_READ: AtomicU64 = AtomicU64::new(0);
static PROBE_PAGES_READ: AtomicU64 = AtomicU64::new(0);

// ----- Table scan -----
static SCAN_PAGES_READ: AtomicU64 = AtomicU64::new(0);

// ----- Loader -----
static PAGES_LOADED: AtomicU64 = AtomicU64::new(0);
static RECORDS_LOADED: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, Default)]
pub struct MetricsSnapshot {
    // Index
    pub index_inserts_total: u64,
    pub overflow_buckets_created: u64,
    pub lookup_hits: u64,
    pub lookup_misses: u64,

    // Probe
    pub probe_buckets_read: u64,
    pub probe_pages_read: u64,

    // Table scan
    pub scan_pages_read: u64,

    // Loader
    pub pages_loaded: u64,
    pub records_loaded: u64,
}

impl MetricsSnapshot {
    pub fn lookup_hit_ratio(&self) -> f64 {
        let total = self.lookup_hits + self.lookup_misses;
        if total == 0 {
            0.0
        } else {
            self.lookup_hits as f64 / total as f64
        }
    }
}

// ----- Recorders (Index) -----
pub fn record_index_insert() {
    INDEX_INSERTS_TOTAL.fetch_add(1, Ordering::Relaxed);
}

pub fn record_overflow_bucket_created() {
    OVERFLOW_BUCKETS_CREATED.fetch_add(1, Ordering::Relaxed);
}

pub fn record_lookup(hit: bool) {
    if hit {
        LOOKUP_HITS.fetch_add(1, Ordering::Relaxed);
    } else {
        LOOKUP_MISSES.fetch_add(1, Ordering::Relaxed);
    }
}

// ----- Recorders (Probe / Scan) -----
pub fn record_probe(buckets_read: u64, pages_read: u64) {
    PROBE_BUCKETS_READ.fetch_add(buckets_read, Ordering::Relaxed);
    PROBE_PAGES_READ.fetch_add(pages_read, Ordering::Relaxed);
}

pub fn record_scan(pages_read: u64) {
    SCAN_PAGES_READ.fetch_add(pages_read, Ordering::Relaxed);
}

// ----- Recorders (Loader) -----
pub fn record_load(pages: usize, records: usize) {
    PAGES_LOADED.fetch_add(pages as u64, Ordering::Relaxed);
    RECORDS_LOADED.fetch_add(records as u64, Ordering::Relaxed);
}

// ----- Snapshot / Reset -----
pub fn snapshot() -> MetricsSnapshot {
    MetricsSnapshot {
        index_inserts_total: INDEX_INSERTS_TOTAL.load(Ordering::Relaxed),
        overflow_buckets_created: OVERFLOW_BUCKETS_CREATED.load(Ordering::Relaxed),
        lookup_hits: LOOKUP_HITS.load(Ordering::Relaxed),
        lookup_misses: LOOKUP_MISSES.load(Ordering::Relaxed),

        probe_buckets_read: PROBE_BUCKETS_READ.load(Ordering::Relaxed),
        probe_pages_read: PROBE_PAGES_READ.load(Ordering::Relaxed),

        scan_pages_read: SCAN_PAGES_READ.load(Ordering::Relaxed),

        pages_loaded: PAGES_LOADED.load(Ordering::Relaxed),
        records_loaded: RECORDS_LOADED.load(Ordering::Relaxed),
    }
}

pub fn reset() {
    INDEX_INSERTS_TOTAL.store(0, Ordering::Relaxed);
    OVERFLOW_BUCKETS_CREATED.store(0, Ordering::Relaxed);
    LOOKUP_HITS.store(0, Ordering::Relaxed);
    LOOKUP_MISSES.store(0, Ordering::Relaxed);

    PROBE_BUCKETS_READ.store(0, Ordering::Relaxed);
    PROBE_PAGES_READ.store(0, Ordering::Relaxed);

    SCAN_PAGES_READ.store(0, Ordering::Relaxed);

    PAGES_LOADED.store(0, Ordering::Relaxed);
    RECORDS_LOADED.store(0, Ordering::Relaxed);
}
