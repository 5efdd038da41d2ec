//! index/stats - распределение и коллизии.
//!
//! - collisions: по каждому слоту - число различных ключей сверх первого.
//! - overflow_buckets: bucket'ы сверх головного в каждой цепочке.
//! - load_factor: занятые адресные слоты / (num_buckets * bucket_capacity).

use serde::Serialize;
use std::fmt;

use super::core::HashIndex;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexStats {
    pub num_buckets: u32,
    pub bucket_capacity: usize,
    pub inserts: u64,
    pub distinct_keys: usize,
    pub used_slots: u32,
    pub total_buckets: usize,
    pub overflow_buckets: usize,
    pub occupied_addresses: usize,
    pub collisions: usize,
    pub longest_chain: usize,
    pub load_factor: f64,
}

impl IndexStats {
    pub fn collision_rate(&self) -> f64 {
        if self.inserts == 0 {
            0.0
        } else {
            self.collisions as f64 / self.inserts as f64
        }
    }

    pub fn overflow_rate(&self) -> f64 {
        if self.inserts == 0 {
            0.0
        } else {
            self.overflow_buckets as f64 / self.inserts as f64
        }
    }
}

impl HashIndex {
    pub fn stats(&self) -> IndexStats {
        let mut used_slots = 0u32;
        let mut total_buckets = 0usize;
        let mut occupied = 0usize;
        let mut longest = 0usize;

        for (_, chain) in self.chains() {
            let filled: usize = chain.iter().map(|b| b.len()).sum();
            if filled > 0 {
                used_slots += 1;
            }
            occupied += filled;
            total_buckets += chain.len();
            longest = longest.max(chain.len());
        }

        // различные ключи на слот
        let mut keys_per_slot = vec![0usize; self.num_buckets() as usize];
        for key in self.key_map().keys() {
            keys_per_slot[self.slot_of(key) as usize] += 1;
        }
        let collisions = keys_per_slot.iter().map(|&n| n.saturating_sub(1)).sum();

        let raw_capacity = self.num_buckets() as usize * self.bucket_capacity();

        IndexStats {
            num_buckets: self.num_buckets(),
            bucket_capacity: self.bucket_capacity(),
            inserts: self.insert_count(),
            distinct_keys: self.key_count(),
            used_slots,
            total_buckets,
            overflow_buckets: total_buckets - self.num_buckets() as usize,
            occupied_addresses: occupied,
            collisions,
            longest_chain: longest,
            load_factor: occupied as f64 / raw_capacity as f64,
        }
    }
}

impl fmt::Display for IndexStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "slots            = {}", self.num_buckets)?;
        writeln!(f, "bucket_capacity  = {}", self.bucket_capacity)?;
        writeln!(f, "inserts          = {}", self.inserts)?;
        writeln!(f, "distinct_keys    = {}", self.distinct_keys)?;
        writeln!(f, "used_slots       = {}", self.used_slots)?;
        writeln!(f, "total_buckets    = {}", self.total_buckets)?;
        writeln!(
            f,
            "overflow_buckets = {} ({:.2}%)",
            self.overflow_buckets,
            self.overflow_rate() * 100.0
        )?;
        writeln!(
            f,
            "collisions       = {} ({:.2}%)",
            self.collisions,
            self.collision_rate() * 100.0
        )?;
        writeln!(f, "longest_chain    = {}", self.longest_chain)?;
        write!(f, "load_factor      = {:.3}", self.load_factor)
    }
}
