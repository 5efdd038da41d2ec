//! index/dump - детерминированный снимок структуры индекса.
//!
//! dump() ничего не меняет и возвращает данные; печать - забота вызывающего:
//! - Display - человекочитаемый текст;
//! - serde::Serialize - JSON (см. CLI `build --json`).

use serde::Serialize;
use std::fmt;

use super::core::HashIndex;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketDump {
    /// Позиция bucket в цепочке слота.
    pub bucket: usize,
    /// Занятые адреса в порядке вставки.
    pub addresses: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotDump {
    pub slot: u32,
    pub buckets: Vec<BucketDump>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyEntry {
    pub key: String,
    pub page: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexDump {
    pub num_buckets: u32,
    pub bucket_capacity: usize,
    pub hash_kind: String,
    pub slots: Vec<SlotDump>,
    pub keys: Vec<KeyEntry>,
}

impl IndexDump {
    /// Сумма занятых слотов по всем bucket'ам всех цепочек.
    pub fn occupied_addresses(&self) -> usize {
        self.slots
            .iter()
            .flat_map(|s| s.buckets.iter())
            .map(|b| b.addresses.len())
            .sum()
    }
}

impl HashIndex {
    pub fn dump(&self) -> IndexDump {
        let slots = self
            .chains()
            .map(|(slot, chain)| SlotDump {
                slot,
                buckets: chain
                    .iter()
                    .enumerate()
                    .map(|(j, b)| BucketDump {
                        bucket: j,
                        addresses: b.addresses().to_vec(),
                    })
                    .collect(),
            })
            .collect();

        let keys = self
            .key_map()
            .iter()
            .map(|(key, page)| KeyEntry {
                key: key.to_string(),
                page,
            })
            .collect();

        IndexDump {
            num_buckets: self.num_buckets(),
            bucket_capacity: self.bucket_capacity(),
            hash_kind: self.hash_kind().name().to_string(),
            slots,
            keys,
        }
    }
}

impl fmt::Display for IndexDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "index: {} slot(s), bucket_capacity={}, hash={}",
            self.num_buckets, self.bucket_capacity, self.hash_kind
        )?;
        for s in &self.slots {
            writeln!(f, "slot {}:", s.slot)?;
            for b in &s.buckets {
                writeln!(f, "  bucket {}: {:?}", b.bucket, b.addresses)?;
            }
        }
        writeln!(f)?;
        writeln!(f, "keys -> pages ({}):", self.keys.len())?;
        for e in &self.keys {
            writeln!(f, "  '{}' -> page {}", e.key, e.page)?;
        }
        Ok(())
    }
}
