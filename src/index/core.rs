//! index/core - статический hash-индекс: num_buckets цепочек bucket'ов + точная таблица.
//!
//! Семантика:
//! - slot = hash(key) mod num_buckets; num_buckets фиксирован на всё время жизни.
//! - Цепочка слота i изначально состоит из одного пустого bucket.
//! - insert: первый не полный bucket цепочки принимает адрес; если все полны -
//!   в конец цепочки добавляется новый bucket (overflow). Вставка не падает.
//! - Точная таблица (KeyMap) всегда перезаписывается: lookup = последний адрес ключа.
//! - Цепочки хранят все вставленные адреса (включая повторные вставки ключа) и
//!   служат для инспекции (dump/stats/probe), а не для lookup.
//!
//! Конкурентный доступ не поддерживается: при использовании из нескольких потоков
//! весь индекс нужно держать под одним эксклюзивным lock на время insert.

use anyhow::{anyhow, Result};
use log::{debug, info};

use super::bucket::Bucket;
use super::keymap::KeyMap;
use crate::config::IndexConfig;
use crate::hash::{slot_of_key, HashKind, HASH_KIND_DEFAULT};
use crate::metrics;
use crate::page::Page;

#[derive(Debug, Clone)]
pub struct HashIndex {
    num_buckets: u32,
    bucket_capacity: usize,
    hash_kind: HashKind,
    chains: Vec<Vec<Bucket>>,
    keys: KeyMap,
    inserts: u64,
}

impl HashIndex {
    pub fn new(num_buckets: u32, bucket_capacity: usize) -> Result<Self> {
        Self::with_hash_kind(num_buckets, bucket_capacity, HASH_KIND_DEFAULT)
    }

    pub fn with_hash_kind(
        num_buckets: u32,
        bucket_capacity: usize,
        hash_kind: HashKind,
    ) -> Result<Self> {
        if num_buckets == 0 {
            return Err(anyhow!("num_buckets must be > 0"));
        }
        if bucket_capacity == 0 {
            return Err(anyhow!("bucket_capacity must be > 0"));
        }
        let chains = (0..num_buckets)
            .map(|_| vec![Bucket::new(bucket_capacity)])
            .collect();
        Ok(Self {
            num_buckets,
            bucket_capacity,
            hash_kind,
            chains,
            keys: KeyMap::new(),
            inserts: 0,
        })
    }

    pub fn from_config(cfg: &IndexConfig) -> Result<Self> {
        Self::with_hash_kind(cfg.num_buckets, cfg.bucket_capacity, cfg.hash_kind)
    }

    #[inline]
    pub fn num_buckets(&self) -> u32 {
        self.num_buckets
    }

    #[inline]
    pub fn bucket_capacity(&self) -> usize {
        self.bucket_capacity
    }

    #[inline]
    pub fn hash_kind(&self) -> HashKind {
        self.hash_kind
    }

    #[inline]
    pub fn slot_of(&self, key: &str) -> u32 {
        slot_of_key(self.hash_kind, key, self.num_buckets)
    }

    /// Записать пару (key, page_address). Всегда успешно.
    pub fn insert(&mut self, key: &str, page_address: u64) {
        let slot = self.slot_of(key);
        let cap = self.bucket_capacity;
        let chain = &mut self.chains[slot as usize];

        let placed = chain.iter_mut().any(|b| b.add_address(page_address));
        if !placed {
            let mut fresh = Bucket::new(cap);
            fresh.add_address(page_address);
            chain.push(fresh);
            metrics::record_overflow_bucket_created();
            debug!(
                "index: overflow in slot {}, chain length now {}",
                slot,
                chain.len()
            );
        }

        self.keys.insert(key, page_address);
        self.inserts += 1;
        metrics::record_index_insert();
    }

    /// Последний вставленный адрес ключа (O(1), без обхода цепочек).
    pub fn lookup(&self, key: &str) -> Option<u64> {
        let found = self.keys.get(key);
        metrics::record_lookup(found.is_some());
        found
    }

    /// Проиндексировать все записи всех страниц (страницы по порядку, записи по порядку).
    pub fn build(&mut self, pages: &[Page]) {
        let before = self.inserts;
        for page in pages {
            for record in page.records() {
                self.insert(record, page.number());
            }
        }
        info!(
            "index built: {} insert(s) from {} page(s), {} distinct key(s), {} slot(s)",
            self.inserts - before,
            pages.len(),
            self.keys.len(),
            self.num_buckets
        );
    }

    /// Цепочка bucket'ов слота; slot вне диапазона -> None.
    pub fn chain(&self, slot: u32) -> Option<&[Bucket]> {
        self.chains.get(slot as usize).map(Vec::as_slice)
    }

    pub fn chain_len(&self, slot: u32) -> usize {
        self.chain(slot).map_or(0, <[Bucket]>::len)
    }

    /// Все цепочки по порядку слотов.
    pub fn chains(&self) -> impl Iterator<Item = (u32, &[Bucket])> + '_ {
        self.chains
            .iter()
            .enumerate()
            .map(|(i, c)| (i as u32, c.as_slice()))
    }

    pub(crate) fn key_map(&self) -> &KeyMap {
        &self.keys
    }

    /// Число различных ключей в точной таблице.
    #[inline]
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Число вызовов insert (включая повторные ключи).
    #[inline]
    pub fn insert_count(&self) -> u64 {
        self.inserts
    }
}
