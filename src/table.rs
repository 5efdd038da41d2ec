//! table - страницы + индекс, собранные из одного источника.
//!
//! PagedTable::load/open: загрузить страницы (PageLoader), затем проиндексировать
//! каждую пару (record, page_number) в HashIndex.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use crate::config::IndexConfig;
use crate::index::{HashIndex, IndexDump, IndexStats, ProbeOutcome};
use crate::page::{Page, PageStore, ScanOutcome};

#[derive(Debug, Clone)]
pub struct PagedTable {
    cfg: IndexConfig,
    store: PageStore,
    index: HashIndex,
}

impl PagedTable {
    /// Собрать таблицу из готового набора страниц.
    pub fn from_store(store: PageStore, cfg: &IndexConfig) -> Result<Self> {
        cfg.validate()?;
        let mut index = HashIndex::from_config(cfg)?;
        index.build(store.pages());
        Ok(Self {
            cfg: cfg.clone(),
            store,
            index,
        })
    }

    pub fn load<R: Read>(source: R, cfg: &IndexConfig) -> Result<Self> {
        cfg.validate()?;
        let store = PageStore::load(source, cfg.page_capacity)?;
        Self::from_store(store, cfg)
    }

    pub fn open(path: &Path, cfg: &IndexConfig) -> Result<Self> {
        cfg.validate()?;
        let store = PageStore::open(path, cfg.page_capacity)
            .with_context(|| format!("open table {}", path.display()))?;
        Self::from_store(store, cfg)
    }

    pub fn from_lines<I, S>(lines: I, cfg: &IndexConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        cfg.validate()?;
        let store = PageStore::from_lines(lines, cfg.page_capacity)?;
        Self::from_store(store, cfg)
    }

    pub fn config(&self) -> &IndexConfig {
        &self.cfg
    }

    pub fn store(&self) -> &PageStore {
        &self.store
    }

    pub fn index(&self) -> &HashIndex {
        &self.index
    }

    /// Номер страницы ключа по точной таблице.
    pub fn lookup(&self, key: &str) -> Option<u64> {
        self.index.lookup(key)
    }

    /// lookup + чтение страницы.
    pub fn find(&self, key: &str) -> Option<&Page> {
        self.lookup(key).and_then(|n| self.store.page(n))
    }

    pub fn table_scan(&self, key: &str) -> ScanOutcome {
        self.store.table_scan(key)
    }

    pub fn probe(&self, key: &str) -> ProbeOutcome {
        self.index.probe(key, &self.store)
    }

    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }

    pub fn dump(&self) -> IndexDump {
        self.index.dump()
    }
}
