#![allow(non_snake_case)]

// Базовые модули
pub mod consts;
pub mod hash;
pub mod util;
pub mod config;
pub mod metrics;

pub mod page;   // src/page/{mod,loader,store}.rs
pub mod index;  // src/index/{mod,bucket,keymap,core,dump,stats,probe}.rs

// Страницы + индекс вместе
pub mod table;

// Удобные реэкспорты
pub use config::{IndexBuilder, IndexConfig};
pub use hash::{hash64, jenkins_one_at_a_time, slot_of_key, HashKind};
pub use index::{Bucket, HashIndex, IndexDump, IndexStats, ProbeOutcome};
pub use page::{load_pages, Page, PageLoader, PageStore, ScanOutcome};
pub use table::PagedTable;
