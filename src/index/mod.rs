//! index - статический hash-индекс над страницами.
//!
//! Разделение по подмодулям:
//! - bucket.rs - Bucket: фиксированный массив адресов страниц.
//! - keymap.rs - KeyMap: точная таблица key -> address (порядок первой вставки).
//! - core.rs   - HashIndex: цепочки bucket'ов по слотам, insert/lookup/build.
//! - dump.rs   - IndexDump: снимок цепочек и таблицы (текст/JSON).
//! - stats.rs  - IndexStats: коллизии, overflow, заполненность.
//! - probe.rs  - поиск через цепочку с подсчётом чтений.

pub mod bucket;
pub mod core;
pub mod dump;
pub mod keymap;
pub mod probe;
pub mod stats;

pub use bucket::Bucket;
pub use self::core::HashIndex;
pub use dump::{BucketDump, IndexDump, KeyEntry, SlotDump};
pub use keymap::KeyMap;
pub use probe::ProbeOutcome;
pub use stats::IndexStats;
