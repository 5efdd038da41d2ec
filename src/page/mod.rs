//! page - страницы записей фиксированной ёмкости.
//!
//! Разделение по подмодулям:
//! - mod.rs    - Page: упорядоченный контейнер ключей с лимитом capacity.
//! - loader.rs - PageLoader: нарезка входных строк на страницы.
//! - store.rs  - PageStore: упорядоченный набор страниц, доступ по номеру, table scan.

pub mod loader;
pub mod store;

pub use loader::{load_pages, PageLoader};
pub use store::{PageStore, ScanOutcome};

use serde::Serialize;

/// Страница: номер (в порядке создания), ёмкость и записи в порядке вставки.
///
/// Инвариант: records.len() <= capacity. Дубликаты допустимы.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    number: u64,
    capacity: usize,
    records: Vec<String>,
}

impl Page {
    pub fn new(number: u64, capacity: usize) -> Self {
        Self {
            number,
            capacity,
            records: Vec::with_capacity(capacity),
        }
    }

    /// Добавить запись, если есть место. Полная страница -> false, без изменений.
    pub fn add<S: Into<String>>(&mut self, record: S) -> bool {
        if self.is_full() {
            return false;
        }
        self.records.push(record.into());
        true
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    #[inline]
    pub fn number(&self) -> u64 {
        self.number
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[String] {
        &self.records
    }

    /// Запись по позиции; вне диапазона -> None.
    pub fn record(&self, index: usize) -> Option<&str> {
        self.records.get(index).map(String::as_str)
    }

    /// Позиция первого вхождения ключа.
    pub fn position_of(&self, key: &str) -> Option<usize> {
        self.records.iter().position(|r| r == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position_of(key).is_some()
    }
}
