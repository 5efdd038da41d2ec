//! index/bucket - bucket фиксированной ёмкости с адресами страниц.
//!
//! Слоты заполняются строго подряд (append-only, без компактации).
//! Занятость определяет count: слоты [count..] пустые и заполнены NO_PAGE,
//! само значение NO_PAGE в занятом слоте - обычный адрес.

use crate::consts::NO_PAGE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    slots: Vec<u64>,
    count: usize,
}

impl Bucket {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![NO_PAGE; capacity],
            count: 0,
        }
    }

    /// Записать адрес в следующий свободный слот.
    /// Полный bucket -> false, состояние не меняется.
    pub fn add_address(&mut self, addr: u64) -> bool {
        if self.is_full() {
            return false;
        }
        self.slots[self.count] = addr;
        self.count += 1;
        true
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.count >= self.slots.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Занятые слоты в порядке вставки.
    pub fn addresses(&self) -> &[u64] {
        &self.slots[..self.count]
    }

    pub fn contains(&self, addr: u64) -> bool {
        self.addresses().contains(&addr)
    }
}
