//! index/keymap - точная таблица key -> page address.
//!
//! Порядок итерации = порядок первой вставки ключа; перезапись сохраняет позицию
//! и обновляет адрес (last write wins).

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    positions: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl KeyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Вставить/перезаписать. Возвращает предыдущий адрес, если ключ уже был.
    pub fn insert(&mut self, key: &str, addr: u64) -> Option<u64> {
        if let Some(&pos) = self.positions.get(key) {
            let prev = std::mem::replace(&mut self.entries[pos].1, addr);
            return Some(prev);
        }
        self.positions.insert(key.to_string(), self.entries.len());
        self.entries.push((key.to_string(), addr));
        None
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.positions.get(key).map(|&pos| self.entries[pos].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.entries.iter().map(|(k, a)| (k.as_str(), *a))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}
