//! index/probe - поиск через цепочку слота (а не через точную таблицу).
//!
//! Цепочка хранит только адреса страниц, поэтому ключ сравнивается целиком на
//! самих страницах: идём по bucket'ам слота по порядку, каждую новую страницу-кандидата
//! читаем из PageStore и проверяем наличие ключа.
//!
//! Отличие от lookup: при повторных вставках одного ключа probe вернёт самую раннюю
//! страницу в порядке цепочки, а lookup - последнюю вставленную.

use std::collections::HashSet;

use super::core::HashIndex;
use crate::metrics;
use crate::page::PageStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub page: Option<u64>,
    /// Прочитано bucket'ов цепочки.
    pub buckets_read: u64,
    /// Прочитано различных страниц-кандидатов.
    pub pages_read: u64,
}

impl HashIndex {
    /// Различные адреса в цепочке слота ключа, в порядке цепочки.
    pub fn candidates(&self, key: &str) -> Vec<u64> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for bucket in self.chain(self.slot_of(key)).unwrap_or(&[]) {
            for &addr in bucket.addresses() {
                if seen.insert(addr) {
                    out.push(addr);
                }
            }
        }
        out
    }

    pub fn probe(&self, key: &str, store: &PageStore) -> ProbeOutcome {
        let mut seen = HashSet::new();
        let mut buckets_read = 0u64;
        let mut pages_read = 0u64;
        let mut found = None;

        'chain: for bucket in self.chain(self.slot_of(key)).unwrap_or(&[]) {
            buckets_read += 1;
            for &addr in bucket.addresses() {
                if !seen.insert(addr) {
                    continue;
                }
                pages_read += 1;
                // Адрес без страницы в store (чужой store) - просто кандидат мимо
                if store.page(addr).is_some_and(|p| p.contains(key)) {
                    found = Some(addr);
                    break 'chain;
                }
            }
        }

        metrics::record_probe(buckets_read, pages_read);
        ProbeOutcome {
            page: found,
            buckets_read,
            pages_read,
        }
    }
}
