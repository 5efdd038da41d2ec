//! page/store - упорядоченный набор страниц одной загрузки.
//!
//! Страницы хранятся по возрастанию номера; доступ по номеру - бинарный поиск.
//! table_scan - последовательный поиск ключа без индекса, со счётчиком прочитанных страниц.

use anyhow::{anyhow, Result};
use std::io::Read;
use std::path::Path;

use super::{Page, PageLoader};
use crate::metrics;

/// Результат последовательного скана.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Номер первой страницы, содержащей ключ.
    pub page: Option<u64>,
    /// Сколько страниц прочитано (включая найденную).
    pub pages_read: u64,
}

#[derive(Debug, Clone)]
pub struct PageStore {
    page_capacity: usize,
    pages: Vec<Page>,
}

impl PageStore {
    /// Страницы должны идти по строго возрастающим номерам и иметь ёмкость ровно page_capacity.
    pub fn from_pages(page_capacity: usize, pages: Vec<Page>) -> Result<Self> {
        if page_capacity == 0 {
            return Err(anyhow!("page_capacity must be > 0"));
        }
        for (i, p) in pages.iter().enumerate() {
            if p.capacity() != page_capacity {
                return Err(anyhow!(
                    "page {} has capacity {} != page_capacity {}",
                    p.number(),
                    p.capacity(),
                    page_capacity
                ));
            }
            if i > 0 && pages[i - 1].number() >= p.number() {
                return Err(anyhow!(
                    "page numbers must be increasing: {} after {}",
                    p.number(),
                    pages[i - 1].number()
                ));
            }
        }
        Ok(Self {
            page_capacity,
            pages,
        })
    }

    pub fn load<R: Read>(source: R, page_capacity: usize) -> Result<Self> {
        let loader = PageLoader::new(page_capacity)?;
        let pages = loader.load(source)?;
        Ok(Self {
            page_capacity,
            pages,
        })
    }

    pub fn open(path: &Path, page_capacity: usize) -> Result<Self> {
        let loader = PageLoader::new(page_capacity)?;
        let pages = loader.load_file(path)?;
        Ok(Self {
            page_capacity,
            pages,
        })
    }

    pub fn from_lines<I, S>(lines: I, page_capacity: usize) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let loader = PageLoader::new(page_capacity)?;
        Ok(Self {
            page_capacity,
            pages: loader.paginate(lines),
        })
    }

    #[inline]
    pub fn page_capacity(&self) -> usize {
        self.page_capacity
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, number: u64) -> Option<&Page> {
        self.pages
            .binary_search_by_key(&number, Page::number)
            .ok()
            .map(|i| &self.pages[i])
    }

    pub fn last_page(&self) -> Option<&Page> {
        self.pages.last()
    }

    #[inline]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn record_count(&self) -> usize {
        self.pages.iter().map(Page::len).sum()
    }

    /// Последовательный поиск: страница за страницей, первое вхождение выигрывает.
    pub fn table_scan(&self, key: &str) -> ScanOutcome {
        let mut pages_read = 0u64;
        let mut found = None;
        for page in &self.pages {
            pages_read += 1;
            if page.contains(key) {
                found = Some(page.number());
                break;
            }
        }
        metrics::record_scan(pages_read);
        ScanOutcome {
            page: found,
            pages_read,
        }
    }
}
