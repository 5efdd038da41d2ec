//! page/loader - нарезка источника "один ключ на строку" на страницы.
//!
//! Семантика:
//! - Источник читается целиком одним read_to_string (никаких частичных страниц наружу).
//! - Каждая строка: отрезаем перевод строки и пробельные символы по краям.
//! - Пустые после trim строки - тоже валидные записи (не фильтруются).
//! - Номер страницы = число уже созданных страниц (0, 1, 2, ...).

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use std::fs::OpenOptions;
use std::io::Read;
use std::path::Path;

use super::Page;
use crate::metrics;

#[derive(Debug, Clone, Copy)]
pub struct PageLoader {
    page_capacity: usize,
}

impl PageLoader {
    pub fn new(page_capacity: usize) -> Result<Self> {
        if page_capacity == 0 {
            return Err(anyhow!("page_capacity must be > 0"));
        }
        Ok(Self { page_capacity })
    }

    #[inline]
    pub fn page_capacity(&self) -> usize {
        self.page_capacity
    }

    /// Прочитать источник целиком и нарезать на страницы.
    pub fn load<R: Read>(&self, mut source: R) -> Result<Vec<Page>> {
        let mut raw = String::new();
        source
            .read_to_string(&mut raw)
            .context("read page source")?;
        Ok(self.paginate(raw.lines()))
    }

    pub fn load_file(&self, path: &Path) -> Result<Vec<Page>> {
        let f = OpenOptions::new()
            .read(true)
            .open(path)
            .with_context(|| format!("open input {}", path.display()))?;
        let pages = self
            .load(f)
            .with_context(|| format!("load pages from {}", path.display()))?;
        info!(
            "loaded {} page(s) from {} (page_capacity={})",
            pages.len(),
            path.display(),
            self.page_capacity
        );
        Ok(pages)
    }

    /// Нарезать уже прочитанные строки на страницы. Не падает.
    pub fn paginate<I, S>(&self, lines: I) -> Vec<Page>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pages: Vec<Page> = Vec::new();
        let mut records = 0usize;

        for line in lines {
            let key = line.as_ref().trim();

            // Текущая страница отсутствует или полна -> открываем новую
            let need_new = pages.last().map_or(true, Page::is_full);
            if need_new {
                let number = pages.len() as u64;
                debug!("loader: open page {}", number);
                pages.push(Page::new(number, self.page_capacity));
            }

            if let Some(page) = pages.last_mut() {
                let added = page.add(key);
                debug_assert!(added, "fresh or non-full page must accept a record");
            }
            records += 1;
        }

        metrics::record_load(pages.len(), records);
        pages
    }
}

/// Shortcut: PageLoader::new(page_capacity)?.load(source).
pub fn load_pages<R: Read>(source: R, page_capacity: usize) -> Result<Vec<Page>> {
    PageLoader::new(page_capacity)?.load(source)
}
