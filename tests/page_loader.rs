use anyhow::Result;
use std::io::{self, Read};

use StaticHashDB::page::{load_pages, Page, PageLoader, PageStore};

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
    }
}

#[test]
fn page_add_respects_capacity() {
    let mut p = Page::new(0, 2);
    assert!(p.add("a"));
    assert!(p.add("a")); // дубликаты допустимы
    assert!(p.is_full());
    assert!(!p.add("b"));
    assert_eq!(p.len(), 2);
    assert_eq!(p.records(), &["a".to_string(), "a".to_string()]);
    assert_eq!(p.record(1), Some("a"));
    assert_eq!(p.record(2), None);
    assert_eq!(p.position_of("a"), Some(0));
    assert!(!p.contains("b"));
}

#[test]
fn twelve_lines_make_pages_of_5_5_2() -> Result<()> {
    let src = "ana\nbia\ncid\ndan\neva\nfabio\ngil\nhugo\nivo\njoao\nkai\nlia\n";
    let pages = load_pages(src.as_bytes(), 5)?;

    assert_eq!(pages.len(), 3);
    let sizes: Vec<usize> = pages.iter().map(Page::len).collect();
    assert_eq!(sizes, vec![5, 5, 2]);
    let numbers: Vec<u64> = pages.iter().map(Page::number).collect();
    assert_eq!(numbers, vec![0, 1, 2]);
    assert_eq!(pages[1].record(0), Some("fabio"));
    assert_eq!(pages[2].records(), &["kai".to_string(), "lia".to_string()]);
    Ok(())
}

#[test]
fn lines_are_trimmed_and_blank_lines_kept() -> Result<()> {
    let src = "  alpha \r\nbeta\r\n\r\n\tgamma\n";
    let pages = PageLoader::new(10)?.load(src.as_bytes())?;
    assert_eq!(pages.len(), 1);
    assert_eq!(
        pages[0].records(),
        &[
            "alpha".to_string(),
            "beta".to_string(),
            "".to_string(),
            "gamma".to_string()
        ]
    );
    Ok(())
}

#[test]
fn empty_source_gives_no_pages() -> Result<()> {
    let pages = load_pages("".as_bytes(), 3)?;
    assert!(pages.is_empty());
    Ok(())
}

#[test]
fn zero_capacity_is_rejected() {
    assert!(PageLoader::new(0).is_err());
    assert!(load_pages("a\n".as_bytes(), 0).is_err());
    assert!(PageStore::from_lines(["a"], 0).is_err());
}

#[test]
fn read_failure_surfaces_as_error() {
    let err = PageLoader::new(4)
        .and_then(|l| l.load(FailingReader))
        .unwrap_err();
    assert!(format!("{:#}", err).contains("disk on fire"));
}

#[test]
fn missing_file_is_an_error() -> Result<()> {
    let loader = PageLoader::new(4)?;
    let path = std::env::temp_dir().join("statichash-definitely-missing-input.txt");
    assert!(loader.load_file(&path).is_err());
    Ok(())
}

#[test]
fn load_file_reads_whole_file() -> Result<()> {
    let path = std::env::temp_dir().join(format!(
        "statichash-loader-{}-{}.txt",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ));
    std::fs::write(&path, "one\ntwo\nthree\n")?;
    let store = PageStore::open(&path, 2)?;
    std::fs::remove_file(&path)?;

    assert_eq!(store.page_count(), 2);
    assert_eq!(store.record_count(), 3);
    assert_eq!(store.last_page().map(Page::number), Some(1));
    Ok(())
}

#[test]
fn no_page_exceeds_capacity() -> Result<()> {
    for cap in 1..8 {
        let lines: Vec<String> = (0..37).map(|i| format!("w{}", i)).collect();
        let loader = PageLoader::new(cap)?;
        let pages = loader.paginate(&lines);
        assert_eq!(pages.len(), 37usize.div_ceil(cap));
        for (i, p) in pages.iter().enumerate() {
            assert!(p.len() <= cap);
            assert_eq!(p.number(), i as u64);
            // все страницы кроме последней заполнены
            if i + 1 < pages.len() {
                assert!(p.is_full());
            }
        }
        let total: usize = pages.iter().map(Page::len).sum();
        assert_eq!(total, 37);
    }
    Ok(())
}

#[test]
fn store_page_access_and_table_scan() -> Result<()> {
    let store = PageStore::from_lines(["a", "b", "c", "d", "e", "c"], 2)?;
    assert_eq!(store.page_count(), 3);
    assert_eq!(store.page(1).and_then(|p| p.record(0)), Some("c"));
    assert!(store.page(3).is_none());

    let hit = store.table_scan("d");
    assert_eq!(hit.page, Some(1));
    assert_eq!(hit.pages_read, 2);

    // первое вхождение выигрывает
    assert_eq!(store.table_scan("c").page, Some(1));

    let miss = store.table_scan("zz");
    assert_eq!(miss.page, None);
    assert_eq!(miss.pages_read, 3);
    Ok(())
}

#[test]
fn store_rejects_inconsistent_pages() {
    let mut big = Page::new(0, 3);
    big.add("a");
    big.add("b");
    big.add("c");
    assert!(PageStore::from_pages(2, vec![big]).is_err());

    let p1 = Page::new(1, 2);
    let p0 = Page::new(0, 2);
    assert!(PageStore::from_pages(2, vec![p1, p0]).is_err());
}

#[test]
fn store_rejects_pages_of_another_capacity() -> Result<()> {
    // помещается по числу записей, но ёмкость другая
    let mut wide = Page::new(0, 10);
    wide.add("a");
    wide.add("b");
    let err = PageStore::from_pages(2, vec![wide]).unwrap_err();
    assert!(format!("{err}").contains("capacity 10"), "{err}");

    let mut p0 = Page::new(0, 2);
    p0.add("a");
    p0.add("b");
    let store = PageStore::from_pages(2, vec![p0, Page::new(1, 2)])?;
    assert!(store.pages()[0].is_full());
    assert_eq!(store.page_count(), 2);
    Ok(())
}

#[test]
fn page_serializes_to_json() -> Result<()> {
    let pages = load_pages("ana\nbia\ncid\n".as_bytes(), 2)?;
    let v = serde_json::to_value(&pages[1])?;
    assert_eq!(
        v,
        serde_json::json!({ "number": 1, "capacity": 2, "records": ["cid"] })
    );
    Ok(())
}
