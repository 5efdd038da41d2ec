use anyhow::Result;

use StaticHashDB::config::IndexConfig;
use StaticHashDB::index::HashIndex;
use StaticHashDB::page::PageStore;
use StaticHashDB::PagedTable;

fn words(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("w{:04}", i)).collect()
}

#[test]
fn probe_and_scan_agree_with_lookup_on_unique_keys() -> Result<()> {
    let cfg = IndexConfig::default()
        .with_page_capacity(7)
        .with_num_buckets(13)
        .with_bucket_capacity(2);
    let lines = words(300);
    let t = PagedTable::from_lines(&lines, &cfg)?;

    for w in &lines {
        let expected = t.lookup(w);
        assert!(expected.is_some());
        let probe = t.probe(w);
        let scan = t.table_scan(w);
        assert_eq!(probe.page, expected, "probe mismatch for {w}");
        assert_eq!(scan.page, expected, "scan mismatch for {w}");
        assert!(probe.buckets_read >= 1);
        assert!(probe.pages_read >= 1);
        assert_eq!(scan.pages_read, expected.map_or(0, |p| p + 1));
    }

    let miss = t.probe("absent");
    assert_eq!(miss.page, None);
    assert_eq!(miss.buckets_read, t.index().chain_len(t.index().slot_of("absent")) as u64);
    Ok(())
}

#[test]
fn probe_reads_each_candidate_page_once() -> Result<()> {
    // Все ключи на одной странице -> в цепочке один и тот же адрес
    let store = PageStore::from_lines(["a", "b", "c", "d"], 4)?;
    let mut idx = HashIndex::new(1, 2)?;
    idx.build(store.pages());

    assert_eq!(idx.candidates("a"), vec![0]);
    let p = idx.probe("zzz", &store);
    assert_eq!(p.page, None);
    assert_eq!(p.buckets_read, 2);
    assert_eq!(p.pages_read, 1);
    Ok(())
}

#[test]
fn duplicate_key_probe_is_earliest_lookup_is_latest() -> Result<()> {
    let cfg = IndexConfig::default()
        .with_page_capacity(2)
        .with_num_buckets(5)
        .with_bucket_capacity(3);
    // "dup" на страницах 0 и 2
    let t = PagedTable::from_lines(["dup", "x", "y", "z", "dup"], &cfg)?;

    assert_eq!(t.lookup("dup"), Some(2));
    assert_eq!(t.probe("dup").page, Some(0));
    assert_eq!(t.table_scan("dup").page, Some(0));
    assert_eq!(t.index().candidates("dup").first(), Some(&0));
    assert_eq!(t.index().key_count(), 4);
    assert_eq!(t.index().insert_count(), 5);
    Ok(())
}

#[test]
fn probe_against_foreign_store_finds_nothing() -> Result<()> {
    let mut idx = HashIndex::new(3, 2)?;
    idx.insert("ghost", 42);
    let store = PageStore::from_lines(["ghost"], 1)?;
    let p = idx.probe("ghost", &store);
    assert_eq!(p.page, None);
    assert_eq!(p.pages_read, 1);
    Ok(())
}
