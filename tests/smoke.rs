use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use StaticHashDB::config::IndexConfig;
use StaticHashDB::PagedTable;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn unique_input(prefix: &str) -> PathBuf {
    let pid = std::process::id();
    let t = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("shtest-{prefix}-{pid}-{t}-{id}.txt"))
}

#[test]
fn smoke_open_lookup_dump_stats() -> Result<()> {
    let path = unique_input("smoke");
    let mut body = String::new();
    for i in 0..1_000 {
        body.push_str(&format!("word{:04}\r\n", i));
    }
    fs::write(&path, body)?;

    let cfg = IndexConfig::default()
        .with_page_capacity(10)
        .with_bucket_capacity(5)
        .auto_buckets(1_000);
    let table = PagedTable::open(&path, &cfg)?;
    fs::remove_file(&path)?;

    // 1) страницы
    assert_eq!(table.store().page_count(), 100);
    assert_eq!(table.store().record_count(), 1_000);

    // 2) lookup -> страница содержит ключ
    let page = table.find("word0537").expect("word0537 must be indexed");
    assert_eq!(page.number(), 53);
    assert!(page.contains("word0537"));
    assert!(table.find("word1000").is_none());

    // 3) структура индекса
    let dump = table.dump();
    assert_eq!(dump.occupied_addresses(), 1_000);
    assert_eq!(dump.keys.len(), 1_000);

    let stats = table.stats();
    assert_eq!(stats.num_buckets, table.config().num_buckets);
    assert_eq!(stats.inserts, 1_000);
    assert!(stats.used_slots > 0);
    assert!(stats.total_buckets >= stats.num_buckets as usize);

    // 4) JSON отчёт сериализуется
    let json = serde_json::to_string(&stats)?;
    assert!(json.contains("\"collisions\""));
    Ok(())
}

#[test]
fn smoke_missing_input_fails() {
    let path = unique_input("missing");
    let err = PagedTable::open(&path, &IndexConfig::default()).unwrap_err();
    assert!(format!("{:#}", err).contains("open input"));
}
