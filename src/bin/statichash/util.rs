use anyhow::{Context, Result};
use log::info;

use StaticHashDB::config::IndexConfig;
use StaticHashDB::hash::HashKind;
use StaticHashDB::page::PageStore;
use StaticHashDB::PagedTable;

use super::cli::TableArgs;

/// ENV/дефолты + флаги поверх.
pub fn config_from_args(args: &TableArgs) -> Result<IndexConfig> {
    let mut cfg = IndexConfig::from_env();
    if let Some(n) = args.page_capacity {
        cfg = cfg.with_page_capacity(n);
    }
    if let Some(n) = args.buckets {
        cfg = cfg.with_num_buckets(n);
    }
    if let Some(n) = args.bucket_capacity {
        cfg = cfg.with_bucket_capacity(n);
    }
    if let Some(ref s) = args.hash {
        let kind = s.parse::<HashKind>().context("parse --hash")?;
        cfg = cfg.with_hash_kind(kind);
    }
    cfg.validate()?;
    Ok(cfg)
}

pub fn open_table(args: &TableArgs) -> Result<PagedTable> {
    let mut cfg = config_from_args(args)?;
    let store = PageStore::open(&args.input, cfg.page_capacity)?;
    if args.auto_buckets {
        cfg = cfg.auto_buckets(store.record_count());
        info!(
            "auto-sized num_buckets={} for {} record(s)",
            cfg.num_buckets,
            store.record_count()
        );
    }
    info!("{}", cfg);
    PagedTable::from_store(store, &cfg)
}
