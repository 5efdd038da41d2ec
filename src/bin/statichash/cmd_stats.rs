use anyhow::{Context, Result};

use StaticHashDB::metrics;

use super::cli::TableArgs;
use super::util::open_table;

pub fn exec(args: TableArgs, json: bool) -> Result<()> {
    let table = open_table(&args)?;
    let stats = table.stats();

    if json {
        let s = serde_json::to_string_pretty(&stats).context("serialize index stats")?;
        println!("{}", s);
        return Ok(());
    }

    let store = table.store();
    println!("input            = {}", args.input.display());
    println!("page_capacity    = {}", store.page_capacity());
    println!("pages            = {}", store.page_count());
    println!("records          = {}", store.record_count());
    println!("hash             = {}", table.index().hash_kind());
    println!("{}", stats);

    let m = metrics::snapshot();
    println!("overflow_created = {}", m.overflow_buckets_created);
    Ok(())
}
