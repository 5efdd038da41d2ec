use anyhow::{anyhow, Context, Result};

use super::cli::TableArgs;
use super::util::open_table;

pub fn exec(args: TableArgs, number: u64, json: bool) -> Result<()> {
    let table = open_table(&args)?;
    let store = table.store();
    let page = store.page(number).ok_or_else(|| {
        anyhow!(
            "page {} out of range (0..{})",
            number,
            store.page_count()
        )
    })?;

    if json {
        let s = serde_json::to_string_pretty(page).context("serialize page")?;
        println!("{}", s);
        return Ok(());
    }

    println!(
        "page {} ({}/{} records)",
        page.number(),
        page.len(),
        page.capacity()
    );
    for (i, r) in page.records().iter().enumerate() {
        println!("  [{}] {}", i, r);
    }
    Ok(())
}
