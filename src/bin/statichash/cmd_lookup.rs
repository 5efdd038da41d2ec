use anyhow::Result;

use super::cli::TableArgs;
use super::util::open_table;

pub fn exec(args: TableArgs, key: String) -> Result<()> {
    let table = open_table(&args)?;

    match table.find(&key) {
        Some(page) => {
            println!("FOUND '{}' in page {}", key, page.number());
            for r in page.records() {
                println!("  {}", r);
            }
        }
        None => println!("NOT FOUND '{}'", key),
    }

    // Сравнение путей доступа
    let probe = table.probe(&key);
    let scan = table.table_scan(&key);
    println!(
        "index lookup: page={} (slot {})",
        fmt_page(table.lookup(&key)),
        table.index().slot_of(&key)
    );
    println!(
        "chain probe:  page={} buckets_read={} pages_read={}",
        fmt_page(probe.page),
        probe.buckets_read,
        probe.pages_read
    );
    println!(
        "table scan:   page={} pages_read={}",
        fmt_page(scan.page),
        scan.pages_read
    );
    Ok(())
}

fn fmt_page(p: Option<u64>) -> String {
    p.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string())
}
