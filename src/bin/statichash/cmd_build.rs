use anyhow::{Context, Result};

use super::cli::TableArgs;
use super::util::open_table;

pub fn exec(args: TableArgs, json: bool) -> Result<()> {
    let table = open_table(&args)?;
    let dump = table.dump();
    if json {
        let s = serde_json::to_string_pretty(&dump).context("serialize index dump")?;
        println!("{}", s);
    } else {
        print!("{}", dump);
    }
    Ok(())
}
