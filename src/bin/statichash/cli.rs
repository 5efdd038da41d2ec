use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use StaticHashDB::consts::DEFAULT_NUM_BUCKETS;

/// CLI для статического hash-индекса над страницами
#[derive(Parser, Debug)]
#[command(name = "statichash", version, about = "Static hash index over paged keys")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }
}

/// Общие параметры: источник и форма индекса.
/// Не заданные флаги берутся из SH_* ENV или дефолтов.
#[derive(Args, Debug, Clone)]
pub struct TableArgs {
    /// Text file, one key per line
    #[arg(long)]
    pub input: PathBuf,
    /// Records per page
    #[arg(long)]
    pub page_capacity: Option<usize>,
    /// Number of slots
    #[arg(long)]
    pub buckets: Option<u32>,
    /// Page addresses per bucket
    #[arg(long)]
    pub bucket_capacity: Option<usize>,
    /// Slot hash: jenkins|fnv1|xx64 or code 1|2|3
    #[arg(long)]
    pub hash: Option<String>,
    /// Size the slot count from the record count (ignores --buckets)
    #[arg(long, default_value_t = false)]
    pub auto_buckets: bool,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Load pages, build the index and print its chains and key table
    Build {
        #[command(flatten)]
        table: TableArgs,
        /// JSON output (single object)
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Find the page of a key: index lookup vs chain probe vs table scan
    Lookup {
        #[command(flatten)]
        table: TableArgs,
        #[arg(long)]
        key: String,
    },
    /// Print slot usage, collisions and overflow statistics
    Stats {
        #[command(flatten)]
        table: TableArgs,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print one page by number
    Page {
        #[command(flatten)]
        table: TableArgs,
        #[arg(long)]
        number: u64,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print hash values and slots of a key for every hash kind
    Hash {
        #[arg(long)]
        key: String,
        #[arg(long, default_value_t = DEFAULT_NUM_BUCKETS)]
        buckets: u32,
    },
}
