use anyhow::Result;
use env_logger::{Builder, Env};
use log::error;

mod cli;
mod util;
mod cmd_build;
mod cmd_lookup;
mod cmd_stats;
mod cmd_page;
mod cmd_hash;

fn init_logger() {
    // Уровень берём из RUST_LOG, иначе дефолт - info.
    // Пример: RUST_LOG=debug statichash build --input words.txt
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    init_logger();

    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = cli::Cli::parse_args();
    match cli.cmd {
        cli::Cmd::Build { table, json } =>
            cmd_build::exec(table, json),

        cli::Cmd::Lookup { table, key } =>
            cmd_lookup::exec(table, key),

        cli::Cmd::Stats { table, json } =>
            cmd_stats::exec(table, json),

        cli::Cmd::Page { table, number, json } =>
            cmd_page::exec(table, number, json),

        cli::Cmd::Hash { key, buckets } =>
            cmd_hash::exec(key, buckets),
    }
}
