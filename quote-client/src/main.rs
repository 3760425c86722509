//! Точка входа `quote-client`.
//!
//! Жизненный цикл:
//! - парсинг CLI и загрузка списка тикеров
//! - сборка `QuoteService` (бэкенд парсера выбирается один раз)
//! - один запрос по `--symbol` либо интерактивный цикл по stdin

mod cli;
mod shell;
mod tickers;

use std::io;

use anyhow::Context;
use clap::Parser;
use log::info;
use quote_core::QuoteService;

fn main() -> anyhow::Result<()> {
    // Логи через RUST_LOG=info/debug
    env_logger::init();

    let args = cli::Args::parse();
    let cfg = args.quote_config()?;

    let symbols = tickers::load_symbols(args.symbols_file.as_deref())
        .context("failed to load stock symbol list")?;

    let service = QuoteService::from_config(&cfg)?;

    info!(
        "Starting quote-client: url={}, parser={}, symbols={}",
        cfg.base_url,
        cfg.parser,
        symbols.len()
    );

    let mut out = io::stdout().lock();

    match &args.symbol {
        Some(symbol) => {
            let symbol = symbol.trim().to_ascii_uppercase();
            shell::quote_once(&service, &symbol, args.document, &mut out)?;
        }
        None => {
            let input = io::stdin().lock();
            shell::run_interactive(&service, &symbols, args.document, input, &mut out)?;
        }
    }

    Ok(())
}
