use std::path::Path;

use quote_core::SymbolListError;
use quote_core::tickers::{parse_symbol_list, read_symbol_list_from_path};

const DEFAULT_SYMBOLS: &str = include_str!("../assets/stocklist.txt");

/// Загружает список тикеров:
/// - `--symbols-file` -> quote_core::tickers::read_symbol_list_from_path
/// - иначе встроенный `assets/stocklist.txt`
///
/// Отсутствие указанного файла - ошибка старта.
pub(crate) fn load_symbols(path: Option<&Path>) -> Result<Vec<String>, SymbolListError> {
    match path {
        Some(p) => read_symbol_list_from_path(p),
        None => Ok(parse_symbol_list(DEFAULT_SYMBOLS.lines().next().unwrap_or(""))),
    }
}
