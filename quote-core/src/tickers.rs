use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::SymbolListError;

/// Парсит список тикеров вида `AAPL:MSFT:GOOG`.
/// Правила:
/// - разделитель: двоеточие
/// - trim пробелов
/// - пустые элементы игнорируются
/// - порядок сохраняется
pub fn parse_symbol_list(raw: &str) -> Vec<String> {
    raw.split(':')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Чтение списка: берётся только первая строка ресурса.
/// Пустой ресурс даёт пустой список.
pub fn read_symbol_list<R: io::Read>(reader: R) -> io::Result<Vec<String>> {
    let mut buf = BufReader::new(reader);
    let mut line = String::new();
    buf.read_line(&mut line)?;

    Ok(parse_symbol_list(&line))
}

/// Чтение списка из файла. Отсутствие файла - отдельная ошибка.
pub fn read_symbol_list_from_path(path: impl AsRef<Path>) -> Result<Vec<String>, SymbolListError> {
    let path = path.as_ref();

    let f = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SymbolListError::NotFound {
            path: path.to_path_buf(),
        },
        _ => SymbolListError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    read_symbol_list(f).map_err(|e| SymbolListError::Read {
        path: path.to_path_buf(),
        source: e,
    })
}
