//! # quote-core
//!
//! Получение одной котировки по тикеру: запрос к сервису, нормализация
//! CSV-строки в документ, извлечение цены `ask`.
//!
//! Этот крейт содержит:
//!
//! - [`transport`] — HTTP запрос и чтение одной строки ответа
//! - [`normalize`] — разбор CSV-строки в [`QuoteDocument`]
//! - [`document`] — структура документа котировки
//! - [`parser`] — бэкенды извлечения цены из документа
//! - [`service`] — фасад `get_quote`
//! - [`tickers`] — чтение списка тикеров (`AAPL:MSFT:GOOG`)
//! - [`error`] — типы ошибок, которые возвращают компоненты `quote-core`
//!
//! ## Пример: нормализация и извлечение цены
//!
//! ```rust
//! use quote_core::normalize::normalize;
//! use quote_core::parser::{DocumentParser, TaggedPriceParser};
//!
//! let line = r#""ABC",12.34,"1/1/2024","9:30am",+0.5,12.00,12.50,11.80,100000"#;
//! let doc = normalize(line).unwrap();
//! assert_eq!(doc.symbol, "ABC");
//! assert_eq!(TaggedPriceParser.extract_ask_price(&doc).unwrap(), 12.34);
//! ```
//!
//! ## Пример: чтение тикеров
//!
//! ```rust
//! use quote_core::tickers::parse_symbol_list;
//!
//! assert_eq!(parse_symbol_list("AAPL:MSFT:GOOG"), vec!["AAPL", "MSFT", "GOOG"]);
//! ```
//!
//! ## Дизайн
//!
//! Конвейер линейный и синхронный, состояния между вызовами нет.
//! Крейт не логирует и не делает ретраев: ошибка любой стадии
//! отдаётся вызывающему как есть.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Настройки сервиса.
pub mod config;

/// Документ котировки.
pub mod document;

/// Ошибки `quote-core`.
pub mod error;

/// Нормализация CSV-строки.
pub mod normalize;

/// Бэкенды разбора документа.
pub mod parser;

/// Фасад.
pub mod service;

/// Чтение списка тикеров из текста и файлов.
pub mod tickers;

/// Сетевой транспорт.
pub mod transport;

/// Общие константы
mod constants;
pub use constants::{
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_QUOTE_URL, DEFAULT_REQUEST_TIMEOUT, NO_ERROR_MESSAGE,
    SYMBOL_QUERY_PARAM,
};

// --- Re-exports (публичный фасад API) ---

pub use crate::config::QuoteConfig;
pub use crate::document::{PriceKind, QuoteDocument, TaggedPrice, Timestamp};
pub use crate::error::{MalformedLineError, QuoteError, SymbolListError, TransportError};
pub use crate::parser::{DocumentParser, JsonTreeParser, ParserBackend, TaggedPriceParser};
pub use crate::service::QuoteService;
pub use crate::transport::{HttpTransport, QuoteTransport};
