use std::time::Duration;

use crate::constants::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_QUOTE_URL, DEFAULT_REQUEST_TIMEOUT};
use crate::parser::ParserBackend;

/// Настройки сервиса котировок
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteConfig {
    /// Базовый адрес сервиса (без параметра `s`)
    pub base_url: String,
    /// Таймаут соединения
    pub connect_timeout: Duration,
    /// Таймаут всего запроса
    pub request_timeout: Duration,
    /// Бэкенд разбора документа
    pub parser: ParserBackend,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_QUOTE_URL.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            parser: ParserBackend::default(),
        }
    }
}
