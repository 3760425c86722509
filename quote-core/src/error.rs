use std::path::PathBuf;

use thiserror::Error;

/// Верхнеуровневый тип ошибок крейта.
///
/// Каждая стадия конвейера возвращает свою ошибку без обёртывания,
/// фасад пробрасывает её вызывающему как есть.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Пустой тикер
    #[error("stock symbol is empty")]
    EmptySymbol,

    /// Сетевые ошибки
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Сервер ответил, но без единой строки
    #[error("Received an empty quote.")]
    EmptyResponse,

    /// Строка ответа не соответствует формату
    #[error(transparent)]
    MalformedLine(#[from] MalformedLineError),

    /// В документе нет цены `ask` (обычно неизвестный тикер)
    #[error("{message}")]
    PriceNotFound {
        /// Диагностика из документа или общий текст
        message: String,
    },

    /// Цена `ask` есть, но это не число
    #[error("invalid ask price {value:?}: {message}")]
    PriceFormat {
        /// Исходный текст значения
        value: String,
        /// Причина
        message: String,
    },
}

/// Ошибки транспорта
#[derive(Debug, Error)]
pub enum TransportError {
    /// Не удалось собрать HTTP клиент
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    /// Неверный базовый адрес сервиса
    #[error("invalid quote service url {url:?}: {reason}")]
    InvalidUrl {
        /// Адрес из конфигурации
        url: String,
        /// Причина
        reason: String,
    },

    /// Соединение, DNS, таймаут
    #[error("quote request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// Сервер вернул не-2xx статус
    #[error("quote service {url} responded with status {status}")]
    Status {
        /// Адрес запроса
        url: String,
        /// HTTP статус
        status: u16,
    },

    /// Ошибка чтения тела ответа
    #[error("failed to read quote response: {0}")]
    Read(#[source] std::io::Error),
}

/// Ошибки разбора строки котировки
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MalformedLineError {
    /// Неверное число полей
    #[error("malformed quote line: expected {expected} fields, found {found}")]
    FieldCount {
        /// Сколько ожидалось
        expected: usize,
        /// Сколько пришло
        found: usize,
    },

    /// Поле должно быть в кавычках
    #[error("malformed quote line: {field} field is not quoted: {value:?}")]
    MissingQuotes {
        /// Имя поля
        field: &'static str,
        /// Исходное значение
        value: String,
    },
}

/// Ошибки загрузки списка тикеров
#[derive(Debug, Error)]
pub enum SymbolListError {
    /// Файла со списком нет
    #[error("Unable to locate resource: {path:?}")]
    NotFound {
        /// Путь
        path: PathBuf,
    },

    /// Ошибка чтения
    #[error("failed to read symbol list: {path:?}")]
    Read {
        /// Путь
        path: PathBuf,
        /// Исходная ошибка
        #[source]
        source: std::io::Error,
    },
}
