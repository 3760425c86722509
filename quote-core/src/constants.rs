use std::time::Duration;

/// Адрес сервиса котировок; символ добавляется query-параметром `s`.
/// Формат `f=sl1d1t1c1ohgv`: symbol, ask, date, time, change, open, high, low, volume
pub const DEFAULT_QUOTE_URL: &str = "http://finance.yahoo.com/d/quotes.csv?f=sl1d1t1c1ohgv&e=.csv";

/// Имя query-параметра с тикером
pub const SYMBOL_QUERY_PARAM: &str = "s";

/// Таймаут установки соединения
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Таймаут всего запроса (включая чтение ответа)
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Текст ошибки, если документ не содержит собственного сообщения
pub const NO_ERROR_MESSAGE: &str = "No specified error message.";

// Позиции полей в строке ответа
pub(crate) const FIELD_COUNT: usize = 9;
pub(crate) const SYMBOL_NDX: usize = 0;
pub(crate) const ASK_NDX: usize = 1;
pub(crate) const DATE_NDX: usize = 2;
pub(crate) const TIME_NDX: usize = 3;
pub(crate) const CHANGE_NDX: usize = 4;
pub(crate) const OPEN_NDX: usize = 5;
pub(crate) const DAYHIGH_NDX: usize = 6;
pub(crate) const DAYLOW_NDX: usize = 7;
pub(crate) const VOLUME_NDX: usize = 8;
