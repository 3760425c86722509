use crate::config::QuoteConfig;
use crate::document::QuoteDocument;
use crate::error::QuoteError;
use crate::normalize::normalize;
use crate::parser::DocumentParser;
use crate::transport::{HttpTransport, QuoteTransport};

/// Фасад: транспорт -> нормализация -> парсер.
///
/// Не хранит состояния между вызовами, поэтому безопасен для
/// параллельных вызовов из нескольких потоков.
pub struct QuoteService<T = HttpTransport> {
    transport: T,
    parser: Box<dyn DocumentParser>,
}

impl QuoteService<HttpTransport> {
    /// HTTP сервис по конфигурации
    pub fn from_config(cfg: &QuoteConfig) -> Result<Self, QuoteError> {
        let transport =
            HttpTransport::new(&cfg.base_url, cfg.connect_timeout, cfg.request_timeout)?;
        Ok(Self::new(transport, cfg.parser.build()))
    }
}

impl<T: QuoteTransport> QuoteService<T> {
    /// Сервис с произвольным транспортом и бэкендом парсера
    pub fn new(transport: T, parser: Box<dyn DocumentParser>) -> Self {
        Self { transport, parser }
    }

    /// Последняя цена `ask` для тикера.
    ///
    /// Первая ошибка любой стадии возвращается без изменений.
    pub fn get_quote(&self, symbol: &str) -> Result<f64, QuoteError> {
        let doc = self.fetch_document(symbol)?;
        self.parser.extract_ask_price(&doc)
    }

    /// Запрашивает и нормализует документ котировки
    pub fn fetch_document(&self, symbol: &str) -> Result<QuoteDocument, QuoteError> {
        if symbol.trim().is_empty() {
            return Err(QuoteError::EmptySymbol);
        }

        let line = self.transport.fetch(symbol)?;
        Ok(normalize(&line)?)
    }

    /// Бэкенд, выбранный при сборке сервиса
    pub fn parser(&self) -> &dyn DocumentParser {
        self.parser.as_ref()
    }
}
