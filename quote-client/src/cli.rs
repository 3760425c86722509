use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use quote_core::{DEFAULT_QUOTE_URL, ParserBackend, QuoteConfig};

/// Quote Client - последняя цена предложения для тикера.
///
/// С `--symbol` делает один запрос и завершается.
/// Без него показывает список тикеров и читает тикеры из stdin.
#[derive(Parser, Debug, Clone)]
#[command(name = "quote-client", version, about)]
pub(crate) struct Args {
    /// Тикер для одного запроса, например AAPL
    #[arg(long)]
    pub(crate) symbol: Option<String>,

    /// Файл со списком тикеров в одну строку: AAPL:MSFT:GOOG
    /// (по умолчанию встроенный список)
    #[arg(long)]
    pub(crate) symbols_file: Option<PathBuf>,

    /// Базовый адрес сервиса котировок; тикер добавляется параметром s
    #[arg(long, default_value = DEFAULT_QUOTE_URL)]
    pub(crate) base_url: String,

    /// Таймаут соединения, мс
    #[arg(long, default_value_t = 5_000)]
    pub(crate) connect_timeout_ms: u64,

    /// Таймаут всего запроса, мс
    #[arg(long, default_value_t = 10_000)]
    pub(crate) request_timeout_ms: u64,

    /// Бэкенд разбора документа котировки: tagged | json
    #[arg(long, default_value_t = ParserBackend::Tagged)]
    pub(crate) parser: ParserBackend,

    /// Печатать нормализованный документ (JSON) перед ценой
    #[arg(long)]
    pub(crate) document: bool,
}

impl Args {
    /// Валидация аргументов (адрес не пуст, таймауты > 0, файл тикеров - файл)
    pub(crate) fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            bail!("--base-url is empty");
        }
        if self.connect_timeout_ms == 0 || self.request_timeout_ms == 0 {
            bail!("timeouts must be greater than zero");
        }
        if let Some(symbol) = &self.symbol {
            if symbol.trim().is_empty() {
                bail!("--symbol is empty");
            }
        }

        if let Some(path) = &self.symbols_file {
            // отсутствие файла - отдельная ошибка из quote-core, здесь только тип
            if let Ok(md) = std::fs::metadata(path) {
                if !md.is_file() {
                    bail!("--symbols-file must point to a file: {:?}", path);
                }
            }
        }

        Ok(())
    }

    pub(crate) fn quote_config(&self) -> Result<QuoteConfig> {
        self.validate().context("invalid arguments")?;

        Ok(QuoteConfig {
            base_url: self.base_url.trim().to_string(),
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            parser: self.parser,
        })
    }
}
