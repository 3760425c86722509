use std::io::{BufRead, Write};

use log::{debug, warn};
use quote_core::{QuoteError, QuoteService, QuoteTransport};
use thiserror::Error;

const PROMPT: &str = "Stock Symbol: ";

#[derive(Debug, Error)]
pub(crate) enum ShellError {
    #[error(transparent)]
    Quote(#[from] QuoteError),

    #[error("failed to render quote document: {0}")]
    Render(#[from] serde_json::Error),

    #[error("console i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub(crate) type Result<T> = std::result::Result<T, ShellError>;

/// Одно нажатие "Get Quote": цена или ошибка сервиса.
/// Каждая неудачная котировка логируется через `warn!`.
pub(crate) fn quote_once<T: QuoteTransport, W: Write>(
    service: &QuoteService<T>,
    symbol: &str,
    show_document: bool,
    out: &mut W,
) -> Result<f64> {
    debug!("requesting quote for {symbol}");

    match fetch_price(service, symbol, show_document, out) {
        Err(ShellError::Quote(e)) => {
            warn!("quote for {symbol} failed: {e}");
            Err(e.into())
        }
        res => res,
    }
}

fn fetch_price<T: QuoteTransport, W: Write>(
    service: &QuoteService<T>,
    symbol: &str,
    show_document: bool,
    out: &mut W,
) -> Result<f64> {
    let price = if show_document {
        let doc = service.fetch_document(symbol)?;
        writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
        service.parser().extract_ask_price(&doc)?
    } else {
        service.get_quote(symbol)?
    };

    writeln!(out, "Last sell price for {symbol} was {price}")?;
    Ok(price)
}

/// Интерактивный режим: показываем список, читаем тикеры до EOF или `quit`.
/// Ошибки котировок печатаются как есть и не прерывают цикл.
pub(crate) fn run_interactive<T: QuoteTransport, R: BufRead, W: Write>(
    service: &QuoteService<T>,
    symbols: &[String],
    show_document: bool,
    input: R,
    out: &mut W,
) -> Result<()> {
    if symbols.is_empty() {
        writeln!(out, "No stock symbols configured.")?;
    } else {
        writeln!(out, "Stock symbols: {}", symbols.join(", "))?;
    }

    write!(out, "{PROMPT}")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        let symbol = line.trim().to_ascii_uppercase();

        match symbol.as_str() {
            "" => {}
            "QUIT" => break,
            _ => match quote_once(service, &symbol, show_document, out) {
                Ok(_) => {}
                Err(ShellError::Quote(e)) => writeln!(out, "Error: {e}")?,
                Err(e) => return Err(e),
            },
        }

        write!(out, "{PROMPT}")?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}
