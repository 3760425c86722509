use crate::constants::{
    ASK_NDX, CHANGE_NDX, DATE_NDX, DAYHIGH_NDX, DAYLOW_NDX, FIELD_COUNT, OPEN_NDX, SYMBOL_NDX,
    TIME_NDX, VOLUME_NDX,
};
use crate::document::{PriceKind, QuoteDocument, TaggedPrice, Timestamp};
use crate::error::MalformedLineError;

/// Превращает строку ответа сервиса в [`QuoteDocument`].
///
/// Формат строки: `"SYM",ask,"date","time",change,open,high,low,volume`.
/// Числа не разбираются: это забота парсера документа.
pub fn normalize(line: &str) -> Result<QuoteDocument, MalformedLineError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let fields: Vec<&str> = line.split(',').collect();

    if fields.len() != FIELD_COUNT {
        return Err(MalformedLineError::FieldCount {
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    }

    let symbol = unquote("symbol", fields[SYMBOL_NDX])?;
    let date = unquote("date", fields[DATE_NDX])?;
    let time = unquote("time", fields[TIME_NDX])?;

    let price = |kind, ndx: usize| TaggedPrice {
        kind,
        value: fields[ndx].to_string(),
    };

    Ok(QuoteDocument {
        symbol: symbol.to_string(),
        when: Timestamp {
            date: date.to_string(),
            time: time.to_string(),
        },
        prices: vec![
            price(PriceKind::Ask, ASK_NDX),
            price(PriceKind::Open, OPEN_NDX),
            price(PriceKind::DayHigh, DAYHIGH_NDX),
            price(PriceKind::DayLow, DAYLOW_NDX),
        ],
        change: fields[CHANGE_NDX].to_string(),
        volume: fields[VOLUME_NDX].to_string(),
        error: None,
    })
}

// "AAPL" -> AAPL
fn unquote<'a>(field: &'static str, raw: &'a str) -> Result<&'a str, MalformedLineError> {
    raw.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .ok_or_else(|| MalformedLineError::MissingQuotes {
            field,
            value: raw.to_string(),
        })
}
