use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::constants::NO_ERROR_MESSAGE;
use crate::document::{PriceKind, QuoteDocument};
use crate::error::QuoteError;

/// Бэкенд разбора документа котировки.
///
/// Выбирается один раз при сборке сервиса, а не на каждый вызов.
pub trait DocumentParser: Send + Sync {
    /// Достаёт цену `ask` из документа
    fn extract_ask_price(&self, doc: &QuoteDocument) -> Result<f64, QuoteError>;
}

/// Ищет цену по тегу в типизированном списке цен
#[derive(Debug, Default, Clone, Copy)]
pub struct TaggedPriceParser;

impl DocumentParser for TaggedPriceParser {
    fn extract_ask_price(&self, doc: &QuoteDocument) -> Result<f64, QuoteError> {
        match doc.price(PriceKind::Ask) {
            Some(p) => parse_price(&p.value),
            None => Err(not_found(doc.error.as_deref())),
        }
    }
}

/// Разворачивает документ в дерево JSON и ищет элемент `prices[*]`
/// с атрибутом `type == "ask"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonTreeParser;

impl JsonTreeParser {
    /// Разбор уже построенного дерева
    pub fn extract_from_value(&self, tree: &Value) -> Result<f64, QuoteError> {
        let ask = tree
            .get("prices")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .find(|el| el.get("type").and_then(Value::as_str) == Some(PriceKind::Ask.as_str()));

        let Some(ask) = ask else {
            let msg = tree.get("error").and_then(Value::as_str);
            return Err(not_found(msg));
        };

        match ask.get("value") {
            Some(Value::String(s)) => parse_price(s),
            Some(Value::Number(n)) => parse_price(&n.to_string()),
            Some(other) => Err(QuoteError::PriceFormat {
                value: other.to_string(),
                message: "ask value is not a text literal".to_string(),
            }),
            None => Err(QuoteError::PriceFormat {
                value: String::new(),
                message: "ask element has no value".to_string(),
            }),
        }
    }
}

impl DocumentParser for JsonTreeParser {
    fn extract_ask_price(&self, doc: &QuoteDocument) -> Result<f64, QuoteError> {
        let tree = serde_json::to_value(doc).map_err(|e| QuoteError::PriceNotFound {
            message: format!("failed to build document tree: {e}"),
        })?;
        self.extract_from_value(&tree)
    }
}

/// Доступные бэкенды
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParserBackend {
    /// [`TaggedPriceParser`]
    #[default]
    Tagged,
    /// [`JsonTreeParser`]
    Json,
}

impl ParserBackend {
    /// Создаёт бэкенд
    pub fn build(self) -> Box<dyn DocumentParser> {
        match self {
            ParserBackend::Tagged => Box::new(TaggedPriceParser),
            ParserBackend::Json => Box::new(JsonTreeParser),
        }
    }
}

impl fmt::Display for ParserBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParserBackend::Tagged => f.write_str("tagged"),
            ParserBackend::Json => f.write_str("json"),
        }
    }
}

impl FromStr for ParserBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tagged" => Ok(ParserBackend::Tagged),
            "json" => Ok(ParserBackend::Json),
            other => Err(format!("unknown parser backend: {other}")),
        }
    }
}

fn not_found(service_msg: Option<&str>) -> QuoteError {
    let message = service_msg
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(NO_ERROR_MESSAGE)
        .to_string();
    QuoteError::PriceNotFound { message }
}

/// Цена должна быть конечным неотрицательным числом
fn parse_price(raw: &str) -> Result<f64, QuoteError> {
    let text = raw.trim();
    let price: f64 = text.parse().map_err(|e| QuoteError::PriceFormat {
        value: raw.to_string(),
        message: format!("{e}"),
    })?;

    if !price.is_finite() {
        return Err(QuoteError::PriceFormat {
            value: raw.to_string(),
            message: "price is not finite".to_string(),
        });
    }
    // -0.0 тоже отрицательная запись
    if price.is_sign_negative() {
        return Err(QuoteError::PriceFormat {
            value: raw.to_string(),
            message: "price is negative".to_string(),
        });
    }

    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::TaggedPrice;
    use crate::normalize::normalize;
    use serde_json::json;

    fn backends() -> Vec<Box<dyn DocumentParser>> {
        vec![ParserBackend::Tagged.build(), ParserBackend::Json.build()]
    }

    fn doc_with_ask(value: &str) -> QuoteDocument {
        QuoteDocument {
            symbol: "ABC".to_string(),
            prices: vec![
                TaggedPrice {
                    kind: PriceKind::Open,
                    value: "1.00".to_string(),
                },
                TaggedPrice {
                    kind: PriceKind::Ask,
                    value: value.to_string(),
                },
            ],
            ..QuoteDocument::default()
        }
    }

    #[test]
    fn extracts_ask_regardless_of_position() {
        for p in backends() {
            assert_eq!(p.extract_ask_price(&doc_with_ask("12.34")).unwrap(), 12.34);
        }
    }

    #[test]
    fn normalized_line_yields_second_field() {
        let doc = normalize(r#""ABC",12.34,"1/1/2024","9:30am",+0.5,12.00,12.50,11.80,100000"#)
            .unwrap();
        for p in backends() {
            assert_eq!(p.extract_ask_price(&doc).unwrap(), 12.34);
        }
    }

    #[test]
    fn normalized_ask_matches_its_literal() {
        for raw in ["0", "15", "0.0001", "1e3", "123456.789", "+3.5", "12.00"] {
            let line = format!(
                r#""ABC",{raw},"1/1/2024","9:30am",+0.5,12.00,12.50,11.80,100000"#
            );
            let doc = normalize(&line).unwrap();
            let expected: f64 = raw.parse().unwrap();

            for p in backends() {
                assert_eq!(p.extract_ask_price(&doc).unwrap(), expected, "{raw}");
            }
        }
    }

    #[test]
    fn negative_zero_is_rejected() {
        for raw in ["-0", "-0.0"] {
            for p in backends() {
                let err = p.extract_ask_price(&doc_with_ask(raw)).unwrap_err();
                assert!(matches!(err, QuoteError::PriceFormat { .. }), "{raw}: {err:?}");
            }
        }
    }

    #[test]
    fn zero_price_is_a_valid_result() {
        for p in backends() {
            assert_eq!(p.extract_ask_price(&doc_with_ask("0.00")).unwrap(), 0.0);
        }
    }

    #[test]
    fn missing_ask_is_price_not_found_with_generic_message() {
        let mut doc = doc_with_ask("1");
        doc.prices.retain(|p| p.kind != PriceKind::Ask);

        for p in backends() {
            match p.extract_ask_price(&doc).unwrap_err() {
                QuoteError::PriceNotFound { message } => {
                    assert_eq!(message, NO_ERROR_MESSAGE);
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn error_only_document_surfaces_service_message() {
        let doc = QuoteDocument::service_error("Invalid symbol XYZ");
        for p in backends() {
            let err = p.extract_ask_price(&doc).unwrap_err();
            assert!(matches!(err, QuoteError::PriceNotFound { .. }));
            assert_eq!(err.to_string(), "Invalid symbol XYZ");
        }
    }

    #[test]
    fn blank_service_message_falls_back_to_generic() {
        let doc = QuoteDocument::service_error("   ");
        for p in backends() {
            assert_eq!(p.extract_ask_price(&doc).unwrap_err().to_string(), NO_ERROR_MESSAGE);
        }
    }

    #[test]
    fn non_numeric_ask_is_price_format_error() {
        for p in backends() {
            match p.extract_ask_price(&doc_with_ask("N/A")).unwrap_err() {
                QuoteError::PriceFormat { value, .. } => assert_eq!(value, "N/A"),
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn negative_and_non_finite_prices_are_rejected() {
        for raw in ["-1.5", "NaN", "inf", "-inf"] {
            for p in backends() {
                let err = p.extract_ask_price(&doc_with_ask(raw)).unwrap_err();
                assert!(
                    matches!(err, QuoteError::PriceFormat { .. }),
                    "{raw}: {err:?}"
                );
            }
        }
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert_eq!(
            TaggedPriceParser.extract_ask_price(&doc_with_ask(" 7.5 ")).unwrap(),
            7.5
        );
    }

    #[test]
    fn json_tree_accepts_numeric_value_and_rejects_other_kinds() {
        let tree = json!({ "prices": [ { "type": "ask", "value": 3.25 } ] });
        assert_eq!(JsonTreeParser.extract_from_value(&tree).unwrap(), 3.25);

        let tree = json!({ "prices": [ { "type": "ask", "value": true } ] });
        assert!(matches!(
            JsonTreeParser.extract_from_value(&tree).unwrap_err(),
            QuoteError::PriceFormat { .. }
        ));

        let tree = json!({ "prices": [ { "type": "ask" } ] });
        assert!(matches!(
            JsonTreeParser.extract_from_value(&tree).unwrap_err(),
            QuoteError::PriceFormat { .. }
        ));
    }

    #[test]
    fn json_tree_without_prices_reads_error_attribute() {
        let tree = json!({ "error": "No such ticker" });
        assert_eq!(
            JsonTreeParser.extract_from_value(&tree).unwrap_err().to_string(),
            "No such ticker"
        );
        assert_eq!(
            JsonTreeParser.extract_from_value(&json!({})).unwrap_err().to_string(),
            NO_ERROR_MESSAGE
        );
    }

    #[test]
    fn backend_names_parse_case_insensitively() {
        assert_eq!("tagged".parse::<ParserBackend>().unwrap(), ParserBackend::Tagged);
        assert_eq!(" JSON ".parse::<ParserBackend>().unwrap(), ParserBackend::Json);
        assert!("sax".parse::<ParserBackend>().is_err());
        assert_eq!(ParserBackend::default().to_string(), "tagged");
    }
}
