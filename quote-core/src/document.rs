use std::fmt;

use serde::{Deserialize, Serialize};

/// Вид цены внутри документа. Парсер ищет цену по виду, а не по позиции.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceKind {
    /// Последняя цена предложения
    Ask,
    /// Цена открытия
    Open,
    /// Максимум дня
    DayHigh,
    /// Минимум дня
    DayLow,
}

impl PriceKind {
    /// Тег, под которым цена лежит в документе
    pub fn as_str(self) -> &'static str {
        match self {
            PriceKind::Ask => "ask",
            PriceKind::Open => "open",
            PriceKind::DayHigh => "dayhigh",
            PriceKind::DayLow => "daylow",
        }
    }
}

impl fmt::Display for PriceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Цена с тегом. Значение остаётся текстом до стадии парсера.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedPrice {
    /// Вид цены
    #[serde(rename = "type")]
    pub kind: PriceKind,
    /// Текст значения как пришёл от сервиса
    pub value: String,
}

/// Дата и время котировки (текстом, в формате сервиса)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    /// Дата, например `1/1/2024`
    pub date: String,
    /// Время, например `9:30am`
    pub time: String,
}

/// Нормализованный документ одной котировки.
///
/// Живёт ровно один запрос. Либо содержит данные котировки,
/// либо (если сервис сообщил об ошибке) только `error`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteDocument {
    /// Тикер
    pub symbol: String,
    /// Момент котировки
    pub when: Timestamp,
    /// Цены с тегами
    pub prices: Vec<TaggedPrice>,
    /// Изменение за день
    pub change: String,
    /// Объём
    pub volume: String,
    /// Ошибка, о которой сообщил сервис
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QuoteDocument {
    /// Документ, содержащий только сообщение об ошибке сервиса
    pub fn service_error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Цена заданного вида, если есть
    pub fn price(&self, kind: PriceKind) -> Option<&TaggedPrice> {
        self.prices.iter().find(|p| p.kind == kind)
    }
}
