use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// A date as handed over by the caller: either already a datetime, or text still to be parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateValue {
    DateTime(NaiveDateTime),
    Text(String),
}

impl From<NaiveDateTime> for DateValue {
    fn from(value: NaiveDateTime) -> Self {
        DateValue::DateTime(value)
    }
}

impl From<NaiveDate> for DateValue {
    fn from(value: NaiveDate) -> Self {
        DateValue::DateTime(value.and_time(NaiveTime::default()))
    }
}

impl From<String> for DateValue {
    fn from(value: String) -> Self {
        DateValue::Text(value)
    }
}

impl From<&str> for DateValue {
    fn from(value: &str) -> Self {
        DateValue::Text(value.to_string())
    }
}

/// One row of a daily price table. Only `date` and `close` are used for returns; the
/// remaining fields are carried through untouched.
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct PriceRecord {
    pub date: DateValue,
    pub close: f64,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<f64>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

impl PriceRecord {
    pub fn new<D: Into<DateValue>>(date: D, close: f64) -> Self {
        Self {
            date: date.into(),
            close,
            open: None,
            high: None,
            low: None,
            volume: None,
        }
    }
}
