use chrono::NaiveDateTime;
use tracing::{debug, instrument, warn};

use crate::{
    config::CalculatorConfig,
    data::{ColumnData, DateIndex, PriceFrame},
    error::ReturnsError,
    series::Series,
    util::date_utils::parse_datetime,
};

/// Daily simple and log returns over the close column of a date-indexed price frame.
///
/// The calculator owns a private copy of the frame it was built from, so later changes to the
/// caller's frame do not affect its results.
#[derive(Debug, Clone)]
pub struct ReturnsCalculator {
    frame: PriceFrame,
    index: DateIndex,
    close_column: String,
}

impl ReturnsCalculator {
    /// Builds a calculator using the default `date` and `close` column names.
    pub fn new(frame: &PriceFrame) -> Result<Self, ReturnsError> {
        Self::with_config(frame, &CalculatorConfig::default())
    }

    /// Copies `frame`, parses its date column into the index and checks for a numeric close
    /// column.
    ///
    /// # Errors
    ///
    /// * `ConfigError` if `config` fails `CalculatorConfig::validate`.
    /// * `MissingColumn` if the date or close column is absent.
    /// * `DateParse` for the first date value that cannot be read.
    /// * `NonNumericColumn` for the first close value that is not a number.
    #[instrument(skip(frame, config), fields(rows = frame.len()))]
    pub fn with_config(
        frame: &PriceFrame,
        config: &CalculatorConfig,
    ) -> Result<Self, ReturnsError> {
        config.validate()?;
        let mut frame = frame.clone();

        let date_column = frame
            .remove_column(&config.date_column)
            .ok_or_else(|| ReturnsError::missing_column(&config.date_column))?;
        let dates = parse_dates(date_column.data(), &config.date_formats)?;
        let index = DateIndex::new(dates);
        if !index.is_unique() {
            warn!(
                rows = index.len(),
                "Date index contains duplicate dates; lookups resolve to the first occurrence"
            );
        }
        if !index.is_monotonic_increasing() {
            warn!("Date index is not sorted; returns follow input order");
        }

        let close = frame
            .column(&config.close_column)
            .ok_or_else(|| ReturnsError::missing_column(&config.close_column))?;
        let close = to_floats(&config.close_column, close.data())?;
        frame.insert_column(config.close_column.clone(), ColumnData::Float(close))?;

        debug!(
            rows = index.len(),
            columns = ?frame.column_names(),
            "Returns calculator ready"
        );

        Ok(Self {
            frame,
            index,
            close_column: config.close_column.clone(),
        })
    }

    /// Simple returns `(close[i] - close[i-1]) / close[i-1]`; the first entry is `NaN`.
    ///
    /// Missing closes are not padded with the previous price: a `NaN` close makes both
    /// returns that touch it `NaN`.
    pub fn get_returns(&self) -> Result<Series, ReturnsError> {
        let close = self.close_values()?;
        Series::new("returns", self.index_keys(), pct_change(close))
    }

    /// Log returns `ln(close[i] / close[i-1])`; the first entry is `NaN`.
    ///
    /// Zero or negative prices are not special-cased and yield infinities or `NaN`.
    pub fn get_log_returns(&self) -> Result<Series, ReturnsError> {
        let close = self.close_values()?;
        Series::new("log_returns", self.index_keys(), log_change(close))
    }

    pub fn close(&self) -> Result<Series, ReturnsError> {
        let close = self.close_values()?;
        Series::new(self.close_column.clone(), self.index_keys(), close.to_vec())
    }

    pub fn index(&self) -> &DateIndex {
        &self.index
    }

    /// The re-keyed frame: every input column except the date column.
    pub fn frame(&self) -> &PriceFrame {
        &self.frame
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    fn close_values(&self) -> Result<&[f64], ReturnsError> {
        self.frame
            .float_values(&self.close_column)
            .ok_or_else(|| ReturnsError::missing_column(&self.close_column))
    }

    fn index_keys(&self) -> Vec<NaiveDateTime> {
        self.index.keys().to_vec()
    }
}

fn parse_dates(data: &ColumnData, formats: &[String]) -> Result<Vec<NaiveDateTime>, ReturnsError> {
    match data {
        ColumnData::DateTime(values) => Ok(values.clone()),
        ColumnData::Text(values) => values
            .iter()
            .enumerate()
            .map(|(row, value)| {
                parse_datetime(value, formats).ok_or_else(|| ReturnsError::DateParse {
                    row,
                    value: value.clone(),
                })
            })
            .collect(),
        ColumnData::Float(values) => match values.first() {
            Some(value) => Err(ReturnsError::DateParse {
                row: 0,
                value: value.to_string(),
            }),
            None => Ok(Vec::new()),
        },
    }
}

fn to_floats(column: &str, data: &ColumnData) -> Result<Vec<f64>, ReturnsError> {
    let non_numeric = |row: usize| ReturnsError::NonNumericColumn {
        column: column.to_string(),
        row,
        value: data.display_value(row),
    };
    match data {
        ColumnData::Float(values) => Ok(values.clone()),
        ColumnData::Text(values) => values
            .iter()
            .enumerate()
            .map(|(row, value)| {
                let value = value.trim();
                if value.is_empty() {
                    Ok(f64::NAN)
                } else {
                    value.parse::<f64>().map_err(|_| non_numeric(row))
                }
            })
            .collect(),
        ColumnData::DateTime(values) if values.is_empty() => Ok(Vec::new()),
        ColumnData::DateTime(_) => Err(non_numeric(0)),
    }
}

/// Fractional change between consecutive values, `NaN` first.
pub fn pct_change(values: &[f64]) -> Vec<f64> {
    shifted(values, |prev, curr| (curr - prev) / prev)
}

/// Natural log of the ratio between consecutive values, `NaN` first.
pub fn log_change(values: &[f64]) -> Vec<f64> {
    shifted(values, |prev, curr| (curr / prev).ln())
}

fn shifted<F: Fn(f64, f64) -> f64>(values: &[f64], f: F) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(values.len());
    out.push(f64::NAN);
    out.extend(values.windows(2).map(|w| f(w[0], w[1])));
    out
}
