use chrono::NaiveDateTime;
use getset::Getters;

use super::price_record::{DateValue, PriceRecord};
use crate::error::ReturnsError;

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Float(Vec<f64>),
    Text(Vec<String>),
    DateTime(Vec<NaiveDateTime>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Float(v) => v.len(),
            ColumnData::Text(v) => v.len(),
            ColumnData::DateTime(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Renders the value at `row` for error messages.
    pub fn display_value(&self, row: usize) -> String {
        let value = match self {
            ColumnData::Float(v) => v.get(row).map(|x| x.to_string()),
            ColumnData::Text(v) => v.get(row).cloned(),
            ColumnData::DateTime(v) => v.get(row).map(|x| x.to_string()),
        };
        value.unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct Column {
    name: String,
    data: ColumnData,
}

/// An ordered set of equally long, named columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceFrame {
    columns: Vec<Column>,
    rows: usize,
}

impl PriceFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a frame with `date` and `close` columns, plus `open`, `high`, `low` and `volume`
    /// for any of those fields that at least one record sets. Unset values become `NaN`.
    pub fn from_records(records: &[PriceRecord]) -> Self {
        let dates = if records
            .iter()
            .all(|r| matches!(r.date, DateValue::DateTime(_)))
        {
            ColumnData::DateTime(
                records
                    .iter()
                    .filter_map(|r| match r.date {
                        DateValue::DateTime(dt) => Some(dt),
                        DateValue::Text(_) => None,
                    })
                    .collect(),
            )
        } else {
            ColumnData::Text(
                records
                    .iter()
                    .map(|r| match &r.date {
                        DateValue::DateTime(dt) => dt.and_utc().to_rfc3339(),
                        DateValue::Text(s) => s.clone(),
                    })
                    .collect(),
            )
        };

        let mut columns = vec![
            Column {
                name: "date".to_string(),
                data: dates,
            },
            Column {
                name: "close".to_string(),
                data: ColumnData::Float(records.iter().map(|r| r.close).collect()),
            },
        ];

        let optional: [(&str, fn(&PriceRecord) -> Option<f64>); 4] = [
            ("open", |r| r.open),
            ("high", |r| r.high),
            ("low", |r| r.low),
            ("volume", |r| r.volume),
        ];
        for (name, field) in optional {
            if records.iter().any(|r| field(r).is_some()) {
                columns.push(Column {
                    name: name.to_string(),
                    data: ColumnData::Float(
                        records
                            .iter()
                            .map(|r| field(r).unwrap_or(f64::NAN))
                            .collect(),
                    ),
                });
            }
        }

        Self {
            columns,
            rows: records.len(),
        }
    }

    pub fn with_column<S: Into<String>>(
        mut self,
        name: S,
        data: ColumnData,
    ) -> Result<Self, ReturnsError> {
        self.insert_column(name, data)?;
        Ok(self)
    }

    /// Adds a column, or replaces the column of the same name in place.
    ///
    /// The first column of an empty frame sets the row count; every later column must match it.
    pub fn insert_column<S: Into<String>>(
        &mut self,
        name: S,
        data: ColumnData,
    ) -> Result<(), ReturnsError> {
        let name = name.into();
        if self.columns.is_empty() {
            self.rows = data.len();
        } else if data.len() != self.rows {
            return Err(ReturnsError::LengthMismatch {
                column: name,
                expected: self.rows,
                found: data.len(),
            });
        }

        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(column) => column.data = data,
            None => self.columns.push(Column { name, data }),
        }
        Ok(())
    }

    /// Removes and returns a column. Removing the last column leaves an empty frame.
    pub fn remove_column(&mut self, name: &str) -> Option<Column> {
        let position = self.columns.iter().position(|c| c.name == name)?;
        let column = self.columns.remove(position);
        if self.columns.is_empty() {
            self.rows = 0;
        }
        Some(column)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Values of a float column; `None` if the column is missing or not numeric.
    pub fn float_values(&self, name: &str) -> Option<&[f64]> {
        match self.column(name).map(|c| &c.data) {
            Some(ColumnData::Float(values)) => Some(values),
            _ => None,
        }
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }
}
