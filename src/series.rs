use std::fmt;

use chrono::NaiveDateTime;
use getset::Getters;
use serde::Serialize;

use crate::{
    error::ReturnsError,
    util::math_utils::{mean, median, std_deviation},
};

/// A named sequence of values aligned with a date index. Undefined entries are `NaN`.
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct Series {
    name: String,
    index: Vec<NaiveDateTime>,
    values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std_dev: Option<f64>,
}

impl Series {
    pub fn new<S: Into<String>>(
        name: S,
        index: Vec<NaiveDateTime>,
        values: Vec<f64>,
    ) -> Result<Self, ReturnsError> {
        let name = name.into();
        if index.len() != values.len() {
            return Err(ReturnsError::LengthMismatch {
                column: name,
                expected: index.len(),
                found: values.len(),
            });
        }
        Ok(Self {
            name,
            index,
            values,
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<f64> {
        self.values.get(position).copied()
    }

    /// Value at the first index entry equal to `date`.
    pub fn get_by_date(&self, date: &NaiveDateTime) -> Option<f64> {
        let position = self.index.iter().position(|d| d == date)?;
        self.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDateTime, f64)> {
        self.index.iter().zip(self.values.iter().copied())
    }

    /// Drops `NaN` and infinite entries together with their index keys.
    pub fn dropna(&self) -> Series {
        let (index, values) = self
            .iter()
            .filter(|(_, v)| v.is_finite())
            .map(|(d, v)| (*d, v))
            .unzip();
        Series {
            name: self.name.clone(),
            index,
            values,
        }
    }

    /// Count, mean, median and sample standard deviation of the finite entries.
    pub fn summary(&self) -> SeriesSummary {
        let finite = self
            .values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .collect::<Vec<_>>();
        SeriesSummary {
            count: finite.len(),
            mean: mean(&finite),
            median: median(&finite),
            std_dev: std_deviation(&finite),
        }
    }
}

impl fmt::Display for SeriesSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "count: {}, mean: {:.6}, median: {:.6}, std: ",
            self.count, self.mean, self.median
        )?;
        match self.std_dev {
            Some(std_dev) => write!(f, "{:.6}", std_dev),
            None => write!(f, "n/a"),
        }
    }
}
