use std::collections::HashMap;

use chrono::NaiveDateTime;

/// Ordering key of a re-indexed price frame. Keys keep input order; lookups resolve to the
/// first occurrence of a date.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DateIndex {
    keys: Vec<NaiveDateTime>,
    positions: HashMap<NaiveDateTime, usize>,
}

impl DateIndex {
    pub fn new(keys: Vec<NaiveDateTime>) -> Self {
        let mut positions = HashMap::with_capacity(keys.len());
        for (i, key) in keys.iter().enumerate() {
            positions.entry(*key).or_insert(i);
        }
        Self { keys, positions }
    }

    pub fn keys(&self) -> &[NaiveDateTime] {
        &self.keys
    }

    pub fn get_loc(&self, key: &NaiveDateTime) -> Option<usize> {
        self.positions.get(key).copied()
    }

    pub fn is_unique(&self) -> bool {
        self.positions.len() == self.keys.len()
    }

    pub fn is_monotonic_increasing(&self) -> bool {
        self.keys.windows(2).all(|w| w[0] <= w[1])
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
