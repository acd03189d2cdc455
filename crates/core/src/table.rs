use std::{collections::HashMap, fmt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Key, Outcome};

/// Errors that can occur when working with a [`Table`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    #[error("cannot compute relative frequencies of zero outcomes")]
    EmptyTotal,
}

/// A frequency table mapping outcome keys to counts or relative frequencies.
///
/// Rows keep the order in which keys were first added.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "Vec<(Key, f64)>", into = "Vec<(Key, f64)>")
)]
pub struct Table {
    rows: Vec<(Key, f64)>,
    positions: HashMap<Key, usize>,
}

impl Table {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to the row for `key`, creating the row if needed.
    pub fn add(&mut self, key: Key, amount: f64) {
        match self.positions.get(&key) {
            Some(&i) => self.rows[i].1 += amount,
            None => {
                self.positions.insert(key.clone(), self.rows.len());
                self.rows.push((key, amount));
            }
        }
    }

    /// Adds a row with value zero for `key` unless one already exists.
    pub fn ensure(&mut self, key: Key) {
        self.add(key, 0.0);
    }

    /// Returns the value stored for `key`.
    #[must_use]
    pub fn get(&self, key: &Key) -> Option<f64> {
        self.positions.get(key).map(|&i| self.rows[i].1)
    }

    /// Returns the value stored for the canonical key of `outcome`.
    #[must_use]
    pub fn get_outcome(&self, outcome: &Outcome) -> Option<f64> {
        self.get(&Key::canonical(outcome))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, f64)> {
        self.rows.iter().map(|(key, value)| (key, *value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.rows.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> {
        self.rows.iter().map(|(_, value)| *value)
    }

    /// Returns the sum of all values.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.values().sum()
    }

    /// Divides every value by `total`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::EmptyTotal`] if `total` is zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn normalize(mut self, total: usize) -> Result<Self, TableError> {
        if total == 0 {
            return Err(TableError::EmptyTotal);
        }
        let total = total as f64;
        for (_, value) in &mut self.rows {
            *value /= total;
        }
        Ok(self)
    }
}

impl FromIterator<(Key, f64)> for Table {
    fn from_iter<I: IntoIterator<Item = (Key, f64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, value) in iter {
            table.add(key, value);
        }
        table
    }
}

impl From<Vec<(Key, f64)>> for Table {
    fn from(rows: Vec<(Key, f64)>) -> Self {
        rows.into_iter().collect()
    }
}

impl From<Table> for Vec<(Key, f64)> {
    fn from(table: Table) -> Self {
        table.rows
    }
}

impl IntoIterator for Table {
    type Item = (Key, f64);
    type IntoIter = std::vec::IntoIter<(Key, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.keys().map(ToString::to_string).collect();
        let width = labels.iter().map(String::len).max().unwrap_or(0).max(7);

        writeln!(f, "{:<width$} | Value", "Outcome")?;
        writeln!(f, "{}-+------", "-".repeat(width))?;
        for (label, value) in labels.iter().zip(self.values()) {
            writeln!(f, "{label:<width$} | {value}")?;
        }
        write!(f, "{:<width$} | {}", "Total", self.total())
    }
}
