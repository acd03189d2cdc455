//! Canonical hashable keys for counting outcomes.
//!
//! Outcomes are not all hashable: lists and paths have no stable identity to
//! count by. [`Hashability`] classifies an outcome, and [`Key::canonical`]
//! turns it into a [`Key`] accordingly:
//!
//! - [`Hashability::Hashable`]: the outcome itself becomes the key
//! - [`Hashability::ListOfHashable`]: a list becomes the equivalent tuple key
//! - [`Hashability::Unhashable`]: the key is the outcome's display string

use std::{cmp::Ordering, fmt, hash::Hash};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Outcome;

/// How an outcome can be turned into a counting key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hashability {
    /// Usable as a key directly.
    Hashable,

    /// A list whose elements are all hashable.
    ListOfHashable,

    /// Anything else; keyed by its display string.
    Unhashable,
}

impl Hashability {
    /// Classifies an outcome.
    #[must_use]
    pub fn of(outcome: &Outcome) -> Self {
        match outcome {
            _ if direct(outcome).is_some() => Self::Hashable,
            Outcome::List(items) if items.iter().all(|item| direct(item).is_some()) => {
                Self::ListOfHashable
            }
            _ => Self::Unhashable,
        }
    }
}

/// A real number usable as a key.
///
/// Equality, hashing and ordering follow [`f64::total_cmp`] after folding
/// `-0.0` into `0.0` and every NaN into a single NaN.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct RealKey(f64);

impl RealKey {
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value == 0.0 {
            Self(0.0)
        } else if value.is_nan() {
            Self(f64::NAN)
        } else {
            Self(value)
        }
    }

    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq for RealKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RealKey {}

impl PartialOrd for RealKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RealKey {
    fn cmp(&self, other: &Self) -> Ordering {
        Self::new(self.0).0.total_cmp(&Self::new(other.0).0)
    }
}

impl Hash for RealKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        Self::new(self.0).0.to_bits().hash(state);
    }
}

/// The canonical, hashable form of an outcome.
///
/// Booleans and real values with an exact integer value are stored as
/// [`Key::Int`], so `true`, `1` and `1.0` count as the same outcome.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Key {
    Int(i64),
    Real(RealKey),
    Text(String),
    Tuple(Vec<Key>),

    /// The display string of an unhashable outcome.
    Repr(String),
}

impl Key {
    /// Returns the canonical key for an outcome.
    #[must_use]
    pub fn canonical(outcome: &Outcome) -> Self {
        let key = match (Hashability::of(outcome), outcome) {
            (Hashability::Hashable, _) => direct(outcome),
            (Hashability::ListOfHashable, Outcome::List(items)) => {
                Some(Self::Tuple(items.iter().filter_map(direct).collect()))
            }
            _ => None,
        };
        key.unwrap_or_else(|| Self::Repr(outcome.to_string()))
    }

    /// Returns the numeric value of a scalar key.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Real(x) => Some(x.get()),
            _ => None,
        }
    }
}

impl From<&Outcome> for Key {
    fn from(outcome: &Outcome) -> Self {
        Self::canonical(outcome)
    }
}

/// Converts a hashable outcome into its key, or `None` if it is unhashable.
fn direct(outcome: &Outcome) -> Option<Key> {
    match outcome {
        Outcome::Bool(b) => Some(Key::Int(i64::from(*b))),
        Outcome::Int(i) => Some(Key::Int(*i)),
        Outcome::Real(x) => Some(real(*x)),
        Outcome::Text(text) => Some(Key::Text(text.clone())),
        Outcome::Tuple(items) => items.iter().map(direct).collect::<Option<_>>().map(Key::Tuple),
        Outcome::List(_) | Outcome::Path(_) => None,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn real(x: f64) -> Key {
    // i64::MAX as f64 rounds up to 2^63, which is out of range.
    let in_range = x >= i64::MIN as f64 && x < i64::MAX as f64;
    if x.fract() == 0.0 && in_range {
        Key::Int(x as i64)
    } else {
        Key::Real(RealKey::new(x))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Real(x) => write!(f, "{:?}", x.get()),
            Self::Text(text) | Self::Repr(text) => f.write_str(text),
            Self::Tuple(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    match item {
                        Self::Text(text) => write!(f, "{text:?}")?,
                        other => write!(f, "{other}")?,
                    }
                }
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
        }
    }
}
