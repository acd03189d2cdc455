use std::{cmp::Ordering, fmt};

use crate::Path;

/// A single value produced by one run of a simulation.
///
/// Outcomes have no fixed schema. A run may produce a number, a fixed-length
/// tuple of numbers, a free-form structured value, or a whole trajectory
/// indexed by time.
///
/// # Equality and ordering
///
/// - `Bool`, `Int` and `Real` compare by numeric value, so `Int(1) == Real(1.0)`.
/// - `Tuple` compares with `Tuple` and `List` with `List`, lexicographically.
/// - `Text` compares with `Text`.
/// - A `Path` equals only another handle to the same shared function.
///
/// Values of unrelated shapes are unordered: `partial_cmp` returns `None`,
/// which makes every ordering comparison between them `false`.
#[derive(Debug, Clone)]
pub enum Outcome {
    Bool(bool),
    Int(i64),
    Real(f64),
    Text(String),

    /// An immutable sequence, hashable when all of its elements are.
    Tuple(Vec<Outcome>),

    /// A mutable-style sequence, never hashable.
    List(Vec<Outcome>),

    /// A trajectory evaluated at a point in time.
    Path(Path),
}

impl Outcome {
    /// Builds a tuple outcome from anything convertible to outcomes.
    pub fn tuple<T: Into<Outcome>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::Tuple(items.into_iter().map(Into::into).collect())
    }

    /// Builds a list outcome from anything convertible to outcomes.
    pub fn list<T: Into<Outcome>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Returns the numeric value of a scalar outcome.
    ///
    /// Booleans count as `0.0` and `1.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::Int(i) => Some(*i as f64),
            Self::Real(x) => Some(*x),
            _ => None,
        }
    }

    /// Returns `true` for numeric scalars.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        self.as_f64().is_some()
    }

    /// Returns the elements of a tuple or list.
    #[must_use]
    pub fn elements(&self) -> Option<&[Outcome]> {
        match self {
            Self::Tuple(items) | Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the numeric components of a tuple or list of scalars.
    #[must_use]
    pub fn to_vector(&self) -> Option<Vec<f64>> {
        self.elements()?.iter().map(Outcome::as_f64).collect()
    }

    /// Extracts the `i`-th component of an indexable outcome.
    ///
    /// Tuples and lists yield their `i`-th element, text its `i`-th character,
    /// and a path its value at time `i`. Scalars have no components.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn component(&self, i: usize) -> Option<Outcome> {
        match self {
            Self::Tuple(items) | Self::List(items) => items.get(i).cloned(),
            Self::Text(text) => text.chars().nth(i).map(|c| Self::Text(c.to_string())),
            Self::Path(path) => Some(path.eval(i as f64)),
            Self::Bool(_) | Self::Int(_) | Self::Real(_) => None,
        }
    }

    /// Evaluates a path outcome at time `t`.
    ///
    /// Returns `None` for outcomes that are not paths.
    #[must_use]
    pub fn at_time(&self, t: f64) -> Option<Outcome> {
        match self {
            Self::Path(path) => Some(path.eval(t)),
            _ => None,
        }
    }
}

impl PartialEq for Outcome {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Tuple(a), Self::Tuple(b)) | (Self::List(a), Self::List(b)) => a == b,
            (Self::Path(a), Self::Path(b)) => a == b,
            _ => compare_numbers(self, other) == Some(Ordering::Equal),
        }
    }
}

impl PartialOrd for Outcome {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            (Self::Text(a), Self::Text(b)) => Some(a.cmp(b)),
            (Self::Tuple(a), Self::Tuple(b)) | (Self::List(a), Self::List(b)) => {
                lexicographic(a, b)
            }
            (Self::Path(a), Self::Path(b)) => (a == b).then_some(Ordering::Equal),
            _ => compare_numbers(self, other),
        }
    }
}

/// Compares two numeric scalars exactly, without rounding integers to `f64`.
///
/// Booleans count as `0` and `1`. Returns `None` if either side is not a
/// number or is NaN.
fn compare_numbers(a: &Outcome, b: &Outcome) -> Option<Ordering> {
    let integer = |x: &Outcome| match x {
        Outcome::Bool(flag) => Some(i64::from(*flag)),
        Outcome::Int(i) => Some(*i),
        _ => None,
    };
    match (integer(a), integer(b), a, b) {
        (Some(i), Some(j), _, _) => Some(i.cmp(&j)),
        (Some(i), None, _, Outcome::Real(x)) => int_vs_real(i, *x),
        (None, Some(j), Outcome::Real(x), _) => int_vs_real(j, *x).map(Ordering::reverse),
        (None, None, Outcome::Real(x), Outcome::Real(y)) => x.partial_cmp(y),
        _ => None,
    }
}

/// Orders an integer against a real.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn int_vs_real(i: i64, x: f64) -> Option<Ordering> {
    // Both bounds are exactly representable: -2^63 and 2^63.
    let (lo, hi) = (i64::MIN as f64, -(i64::MIN as f64));
    if x.is_nan() {
        return None;
    }
    if x >= hi {
        return Some(Ordering::Less);
    }
    if x < lo {
        return Some(Ordering::Greater);
    }
    let floor = x.floor();
    match i.cmp(&(floor as i64)) {
        Ordering::Equal if x > floor => Some(Ordering::Less),
        ordering => Some(ordering),
    }
}

fn lexicographic(a: &[Outcome], b: &[Outcome]) -> Option<Ordering> {
    for (x, y) in a.iter().zip(b) {
        match x.partial_cmp(y)? {
            Ordering::Equal => {}
            unequal => return Some(unequal),
        }
    }
    Some(a.len().cmp(&b.len()))
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Real(x) => write!(f, "{x:?}"),
            Self::Text(text) => f.write_str(text),
            Self::Tuple(items) => {
                f.write_str("(")?;
                write_items(f, items)?;
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            Self::List(items) => {
                f.write_str("[")?;
                write_items(f, items)?;
                f.write_str("]")
            }
            Self::Path(path) => write!(f, "{path}"),
        }
    }
}

/// Writes comma-separated items, quoting nested text.
fn write_items(f: &mut fmt::Formatter<'_>, items: &[Outcome]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        match item {
            Outcome::Text(text) => write!(f, "{text:?}")?,
            other => write!(f, "{other}")?,
        }
    }
    Ok(())
}

impl From<bool> for Outcome {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Outcome {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Outcome {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for Outcome {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for Outcome {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<&str> for Outcome {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Outcome {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Path> for Outcome {
    fn from(value: Path) -> Self {
        Self::Path(value)
    }
}

impl<T: Into<Outcome>> From<Vec<T>> for Outcome {
    fn from(value: Vec<T>) -> Self {
        Self::list(value)
    }
}

impl<T: Into<Outcome>, const N: usize> From<[T; N]> for Outcome {
    fn from(value: [T; N]) -> Self {
        Self::tuple(value)
    }
}

impl<A: Into<Outcome>, B: Into<Outcome>> From<(A, B)> for Outcome {
    fn from((a, b): (A, B)) -> Self {
        Self::Tuple(vec![a.into(), b.into()])
    }
}

impl<A: Into<Outcome>, B: Into<Outcome>, C: Into<Outcome>> From<(A, B, C)> for Outcome {
    fn from((a, b, c): (A, B, C)) -> Self {
        Self::Tuple(vec![a.into(), b.into(), c.into()])
    }
}
