use crate::Outcome;

/// The shape of a single outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A single number.
    Scalar,

    /// A tuple or list of `k` numbers.
    Vector(usize),

    /// Anything else.
    Irregular,
}

impl Shape {
    /// Classifies an outcome.
    #[must_use]
    pub fn of(outcome: &Outcome) -> Self {
        if outcome.is_scalar() {
            return Self::Scalar;
        }
        match outcome.elements() {
            Some(items) if items.iter().all(Outcome::is_scalar) => Self::Vector(items.len()),
            _ => Self::Irregular,
        }
    }
}

/// Returns the common dimension of a collection of outcomes.
///
/// - `1` when every outcome is a scalar (including when there are none)
/// - `k` when every outcome is a numeric vector of length `k`
/// - `0` when shapes are mixed or any outcome is not numeric
#[must_use]
pub fn dimension<'a>(outcomes: impl IntoIterator<Item = &'a Outcome>) -> usize {
    let mut common = None;
    for shape in outcomes.into_iter().map(Shape::of) {
        match (common, shape) {
            (_, Shape::Irregular) => return 0,
            (None, _) => common = Some(shape),
            (Some(seen), _) if seen != shape => return 0,
            _ => {}
        }
    }

    match common {
        None | Some(Shape::Scalar) => 1,
        Some(Shape::Vector(k)) => k,
        Some(Shape::Irregular) => 0,
    }
}

/// Returns `true` when every outcome is a scalar.
#[must_use]
pub fn all_scalar<'a>(outcomes: impl IntoIterator<Item = &'a Outcome>) -> bool {
    outcomes.into_iter().all(Outcome::is_scalar)
}
