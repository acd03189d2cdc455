use tally_core::{Key, Outcome, Table};

/// Counts occurrences of each value, in first-seen order.
///
/// Values are keyed canonically, so `1.0` and `1` count together.
pub(crate) fn value_counts(values: &[f64]) -> Table {
    values
        .iter()
        .map(|&x| (Key::canonical(&Outcome::Real(x)), 1.0))
        .collect()
}

/// Judges whether counted values look discrete.
///
/// Values are discrete when more than 80% of the distinct values occur more
/// than once. Exactly 80% is not enough.
pub(crate) fn is_discrete(counts: &Table) -> bool {
    let distinct = counts.len();
    let repeated = counts.values().filter(|&count| count > 1.0).count();
    5 * repeated > 4 * distinct
}
