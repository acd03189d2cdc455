//! Comparison-based filters, counters, and vectorized comparisons.
//!
//! Comparisons against a fixed value come in three flavors:
//!
//! - `filter_*` keeps the outcomes that satisfy the comparison
//! - `count_*` counts them
//! - `*_each` compares every outcome and returns a collection of booleans,
//!   one per outcome
//!
//! The `*_each` methods are elementwise, never whole-collection comparisons:
//! `[1, 2, 3].eq_each(2)` is `[false, true, false]`.

use tally_core::Outcome;

use crate::Results;

/// A relational operator between an outcome and a fixed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Comparison {
    /// Returns whether `lhs <op> rhs` holds.
    ///
    /// Ordering comparisons between unordered outcomes (say, text and a
    /// number) never hold.
    #[must_use]
    pub fn holds(self, lhs: &Outcome, rhs: &Outcome) -> bool {
        match self {
            Self::Eq => lhs == rhs,
            Self::Ne => lhs != rhs,
            Self::Lt => lhs < rhs,
            Self::Le => lhs <= rhs,
            Self::Gt => lhs > rhs,
            Self::Ge => lhs >= rhs,
        }
    }
}

impl Results {
    /// Compares every outcome against `value`, returning one boolean per
    /// outcome.
    #[must_use]
    pub fn compare(&self, op: Comparison, value: impl Into<Outcome>) -> Self {
        let value = value.into();
        self.apply(|x| op.holds(x, &value))
    }

    /// Keeps the outcomes for which `outcome <op> value` holds.
    #[must_use]
    pub fn filter_by(&self, op: Comparison, value: impl Into<Outcome>) -> Self {
        let value = value.into();
        self.filter(|x| op.holds(x, &value))
    }

    /// Counts the outcomes for which `outcome <op> value` holds.
    #[must_use]
    pub fn count_by(&self, op: Comparison, value: impl Into<Outcome>) -> usize {
        self.filter_by(op, value).len()
    }

    #[must_use]
    pub fn filter_eq(&self, value: impl Into<Outcome>) -> Self {
        self.filter_by(Comparison::Eq, value)
    }

    #[must_use]
    pub fn filter_neq(&self, value: impl Into<Outcome>) -> Self {
        self.filter_by(Comparison::Ne, value)
    }

    #[must_use]
    pub fn filter_lt(&self, value: impl Into<Outcome>) -> Self {
        self.filter_by(Comparison::Lt, value)
    }

    #[must_use]
    pub fn filter_leq(&self, value: impl Into<Outcome>) -> Self {
        self.filter_by(Comparison::Le, value)
    }

    #[must_use]
    pub fn filter_gt(&self, value: impl Into<Outcome>) -> Self {
        self.filter_by(Comparison::Gt, value)
    }

    #[must_use]
    pub fn filter_geq(&self, value: impl Into<Outcome>) -> Self {
        self.filter_by(Comparison::Ge, value)
    }

    #[must_use]
    pub fn count_eq(&self, value: impl Into<Outcome>) -> usize {
        self.count_by(Comparison::Eq, value)
    }

    #[must_use]
    pub fn count_neq(&self, value: impl Into<Outcome>) -> usize {
        self.count_by(Comparison::Ne, value)
    }

    #[must_use]
    pub fn count_lt(&self, value: impl Into<Outcome>) -> usize {
        self.count_by(Comparison::Lt, value)
    }

    #[must_use]
    pub fn count_leq(&self, value: impl Into<Outcome>) -> usize {
        self.count_by(Comparison::Le, value)
    }

    #[must_use]
    pub fn count_gt(&self, value: impl Into<Outcome>) -> usize {
        self.count_by(Comparison::Gt, value)
    }

    #[must_use]
    pub fn count_geq(&self, value: impl Into<Outcome>) -> usize {
        self.count_by(Comparison::Ge, value)
    }

    /// Elementwise `outcome == value`.
    #[must_use]
    pub fn eq_each(&self, value: impl Into<Outcome>) -> Self {
        self.compare(Comparison::Eq, value)
    }

    /// Elementwise `outcome != value`.
    #[must_use]
    pub fn ne_each(&self, value: impl Into<Outcome>) -> Self {
        self.compare(Comparison::Ne, value)
    }

    /// Elementwise `outcome < value`.
    #[must_use]
    pub fn lt_each(&self, value: impl Into<Outcome>) -> Self {
        self.compare(Comparison::Lt, value)
    }

    /// Elementwise `outcome <= value`.
    #[must_use]
    pub fn le_each(&self, value: impl Into<Outcome>) -> Self {
        self.compare(Comparison::Le, value)
    }

    /// Elementwise `outcome > value`.
    #[must_use]
    pub fn gt_each(&self, value: impl Into<Outcome>) -> Self {
        self.compare(Comparison::Gt, value)
    }

    /// Elementwise `outcome >= value`.
    #[must_use]
    pub fn ge_each(&self, value: impl Into<Outcome>) -> Self {
        self.compare(Comparison::Ge, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Kind;

    fn flips() -> Results {
        Results::generic(["H", "T", "H", "H", "T"])
    }

    #[test]
    fn comparisons_are_elementwise() {
        let results = Results::numeric([1, 2, 3]);

        assert_eq!(results.eq_each(2), Results::numeric([false, true, false]));
        assert_eq!(results.ne_each(2), Results::numeric([true, false, true]));
        assert_eq!(results.lt_each(2), Results::numeric([true, false, false]));
        assert_eq!(results.le_each(2), Results::numeric([true, true, false]));
        assert_eq!(results.gt_each(2), Results::numeric([false, false, true]));
        assert_eq!(results.ge_each(2), Results::numeric([false, true, true]));
    }

    #[test]
    fn comparison_results_keep_the_kind() {
        assert_eq!(flips().eq_each("H").kind(), Kind::Generic);
    }

    #[test]
    fn filters_select_matching_outcomes() {
        let results = Results::numeric([5, 1, 4, 2, 3]);

        assert_eq!(results.filter_eq(4), Results::numeric([4]));
        assert_eq!(results.filter_neq(4), Results::numeric([5, 1, 2, 3]));
        assert_eq!(results.filter_lt(3), Results::numeric([1, 2]));
        assert_eq!(results.filter_leq(3), Results::numeric([1, 2, 3]));
        assert_eq!(results.filter_gt(3), Results::numeric([5, 4]));
        assert_eq!(results.filter_geq(3), Results::numeric([5, 4, 3]));
    }

    #[test]
    fn counters_match_filters() {
        let results = flips();

        assert_eq!(results.count_eq("H"), 3);
        assert_eq!(results.count_neq("H"), 2);
        assert_eq!(results.count_lt("T"), 3);
        assert_eq!(results.count_leq("T"), 5);
        assert_eq!(results.count_gt("H"), 2);
        assert_eq!(results.count_geq("H"), 5);
    }

    #[test]
    fn unordered_values_never_satisfy_ordering() {
        let results = Results::generic([Outcome::from("H"), Outcome::Int(1)]);

        assert_eq!(results.count_lt(5), 1);
        assert_eq!(results.count_geq(5), 0);
        assert_eq!(results.count_neq(5), 2);
    }

    #[test]
    fn mixed_numeric_types_compare_by_value() {
        let results = Results::numeric([Outcome::Int(1), Outcome::Real(1.0), Outcome::Real(1.5)]);
        assert_eq!(results.count_eq(1), 2);
    }
}
