use tally_core::{Key, Outcome, Table};

use crate::{Error, Results};

/// Counts outcomes by canonical key, in first-seen order.
pub(crate) fn counts<'a>(outcomes: impl IntoIterator<Item = &'a Outcome>) -> Table {
    let mut table = Table::new();
    for outcome in outcomes {
        table.add(Key::canonical(outcome), 1.0);
    }
    table
}

impl Results {
    /// Counts how often each distinct outcome occurred.
    ///
    /// Outcomes are counted by their canonical [`Key`]. Rows appear in the
    /// order outcomes were first seen, followed by any entries of `outcomes`
    /// that never occurred, with a count of zero.
    ///
    /// With `normalize`, counts are divided by the number of outcomes to give
    /// relative frequencies.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Table`] if `normalize` is set and the collection is
    /// empty.
    pub fn tabulate(&self, outcomes: Option<&[Outcome]>, normalize: bool) -> Result<Table, Error> {
        let mut table = counts(self);
        for outcome in outcomes.unwrap_or_default() {
            table.ensure(Key::canonical(outcome));
        }
        tracing::debug!(
            outcomes = self.len(),
            distinct = table.len(),
            normalize,
            "tabulated outcomes"
        );

        if normalize {
            Ok(table.normalize(self.len())?)
        } else {
            Ok(table)
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use tally_core::TableError;

    use super::*;

    #[test]
    fn counts_each_distinct_outcome() {
        let results = Results::generic(["H", "T", "H", "H"]);
        let table = results.tabulate(None, false).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get_outcome(&"H".into()), Some(3.0));
        assert_eq!(table.get_outcome(&"T".into()), Some(1.0));
    }

    #[test]
    fn normalized_frequencies_sum_to_one() {
        let results = Results::numeric([1, 2, 2, 3, 3, 3, 7]);
        let table = results.tabulate(None, true).unwrap();

        assert_relative_eq!(table.total(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(table.get_outcome(&3.into()).unwrap(), 3.0 / 7.0);
    }

    #[test]
    fn listed_outcomes_get_zero_rows() {
        let results = Results::numeric([1, 1, 3]);
        let all: Vec<Outcome> = (1..=4).map(Outcome::from).collect();
        let table = results.tabulate(Some(all.as_slice()), false).unwrap();

        assert_eq!(table.len(), 4);
        assert_eq!(table.get_outcome(&2.into()), Some(0.0));
        assert_eq!(table.get_outcome(&4.into()), Some(0.0));
        assert_eq!(table.get_outcome(&1.into()), Some(2.0));
        assert_eq!(table.total(), 3.0);
    }

    #[test]
    fn lists_are_counted_as_tuples() {
        let results = Results::generic([
            Outcome::list([1, 2]),
            Outcome::tuple([1, 2]),
            Outcome::list([2, 1]),
        ]);
        let table = results.tabulate(None, false).unwrap();

        assert_eq!(table.get_outcome(&Outcome::tuple([1, 2])), Some(2.0));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn unhashable_outcomes_are_counted_by_display() {
        let nested = Outcome::list([Outcome::list([1]), Outcome::list([2])]);
        let results = Results::generic([nested.clone(), nested.clone()]);
        let table = results.tabulate(None, false).unwrap();

        assert_eq!(table.get(&Key::Repr("[[1], [2]]".into())), Some(2.0));
    }

    #[test]
    fn booleans_count_with_equal_integers() {
        let results = Results::generic([Outcome::Bool(true), Outcome::Int(1), Outcome::Real(0.0)]);
        let table = results.tabulate(None, false).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get_outcome(&1.into()), Some(2.0));
        assert_eq!(table.get_outcome(&false.into()), Some(1.0));

        let seen = Results::generic([true]);
        let table = seen.tabulate(Some([Outcome::Int(1)].as_slice()), false).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get_outcome(&Outcome::Int(1)), Some(1.0));
        assert_eq!(seen.count_eq(1), 1);
    }

    #[test]
    fn normalizing_an_empty_collection_fails() {
        let results = Results::generic(Vec::<Outcome>::new());
        assert_eq!(
            results.tabulate(None, true),
            Err(Error::Table(TableError::EmptyTotal))
        );
        assert!(results.tabulate(None, false).unwrap().is_empty());
    }
}
