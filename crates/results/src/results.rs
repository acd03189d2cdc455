use tally_core::{Outcome, TimeIndex, dimension};

use crate::Error;

/// What a collection of outcomes was simulated from.
///
/// The kind decides which statistics and plots apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kind {
    /// Outcomes of a probability space. Supports querying and tabulation
    /// only; moments and plots are not applicable.
    Generic,

    /// Realizations of a random variable: scalars or fixed-length numeric
    /// tuples.
    Numeric,

    /// Trajectories of a random process over a shared time index.
    Trajectory(TimeIndex),
}

/// An ordered collection of simulated outcomes.
///
/// Index `i` always refers to the `i`-th simulated outcome. Transformations
/// such as [`apply`](Results::apply) and [`filter`](Results::filter) return a
/// new collection of the same [`Kind`] and never modify the original.
#[derive(Debug, Clone, PartialEq)]
pub struct Results {
    kind: Kind,
    outcomes: Vec<Outcome>,
}

impl Results {
    /// Creates a collection of outcomes from a probability space.
    pub fn generic<T: Into<Outcome>>(outcomes: impl IntoIterator<Item = T>) -> Self {
        Self::with_kind(Kind::Generic, outcomes)
    }

    /// Creates a collection of random variable realizations.
    pub fn numeric<T: Into<Outcome>>(outcomes: impl IntoIterator<Item = T>) -> Self {
        Self::with_kind(Kind::Numeric, outcomes)
    }

    /// Creates a collection of random process trajectories.
    pub fn trajectories<T: Into<Outcome>>(
        outcomes: impl IntoIterator<Item = T>,
        index: TimeIndex,
    ) -> Self {
        Self::with_kind(Kind::Trajectory(index), outcomes)
    }

    /// Creates a collection of the given kind.
    pub fn with_kind<T: Into<Outcome>>(kind: Kind, outcomes: impl IntoIterator<Item = T>) -> Self {
        Self {
            kind,
            outcomes: outcomes.into_iter().map(Into::into).collect(),
        }
    }

    /// Appends an outcome while the collection is being built.
    pub fn push(&mut self, outcome: impl Into<Outcome>) {
        self.outcomes.push(outcome.into());
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Outcome> {
        self.outcomes.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Returns the `i`-th outcome itself.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<&Outcome> {
        self.outcomes.get(i)
    }

    /// Returns the common dimension of the outcomes.
    ///
    /// `1` for scalars, `k` for numeric tuples of length `k`, and `0` when
    /// shapes are inconsistent or not numeric. Computed on every call.
    #[must_use]
    pub fn dimension(&self) -> usize {
        dimension(&self.outcomes)
    }

    /// Applies `fun` to every outcome, preserving order.
    #[must_use]
    pub fn apply<F, O>(&self, fun: F) -> Self
    where
        F: Fn(&Outcome) -> O,
        O: Into<Outcome>,
    {
        self.derive(self.outcomes.iter().map(|x| fun(x).into()).collect())
    }

    /// Extracts component `i` from every outcome.
    ///
    /// This is vectorized indexing, not positional access; use
    /// [`get`](Results::get) for the `i`-th outcome. For trajectories,
    /// component `i` is the time slice at `t = i`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotIndexable`] if any outcome has no component `i`.
    #[allow(clippy::cast_precision_loss)]
    pub fn component(&self, i: usize) -> Result<Self, Error> {
        if let Kind::Trajectory(_) = self.kind {
            return self.at(i as f64);
        }
        let outcomes = self
            .outcomes
            .iter()
            .map(|x| {
                x.component(i).ok_or_else(|| Error::NotIndexable {
                    index: i,
                    outcome: x.to_string(),
                })
            })
            .collect::<Result<_, _>>()?;
        Ok(self.derive(outcomes))
    }

    /// Keeps only the outcomes for which `predicate` is true, in order.
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&Outcome) -> bool,
    {
        self.derive(
            self.outcomes
                .iter()
                .filter(|x| predicate(*x))
                .cloned()
                .collect(),
        )
    }

    /// Counts the outcomes for which `predicate` is true.
    #[must_use]
    pub fn count<P>(&self, predicate: P) -> usize
    where
        P: Fn(&Outcome) -> bool,
    {
        self.filter(predicate).len()
    }

    /// Counts every outcome.
    #[must_use]
    pub fn count_all(&self) -> usize {
        self.count(|_| true)
    }

    /// Builds a collection of the same kind from new outcomes.
    pub(crate) fn derive(&self, outcomes: Vec<Outcome>) -> Self {
        Self {
            kind: self.kind,
            outcomes,
        }
    }
}

impl FromIterator<Outcome> for Results {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        Self::generic(iter)
    }
}

impl IntoIterator for Results {
    type Item = Outcome;
    type IntoIter = std::vec::IntoIter<Outcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.into_iter()
    }
}

impl<'a> IntoIterator for &'a Results {
    type Item = &'a Outcome;
    type IntoIter = std::slice::Iter<'a, Outcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}
