use std::{fmt, ops::Range, sync::Arc};

use thiserror::Error;

/// Errors that can occur when constructing a [`TimeIndex`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum TimeIndexError {
    #[error("sampling rate must be finite and positive, got {0}")]
    SamplingRate(f64),
}

/// Describes how a random process is indexed by time.
///
/// A continuous index has sampling rate `fs = ∞`. A discrete index samples at
/// a finite rate `fs`, so sample `n` occurs at time `n / fs`.
///
/// The index is a small `Copy` value shared by a process definition and every
/// collection of trajectories simulated from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeIndex {
    fs: f64,
}

impl TimeIndex {
    /// Creates a continuous time index.
    #[must_use]
    pub const fn continuous() -> Self {
        Self { fs: f64::INFINITY }
    }

    /// Creates a discrete time index sampled at rate `fs`.
    ///
    /// # Errors
    ///
    /// Returns an error if `fs` is not finite and positive.
    pub fn discrete(fs: f64) -> Result<Self, TimeIndexError> {
        if !fs.is_finite() || fs <= 0.0 {
            return Err(TimeIndexError::SamplingRate(fs));
        }
        Ok(Self { fs })
    }

    /// Returns the sampling rate, `f64::INFINITY` for continuous time.
    #[must_use]
    pub fn fs(&self) -> f64 {
        self.fs
    }

    #[must_use]
    pub fn is_continuous(&self) -> bool {
        self.fs.is_infinite()
    }

    /// Returns the time of sample `n`.
    ///
    /// For a continuous index, sample `n` is taken to be time `n`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn time(&self, n: i64) -> f64 {
        if self.is_continuous() {
            n as f64
        } else {
            n as f64 / self.fs
        }
    }

    /// Returns the sample indices covering `[tmin, tmax)`.
    ///
    /// The range runs from `floor(tmin * fs)` up to, but excluding,
    /// `ceil(tmax * fs)`. A continuous index has no samples.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn steps(&self, tmin: f64, tmax: f64) -> Range<i64> {
        if self.is_continuous() {
            return 0..0;
        }
        let start = (tmin * self.fs).floor() as i64;
        let end = (tmax * self.fs).ceil() as i64;
        start..end
    }
}

impl Default for TimeIndex {
    fn default() -> Self {
        Self::continuous()
    }
}

/// A function of time, re-evaluable at any `t`.
///
/// Statistics of a random process are time functions: evaluating one at `t`
/// computes the statistic across all simulated trajectories at that time.
/// Nothing is precomputed, and clones share the same function.
pub struct TimeFunction<T> {
    fun: Arc<dyn Fn(f64) -> T + Send + Sync>,
    index: TimeIndex,
}

impl<T> TimeFunction<T> {
    /// Creates a time function over `index`.
    pub fn new<F>(index: TimeIndex, fun: F) -> Self
    where
        F: Fn(f64) -> T + Send + Sync + 'static,
    {
        Self {
            fun: Arc::new(fun),
            index,
        }
    }

    /// Evaluates the function at time `t`.
    pub fn eval(&self, t: f64) -> T {
        (self.fun)(t)
    }

    /// Evaluates the function at the time of sample `n`.
    pub fn at_index(&self, n: i64) -> T {
        self.eval(self.index.time(n))
    }

    /// Evaluates the function at each of the given times.
    pub fn sample(&self, ts: &[f64]) -> Vec<T> {
        ts.iter().map(|&t| self.eval(t)).collect()
    }

    #[must_use]
    pub fn index(&self) -> TimeIndex {
        self.index
    }
}

impl<T> Clone for TimeFunction<T> {
    fn clone(&self) -> Self {
        Self {
            fun: Arc::clone(&self.fun),
            index: self.index,
        }
    }
}

impl<T> fmt::Debug for TimeFunction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeFunction")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}
