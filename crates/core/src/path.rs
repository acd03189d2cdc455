use std::{fmt, sync::Arc};

use crate::Outcome;

/// Number of leading values shown when a path is displayed.
const DISPLAY_SAMPLES: u32 = 5;

/// A single simulated trajectory: a pure function from time to an outcome.
///
/// Paths are cheap to clone; clones share the same underlying function.
/// Two paths are equal only when they share that function.
#[derive(Clone)]
pub struct Path {
    fun: Arc<dyn Fn(f64) -> Outcome + Send + Sync>,
}

impl Path {
    /// Creates a path from a function of time.
    pub fn new<F, O>(fun: F) -> Self
    where
        F: Fn(f64) -> O + Send + Sync + 'static,
        O: Into<Outcome>,
    {
        Self {
            fun: Arc::new(move |t| fun(t).into()),
        }
    }

    /// Returns the value of the path at time `t`.
    #[must_use]
    pub fn eval(&self, t: f64) -> Outcome {
        (self.fun)(t)
    }

    /// Evaluates the path at each of the given times.
    #[must_use]
    pub fn sample(&self, ts: &[f64]) -> Vec<Outcome> {
        ts.iter().map(|&t| self.eval(t)).collect()
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.fun), Arc::as_ptr(&other.fun))
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Path").finish_non_exhaustive()
    }
}

/// Shows the first few values at integer times, e.g. `path[0.0, 1.0, 2.0, ...]`.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("path[")?;
        for n in 0..DISPLAY_SAMPLES {
            if n > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", self.eval(f64::from(n)))?;
        }
        f.write_str(", ...]")
    }
}
