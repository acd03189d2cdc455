//! Queryable collections of simulation outcomes.
//!
//! A [`Results`] holds the outcomes of repeated simulation, in simulation
//! order, tagged with the [`Kind`] of thing that was simulated:
//!
//! - [`Kind::Generic`]: outcomes of a probability space. Supports querying
//!   (`apply`, `filter`, `count`, comparisons) and tabulation.
//! - [`Kind::Numeric`]: realizations of a random variable. Adds moment
//!   statistics and plot dispatch.
//! - [`Kind::Trajectory`]: paths of a random process. Adds time slicing, and
//!   turns mean, variance and standard deviation into functions of time.
//!
//! Operations that make no sense for a kind return an [`Error`] naming what
//! to do instead, such as defining a random variable or taking a time slice.
//!
//! # Example
//!
//! ```
//! use tally_results::Results;
//!
//! let rolls = Results::numeric([3, 1, 4, 1, 5, 2]);
//!
//! assert_eq!(rolls.count_gt(2), 3);
//! assert_eq!(rolls.mean().unwrap().scalar(), Some(8.0 / 3.0));
//! ```
//!
//! # Features
//!
//! - `plot`: an egui window backend for drawing [`plot::Figure`]s.

mod compare;
mod error;
mod moments;
pub mod plot;
mod preview;
mod results;
mod summary;
mod tabulate;
mod trajectory;

pub use compare::Comparison;
pub use error::Error;
pub use preview::PreviewRow;
pub use results::{Kind, Results};
pub use summary::{Association, Summary};

pub use tally_core::{Outcome, Path, Table, TimeFunction, TimeIndex};
