//! Core value types for Tally, a library for exploring simulation results.
//!
//! This crate defines the building blocks that outcome collections are made of:
//!
//! - [`Outcome`]: a single value produced by one simulation run
//! - [`Key`] and [`Hashability`]: canonical hashable forms for counting outcomes
//! - [`Shape`] and [`dimension`]: classification of outcome shapes
//! - [`Table`]: an insertion-ordered frequency table
//! - [`TimeIndex`], [`Path`] and [`TimeFunction`]: time-indexed trajectories
//!   and functions of time
//!
//! # Features
//!
//! - `serde` (default): derives `Serialize`/`Deserialize` for [`Key`] and
//!   [`Table`].

pub mod key;
mod outcome;
mod path;
mod shape;
mod table;
mod time;

pub use key::{Hashability, Key, RealKey};
pub use outcome::Outcome;
pub use path::Path;
pub use shape::{Shape, all_scalar, dimension};
pub use table::{Table, TableError};
pub use time::{TimeFunction, TimeIndex, TimeIndexError};
