use tally_core::TableError;
use thiserror::Error;

use crate::plot::ConfigError;

/// Errors raised when an operation does not apply to a collection of outcomes.
///
/// Every variant is a "not applicable" failure: the request is well formed
/// but meaningless for the outcomes at hand. Messages name the corrective
/// action where one exists.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error(
        "you can only call .{operation}() on simulations of random variables, but these \
         outcomes were simulated from a probability space; define a random variable on the \
         probability space, simulate it, then call .{operation}() on those simulations"
    )]
    RandomVariableRequired { operation: &'static str },

    #[error("cannot compute {operation}: outcomes have inconsistent or non-numeric dimension")]
    InconsistentDimension { operation: &'static str },

    #[error("{operation} requires outcomes of dimension 2 or more, found dimension {dimension}")]
    Univariate {
        operation: &'static str,
        dimension: usize,
    },

    #[error("cannot compute {operation} of an empty collection")]
    Empty { operation: &'static str },

    #[error("{operation} requires at least {required} outcomes, found {found}")]
    TooFewOutcomes {
        operation: &'static str,
        required: usize,
        found: usize,
    },

    #[error("outcome {outcome} has no component {index}")]
    NotIndexable { index: usize, outcome: String },

    #[error("outcome {outcome} is not a function of time")]
    NotTimeIndexed { outcome: String },

    #[error("{operation} is only defined for simulations of random processes")]
    ProcessRequired { operation: &'static str },

    #[error(
        "{operation} is not defined for random process simulations; take a time slice with \
         .at(t) first"
    )]
    SliceRequired { operation: &'static str },

    #[error("cannot plot non-numeric outcome {outcome}")]
    NonNumeric { outcome: String },

    #[error("cannot plot non-finite value {value} from outcome {outcome}")]
    NonFinite { value: f64, outcome: String },

    #[error("unknown plot type {0:?}")]
    UnknownPlotType(String),

    #[error("cannot draw plot type {requested}: {reason}")]
    UnsupportedPlot { requested: String, reason: String },

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
