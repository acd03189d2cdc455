use ndarray::Array2;
use tally_core::TimeFunction;

use crate::Error;

/// The value of a moment statistic (mean, variance, standard deviation).
#[derive(Debug, Clone)]
pub enum Summary {
    /// The statistic of scalar outcomes.
    Scalar(f64),

    /// The componentwise statistic of fixed-length numeric tuples.
    Vector(Vec<f64>),

    /// For random processes: the statistic across trajectories as a function
    /// of time.
    Function(TimeFunction<Result<Summary, Error>>),
}

impl Summary {
    #[must_use]
    pub fn scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn vector(&self) -> Option<&[f64]> {
        match self {
            Self::Vector(values) => Some(values),
            _ => None,
        }
    }

    #[must_use]
    pub fn function(&self) -> Option<&TimeFunction<Result<Summary, Error>>> {
        match self {
            Self::Function(fun) => Some(fun),
            _ => None,
        }
    }
}

/// The value of a covariance or correlation.
#[derive(Debug, Clone, PartialEq)]
pub enum Association {
    /// The off-diagonal coefficient between the two components of pairs.
    Coefficient(f64),

    /// The full matrix for tuples of three or more components.
    Matrix(Array2<f64>),
}

impl Association {
    #[must_use]
    pub fn coefficient(&self) -> Option<f64> {
        match self {
            Self::Coefficient(value) => Some(*value),
            Self::Matrix(_) => None,
        }
    }

    #[must_use]
    pub fn matrix(&self) -> Option<&Array2<f64>> {
        match self {
            Self::Matrix(matrix) => Some(matrix),
            Self::Coefficient(_) => None,
        }
    }
}
