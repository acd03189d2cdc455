//! Moment statistics of random variable realizations.
//!
//! Scalar outcomes give scalar statistics. Outcomes that are numeric tuples
//! of a common length give componentwise statistics. Variance and standard
//! deviation use the population denominator `N`; covariance uses the sample
//! denominator `N - 1`.

use ndarray::{Array1, Array2, Axis};
use tally_core::{Outcome, all_scalar};

use crate::{Association, Error, Kind, Results, Summary};

/// Numeric outcomes arranged as an `n × k` matrix, one row per outcome.
struct Sample {
    scalar: bool,
    data: Array2<f64>,
}

impl Sample {
    fn new(outcomes: &[Outcome], operation: &'static str) -> Result<Self, Error> {
        if outcomes.is_empty() {
            return Err(Error::Empty { operation });
        }

        let scalar = all_scalar(outcomes);
        let rows: Vec<Vec<f64>> = if scalar {
            outcomes
                .iter()
                .filter_map(Outcome::as_f64)
                .map(|x| vec![x])
                .collect()
        } else {
            let k = tally_core::dimension(outcomes);
            if k == 0 {
                return Err(Error::InconsistentDimension { operation });
            }
            outcomes.iter().filter_map(Outcome::to_vector).collect()
        };

        let k = rows[0].len();
        let data = Array2::from_shape_fn((rows.len(), k), |(i, j)| rows[i][j]);
        Ok(Self { scalar, data })
    }

    fn summarize(&self, stat: Array1<f64>) -> Summary {
        if self.scalar {
            Summary::Scalar(stat[0])
        } else {
            Summary::Vector(stat.to_vec())
        }
    }

    fn mean(&self) -> Array1<f64> {
        self.data
            .mean_axis(Axis(0))
            .unwrap_or_else(|| Array1::from_elem(self.data.ncols(), f64::NAN))
    }

    fn var(&self) -> Array1<f64> {
        self.data.var_axis(Axis(0), 0.0)
    }

    fn sd(&self) -> Array1<f64> {
        self.data.std_axis(Axis(0), 0.0)
    }
}

/// Sample covariance matrix of the columns of `data`.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn covariance(data: &Array2<f64>) -> Array2<f64> {
    let n = data.nrows() as f64;
    let mean = data
        .mean_axis(Axis(0))
        .unwrap_or_else(|| Array1::zeros(data.ncols()));
    let centered = data - &mean;
    centered.t().dot(&centered) / (n - 1.0)
}

/// Pearson correlation matrix of the columns of `data`.
pub(crate) fn correlation(data: &Array2<f64>) -> Array2<f64> {
    let cov = covariance(data);
    let sd = cov.diag().mapv(f64::sqrt);
    Array2::from_shape_fn(cov.dim(), |(i, j)| cov[[i, j]] / (sd[i] * sd[j]))
}

impl Results {
    /// Returns the mean.
    ///
    /// Scalar outcomes give [`Summary::Scalar`], numeric tuples the
    /// componentwise mean as [`Summary::Vector`]. For trajectories the result
    /// is [`Summary::Function`], the mean across trajectories at each time.
    ///
    /// # Errors
    ///
    /// Returns an error for outcomes of a probability space, for empty
    /// collections, and for outcomes without a consistent numeric dimension.
    pub fn mean(&self) -> Result<Summary, Error> {
        self.moment("mean", Results::mean, Sample::mean)
    }

    /// Returns the population variance (denominator `N`).
    ///
    /// Dispatches like [`mean`](Results::mean).
    ///
    /// # Errors
    ///
    /// Same as [`mean`](Results::mean).
    pub fn var(&self) -> Result<Summary, Error> {
        self.moment("var", Results::var, Sample::var)
    }

    /// Returns the population standard deviation.
    ///
    /// Dispatches like [`mean`](Results::mean).
    ///
    /// # Errors
    ///
    /// Same as [`mean`](Results::mean).
    pub fn sd(&self) -> Result<Summary, Error> {
        self.moment("sd", Results::sd, Sample::sd)
    }

    /// Returns the sample covariance between tuple components.
    ///
    /// Pairs give the single off-diagonal coefficient; longer tuples the full
    /// covariance matrix.
    ///
    /// # Errors
    ///
    /// Returns an error unless the outcomes are random variable realizations
    /// of dimension 2 or more, with at least two outcomes.
    pub fn cov(&self) -> Result<Association, Error> {
        self.association("cov", covariance)
    }

    /// Returns the correlation between tuple components.
    ///
    /// Pairs give the single coefficient; longer tuples the full matrix.
    ///
    /// # Errors
    ///
    /// Same as [`cov`](Results::cov).
    pub fn corr(&self) -> Result<Association, Error> {
        self.association("corr", correlation)
    }

    /// Rescales outcomes to mean zero and standard deviation one.
    ///
    /// Scalars become `(x - mean) / sd`; tuples are standardized
    /// componentwise and returned as tuples of reals.
    ///
    /// # Errors
    ///
    /// Returns an error when [`mean`](Results::mean) or [`sd`](Results::sd)
    /// would, and for trajectories.
    pub fn standardize(&self) -> Result<Results, Error> {
        let operation = "standardize";
        match self.kind() {
            Kind::Generic => Err(Error::RandomVariableRequired { operation }),
            Kind::Trajectory(_) => Err(Error::SliceRequired { operation }),
            Kind::Numeric => {
                let sample = Sample::new(self.as_slice(), operation)?;
                let z = (&sample.data - &sample.mean()) / &sample.sd();
                let outcomes = z
                    .rows()
                    .into_iter()
                    .map(|row| {
                        if sample.scalar {
                            Outcome::Real(row[0])
                        } else {
                            Outcome::tuple(row.iter().copied())
                        }
                    })
                    .collect();
                Ok(self.derive(outcomes))
            }
        }
    }

    fn moment(
        &self,
        operation: &'static str,
        pointwise: fn(&Results) -> Result<Summary, Error>,
        stat: fn(&Sample) -> Array1<f64>,
    ) -> Result<Summary, Error> {
        match self.kind() {
            Kind::Generic => Err(Error::RandomVariableRequired { operation }),
            Kind::Numeric => {
                let sample = Sample::new(self.as_slice(), operation)?;
                Ok(sample.summarize(stat(&sample)))
            }
            Kind::Trajectory(_) => Ok(Summary::Function(self.pointwise(pointwise))),
        }
    }

    fn association(
        &self,
        operation: &'static str,
        stat: fn(&Array2<f64>) -> Array2<f64>,
    ) -> Result<Association, Error> {
        match self.kind() {
            Kind::Generic => return Err(Error::RandomVariableRequired { operation }),
            Kind::Trajectory(_) => return Err(Error::SliceRequired { operation }),
            Kind::Numeric => {}
        }

        let dimension = self.dimension();
        if dimension == 0 {
            return Err(Error::InconsistentDimension { operation });
        }
        if dimension == 1 {
            return Err(Error::Univariate {
                operation,
                dimension,
            });
        }
        if self.len() < 2 {
            return Err(Error::TooFewOutcomes {
                operation,
                required: 2,
                found: self.len(),
            });
        }

        let sample = Sample::new(self.as_slice(), operation)?;
        let matrix = stat(&sample.data);
        if dimension == 2 {
            Ok(Association::Coefficient(matrix[[0, 1]]))
        } else {
            Ok(Association::Matrix(matrix))
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn scalar_moments_use_population_denominator() {
        let results = Results::numeric([1, 2, 3, 4]);

        assert_relative_eq!(results.mean().unwrap().scalar().unwrap(), 2.5);
        assert_relative_eq!(results.var().unwrap().scalar().unwrap(), 1.25);
        assert_relative_eq!(results.sd().unwrap().scalar().unwrap(), 1.25_f64.sqrt());
    }

    #[test]
    fn vector_moments_are_componentwise() {
        let results = Results::numeric([(1, 2), (3, 4)]);

        let mean = results.mean().unwrap();
        let var = results.var().unwrap();
        let sd = results.sd().unwrap();

        assert_eq!(mean.vector(), Some([2.0, 3.0].as_slice()));
        for (v, s) in var.vector().unwrap().iter().zip(sd.vector().unwrap()) {
            assert_relative_eq!(*v, 1.0);
            assert_relative_eq!(*s, 1.0);
        }
    }

    #[test]
    fn single_component_tuples_give_vectors() {
        let results = Results::numeric([Outcome::tuple([2]), Outcome::tuple([4])]);
        assert_eq!(results.mean().unwrap().vector(), Some([3.0].as_slice()));
    }

    #[test]
    fn inconsistent_dimension_is_not_applicable() {
        let results = Results::numeric([Outcome::Int(1), Outcome::from((1, 2))]);

        assert_eq!(
            results.mean().unwrap_err(),
            Error::InconsistentDimension { operation: "mean" }
        );
        assert!(results.var().is_err());
        assert!(results.sd().is_err());
    }

    #[test]
    fn empty_collections_have_no_moments() {
        let results = Results::numeric(Vec::<Outcome>::new());
        assert_eq!(results.mean().unwrap_err(), Error::Empty { operation: "mean" });
    }

    #[test]
    fn generic_outcomes_reject_every_statistic() {
        let results = Results::generic([1, 2, 3]);

        for err in [
            results.mean().unwrap_err(),
            results.var().unwrap_err(),
            results.sd().unwrap_err(),
        ] {
            assert!(matches!(err, Error::RandomVariableRequired { .. }));
        }
        assert!(matches!(
            results.cov().unwrap_err(),
            Error::RandomVariableRequired { operation: "cov" }
        ));
        assert!(matches!(
            results.corr().unwrap_err(),
            Error::RandomVariableRequired { operation: "corr" }
        ));
        assert!(results.standardize().is_err());
    }

    #[test]
    fn covariance_of_pairs_is_a_coefficient() {
        let results = Results::numeric([(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]);

        // Sample covariance: sum((x - 2)(y - 4)) / 2 = (2 + 0 + 2) / 2.
        assert_relative_eq!(results.cov().unwrap().coefficient().unwrap(), 2.0);
        assert_relative_eq!(results.corr().unwrap().coefficient().unwrap(), 1.0);
    }

    #[test]
    fn anticorrelated_pairs() {
        let results = Results::numeric([(1, 3), (2, 2), (3, 1)]);
        assert_relative_eq!(results.corr().unwrap().coefficient().unwrap(), -1.0);
    }

    #[test]
    fn triples_give_full_matrices() {
        let results = Results::numeric([(1, 0, 5), (2, 0, 3), (3, 1, 1), (4, 1, 2)]);

        let cov = results.cov().unwrap();
        let cov = cov.matrix().unwrap();
        assert_eq!(cov.dim(), (3, 3));
        assert_relative_eq!(cov[[0, 0]], 5.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(cov[[0, 1]], cov[[1, 0]]);

        let corr = results.corr().unwrap();
        let corr = corr.matrix().unwrap();
        for i in 0..3 {
            assert_relative_eq!(corr[[i, i]], 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn covariance_needs_multivariate_outcomes() {
        let scalars = Results::numeric([1, 2, 3]);
        assert_eq!(
            scalars.cov().unwrap_err(),
            Error::Univariate {
                operation: "cov",
                dimension: 1
            }
        );

        let ragged = Results::numeric([Outcome::from((1, 2)), Outcome::from((1, 2, 3))]);
        assert_eq!(
            ragged.corr().unwrap_err(),
            Error::InconsistentDimension { operation: "corr" }
        );

        let single = Results::numeric([(1, 2)]);
        assert!(matches!(
            single.cov().unwrap_err(),
            Error::TooFewOutcomes { found: 1, .. }
        ));
    }

    #[test]
    fn standardized_scalars_have_zero_mean_unit_sd() {
        let results = Results::numeric([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        let z = results.standardize().unwrap();

        assert_eq!(z.kind(), Kind::Numeric);
        assert_relative_eq!(z.mean().unwrap().scalar().unwrap(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(z.sd().unwrap().scalar().unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(z.get(0).and_then(Outcome::as_f64).unwrap(), -1.5, epsilon = 1e-12);
    }

    #[test]
    fn standardized_tuples_are_componentwise() {
        let results = Results::numeric([(1, 10), (3, 30)]);
        let z = results.standardize().unwrap();

        let first = z.get(0).and_then(Outcome::to_vector).unwrap();
        let second = z.get(1).and_then(Outcome::to_vector).unwrap();
        assert_eq!(z.dimension(), 2);
        for (a, b) in first.iter().zip(&second) {
            assert_relative_eq!(*a, -1.0, epsilon = 1e-12);
            assert_relative_eq!(*b, 1.0, epsilon = 1e-12);
        }
    }
}
