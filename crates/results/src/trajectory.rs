//! Time slicing and time-function statistics of random process trajectories.

use tally_core::TimeFunction;

use crate::{
    Error, Kind, Results, Summary,
    plot::{self, Figure, PathPlotConfig},
};

impl Results {
    /// Evaluates every trajectory at time `t`.
    ///
    /// The result is a collection of random variable realizations: the
    /// cross-section of all simulated runs at `t`, in simulation order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProcessRequired`] unless the outcomes are
    /// trajectories, and [`Error::NotTimeIndexed`] if an outcome is not a
    /// function of time.
    pub fn at(&self, t: f64) -> Result<Results, Error> {
        let Kind::Trajectory(_) = self.kind() else {
            return Err(Error::ProcessRequired { operation: "at" });
        };
        let values = self
            .iter()
            .map(|x| {
                x.at_time(t).ok_or_else(|| Error::NotTimeIndexed {
                    outcome: x.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Results::numeric(values))
    }

    /// Plots every trajectory over `[tmin, tmax]`.
    ///
    /// Continuous-time trajectories are sampled at 200 evenly spaced times
    /// and drawn as solid lines. Discrete-time trajectories are sampled at
    /// each sample index in range and drawn dashed with markers. The value
    /// axis is padded by 5% of the observed range on each side.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProcessRequired`] unless the outcomes are
    /// trajectories, and an error if a trajectory does not take numeric
    /// values.
    pub fn plot_paths(&self, config: &PathPlotConfig) -> Result<Figure, Error> {
        let Kind::Trajectory(index) = self.kind() else {
            return Err(Error::ProcessRequired {
                operation: "plot_paths",
            });
        };
        plot::paths(self.as_slice(), index, config)
    }

    /// Lifts a statistic of time slices to a function of time.
    ///
    /// The returned function owns a copy of the trajectories and recomputes
    /// `stat(self.at(t))` on every evaluation.
    pub(crate) fn pointwise(
        &self,
        stat: fn(&Results) -> Result<Summary, Error>,
    ) -> TimeFunction<Result<Summary, Error>> {
        let index = match self.kind() {
            Kind::Trajectory(index) => index,
            Kind::Generic | Kind::Numeric => tally_core::TimeIndex::default(),
        };
        let trajectories = self.clone();
        TimeFunction::new(index, move |t| stat(&trajectories.at(t)?))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use tally_core::{Outcome, Path, TimeIndex};

    use super::*;

    fn lines() -> Results {
        Results::trajectories(
            [Path::new(|t| t), Path::new(|t| 2.0 * t)],
            TimeIndex::continuous(),
        )
    }

    #[test]
    fn slices_across_trajectories() {
        let slice = lines().at(1.0).unwrap();

        assert_eq!(slice.kind(), Kind::Numeric);
        assert_eq!(slice.get(0), Some(&Outcome::Real(1.0)));
        assert_eq!(slice.get(1), Some(&Outcome::Real(2.0)));
    }

    #[test]
    fn component_is_a_time_slice() {
        let slice = lines().component(3).unwrap();
        assert_eq!(slice.as_slice(), [Outcome::Real(3.0), Outcome::Real(6.0)]);
    }

    #[test]
    fn mean_is_a_function_of_time() {
        let mean = lines().mean().unwrap();
        let mean = mean.function().unwrap();

        for t in [0.0, 1.0, 2.5, 10.0] {
            let value = mean.eval(t).unwrap().scalar().unwrap();
            assert_relative_eq!(value, 1.5 * t);
        }
        // Re-evaluating gives the same answer.
        assert_relative_eq!(mean.eval(2.0).unwrap().scalar().unwrap(), 3.0);
    }

    #[test]
    fn var_and_sd_are_functions_of_time() {
        let results = lines();
        let var = results.var().unwrap();
        let sd = results.sd().unwrap();

        // Values t and 2t have population variance t²/4.
        let t = 4.0;
        assert_relative_eq!(var.function().unwrap().eval(t).unwrap().scalar().unwrap(), 4.0);
        assert_relative_eq!(sd.function().unwrap().eval(t).unwrap().scalar().unwrap(), 2.0);
    }

    #[test]
    fn discrete_time_functions_evaluate_by_sample_index() {
        let index = TimeIndex::discrete(2.0).unwrap();
        let results = Results::trajectories([Path::new(|t| t), Path::new(|t| t + 1.0)], index);
        let mean = results.mean().unwrap();
        let mean = mean.function().unwrap();

        assert_eq!(mean.index(), index);
        // Sample 3 is at t = 1.5.
        assert_relative_eq!(mean.at_index(3).unwrap().scalar().unwrap(), 2.0);
    }

    #[test]
    fn slicing_requires_trajectories() {
        assert_eq!(
            Results::numeric([1, 2]).at(0.0),
            Err(Error::ProcessRequired { operation: "at" })
        );
    }

    #[test]
    fn non_path_outcomes_cannot_be_sliced() {
        let results = Results::trajectories([Outcome::Int(1)], TimeIndex::continuous());
        assert_eq!(
            results.at(0.0),
            Err(Error::NotTimeIndexed {
                outcome: "1".into()
            })
        );
    }

    #[test]
    fn statistics_without_slicing_are_not_applicable() {
        let results = lines();
        assert_eq!(
            results.cov(),
            Err(Error::SliceRequired { operation: "cov" })
        );
        assert_eq!(
            results.standardize(),
            Err(Error::SliceRequired {
                operation: "standardize"
            })
        );
    }
}
