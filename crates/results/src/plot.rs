//! Plot dispatch for simulated outcomes.
//!
//! Plotting here means deciding *what* to draw. [`Results::plot`] inspects
//! the dimension of the outcomes and how discrete each component looks, picks
//! a plot, computes every data array, and returns a backend-neutral
//! [`Figure`]. Drawing is left to a [`Backend`].
//!
//! - Scalars: impulses for discrete data, a histogram otherwise, or any of
//!   `hist`, `density`, `rug`, `impulse`, `hist+density`, `hist+rug`
//! - Pairs: a scatter plot, or `marginal`, `hist2d`, `tile`, `mosaic`, or
//!   `violin` when compatible with the discreteness of the components
//! - Longer tuples: one line trace per outcome
//!
//! Data are judged discrete when more than 80% of the distinct values occur
//! more than once.
//!
//! With the `plot` feature, [`show`] opens a native window for a figure.

mod compute;
mod config;
mod discrete;
mod figure;
mod jitter;
mod select;
#[cfg(feature = "plot")]
mod window;


#[cfg(feature = "plot")]
pub use window::{Window, show};

pub use config::{ConfigError, PathPlotConfig, PlotConfig};
pub use figure::{
    Backend, Directive, Figure, Layout, LineStyle, Mark, Orientation, Panel, ViolinBody,
};
pub use select::{Bivariate, PlotType, Univariate};

use tally_core::{Outcome, TimeIndex, dimension};

use crate::{Error, Kind, Results};
use compute::{MOSAIC_FLOOR, bounds, crosstab, density, histogram, histogram2d, levels, median};
use discrete::{is_discrete, value_counts};
use jitter::Jitter;

/// Opacity for scalar and pair plots unless configured.
const DEFAULT_ALPHA: f64 = 0.5;

/// Opacity for per-outcome line traces unless configured.
const TRACE_ALPHA: f64 = 0.1;

/// Bins in each marginal histogram.
const MARGINAL_BINS: usize = 10;

/// Height at which rug ticks are drawn.
const RUG_HEIGHT: f64 = 0.001;

/// Points sampled along each path in continuous time.
const PATH_POINTS: usize = 200;

/// Fraction of the value range added above and below path plots.
const Y_PADDING: f64 = 0.05;

impl Results {
    /// Chooses and computes a plot of the outcomes.
    ///
    /// Realizations of a random variable are plotted according to their
    /// dimension and the requested [`PlotType`]s.
    ///
    /// Trajectories are plotted over the default time range with
    /// [`plot_paths`](Results::plot_paths). Only the configured alpha carries
    /// over; bins, normalization and jitter do not apply to paths.
    ///
    /// # Errors
    ///
    /// Returns an error for outcomes of a probability space, for empty,
    /// non-numeric or non-finite outcomes, when the requested plot types are
    /// not compatible with the data, and when plot types are requested for
    /// trajectories.
    pub fn plot(&self, config: &PlotConfig) -> Result<Figure, Error> {
        match self.kind() {
            Kind::Generic => Err(Error::RandomVariableRequired { operation: "plot" }),
            Kind::Numeric => dispatch(self.as_slice(), config),
            Kind::Trajectory(_) => {
                if let Some(types) = config.types() {
                    return Err(Error::UnsupportedPlot {
                        requested: select::describe(types),
                        reason: "trajectories are drawn as paths; use plot_paths".into(),
                    });
                }
                let paths = PathPlotConfig::default();
                let paths = match config.alpha() {
                    Some(alpha) => PathPlotConfig::new(paths.tmin(), paths.tmax(), alpha)?,
                    None => paths,
                };
                self.plot_paths(&paths)
            }
        }
    }
}

fn dispatch(outcomes: &[Outcome], config: &PlotConfig) -> Result<Figure, Error> {
    if outcomes.is_empty() {
        return Err(Error::Empty { operation: "plot" });
    }

    let dimension = dimension(outcomes);
    tracing::debug!(dimension, outcomes = outcomes.len(), "dispatching plot");

    match dimension {
        1 => {
            let values = outcomes
                .iter()
                .map(|x| Ok(numbers(x)?[0]))
                .collect::<Result<Vec<_>, Error>>()?;
            univariate(&values, config)
        }
        2 => {
            let (xs, ys) = outcomes
                .iter()
                .map(|x| numbers(x).map(|v| (v[0], v[1])))
                .collect::<Result<(Vec<_>, Vec<_>), Error>>()?;
            bivariate(xs, ys, config)
        }
        _ => traces(outcomes, config),
    }
}

/// Returns the numbers making up a scalar or a numeric tuple.
///
/// Every number must be finite.
fn numbers(outcome: &Outcome) -> Result<Vec<f64>, Error> {
    let values = outcome
        .as_f64()
        .map(|x| vec![x])
        .or_else(|| outcome.to_vector())
        .ok_or_else(|| Error::NonNumeric {
            outcome: outcome.to_string(),
        })?;
    match values.iter().find(|x| !x.is_finite()) {
        Some(&value) => Err(Error::NonFinite {
            value,
            outcome: outcome.to_string(),
        }),
        None => Ok(values),
    }
}

fn univariate(values: &[f64], config: &PlotConfig) -> Result<Figure, Error> {
    let counts = value_counts(values);
    let discrete = is_discrete(&counts);
    let fallback = [if discrete {
        PlotType::Impulse
    } else {
        PlotType::Hist
    }];
    let choice = Univariate::select(config.types().unwrap_or(&fallback))?;
    tracing::debug!(?choice, discrete, distinct = counts.len(), "selected plot");

    let alpha = config.alpha().unwrap_or(DEFAULT_ALPHA);
    let hist = || {
        let hist = histogram(values, config.bins(), config.normalize());
        Directive::Histogram {
            edges: hist.edges,
            heights: hist.heights,
            orientation: Orientation::Vertical,
            alpha,
        }
    };
    let rug = || Directive::Rug {
        positions: values.to_vec(),
        height: RUG_HEIGHT,
    };

    let mut figure = Figure::new(Layout::Single);
    match choice {
        Univariate::Hist => figure.push(Panel::Main, hist()),
        Univariate::Density => figure.push(Panel::Main, density_curve(values)?),
        Univariate::Rug => figure.push(Panel::Main, rug()),
        Univariate::HistDensity => {
            figure.push(Panel::Main, hist());
            figure.push(Panel::Main, density_curve(values)?);
        }
        Univariate::HistRug => {
            figure.push(Panel::Main, hist());
            figure.push(Panel::Main, rug());
        }
        Univariate::Impulse => {
            let mut xs: Vec<f64> = counts.keys().filter_map(|key| key.as_f64()).collect();
            let heights = if config.normalize() {
                let total = counts.total();
                counts.values().map(|count| count / total).collect()
            } else {
                counts.values().collect()
            };
            if config.jitter() {
                let half_width = 0.02 * compute::span(&xs);
                Jitter::new(config.seed()).shift(&mut xs, half_width);
            }
            figure.set_y_label(if config.normalize() {
                "Relative Frequency"
            } else {
                "Count"
            });
            figure.push(Panel::Main, Directive::Impulses { xs, heights, alpha });
        }
    }
    Ok(figure)
}

fn density_curve(values: &[f64]) -> Result<Directive, Error> {
    density(values)
        .map(|curve| Directive::Density {
            xs: curve.xs,
            ys: curve.ys,
        })
        .ok_or_else(|| Error::UnsupportedPlot {
            requested: PlotType::Density.to_string(),
            reason: "density estimation needs at least two distinct values".into(),
        })
}

#[allow(clippy::cast_precision_loss)]
fn bivariate(mut xs: Vec<f64>, mut ys: Vec<f64>, config: &PlotConfig) -> Result<Figure, Error> {
    let discrete_x = is_discrete(&value_counts(&xs));
    let discrete_y = is_discrete(&value_counts(&ys));
    let choice = Bivariate::select(
        config.types().unwrap_or(&[PlotType::Scatter]),
        discrete_x,
        discrete_y,
    )?;
    tracing::debug!(?choice, discrete_x, discrete_y, "selected plot");

    let alpha = config.alpha().unwrap_or(DEFAULT_ALPHA);
    let layout = match choice {
        Bivariate::ScatterMarginal | Bivariate::Hist2dMarginal => Layout::JointWithMarginals,
        _ => Layout::Single,
    };
    let mut figure = Figure::new(layout);

    match choice {
        Bivariate::Scatter | Bivariate::ScatterMarginal => {
            if config.jitter() {
                let mut jitter = Jitter::new(config.seed());
                let (sd_x, sd_y) = (0.01 * compute::span(&xs), 0.01 * compute::span(&ys));
                jitter.scatter(&mut xs, sd_x);
                jitter.scatter(&mut ys, sd_y);
            }
            figure.push(
                Panel::Main,
                Directive::Scatter {
                    xs: xs.clone(),
                    ys: ys.clone(),
                    alpha,
                },
            );
        }
        Bivariate::Hist2d | Bivariate::Hist2dMarginal => {
            let hist = histogram2d(&xs, &ys, config.bins());
            figure.push(
                Panel::Main,
                Directive::Histogram2d {
                    x_edges: hist.x_edges,
                    y_edges: hist.y_edges,
                    counts: hist.counts,
                },
            );
        }
        Bivariate::Tile => {
            let (x_levels, y_levels) = (levels(&xs), levels(&ys));
            let frequencies = crosstab(&xs, &ys, &x_levels, &y_levels) / xs.len() as f64;
            figure.push(
                Panel::Main,
                Directive::Tile {
                    x_levels,
                    y_levels,
                    frequencies,
                },
            );
        }
        Bivariate::Mosaic => {
            let (x_levels, y_levels) = (levels(&xs), levels(&ys));
            let counts = crosstab(&xs, &ys, &x_levels, &y_levels) + MOSAIC_FLOOR;
            figure.push(
                Panel::Main,
                Directive::Mosaic {
                    x_levels,
                    y_levels,
                    counts,
                },
            );
        }
        Bivariate::ViolinByX => figure.push(
            Panel::Main,
            Directive::Violin {
                bodies: violins(&xs, &ys),
                orientation: Orientation::Vertical,
                alpha,
            },
        ),
        Bivariate::ViolinByY => figure.push(
            Panel::Main,
            Directive::Violin {
                bodies: violins(&ys, &xs),
                orientation: Orientation::Horizontal,
                alpha,
            },
        ),
    }

    if layout == Layout::JointWithMarginals {
        for (panel, values, orientation) in [
            (Panel::Top, &xs, Orientation::Vertical),
            (Panel::Right, &ys, Orientation::Horizontal),
        ] {
            let hist = histogram(values, MARGINAL_BINS, false);
            figure.push(
                panel,
                Directive::Histogram {
                    edges: hist.edges,
                    heights: hist.heights,
                    orientation,
                    alpha: 1.0,
                },
            );
        }
    }
    Ok(figure)
}

/// Groups `values` by each level of `keys`, one violin per level.
fn violins(keys: &[f64], values: &[f64]) -> Vec<ViolinBody> {
    levels(keys)
        .into_iter()
        .filter_map(|level| {
            let group: Vec<f64> = keys
                .iter()
                .zip(values)
                .filter(|&(&key, _)| key == level)
                .map(|(_, &value)| value)
                .collect();
            let (min, max) = bounds(&group)?;
            let outline = density(&group)
                .map(|curve| curve.xs.into_iter().zip(curve.ys).map(|(x, y)| [x, y]).collect())
                .unwrap_or_default();
            Some(ViolinBody {
                level,
                median: median(&group)?,
                min,
                max,
                outline,
            })
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn traces(outcomes: &[Outcome], config: &PlotConfig) -> Result<Figure, Error> {
    let alpha = config.alpha().unwrap_or(TRACE_ALPHA);
    let mut figure = Figure::new(Layout::Single);
    for (i, outcome) in outcomes.iter().enumerate() {
        let ys = numbers(outcome)?;
        let xs = (0..ys.len()).map(|j| j as f64).collect();
        tracing::trace!(trace = i, points = ys.len(), "adding trace");
        figure.push(
            Panel::Main,
            Directive::Line {
                xs,
                ys,
                style: LineStyle::SolidWithMarkers,
                alpha,
            },
        );
    }
    Ok(figure)
}

/// Samples every trajectory over the configured time range.
///
/// Continuous time is sampled at evenly spaced points; discrete time at every
/// sample index in range.
pub(crate) fn paths(
    outcomes: &[Outcome],
    index: TimeIndex,
    config: &PathPlotConfig,
) -> Result<Figure, Error> {
    let (ts, style): (Vec<f64>, _) = if index.is_continuous() {
        (
            compute::linspace(config.tmin(), config.tmax(), PATH_POINTS),
            LineStyle::Solid,
        )
    } else {
        (
            index
                .steps(config.tmin(), config.tmax())
                .map(|n| index.time(n))
                .collect(),
            LineStyle::DashedWithMarkers,
        )
    };

    let mut figure = Figure::new(Layout::Single);
    let mut limits: Option<(f64, f64)> = None;
    for (i, outcome) in outcomes.iter().enumerate() {
        let ys = ts
            .iter()
            .map(|&t| value_at(outcome, t))
            .collect::<Result<Vec<_>, _>>()?;
        if let Some((lo, hi)) = bounds(&ys) {
            limits = Some(limits.map_or((lo, hi), |(a, b)| (a.min(lo), b.max(hi))));
        }
        tracing::trace!(path = i, points = ys.len(), "sampled path");
        figure.push(
            Panel::Main,
            Directive::Line {
                xs: ts.clone(),
                ys,
                style,
                alpha: config.alpha(),
            },
        );
    }

    figure.set_x_label("Time (t)");
    if let Some(limits) = limits {
        figure.set_y_limits(compute::pad(limits, Y_PADDING));
    }
    tracing::debug!(
        paths = outcomes.len(),
        points = ts.len(),
        continuous = index.is_continuous(),
        "plotted paths"
    );
    Ok(figure)
}

fn value_at(outcome: &Outcome, t: f64) -> Result<f64, Error> {
    let value = outcome.at_time(t).ok_or_else(|| Error::NotTimeIndexed {
        outcome: outcome.to_string(),
    })?;
    match value.as_f64() {
        Some(x) if x.is_finite() => Ok(x),
        Some(x) => Err(Error::NonFinite {
            value: x,
            outcome: outcome.to_string(),
        }),
        None => Err(Error::NonNumeric {
            outcome: value.to_string(),
        }),
    }
}
