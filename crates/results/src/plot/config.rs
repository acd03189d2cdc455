use thiserror::Error;

use super::PlotType;
use crate::Error as ResultsError;

/// Errors that can occur when validating a plot config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("alpha must be within [0, 1]")]
    Alpha,

    #[error("bins must be positive")]
    Bins,

    #[error("time range must be finite with tmin < tmax")]
    TimeRange,
}

fn check_alpha(alpha: f64) -> Result<f64, ConfigError> {
    if (0.0..=1.0).contains(&alpha) {
        Ok(alpha)
    } else {
        Err(ConfigError::Alpha)
    }
}

/// Configuration for plotting random variable realizations.
///
/// Defaults: plot type chosen from the data, alpha chosen per plot type,
/// normalized frequencies, no jitter, 30 histogram bins.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    types: Option<Vec<PlotType>>,
    alpha: Option<f64>,
    normalize: bool,
    jitter: bool,
    bins: usize,
    seed: Option<u64>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            types: None,
            alpha: None,
            normalize: true,
            jitter: false,
            bins: 30,
            seed: None,
        }
    }
}

impl PlotConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests specific plot types instead of choosing from the data.
    #[must_use]
    pub fn with_types(mut self, types: impl IntoIterator<Item = PlotType>) -> Self {
        self.types = Some(types.into_iter().collect());
        self
    }

    /// Requests plot types by name, e.g. `["hist", "density"]`.
    ///
    /// # Errors
    ///
    /// Returns [`ResultsError::UnknownPlotType`] for an unrecognized name.
    pub fn with_type_names<'a>(
        self,
        names: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, ResultsError> {
        let types = names
            .into_iter()
            .map(str::parse)
            .collect::<Result<Vec<PlotType>, _>>()?;
        Ok(self.with_types(types))
    }

    /// Sets the opacity of drawn marks.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Alpha`] if `alpha` is outside `[0, 1]`.
    pub fn with_alpha(mut self, alpha: f64) -> Result<Self, ConfigError> {
        self.alpha = Some(check_alpha(alpha)?);
        Ok(self)
    }

    /// Chooses relative frequencies (`true`) or raw counts (`false`).
    #[must_use]
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Adds small random noise to drawn positions to separate overlapping
    /// marks. Statistics are unaffected.
    #[must_use]
    pub fn with_jitter(mut self, jitter: bool) -> Self {
        self.jitter = jitter;
        self
    }

    /// Sets the number of histogram bins.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Bins`] if `bins` is zero.
    pub fn with_bins(mut self, bins: usize) -> Result<Self, ConfigError> {
        if bins == 0 {
            return Err(ConfigError::Bins);
        }
        self.bins = bins;
        Ok(self)
    }

    /// Seeds the jitter noise for reproducible figures.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the requested plot types, if any.
    #[must_use]
    pub fn types(&self) -> Option<&[PlotType]> {
        self.types.as_deref()
    }

    #[must_use]
    pub fn alpha(&self) -> Option<f64> {
        self.alpha
    }

    #[must_use]
    pub fn normalize(&self) -> bool {
        self.normalize
    }

    #[must_use]
    pub fn jitter(&self) -> bool {
        self.jitter
    }

    #[must_use]
    pub fn bins(&self) -> usize {
        self.bins
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Configuration for plotting random process trajectories.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPlotConfig {
    tmin: f64,
    tmax: f64,
    alpha: f64,
}

impl Default for PathPlotConfig {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.0, 10.0, 0.1).unwrap()
    }
}

impl PathPlotConfig {
    /// Creates a new config with a validated time range and opacity.
    ///
    /// # Errors
    ///
    /// Returns an error if the time range is empty or not finite, or if
    /// `alpha` is outside `[0, 1]`.
    pub fn new(tmin: f64, tmax: f64, alpha: f64) -> Result<Self, ConfigError> {
        if !tmin.is_finite() || !tmax.is_finite() || tmin >= tmax {
            return Err(ConfigError::TimeRange);
        }
        Ok(Self {
            tmin,
            tmax,
            alpha: check_alpha(alpha)?,
        })
    }

    #[must_use]
    pub fn tmin(&self) -> f64 {
        self.tmin
    }

    #[must_use]
    pub fn tmax(&self) -> f64 {
        self.tmax
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}
