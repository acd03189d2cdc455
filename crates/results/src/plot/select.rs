use std::{fmt, str::FromStr};

use crate::Error;

/// A plot type that can be requested from [`Results::plot`].
///
/// Types combine: requesting `[Hist, Density]` draws a histogram with a
/// density curve on top.
///
/// [`Results::plot`]: crate::Results::plot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlotType {
    Hist,
    Density,
    Rug,
    Impulse,
    Scatter,
    Marginal,
    Hist2d,
    Tile,
    Mosaic,
    Violin,
}

impl PlotType {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Hist => "hist",
            Self::Density => "density",
            Self::Rug => "rug",
            Self::Impulse => "impulse",
            Self::Scatter => "scatter",
            Self::Marginal => "marginal",
            Self::Hist2d => "hist2d",
            Self::Tile => "tile",
            Self::Mosaic => "mosaic",
            Self::Violin => "violin",
        }
    }
}

impl fmt::Display for PlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlotType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hist" => Ok(Self::Hist),
            "density" => Ok(Self::Density),
            "rug" => Ok(Self::Rug),
            "impulse" | "bar" => Ok(Self::Impulse),
            "scatter" => Ok(Self::Scatter),
            "marginal" => Ok(Self::Marginal),
            "hist2d" => Ok(Self::Hist2d),
            "tile" => Ok(Self::Tile),
            "mosaic" => Ok(Self::Mosaic),
            "violin" => Ok(Self::Violin),
            _ => Err(Error::UnknownPlotType(s.to_owned())),
        }
    }
}

/// The plot drawn for one-dimensional outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Univariate {
    Hist,
    Density,
    Rug,
    HistDensity,
    HistRug,
    Impulse,
}

impl Univariate {
    /// Allowed type groups, checked in order. The first group that contains
    /// every requested type wins.
    const GROUPS: [(&'static [PlotType], Self); 6] = [
        (&[PlotType::Hist], Self::Hist),
        (&[PlotType::Density], Self::Density),
        (&[PlotType::Rug], Self::Rug),
        (&[PlotType::Hist, PlotType::Density], Self::HistDensity),
        (&[PlotType::Hist, PlotType::Rug], Self::HistRug),
        (&[PlotType::Impulse], Self::Impulse),
    ];

    /// Selects the plot for the requested types.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedPlot`] if no allowed group covers the
    /// request.
    pub fn select(requested: &[PlotType]) -> Result<Self, Error> {
        Self::GROUPS
            .iter()
            .find(|(allowed, _)| within(requested, allowed))
            .map(|&(_, choice)| choice)
            .ok_or_else(|| Error::UnsupportedPlot {
                requested: describe(requested),
                reason: "one-dimensional outcomes support hist, density, rug, impulse, \
                         hist+density, or hist+rug"
                    .into(),
            })
    }
}

/// The plot drawn for pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bivariate {
    Scatter,
    ScatterMarginal,
    Hist2d,
    Hist2dMarginal,
    Tile,
    Mosaic,

    /// One violin per level of the discrete first component.
    ViolinByX,

    /// One violin per level of the discrete second component.
    ViolinByY,
}

impl Bivariate {
    /// Selects the plot for the requested types, given which components are
    /// discrete.
    ///
    /// - `scatter` and `marginal` suit any pair
    /// - `hist2d` requires both components continuous
    /// - `tile` and `mosaic` require both components discrete
    /// - `violin` requires exactly one discrete component
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedPlot`] when the request is incompatible
    /// with the discreteness of the components.
    pub fn select(
        requested: &[PlotType],
        discrete_x: bool,
        discrete_y: bool,
    ) -> Result<Self, Error> {
        use PlotType::{Hist2d, Marginal, Mosaic, Scatter, Tile, Violin};

        let discrete_both = discrete_x && discrete_y;
        let continuous_both = !discrete_x && !discrete_y;
        let unsupported = |reason: &str| Error::UnsupportedPlot {
            requested: describe(requested),
            reason: reason.to_owned(),
        };

        if within(requested, &[Scatter]) {
            Ok(Self::Scatter)
        } else if within(requested, &[Scatter, Marginal]) {
            Ok(Self::ScatterMarginal)
        } else if within(requested, &[Hist2d]) && continuous_both {
            Ok(Self::Hist2d)
        } else if within(requested, &[Hist2d, Marginal]) && continuous_both {
            Ok(Self::Hist2dMarginal)
        } else if within(requested, &[Tile]) && discrete_both {
            Ok(Self::Tile)
        } else if within(requested, &[Mosaic]) && discrete_both {
            Ok(Self::Mosaic)
        } else if discrete_both {
            Err(unsupported(
                "both components are discrete; use mosaic, tile, or scatter",
            ))
        } else if within(requested, &[Violin]) && discrete_x && !discrete_y {
            Ok(Self::ViolinByX)
        } else if within(requested, &[Violin]) && !discrete_x && discrete_y {
            Ok(Self::ViolinByY)
        } else if within(requested, &[Violin]) {
            Err(unsupported("violin requires exactly one discrete component"))
        } else if within(requested, &[Tile]) || within(requested, &[Mosaic]) {
            Err(unsupported("tile and mosaic require both components discrete"))
        } else {
            Err(unsupported(
                "hist2d requires both components continuous; pairs support scatter, \
                 marginal, hist2d, tile, mosaic, or violin",
            ))
        }
    }
}

/// Returns `true` when every requested type is in `allowed`.
fn within(requested: &[PlotType], allowed: &[PlotType]) -> bool {
    requested.iter().all(|t| allowed.contains(t))
}

pub(crate) fn describe(requested: &[PlotType]) -> String {
    requested
        .iter()
        .map(|t| t.name())
        .collect::<Vec<_>>()
        .join("+")
}
