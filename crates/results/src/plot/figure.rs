use ndarray::Array2;

/// How the panels of a figure are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// One set of axes.
    Single,

    /// A joint plot with marginal histograms above and to the right.
    JointWithMarginals,
}

/// The panel a mark is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Main,

    /// Marginal distribution of the first component.
    Top,

    /// Marginal distribution of the second component.
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    SolidWithMarkers,
    DashedWithMarkers,
}

/// One violin: the distribution of values at a level of the discrete axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ViolinBody {
    /// The level of the discrete component.
    pub level: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,

    /// `(value, density)` pairs outlining the body. Empty when the group has
    /// too little spread to estimate a density.
    pub outline: Vec<[f64; 2]>,
}

/// A drawing instruction with its computed data.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// Bars over `edges.len() - 1` bins.
    Histogram {
        edges: Vec<f64>,
        heights: Vec<f64>,
        orientation: Orientation,
        alpha: f64,
    },

    /// A kernel density curve.
    Density { xs: Vec<f64>, ys: Vec<f64> },

    /// Tick marks at each value, drawn at a fixed small height.
    Rug { positions: Vec<f64>, height: f64 },

    /// Vertical lines from zero to each height.
    Impulses {
        xs: Vec<f64>,
        heights: Vec<f64>,
        alpha: f64,
    },

    Scatter {
        xs: Vec<f64>,
        ys: Vec<f64>,
        alpha: f64,
    },

    /// Counts per cell; `counts[[i, j]]` is x bin `i`, y bin `j`.
    Histogram2d {
        x_edges: Vec<f64>,
        y_edges: Vec<f64>,
        counts: Array2<f64>,
    },

    /// Relative frequency per level pair; rows follow `y_levels`.
    Tile {
        x_levels: Vec<f64>,
        y_levels: Vec<f64>,
        frequencies: Array2<f64>,
    },

    /// Cross-tabulated counts; rows follow `y_levels`. Every cell carries a
    /// tiny floor so empty cells keep a drawable area.
    Mosaic {
        x_levels: Vec<f64>,
        y_levels: Vec<f64>,
        counts: Array2<f64>,
    },

    /// Violins along the discrete axis. `Vertical` bodies sit at x levels.
    Violin {
        bodies: Vec<ViolinBody>,
        orientation: Orientation,
        alpha: f64,
    },

    Line {
        xs: Vec<f64>,
        ys: Vec<f64>,
        style: LineStyle,
        alpha: f64,
    },
}

impl Directive {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Histogram { .. } => "histogram",
            Self::Density { .. } => "density",
            Self::Rug { .. } => "rug",
            Self::Impulses { .. } => "impulses",
            Self::Scatter { .. } => "scatter",
            Self::Histogram2d { .. } => "hist2d",
            Self::Tile { .. } => "tile",
            Self::Mosaic { .. } => "mosaic",
            Self::Violin { .. } => "violin",
            Self::Line { .. } => "line",
        }
    }
}

/// A directive placed on a panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    pub panel: Panel,
    pub directive: Directive,
}

/// A backend-neutral description of a plot.
///
/// Produced by [`Results::plot`] and [`Results::plot_paths`]. Every data
/// array is already computed; a [`Backend`] only draws.
///
/// [`Results::plot`]: crate::Results::plot
/// [`Results::plot_paths`]: crate::Results::plot_paths
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    layout: Layout,
    marks: Vec<Mark>,
    x_label: Option<String>,
    y_label: Option<String>,
    y_limits: Option<(f64, f64)>,
}

impl Figure {
    pub(crate) fn new(layout: Layout) -> Self {
        Self {
            layout,
            marks: Vec::new(),
            x_label: None,
            y_label: None,
            y_limits: None,
        }
    }

    pub(crate) fn push(&mut self, panel: Panel, directive: Directive) {
        self.marks.push(Mark { panel, directive });
    }

    pub(crate) fn set_x_label(&mut self, label: impl Into<String>) {
        self.x_label = Some(label.into());
    }

    pub(crate) fn set_y_label(&mut self, label: impl Into<String>) {
        self.y_label = Some(label.into());
    }

    pub(crate) fn set_y_limits(&mut self, limits: (f64, f64)) {
        self.y_limits = Some(limits);
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Returns the directives drawn on `panel`, in drawing order.
    pub fn directives(&self, panel: Panel) -> impl Iterator<Item = &Directive> {
        self.marks
            .iter()
            .filter(move |mark| mark.panel == panel)
            .map(|mark| &mark.directive)
    }

    #[must_use]
    pub fn x_label(&self) -> Option<&str> {
        self.x_label.as_deref()
    }

    #[must_use]
    pub fn y_label(&self) -> Option<&str> {
        self.y_label.as_deref()
    }

    /// Returns the value-axis limits, when the figure fixes them.
    #[must_use]
    pub fn y_limits(&self) -> Option<(f64, f64)> {
        self.y_limits
    }

    /// Draws the figure with `backend`.
    ///
    /// # Errors
    ///
    /// Returns whatever error the backend reports.
    pub fn render<B: Backend>(&self, backend: &mut B) -> Result<(), B::Error> {
        backend.draw(self)
    }
}

/// A rendering capability for figures.
///
/// The `plot` feature provides an egui window backend.
pub trait Backend {
    type Error;

    /// Draws a complete figure.
    ///
    /// # Errors
    ///
    /// Returns an error if the figure cannot be drawn.
    fn draw(&mut self, figure: &Figure) -> Result<(), Self::Error>;
}
