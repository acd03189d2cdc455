//! A native egui window that draws figures.

use eframe::egui::{self, Color32, Stroke};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints, PlotUi, Points, Polygon};
use ndarray::Array2;

use super::{Backend, Directive, Figure, Layout, LineStyle, Orientation, Panel, ViolinBody};

const BLUE: Color32 = Color32::from_rgb(31, 119, 180);

/// Fraction of the window taken by each marginal panel.
const MARGINAL_SHARE: f32 = 0.2;

/// Half the width available to the widest violin.
const VIOLIN_HALF_WIDTH: f64 = 0.4;

/// Opens a blocking egui window displaying `figure`.
///
/// Blocks until the window is closed by the user.
///
/// # Errors
///
/// Returns an error if the native window cannot be created.
pub fn show(figure: Figure, title: &str) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        title,
        options,
        Box::new(move |_cc| Ok(Box::new(FigureApp { figure }))),
    )
}

/// A [`Backend`] that shows each figure in its own window.
#[derive(Debug, Clone)]
pub struct Window {
    title: String,
}

impl Window {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Backend for Window {
    type Error = eframe::Error;

    fn draw(&mut self, figure: &Figure) -> Result<(), Self::Error> {
        show(figure.clone(), &self.title)
    }
}

struct FigureApp {
    figure: Figure,
}

impl eframe::App for FigureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let size = ui.available_size();
            match self.figure.layout() {
                Layout::Single => self.panel(ui, Panel::Main, size.x, size.y),
                Layout::JointWithMarginals => {
                    let main = 1.0 - MARGINAL_SHARE;
                    self.panel(ui, Panel::Top, size.x * main, size.y * MARGINAL_SHARE);
                    ui.horizontal(|ui| {
                        self.panel(ui, Panel::Main, size.x * main, size.y * main);
                        self.panel(ui, Panel::Right, size.x * MARGINAL_SHARE, size.y * main);
                    });
                }
            }
        });
    }
}

impl FigureApp {
    fn panel(&self, ui: &mut egui::Ui, panel: Panel, width: f32, height: f32) {
        let id = match panel {
            Panel::Main => "figure_main",
            Panel::Top => "figure_top",
            Panel::Right => "figure_right",
        };
        let mut plot = Plot::new(id).width(width).height(height);
        if panel == Panel::Main {
            if let Some(label) = self.figure.x_label() {
                plot = plot.x_axis_label(label);
            }
            if let Some(label) = self.figure.y_label() {
                plot = plot.y_axis_label(label);
            }
            if let Some((lo, hi)) = self.figure.y_limits() {
                plot = plot.include_y(lo).include_y(hi);
            }
        }
        plot.show(ui, |plot_ui| {
            for directive in self.figure.directives(panel) {
                draw(plot_ui, directive);
            }
        });
    }
}

#[allow(clippy::cast_possible_truncation)]
fn faded(color: Color32, alpha: f64) -> Color32 {
    color.gamma_multiply(alpha as f32)
}

#[allow(clippy::too_many_lines)]
fn draw(plot_ui: &mut PlotUi, directive: &Directive) {
    match directive {
        Directive::Histogram {
            edges,
            heights,
            orientation,
            alpha,
        } => {
            let bars = edges
                .windows(2)
                .zip(heights)
                .map(|(edge, &height)| {
                    Bar::new(0.5 * (edge[0] + edge[1]), height).width(edge[1] - edge[0])
                })
                .collect();
            let chart = BarChart::new(bars).color(faded(BLUE, *alpha));
            plot_ui.bar_chart(match orientation {
                Orientation::Vertical => chart,
                Orientation::Horizontal => chart.horizontal(),
            });
        }
        Directive::Density { xs, ys } => {
            plot_ui.line(Line::new(points(xs, ys)).color(BLUE));
        }
        Directive::Rug { positions, height } => {
            let ticks: PlotPoints = positions.iter().map(|&x| [x, *height]).collect();
            plot_ui.points(Points::new(ticks).color(Color32::BLACK).radius(1.5));
        }
        Directive::Impulses { xs, heights, alpha } => {
            for (&x, &height) in xs.iter().zip(heights) {
                let stem = vec![[x, 0.0], [x, height]];
                plot_ui.line(Line::new(stem).color(faded(BLUE, *alpha)).width(2.0));
            }
        }
        Directive::Scatter { xs, ys, alpha } => {
            plot_ui.points(Points::new(points(xs, ys)).color(faded(BLUE, *alpha)).radius(2.5));
        }
        Directive::Histogram2d {
            x_edges,
            y_edges,
            counts,
        } => {
            cells(plot_ui, counts, |i, j| {
                [x_edges[i], x_edges[i + 1], y_edges[j], y_edges[j + 1]]
            });
        }
        Directive::Tile { frequencies, .. } => {
            // Rows follow y levels; cells sit at level indices.
            let by_x = frequencies.t().to_owned();
            cells(plot_ui, &by_x, |i, j| {
                let (x, y) = (index(i), index(j));
                [x, x + 1.0, y, y + 1.0]
            });
        }
        Directive::Mosaic { counts, .. } => mosaic(plot_ui, counts),
        Directive::Violin {
            bodies,
            orientation,
            alpha,
        } => {
            for (position, body) in bodies.iter().enumerate() {
                violin(plot_ui, index(position), body, *orientation, *alpha);
            }
        }
        Directive::Line {
            xs,
            ys,
            style,
            alpha,
        } => {
            let color = faded(Color32::BLACK, *alpha);
            let line = Line::new(points(xs, ys)).color(color);
            match style {
                LineStyle::Solid => plot_ui.line(line),
                LineStyle::SolidWithMarkers => {
                    plot_ui.line(line);
                    plot_ui.points(Points::new(points(xs, ys)).color(color).radius(2.0));
                }
                LineStyle::DashedWithMarkers => {
                    plot_ui.line(line.style(egui_plot::LineStyle::dashed_loose()));
                    plot_ui.points(Points::new(points(xs, ys)).color(color).radius(2.0));
                }
            }
        }
    }
}

fn points(xs: &[f64], ys: &[f64]) -> PlotPoints {
    xs.iter().zip(ys).map(|(&x, &y)| [x, y]).collect()
}

#[allow(clippy::cast_precision_loss)]
fn index(i: usize) -> f64 {
    i as f64
}

/// Draws `values[[i, j]]` as shaded rectangles `[x0, x1, y0, y1]`.
fn cells(plot_ui: &mut PlotUi, values: &Array2<f64>, rect: impl Fn(usize, usize) -> [f64; 4]) {
    let max = values.iter().copied().fold(0.0, f64::max);
    if max <= 0.0 {
        return;
    }
    for ((i, j), &value) in values.indexed_iter() {
        rectangle(plot_ui, rect(i, j), faded(BLUE, value / max));
    }
}

/// Columns take widths proportional to their totals; each column is split
/// by the share of each row within it.
fn mosaic(plot_ui: &mut PlotUi, counts: &Array2<f64>) {
    let total = counts.sum();
    if total <= 0.0 {
        return;
    }
    let mut x0 = 0.0;
    for (j, column) in counts.columns().into_iter().enumerate() {
        let column_total = column.sum();
        let x1 = x0 + column_total / total;
        let mut y0 = 0.0;
        for (i, &count) in column.iter().enumerate() {
            let y1 = y0 + count / column_total;
            let shade = 0.3 + 0.7 * index((i + j) % 2);
            rectangle(plot_ui, [x0, x1, y0, y1], faded(BLUE, shade));
            y0 = y1;
        }
        x0 = x1;
    }
}

fn rectangle(plot_ui: &mut PlotUi, [x0, x1, y0, y1]: [f64; 4], fill: Color32) {
    let corners = vec![[x0, y0], [x1, y0], [x1, y1], [x0, y1]];
    plot_ui.polygon(
        Polygon::new(corners)
            .fill_color(fill)
            .stroke(Stroke::new(0.5, Color32::WHITE)),
    );
}

fn violin(
    plot_ui: &mut PlotUi,
    position: f64,
    body: &ViolinBody,
    orientation: Orientation,
    alpha: f64,
) {
    let place = |offset: f64, value: f64| match orientation {
        Orientation::Vertical => [position + offset, value],
        Orientation::Horizontal => [value, position + offset],
    };

    let peak = body.outline.iter().map(|p| p[1]).fold(0.0, f64::max);
    if peak > 0.0 {
        let scale = VIOLIN_HALF_WIDTH / peak;
        let right = body.outline.iter().map(|&[v, d]| place(d * scale, v));
        let left = body.outline.iter().rev().map(|&[v, d]| place(-d * scale, v));
        let outline: Vec<[f64; 2]> = right.chain(left).collect();
        plot_ui.polygon(
            Polygon::new(outline)
                .fill_color(faded(BLUE, alpha))
                .stroke(Stroke::new(1.0, Color32::BLACK)),
        );
    }

    let whisker = vec![place(0.0, body.min), place(0.0, body.max)];
    plot_ui.line(Line::new(whisker).color(Color32::BLACK).width(1.0));
    let half = 0.5 * VIOLIN_HALF_WIDTH;
    let median = vec![place(-half, body.median), place(half, body.median)];
    plot_ui.line(Line::new(median).color(Color32::BLACK).width(1.0));
}
