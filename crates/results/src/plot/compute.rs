//! Data arrays behind each plot directive.

use itertools::{Itertools, MinMaxResult};
use ndarray::Array2;

/// Floor added to every mosaic cell so empty cells keep a drawable area.
pub(crate) const MOSAIC_FLOOR: f64 = 1e-8;

/// Number of points on a kernel density curve.
const DENSITY_POINTS: usize = 200;

/// Returns the smallest and largest finite value, or `None` when there are
/// none.
pub(crate) fn bounds(values: &[f64]) -> Option<(f64, f64)> {
    let finite = values.iter().copied().filter(|x| x.is_finite());
    match finite.minmax_by(f64::total_cmp) {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(x) => Some((x, x)),
        MinMaxResult::MinMax(lo, hi) => Some((lo, hi)),
    }
}

/// Returns the range covered by `values`, zero when empty.
pub(crate) fn span(values: &[f64]) -> f64 {
    bounds(values).map_or(0.0, |(lo, hi)| hi - lo)
}

/// Widens `(lo, hi)` by `fraction` of its length on each side.
pub(crate) fn pad((lo, hi): (f64, f64), fraction: f64) -> (f64, f64) {
    let buffer = fraction * (hi - lo);
    (lo - buffer, hi + buffer)
}

/// Returns `n` evenly spaced points from `start` to `end` inclusive.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Returns `bins + 1` equal-width edges covering `values`.
///
/// A degenerate range is widened to one unit centered on the value.
fn edges(values: &[f64], bins: usize) -> Vec<f64> {
    let (lo, hi) = match bounds(values) {
        Some((lo, hi)) if lo < hi => (lo, hi),
        Some((x, _)) => (x - 0.5, x + 0.5),
        None => (0.0, 1.0),
    };
    linspace(lo, hi, bins + 1)
}

/// Returns the bin holding `x`; the last bin is closed on the right.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn bin_of(x: f64, edges: &[f64]) -> Option<usize> {
    let bins = edges.len().checked_sub(1)?;
    let (lo, hi) = (edges[0], edges[bins]);
    if !(lo..=hi).contains(&x) {
        return None;
    }
    let i = ((x - lo) / (hi - lo) * bins as f64).floor() as usize;
    Some(i.min(bins - 1))
}

/// A one-dimensional histogram.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Histogram {
    pub(crate) edges: Vec<f64>,
    pub(crate) heights: Vec<f64>,
}

/// Bins `values` into `bins` equal-width bins.
///
/// With `normalize`, heights are densities: each bin's area is its share of
/// the values, so the total area is one.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn histogram(values: &[f64], bins: usize, normalize: bool) -> Histogram {
    let edges = edges(values, bins);
    let mut heights = vec![0.0; bins];
    for &x in values {
        if let Some(i) = bin_of(x, &edges) {
            heights[i] += 1.0;
        }
    }
    if normalize && !values.is_empty() {
        let width = edges[1] - edges[0];
        let n = values.len() as f64;
        for height in &mut heights {
            *height /= n * width;
        }
    }
    Histogram { edges, heights }
}

/// A two-dimensional histogram; `counts[[i, j]]` is x bin `i`, y bin `j`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Histogram2d {
    pub(crate) x_edges: Vec<f64>,
    pub(crate) y_edges: Vec<f64>,
    pub(crate) counts: Array2<f64>,
}

pub(crate) fn histogram2d(xs: &[f64], ys: &[f64], bins: usize) -> Histogram2d {
    let x_edges = edges(xs, bins);
    let y_edges = edges(ys, bins);
    let mut counts = Array2::zeros((bins, bins));
    for (&x, &y) in xs.iter().zip(ys) {
        if let (Some(i), Some(j)) = (bin_of(x, &x_edges), bin_of(y, &y_edges)) {
            counts[[i, j]] += 1.0;
        }
    }
    Histogram2d {
        x_edges,
        y_edges,
        counts,
    }
}

/// Gaussian kernel bandwidth by Scott's rule, `σ · n^(-1/5)`.
///
/// Returns `None` unless there are two or more values with nonzero spread.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn scott_bandwidth(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let n = n as f64;
    let mean = values.iter().sum::<f64>() / n;
    let ss: f64 = values.iter().map(|x| (x - mean).powi(2)).sum();
    let sd = (ss / (n - 1.0)).sqrt();
    let bandwidth = sd * n.powf(-0.2);
    (bandwidth.is_finite() && bandwidth > 0.0).then_some(bandwidth)
}

/// A sampled kernel density estimate.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Density {
    pub(crate) xs: Vec<f64>,
    pub(crate) ys: Vec<f64>,
}

/// Estimates the density of `values` with a Gaussian kernel.
///
/// The curve extends three bandwidths past the data on each side.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn density(values: &[f64]) -> Option<Density> {
    let bandwidth = scott_bandwidth(values)?;
    let (lo, hi) = bounds(values)?;
    let xs = linspace(lo - 3.0 * bandwidth, hi + 3.0 * bandwidth, DENSITY_POINTS);
    let norm = values.len() as f64 * bandwidth * (2.0 * std::f64::consts::PI).sqrt();
    let ys = xs
        .iter()
        .map(|&x| {
            values
                .iter()
                .map(|&v| (-0.5 * ((x - v) / bandwidth).powi(2)).exp())
                .sum::<f64>()
                / norm
        })
        .collect();
    Some(Density { xs, ys })
}

/// Returns the distinct values in ascending order.
pub(crate) fn levels(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .copied()
        .sorted_by(f64::total_cmp)
        .dedup()
        .collect()
}

/// Counts each `(x, y)` level pair; rows follow `y_levels`, columns `x_levels`.
pub(crate) fn crosstab(xs: &[f64], ys: &[f64], x_levels: &[f64], y_levels: &[f64]) -> Array2<f64> {
    let position = |levels: &[f64], v: f64| levels.iter().position(|&l| l == v);
    let mut table = Array2::zeros((y_levels.len(), x_levels.len()));
    for (&x, &y) in xs.iter().zip(ys) {
        if let (Some(j), Some(i)) = (position(x_levels, x), position(y_levels, y)) {
            table[[i, j]] += 1.0;
        }
    }
    table
}

/// Returns the median, or `None` when empty.
pub(crate) fn median(values: &[f64]) -> Option<f64> {
    let sorted: Vec<f64> = values.iter().copied().sorted_by(f64::total_cmp).collect();
    let n = sorted.len();
    match n {
        0 => None,
        _ if n % 2 == 1 => Some(sorted[n / 2]),
        _ => Some(0.5 * (sorted[n / 2 - 1] + sorted[n / 2])),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn bounds_and_padding() {
        assert_eq!(bounds(&[]), None);
        assert_eq!(bounds(&[3.0]), Some((3.0, 3.0)));
        assert_eq!(bounds(&[2.0, -1.0, 5.0]), Some((-1.0, 5.0)));

        let (lo, hi) = pad((0.0, 10.0), 0.05);
        assert_relative_eq!(lo, -0.5);
        assert_relative_eq!(hi, 10.5);
    }

    #[test]
    fn bounds_skip_non_finite_values() {
        assert_eq!(bounds(&[1.0, f64::NAN, 4.0, 2.0]), Some((1.0, 4.0)));
        assert_eq!(bounds(&[f64::NEG_INFINITY, 3.0, f64::INFINITY]), Some((3.0, 3.0)));
        assert_eq!(bounds(&[f64::NAN]), None);

        let hist = histogram(&[1.0, 2.0, 3.0, 4.0, f64::NAN], 3, false);
        assert_eq!(hist.edges, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(hist.heights.iter().sum::<f64>(), 4.0);
    }

    #[test]
    fn linspace_includes_both_ends() {
        let xs = linspace(0.0, 10.0, 200);
        assert_eq!(xs.len(), 200);
        assert_relative_eq!(xs[0], 0.0);
        assert_relative_eq!(xs[199], 10.0, epsilon = 1e-12);
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
    }

    #[test]
    fn histogram_counts_and_densities() {
        let values = [0.0, 1.0, 1.0, 2.0, 4.0];

        let counts = histogram(&values, 4, false);
        assert_eq!(counts.edges, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(counts.heights, vec![1.0, 2.0, 1.0, 1.0]);

        let densities = histogram(&values, 4, true);
        // Unit-width bins, so the heights sum to the total area.
        assert_relative_eq!(densities.heights.iter().sum::<f64>(), 1.0);
    }

    #[test]
    fn histogram_of_one_repeated_value() {
        let hist = histogram(&[2.0, 2.0], 2, false);
        assert_eq!(hist.edges, vec![1.5, 2.0, 2.5]);
        assert_eq!(hist.heights, vec![0.0, 2.0]);
    }

    #[test]
    fn histogram2d_bins_pairs() {
        let hist = histogram2d(&[0.0, 1.0, 1.0], &[0.0, 0.0, 1.0], 2);
        assert_eq!(hist.counts[[0, 0]], 1.0);
        assert_eq!(hist.counts[[1, 0]], 1.0);
        assert_eq!(hist.counts[[1, 1]], 1.0);
        assert_eq!(hist.counts.sum(), 3.0);
    }

    #[test]
    fn density_integrates_to_about_one() {
        let values: Vec<f64> = (0..50).map(|i| f64::from(i % 7)).collect();
        let curve = density(&values).unwrap();

        let dx = curve.xs[1] - curve.xs[0];
        let area: f64 = curve.ys.iter().sum::<f64>() * dx;
        assert_relative_eq!(area, 1.0, epsilon = 0.02);
    }

    #[test]
    fn density_needs_spread() {
        assert_eq!(density(&[1.0]), None);
        assert_eq!(density(&[1.0, 1.0, 1.0]), None);
    }

    #[test]
    fn levels_and_crosstab() {
        let xs = [1.0, 0.0, 1.0, 1.0];
        let ys = [5.0, 5.0, 6.0, 5.0];
        let x_levels = levels(&xs);
        let y_levels = levels(&ys);
        assert_eq!(x_levels, vec![0.0, 1.0]);
        assert_eq!(y_levels, vec![5.0, 6.0]);

        let table = crosstab(&xs, &ys, &x_levels, &y_levels);
        assert_eq!(table, ndarray::array![[1.0, 2.0], [0.0, 1.0]]);
    }

    #[test]
    fn medians() {
        assert_eq!(median(&[]), None);
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[4.0, 1.0, 2.0, 3.0]), Some(2.5));
    }
}
