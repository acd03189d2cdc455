//! Behavior of outcome collections across simulated data.

use approx::assert_relative_eq;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tally_results::{
    Error, Kind, Outcome, Results,
    plot::{PlotConfig, PlotType},
};

/// Simulates `n` rolls of a fair die.
fn die_rolls(n: usize, seed: u64) -> Results {
    let mut rng = StdRng::seed_from_u64(seed);
    Results::numeric((0..n).map(|_| rng.gen_range(1..=6_i64)))
}

/// Simulates `n` pairs of independent uniform values.
fn uniform_pairs(n: usize, seed: u64) -> Results {
    let mut rng = StdRng::seed_from_u64(seed);
    Results::numeric((0..n).map(|_| (rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0))))
}

#[test]
fn apply_preserves_length_and_order() {
    let rolls = die_rolls(200, 1);
    let doubled = rolls.apply(|x| x.as_f64().map_or(0.0, |x| 2.0 * x));

    assert_eq!(doubled.len(), rolls.len());
    assert_eq!(doubled.kind(), Kind::Numeric);
    for (x, y) in rolls.iter().zip(&doubled) {
        assert_eq!(y.as_f64(), x.as_f64().map(|x| 2.0 * x));
    }
}

#[test]
fn filter_keeps_matching_outcomes_in_order() {
    let rolls = die_rolls(300, 2);
    let high = rolls.filter(|x| x.as_f64().is_some_and(|x| x >= 5.0));

    let expected: Vec<&Outcome> = rolls
        .iter()
        .filter(|x| x.as_f64().is_some_and(|x| x >= 5.0))
        .collect();
    assert_eq!(high.iter().collect::<Vec<_>>(), expected);
    assert_eq!(
        rolls.count(|x| x.as_f64().is_some_and(|x| x >= 5.0)),
        high.len()
    );
    assert_eq!(rolls.count_geq(5), high.len());
    assert_eq!(rolls.filter_geq(5), high);
}

#[test]
fn comparison_filters_and_counters_agree() {
    let rolls = die_rolls(500, 3);

    assert_eq!(rolls.count_eq(3) + rolls.count_neq(3), rolls.count_all());
    assert_eq!(rolls.count_lt(3) + rolls.count_geq(3), rolls.count_all());
    assert_eq!(rolls.count_leq(3) + rolls.count_gt(3), rolls.count_all());
    assert_eq!(rolls.filter_eq(3).len(), rolls.count_eq(3));
    assert_eq!(rolls.filter_gt(6).len(), 0);
}

#[test]
fn comparisons_are_elementwise() {
    let results = Results::numeric([1, 2, 3]);

    let equal = results.eq_each(2);
    assert_eq!(
        equal.as_slice(),
        [Outcome::Bool(false), Outcome::Bool(true), Outcome::Bool(false)]
    );
    assert_eq!(results.lt_each(3).count_eq(true), 2);
    assert_eq!(results.ge_each(2).count_eq(true), 2);
}

#[test]
fn normalized_tabulation_sums_to_one() {
    let rolls = die_rolls(1_000, 4);
    let table = rolls.tabulate(None, true).unwrap();

    assert_eq!(table.len(), 6);
    assert_relative_eq!(table.total(), 1.0, epsilon = 1e-12);
}

#[test]
fn tabulation_lists_unobserved_outcomes() {
    let results = Results::numeric([1, 1, 2]);
    let faces: Vec<Outcome> = (1..=6).map(Outcome::from).collect();
    let table = results.tabulate(Some(faces.as_slice()), false).unwrap();

    assert_eq!(table.len(), 6);
    for face in 3..=6 {
        assert_eq!(table.get_outcome(&face.into()), Some(0.0));
    }
}

#[test]
fn moments_of_known_values() {
    let results = Results::numeric([1, 2, 3, 4]);

    assert_relative_eq!(results.mean().unwrap().scalar().unwrap(), 2.5);
    assert_relative_eq!(results.var().unwrap().scalar().unwrap(), 1.25);
    assert_relative_eq!(results.sd().unwrap().scalar().unwrap(), 1.25_f64.sqrt());

    let pairs = Results::numeric([(1, 2), (3, 4)]);
    assert_eq!(pairs.mean().unwrap().vector(), Some([2.0, 3.0].as_slice()));
}

#[test]
fn standardized_values_have_zero_mean_and_unit_sd() {
    let z = die_rolls(400, 5).standardize().unwrap();

    assert_relative_eq!(z.mean().unwrap().scalar().unwrap(), 0.0, epsilon = 1e-10);
    assert_relative_eq!(z.sd().unwrap().scalar().unwrap(), 1.0, epsilon = 1e-10);
}

#[test]
fn independent_components_are_nearly_uncorrelated() {
    let pairs = uniform_pairs(5_000, 6);

    let corr = pairs.corr().unwrap().coefficient().unwrap();
    assert!(corr.abs() < 0.05, "correlation {corr} should be near zero");

    // Var(U) = 1/12 for a standard uniform.
    let cov = pairs
        .apply(|x| {
            let v = x.to_vector().unwrap_or_default();
            (v[0], v[0] + v[1])
        })
        .cov()
        .unwrap()
        .coefficient()
        .unwrap();
    assert_relative_eq!(cov, 1.0 / 12.0, epsilon = 0.01);
}

#[test]
fn dimension_classification() {
    assert_eq!(Results::numeric([1.0, 2.5]).dimension(), 1);
    assert_eq!(uniform_pairs(10, 7).dimension(), 2);
    assert_eq!(
        Results::numeric([Outcome::from(1), Outcome::tuple([1, 2])]).dimension(),
        0
    );
}

#[test]
fn discreteness_boundary_at_eighty_percent() {
    // Four of five distinct values repeat: exactly 80%, so not discrete.
    let at_boundary = Results::numeric([1, 1, 2, 2, 3, 3, 4, 4, 5]);
    let figure = at_boundary.plot(&PlotConfig::default()).unwrap();
    assert_eq!(figure.marks()[0].directive.name(), "histogram");

    // Five of six: above 80%.
    let above = Results::numeric([1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6]);
    let figure = above.plot(&PlotConfig::default()).unwrap();
    assert_eq!(figure.marks()[0].directive.name(), "impulses");
}

#[test]
fn operations_on_generic_outcomes_are_not_applicable() {
    let coins = Results::generic(["H", "T", "H"]);
    let required = |operation| Error::RandomVariableRequired { operation };

    assert_eq!(coins.mean().unwrap_err(), required("mean"));
    assert_eq!(coins.var().unwrap_err(), required("var"));
    assert_eq!(coins.sd().unwrap_err(), required("sd"));
    assert_eq!(coins.cov().unwrap_err(), required("cov"));
    assert_eq!(coins.corr().unwrap_err(), required("corr"));
    assert_eq!(coins.standardize().unwrap_err(), required("standardize"));
    assert_eq!(
        coins.plot(&PlotConfig::default()).unwrap_err(),
        required("plot")
    );

    let message = coins.mean().unwrap_err().to_string();
    assert!(message.contains("define a random variable"));

    // Querying still works.
    assert_eq!(coins.count_eq("H"), 2);
}

#[test]
fn inconsistent_outcomes_have_no_moments() {
    let mixed = Results::numeric([Outcome::from(1), Outcome::tuple([1, 2])]);
    assert_eq!(
        mixed.mean().unwrap_err(),
        Error::InconsistentDimension { operation: "mean" }
    );
    assert_eq!(
        Results::numeric([1, 2, 3]).cov().unwrap_err(),
        Error::Univariate {
            operation: "cov",
            dimension: 1
        }
    );
}

#[test]
fn requested_plot_types_are_validated() {
    let pairs = Results::numeric([(0, 1), (0, 1), (1, 0), (1, 0)]);
    let config = PlotConfig::new().with_types([PlotType::Hist2d]);

    let error = pairs.plot(&config).unwrap_err();
    assert!(matches!(error, Error::UnsupportedPlot { .. }));
    assert!(error.to_string().contains("mosaic"));

    assert_eq!(
        PlotConfig::new().with_type_names(["pie"]).unwrap_err(),
        Error::UnknownPlotType("pie".into())
    );
}

#[test]
fn display_previews_first_nine_and_last() {
    let text = die_rolls(50, 8).to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Index  Result");
    assert_eq!(lines.len(), 1 + 9 + 1 + 1);
    assert!(lines[10].starts_with("..."));
    assert!(lines[11].starts_with("49"));
}
