//! Pipeline-level tests for the bag plot
//!
//! Exercises the full sort → partition → hull → cache path through the
//! public API, including the degenerate point-count scenarios and the
//! input-validation failure modes.

use bagplot::data::Table;
use bagplot::plots::{BagPlot, PlotElement};
use bagplot::{Figure, PipelineType, ScatterPlot};
use glam::DVec2;

fn bag_with_input(x: Vec<f64>, y: Vec<f64>, d: Vec<f64>) -> BagPlot {
    let table = Table::new()
        .with_column("x", x)
        .with_column("y", y)
        .with_column("density", d);
    let mut bag = BagPlot::new();
    bag.set_input(table, "x", "y", "density");
    bag
}

#[test]
fn test_empty_input_yields_fresh_empty_contours() {
    let mut bag = bag_with_input(vec![], vec![], vec![]);
    assert!(bag.recompute());
    assert!(bag.is_ready());
    assert!(bag.median_contour().unwrap().is_empty());
    assert!(bag.outer_contour().unwrap().is_empty());
}

#[test]
fn test_single_point_fails_both_thresholds() {
    let mut bag = bag_with_input(vec![1.5], vec![2.5], vec![3.0]);
    assert!(bag.recompute());
    // Thresholds are 0.5*3 = 1.5 and 0.99*3 = 2.97; the point's cumulative
    // sum of 3 fails both inclusion tests, so both contours come out empty
    // while the cache still turns fresh.
    assert!(bag.is_ready());
    assert!(bag.median_contour().unwrap().is_empty());
    assert!(bag.outer_contour().unwrap().is_empty());
}

#[test]
fn test_two_points_outer_keeps_highest_density_point() {
    // Densities 1 and 3, S = 4: thresholds 2 and 3.96. Descending walk:
    // sum=3 -> median no (3<2 false), outer yes (3<3.96); sum=4 -> stop.
    let mut bag = bag_with_input(vec![0.0, 10.0], vec![0.0, 0.0], vec![1.0, 3.0]);
    assert!(bag.recompute());
    assert!(bag.median_contour().unwrap().is_empty());
    let outer = bag.outer_contour().unwrap();
    assert_eq!(outer.len(), 1);
    assert_eq!(outer.points()[0], DVec2::new(10.0, 0.0));
}

#[test]
fn test_manual_cumulative_trace_10_5_5() {
    // The canonical trace: densities [10, 5, 5], S = 20, thresholds 10 and
    // 19.8. Median stays empty; outer takes the first two sorted points.
    let mut bag = bag_with_input(
        vec![0.0, 1.0, 2.0],
        vec![0.0, 1.0, 0.0],
        vec![10.0, 5.0, 5.0],
    );
    assert!(bag.recompute());
    assert!(bag.median_contour().unwrap().is_empty());
    let outer = bag.outer_contour().unwrap();
    assert_eq!(outer.len(), 2);
    assert!(!outer.is_closed());
    // Highest-density point comes first
    assert_eq!(outer.points()[0], DVec2::new(0.0, 0.0));
}

#[test]
fn test_uniform_cloud_produces_nested_closed_hulls() {
    // A 5x5 grid with a strong density peak in the middle
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    let mut ds = Vec::new();
    for i in 0..5 {
        for j in 0..5 {
            xs.push(i as f64);
            ys.push(j as f64);
            let center_dist = ((i as f64 - 2.0).powi(2) + (j as f64 - 2.0).powi(2)).sqrt();
            ds.push(10.0 / (1.0 + center_dist));
        }
    }
    let mut bag = bag_with_input(xs.clone(), ys.clone(), ds);
    assert!(bag.recompute());

    let median = bag.median_contour().unwrap().clone();
    let outer = bag.outer_contour().unwrap().clone();
    assert!(median.is_closed());
    assert!(outer.is_closed());

    // Median hull lies inside the outer hull
    for v in median.ring() {
        assert!(outer.contains(*v), "median vertex {v:?} outside outer hull");
    }
    // Hull vertices are input points
    let inputs: Vec<DVec2> = xs
        .iter()
        .zip(ys.iter())
        .map(|(&x, &y)| DVec2::new(x, y))
        .collect();
    for v in outer.ring() {
        assert!(inputs.contains(v));
    }
}

#[test]
fn test_outer_mass_and_size_dominate_median() {
    let ds: Vec<f64> = (1..=30).map(|i| (i as f64).sqrt()).collect();
    let xs: Vec<f64> = (0..30).map(|i| (i as f64 * 0.77).sin() * 3.0).collect();
    let ys: Vec<f64> = (0..30).map(|i| (i as f64 * 0.39).cos() * 2.0).collect();
    let mut bag = bag_with_input(xs, ys, ds);
    assert!(bag.recompute());
    // Ring sizes: outer hull wraps at least as many points
    let median = bag.median_contour().unwrap();
    let outer = bag.outer_contour().unwrap();
    for v in median.ring() {
        assert!(outer.contains(*v));
    }
    assert!(outer.ring().len() >= 2);
}

#[test]
fn test_recompute_is_bit_identical() {
    let mut bag = bag_with_input(
        vec![0.11, -2.3, 1.7, 0.02, 3.4, -1.1, 0.6, 2.2],
        vec![1.4, 0.3, -0.8, 2.6, 1.0, -1.9, 0.0, 0.9],
        vec![5.0, 5.0, 4.0, 4.0, 3.0, 2.0, 1.0, 1.0],
    );
    assert!(bag.recompute());
    let median_a = bag.median_contour().unwrap().clone();
    let outer_a = bag.outer_contour().unwrap().clone();

    // Invalidate by rebinding identical data, then recompute again
    let table = Table::new()
        .with_column("x", vec![0.11, -2.3, 1.7, 0.02, 3.4, -1.1, 0.6, 2.2])
        .with_column("y", vec![1.4, 0.3, -0.8, 2.6, 1.0, -1.9, 0.0, 0.9])
        .with_column("density", vec![5.0, 5.0, 4.0, 4.0, 3.0, 2.0, 1.0, 1.0]);
    bag.set_input(table, "x", "y", "density");
    assert!(!bag.is_ready());
    assert!(bag.recompute());

    assert_eq!(bag.median_contour().unwrap(), &median_a);
    assert_eq!(bag.outer_contour().unwrap(), &outer_a);
}

#[test]
fn test_all_collinear_input_yields_segment() {
    let mut bag = bag_with_input(
        vec![0.0, 1.0, 2.0, 3.0, 4.0],
        vec![0.0, 1.0, 2.0, 3.0, 4.0],
        vec![1.0; 5],
    );
    assert!(bag.recompute());
    let outer = bag.outer_contour().unwrap();
    assert!(!outer.is_closed());
    assert_eq!(outer.len(), 2);
    // Endpoints are extremes of the surviving subset of the diagonal
    for p in outer.points() {
        assert_eq!(p.x, p.y);
    }
}

#[test]
fn test_missing_density_column_keeps_cache_stale() {
    let table = Table::new()
        .with_column("x", vec![0.0, 1.0])
        .with_column("y", vec![0.0, 1.0]);
    let mut bag = BagPlot::new();
    bag.set_input(table, "x", "y", "density");
    assert!(!bag.recompute());
    assert!(!bag.is_ready());
    assert!(bag.median_contour().is_none());

    // Markers still render without the bag overlay
    let batches = bag.render_data();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].pipeline_type, PipelineType::Points);
}

#[test]
fn test_mismatched_convenience_setup_leaves_prior_input_bound() {
    let mut bag = BagPlot::new();
    let good = Table::new()
        .with_column("y", vec![1.0, 2.0])
        .with_column("density", vec![1.0, 1.0]);
    bag.set_input_y_density(good, "y", "density").unwrap();
    assert!(bag.recompute());
    let build_count = bag.cache().build_count();

    let bad = Table::new()
        .with_column("y", vec![1.0, 2.0, 3.0])
        .with_column("density", vec![1.0, 1.0]);
    assert!(bag.set_input_y_density(bad, "y", "density").is_err());

    // Still fresh with the old geometry; a recompute still succeeds against
    // the previously bound table
    assert!(bag.is_ready());
    assert!(bag.recompute());
    assert_eq!(bag.cache().build_count(), build_count + 1);
}

#[test]
fn test_negative_density_rejected() {
    let mut bag = bag_with_input(vec![0.0, 1.0], vec![0.0, 1.0], vec![0.5, -0.1]);
    assert!(!bag.recompute());
    assert!(!bag.is_ready());
}

#[test]
fn test_figure_hosts_bag_over_scatter() {
    let mut fig = Figure::new().with_title("bagplot");
    let scatter = ScatterPlot::new(vec![0.0, 1.0, 2.0], vec![0.0, 2.0, 0.0])
        .unwrap()
        .with_label("raw");
    fig.add_scatter_plot(scatter);

    let mut bag = BagPlot::new();
    bag.set_input(
        Table::new()
            .with_column("x", vec![0.0, 4.0, 4.0, 0.0, 2.0, 2.1, 1.9])
            .with_column("y", vec![0.0, 0.0, 4.0, 4.0, 2.0, 2.1, 1.9])
            .with_column("density", vec![1.0, 1.0, 1.0, 1.0, 8.0, 8.0, 8.0]),
        "x",
        "y",
        "density",
    );
    fig.add_bag_plot(bag);

    let batches = fig.render_data();
    assert!(batches.len() >= 2);
    // Figure update made the bag cache fresh before draw
    let ready = fig.plots().iter().any(|p| match p {
        PlotElement::Bag(b) => b.is_ready(),
        _ => false,
    });
    assert!(ready);

    let entries = fig.legend_entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].label, "density");
}

#[test]
fn test_tooltip_through_bound_bag() {
    let mut bag = BagPlot::new();
    let mut table = Table::new()
        .with_column("x", vec![0.5, 1.5])
        .with_column("y", vec![2.5, 3.5])
        .with_column("density", vec![0.1, 0.9]);
    table.set_text_column("label", vec!["low".into(), "high".into()]);
    bag.set_input(table, "x", "y", "density");
    bag.set_category_column("label");
    bag.tooltip_format = Some("%C: %z at (%x, %y)".to_string());
    let s = bag.tooltip_label(DVec2::new(1.5, 3.5), 1);
    assert_eq!(s, "high: 0.9 at (1.5, 3.5)");
}
