//! Builds a bag plot over a synthetic two-cluster sample and prints the
//! resulting contours and render batches.

use bagplot::data::Table;
use bagplot::plots::BagPlot;
use bagplot::Figure;

fn main() {
    env_logger::init();

    // Synthetic sample: a dense ring of points around (0, 0) plus a few
    // low-density outliers. Densities here mimic what a kernel density
    // estimator would assign; the crate itself never estimates them.
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    let mut ds = Vec::new();
    for i in 0..48 {
        let t = i as f64 * std::f64::consts::TAU / 48.0;
        let r = 1.0 + 0.2 * (i % 5) as f64;
        xs.push(r * t.cos());
        ys.push(r * t.sin());
        ds.push(4.0 / r);
    }
    for &(x, y) in &[(4.0, 4.0), (-3.5, 4.2), (4.5, -3.8)] {
        xs.push(x);
        ys.push(y);
        ds.push(0.05);
    }

    let table = Table::new()
        .with_column("x", xs)
        .with_column("y", ys)
        .with_column("density", ds);

    let mut bag = BagPlot::new();
    bag.set_input(table, "x", "y", "density");

    let mut fig = Figure::new().with_title("bagplot demo");
    let idx = fig.add_bag_plot(bag);
    let batches = fig.render_data();

    if let bagplot::plots::PlotElement::Bag(bag) = &fig.plots()[idx] {
        let median = bag.median_contour().expect("cache is fresh after render");
        let outer = bag.outer_contour().expect("cache is fresh after render");
        println!(
            "median hull: {} vertices (closed: {})",
            median.ring().len(),
            median.is_closed()
        );
        println!(
            "outer hull:  {} vertices (closed: {})",
            outer.ring().len(),
            outer.is_closed()
        );
        for p in outer.ring() {
            println!("  outer vertex ({:+.3}, {:+.3})", p.x, p.y);
        }
    }
    println!("render batches: {}", batches.len());
}
