//! Curve analysis pipeline tool.
//!
//! Generates random control points, resamples them with the selected
//! kernel, and reports the area under the curve between two boundary
//! positions along with the axis tick layout. Useful for comparing kernel
//! output without the interactive frontend.

use clap::Parser;
use graph_math::{
    calculate_area, generate_random_points, generate_ticks, interpolate_points, Algorithm,
    Boundary, CurvePoint, GRID_SPACING,
};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(
    name = "Graph Tool",
    about = "Runs the point generation / interpolation / integration pipeline",
    long_about = None
)]
struct Args {
    /// Canvas width in canvas units
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// Canvas height in canvas units
    #[arg(long, default_value_t = 600.0)]
    height: f64,

    /// Number of control points (default: width / 40)
    #[arg(long)]
    count: Option<usize>,

    /// Number of curve samples (default: width / 5)
    #[arg(long)]
    steps: Option<usize>,

    /// Interpolation kernel
    #[arg(long, value_enum, default_value = "linear")]
    algorithm: Algorithm,

    /// Left integration boundary (default: 25% of width)
    #[arg(long)]
    left: Option<f64>,

    /// Right integration boundary (default: 75% of width)
    #[arg(long)]
    right: Option<f64>,

    /// Seed for reproducible point generation
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the summary as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Summary {
    algorithm: Algorithm,
    control_points: Vec<CurvePoint>,
    curve_samples: usize,
    boundary: Boundary,
    area: f64,
    x_ticks: Vec<f64>,
    y_ticks: Vec<f64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let count = args.count.unwrap_or((args.width / 40.0) as usize);
    let steps = args.steps.unwrap_or((args.width / 5.0) as usize);
    let left = args.left.unwrap_or(args.width * 0.25);
    let right = args.right.unwrap_or(args.width * 0.75);

    let boundary = match Boundary::new(left, right) {
        Ok(boundary) => boundary,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let points = generate_random_points(count, args.width, args.height, args.seed);
    let curve = interpolate_points(&points, args.algorithm, steps);
    let area = calculate_area(&curve, boundary.left(), boundary.right());

    let summary = Summary {
        algorithm: args.algorithm,
        control_points: points,
        curve_samples: curve.len(),
        boundary,
        area,
        x_ticks: generate_ticks(args.width, GRID_SPACING),
        y_ticks: generate_ticks(args.height, GRID_SPACING),
    };

    if args.json {
        let rendered =
            serde_json::to_string_pretty(&summary).expect("Summary should serialize to JSON");
        println!("{rendered}");
        return;
    }

    println!(
        "{:?} interpolation of {} control points -> {} samples",
        summary.algorithm,
        summary.control_points.len(),
        summary.curve_samples
    );
    println!(
        "Area over [{:.1}, {:.1}]: {:.3}",
        summary.boundary.left(),
        summary.boundary.right(),
        summary.area
    );
    println!(
        "Grid: {} x ticks, {} y ticks at spacing {}",
        summary.x_ticks.len(),
        summary.y_ticks.len(),
        GRID_SPACING
    );
}
