//! Graph session state and recompute orchestration.
//!
//! Owns the control points, selected algorithm, integration boundary, and
//! the derived curve and area for a single canvas. A rendering frontend
//! calls the mutators here and redraws from the accessors; derived values
//! are recomputed wholesale on every change, never patched incrementally.

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::generate::generate_random_points;
use crate::integrate::calculate_area;
use crate::interpolate::{interpolate_points, Algorithm};
use crate::point::CurvePoint;
use crate::ticks::generate_ticks;

/// Grid line spacing used for both axes, in canvas units.
pub const GRID_SPACING: f64 = 50.0;

/// Canvas width per generated control point.
const POINT_STRIDE: f64 = 40.0;

/// Canvas width per interpolated curve sample.
const SAMPLE_STRIDE: f64 = 5.0;

/// Errors that can occur when constructing a boundary.
#[derive(Debug, Error)]
pub enum BoundaryError {
    #[error("Boundary left edge {0} exceeds right edge {1}")]
    Inverted(f64, f64),
}

/// Integration interval `[left, right]` with `left <= right` guaranteed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    left: f64,
    right: f64,
}

impl Boundary {
    /// Create a boundary, rejecting inverted edges.
    pub fn new(left: f64, right: f64) -> Result<Self, BoundaryError> {
        if left > right {
            return Err(BoundaryError::Inverted(left, right));
        }
        Ok(Self { left, right })
    }

    /// Left edge of the interval.
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Right edge of the interval.
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Move the left edge, clamped so it never crosses the right edge.
    pub fn move_left(&mut self, value: f64) {
        self.left = value.min(self.right);
    }

    /// Move the right edge, clamped so it never crosses the left edge.
    pub fn move_right(&mut self, value: f64) {
        self.right = value.max(self.left);
    }
}

/// One canvas worth of graph state: control points plus the derived curve
/// and area.
#[derive(Debug, Clone)]
pub struct GraphSession {
    width: f64,
    height: f64,
    algorithm: Algorithm,
    control_points: Vec<CurvePoint>,
    curve: Vec<CurvePoint>,
    boundary: Boundary,
    area: f64,
}

impl GraphSession {
    /// Create a session for a canvas, generating one control point per
    /// `POINT_STRIDE` of width and placing the boundary at 25% / 75% of
    /// the canvas width.
    ///
    /// # Arguments
    /// * `width` - Canvas width in canvas units
    /// * `height` - Canvas height in canvas units
    /// * `rng_seed` - Optional seed for reproducible point generation
    pub fn new(width: f64, height: f64, rng_seed: Option<u64>) -> Self {
        let count = (width / POINT_STRIDE) as usize;
        let mut session = Self {
            width,
            height,
            algorithm: Algorithm::Linear,
            control_points: generate_random_points(count, width, height, rng_seed),
            curve: Vec::new(),
            boundary: Boundary {
                left: width * 0.25,
                right: width * 0.75,
            },
            area: 0.0,
        };
        session.recompute();
        session
    }

    /// Replace the control points with a fresh random set and rebuild the
    /// curve and area.
    pub fn reset_points(&mut self, rng_seed: Option<u64>) {
        let count = (self.width / POINT_STRIDE) as usize;
        self.control_points = generate_random_points(count, self.width, self.height, rng_seed);
        self.recompute();
    }

    /// Switch the interpolation kernel, rebuilding the curve if it changed.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        if self.algorithm == algorithm {
            return;
        }
        self.algorithm = algorithm;
        self.recompute();
    }

    /// Drag the left boundary edge; it is clamped at the right edge.
    pub fn move_left_boundary(&mut self, value: f64) {
        self.boundary.move_left(value);
        self.recompute_area();
    }

    /// Drag the right boundary edge; it is clamped at the left edge.
    pub fn move_right_boundary(&mut self, value: f64) {
        self.boundary.move_right(value);
        self.recompute_area();
    }

    /// Tick positions along the x axis at `GRID_SPACING`.
    pub fn x_ticks(&self) -> Vec<f64> {
        generate_ticks(self.width, GRID_SPACING)
    }

    /// Tick positions along the y axis at `GRID_SPACING`.
    pub fn y_ticks(&self) -> Vec<f64> {
        generate_ticks(self.height, GRID_SPACING)
    }

    /// Current control points.
    pub fn control_points(&self) -> &[CurvePoint] {
        &self.control_points
    }

    /// Current interpolated curve.
    pub fn curve(&self) -> &[CurvePoint] {
        &self.curve
    }

    /// Current integration boundary.
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Area under the curve inside the boundary.
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Currently selected interpolation kernel.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn recompute(&mut self) {
        let steps = (self.width / SAMPLE_STRIDE) as usize;
        self.curve = interpolate_points(&self.control_points, self.algorithm, steps);
        self.recompute_area();
        debug!(
            "recomputed {:?} curve: {} samples from {} control points",
            self.algorithm,
            self.curve.len(),
            self.control_points.len()
        );
    }

    fn recompute_area(&mut self) {
        self.area = calculate_area(&self.curve, self.boundary.left, self.boundary.right);
        debug!(
            "area over [{:.1}, {:.1}] = {:.3}",
            self.boundary.left, self.boundary.right, self.area
        );
    }
}
