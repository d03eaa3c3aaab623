//! Core value types for curve data.

use serde::{Deserialize, Serialize};

/// A coordinate in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
}

impl CurvePoint {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
