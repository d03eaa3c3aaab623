//! Numeric core for interactive curve analysis.
//!
//! Turns a sparse set of control points into a dense resampled curve and
//! computes the definite area under a selected sub-interval of that curve.
//! Everything here is a pure, synchronous function over plain value types;
//! the rendering frontend owns the event loop and decides when to call in.

pub mod generate;
pub mod integrate;
pub mod interpolate;
pub mod point;
pub mod session;
pub mod ticks;

pub use generate::generate_random_points;
pub use integrate::calculate_area;
pub use interpolate::{interpolate_points, Algorithm};
pub use point::CurvePoint;
pub use session::{Boundary, BoundaryError, GraphSession, GRID_SPACING};
pub use ticks::generate_ticks;
