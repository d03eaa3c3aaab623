//! Random control point generation.
//!
//! Produces the initial ascending-by-x control point sequence that seeds a
//! graph session. Heights are drawn uniformly from the middle 80% of the
//! canvas so the curve stays clear of the top and bottom edges.

use rand::rngs::StdRng;
use rand::{rng, Rng, RngCore, SeedableRng};

use crate::point::CurvePoint;

/// Generate `count` control points spread evenly across `width`.
///
/// Points start at x = 0 and are spaced `max(width / (count - 1), 1)`
/// apart, with y drawn uniformly from `[0.1 * height, 0.9 * height)`.
///
/// # Arguments
/// * `count` - Number of control points to generate
/// * `width` - Canvas width the points should span
/// * `height` - Canvas height bounding the random y range
/// * `rng_seed` - Optional seed for reproducible results
///
/// # Returns
/// Control points in ascending x order. A `count` of 0 yields an empty
/// vec; a `count` of 1 yields a single point at x = 0, sidestepping the
/// spacing division entirely.
pub fn generate_random_points(
    count: usize,
    width: f64,
    height: f64,
    rng_seed: Option<u64>,
) -> Vec<CurvePoint> {
    if count == 0 {
        return Vec::new();
    }

    // Create a random number generator from the supplied seed
    let seed = rng_seed.unwrap_or(rng().next_u64());
    let mut rng = StdRng::seed_from_u64(seed);

    let spacing = if count == 1 {
        0.0
    } else {
        (width / (count - 1) as f64).max(1.0)
    };

    let y_low = 0.1 * height;
    let y_high = 0.9 * height;

    (0..count)
        .map(|i| {
            let y = if y_high > y_low {
                rng.random_range(y_low..y_high)
            } else {
                y_low
            };
            CurvePoint::new(i as f64 * spacing, y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_count_and_spacing() {
        let points = generate_random_points(21, 800.0, 600.0, Some(7));
        assert_eq!(points.len(), 21);

        let spacing = 800.0 / 20.0;
        for (i, pair) in points.windows(2).enumerate() {
            assert_relative_eq!(pair[1].x - pair[0].x, spacing, epsilon = 1e-9);
            assert_relative_eq!(pair[0].x, i as f64 * spacing, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_heights_stay_inside_band() {
        let height = 600.0;
        let points = generate_random_points(50, 800.0, height, Some(42));
        for point in &points {
            assert!(point.y >= 0.1 * height);
            assert!(point.y < 0.9 * height);
        }
    }

    #[test]
    fn test_spacing_floor_of_one() {
        // 100 points over a 10-wide canvas would be 0.1 apart; the floor
        // keeps them a full unit apart instead.
        let points = generate_random_points(100, 10.0, 600.0, Some(3));
        for pair in points.windows(2) {
            assert_relative_eq!(pair[1].x - pair[0].x, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_seed_is_deterministic() {
        let a = generate_random_points(16, 640.0, 480.0, Some(99));
        let b = generate_random_points(16, 640.0, 480.0, Some(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_count_is_empty() {
        assert!(generate_random_points(0, 800.0, 600.0, Some(1)).is_empty());
    }

    #[test]
    fn test_single_point_sits_at_origin_x() {
        let points = generate_random_points(1, 800.0, 600.0, Some(5));
        assert_eq!(points.len(), 1);
        assert_relative_eq!(points[0].x, 0.0);
    }
}
