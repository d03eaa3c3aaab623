//! Trapezoidal area under a curve segment.
//!
//! Integrates the portion of an interpolated curve that falls inside a
//! `[left, right]` boundary using the composite trapezoidal rule. A single
//! representative sample spacing is derived from the filtered segment's
//! span, which matches the uniform spacing of curves produced by
//! `interpolate_points`.

use crate::point::CurvePoint;

/// Integrate the curve between `left` and `right` with the trapezoidal rule.
///
/// Points outside the boundary are dropped before integration. Fewer than
/// two surviving points means there is no interval to integrate over and
/// the area is 0.
///
/// # Arguments
/// * `points` - Curve samples in ascending x order
/// * `left` - Left edge of the integration interval
/// * `right` - Right edge of the integration interval
///
/// # Returns
/// The trapezoidal area of the filtered segment.
pub fn calculate_area(points: &[CurvePoint], left: f64, right: f64) -> f64 {
    let segment: Vec<CurvePoint> = points
        .iter()
        .filter(|p| p.x >= left && p.x <= right)
        .copied()
        .collect();

    if segment.len() < 2 {
        return 0.0;
    }

    let first = segment[0];
    let last = segment[segment.len() - 1];
    let dx = (last.x - first.x) / (segment.len() - 1) as f64;

    // Composite trapezoidal rule, accumulated left to right
    segment
        .windows(2)
        .map(|pair| (pair[0].y + pair[1].y) * dx / 2.0)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn points_from(raw: &[(f64, f64)]) -> Vec<CurvePoint> {
        raw.iter().map(|&(x, y)| CurvePoint::new(x, y)).collect()
    }

    #[test]
    fn test_flat_curve_matches_rectangle() {
        let curve = points_from(&[(0.0, 5.0), (5.0, 5.0), (10.0, 5.0)]);
        let area = calculate_area(&curve, 0.0, 10.0);
        assert_relative_eq!(area, 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ramp_under_triangle() {
        // y = x from 0 to 4 sampled every unit: exact area 8
        let curve = points_from(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0)]);
        let area = calculate_area(&curve, 0.0, 4.0);
        assert_relative_eq!(area, 8.0, epsilon = 1e-9);
    }

    #[test]
    fn test_boundary_filters_samples() {
        let curve = points_from(&[(0.0, 5.0), (5.0, 5.0), (10.0, 5.0), (15.0, 5.0)]);
        // Only x = 5 and x = 10 survive: one interval of dx = 5
        let area = calculate_area(&curve, 4.0, 11.0);
        assert_relative_eq!(area, 25.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_when_fewer_than_two_points_survive() {
        let curve = points_from(&[(0.0, 5.0), (5.0, 5.0), (10.0, 5.0)]);
        assert_relative_eq!(calculate_area(&curve, 4.0, 6.0), 0.0);
        assert_relative_eq!(calculate_area(&curve, 20.0, 30.0), 0.0);
        assert_relative_eq!(calculate_area(&[], 0.0, 10.0), 0.0);
    }

    #[test]
    fn test_area_is_idempotent() {
        let curve = points_from(&[(0.0, 2.0), (3.0, 7.0), (6.0, 4.0), (9.0, 6.0)]);
        let first = calculate_area(&curve, 1.0, 8.0);
        let second = calculate_area(&curve, 1.0, 8.0);
        assert_eq!(first.to_bits(), second.to_bits());
    }
}
