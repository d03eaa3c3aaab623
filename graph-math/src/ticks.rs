//! Evenly spaced axis tick positions for grid rendering.

/// Generate tick positions `0, spacing, 2·spacing, …` up to `max_value`.
///
/// # Arguments
/// * `max_value` - Largest coordinate a tick may sit at
/// * `spacing` - Distance between consecutive ticks
///
/// # Returns
/// Ascending tick positions, or an empty vec when either argument is not
/// positive.
pub fn generate_ticks(max_value: f64, spacing: f64) -> Vec<f64> {
    if max_value <= 0.0 || spacing <= 0.0 {
        return Vec::new();
    }

    let count = (max_value / spacing) as usize + 1;
    (0..count)
        .map(|i| i as f64 * spacing)
        .filter(|&tick| tick <= max_value)
        .collect()
}
