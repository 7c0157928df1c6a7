//! Marker-size scaling by core count.

/// Marker diameter for a single-core run, in pixels.
pub const MIN_MARKER_SIZE: f64 = 8.0;
/// Marker diameter for the largest core count in a group.
pub const MAX_MARKER_SIZE: f64 = 30.0;

/// Reference points drawn in the size legend: `(cores, marker size)`.
pub const SIZE_LEGEND: [(u32, f64); 4] = [(1, 8.0), (8, 16.0), (16, 24.0), (32, 30.0)];

/// Scale `cores` linearly against the largest core count of its group.
///
/// Returns [`MIN_MARKER_SIZE`] when `max_cores` is zero.
pub fn marker_size(cores: u32, max_cores: u32) -> f64 {
    if max_cores == 0 {
        return MIN_MARKER_SIZE;
    }
    MIN_MARKER_SIZE + f64::from(cores) / f64::from(max_cores) * (MAX_MARKER_SIZE - MIN_MARKER_SIZE)
}

/// Marker sizes for a group of core counts, scaled against the group maximum.
pub fn marker_sizes(cores: &[u32]) -> Vec<f64> {
    let max = cores.iter().copied().max().unwrap_or(0);
    cores.iter().map(|&c| marker_size(c, max)).collect()
}
