use super::error::{GlobeError, Result};
use glam::Vec3;
use std::f32::consts::PI;

/// Place `count` points on a sphere of `radius` around the origin.
///
/// Elevation follows an equal-area arccosine mapping of the index and the
/// azimuth winds a spiral scaled by `sqrt(count * PI)`, which spreads points
/// evenly without clustering at the poles. The result depends only on the
/// inputs.
pub fn generate(count: usize, radius: f32) -> Result<Vec<Vec3>> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(GlobeError::InvalidConfiguration(format!(
            "sphere radius must be positive, got {radius}"
        )));
    }
    let n = count as f32;
    let winding = (n * PI).sqrt();
    Ok((0..count)
        .map(|i| {
            let phi = (-1.0 + (2.0 * i as f32) / n).clamp(-1.0, 1.0).acos();
            let theta = winding * phi;
            Vec3::new(
                radius * theta.cos() * phi.sin(),
                radius * theta.sin() * phi.sin(),
                radius * phi.cos(),
            )
        })
        .collect())
}
