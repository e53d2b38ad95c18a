//! Latitude/longitude sphere vertex cloud for the demo scenario.

use deform::Vec3;

/// Vertex positions of a UV sphere: one pole, `rings - 1` latitude rings of
/// `segments` vertices, one opposite pole.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn lat_long_sphere(radius: f32, rings: u32, segments: u32) -> Vec<Vec3> {
    let mut positions = Vec::with_capacity(((rings - 1) * segments + 2) as usize);
    positions.push(Vec3::new(0.0, radius, 0.0));
    for ring in 1..rings {
        let polar = std::f32::consts::PI * ring as f32 / rings as f32;
        for segment in 0..segments {
            let azimuth = std::f32::consts::TAU * segment as f32 / segments as f32;
            positions.push(Vec3::new(
                radius * polar.sin() * azimuth.cos(),
                radius * polar.cos(),
                radius * polar.sin() * azimuth.sin(),
            ));
        }
    }
    positions.push(Vec3::new(0.0, -radius, 0.0));
    positions
}
