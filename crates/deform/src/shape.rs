//! # Shape Normalization
//!
//! The post-integration pass that recenters the vertex cloud, derives the
//! collider radius from the closest vertex, and rescales the cloud so its
//! summed distance-to-center matches the rest shape. Local dents come and
//! go; the aggregate "puffiness" stays fixed.

use crate::types::{RestShape, Vec3, Vertex};

/// Recenter and rescale the vertex cloud after integration.
///
/// Returns the new collider radius: the minimum distance-to-center before
/// rescaling, so the rigid collider never pokes through the visual mesh. A
/// fully collapsed cloud (zero summed distance) skips the rescale rather
/// than dividing by zero.
#[allow(clippy::cast_precision_loss)]
pub fn normalize_shape(vertices: &mut [Vertex], rest: &RestShape) -> f32 {
    let mut center = Vec3::ZERO;
    for vertex in vertices.iter() {
        center += vertex.position;
    }
    if !vertices.is_empty() {
        center /= vertices.len() as f32;
    }

    let mut distance_sum = 0.0;
    let mut min_distance = f32::INFINITY;
    for vertex in vertices.iter_mut() {
        vertex.position -= center;
        let distance = vertex.position.length();
        distance_sum += distance;
        if distance < min_distance {
            min_distance = distance;
        }
    }

    if distance_sum > 0.0 {
        let scale = rest.distance_sum / distance_sum;
        for vertex in vertices.iter_mut() {
            vertex.position *= scale;
        }
    } else {
        tracing::warn!("degenerate shape: zero summed distance-to-center, skipping rescale");
    }

    min_distance
}
