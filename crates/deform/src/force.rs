//! # Deforming Force Application
//!
//! Converts a world-space contact force into per-vertex velocity impulses,
//! distributed over the whole mesh by inverse-square falloff from the
//! contact point. Every vertex receives some impulse: the deformation is
//! smooth and global, concentrated near the contact.

use crate::transform::Transform;
use crate::types::{SimulationParams, Vec3, Vertex};

/// Apply a deforming contact force to the vertex cloud.
///
/// The force is split by projection onto `normal`, scaled by the absorption
/// fraction, into the component that deforms the mesh and a remainder the
/// caller may feed back to a rigid body. The contact point is pushed out
/// along the normal by the configured offset before application, so the
/// deformation does not originate exactly on the surface.
///
/// Returns `(applied, remainder)` in world space. A zero-magnitude force is
/// an expected no-op and yields a zero/zero pair.
pub fn apply_deforming_force(
    vertices: &mut [Vertex],
    transform: &Transform,
    params: &SimulationParams,
    point: Vec3,
    force: Vec3,
    normal: Vec3,
) -> (Vec3, Vec3) {
    if force == Vec3::ZERO {
        tracing::debug!("zero-magnitude deforming force, skipping");
        return (Vec3::ZERO, Vec3::ZERO);
    }

    let applied = (force * params.force_absorption).project_onto(normal);
    let remainder = force - applied;

    let point = point + normal * params.contact_offset;

    let magnitude = transform.world_to_local_vector(applied).length();
    let point_local = transform.world_to_local_point(point);

    for vertex in vertices.iter_mut() {
        add_force_to_vertex(vertex, point_local, magnitude, params);
    }

    (applied, remainder)
}

/// Impulse felt by one vertex: magnitude attenuated by `1 / (1 + d²)` with
/// the +1 term avoiding the singularity at zero distance, converted to a
/// velocity delta along the contact-to-vertex direction.
fn add_force_to_vertex(
    vertex: &mut Vertex,
    point: Vec3,
    magnitude: f32,
    params: &SimulationParams,
) {
    if magnitude <= 0.0 {
        return;
    }
    let pos_to_vert = vertex.position - point;
    let attenuated = magnitude / (1.0 + pos_to_vert.length_squared());
    let delta = attenuated * params.fixed_dt / params.mass_per_vertex;
    vertex.velocity += pos_to_vert.normalized() * delta;
}
