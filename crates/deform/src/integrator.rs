//! # Vertex Integration
//!
//! Advances every vertex one fixed timestep under spring-damper dynamics.
//! There is no cross-vertex coupling here; the per-vertex updates can run
//! in any order. The whole pass must complete before shape normalization.

use crate::types::{SimulationParams, Vertex};

/// Integrate all vertices by one fixed timestep.
pub fn integrate_vertices(vertices: &mut [Vertex], params: &SimulationParams) {
    for vertex in vertices.iter_mut() {
        integrate_vertex(vertex, params);
    }
}

/// Advance one vertex by one fixed timestep.
///
/// The damping factor `1 - damping * dt` is a first-order approximation and
/// is only stable while `damping * dt < 1`; larger products make the
/// velocity oscillate in sign and grow. Kept as a known numerical caveat.
pub fn integrate_vertex(vertex: &mut Vertex, params: &SimulationParams) {
    let dt = params.fixed_dt;

    let mut velocity = vertex.velocity;
    let displacement = vertex.position - vertex.rest;
    velocity -= displacement * (params.spring_stiffness * dt);
    velocity *= 1.0 - params.damping * dt;
    vertex.velocity = velocity;

    vertex.position += velocity * dt;

    // Clamp the displacement, not the velocity: excess velocity is left for
    // the spring term to fight next tick.
    let displacement = (vertex.position - vertex.rest).clamp_length(params.max_displacement);
    vertex.position = vertex.rest + displacement;
}
