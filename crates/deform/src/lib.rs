#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Deformable Collision Sphere
//!
//! A real-time deformable-body simulation attached to a spherical collider.
//! Collision impulses reported by the host's physics pass dent a sphere's
//! surface mesh; a mass-spring-damper model relaxes the dent back toward
//! the rest shape, and the physics collider radius is kept consistent with
//! the deformed mesh every fixed tick.
//!
//! ## Key Components
//!
//! -   **Force application:** [`force`] converts a world-space contact
//!     force into per-vertex velocity impulses with inverse-square falloff
//!     from the contact point.
//! -   **Integration:** [`integrator`] advances every vertex one fixed
//!     timestep under spring-damper dynamics, clamped to a maximum
//!     displacement.
//! -   **Shape normalization:** [`shape`] recenters the deformed cloud,
//!     derives the collider radius from the closest vertex, and rescales so
//!     the summed distance-to-center matches the rest shape.
//! -   **Collision tracking:** [`collision`] keeps per-collider state so
//!     sustained contacts are re-resolved every tick while enter/exit
//!     events resolve once.
//! -   **Orchestration:** [`DeformableSphere`] in [`simulation`] owns the
//!     state and runs the per-tick pipeline, feeding results to the host
//!     through the [`DeformHost`] collaborators.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use deform::{ColliderKind, DeformableSphere, SimulationParams};
//!
//! let mut sim = DeformableSphere::new(&rest_vertices, ColliderKind::Sphere,
//!     SimulationParams::default());
//! sim.handle_event(collision_event);
//! sim.step(&mut host);
//! ```

pub mod collision;
pub mod error;
pub mod force;
pub mod integrator;
pub mod shape;
pub mod simulation;
pub mod transform;
pub mod types;

pub use collision::{
    mean_contact, ColliderId, CollisionEvent, CollisionTracker, ContactEvent, ContactPoint,
};
pub use error::DeformError;
pub use simulation::{ColliderUpdate, DeformHost, DeformableSphere};
pub use transform::Transform;
pub use types::{ColliderKind, RestShape, SimulationParams, Vec3, Vertex};
