//! # Deformable Sphere Simulation
//!
//! The per-tick orchestrator. It owns the vertex cloud and collision
//! bookkeeping and coordinates the subsystems in a fixed order every tick:
//! drain a pending reset, re-resolve sustained collisions, integrate all
//! vertices, normalize the shape, then hand the results to the host's
//! collaborators.

use crate::collision::{mean_contact, CollisionEvent, CollisionTracker, ColliderId, ContactEvent};
use crate::error::DeformError;
use crate::force::apply_deforming_force;
use crate::integrator::integrate_vertices;
use crate::shape::normalize_shape;
use crate::transform::Transform;
use crate::types::{ColliderKind, RestShape, SimulationParams, Vec3, Vertex};

/// Collider dimensions derived from the deformed shape. `height` is only
/// present for capsule colliders and is always twice the radius.
#[derive(Copy, Clone, Debug)]
pub struct ColliderUpdate {
    pub radius: f32,
    pub height: Option<f32>,
}

/// The host-side collaborators fed once per tick: the mesh uploader, the
/// collider updater, and optionally an attached rigid body receiving
/// reaction forces.
pub trait DeformHost {
    /// Receive the new local-space vertex position buffer (length N).
    /// Normal recomputation is the receiver's concern.
    fn update_mesh(&mut self, positions: &[Vec3]);

    /// Receive the new collider dimensions.
    fn update_collider(&mut self, update: ColliderUpdate);

    /// Receive a reaction force at a world position. Default: no rigid
    /// body attached, nothing to do.
    fn apply_reaction(&mut self, _position: Vec3, _force: Vec3) {}
}

#[derive(Debug)]
struct Reaction {
    position: Vec3,
    force: Vec3,
}

/// A sphere-like surface mesh that dents under collision impulses and
/// relaxes back toward its rest shape.
#[derive(Debug)]
pub struct DeformableSphere {
    vertices: Vec<Vertex>,
    positions: Vec<Vec3>,
    rest: RestShape,
    pub params: SimulationParams,
    collider: ColliderKind,
    transform: Transform,
    tracker: CollisionTracker,
    pending_reactions: Vec<Reaction>,
    reset_requested: bool,
    enabled: bool,
}

impl DeformableSphere {
    /// Build a simulation from the mesh's rest vertices.
    ///
    /// # Errors
    ///
    /// Fails on an empty vertex buffer or any non-finite rest coordinate.
    pub fn try_new(
        rest_positions: &[Vec3],
        collider: ColliderKind,
        params: SimulationParams,
    ) -> Result<Self, DeformError> {
        if rest_positions.is_empty() {
            return Err(DeformError::EmptyMesh);
        }
        for (index, position) in rest_positions.iter().enumerate() {
            if !position.is_finite() {
                return Err(DeformError::NonFiniteVertex(index));
            }
        }

        let rest = RestShape::of(rest_positions);
        let vertices: Vec<Vertex> = rest_positions
            .iter()
            .map(|&position| Vertex::at_rest(position))
            .collect();

        Ok(Self {
            positions: vertices.iter().map(|v| v.position).collect(),
            vertices,
            rest,
            params,
            collider,
            transform: Transform::IDENTITY,
            tracker: CollisionTracker::new(),
            pending_reactions: Vec::new(),
            reset_requested: false,
            enabled: true,
        })
    }

    /// Like [`Self::try_new`], but a rejected mesh yields a disabled
    /// instance that performs no per-tick work instead of failing loudly.
    #[must_use]
    pub fn new(
        rest_positions: &[Vec3],
        collider: ColliderKind,
        params: SimulationParams,
    ) -> Self {
        match Self::try_new(rest_positions, collider, params) {
            Ok(sim) => sim,
            Err(err) => {
                tracing::warn!("deformable sphere disabled: {err}");
                Self {
                    vertices: Vec::new(),
                    positions: Vec::new(),
                    rest: RestShape {
                        center: Vec3::ZERO,
                        distance_sum: 0.0,
                    },
                    params,
                    collider,
                    transform: Transform::IDENTITY,
                    tracker: CollisionTracker::new(),
                    pending_reactions: Vec::new(),
                    reset_requested: false,
                    enabled: false,
                }
            }
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[must_use]
    pub fn rest_shape(&self) -> &RestShape {
        &self.rest
    }

    /// Keep world/local conversion in step with the owning body's pose.
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// Restore every vertex to rest at the start of the next tick.
    pub fn request_reset(&mut self) {
        self.reset_requested = true;
    }

    #[must_use]
    pub fn is_tracking(&self, collider: ColliderId) -> bool {
        self.tracker.is_tracking(collider)
    }

    #[must_use]
    pub fn is_active(&self, collider: ColliderId) -> bool {
        self.tracker.is_active(collider)
    }

    #[must_use]
    pub fn active_collision_count(&self) -> usize {
        self.tracker.active_count()
    }

    /// Feed one host collision notification into the state machine. All
    /// pending notifications for a tick must be handled before [`Self::step`]
    /// runs for that tick.
    pub fn handle_event(&mut self, event: CollisionEvent) {
        match event {
            CollisionEvent::Enter(contact) => self.on_collision_enter(contact),
            CollisionEvent::Stay(contact) => self.on_collision_stay(contact),
            CollisionEvent::Exit(contact) => self.on_collision_exit(contact),
        }
    }

    /// First contact with a collider: resolve once with the full impulse,
    /// then track it for per-tick re-resolution.
    pub fn on_collision_enter(&mut self, contact: ContactEvent) {
        if !self.enabled {
            return;
        }
        tracing::debug!(collider = contact.collider.0, impulse = ?contact.impulse, "collision enter");
        self.resolve_collision(&contact);
        self.tracker.note_enter(contact);
    }

    /// Sustained-contact notification: refresh the tracked snapshot.
    pub fn on_collision_stay(&mut self, contact: ContactEvent) {
        if !self.enabled {
            return;
        }
        self.tracker.note_stay(contact);
    }

    /// Collider departed: one final resolution, then forget it.
    pub fn on_collision_exit(&mut self, contact: ContactEvent) {
        if !self.enabled {
            return;
        }
        tracing::debug!(collider = contact.collider.0, impulse = ?contact.impulse, "collision exit");
        self.resolve_collision(&contact);
        self.tracker.note_exit(contact.collider);
    }

    /// Advance the simulation one fixed timestep and feed the outputs to
    /// the host.
    pub fn step<H: DeformHost>(&mut self, host: &mut H) {
        if !self.enabled {
            return;
        }

        if self.reset_requested {
            self.reset();
        }

        for event in self.tracker.sustained_events() {
            tracing::trace!(collider = event.collider.0, "re-resolving sustained collision");
            self.resolve_collision(&event);
        }

        integrate_vertices(&mut self.vertices, &self.params);

        let radius = normalize_shape(&mut self.vertices, &self.rest);

        self.positions.clear();
        self.positions
            .extend(self.vertices.iter().map(|v| v.position));
        host.update_mesh(&self.positions);
        host.update_collider(self.collider_update(radius));

        for reaction in self.pending_reactions.drain(..) {
            host.apply_reaction(reaction.position, reaction.force);
        }
    }

    /// Turn one contact event into vertex velocity impulses and a queued
    /// reaction on the colliding body.
    fn resolve_collision(&mut self, event: &ContactEvent) {
        if event.impulse == Vec3::ZERO {
            tracing::debug!(collider = event.collider.0, "zero-magnitude impulse, skipping");
            return;
        }

        let Some((mean_point, mean_normal)) = mean_contact(&event.contacts) else {
            tracing::debug!(collider = event.collider.0, "no finite contacts, skipping");
            return;
        };

        let force = -event.impulse / self.params.fixed_dt;

        let (applied, _remainder) = apply_deforming_force(
            &mut self.vertices,
            &self.transform,
            &self.params,
            mean_point,
            force,
            -mean_normal,
        );

        self.pending_reactions.push(Reaction {
            position: mean_point,
            force: -applied,
        });
    }

    fn collider_update(&self, radius: f32) -> ColliderUpdate {
        match self.collider {
            ColliderKind::Sphere => ColliderUpdate {
                radius,
                height: None,
            },
            ColliderKind::Capsule => ColliderUpdate {
                radius,
                height: Some(2.0 * radius),
            },
        }
    }

    fn reset(&mut self) {
        for vertex in &mut self.vertices {
            vertex.position = vertex.rest;
            vertex.velocity = Vec3::ZERO;
        }
        self.reset_requested = false;
        tracing::debug!("vertex cloud reset to rest shape");
    }
}
