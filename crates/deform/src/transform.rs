//! World/local conversion utilities for the deforming body
//!
//! The simulation runs entirely in the body's local space while the host
//! physics solver reports contacts in world space. This module provides the
//! conversion layer, going through glam for the quaternion/matrix math.

use crate::types::Vec3;
use glam::{Mat4, Quat, Vec3 as GlamVec3};

/// Pose and scale of the body owning the deforming mesh.
#[derive(Copy, Clone, Debug)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::new(1.0, 1.0, 1.0),
    };

    #[must_use]
    pub const fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Pose with the given translation, no rotation, unit scale.
    #[must_use]
    pub const fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            rotation: Quat::IDENTITY,
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }

    fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            to_glam(self.scale),
            self.rotation,
            to_glam(self.translation),
        )
    }

    /// Convert a world-space point into the body's local space.
    #[must_use]
    pub fn world_to_local_point(&self, point: Vec3) -> Vec3 {
        from_glam(self.matrix().inverse().transform_point3(to_glam(point)))
    }

    /// Convert a world-space direction/force vector into the body's local
    /// space. Unlike points, vectors are unaffected by translation.
    #[must_use]
    pub fn world_to_local_vector(&self, vector: Vec3) -> Vec3 {
        from_glam(self.matrix().inverse().transform_vector3(to_glam(vector)))
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

fn to_glam(v: Vec3) -> GlamVec3 {
    GlamVec3::new(v.x, v.y, v.z)
}

fn from_glam(v: GlamVec3) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_passes_points_through() {
        let point = Vec3::new(1.0, 2.0, 3.0);
        let local = Transform::IDENTITY.world_to_local_point(point);
        assert!((local - point).length() < 1e-6);
    }

    #[test]
    fn translation_shifts_points_not_vectors() {
        let transform = Transform::new(
            Vec3::new(0.0, 5.0, 0.0),
            Quat::IDENTITY,
            Vec3::new(1.0, 1.0, 1.0),
        );
        let local_point = transform.world_to_local_point(Vec3::new(0.0, 5.0, 0.0));
        assert!(local_point.length() < 1e-6);
        let local_vector = transform.world_to_local_vector(Vec3::new(0.0, 1.0, 0.0));
        assert!((local_vector - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn rotation_is_inverted() {
        let transform = Transform::new(
            Vec3::ZERO,
            Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
            Vec3::new(1.0, 1.0, 1.0),
        );
        // A quarter turn about +Y maps local +X to world -Z, so the inverse
        // maps world -Z back to local +X.
        let local = transform.world_to_local_vector(Vec3::new(0.0, 0.0, -1.0));
        assert!((local - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-5);
    }
}
