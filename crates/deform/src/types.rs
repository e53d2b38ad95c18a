use serde::{Deserialize, Serialize};

/// Epsilon below which a vector is treated as having no direction.
const NORMALIZE_EPSILON: f32 = 1e-5;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[must_use]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[must_use]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }

    /// Unit vector in the same direction, or zero when the vector is too
    /// short to carry a direction.
    #[must_use]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len <= NORMALIZE_EPSILON {
            Self::ZERO
        } else {
            self / len
        }
    }

    /// Vector projection of `self` onto `onto`. Zero when `onto` is
    /// degenerate.
    #[must_use]
    pub fn project_onto(self, onto: Self) -> Self {
        let denom = onto.length_squared();
        if denom <= NORMALIZE_EPSILON * NORMALIZE_EPSILON {
            Self::ZERO
        } else {
            onto * (self.dot(onto) / denom)
        }
    }

    /// Rescale to at most `max_length`, preserving direction.
    #[must_use]
    pub fn clamp_length(self, max_length: f32) -> Self {
        let len_sq = self.length_squared();
        if len_sq > max_length * max_length {
            self.normalized() * max_length
        } else {
            self
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl std::ops::Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl std::ops::Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl std::ops::Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl std::ops::MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl std::ops::Div<f32> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl std::ops::DivAssign<f32> for Vec3 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

/// One surface vertex of the deforming mesh. The vertex count is fixed at
/// construction; only `position` and `velocity` change over a tick.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Undeformed local-space coordinate, immutable after init.
    pub rest: Vec3,
    /// Current displaced local-space coordinate.
    pub position: Vec3,
    /// Current local-space velocity.
    pub velocity: Vec3,
}

impl Vertex {
    #[must_use]
    pub const fn at_rest(rest: Vec3) -> Self {
        Self {
            rest,
            position: rest,
            velocity: Vec3::ZERO,
        }
    }
}

/// Aggregate quantities of the undeformed shape, derived once at init.
///
/// `distance_sum` is the sum of per-vertex distances to `center` — the sum,
/// not the mean, is the invariant the normalizer preserves.
#[derive(Copy, Clone, Debug)]
pub struct RestShape {
    pub center: Vec3,
    pub distance_sum: f32,
}

impl RestShape {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn of(positions: &[Vec3]) -> Self {
        let mut center = Vec3::ZERO;
        for &pos in positions {
            center += pos;
        }
        if !positions.is_empty() {
            center /= positions.len() as f32;
        }
        let mut distance_sum = 0.0;
        for &pos in positions {
            distance_sum += pos.distance(center);
        }
        Self {
            center,
            distance_sum,
        }
    }
}

/// Tunable constants of the simulation, read-only during a tick.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    pub mass_per_vertex: f32,
    pub spring_stiffness: f32,
    pub damping: f32,
    pub max_displacement: f32,
    pub force_absorption: f32,
    pub contact_offset: f32,
    pub fixed_dt: f32,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            mass_per_vertex: 1.0,
            spring_stiffness: 20.0,
            damping: 5.0,
            max_displacement: 50.0,
            force_absorption: 1.0,
            contact_offset: 0.1,
            fixed_dt: 0.02,
        }
    }
}

/// Shape of the physics collider kept in step with the deformed mesh.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColliderKind {
    Sphere,
    /// Degenerates to a sphere-like shape: height is driven as twice the
    /// radius.
    Capsule,
}
