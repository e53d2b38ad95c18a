//! # Collision Events and Tracking
//!
//! Inbound contact notifications from the host's physics pass, and the
//! bookkeeping that decides which collisions are re-resolved every fixed
//! tick (sustained contacts) versus once (enter/exit).

mod tracker;

pub use tracker::CollisionTracker;

use crate::types::Vec3;

/// Stable identity of a colliding body, as assigned by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColliderId(pub u64);

/// One reported contact. Either field may arrive non-finite from a
/// degenerate upstream solve; such contacts are dropped during resolution.
#[derive(Copy, Clone, Debug)]
pub struct ContactPoint {
    /// World-space contact position.
    pub point: Vec3,
    /// World-space contact normal.
    pub normal: Vec3,
}

/// The contact patch and total impulse reported for one collision event.
#[derive(Clone, Debug)]
pub struct ContactEvent {
    pub collider: ColliderId,
    pub contacts: Vec<ContactPoint>,
    pub impulse: Vec3,
}

/// Host lifecycle notification, decoupled from any particular engine's
/// callback dispatch.
#[derive(Clone, Debug)]
pub enum CollisionEvent {
    Enter(ContactEvent),
    Stay(ContactEvent),
    Exit(ContactEvent),
}

/// Mean contact position and normal over the finite contacts of a patch.
///
/// Contacts with any non-finite point or normal component are dropped;
/// `None` if nothing survives. The single mean-point application is the
/// contract; per-contact weighted distribution is deliberately not.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean_contact(contacts: &[ContactPoint]) -> Option<(Vec3, Vec3)> {
    let mut mean_point = Vec3::ZERO;
    let mut mean_normal = Vec3::ZERO;
    let mut survivors = 0usize;

    for contact in contacts {
        if !contact.point.is_finite() || !contact.normal.is_finite() {
            continue;
        }
        mean_point += contact.point;
        mean_normal += contact.normal;
        survivors += 1;
    }

    if survivors == 0 {
        return None;
    }

    let count = survivors as f32;
    Some((mean_point / count, mean_normal / count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_contact_averages_survivors() {
        let contacts = [
            ContactPoint {
                point: Vec3::new(1.0, 0.0, 0.0),
                normal: Vec3::new(0.0, 1.0, 0.0),
            },
            ContactPoint {
                point: Vec3::new(3.0, 0.0, 0.0),
                normal: Vec3::new(0.0, 1.0, 0.0),
            },
        ];
        let (point, normal) = mean_contact(&contacts).unwrap();
        assert!((point - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-6);
        assert!((normal - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn non_finite_contacts_are_dropped() {
        let contacts = [
            ContactPoint {
                point: Vec3::new(f32::NAN, 0.0, 0.0),
                normal: Vec3::new(0.0, 1.0, 0.0),
            },
            ContactPoint {
                point: Vec3::new(1.0, 0.0, 0.0),
                normal: Vec3::new(0.0, f32::INFINITY, 0.0),
            },
            ContactPoint {
                point: Vec3::new(5.0, 0.0, 0.0),
                normal: Vec3::new(1.0, 0.0, 0.0),
            },
        ];
        let (point, normal) = mean_contact(&contacts).unwrap();
        assert!((point - Vec3::new(5.0, 0.0, 0.0)).length() < 1e-6);
        assert!((normal - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn all_dropped_yields_none() {
        let contacts = [ContactPoint {
            point: Vec3::new(f32::NAN, 0.0, 0.0),
            normal: Vec3::new(0.0, 1.0, 0.0),
        }];
        assert!(mean_contact(&contacts).is_none());
    }

    #[test]
    fn empty_patch_yields_none() {
        assert!(mean_contact(&[]).is_none());
    }
}
