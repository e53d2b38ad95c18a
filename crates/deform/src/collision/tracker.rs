//! Per-collider bookkeeping of in-flight collisions.
//!
//! States per colliding body: `Absent -> Active(resolved) -> Absent`.
//! Enter and exit are resolved once at the notification; everything in the
//! active set is re-resolved every fixed tick with its latest contact
//! snapshot, which is how resting weight keeps denting the mesh.

use std::collections::{HashMap, HashSet};

use super::{ColliderId, ContactEvent};

#[derive(Debug)]
struct CollisionRecord {
    event: ContactEvent,
    resolved: bool,
}

/// Owned map of ongoing collisions plus the set of collider keys needing
/// per-tick re-resolution. One entry per distinct colliding body no matter
/// how many notifications arrive between ticks.
#[derive(Default, Debug)]
pub struct CollisionTracker {
    records: HashMap<ColliderId, CollisionRecord>,
    active: HashSet<ColliderId>,
}

impl CollisionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fresh collision. The caller resolves the event immediately,
    /// so the record starts out resolved.
    pub fn note_enter(&mut self, event: ContactEvent) {
        let collider = event.collider;
        self.records.insert(
            collider,
            CollisionRecord {
                event,
                resolved: true,
            },
        );
        self.active.insert(collider);
    }

    /// Record a sustained-contact notification. An existing record has its
    /// snapshot replaced and is marked pending; a missing one is created as
    /// if the enter had been observed. Re-insertion never duplicates.
    pub fn note_stay(&mut self, event: ContactEvent) {
        let collider = event.collider;
        match self.records.get_mut(&collider) {
            Some(record) => {
                record.event = event;
                record.resolved = false;
            }
            None => {
                self.records.insert(
                    collider,
                    CollisionRecord {
                        event,
                        resolved: false,
                    },
                );
            }
        }
        self.active.insert(collider);
    }

    /// Drop all state for a departed collider.
    pub fn note_exit(&mut self, collider: ColliderId) {
        self.records.remove(&collider);
        self.active.remove(&collider);
    }

    /// Snapshot the contact events due for this tick's re-resolution,
    /// marking each record resolved.
    pub fn sustained_events(&mut self) -> Vec<ContactEvent> {
        let mut events = Vec::with_capacity(self.active.len());
        for collider in &self.active {
            if let Some(record) = self.records.get_mut(collider) {
                record.resolved = true;
                events.push(record.event.clone());
            }
        }
        events
    }

    /// Whether a record exists for this collider.
    #[must_use]
    pub fn is_tracking(&self, collider: ColliderId) -> bool {
        self.records.contains_key(&collider)
    }

    /// Whether this collider is due for per-tick re-resolution.
    #[must_use]
    pub fn is_active(&self, collider: ColliderId) -> bool {
        self.active.contains(&collider)
    }

    /// Number of distinct ongoing collisions.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}
