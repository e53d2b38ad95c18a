#![deny(clippy::all, clippy::pedantic)]

mod sphere;

use std::fs;

use anyhow::{Context, Result};
use deform::{
    ColliderId, ColliderKind, ColliderUpdate, CollisionEvent, ContactEvent, ContactPoint,
    DeformHost, DeformableSphere, SimulationParams, Transform, Vec3,
};

/// World position of the demo body; contacts arrive in world space.
const BODY_POSITION: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Stand-in for the host engine's mesh and collider services: records what
/// the simulation hands over each tick.
struct LoggingHost {
    radius: f32,
    mesh_vertices: usize,
}

impl DeformHost for LoggingHost {
    fn update_mesh(&mut self, positions: &[Vec3]) {
        self.mesh_vertices = positions.len();
    }

    fn update_collider(&mut self, update: ColliderUpdate) {
        self.radius = update.radius;
    }

    fn apply_reaction(&mut self, position: Vec3, force: Vec3) {
        tracing::debug!(?position, ?force, "reaction on colliding body");
    }
}

fn load_params() -> Result<SimulationParams> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text =
                fs::read_to_string(&path).with_context(|| format!("reading params file {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing params file {path}"))
        }
        None => Ok(SimulationParams::default()),
    }
}

fn press_contact(impulse: Vec3) -> ContactEvent {
    ContactEvent {
        collider: ColliderId(1),
        contacts: vec![ContactPoint {
            point: BODY_POSITION + Vec3::new(0.0, 0.0, 1.0),
            normal: Vec3::new(0.0, 0.0, 1.0),
        }],
        impulse,
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let params = load_params()?;
    let rest = sphere::lat_long_sphere(1.0, 16, 32);
    tracing::info!("Initializing deformable sphere with {} vertices...", rest.len());

    let mut sim = DeformableSphere::new(&rest, ColliderKind::Sphere, params);
    sim.set_transform(Transform::from_translation(BODY_POSITION));
    let mut host = LoggingHost {
        radius: 0.0,
        mesh_vertices: 0,
    };

    let impulse = Vec3::new(0.0, 0.0, -2.0);
    let press_ticks = 50;
    let relax_ticks = 150;

    tracing::info!("Pressing at the +Z pole for {} ticks...", press_ticks);
    sim.handle_event(CollisionEvent::Enter(press_contact(impulse)));
    for tick in 0..press_ticks {
        sim.handle_event(CollisionEvent::Stay(press_contact(impulse)));
        sim.step(&mut host);
        if (tick + 1) % 10 == 0 {
            tracing::info!("Press tick {} complete. Radius: {}", tick + 1, host.radius);
        }
    }

    tracing::info!("Releasing; relaxing for {} ticks...", relax_ticks);
    sim.handle_event(CollisionEvent::Exit(press_contact(impulse)));
    for tick in 0..relax_ticks {
        sim.step(&mut host);
        if (tick + 1) % 25 == 0 {
            tracing::info!("Relax tick {} complete. Radius: {}", tick + 1, host.radius);
        }
    }

    tracing::info!(
        "Scenario finished. Final radius: {}, mesh vertices per upload: {}",
        host.radius,
        host.mesh_vertices
    );

    Ok(())
}
