use deform::integrator::integrate_vertices;
use deform::{
    ColliderId, ColliderKind, ColliderUpdate, ContactEvent, ContactPoint, DeformHost,
    DeformableSphere, SimulationParams, Vec3, Vertex,
};

struct NullHost;

impl DeformHost for NullHost {
    fn update_mesh(&mut self, _positions: &[Vec3]) {}
    fn update_collider(&mut self, _update: ColliderUpdate) {}
}

fn axis_sphere() -> Vec<Vec3> {
    vec![
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(-1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, -1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(0.0, 0.0, -1.0),
    ]
}

fn press_event(impulse: Vec3) -> ContactEvent {
    ContactEvent {
        collider: ColliderId(1),
        contacts: vec![ContactPoint {
            point: Vec3::new(0.0, 0.0, 1.0),
            normal: Vec3::new(0.0, 0.0, 1.0),
        }],
        impulse,
    }
}

#[test]
fn displacement_stays_bounded_over_many_ticks() {
    let mut sim = DeformableSphere::new(
        &axis_sphere(),
        ColliderKind::Sphere,
        SimulationParams::default(),
    );
    let mut host = NullHost;
    let max = sim.params.max_displacement;

    sim.on_collision_enter(press_event(Vec3::new(0.0, 0.0, -500.0)));
    for _ in 0..100 {
        sim.on_collision_stay(press_event(Vec3::new(0.0, 0.0, -500.0)));
        sim.step(&mut host);
        for vertex in sim.vertices() {
            assert!((vertex.position - vertex.rest).length() <= max + 1e-4);
        }
    }
}

#[test]
fn integration_clamp_binds_under_extreme_velocity() {
    let params = SimulationParams {
        max_displacement: 0.25,
        ..SimulationParams::default()
    };
    let mut vertices: Vec<Vertex> = axis_sphere().into_iter().map(Vertex::at_rest).collect();
    for vertex in &mut vertices {
        vertex.velocity = Vec3::new(0.0, 0.0, 1.0e4);
    }
    integrate_vertices(&mut vertices, &params);
    for vertex in &vertices {
        let displacement = vertex.position - vertex.rest;
        assert!(displacement.length() <= 0.25 + 1e-5);
        // Velocity is deliberately left unclamped for the spring to fight.
        assert!(vertex.velocity.length() > 0.25);
    }
}

#[test]
fn dent_relaxes_back_toward_rest_after_contact_ends() {
    let mut sim = DeformableSphere::new(
        &axis_sphere(),
        ColliderKind::Sphere,
        SimulationParams::default(),
    );
    let mut host = NullHost;

    sim.on_collision_enter(press_event(Vec3::new(0.0, 0.0, -2.0)));
    sim.step(&mut host);
    sim.on_collision_exit(press_event(Vec3::new(0.0, 0.0, -2.0)));
    sim.step(&mut host);

    let deformed: f32 = sim
        .vertices()
        .iter()
        .map(|v| (v.position - v.rest).length())
        .fold(0.0, f32::max);
    assert!(deformed > 1e-3, "contact should have dented the mesh");

    for _ in 0..300 {
        sim.step(&mut host);
    }

    let relaxed: f32 = sim
        .vertices()
        .iter()
        .map(|v| (v.position - v.rest).length())
        .fold(0.0, f32::max);
    assert!(
        relaxed < 1e-2,
        "dent should decay under spring-damper relaxation, got {relaxed}"
    );
    assert!(relaxed < deformed);
}
