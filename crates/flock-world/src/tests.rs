//! Unit tests for flock-world.

use flock_agent::AgentStore;
use flock_core::{FlockConfig, SimRng, ZoneConfig};
use glam::Vec2;

use crate::{Boundary, DisruptiveZone, MotionEngine, World};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn bounds() -> Boundary {
    Boundary::new(800.0, 600.0).unwrap()
}

fn one_agent(pos: Vec2, vel: Vec2) -> AgentStore {
    let mut store = AgentStore::with_count(1);
    store.position[0] = pos;
    store.velocity[0] = vel;
    store
}

// ── Boundary ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod boundary_tests {
    use super::*;

    #[test]
    fn non_positive_dimensions_rejected() {
        assert!(Boundary::new(0.0, 600.0).is_err());
        assert!(Boundary::new(800.0, -1.0).is_err());
    }

    #[test]
    fn wrap_teleports_to_opposite_edge() {
        let b = bounds();
        assert_eq!(b.wrap(Vec2::new(801.0, 300.0)), Vec2::new(0.0, 300.0));
        assert_eq!(b.wrap(Vec2::new(-0.5, 300.0)), Vec2::new(800.0, 300.0));
        assert_eq!(b.wrap(Vec2::new(400.0, 601.0)), Vec2::new(400.0, 0.0));
        assert_eq!(b.wrap(Vec2::new(400.0, -2.0)), Vec2::new(400.0, 600.0));
    }

    #[test]
    fn wrap_handles_both_axes_at_once() {
        let b = bounds();
        assert_eq!(b.wrap(Vec2::new(-1.0, 601.0)), Vec2::new(800.0, 0.0));
    }

    #[test]
    fn wrap_leaves_interior_points_alone() {
        let b = bounds();
        let p = Vec2::new(123.4, 567.8);
        assert_eq!(b.wrap(p), p);
        // Edge-exact positions are inside, not wrapped.
        assert_eq!(b.wrap(Vec2::new(800.0, 600.0)), Vec2::new(800.0, 600.0));
        assert_eq!(b.wrap(Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn random_points_inside() {
        let b = bounds();
        let mut rng = SimRng::new(9);
        for _ in 0..500 {
            assert!(b.contains(b.random_point(&mut rng)));
        }
    }
}

// ── Motion ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod motion_tests {
    use super::*;

    #[test]
    fn integrate_accumulates_and_clears_acceleration() {
        let motion = MotionEngine::new(100.0);
        let mut store = one_agent(Vec2::new(10.0, 10.0), Vec2::new(1.0, 0.0));
        store.acceleration[0] = Vec2::new(0.0, 2.0);

        motion.integrate(&mut store);
        assert_eq!(store.velocity[0], Vec2::new(1.0, 2.0));
        assert_eq!(store.position[0], Vec2::new(11.0, 12.0));
        assert_eq!(store.acceleration[0], Vec2::ZERO);
    }

    #[test]
    fn speed_clamped_to_max_preserving_direction() {
        let motion = MotionEngine::new(5.0);
        let mut store = one_agent(Vec2::ZERO, Vec2::new(30.0, 40.0)); // speed 50

        motion.integrate(&mut store);
        let v = store.velocity[0];
        assert!((v.length() - 5.0).abs() < 1e-4, "speed {}", v.length());
        // Direction preserved: still proportional to (3, 4).
        assert!((v.x / v.y - 0.75).abs() < 1e-5);
    }

    #[test]
    fn speed_at_or_below_max_untouched() {
        let motion = MotionEngine::new(5.0);
        let mut store = one_agent(Vec2::ZERO, Vec2::new(3.0, 4.0)); // speed 5 exactly
        motion.integrate(&mut store);
        assert_eq!(store.velocity[0], Vec2::new(3.0, 4.0));
    }

    #[test]
    fn step_wraps_after_moving() {
        let motion = MotionEngine::new(100.0);
        let b = bounds();
        let mut store = one_agent(Vec2::new(799.0, 300.0), Vec2::new(5.0, 0.0));

        motion.step(&mut store, &b);
        assert_eq!(store.position[0], Vec2::new(0.0, 300.0));
    }

    #[test]
    fn speed_invariant_over_many_frames() {
        let motion = MotionEngine::new(8.0);
        let b = bounds();
        let mut store = one_agent(Vec2::new(400.0, 300.0), Vec2::new(8.0, 0.0));
        let mut rng = SimRng::new(3);

        for _ in 0..200 {
            store.acceleration[0] =
                Vec2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
            motion.step(&mut store, &b);
            assert!(store.velocity[0].length() <= 8.0 + 1e-4);
            assert!(b.contains(store.position[0]));
        }
    }
}

// ── Disruptive zone ───────────────────────────────────────────────────────────

#[cfg(test)]
mod zone_tests {
    use super::*;

    fn zone_at(pos: Vec2, radius: f32, active: bool) -> DisruptiveZone {
        DisruptiveZone {
            position: pos,
            radius,
            speed: 10.0,
            active,
        }
    }

    #[test]
    fn capture_is_strictly_inside_radius() {
        let zone = zone_at(Vec2::ZERO, 50.0, true);
        assert!(zone.contains(Vec2::new(49.9, 0.0)));
        assert!(!zone.contains(Vec2::new(50.0, 0.0))); // boundary-exact: out
        assert!(!zone.contains(Vec2::new(50.1, 0.0)));
    }

    #[test]
    fn relocates_captured_agents_only() {
        let b = bounds();
        let zone = zone_at(Vec2::new(100.0, 100.0), 50.0, true);
        let mut rng = SimRng::new(11);

        let mut store = AgentStore::with_count(2);
        store.position[0] = Vec2::new(110.0, 100.0); // inside
        store.position[1] = Vec2::new(700.0, 500.0); // far outside
        store.velocity[0] = Vec2::new(1.0, 2.0);

        let moved = zone.disrupt(&mut store, &b, &mut rng);
        assert_eq!(moved, 1);
        assert_ne!(store.position[0], Vec2::new(110.0, 100.0));
        assert!(b.contains(store.position[0]));
        assert_eq!(store.position[1], Vec2::new(700.0, 500.0));
        // Velocity and everything else survive relocation.
        assert_eq!(store.velocity[0], Vec2::new(1.0, 2.0));
    }

    #[test]
    fn inactive_zone_relocates_nothing() {
        let b = bounds();
        let zone = zone_at(Vec2::new(100.0, 100.0), 50.0, false);
        let mut rng = SimRng::new(11);
        let mut store = one_agent(Vec2::new(100.0, 100.0), Vec2::ZERO);

        assert_eq!(zone.disrupt(&mut store, &b, &mut rng), 0);
        assert_eq!(store.position[0], Vec2::new(100.0, 100.0));
    }

    #[test]
    fn relocation_spreads_over_the_whole_boundary() {
        // Statistical check: relocate the same trapped agent many times and
        // expect landings in all four quadrants.
        let b = bounds();
        let zone = zone_at(Vec2::new(100.0, 100.0), 50.0, true);
        let mut rng = SimRng::new(23);
        let mut quadrants = [false; 4];

        for _ in 0..200 {
            let mut store = one_agent(Vec2::new(100.0, 100.0), Vec2::ZERO);
            zone.disrupt(&mut store, &b, &mut rng);
            let p = store.position[0];
            assert!(b.contains(p));
            let q = (p.x > b.width * 0.5) as usize * 2 + (p.y > b.height * 0.5) as usize;
            quadrants[q] = true;
        }
        assert!(quadrants.iter().all(|&hit| hit), "landings: {quadrants:?}");
    }

    #[test]
    fn shift_moves_by_speed_per_axis_unclamped() {
        let mut zone = zone_at(Vec2::new(5.0, 5.0), 50.0, true);
        zone.shift(-1.0, 0.0);
        assert_eq!(zone.position, Vec2::new(-5.0, 5.0)); // off-screen is fine
        zone.shift(1.0, 1.0);
        assert_eq!(zone.position, Vec2::new(5.0, 15.0));
    }

    #[test]
    fn toggle_flips_active() {
        let mut zone = zone_at(Vec2::ZERO, 50.0, true);
        zone.toggle();
        assert!(!zone.active);
        zone.toggle();
        assert!(zone.active);
    }
}

// ── World assembly ────────────────────────────────────────────────────────────

#[cfg(test)]
mod world_tests {
    use super::*;

    #[test]
    fn from_config_defaults_zone_to_center() {
        let config = FlockConfig::default();
        let world = World::from_config(&config).unwrap();
        let zone = world.zone.as_ref().unwrap();
        assert_eq!(zone.position, world.boundary.center());
        assert_eq!(zone.radius, config.zone.as_ref().unwrap().radius);
    }

    #[test]
    fn config_without_zone_disables_feature() {
        let config = FlockConfig { zone: None, ..Default::default() };
        let world = World::from_config(&config).unwrap();
        assert!(world.zone.is_none());

        let mut store = AgentStore::with_count(1);
        let mut rng = SimRng::new(0);
        assert_eq!(world.disrupt(&mut store, &mut rng), 0);
    }

    #[test]
    fn steer_zone_routes_toggle_then_movement() {
        let config = FlockConfig {
            zone: Some(ZoneConfig {
                position: Some(Vec2::new(10.0, 10.0)),
                speed:    10.0,
                active:   true,
                radius:   50.0,
            }),
            ..Default::default()
        };
        let mut world = World::from_config(&config).unwrap();
        world.steer_zone(true, 1.0, 0.0);

        let zone = world.zone.as_ref().unwrap();
        assert!(!zone.active);
        assert_eq!(zone.position, Vec2::new(20.0, 10.0));
    }
}
