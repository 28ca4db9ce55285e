//! Unit tests for flock-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, ColorId, GroupId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(GroupId(100) > GroupId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(GroupId::INVALID.0, u16::MAX);
        assert_eq!(ColorId::INVALID.0, u16::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod frame {
    use crate::{FrameClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn clock_advances() {
        let mut clock = FrameClock::new(Some(60));
        assert_eq!(clock.current_tick, Tick::ZERO);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
    }

    #[test]
    fn clock_elapsed_at_target_rate() {
        let mut clock = FrameClock::new(Some(60));
        for _ in 0..120 {
            clock.advance();
        }
        assert_eq!(clock.elapsed_secs(), Some(2.0));
    }

    #[test]
    fn unpaced_clock_has_no_elapsed_time() {
        let mut clock = FrameClock::new(None);
        clock.advance();
        assert_eq!(clock.elapsed_secs(), None);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn children_diverge_from_parent_and_each_other() {
        let mut root = SimRng::new(1);
        let mut c0 = root.child(0);
        let mut c1 = root.child(1);
        let a: u64 = c0.random();
        let b: u64 = c1.random();
        assert_ne!(a, b, "sibling child streams should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f32..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn choose_covers_slice() {
        let mut rng = SimRng::new(7);
        let set = [1, 2, 3];
        for _ in 0..50 {
            let v = rng.choose(&set).unwrap();
            assert!(set.contains(v));
        }
        assert_eq!(rng.choose::<u32>(&[]), None);
    }
}

#[cfg(test)]
mod config {
    use crate::{FlockConfig, Weighting};

    #[test]
    fn default_config_is_valid() {
        assert!(FlockConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_agents_rejected() {
        let cfg = FlockConfig { agent_count: 0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_groups_rejected() {
        let cfg = FlockConfig { num_groups: 0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_gradation_levels_rejected() {
        let cfg = FlockConfig { gradation_levels: 0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn non_positive_boundary_rejected() {
        let cfg = FlockConfig { width: 0.0, ..Default::default() };
        assert!(cfg.validate().is_err());
        let cfg = FlockConfig { height: -1.0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn inverted_size_range_rejected() {
        let cfg = FlockConfig {
            body_size_min: 12.0,
            body_size_max: 10.0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn body_sizes_evenly_spaced() {
        let cfg = FlockConfig {
            body_size_min: 10.0,
            body_size_max: 12.0,
            size_steps:    3,
            ..Default::default()
        };
        assert_eq!(cfg.body_sizes(), vec![10.0, 11.0, 12.0]);
    }

    #[test]
    fn single_size_step_degenerates_to_min() {
        let cfg = FlockConfig {
            body_size_min: 10.0,
            body_size_max: 12.0,
            size_steps:    1,
            ..Default::default()
        };
        assert_eq!(cfg.body_sizes(), vec![10.0]);
    }

    #[test]
    fn palette_len_is_groups_times_levels() {
        let cfg = FlockConfig {
            num_groups:       7,
            gradation_levels: 10,
            ..Default::default()
        };
        assert_eq!(cfg.palette_len(), 70);
    }

    #[test]
    fn frame_interval_from_fps() {
        let cfg = FlockConfig { target_fps: Some(60), ..Default::default() };
        let interval = cfg.frame_interval().unwrap();
        assert!((interval.as_secs_f64() - 1.0 / 60.0).abs() < 1e-9);

        let unpaced = FlockConfig { target_fps: None, ..Default::default() };
        assert_eq!(unpaced.frame_interval(), None);
    }

    #[test]
    fn default_weighting_is_size_weighted() {
        assert_eq!(FlockConfig::default().weighting, Weighting::SizeWeighted);
    }
}
