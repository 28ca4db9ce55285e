//! Simulation configuration.
//!
//! All parameters are consumed once at startup; there is no runtime
//! reconfiguration.  Applications typically build a `FlockConfig` in code or
//! deserialize one from TOML/JSON (enable the `serde` feature) and pass it by
//! reference into the simulation builder.

use std::time::Duration;

use glam::Vec2;

use crate::{FlockError, FlockResult, FrameClock};

// ── Weighting ─────────────────────────────────────────────────────────────────

/// How strongly a steering force is committed to, per agent.
///
/// Two observed rule variants exist; both share the same force synthesis and
/// differ only in the final application scale:
///
/// | Variant        | `acceleration +=`                                    |
/// |----------------|------------------------------------------------------|
/// | `Uniform`      | `force * turning_factor`                             |
/// | `SizeWeighted` | `force * turning_factor * (0.5 + attractiveness)`    |
///
/// `SizeWeighted` lets larger (rarer) agents commit to steering changes more
/// decisively, producing visually distinct "leader" behavior.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weighting {
    Uniform,
    #[default]
    SizeWeighted,
}

// ── ZoneConfig ────────────────────────────────────────────────────────────────

/// Startup parameters for the disruptive zone.
///
/// The zone is a circular region that relocates any agent entering it to a
/// uniformly random position.  Its center moves under directional input and
/// is deliberately never clamped to the boundary, so it can be parked
/// off-screen.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneConfig {
    /// Capture radius.  Agents strictly closer than this are relocated.
    pub radius: f32,
    /// Distance the zone center moves per frame per held axis.
    pub speed: f32,
    /// Whether the zone starts enabled.  Toggled at runtime by input.
    pub active: bool,
    /// Initial center.  `None` places the zone at the boundary center.
    pub position: Option<Vec2>,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            radius:   50.0,
            speed:    10.0,
            active:   true,
            position: None,
        }
    }
}

// ── FlockConfig ───────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// The force-gain defaults are the tuned constants of the reference art
/// installation; they interact (a higher `separation_gain` needs a higher
/// `turning_factor` to read as smooth), so change them together.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlockConfig {
    /// Boundary width.  Positions wrap toroidally in `[0, width]`.
    pub width: f32,
    /// Boundary height.  Positions wrap toroidally in `[0, height]`.
    pub height: f32,

    /// Number of agents, fixed for the whole run.
    pub agent_count: usize,
    /// Number of agent groups.  Same-group neighbors flock together;
    /// different groups avoid each other.
    pub num_groups: u16,
    /// Brightness variants per group's palette band.
    pub gradation_levels: u16,

    /// Speed cap; also the spawn speed.  `|velocity| <= max_speed` always
    /// holds after integration.
    pub max_speed: f32,
    /// Same-group neighbors closer than this contribute cohesion/alignment.
    pub perception_radius: f32,
    /// Same-group neighbors closer than this additionally contribute
    /// separation.
    pub separation_radius: f32,
    /// Different-group neighbors closer than this contribute avoidance.
    pub avoidance_radius: f32,

    /// Global scale on every applied steering force.
    pub turning_factor: f32,
    /// Gain on the (mean neighbor position − own position) cohesion vector.
    pub cohesion_gain: f32,
    /// Gain on the (mean neighbor velocity − own velocity) alignment vector.
    pub alignment_gain: f32,
    /// Gain on the accumulated separation vector.
    pub separation_gain: f32,
    /// Per-pair gain on the cross-group avoidance vector.
    pub avoidance_gain: f32,
    /// Uniform or size-weighted force application.
    pub weighting: Weighting,

    /// Smallest body size in the size set.
    pub body_size_min: f32,
    /// Largest body size in the size set.
    pub body_size_max: f32,
    /// How many evenly spaced sizes to generate between min and max.
    pub size_steps: usize,

    /// Disruptive-zone parameters.  `None` disables the feature entirely.
    pub zone: Option<ZoneConfig>,

    /// Presentation rate the driver paces to.  `None` runs unpaced (tests).
    pub target_fps: Option<u32>,
    /// Stop after this many frames.  `None` runs until a quit input arrives.
    pub total_frames: Option<u64>,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl Default for FlockConfig {
    fn default() -> Self {
        Self {
            width:             1920.0,
            height:            1080.0,
            agent_count:       250,
            num_groups:        7,
            gradation_levels:  10,
            max_speed:         8.0,
            perception_radius: 250.0,
            separation_radius: 50.0,
            avoidance_radius:  120.0,
            turning_factor:    0.5,
            cohesion_gain:     0.02,
            alignment_gain:    0.05,
            separation_gain:   0.3,
            avoidance_gain:    0.05,
            weighting:         Weighting::SizeWeighted,
            body_size_min:     10.0,
            body_size_max:     12.0,
            size_steps:        2,
            zone:              Some(ZoneConfig::default()),
            target_fps:        Some(60),
            total_frames:      None,
            seed:              42,
        }
    }
}

impl FlockConfig {
    /// Check every parameter that later stages assume is well-formed.
    ///
    /// Called by the simulation builder; calling it early gives a clearer
    /// error than a downstream panic would.
    pub fn validate(&self) -> FlockResult<()> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(FlockError::Config(format!(
                "boundary must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.agent_count == 0 {
            return Err(FlockError::Config("agent_count must be at least 1".into()));
        }
        if self.num_groups == 0 {
            return Err(FlockError::Config("num_groups must be at least 1".into()));
        }
        if self.gradation_levels == 0 {
            return Err(FlockError::Config(
                "gradation_levels must be at least 1".into(),
            ));
        }
        if self.palette_len() > u16::MAX as usize {
            return Err(FlockError::Config(format!(
                "palette of {} colors exceeds the color-index space",
                self.palette_len()
            )));
        }
        if self.max_speed <= 0.0 {
            return Err(FlockError::Config(format!(
                "max_speed must be positive, got {}",
                self.max_speed
            )));
        }
        for (name, radius) in [
            ("perception_radius", self.perception_radius),
            ("separation_radius", self.separation_radius),
            ("avoidance_radius", self.avoidance_radius),
        ] {
            if radius < 0.0 {
                return Err(FlockError::Config(format!(
                    "{name} must be non-negative, got {radius}"
                )));
            }
        }
        if self.size_steps == 0 {
            return Err(FlockError::Config("size_steps must be at least 1".into()));
        }
        if self.body_size_min > self.body_size_max {
            return Err(FlockError::Config(format!(
                "body_size_min {} exceeds body_size_max {}",
                self.body_size_min, self.body_size_max
            )));
        }
        if let Some(zone) = &self.zone {
            if zone.radius < 0.0 {
                return Err(FlockError::Config(format!(
                    "zone radius must be non-negative, got {}",
                    zone.radius
                )));
            }
        }
        Ok(())
    }

    /// The set of body sizes agents are assigned from: `size_steps` evenly
    /// spaced values from `body_size_min` to `body_size_max` inclusive.
    ///
    /// A single step degenerates to `[body_size_min]` (no interval to divide).
    pub fn body_sizes(&self) -> Vec<f32> {
        if self.size_steps == 1 {
            return vec![self.body_size_min];
        }
        let span = self.body_size_max - self.body_size_min;
        let step = span / (self.size_steps - 1) as f32;
        (0..self.size_steps)
            .map(|i| self.body_size_min + step * i as f32)
            .collect()
    }

    /// Total number of palette entries: one band per group.
    #[inline]
    pub fn palette_len(&self) -> usize {
        self.num_groups as usize * self.gradation_levels as usize
    }

    /// Wall-clock duration of one frame at `target_fps`, or `None` if unpaced.
    pub fn frame_interval(&self) -> Option<Duration> {
        self.target_fps
            .filter(|&fps| fps > 0)
            .map(|fps| Duration::from_secs_f64(1.0 / fps as f64))
    }

    /// Construct a `FrameClock` pre-configured for this run.
    pub fn make_clock(&self) -> FrameClock {
        FrameClock::new(self.target_fps)
    }

    /// The boundary center — the zone's default starting position.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}
