//! The rectangular, toroidally wrapped boundary.

use flock_core::{FlockError, FlockResult, SimRng};
use glam::Vec2;

/// A `width × height` rectangle with teleporting wrap-around edges.
///
/// Crossing an edge teleports the agent to the opposite edge (an "infinite
/// space" effect) — this is a wrap, not a reflect/bounce.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Boundary {
    pub width: f32,
    pub height: f32,
}

impl Boundary {
    /// # Errors
    ///
    /// Returns `FlockError::Config` for non-positive dimensions.
    pub fn new(width: f32, height: f32) -> FlockResult<Self> {
        if width <= 0.0 || height <= 0.0 {
            return Err(FlockError::Config(format!(
                "boundary must be positive, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Teleporting wrap: each axis independently snaps to the opposite edge
    /// when crossed.  Positions already inside come back unchanged.
    #[inline]
    pub fn wrap(&self, mut p: Vec2) -> Vec2 {
        if p.x > self.width {
            p.x = 0.0;
        }
        if p.x < 0.0 {
            p.x = self.width;
        }
        if p.y > self.height {
            p.y = 0.0;
        }
        if p.y < 0.0 {
            p.y = self.height;
        }
        p
    }

    /// `true` if `p` lies inside `[0, width] × [0, height]` (inclusive).
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    /// A uniformly random point inside the rectangle.
    #[inline]
    pub fn random_point(&self, rng: &mut SimRng) -> Vec2 {
        Vec2::new(
            rng.gen_range(0.0..=self.width),
            rng.gen_range(0.0..=self.height),
        )
    }

    /// The rectangle's center.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}
