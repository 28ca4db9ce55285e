//! Palette generation: one gradation band per agent group.

use flock_core::{ColorId, GroupId};

use crate::{RenderError, RenderResult, Rgb};

/// The fixed base-hue table.  Group `t` takes hue `t mod 6`, so palettes
/// with more than six groups reuse hues (bands stay distinguishable through
/// their gradation spread).
pub const BASE_HUES: [Rgb; 6] = [
    Rgb::new(200.0, 50.0, 50.0),
    Rgb::new(50.0, 200.0, 50.0),
    Rgb::new(50.0, 50.0, 200.0),
    Rgb::new(200.0, 200.0, 50.0),
    Rgb::new(200.0, 50.0, 200.0),
    Rgb::new(50.0, 200.0, 200.0),
];

/// An immutable list of `num_groups * gradation_levels` colors, generated
/// once at startup.
///
/// Band `t` occupies indices `[t * levels, (t + 1) * levels)` and progresses
/// linearly from its base hue toward white:
///
/// `color(t, g) = base + (255 - base) * (g / (levels - 1)) * 0.3`
///
/// The 0.3 ceiling keeps the brightest variant clearly within the band's hue.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Rgb>,
    gradation_levels: u16,
}

impl Palette {
    /// Generate the full palette.  Pure: the same inputs always produce the
    /// same ordered color list.
    ///
    /// A single gradation level short-circuits to the base hue unmodified —
    /// there is no interval to divide.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidPalette`] when either dimension is zero.
    pub fn generate(num_groups: u16, gradation_levels: u16) -> RenderResult<Palette> {
        if num_groups == 0 || gradation_levels == 0 {
            return Err(RenderError::InvalidPalette {
                groups: num_groups,
                levels: gradation_levels,
            });
        }

        let mut colors = Vec::with_capacity(num_groups as usize * gradation_levels as usize);
        for t in 0..num_groups {
            let base = BASE_HUES[t as usize % BASE_HUES.len()];
            for g in 0..gradation_levels {
                let color = if gradation_levels == 1 {
                    base
                } else {
                    let blend = g as f32 / (gradation_levels - 1) as f32;
                    base.toward_white(blend * 0.3)
                };
                colors.push(color);
            }
        }

        Ok(Palette {
            colors,
            gradation_levels,
        })
    }

    /// Total number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The color at `id`.
    ///
    /// # Panics
    /// Panics if `id` is out of range — spawn assigns IDs from the same
    /// `num_groups * gradation_levels` space, so a mismatch is a wiring bug.
    #[inline]
    pub fn color(&self, id: ColorId) -> Rgb {
        self.colors[id.index()]
    }

    /// The gradation band belonging to `group`.
    pub fn band(&self, group: GroupId) -> &[Rgb] {
        let levels = self.gradation_levels as usize;
        let start = group.index() * levels;
        &self.colors[start..start + levels]
    }

    /// Gradation steps per band.
    #[inline]
    pub fn gradation_levels(&self) -> u16 {
        self.gradation_levels
    }
}
