//! Input snapshots and the `InputSource` seam.
//!
//! The engine does not talk to any input device.  Once per frame it polls an
//! `InputSource` for a plain snapshot: two discrete events (quit, zone
//! toggle) and the continuous held state of the directional axes.  Window
//! toolkits adapt their event queues to this trait outside the core.

use std::collections::VecDeque;

/// One frame's worth of input.
///
/// `axis_x`/`axis_y` are held-key state in `{-1.0, 0.0, +1.0}` per axis
/// (left/right, up/down); the zone moves by `speed * axis` per frame while
/// held.  `quit` and `toggle_zone` are edge events, reported once.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct InputState {
    pub quit: bool,
    pub toggle_zone: bool,
    pub axis_x: f32,
    pub axis_y: f32,
}

/// Supplies one [`InputState`] per frame.
///
/// Implementations adapt a real event source (window toolkit, pipe, MIDI
/// controller, …) or script inputs for tests and headless runs.
pub trait InputSource {
    fn poll(&mut self) -> InputState;
}

/// An input source that never reports anything — the simulation runs
/// undisturbed until `total_frames` (or forever).
pub struct NoopInput;

impl InputSource for NoopInput {
    fn poll(&mut self) -> InputState {
        InputState::default()
    }
}

/// Replays a fixed per-frame sequence of snapshots, then goes quiet.
///
/// Used by tests and headless demos to drive the zone deterministically.
pub struct ScriptedInput {
    frames: VecDeque<InputState>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = InputState>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Snapshots not yet consumed.
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> InputState {
        self.frames.pop_front().unwrap_or_default()
    }
}
