//! Simulation observer trait for progress reporting and rendering.

use flock_agent::AgentStore;
use flock_core::Tick;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// frame loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_frame_end(&mut self, tick: Tick, relocated: usize) {
///         if tick.0 % self.interval == 0 {
///             println!("frame {tick}: {relocated} agents scattered");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each frame, before any processing.
    fn on_frame_start(&mut self, _tick: Tick) {}

    /// Called after the motion pass settles, with read-only access to the
    /// full agent state.  Render sinks build their draw records here.
    fn on_render(&mut self, _tick: Tick, _agents: &AgentStore) {}

    /// Called at the end of each frame.
    ///
    /// `relocated` is the number of agents the disruptive zone scattered
    /// this frame.
    fn on_frame_end(&mut self, _tick: Tick, _relocated: usize) {}

    /// Called once after the final frame completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
