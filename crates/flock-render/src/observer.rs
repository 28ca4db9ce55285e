//! `RenderObserver<S>` — bridges `SimObserver` to a `RenderSink`.

use flock_agent::AgentStore;
use flock_core::Tick;
use flock_sim::SimObserver;

use crate::draw::frame_commands;
use crate::sink::{FrameSummaryRow, RenderSink};
use crate::{Palette, RenderError};

/// A [`SimObserver`] that turns each frame into draw records and feeds any
/// [`RenderSink`] backend (window renderer, CSV capture, …).
///
/// Errors from the sink are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct RenderObserver<S: RenderSink> {
    sink:        S,
    palette:     Palette,
    agent_count: u64,
    last_error:  Option<RenderError>,
}

impl<S: RenderSink> RenderObserver<S> {
    /// Create an observer feeding `sink`, coloring agents from `palette`.
    pub fn new(sink: S, palette: Palette) -> Self {
        Self {
            sink,
            palette,
            agent_count: 0,
            last_error:  None,
        }
    }

    /// Take the stored sink error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<RenderError> {
        self.last_error.take()
    }

    /// Unwrap the inner sink (e.g. to inspect captures after the sim).
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn store_err(&mut self, result: crate::RenderResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<S: RenderSink> SimObserver for RenderObserver<S> {
    fn on_render(&mut self, tick: Tick, agents: &AgentStore) {
        self.agent_count = agents.count as u64;
        let commands = frame_commands(agents, &self.palette);
        let result = self.sink.write_frame(tick, &commands);
        self.store_err(result);
    }

    fn on_frame_end(&mut self, tick: Tick, relocated: usize) {
        let row = FrameSummaryRow {
            frame:     tick.0,
            relocated: relocated as u64,
            agents:    self.agent_count,
        };
        let result = self.sink.write_summary(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.sink.finish();
        self.store_err(result);
    }
}
