//! The `RenderSink` trait implemented by all record consumers.

use flock_core::Tick;

use crate::{DrawCommand, RenderResult};

/// Summary statistics for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSummaryRow {
    pub frame: u64,
    /// Agents scattered by the disruptive zone this frame.
    pub relocated: u64,
    /// Total population (constant for a run; recorded for self-contained
    /// captures).
    pub agents: u64,
}

/// Trait implemented by capture and presentation backends.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`RenderObserver::take_error`][crate::RenderObserver::take_error].
pub trait RenderSink {
    /// Consume one frame's draw records, in ascending agent order.
    fn write_frame(&mut self, tick: Tick, commands: &[DrawCommand]) -> RenderResult<()>;

    /// Record one frame summary row.
    fn write_summary(&mut self, row: &FrameSummaryRow) -> RenderResult<()>;

    /// Flush and close any underlying resources.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> RenderResult<()>;
}
