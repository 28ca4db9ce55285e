//! CSV capture backend.
//!
//! Creates two files in the configured output directory:
//! - `draw_commands.csv` — one row per agent per frame
//! - `frame_summaries.csv` — one row per frame

use std::fs::File;
use std::path::Path;

use csv::Writer;
use flock_core::Tick;

use crate::sink::{FrameSummaryRow, RenderSink};
use crate::{DrawCommand, RenderResult};

/// Writes draw records and frame summaries to two CSV files.
pub struct CsvRecorder {
    commands:  Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvRecorder {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> RenderResult<Self> {
        let mut commands = Writer::from_path(dir.join("draw_commands.csv"))?;
        commands.write_record(["frame", "agent", "x", "y", "heading", "size", "r", "g", "b"])?;

        let mut summaries = Writer::from_path(dir.join("frame_summaries.csv"))?;
        summaries.write_record(["frame", "relocated", "agents"])?;

        Ok(Self {
            commands,
            summaries,
            finished: false,
        })
    }
}

impl RenderSink for CsvRecorder {
    fn write_frame(&mut self, tick: Tick, commands: &[DrawCommand]) -> RenderResult<()> {
        for (agent, cmd) in commands.iter().enumerate() {
            let (r, g, b) = cmd.color.to_rgb8();
            self.commands.write_record(&[
                tick.0.to_string(),
                agent.to_string(),
                cmd.position.x.to_string(),
                cmd.position.y.to_string(),
                cmd.heading.to_string(),
                cmd.size.to_string(),
                r.to_string(),
                g.to_string(),
                b.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &FrameSummaryRow) -> RenderResult<()> {
        self.summaries.write_record(&[
            row.frame.to_string(),
            row.relocated.to_string(),
            row.agents.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> RenderResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.commands.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
