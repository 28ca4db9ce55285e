//! `flock-render` — the engine-facing half of the render interface.
//!
//! The core never talks to a graphics API.  Each frame it produces one
//! [`DrawCommand`] per agent (position, heading, size, color); anything that
//! can consume those records — a window renderer, a plotter, a CSV capture —
//! implements [`RenderSink`] and is driven by [`RenderObserver`].
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`color`]    | `Rgb` — f32 color with white-blend helper               |
//! | [`palette`]  | `Palette` — per-group gradation bands                   |
//! | [`draw`]     | `DrawCommand`, triangle geometry, `frame_commands`      |
//! | [`sink`]     | `RenderSink` trait, `FrameSummaryRow`                   |
//! | [`csv`]      | `CsvRecorder` — capture backend                         |
//! | [`observer`] | `RenderObserver<S>` — bridges `SimObserver` to a sink   |
//! | [`error`]    | `RenderError`, `RenderResult<T>`                        |
//!
//! # Usage
//!
//! ```rust,ignore
//! use flock_render::{CsvRecorder, Palette, RenderObserver};
//!
//! let palette = Palette::generate(config.num_groups, config.gradation_levels)?;
//! let recorder = CsvRecorder::new(Path::new("./capture"))?;
//! let mut obs = RenderObserver::new(recorder, palette);
//! sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("capture error: {e}"));
//! ```

pub mod color;
pub mod csv;
pub mod draw;
pub mod error;
pub mod observer;
pub mod palette;
pub mod sink;


pub use color::Rgb;
pub use crate::csv::CsvRecorder;
pub use draw::{frame_commands, DrawCommand};
pub use error::{RenderError, RenderResult};
pub use observer::RenderObserver;
pub use palette::{Palette, BASE_HUES};
pub use sink::{FrameSummaryRow, RenderSink};
