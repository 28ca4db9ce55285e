//! `flock-sim` — frame loop orchestrator for the rust_flock engine.
//!
//! # Frame loop
//!
//! ```text
//! while running:
//!   ① Input     — poll the InputSource snapshot; quit stops the loop,
//!                 toggle/axes steer the disruptive zone.
//!   ② Disrupt   — relocate agents caught in the active zone (they flock
//!                 from their new position this same frame).
//!   ③ Force     — call SteeringModel::steer for every agent against the
//!                 read-only FrameContext (parallel with the `parallel`
//!                 feature); deltas land in a separate buffer.
//!   ④ Apply     — accumulate deltas into acceleration, integrate motion,
//!                 wrap positions.  Never interleaved with ③.
//!   ⑤ Render    — observer.on_render with the settled store.
//!   ⑥ Pace      — block until the configured frame interval has elapsed
//!                 (presentation only; absent in tests).
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the force phase on Rayon's thread pool.           |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use flock_behavior::ClassicFlocking;
//! use flock_core::FlockConfig;
//! use flock_sim::{NoopInput, NoopObserver, SimBuilder};
//!
//! let config = FlockConfig::default();
//! let model = ClassicFlocking::from_config(&config)?;
//! let mut sim = SimBuilder::new(config, model, NoopInput).build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod input;
pub mod observer;
pub mod pacer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use input::{InputSource, InputState, NoopInput, ScriptedInput};
pub use observer::{NoopObserver, SimObserver};
pub use pacer::FramePacer;
pub use sim::{RunState, Sim};
