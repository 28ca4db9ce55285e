//! `flock-behavior` — steering model trait and flocking rules.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                         |
//! |--------------|------------------------------------------------------------------|
//! | [`context`]  | `FrameContext<'a>` — read-only frame snapshot shared by all agents |
//! | [`model`]    | `SteeringModel` trait                                            |
//! | [`flocking`] | `ClassicFlocking`, `SteeringParams`, `SteeringBreakdown`         |
//! | [`noop`]     | `NoSteering` — placeholder that never steers                     |
//! | [`error`]    | `BehaviorError`, `BehaviorResult<T>`                             |
//!
//! # Design notes
//!
//! The two-phase frame loop in flock-sim works as follows:
//!
//! 1. **Force phase** (optionally parallel): for every agent, call
//!    [`SteeringModel::steer`] against the frame's read-only
//!    [`FrameContext`].  All reads see the previous frame's positions and
//!    velocities; results land in a separate delta buffer.
//!
//! 2. **Apply phase** (sequential): accumulate the deltas into each agent's
//!    acceleration, then integrate and wrap.
//!
//! This split means `SteeringModel` only needs to be `Send + Sync` — it never
//! holds mutable state that could cause data races, and the simulation stays
//! independent of iteration order.

pub mod context;
pub mod error;
pub mod flocking;
pub mod model;
pub mod noop;


pub use context::FrameContext;
pub use error::{BehaviorError, BehaviorResult};
pub use flocking::{ClassicFlocking, SteeringBreakdown, SteeringParams};
pub use model::SteeringModel;
pub use noop::NoSteering;
