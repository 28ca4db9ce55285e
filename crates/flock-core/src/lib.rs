//! `flock-core` — foundational types for the `rust_flock` simulation engine.
//!
//! This crate is a dependency of every other `flock-*` crate.  It intentionally
//! has no `flock-*` dependencies and minimal external ones (only `glam`,
//! `rand`, and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`ids`]     | `AgentId`, `GroupId`, `ColorId`                     |
//! | [`frame`]   | `Tick`, `FrameClock`                                |
//! | [`rng`]     | `SimRng` (seeded, deterministic)                    |
//! | [`config`]  | `FlockConfig`, `ZoneConfig`, `Weighting`            |
//! | [`error`]   | `FlockError`, `FlockResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.      |

pub mod config;
pub mod error;
pub mod frame;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{FlockConfig, Weighting, ZoneConfig};
pub use error::{FlockError, FlockResult};
pub use frame::{FrameClock, Tick};
pub use ids::{AgentId, ColorId, GroupId};
pub use rng::SimRng;
