//! `flock-agent` — Structure-of-Arrays agent storage for the `rust_flock`
//! engine.
//!
//! # Crate layout
//!
//! | Module    | Contents                                             |
//! |-----------|------------------------------------------------------|
//! | [`store`] | `AgentStore` (SoA arrays)                            |
//! | [`spawn`] | `AgentSpawner` (randomized population construction)  |
//!
//! Agents are created once at startup and live for the whole run; there is no
//! dynamic creation or removal.  The disruptive zone *relocates* agents, it
//! never destroys them.

pub mod spawn;
pub mod store;


pub use spawn::AgentSpawner;
pub use store::AgentStore;
