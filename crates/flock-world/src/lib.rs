//! `flock-world` — the space agents move through.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`boundary`] | `Boundary` — toroidal wrap and uniform sampling           |
//! | [`motion`]   | `MotionEngine` — velocity/position integration            |
//! | [`zone`]     | `DisruptiveZone` — movable circular relocation field      |
//! | [`world`]    | `World` — boundary + motion + optional zone, assembled    |
//!
//! The only mutable world state outside the agent store is the disruptive
//! zone (position and active flag), and it is mutated exclusively by the
//! driver's input-handling step.

pub mod boundary;
pub mod motion;
pub mod world;
pub mod zone;

#[cfg(test)]
mod tests;

pub use boundary::Boundary;
pub use motion::MotionEngine;
pub use world::World;
pub use zone::DisruptiveZone;
