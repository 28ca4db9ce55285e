//! The `Sim` struct and its frame loop.

use flock_agent::AgentStore;
use flock_behavior::{FrameContext, SteeringModel};
use flock_core::{FlockConfig, FrameClock, SimRng, Tick};
use flock_world::World;
use glam::Vec2;

use crate::{FramePacer, InputSource, SimObserver};

// ── RunState ──────────────────────────────────────────────────────────────────

/// Driver lifecycle.  `Stopped` is terminal: a stopped sim never processes
/// another frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<M, I>` holds all simulation state and drives the frame loop:
///
/// 1. **Input**: poll the [`InputSource`]; a quit event stops the loop,
///    toggle/axis state steers the disruptive zone.
/// 2. **Disrupt**: scatter agents caught in the active zone (ascending agent
///    order, sequential RNG — deterministic).
/// 3. **Force phase** (optionally parallel with the `parallel` feature):
///    call [`SteeringModel::steer`] for every agent against the read-only
///    [`FrameContext`]; deltas land in a scratch buffer.
/// 4. **Apply phase** (sequential, ascending agent order): accumulate deltas
///    into acceleration, then integrate and wrap.
/// 5. **Render**: hand the settled store to the observer.
/// 6. **Pace**: block out the rest of the frame interval.
///
/// Phases 3 and 4 are never interleaved per-agent: every steering decision
/// for frame `k` observes every other agent exactly as it stood at the end
/// of frame `k-1`, so results are independent of iteration order.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<M: SteeringModel, I: InputSource> {
    /// Global configuration (boundary, radii, seed, …).
    pub config: FlockConfig,

    /// Frame clock — tracks the current tick.
    pub clock: FrameClock,

    /// All agent state (SoA arrays).  Steering models access this read-only
    /// through `FrameContext`.
    pub agents: AgentStore,

    /// Boundary, motion engine, and the disruptive zone.
    pub world: World,

    /// The steering model.  Called once per agent per frame.
    pub model: M,

    /// The input source, polled once per frame.
    pub input: I,

    /// Sequential RNG for zone relocation (continues the stream that spawned
    /// the population, all keyed off `config.seed`).
    pub rng: SimRng,

    pub(crate) state: RunState,
    pub(crate) pacer: FramePacer,
    /// Scratch buffer for the force phase, reused across frames.
    pub(crate) deltas: Vec<Vec2>,
}

impl<M: SteeringModel, I: InputSource> Sim<M, I> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Run from the current frame until a quit input arrives or
    /// `config.total_frames` is reached (whichever comes first).
    ///
    /// Calls observer hooks at every frame boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        while self.state == RunState::Running {
            let now = self.clock.current_tick;
            if let Some(total) = self.config.total_frames {
                if now.0 >= total {
                    self.state = RunState::Stopped;
                    break;
                }
            }
            if !self.process_frame(now, observer) {
                break;
            }
            self.clock.advance();
        }
        observer.on_sim_end(self.clock.current_tick);
    }

    /// Run at most `n` frames from the current position (ignores
    /// `total_frames`).  Useful for tests and incremental stepping.
    pub fn run_frames<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            if self.state != RunState::Running {
                break;
            }
            let now = self.clock.current_tick;
            if !self.process_frame(now, observer) {
                break;
            }
            self.clock.advance();
        }
    }

    // ── Core frame processing ─────────────────────────────────────────────

    /// Returns `false` when a quit input stopped the loop mid-frame.
    fn process_frame<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> bool {
        observer.on_frame_start(now);

        // ── Phase 1: input ────────────────────────────────────────────────
        let input = self.input.poll();
        if input.quit {
            log::debug!("{now}: quit requested");
            self.state = RunState::Stopped;
            return false;
        }
        self.world.steer_zone(input.toggle_zone, input.axis_x, input.axis_y);

        // ── Phase 2: disruptive zone ──────────────────────────────────────
        //
        // Runs before the force phase so scattered agents participate in
        // this frame's flocking from their new location.
        let relocated = self.world.disrupt(&mut self.agents, &mut self.rng);
        if relocated > 0 {
            log::debug!("{now}: zone scattered {relocated} agents");
        }

        // ── Phase 3: force phase (produce) ────────────────────────────────
        self.compute_deltas(now);

        // ── Phase 4: apply phase (consume) ────────────────────────────────
        //
        // Sequential, ascending agent order.  Only now does any kinematic
        // state change, so phase 3 saw one consistent snapshot.
        for i in 0..self.agents.count {
            self.agents.acceleration[i] += self.deltas[i];
        }
        self.world.step_motion(&mut self.agents);

        // ── Phase 5: render hook ──────────────────────────────────────────
        observer.on_render(now, &self.agents);
        observer.on_frame_end(now, relocated);

        // ── Phase 6: pacing ───────────────────────────────────────────────
        self.pacer.wait();
        true
    }

    /// Compute one steering delta per agent into the scratch buffer.
    ///
    /// With the `parallel` Cargo feature, the loop runs on Rayon's thread
    /// pool; the context is read-only, so the result is identical either way.
    fn compute_deltas(&mut self, now: Tick) {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let agents = &self.agents;
        let model  = &self.model;
        let deltas = &mut self.deltas;

        let ctx = FrameContext::new(now, agents);

        #[cfg(not(feature = "parallel"))]
        {
            deltas.clear();
            deltas.extend(agents.agent_ids().map(|agent| model.steer(agent, &ctx)));
        }

        #[cfg(feature = "parallel")]
        {
            use flock_core::AgentId;
            use rayon::prelude::*;

            *deltas = (0..agents.count as u32)
                .into_par_iter()
                .map(|i| model.steer(AgentId(i), &ctx))
                .collect();
        }
    }
}
