//! Fluent builder for constructing a [`Sim`].

use flock_agent::{AgentSpawner, AgentStore};
use flock_behavior::SteeringModel;
use flock_core::{FlockConfig, SimRng};
use flock_world::World;
use glam::Vec2;

use crate::{FramePacer, InputSource, RunState, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<M, I>`].
///
/// # Required inputs
///
/// - [`FlockConfig`] — boundary, population, radii, seed, …
/// - `M: SteeringModel` — the steering implementation
/// - `I: InputSource` — where per-frame input snapshots come from
///
/// # Optional inputs (have defaults)
///
/// | Method       | Default                                           |
/// |--------------|---------------------------------------------------|
/// | `.agents(s)` | Population spawned from the config's seed         |
///
/// # Example
///
/// ```rust,ignore
/// let config = FlockConfig::default();
/// let model = ClassicFlocking::from_config(&config)?;
/// let mut sim = SimBuilder::new(config, model, NoopInput).build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<M: SteeringModel, I: InputSource> {
    config: FlockConfig,
    model:  M,
    input:  I,
    agents: Option<AgentStore>,
}

impl<M: SteeringModel, I: InputSource> SimBuilder<M, I> {
    /// Create a builder with all required inputs.
    pub fn new(config: FlockConfig, model: M, input: I) -> Self {
        Self {
            config,
            model,
            input,
            agents: None,
        }
    }

    /// Supply a hand-built population instead of spawning one.
    ///
    /// Must have exactly `config.agent_count` agents.  Useful for tests that
    /// need exact starting positions.
    pub fn agents(mut self, store: AgentStore) -> Self {
        self.agents = Some(store);
        self
    }

    /// Validate inputs, spawn the population if none was supplied, and
    /// return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<M, I>> {
        self.config.validate()?;

        let mut rng = SimRng::new(self.config.seed);

        // Spawning consumes the head of the RNG stream; the zone-relocation
        // draws continue the same sequence.  A supplied store skips the spawn
        // draws, which is fine — determinism is per-construction-path.
        let agents = match self.agents {
            Some(store) => {
                if store.count != self.config.agent_count {
                    return Err(SimError::AgentCountMismatch {
                        expected: self.config.agent_count,
                        got:      store.count,
                        what:     "agent store",
                    });
                }
                store
            }
            None => AgentSpawner::new(&self.config).spawn(&mut rng)?,
        };

        let world = World::from_config(&self.config)?;

        Ok(Sim {
            clock:  self.config.make_clock(),
            pacer:  FramePacer::new(self.config.frame_interval()),
            deltas: vec![Vec2::ZERO; agents.count],
            config: self.config,
            agents,
            world,
            model:  self.model,
            input:  self.input,
            rng,
            state:  RunState::Running,
        })
    }
}
