//! gallery — headless demo for the rust_flock engine.
//!
//! Runs a bounded flocking session with a scripted disruptive-zone
//! performance (sweep right, drift up, blink off and on) and captures every
//! frame's draw records to CSV.  Point a plotting tool at
//! `output/gallery/draw_commands.csv` to replay the piece.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use flock_agent::AgentStore;
use flock_behavior::ClassicFlocking;
use flock_core::{FlockConfig, Tick, ZoneConfig};
use flock_render::{CsvRecorder, Palette, RenderObserver};
use flock_sim::{InputState, ScriptedInput, SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const WIDTH:        f32   = 1280.0;
const HEIGHT:       f32   = 720.0;
const AGENT_COUNT:  usize = 120;
const NUM_GROUPS:   u16   = 5;
const GRADATIONS:   u16   = 8;
const SEED:         u64   = 42;
const TOTAL_FRAMES: u64   = 300;

// ── Zone performance script ───────────────────────────────────────────────────

/// One input snapshot per frame: sweep the zone right across the field,
/// drift it upward, then blink it off and back on.
fn zone_script() -> ScriptedInput {
    let frames = (0..TOTAL_FRAMES).map(|frame| {
        let mut input = InputState::default();
        match frame {
            60..=149  => input.axis_x = 1.0,
            150..=179 => input.axis_y = -1.0,
            180 | 240 => input.toggle_zone = true,
            _         => {}
        }
        input
    });
    ScriptedInput::new(frames)
}

// ── Observer wrapper to count rows ────────────────────────────────────────────

struct CountingObserver<O: SimObserver> {
    inner:        O,
    command_rows: usize,
    relocations:  usize,
}

impl<O: SimObserver> CountingObserver<O> {
    fn new(inner: O) -> Self {
        Self { inner, command_rows: 0, relocations: 0 }
    }
}

impl<O: SimObserver> SimObserver for CountingObserver<O> {
    fn on_frame_start(&mut self, tick: Tick) {
        self.inner.on_frame_start(tick);
    }

    fn on_render(&mut self, tick: Tick, agents: &AgentStore) {
        self.command_rows += agents.count;
        self.inner.on_render(tick, agents);
    }

    fn on_frame_end(&mut self, tick: Tick, relocated: usize) {
        self.relocations += relocated;
        self.inner.on_frame_end(tick, relocated);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== gallery — rust_flock ===");
    println!("Agents: {AGENT_COUNT}  |  Frames: {TOTAL_FRAMES}  |  Seed: {SEED}");
    println!();

    // 1. Configuration.  Unpaced: this is a capture run, not a live show.
    let config = FlockConfig {
        width:            WIDTH,
        height:           HEIGHT,
        agent_count:      AGENT_COUNT,
        num_groups:       NUM_GROUPS,
        gradation_levels: GRADATIONS,
        zone: Some(ZoneConfig {
            radius: 60.0,
            speed:  8.0,
            active: true,
            position: None, // boundary center
        }),
        target_fps:   None,
        total_frames: Some(TOTAL_FRAMES),
        seed:         SEED,
        ..Default::default()
    };

    // 2. Steering model and palette.
    let model = ClassicFlocking::from_config(&config)?;
    let palette = Palette::generate(config.num_groups, config.gradation_levels)?;
    println!("Palette: {} colors ({NUM_GROUPS} groups x {GRADATIONS} gradations)", palette.len());

    // 3. Capture sink.
    std::fs::create_dir_all("output/gallery")?;
    let recorder = CsvRecorder::new(Path::new("output/gallery"))?;
    let render_obs = RenderObserver::new(recorder, palette);
    let mut obs = CountingObserver::new(render_obs);

    // 4. Build and run.
    let mut sim = SimBuilder::new(config, model, zone_script()).build()?;
    let t0 = Instant::now();
    sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("capture error: {e}");
    }

    // 5. Summary.
    println!("Run complete in {:.3} s ({})", elapsed.as_secs_f64(), sim.clock);
    println!("  draw_commands.csv   : {} rows", obs.command_rows);
    println!("  frame_summaries.csv : {} rows", TOTAL_FRAMES);
    println!("  zone relocations    : {}", obs.relocations);
    println!();

    // 6. Final state of the first few agents.
    println!("{:<8} {:<8} {:<22} {:<10}", "Agent", "Group", "Position", "Speed");
    println!("{}", "-".repeat(50));
    for agent in sim.agents.agent_ids().take(8) {
        let i = agent.index();
        println!(
            "{:<8} {:<8} {:<22} {:<10.2}",
            i,
            sim.agents.group[i].0,
            format!("({:.1}, {:.1})", sim.agents.position[i].x, sim.agents.position[i].y),
            sim.agents.speed(agent),
        );
    }

    Ok(())
}
