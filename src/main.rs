//! Block Dodge entry point
//!
//! Headless runner: builds the session, lets the autopilot play it at the
//! fixed tick rate, and hands each frame's vertices to a (null) host.
//!
//! Usage: `block-dodge [settings.json]`

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Context;

use block_dodge::render::{Frame, Viewport, frame_vertices};
use block_dodge::sim::{LevelLayout, Session, SessionPhase, TickStatus, layouts, tick};
use block_dodge::{Autopilot, Settings, Tuning};

fn load_tuning(settings: &Settings) -> anyhow::Result<Tuning> {
    let Some(path) = &settings.tuning_path else {
        return Ok(Tuning::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading tuning from {}", path.display()))?;
    Tuning::from_json(&json).with_context(|| format!("parsing tuning in {}", path.display()))
}

fn load_layouts(settings: &Settings) -> anyhow::Result<Vec<LevelLayout>> {
    let Some(path) = &settings.layouts_path else {
        return Ok(layouts::campaign());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading layouts from {}", path.display()))?;
    LevelLayout::list_from_json(&json).with_context(|| format!("parsing layouts in {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Block Dodge (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };

    let tuning = load_tuning(&settings)?;
    let mut session = Session::new(load_layouts(&settings)?, tuning).context("building session")?;
    let mut pilot = Autopilot::new(settings.seed, settings.wander);
    let viewport = Viewport::default();
    let tick_duration = Duration::from_secs_f64(tuning.tick_seconds());

    log::info!("Autopilot seed: {}", settings.seed);

    let started = Instant::now();
    let mut last_phase = session.phase();
    let mut vertex_count = 0usize;

    let status = loop {
        let frame_start = Instant::now();

        let mut input = pilot.next_input(&session);
        if settings.max_ticks.is_some_and(|max| session.time_ticks() >= max) {
            input.quit = true;
        }

        let status = tick(&mut session, &input);

        let frame = Frame::build(&session);
        vertex_count = frame_vertices(&frame, &viewport).len();

        if session.phase() != last_phase {
            if let SessionPhase::LevelComplete { level } = session.phase() {
                log::info!(
                    "Level {} cleared at tick {} ({} vertices on screen)",
                    level + 1,
                    session.time_ticks(),
                    vertex_count
                );
            }
            last_phase = session.phase();
        }

        if settings.report_every > 0 && session.time_ticks() % settings.report_every as u64 == 0 {
            log::info!(
                "tick {}: {:?}, deaths={}",
                session.time_ticks(),
                session.phase(),
                session.deaths()
            );
        }

        if status != TickStatus::Running {
            break status;
        }

        if settings.realtime {
            if let Some(rest) = tick_duration.checked_sub(frame_start.elapsed()) {
                std::thread::sleep(rest);
            }
        }
    };

    println!("\nBlock Dodge run summary");
    println!("  outcome:  {:?}", status);
    println!("  ticks:    {}", session.time_ticks());
    println!("  deaths:   {}", session.deaths());
    println!(
        "  cleared:  {}/{} levels",
        session.levels().iter().filter(|l| l.reached_goal()).count(),
        session.levels().len()
    );
    println!("  vertices: {} in last frame", vertex_count);
    println!("  wall time: {:.2?}", started.elapsed());

    Ok(())
}
