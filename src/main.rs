//! Neon Flap headless driver
//!
//! Runs one autopilot game against the simulation core and reports the
//! final score. Pass a JSON tuning file as the first argument to override
//! the default 800x600 desktop tuning.

use std::time::{SystemTime, UNIX_EPOCH};

use neon_flap::audio::{self, AudioSink, LogSink};
use neon_flap::sim::{Autopilot, Engine, Frame};
use neon_flap::{InputMode, Settings, Tuning};

/// Stop after this many frames even if the autopilot never crashes
const MAX_FRAMES: u64 = 60 * 60 * 5;

fn load_tuning() -> Result<Tuning, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)?;
            log::info!("Loaded tuning from {}", path);
            Ok(Tuning::from_json(&json)?)
        }
        None => Ok(Tuning::for_screen(800.0, 600.0, InputMode::Desktop)),
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let tuning = load_tuning()?;
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Seed {}", seed);

    let mode = InputMode::Desktop;
    log::info!("Input mode {}", mode.as_str());
    let pilot = Autopilot::new(mode.boost_impulse(), tuning.screen_height);
    let mut engine = Engine::with_seed(tuning, seed)?;
    let settings = Settings::default();
    let mut sink = LogSink::default();
    audio::start_run(&settings, &mut sink);

    let mut last = engine.snapshot();
    for _ in 0..MAX_FRAMES {
        if pilot.should_boost(&last) {
            engine.boost(pilot.impulse)?;
        }
        let frame = engine.advance()?;
        audio::play_frame(&frame, &settings, &mut sink);
        match frame {
            Frame::Running(render) => {
                if render.scored_this_frame() {
                    log::debug!("Score {} at tick {}", render.score, render.tick);
                }
                last = render;
            }
            Frame::GameOver { final_score, .. } => {
                println!(
                    "Game over after {} ticks. Final score: {}",
                    engine.state().tick,
                    final_score
                );
                println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
                return Ok(());
            }
        }
    }

    sink.stop_music();
    println!(
        "Autopilot still flying after {} ticks. Score: {}, lives: {}",
        last.tick, last.score, last.lives
    );
    println!("{}", serde_json::to_string_pretty(&last)?);
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Neon Flap (headless) starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
