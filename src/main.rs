//! Bootsteroids entry point
//!
//! Runs a headless demo session: the autopilot flies the ship, frames are
//! tessellated into a vertex batch, and progress goes to the log. Window
//! creation and presentation are left to a host that implements `Canvas`.

use std::time::{SystemTime, UNIX_EPOCH};

use bootsteroids::Tuning;
use bootsteroids::app::App;
use bootsteroids::platform::{Autopilot, FrameClock};
use bootsteroids::renderer::VertexBatch;

/// Environment variable naming an optional JSON tuning override
const TUNING_ENV: &str = "BOOTSTEROIDS_TUNING";
/// Frame rate the demo is paced at
const TARGET_FPS: u32 = 60;
/// Two minutes of play at most
const DEMO_FRAMES: u64 = TARGET_FPS as u64 * 120;
/// Extra sessions the autopilot starts after losing
const DEMO_RESTARTS: u32 = 1;

fn load_tuning() -> Tuning {
    let Ok(path) = std::env::var(TUNING_ENV) else {
        return Tuning::default();
    };
    match Tuning::load(&path) {
        Ok(tuning) => tuning,
        Err(e) => {
            log::warn!("Ignoring {}: {}", path, e);
            Tuning::default()
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Bootsteroids (native, headless) starting...");

    let tuning = load_tuning();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Game initialized with seed: {}", seed);

    let mut app = App::new(seed, tuning, Autopilot::new(DEMO_RESTARTS), VertexBatch::new());
    let mut clock = FrameClock::new(TARGET_FPS);
    app.run(&mut clock, Some(DEMO_FRAMES));

    log::info!(
        "Finished: {} frames, {} sessions, best score {}, last frame {} triangles",
        app.frames(),
        app.sessions(),
        app.best_score(),
        app.canvas.triangle_count()
    );
}
