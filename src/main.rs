//! Bouncing Balls entry point
//!
//! Loads settings, seeds the simulation, and drives the update/draw
//! callbacks from the macroquad frame loop.

use std::time::{SystemTime, UNIX_EPOCH};

use macroquad::prelude::*;

use bouncing_balls::Settings;
use bouncing_balls::app::App;

fn window_conf() -> Conf {
    let settings = Settings::load();
    Conf {
        window_title: settings.window_title,
        window_width: settings.window_width as i32,
        window_height: settings.window_height as i32,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(seed_from_clock);
    log::info!("starting with seed {seed}");

    let mut app = App::setup(&settings, seed).await;

    loop {
        if !app.update() {
            break;
        }
        app.draw();
        next_frame().await;
    }

    log::info!("quit requested, shutting down");
}

/// Wall-clock seed for ordinary runs; `settings.seed` pins it for
/// reproducible ones
fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
