//! Lifecycle callbacks bridging the simulation to the macroquad runtime
//!
//! The runtime owns the window, input polling, and frame pacing; this layer
//! owns everything the callbacks touch, so no global state is needed. The
//! shared sprite is the only external resource and is released exactly once
//! when the `App` is dropped.

use macroquad::prelude::*;

use crate::settings::Settings;
use crate::sim::{Bounds, SimState, TickInput, tick};

/// One running demo instance: the simulation plus the shared ball sprite
pub struct App {
    sim: SimState,
    sprite: Texture2D,
}

impl App {
    /// Setup callback: load the shared sprite and spawn the balls.
    ///
    /// The sprite is loaded from the working directory; failure to load it
    /// is fatal. Ball spawn bounds come from the logical display size the
    /// runtime reports, not from the requested window size.
    pub async fn setup(settings: &Settings, seed: u64) -> Self {
        let sprite = match load_texture(&settings.sprite_path).await {
            Ok(sprite) => sprite,
            Err(err) => {
                log::error!("unable to load {}: {err:?}", settings.sprite_path);
                std::process::exit(1);
            }
        };

        let bounds = Bounds::new(screen_width(), screen_height());
        log::info!(
            "spawning {} balls in {}x{} (seed {seed})",
            settings.ball_count,
            bounds.width(),
            bounds.height(),
        );
        let sim = SimState::new(seed, bounds, settings.ball_radius, settings.ball_count);

        Self { sim, sprite }
    }

    /// Update callback: advance every ball, then honor the quit key.
    /// Returns `false` when the loop should stop.
    pub fn update(&mut self) -> bool {
        let input = TickInput {
            quit: is_key_down(KeyCode::Escape),
        };
        tick(&mut self.sim, &input)
    }

    /// Render callback: one sprite draw per ball, with the center position
    /// converted to a top-left draw origin
    pub fn draw(&self) {
        clear_background(BLACK);
        for ball in &self.sim.balls {
            draw_texture(
                &self.sprite,
                ball.pos.x - self.sim.radius,
                ball.pos.y - self.sim.radius,
                WHITE,
            );
        }
    }
}
