//! Bouncing Balls - a minimal sprite demo with a deterministic core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball spawning, motion, boundary reflection)
//! - `app`: Lifecycle callbacks bridging the sim to the macroquad runtime
//! - `settings`: Optional JSON-configured runtime settings

pub mod app;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Demo configuration constants
pub mod consts {
    /// Number of balls spawned at startup
    pub const DEFAULT_BALL_COUNT: usize = 32;
    /// Sprite half-width, used for boundary collision checks.
    /// Matches the 64x64 `ball.png` sprite.
    pub const BALL_RADIUS: f32 = 32.0;

    /// Speed components are sampled from [SPEED_MIN, SPEED_MAX)
    pub const SPEED_MIN: i32 = -10;
    pub const SPEED_MAX: i32 = 10;

    /// Default logical window size
    pub const DEFAULT_WINDOW_WIDTH: u32 = 800;
    pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;
}
