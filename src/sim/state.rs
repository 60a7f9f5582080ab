//! Simulation state and ball spawning

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{SPEED_MAX, SPEED_MIN};

/// Rectangular simulation bounds in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    /// Bounds anchored at the origin, covering `width` x `height`
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            right: width,
            bottom: height,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// A ball entity: center position plus per-tick velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// Spawn a ball fully inside `bounds` with a random non-zero velocity.
    ///
    /// The center is sampled on integer coordinates with x in
    /// [left + radius, right - radius) and y likewise, so the whole sprite
    /// fits on screen. Speed components are integers in [-10, 10); a
    /// sampled 0 is remapped to 1 so every ball moves. Sampling order is
    /// x, y, x_speed, y_speed; a fixed seed reproduces the same layout.
    ///
    /// Assumes the bounds are wider and taller than the ball diameter.
    pub fn spawn(rng: &mut Pcg32, bounds: &Bounds, radius: f32) -> Self {
        let r = radius as i32;
        let x = rng.random_range(bounds.left as i32 + r..bounds.right as i32 - r);
        let y = rng.random_range(bounds.top as i32 + r..bounds.bottom as i32 - r);
        let x_speed = non_zero(rng.random_range(SPEED_MIN..SPEED_MAX));
        let y_speed = non_zero(rng.random_range(SPEED_MIN..SPEED_MAX));

        Self {
            pos: Vec2::new(x as f32, y as f32),
            vel: Vec2::new(x_speed as f32, y_speed as f32),
        }
    }
}

/// Remap a zero speed component to 1 so motion never stalls
#[inline]
fn non_zero(speed: i32) -> i32 {
    if speed == 0 { 1 } else { speed }
}

/// Complete simulation state: the ball collection plus its spawn parameters
#[derive(Debug, Clone)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Reflection bounds, from the logical display size at setup
    pub bounds: Bounds,
    /// Shared radius of every ball
    pub radius: f32,
    /// Balls in spawn order; ticked and drawn in index order
    pub balls: Vec<Ball>,
}

impl SimState {
    /// Spawn `count` balls inside `bounds` from the given seed
    pub fn new(seed: u64, bounds: Bounds, radius: f32, count: usize) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let balls = (0..count)
            .map(|_| Ball::spawn(&mut rng, &bounds, radius))
            .collect();

        Self {
            seed,
            bounds,
            radius,
            balls,
        }
    }
}
