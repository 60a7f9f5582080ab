//! Per-tick motion and boundary reflection

use super::state::{Ball, Bounds, SimState};

/// Input sampled once per tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Quit key currently held
    pub quit: bool,
}

/// Advance every ball one motion step, then reflect off the bounds, in
/// index order. Returns `false` when the quit input asks the driving loop
/// to stop; balls still advance on that tick.
pub fn tick(state: &mut SimState, input: &TickInput) -> bool {
    let bounds = state.bounds;
    let radius = state.radius;

    for ball in &mut state.balls {
        move_ball(ball);
        bounce_ball(ball, &bounds, radius);
    }

    !input.quit
}

/// Explicit Euler step: one velocity worth of motion per tick, no
/// delta-time scaling
pub fn move_ball(ball: &mut Ball) {
    ball.pos += ball.vel;
}

/// Axis-aligned boundary reflection.
///
/// Each axis is tested independently, so a corner hit reflects on both in
/// the same tick. When the ball's edge (center +/- radius) has crossed a
/// boundary, the last motion step on that axis is undone and the velocity
/// component negated. The ball is not clamped exactly to the wall; a fast
/// ball can end the tick slightly outside.
pub fn bounce_ball(ball: &mut Ball, bounds: &Bounds, radius: f32) {
    if ball.pos.x - radius < bounds.left || ball.pos.x + radius > bounds.right {
        ball.pos.x -= ball.vel.x;
        ball.vel.x = -ball.vel.x;
    }

    if ball.pos.y - radius < bounds.top || ball.pos.y + radius > bounds.bottom {
        ball.pos.y -= ball.vel.y;
        ball.vel.y = -ball.vel.y;
    }
}
