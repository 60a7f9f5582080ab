//! Deterministic simulation module
//!
//! All ball logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (ball index order)
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;

pub use state::{Ball, Bounds, SimState};
pub use tick::{TickInput, bounce_ball, move_ball, tick};
