//! Simulation module
//!
//! The ball physics lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no wall-clock time
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Reflection, reflect_axis};
pub use state::{Ball, Surface};
pub use tick::{TickReport, tick};
