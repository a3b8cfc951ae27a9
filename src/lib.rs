//! Bouncing Ball - an animated ball in a rectangular pane
//!
//! Core modules:
//! - `sim`: Pure simulation (ball state, boundary reflection, tick)
//! - `timeline`: Fixed-interval animation clock with play/pause/rate
//! - `widget`: The `BouncingBall` widget tying model, clock and view together
//! - `input`: Host key/pointer events to widget commands
//! - `settings`: Widget configuration
//! - `renderer`: WebGPU rendering of the pane

pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod timeline;
pub mod widget;

pub use settings::Settings;
pub use timeline::{AnimationStatus, Timeline};
pub use widget::{BouncingBall, CircleView};

/// Widget configuration constants
pub mod consts {
    /// Ball radius in pane pixels
    pub const BALL_RADIUS: f32 = 20.0;
    /// Velocity per tick on each axis at construction
    pub const BALL_START_VELOCITY: (f32, f32) = (1.0, 1.0);

    /// Wall-clock interval between ticks at rate 1.0 (seconds)
    pub const TICK_INTERVAL: f32 = 0.050;
    /// Maximum ticks run per `advance` call to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Nominal playback rate
    pub const DEFAULT_RATE: f32 = 1.0;
    /// Rate change per increase/decrease
    pub const RATE_STEP: f32 = 0.1;
}
