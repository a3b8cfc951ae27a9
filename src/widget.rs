//! The bouncing ball widget
//!
//! Owns the ball model, the animation timeline and a derived circle view. The
//! host drives it by calling [`BouncingBall::advance`] once per frame and
//! reporting pane size changes through [`BouncingBall::resize`].

use glam::Vec2;

use crate::input::Command;
use crate::settings::Settings;
use crate::sim::{Ball, Surface, tick};
use crate::timeline::{AnimationStatus, Timeline};

/// What the renderer draws: refreshed after every tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleView {
    pub center: Vec2,
    pub radius: f32,
    pub color: [f32; 4],
}

/// A ball bouncing inside a rectangular pane
#[derive(Debug)]
pub struct BouncingBall {
    ball: Ball,
    surface: Surface,
    timeline: Timeline,
    rate_step: f32,
    view: CircleView,
}

impl BouncingBall {
    /// Create the widget; the animation starts running immediately
    pub fn new(settings: &Settings, surface: Surface) -> Self {
        let settings = settings.clone().sanitized();
        let ball = Ball::with_velocity(settings.radius, Vec2::from(settings.initial_velocity));

        let mut timeline = Timeline::new(settings.tick_interval());
        timeline.set_rate(settings.initial_rate);

        let view = CircleView {
            center: ball.pos,
            radius: ball.radius(),
            color: settings.ball_color,
        };

        log::info!(
            "ball widget created: radius {}, pane {}x{}",
            ball.radius(),
            surface.width,
            surface.height
        );

        Self {
            ball,
            surface,
            timeline,
            rate_step: settings.rate_step,
            view,
        }
    }

    pub fn play(&mut self) {
        self.timeline.play();
    }

    pub fn pause(&mut self) {
        self.timeline.pause();
    }

    pub fn toggle(&mut self) {
        if self.is_running() {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn increase_speed(&mut self) {
        self.timeline.increase_rate(self.rate_step);
    }

    /// Lower the rate by one step, never below 0
    pub fn decrease_speed(&mut self) {
        self.timeline.decrease_rate(self.rate_step);
    }

    /// Current playback multiplier
    pub fn rate(&self) -> f32 {
        self.timeline.rate()
    }

    /// Assign the rate directly (slider binding); negative values clamp to 0
    pub fn set_rate(&mut self, rate: f32) {
        self.timeline.set_rate(rate);
    }

    pub fn on_rate_changed(&mut self, observer: impl FnMut(f32) + 'static) {
        self.timeline.on_rate_changed(observer);
    }

    pub fn status(&self) -> AnimationStatus {
        self.timeline.status()
    }

    pub fn is_running(&self) -> bool {
        self.timeline.is_running()
    }

    /// Pane size changed; takes effect on the next tick
    pub fn resize(&mut self, width: f32, height: f32) {
        self.surface = Surface::new(width, height);
    }

    /// Feed `elapsed` wall-clock seconds and run the ticks that are due
    ///
    /// Returns the number of ticks run.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        let ticks = self.timeline.advance(elapsed);
        for _ in 0..ticks {
            self.step();
        }
        ticks
    }

    /// Run one tick regardless of playback status
    pub fn step(&mut self) {
        tick(&mut self.ball, self.surface);
        self.view.center = self.ball.pos;
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Play => self.play(),
            Command::Pause => self.pause(),
            Command::Toggle => self.toggle(),
            Command::IncreaseSpeed => self.increase_speed(),
            Command::DecreaseSpeed => self.decrease_speed(),
            Command::Step => self.step(),
        }
    }

    pub fn circle(&self) -> CircleView {
        self.view
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }
}

impl Default for BouncingBall {
    fn default() -> Self {
        Self::new(&Settings::default(), Surface::ZERO)
    }
}
