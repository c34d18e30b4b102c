//! Frame driver: owns the world and runs update + render once per frame

use log::{info, trace};

use crate::host::{FrameScheduler, Host};
use crate::{render, step, Config, ConfigError, Events, State, Time};

/// Owns one game session.
///
/// The host either calls [`tick`](FrameDriver::tick) from its own frame
/// callback, or hands over control with [`run`](FrameDriver::run).
pub struct FrameDriver {
    config: Config,
    state: State,
    events: Events,
    time: Time,
}

impl FrameDriver {
    /// Start a session; rejects a config that can't keep paddles and
    /// ball inside the arena, before any frame runs
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let state = State::new(&config);
        info!(
            "New game: ball at ({}, {}), paddles at x={} and x={}",
            state.ball.pos.x, state.ball.pos.y, state.p1.paddle.pos.x, state.p2.paddle.pos.x
        );

        Ok(Self {
            config,
            state,
            events: Events::new(),
            time: Time::new(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Direct access to the world, e.g. to set up a position
    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    /// What happened during the most recent frame
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn time(&self) -> &Time {
        &self.time
    }

    /// Run one frame: read the clock and keys, update, then draw
    pub fn tick<H: Host + ?Sized>(&mut self, host: &mut H) {
        let dt = host.get_delta();
        self.time.advance(dt);

        step(&mut self.state, &self.config, &*host, dt, &mut self.events);
        render(&self.state, &self.config, host);

        trace!(
            "Frame {} (dt={:.4}): ball ({:.2}, {:.2}) vel ({:.2}, {:.2})",
            self.time.frame,
            dt,
            self.state.ball.pos.x,
            self.state.ball.pos.y,
            self.state.ball.vel.x,
            self.state.ball.vel.y
        );
    }

    /// Tick, then suspend until the next frame, for as long as the
    /// scheduler keeps resuming us
    pub fn run<H, S>(&mut self, host: &mut H, scheduler: &mut S)
    where
        H: Host + ?Sized,
        S: FrameScheduler + ?Sized,
    {
        loop {
            self.tick(host);
            if scheduler.wait_for_frame().is_break() {
                break;
            }
        }
        info!(
            "Host stopped driving after {} frames ({:.2}s)",
            self.time.frame, self.time.now
        );
    }
}
