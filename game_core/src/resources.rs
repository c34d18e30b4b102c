use glam::Vec2;

use crate::components::{Ball, Paddle, Player, Side};
use crate::config::Config;

/// The whole game world: two players and one ball.
///
/// Created once per session and then only mutated, one frame at a time,
/// through a single `&mut State`.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub p1: Player, // Left
    pub p2: Player, // Right
    pub ball: Ball,
}

impl State {
    /// Opening layout: paddles at their spawn points, ball served to the right
    pub fn new(config: &Config) -> Self {
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
        ball.serve(config, Side::Right);

        Self {
            p1: Player::new(Paddle::new(config.paddle_spawn(Side::Left))),
            p2: Player::new(Paddle::new(config.paddle_spawn(Side::Right))),
            ball,
        }
    }

    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::Left => &self.p1,
            Side::Right => &self.p2,
        }
    }

    pub fn player_mut(&mut self, side: Side) -> &mut Player {
        match side {
            Side::Left => &mut self.p1,
            Side::Right => &mut self.p2,
        }
    }

    /// (p1, p2)
    pub fn scores(&self) -> (u32, u32) {
        (self.p1.score, self.p2.score)
    }
}

/// Frame time bookkeeping
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub dt: f32,    // Delta time for this frame
    pub now: f32,   // Total elapsed time
    pub frame: u64, // Frames run so far
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, dt: f32) {
        self.dt = dt;
        self.now += dt;
        self.frame += 1;
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub p1_scored: bool,
    pub p2_scored: bool,
    pub p1_paddle_hit: bool,
    pub p2_paddle_hit: bool,
    pub wall_bounce: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.p1_scored = false;
        self.p2_scored = false;
        self.p1_paddle_hit = false;
        self.p2_paddle_hit = false;
        self.wall_bounce = false;
    }

    pub fn scored(&self, side: Side) -> bool {
        match side {
            Side::Left => self.p1_scored,
            Side::Right => self.p2_scored,
        }
    }

    pub fn paddle_hit(&self, side: Side) -> bool {
        match side {
            Side::Left => self.p1_paddle_hit,
            Side::Right => self.p2_paddle_hit,
        }
    }

    pub(crate) fn mark_scored(&mut self, side: Side) {
        match side {
            Side::Left => self.p1_scored = true,
            Side::Right => self.p2_scored = true,
        }
    }

    pub(crate) fn mark_paddle_hit(&mut self, side: Side) {
        match side {
            Side::Left => self.p1_paddle_hit = true,
            Side::Right => self.p2_paddle_hit = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = State::new(&Config::new());
        assert_eq!(state.ball.pos, Vec2::new(10.0, 10.0));
        assert_eq!(state.ball.vel, Vec2::new(5.0, 0.0));
        assert_eq!(state.p1.paddle.pos, Vec2::new(1.0, 10.0));
        assert_eq!(state.p2.paddle.pos, Vec2::new(19.0, 10.0));
        assert_eq!(state.scores(), (0, 0));
    }

    #[test]
    fn test_player_lookup_by_side() {
        let mut state = State::new(&Config::new());
        state.player_mut(Side::Right).add_point();
        assert_eq!(state.player(Side::Right).score, 1);
        assert_eq!(state.player(Side::Left).score, 0);
    }

    #[test]
    fn test_time_advance() {
        let mut time = Time::new();
        time.advance(0.25);
        time.advance(0.5);
        assert_eq!(time.dt, 0.5);
        assert_eq!(time.now, 0.75);
        assert_eq!(time.frame, 2);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.mark_scored(Side::Left);
        events.mark_scored(Side::Right);
        events.mark_paddle_hit(Side::Left);
        events.mark_paddle_hit(Side::Right);
        events.wall_bounce = true;

        events.clear();

        assert_eq!(events, Events::default());
    }

    #[test]
    fn test_events_by_side() {
        let mut events = Events::new();
        events.mark_paddle_hit(Side::Right);
        assert!(events.paddle_hit(Side::Right));
        assert!(!events.paddle_hit(Side::Left));
        assert!(!events.scored(Side::Right));
    }
}
