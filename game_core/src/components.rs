use glam::Vec2;

use crate::config::Config;
use crate::geometry::Aabb;

/// Which end of the arena a player defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,  // p1
    Right, // p2
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "p1",
            Side::Right => "p2",
        }
    }
}

/// Paddle - a fixed-size rectangle owned by one player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub pos: Vec2, // Top-left corner
}

impl Paddle {
    pub fn new(pos: Vec2) -> Self {
        Self { pos }
    }

    pub fn bounds(&self, config: &Config) -> Aabb {
        Aabb::new(
            self.pos,
            Vec2::new(config.paddle_width, config.paddle_height),
        )
    }
}

/// The pong ball (a square)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2, // Top-left corner
    pub vel: Vec2, // Units per second
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    pub fn bounds(&self, config: &Config) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(config.ball_size))
    }

    /// Put the ball back at the serve point heading toward `toward`
    /// at the initial speed, with no vertical motion
    pub fn serve(&mut self, config: &Config, toward: Side) {
        self.pos = config.serve_position();
        let vx = match toward {
            Side::Left => -config.ball_speed_initial,
            Side::Right => config.ball_speed_initial,
        };
        self.vel = Vec2::new(vx, 0.0);
    }
}

/// A player: one paddle and a score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub paddle: Paddle,
    pub score: u32,
}

impl Player {
    pub fn new(paddle: Paddle) -> Self {
        Self { paddle, score: 0 }
    }

    pub fn add_point(&mut self) {
        self.score += 1;
    }
}
