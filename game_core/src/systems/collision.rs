use log::{debug, warn};

use crate::components::{Ball, Paddle, Side};
use crate::geometry::{abs, sign};
use crate::{Config, Events, State};

/// Reflect the ball off the top and bottom walls.
///
/// Only the vertical velocity changes; the ball is not pushed back inside,
/// so it may sit slightly out of bounds for a frame.
pub fn bounce_off_walls(ball: &mut Ball, config: &Config, events: &mut Events) {
    if ball.pos.y < 0.0 {
        ball.vel.y = abs(ball.vel.y);
        events.wall_bounce = true;
        debug!("Ball bounced off top wall, vy now {:.2}", ball.vel.y);
    }
    if ball.pos.y > config.bottom_wall_y() {
        ball.vel.y = -abs(ball.vel.y);
        events.wall_bounce = true;
        debug!("Ball bounced off bottom wall, vy now {:.2}", ball.vel.y);
    }
}

/// Resolve one paddle against the ball; returns whether they overlapped.
///
/// On overlap the ball is sent away from the paddle's left edge with
/// `|vx|` raised by `ball_speed_increase`, and `vy` gains
/// `ball_deflection` per unit the ball's center sits off the paddle's
/// center. Position is left untouched and the deflection is unbounded.
pub fn collide_paddle(paddle: &Paddle, ball: &mut Ball, config: &Config) -> bool {
    let paddle_box = paddle.bounds(config);
    let ball_box = ball.bounds(config);

    if !ball_box.overlaps(&paddle_box) {
        return false;
    }

    let dir = sign(ball.pos.x - paddle.pos.x);
    ball.vel.x = dir * (abs(ball.vel.x) + config.ball_speed_increase);
    ball.vel.y += (ball_box.center().y - paddle_box.center().y) * config.ball_deflection;

    true
}

/// Check the ball against p1's paddle, then p2's, every frame
pub fn check_paddle_collisions(state: &mut State, config: &Config, events: &mut Events) {
    for side in Side::BOTH {
        let paddle = state.player(side).paddle;
        if collide_paddle(&paddle, &mut state.ball, config) {
            events.mark_paddle_hit(side);
            debug!(
                "Ball hit {} paddle, velocity now ({:.2}, {:.2})",
                side.label(),
                state.ball.vel.x,
                state.ball.vel.y
            );
        }
    }

    if events.p1_paddle_hit && events.p2_paddle_hit {
        warn!("Ball overlapped both paddles in one frame; both bounces applied");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup() -> (State, Config, Events) {
        let config = Config::new();
        let state = State::new(&config);
        (state, config, Events::new())
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (_, config, mut events) = setup();
        let mut ball = Ball::new(Vec2::new(10.0, -0.1), Vec2::new(5.0, -4.0));

        bounce_off_walls(&mut ball, &config, &mut events);

        assert_eq!(ball.vel, Vec2::new(5.0, 4.0), "vy forced positive");
        assert_eq!(ball.pos, Vec2::new(10.0, -0.1), "no repositioning");
        assert!(events.wall_bounce);
    }

    #[test]
    fn test_top_wall_keeps_downward_velocity() {
        let (_, config, mut events) = setup();
        let mut ball = Ball::new(Vec2::new(10.0, -0.1), Vec2::new(5.0, 3.0));

        bounce_off_walls(&mut ball, &config, &mut events);

        assert_eq!(ball.vel.y, 3.0, "already heading back in");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (_, config, mut events) = setup();
        // Past the bottom margin but not past the arena edge
        let mut ball = Ball::new(Vec2::new(10.0, 19.9), Vec2::new(-5.0, 2.5));

        bounce_off_walls(&mut ball, &config, &mut events);

        assert_eq!(ball.vel, Vec2::new(-5.0, -2.5));
        assert_eq!(ball.pos.y, 19.9);
        assert!(events.wall_bounce);
    }

    #[test]
    fn test_no_wall_bounce_inside_arena() {
        let (_, config, mut events) = setup();
        let mut ball = Ball::new(Vec2::new(10.0, 19.7), Vec2::new(5.0, 2.0));

        bounce_off_walls(&mut ball, &config, &mut events);

        assert_eq!(ball.vel.y, 2.0);
        assert!(!events.wall_bounce);
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let (state, config, _) = setup();
        let paddle = state.p1.paddle;
        let mut ball = Ball::new(Vec2::new(1.35, 11.3), Vec2::new(-5.0, 0.0));

        assert!(collide_paddle(&paddle, &mut ball, &config));

        assert_eq!(ball.vel.x, 5.5, "reflected right with +0.5");
        assert!(ball.vel.y.abs() < 1e-4, "centers aligned, no deflection");
        assert_eq!(ball.pos, Vec2::new(1.35, 11.3), "no depenetration");
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let (state, config, _) = setup();
        let paddle = state.p2.paddle;
        let mut ball = Ball::new(Vec2::new(18.7, 11.3), Vec2::new(6.0, 0.0));

        assert!(collide_paddle(&paddle, &mut ball, &config));

        assert_eq!(ball.vel.x, -6.5, "reflected left with +0.5");
    }

    #[test]
    fn test_ball_past_paddle_edge_is_sent_left() {
        let (state, config, _) = setup();
        let paddle = state.p1.paddle;
        // Overlapping, but the ball's left edge is left of the paddle's
        let mut ball = Ball::new(Vec2::new(0.8, 11.3), Vec2::new(-5.0, 0.0));

        assert!(collide_paddle(&paddle, &mut ball, &config));

        assert_eq!(ball.vel.x, -5.5);
    }

    #[test]
    fn test_ball_moving_away_still_bounces() {
        let (state, config, _) = setup();
        let paddle = state.p1.paddle;
        let mut ball = Ball::new(Vec2::new(1.35, 11.3), Vec2::new(5.5, 0.0));

        assert!(collide_paddle(&paddle, &mut ball, &config));

        assert_eq!(ball.vel.x, 6.0, "speed still increases");
    }

    #[test]
    fn test_deflection_follows_hit_position() {
        let (state, config, _) = setup();
        let paddle = state.p1.paddle;

        // Ball center at 10.2, paddle center at 11.5
        let mut top = Ball::new(Vec2::new(1.3, 10.0), Vec2::new(-5.0, 1.0));
        assert!(collide_paddle(&paddle, &mut top, &config));
        assert!((top.vel.y - (1.0 + (10.2 - 11.5) * 3.0)).abs() < 1e-4);
        assert!(top.vel.y < 0.0, "top hit deflects upward");

        // Ball center at 12.8
        let mut bottom = Ball::new(Vec2::new(1.3, 12.6), Vec2::new(-5.0, 0.0));
        assert!(collide_paddle(&paddle, &mut bottom, &config));
        assert!((bottom.vel.y - (12.8 - 11.5) * 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_deflection_is_unbounded() {
        let (state, config, _) = setup();
        let paddle = state.p1.paddle;
        let mut ball = Ball::new(Vec2::new(1.3, 12.6), Vec2::new(-5.0, 100.0));

        assert!(collide_paddle(&paddle, &mut ball, &config));

        assert!(ball.vel.y > 100.0, "no cap on vy");
    }

    #[test]
    fn test_no_collision_when_apart() {
        let (state, config, _) = setup();
        let paddle = state.p1.paddle;
        let mut ball = Ball::new(Vec2::new(10.0, 10.0), Vec2::new(-5.0, 1.0));

        assert!(!collide_paddle(&paddle, &mut ball, &config));
        assert_eq!(ball.vel, Vec2::new(-5.0, 1.0));
    }

    #[test]
    fn test_touching_paddle_is_not_a_collision() {
        let (state, config, _) = setup();
        let paddle = state.p1.paddle;
        // Ball's left edge exactly on the paddle's right edge
        let mut ball = Ball::new(Vec2::new(1.5, 11.0), Vec2::new(-5.0, 0.0));

        assert!(!collide_paddle(&paddle, &mut ball, &config));
    }

    #[test]
    fn test_check_paddle_collisions_reports_side() {
        let (mut state, config, mut events) = setup();
        state.ball = Ball::new(Vec2::new(18.7, 11.3), Vec2::new(5.0, 0.0));

        check_paddle_collisions(&mut state, &config, &mut events);

        assert!(events.p2_paddle_hit);
        assert!(!events.p1_paddle_hit);
        assert_eq!(state.ball.vel.x, -5.5);
    }

    #[test]
    fn test_both_paddles_checked_in_order() {
        let (mut state, config, mut events) = setup();
        // Stack p2's paddle on top of p1's so one ball overlaps both
        state.p2.paddle.pos = state.p1.paddle.pos;
        state.ball = Ball::new(Vec2::new(1.35, 11.3), Vec2::new(-5.0, 0.0));

        check_paddle_collisions(&mut state, &config, &mut events);

        assert!(events.p1_paddle_hit && events.p2_paddle_hit);
        assert_eq!(state.ball.vel.x, 6.0, "both bounces applied, p1 first");
    }
}
