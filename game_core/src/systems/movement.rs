use crate::components::{Ball, Side};
use crate::{Config, State};

/// Keep both paddles inside `[0, arena_height - paddle_height]`
pub fn clamp_paddles(state: &mut State, config: &Config) {
    for side in Side::BOTH {
        let paddle = &mut state.player_mut(side).paddle;
        paddle.pos.y = config.clamp_paddle_y(paddle.pos.y);
    }
}

/// Move ball based on velocity
pub fn move_ball(ball: &mut Ball, dt: f32) {
    ball.pos += ball.vel * dt;
}
