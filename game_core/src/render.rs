use crate::host::Canvas;
use crate::{Config, State};

/// Draw the current frame: paddles, score markers, then the ball.
///
/// p2's points are unit squares along the top edge growing rightward,
/// p1's run along the bottom edge growing leftward.
pub fn render<C: Canvas + ?Sized>(state: &State, config: &Config, canvas: &mut C) {
    canvas.clear();

    for player in [&state.p1, &state.p2] {
        let pos = player.paddle.pos;
        canvas.draw_rectangle(pos.x, pos.y, config.paddle_width, config.paddle_height);
    }

    let marker = config.score_marker_size;
    for i in 0..state.p2.score {
        canvas.draw_rectangle(i as f32 * marker, 0.0, marker, marker);
    }
    for i in 0..state.p1.score {
        let x = config.arena_width() - (i + 1) as f32 * marker;
        canvas.draw_rectangle(x, config.arena_height() - marker, marker, marker);
    }

    let ball = state.ball.pos;
    canvas.draw_rectangle(ball.x, ball.y, config.ball_size, config.ball_size);
}
