use log::info;

use crate::components::Side;
use crate::{Config, Events, State};

/// Award a point when the ball leaves the arena horizontally, then serve.
///
/// Leaving past the left edge scores for p1 and serves toward the left;
/// past the right edge scores for p2 and serves toward the right.
pub fn check_scoring(state: &mut State, config: &Config, events: &mut Events) {
    let scorer = if state.ball.pos.x < 0.0 {
        Side::Left
    } else if state.ball.pos.x > config.arena_width() {
        Side::Right
    } else {
        return;
    };

    state.player_mut(scorer).add_point();
    events.mark_scored(scorer);
    state.ball.serve(config, scorer);

    let (p1, p2) = state.scores();
    info!("{} scores: {} - {}", scorer.label(), p1, p2);
}
