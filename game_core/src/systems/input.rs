use crate::components::Side;
use crate::host::Keyboard;
use crate::{Config, State};

/// Move each paddle by `dt * paddle_speed` per held key.
///
/// Up is applied before down, so holding both cancels out. No clamping
/// happens here; see [`clamp_paddles`](crate::systems::clamp_paddles).
pub fn apply_paddle_input<K: Keyboard + ?Sized>(
    state: &mut State,
    config: &Config,
    keys: &K,
    dt: f32,
) {
    let travel = dt * config.paddle_speed;

    for side in Side::BOTH {
        let controls = config.controls(side);
        let paddle = &mut state.player_mut(side).paddle;

        if keys.key_down(&controls.up) {
            paddle.pos.y -= travel;
        }
        if keys.key_down(&controls.down) {
            paddle.pos.y += travel;
        }
    }
}
