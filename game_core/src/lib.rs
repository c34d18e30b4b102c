pub mod components;
pub mod config;
pub mod driver;
pub mod geometry;
pub mod host;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use driver::*;
pub use host::*;
pub use params::*;
pub use render::*;
pub use resources::*;

use systems::*;

/// Advance the Pong world by one frame of `dt` seconds.
///
/// Runs, in order: paddle input, paddle clamp, ball motion, wall bounce,
/// scoring (which may serve a fresh ball), then the paddle checks for p1
/// and p2. `events` is reset first and describes only this frame.
pub fn step<K: Keyboard + ?Sized>(
    state: &mut State,
    config: &Config,
    keys: &K,
    dt: f32,
    events: &mut Events,
) {
    events.clear();

    // 1. Read keys into paddle motion
    apply_paddle_input(state, config, keys, dt);

    // 2. Keep paddles in the arena
    clamp_paddles(state, config);

    // 3. Move ball
    move_ball(&mut state.ball, dt);

    // 4. Top/bottom walls
    bounce_off_walls(&mut state.ball, config, events);

    // 5. Ball left the arena
    check_scoring(state, config, events);

    // 6. Paddles, p1 then p2
    check_paddle_collisions(state, config, events);
}
