/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (fixed; not part of Config)
    pub const ARENA_WIDTH: f32 = 20.0;
    pub const ARENA_HEIGHT: f32 = 20.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 0.5;
    pub const PADDLE_HEIGHT: f32 = 3.0;
    pub const PADDLE_SPEED: f32 = 10.0; // units per second

    // Paddle spawn (top-left corner)
    pub const LEFT_PADDLE_X: f32 = 1.0;
    pub const RIGHT_PADDLE_X: f32 = 19.0;
    pub const PADDLE_SPAWN_Y: f32 = 10.0;

    // Ball
    pub const BALL_SIZE: f32 = 0.4;
    pub const BALL_SPEED_INITIAL: f32 = 5.0;
    pub const BALL_SPEED_INCREASE: f32 = 0.5; // Added to |vx| on paddle hit
    pub const BALL_DEFLECTION: f32 = 3.0; // vy gain per unit of off-center hit
    pub const WALL_MARGIN: f32 = 0.2; // Bottom bounce fires below ARENA_HEIGHT - WALL_MARGIN

    // Score display
    pub const SCORE_MARKER_SIZE: f32 = 1.0;
}
