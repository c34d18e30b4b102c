use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::Side;
use crate::params::Params;

/// Key names that move one paddle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerControls {
    pub up: String,
    pub down: String,
}

impl PlayerControls {
    pub fn new(up: &str, down: &str) -> Self {
        Self {
            up: up.to_string(),
            down: down.to_string(),
        }
    }
}

/// Game configuration
///
/// Immutable for the lifetime of a session; every system reads its tuning
/// from here instead of from globals. Missing fields in a serialized config
/// fall back to [`Params`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub left_paddle_x: f32,
    pub right_paddle_x: f32,
    pub paddle_spawn_y: f32,
    pub ball_size: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_increase: f32,
    pub ball_deflection: f32,
    pub wall_margin: f32,
    pub score_marker_size: f32,
    pub p1_controls: PlayerControls,
    pub p2_controls: PlayerControls,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            left_paddle_x: Params::LEFT_PADDLE_X,
            right_paddle_x: Params::RIGHT_PADDLE_X,
            paddle_spawn_y: Params::PADDLE_SPAWN_Y,
            ball_size: Params::BALL_SIZE,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            ball_deflection: Params::BALL_DEFLECTION,
            wall_margin: Params::WALL_MARGIN,
            score_marker_size: Params::SCORE_MARKER_SIZE,
            p1_controls: PlayerControls::new("w", "s"),
            p2_controls: PlayerControls::new("i", "k"),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn arena_width(&self) -> f32 {
        Params::ARENA_WIDTH
    }

    pub fn arena_height(&self) -> f32 {
        Params::ARENA_HEIGHT
    }

    /// Lowest point the paddle's top edge may reach
    pub fn max_paddle_y(&self) -> f32 {
        self.arena_height() - self.paddle_height
    }

    /// Clamp paddle Y (top edge) to arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.max(0.0).min(self.max_paddle_y())
    }

    /// Ball's Y beyond which the bottom wall reflects it
    pub fn bottom_wall_y(&self) -> f32 {
        self.arena_height() - self.wall_margin
    }

    /// Where the ball is placed on every serve (top-left corner)
    pub fn serve_position(&self) -> Vec2 {
        Vec2::new(self.arena_width() / 2.0, self.arena_height() / 2.0)
    }

    /// Initial top-left corner of a player's paddle
    pub fn paddle_spawn(&self, side: Side) -> Vec2 {
        match side {
            Side::Left => Vec2::new(self.left_paddle_x, self.paddle_spawn_y),
            Side::Right => Vec2::new(self.right_paddle_x, self.paddle_spawn_y),
        }
    }

    pub fn controls(&self, side: Side) -> &PlayerControls {
        match side {
            Side::Left => &self.p1_controls,
            Side::Right => &self.p2_controls,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_size", self.ball_size),
            ("ball_speed_initial", self.ball_speed_initial),
            ("score_marker_size", self.score_marker_size),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::invalid(name, "must be a positive number"));
            }
        }

        let non_negative = [
            ("ball_speed_increase", self.ball_speed_increase),
            ("wall_margin", self.wall_margin),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid(name, "must be zero or a positive number"));
            }
        }

        if !self.ball_deflection.is_finite() {
            return Err(ConfigError::invalid("ball_deflection", "must be finite"));
        }
        if self.paddle_height > self.arena_height() {
            return Err(ConfigError::invalid(
                "paddle_height",
                "must not exceed the arena height",
            ));
        }
        if self.ball_size > self.arena_width().min(self.arena_height()) {
            return Err(ConfigError::invalid("ball_size", "must fit inside the arena"));
        }
        for (name, x) in [
            ("left_paddle_x", self.left_paddle_x),
            ("right_paddle_x", self.right_paddle_x),
        ] {
            if !(0.0..=self.arena_width()).contains(&x) {
                return Err(ConfigError::invalid(name, "must lie inside the arena"));
            }
        }
        if !(0.0..=self.max_paddle_y()).contains(&self.paddle_spawn_y) {
            return Err(ConfigError::invalid(
                "paddle_spawn_y",
                "must keep the paddle inside the arena",
            ));
        }
        for (name, controls) in [("p1_controls", &self.p1_controls), ("p2_controls", &self.p2_controls)] {
            if controls.up.is_empty() || controls.down.is_empty() {
                return Err(ConfigError::invalid(name, "key names must not be empty"));
            }
        }
        Ok(())
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn invalid(field: &str, reason: &str) -> Self {
        Self {
            message: format!("`{}` {}", field, reason),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_spawn() {
        let config = Config::new();
        assert_eq!(config.paddle_spawn(Side::Left), Vec2::new(1.0, 10.0));
        assert_eq!(config.paddle_spawn(Side::Right), Vec2::new(19.0, 10.0));
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(-3.0), 0.0);
        assert_eq!(config.clamp_paddle_y(100.0), 17.0);
        let valid_y = 12.0;
        assert_eq!(config.clamp_paddle_y(valid_y), valid_y);
    }

    #[test]
    fn test_serve_position_and_bottom_wall() {
        let config = Config::new();
        assert_eq!(config.serve_position(), Vec2::new(10.0, 10.0));
        assert!((config.bottom_wall_y() - 19.8).abs() < 1e-6);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{ "paddle_speed": 12.5 }"#).unwrap();
        assert_eq!(config.paddle_speed, 12.5);
        assert_eq!(config.paddle_height, Params::PADDLE_HEIGHT);
        assert_eq!(config.p2_controls, PlayerControls::new("i", "k"));
    }

    #[test]
    fn test_json_controls_override() {
        let config =
            Config::from_json(r#"{ "p1_controls": { "up": "arrowup", "down": "arrowdown" } }"#)
                .unwrap();
        assert_eq!(config.controls(Side::Left).up, "arrowup");
        assert_eq!(config.controls(Side::Right).down, "k");
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = Config::from_json("{ paddle_speed: ").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_validation_rejects_tall_paddle() {
        let err = Config::from_json(r#"{ "paddle_height": 25.0 }"#).unwrap_err();
        assert!(err.to_string().contains("paddle_height"));
    }

    #[test]
    fn test_validation_rejects_non_positive_speed() {
        let config = Config {
            ball_speed_initial: 0.0,
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ball_speed_initial"));
    }

    #[test]
    fn test_validation_rejects_empty_key() {
        let config = Config {
            p2_controls: PlayerControls::new("", "k"),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
