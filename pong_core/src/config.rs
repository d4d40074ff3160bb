use crate::params::Params;
use thiserror::Error;

/// Errors raised while setting up a session
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("field size must be finite and positive, got {width}x{height}")]
    InvalidFieldSize { width: f32, height: f32 },

    #[error("{name} must be finite and positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("serve speed range is empty: min {min} > max {max}")]
    InvalidServeRange { min: f32, max: f32 },
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub blank_ratio: f32,
    pub center_line_ratio: f32,
    pub ball_radius_ratio: f32,
    pub paddle_width_ratio: f32,
    pub paddle_height_ratio: f32,
    pub paddle_y_ratio: f32,
    pub paddle_move_rate: f32,
    pub computer_interval: f64,
    pub stall_threshold: f32,
    pub stall_gain: f32,
    pub serve_speed_y: f32,
    pub serve_speed_x_min: f32,
    pub serve_speed_x_max: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            blank_ratio: Params::BLANK_RATIO,
            center_line_ratio: Params::CENTER_LINE_RATIO,
            ball_radius_ratio: Params::BALL_RADIUS_RATIO,
            paddle_width_ratio: Params::PADDLE_WIDTH_RATIO,
            paddle_height_ratio: Params::PADDLE_HEIGHT_RATIO,
            paddle_y_ratio: Params::PADDLE_Y_RATIO,
            paddle_move_rate: Params::PADDLE_MOVE_RATE,
            computer_interval: Params::COMPUTER_INTERVAL,
            stall_threshold: Params::STALL_THRESHOLD,
            stall_gain: Params::STALL_GAIN,
            serve_speed_y: Params::SERVE_SPEED_Y,
            serve_speed_x_min: Params::SERVE_SPEED_X_MIN,
            serve_speed_x_max: Params::SERVE_SPEED_X_MAX,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject values that would make the layout or the serve degenerate
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive: [(&'static str, f64); 9] = [
            ("ball_radius_ratio", self.ball_radius_ratio as f64),
            ("paddle_width_ratio", self.paddle_width_ratio as f64),
            ("paddle_height_ratio", self.paddle_height_ratio as f64),
            ("paddle_y_ratio", self.paddle_y_ratio as f64),
            ("paddle_move_rate", self.paddle_move_rate as f64),
            ("computer_interval", self.computer_interval),
            ("serve_speed_y", self.serve_speed_y as f64),
            ("serve_speed_x_min", self.serve_speed_x_min as f64),
            ("serve_speed_x_max", self.serve_speed_x_max as f64),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        // Zero is allowed for these: no overhang, no line, no correction
        let non_negative: [(&'static str, f64); 4] = [
            ("blank_ratio", self.blank_ratio as f64),
            ("center_line_ratio", self.center_line_ratio as f64),
            ("stall_threshold", self.stall_threshold as f64),
            ("stall_gain", self.stall_gain as f64),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        if self.serve_speed_x_min > self.serve_speed_x_max {
            return Err(ConfigError::InvalidServeRange {
                min: self.serve_speed_x_min,
                max: self.serve_speed_x_max,
            });
        }

        Ok(())
    }
}
