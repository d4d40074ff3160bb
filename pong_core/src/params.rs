/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field (ratios of the host-provided field size)
    pub const BLANK_RATIO: f32 = 0.03; // Edge overhang past the field, of (W + H)
    pub const CENTER_LINE_RATIO: f32 = 0.01; // Of W
    pub const SCORE_LABEL_X_RATIO: f32 = 0.85; // Of half width, mirrored to the left
    pub const SCORE_LABEL_Y_OFFSET: f32 = 50.0;

    // Ball
    pub const BALL_RADIUS_RATIO: f32 = 0.01; // Of (W + H)

    // Paddle
    pub const PADDLE_WIDTH_RATIO: f32 = 0.25; // Of W
    pub const PADDLE_HEIGHT_RATIO: f32 = 0.025; // Of H
    pub const PADDLE_Y_RATIO: f32 = 0.9; // Of half height

    // Computer opponent
    pub const PADDLE_MOVE_RATE: f32 = 2.5; // Units per policy step
    pub const COMPUTER_INTERVAL: f64 = 0.001; // Seconds between policy steps

    // Anti-stall correction
    pub const STALL_THRESHOLD: f32 = 50.0; // |vy| at or below this gets a kick
    pub const STALL_GAIN: f32 = 0.2;

    // Serve impulse
    pub const SERVE_SPEED_Y: f32 = 20.0;
    pub const SERVE_SPEED_X_MIN: f32 = 10.0;
    pub const SERVE_SPEED_X_MAX: f32 = 20.0;
}
