use crate::{PerSide, Side};
use glam::Vec2;

/// Frame clock bookkeeping for the computer opponent
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub now: f64,                // Last time reported by the host
    pub last_computer_step: f64, // When the computer paddle last moved
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether at least `interval` has passed since the last computer step
    pub fn computer_due(&self, interval: f64) -> bool {
        self.now - self.last_computer_step >= interval
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Score(PerSide<u32>);

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one point, returning the side's new total
    pub fn increment(&mut self, side: Side) -> u32 {
        self.0[side] += 1;
        self.0[side]
    }

    pub fn get(&self, side: Side) -> u32 {
        self.0[side]
    }

    pub fn total(&self) -> u32 {
        self.0.iter().map(|(_, points)| *points).sum()
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

/// Presentation-facing events, accumulated until the host takes them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    /// Ball entrance should play before the serve impulse lands
    pub served: bool,
    /// Side whose edge the ball reached
    pub missed: Option<Side>,
    /// Scoring side and its new total, for the score pop
    pub scored: Option<(Side, u32)>,
    /// Anti-stall impulse was applied
    pub ball_boosted: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Mutations the host physics engine must apply
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhysicsCommand {
    SetBallVelocity(Vec2),
    ApplyBallImpulse(Vec2),
    SetBallPosition(Vec2),
    SetPaddlePosition(Side, Vec2),
}

/// Outgoing command queue, drained by the host after each entry point
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    pub commands: Vec<PhysicsCommand>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: PhysicsCommand) {
        self.commands.push(command);
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn drain(&mut self) -> Vec<PhysicsCommand> {
        std::mem::take(&mut self.commands)
    }
}
