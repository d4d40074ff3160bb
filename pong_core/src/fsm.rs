//! Game State Machine
//!
//! StandBy -> Rallying -> Missed -> StandBy, one point per cycle.

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Waiting for the player to start the next serve
    #[default]
    StandBy,
    /// Ball in play
    Rallying,
    /// Ball reached an edge; the point is awarded on the next update
    Missed,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// First pointer press while standing by
    Serve,
    /// Ball touched a scoring edge
    EdgeReached,
    /// Point recorded for the side that did not miss
    PointAwarded,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: GameState,
    pub to_state: GameState,
    pub action: GameAction,
}

/// Game Finite State Machine
#[derive(Debug, Clone, Default)]
pub struct GameFsm {
    state: GameState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn can_transition(&self, action: GameAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition; the state is left unchanged when it is not allowed
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        match self.get_next_state(action) {
            Some(next_state) => {
                self.state = next_state;
                log::debug!("{:?}: {:?} -> {:?}", action, from_state, next_state);
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            },
        }
    }

    fn get_next_state(&self, action: GameAction) -> Option<GameState> {
        match (self.state, action) {
            (GameState::StandBy, GameAction::Serve) => Some(GameState::Rallying),
            (GameState::Rallying, GameAction::EdgeReached) => Some(GameState::Missed),
            (GameState::Missed, GameAction::PointAwarded) => Some(GameState::StandBy),
            _ => None,
        }
    }

    pub fn is_rallying(&self) -> bool {
        self.state == GameState::Rallying
    }
}
