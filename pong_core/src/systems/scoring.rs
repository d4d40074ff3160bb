use crate::{Events, GameAction, GameFsm, GameState, Score, Side};

/// Settle a missed ball: the side opposite the last touched edge scores one
/// point and the game returns to stand-by. Stays in `Missed` without scoring
/// if no edge was recorded. Returns the scoring side.
pub fn award_point(
    fsm: &mut GameFsm,
    last_collided_edge: Option<Side>,
    score: &mut Score,
    events: &mut Events,
) -> Option<Side> {
    if fsm.state() != GameState::Missed {
        return None;
    }

    let Some(missed) = last_collided_edge else {
        log::warn!("award_point: missed without a recorded edge");
        return None;
    };

    let scorer = missed.opposite();
    let total = score.increment(scorer);
    events.scored = Some((scorer, total));
    fsm.transition(GameAction::PointAwarded);
    log::info!(
        "{:?} scores ({} - {})",
        scorer,
        score.get(Side::Player),
        score.get(Side::Computer)
    );

    Some(scorer)
}
