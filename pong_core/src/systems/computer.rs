use crate::systems::move_paddle;
use crate::{find_ball, CommandQueue, Config, FieldLayout, GameState, Paddle, Side};
use hecs::World;

/// One step of the computer opponent: a fixed-size move toward the ball's x,
/// taken only while the ball is on the computer's half and heading its way.
/// Returns whether the paddle moved.
pub fn step_computer_paddle(
    world: &mut World,
    field: &FieldLayout,
    config: &Config,
    state: GameState,
    commands: &mut CommandQueue,
) -> bool {
    if state != GameState::Rallying {
        return false;
    }

    let Some(ball) = find_ball(world) else {
        log::warn!("step_computer_paddle: no ball in world");
        return false;
    };

    // Wait for the ball to cross the center line, moving toward us
    if ball.pos.y <= 0.0 || ball.vel.y < 0.0 {
        return false;
    }

    let paddle_x = world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, p)| p.side == Side::Computer)
        .map(|(_e, p)| p.pos.x);
    let Some(paddle_x) = paddle_x else {
        log::warn!("step_computer_paddle: no computer paddle in world");
        return false;
    };

    let x_diff = paddle_x - ball.pos.x;
    let dir = if x_diff > 0.0 { -1.0 } else { 1.0 };
    let target_x = paddle_x + dir * config.paddle_move_rate;
    log::trace!("computer paddle {} -> {}", paddle_x, target_x);

    move_paddle(world, field, Side::Computer, target_x, commands)
}
