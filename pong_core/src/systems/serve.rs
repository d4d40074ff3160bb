use crate::{Ball, CommandQueue, Config, Events, GameRng, PhysicsCommand, Side};
use glam::Vec2;
use hecs::World;
use rand::Rng;

/// Vertical serve direction: toward the player (-1) unless the player was the
/// last to miss, in which case toward the computer (+1)
pub fn serve_direction(last_collided_edge: Option<Side>) -> f32 {
    match last_collided_edge.map(Side::opposite).unwrap_or(Side::Player) {
        Side::Player => -1.0,
        Side::Computer => 1.0,
    }
}

/// Re-center the ball at rest, cue its entrance and launch it.
/// Returns the launch impulse.
pub fn serve(
    world: &mut World,
    last_collided_edge: Option<Side>,
    config: &Config,
    rng: &mut GameRng,
    commands: &mut CommandQueue,
    events: &mut Events,
) -> Vec2 {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset();
    }
    commands.push(PhysicsCommand::SetBallPosition(Vec2::ZERO));
    commands.push(PhysicsCommand::SetBallVelocity(Vec2::ZERO));
    events.served = true;

    let sign = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
    let speed_x = rng
        .0
        .gen_range(config.serve_speed_x_min..=config.serve_speed_x_max);
    let impulse = Vec2::new(
        sign * speed_x,
        serve_direction(last_collided_edge) * config.serve_speed_y,
    );
    commands.push(PhysicsCommand::ApplyBallImpulse(impulse));
    log::debug!("serve: impulse {:?}", impulse);

    impulse
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;

    #[test]
    fn test_serve_direction_mapping() {
        assert_eq!(serve_direction(None), -1.0, "First serve goes toward the player");
        assert_eq!(serve_direction(Some(Side::Computer)), -1.0);
        assert_eq!(serve_direction(Some(Side::Player)), 1.0);
    }

    #[test]
    fn test_serve_resets_ball_and_launches() {
        let mut world = World::new();
        create_ball(&mut world, Vec2::new(30.0, -40.0), Vec2::new(5.0, 5.0), 4.0);
        let config = Config::new();
        let mut rng = GameRng::new(7);
        let mut commands = CommandQueue::new();
        let mut events = Events::new();

        let impulse = serve(
            &mut world,
            Some(Side::Player),
            &config,
            &mut rng,
            &mut commands,
            &mut events,
        );

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::ZERO);
            assert_eq!(ball.vel, Vec2::ZERO);
        }
        assert!(events.served);
        assert_eq!(impulse.y, config.serve_speed_y);
        assert!(
            (config.serve_speed_x_min..=config.serve_speed_x_max).contains(&impulse.x.abs()),
            "x component {} out of range",
            impulse.x
        );

        let drained = commands.drain();
        assert_eq!(drained.len(), 3);
        assert_eq!(drained[0], PhysicsCommand::SetBallPosition(Vec2::ZERO));
        assert_eq!(drained[1], PhysicsCommand::SetBallVelocity(Vec2::ZERO));
        assert_eq!(drained[2], PhysicsCommand::ApplyBallImpulse(impulse));
    }

    #[test]
    fn test_serve_sides_vary_with_rng() {
        let mut world = World::new();
        create_ball(&mut world, Vec2::ZERO, Vec2::ZERO, 4.0);
        let config = Config::new();
        let mut rng = GameRng::new(99);
        let mut commands = CommandQueue::new();
        let mut events = Events::new();

        let mut saw_left = false;
        let mut saw_right = false;
        for _ in 0..64 {
            let impulse = serve(&mut world, None, &config, &mut rng, &mut commands, &mut events);
            assert_eq!(impulse.y, -config.serve_speed_y);
            saw_left |= impulse.x < 0.0;
            saw_right |= impulse.x > 0.0;
        }
        assert!(saw_left && saw_right, "Horizontal sign should be random");
    }
}
