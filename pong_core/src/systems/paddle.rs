use crate::{CommandQueue, FieldLayout, Paddle, PhysicsCommand, Side};
use hecs::World;

/// Move a paddle horizontally to `target_x`, unless that would push any part of
/// it past the field's side edges. Returns whether the paddle moved.
pub fn move_paddle(
    world: &mut World,
    field: &FieldLayout,
    side: Side,
    target_x: f32,
    commands: &mut CommandQueue,
) -> bool {
    let Some((_entity, paddle)) = world
        .query_mut::<&mut Paddle>()
        .into_iter()
        .find(|(_e, p)| p.side == side)
    else {
        log::warn!("move_paddle: no {:?} paddle in world", side);
        return false;
    };

    let room = field.half_width() - target_x.abs();
    if room.is_nan() || room < paddle.half_width() {
        return false;
    }

    paddle.pos.x = target_x;
    commands.push(PhysicsCommand::SetPaddlePosition(side, paddle.pos));
    true
}

/// Current position of a side's paddle, if spawned
pub fn paddle_x(world: &World, side: Side) -> Option<f32> {
    world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, p)| p.side == side)
        .map(|(_e, p)| p.pos.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{spawn_field, Config};
    use glam::Vec2;

    fn setup_world() -> (World, FieldLayout, CommandQueue) {
        let mut world = World::new();
        let field = FieldLayout::new(Vec2::new(400.0, 600.0), &Config::new()).unwrap();
        spawn_field(&mut world, &field);
        (world, field, CommandQueue::new())
    }

    #[test]
    fn test_moves_to_target_inside_bounds() {
        let (mut world, field, mut commands) = setup_world();

        assert!(move_paddle(&mut world, &field, Side::Player, 80.0, &mut commands));

        assert_eq!(paddle_x(&world, Side::Player), Some(80.0));
        assert_eq!(paddle_x(&world, Side::Computer), Some(0.0), "Other paddle untouched");
        assert_eq!(
            commands.drain(),
            vec![PhysicsCommand::SetPaddlePosition(
                Side::Player,
                Vec2::new(80.0, -270.0)
            )]
        );
    }

    #[test]
    fn test_exact_bound_is_allowed() {
        let (mut world, field, mut commands) = setup_world();
        // Half width 200, paddle half width 50
        assert!(move_paddle(&mut world, &field, Side::Computer, -150.0, &mut commands));
        assert_eq!(paddle_x(&world, Side::Computer), Some(-150.0));
    }

    #[test]
    fn test_out_of_bounds_is_noop() {
        let (mut world, field, mut commands) = setup_world();
        move_paddle(&mut world, &field, Side::Player, 30.0, &mut commands);
        commands.clear();

        for target in [150.5, -150.5, 400.0, -1000.0] {
            assert!(!move_paddle(&mut world, &field, Side::Player, target, &mut commands));
            assert_eq!(paddle_x(&world, Side::Player), Some(30.0), "target {}", target);
        }
        assert!(commands.commands.is_empty());
    }

    #[test]
    fn test_non_finite_target_is_noop() {
        let (mut world, field, mut commands) = setup_world();

        for target in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            assert!(!move_paddle(&mut world, &field, Side::Player, target, &mut commands));
        }
        assert_eq!(paddle_x(&world, Side::Player), Some(0.0));
        assert!(commands.commands.is_empty());
    }

    #[test]
    fn test_missing_paddle_is_noop() {
        let mut world = World::new();
        let field = FieldLayout::new(Vec2::new(400.0, 600.0), &Config::new()).unwrap();
        let mut commands = CommandQueue::new();

        assert!(!move_paddle(&mut world, &field, Side::Player, 0.0, &mut commands));
        assert!(commands.commands.is_empty());
    }
}
