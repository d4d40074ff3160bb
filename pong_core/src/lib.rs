//! Gameplay core for a one-player Pong variant: the player's paddle against a
//! computer-driven one. Physics integration and rendering belong to the host;
//! this crate classifies contacts, runs the state machine and issues
//! `PhysicsCommand`s back to the host.

pub mod category;
pub mod components;
pub mod config;
pub mod field;
pub mod fsm;
pub mod params;
pub mod resources;
pub mod session;
pub mod side;
pub mod sim;
pub mod systems;

pub use category::*;
pub use components::*;
pub use config::*;
pub use field::*;
pub use fsm::*;
pub use params::*;
pub use resources::*;
pub use session::*;
pub use side::*;

use glam::Vec2;
use hecs::World;

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2, radius: f32) -> hecs::Entity {
    let body = Body::new(BodyKind::Ball, Category::BALL).with_contact_test(
        Category::EDGE | Category::WALL | Category::PADDLE,
    );
    world.spawn((Ball::new(pos, vel, radius), body))
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, pos: Vec2, size: Vec2) -> hecs::Entity {
    world.spawn((
        Paddle::new(side, pos, size),
        Body::new(BodyKind::Paddle(side), Category::PADDLE),
    ))
}

/// Spawn every body of a fresh session: ball at the center, both paddles,
/// the side walls and the two scoring edges
pub fn spawn_field(world: &mut World, field: &FieldLayout) {
    create_ball(world, Vec2::ZERO, Vec2::ZERO, field.ball_radius);

    for side in Side::ALL {
        create_paddle(world, side, field.paddle_start[side], field.paddle_size);
    }

    for (from, to) in field.walls() {
        world.spawn((
            Segment::new(from, to),
            Body::new(BodyKind::Wall, Category::WALL),
        ));
    }

    for side in Side::ALL {
        let flag = match side {
            Side::Player => Category::PLAYER_EDGE,
            Side::Computer => Category::COMPUTER_EDGE,
        };
        let (from, to) = field.edge(side);
        world.spawn((
            Segment::new(from, to),
            Body::new(BodyKind::Edge(side), Category::EDGE | flag),
        ));
    }
}

/// Current ball state, if a ball exists
pub fn find_ball(world: &World) -> Option<Ball> {
    world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball)
}

/// Every non-ball body with its current bounds
pub fn body_bounds(world: &World) -> Vec<(Body, Aabb)> {
    let mut bounds: Vec<(Body, Aabb)> = world
        .query::<(&Body, &Segment)>()
        .iter()
        .map(|(_e, (body, segment))| (*body, segment.bounds()))
        .collect();
    bounds.extend(
        world
            .query::<(&Body, &Paddle)>()
            .iter()
            .map(|(_e, (body, paddle))| (*body, paddle.bounds())),
    );
    bounds
}
