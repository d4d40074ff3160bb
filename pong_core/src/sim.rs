//! Minimal stand-in for the host physics engine, for headless runs and tests.
//!
//! Only the ball moves. It has unit mass, so an impulse adds directly to its
//! velocity. Walls reflect x, paddles reflect y, edges do nothing (the session
//! stops the ball itself). Each contact is reported once when it begins, and
//! only for bodies in the ball's contact-test mask.

use crate::{body_bounds, Ball, Body, BodyKind, Category, PhysicsCommand, Session, Side};
use glam::Vec2;

#[derive(Debug, Clone, Default)]
pub struct KinematicHost {
    pub ball_pos: Vec2,
    pub ball_vel: Vec2,
    pub now: f64,
    touching: Vec<BodyKind>,
}

impl KinematicHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward a pointer press and apply what it issued
    pub fn pointer_down(&mut self, session: &mut Session, pos: Vec2) {
        session.on_pointer_down(pos);
        self.apply(session);
    }

    pub fn pointer_move(&mut self, session: &mut Session, pos: Vec2) {
        session.on_pointer_move(pos);
        self.apply(session);
    }

    /// Advance one frame: integrate, report new contacts, then run `update`
    pub fn step(&mut self, session: &mut Session, dt: f32) {
        self.now += dt as f64;
        self.ball_pos += self.ball_vel * dt;
        session.sync_ball(self.ball_pos, self.ball_vel);

        let (radius, contact_test) = session
            .world()
            .query::<(&Ball, &Body)>()
            .iter()
            .next()
            .map(|(_e, (ball, body))| (ball.radius, body.contact_test))
            .unwrap_or((0.0, Category::NONE));
        let mut touching = Vec::new();
        for (body, aabb) in body_bounds(session.world()) {
            if !contact_test.intersects(body.category)
                || !aabb.intersects_circle(self.ball_pos, radius)
            {
                continue;
            }
            touching.push(body.kind);
            if self.touching.contains(&body.kind) {
                continue;
            }

            self.bounce(&body);
            session.sync_ball(self.ball_pos, self.ball_vel);
            session.on_contact(Category::BALL, body.category);
            self.apply(session);
        }
        self.touching = touching;

        session.update(self.now);
        self.apply(session);
    }

    fn bounce(&mut self, body: &Body) {
        let vel = &mut self.ball_vel;
        match body.kind {
            BodyKind::Wall => {
                // Left wall sits at negative x
                let toward = if self.ball_pos.x < 0.0 {
                    vel.x < 0.0
                } else {
                    vel.x > 0.0
                };
                if toward {
                    vel.x = -vel.x;
                }
            }
            BodyKind::Paddle(Side::Player) if vel.y < 0.0 => vel.y = -vel.y,
            BodyKind::Paddle(Side::Computer) if vel.y > 0.0 => vel.y = -vel.y,
            _ => {}
        }
    }

    fn apply(&mut self, session: &mut Session) {
        for command in session.drain_commands() {
            match command {
                PhysicsCommand::SetBallVelocity(vel) => self.ball_vel = vel,
                PhysicsCommand::ApplyBallImpulse(impulse) => self.ball_vel += impulse,
                PhysicsCommand::SetBallPosition(pos) => self.ball_pos = pos,
                // Paddle bodies are read straight from the session's world
                PhysicsCommand::SetPaddlePosition(..) => {}
            }
        }
        session.sync_ball(self.ball_pos, self.ball_vel);
    }
}
