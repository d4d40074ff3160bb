//! One play session and its host entry points.
//!
//! The host calls `update` once per frame, `on_contact` once per detected
//! collision and the pointer handlers on input, all from the same thread.
//! After each call it drains `drain_commands` into its physics world.
//!
//! `on_contact` never scores or re-serves: it only records the outcome
//! (`GameState::Missed` plus the touched edge) and `update` settles it.

use crate::systems::{
    award_point, classify_edge_contact, involves_ball, move_paddle, paddle_x, serve,
    stall_correction, step_computer_paddle, Contact,
};
use crate::{
    find_ball, spawn_field, Ball, Category, CommandQueue, Config, ConfigError, Events,
    FieldLayout, GameAction, GameFsm, GameRng, GameState, PhysicsCommand, Score, Side, Time,
};
use glam::Vec2;
use hecs::World;

pub struct Session {
    world: World,
    field: FieldLayout,
    config: Config,
    fsm: GameFsm,
    score: Score,
    last_collided_edge: Option<Side>,
    pending_impulses: Vec<Vec2>,
    time: Time,
    rng: GameRng,
    events: Events,
    commands: CommandQueue,
}

impl Session {
    /// Lay out a field of `field_size` and spawn its bodies
    pub fn new(field_size: Vec2, config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let field = FieldLayout::new(field_size, &config)?;

        let mut world = World::new();
        spawn_field(&mut world, &field);
        log::debug!(
            "session: field {}x{}, edges at y = +/-{}",
            field_size.x,
            field_size.y,
            field.y_edge
        );

        Ok(Self {
            world,
            field,
            config,
            fsm: GameFsm::new(),
            score: Score::new(),
            last_collided_edge: None,
            pending_impulses: Vec::new(),
            time: Time::new(),
            rng: GameRng::new(seed),
            events: Events::new(),
            commands: CommandQueue::new(),
        })
    }

    pub fn state(&self) -> GameState {
        self.fsm.state()
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn last_collided_edge(&self) -> Option<Side> {
        self.last_collided_edge
    }

    pub fn field(&self) -> &FieldLayout {
        &self.field
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn ball(&self) -> Option<Ball> {
        find_ball(&self.world)
    }

    pub fn paddle_x(&self, side: Side) -> Option<f32> {
        paddle_x(&self.world, side)
    }

    /// Refresh the core's copy of the host-integrated ball
    pub fn sync_ball(&mut self, pos: Vec2, vel: Vec2) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    /// Commands issued since the last drain, in order
    pub fn drain_commands(&mut self) -> Vec<PhysicsCommand> {
        self.commands.drain()
    }

    /// Presentation events accumulated since the last call
    pub fn take_events(&mut self) -> Events {
        std::mem::take(&mut self.events)
    }

    /// Pointer pressed: starts a serve from stand-by, and moves the player's
    /// paddle once the rally is on (including the press that started it)
    pub fn on_pointer_down(&mut self, pos: Vec2) {
        if self.fsm.state() == GameState::StandBy
            && self.fsm.transition(GameAction::Serve).success
        {
            serve(
                &mut self.world,
                self.last_collided_edge,
                &self.config,
                &mut self.rng,
                &mut self.commands,
                &mut self.events,
            );
        }

        self.on_pointer_move(pos);
    }

    pub fn on_pointer_move(&mut self, pos: Vec2) {
        if self.fsm.is_rallying() {
            move_paddle(
                &mut self.world,
                &self.field,
                Side::Player,
                pos.x,
                &mut self.commands,
            );
        }
    }

    /// Contact between two bodies, identified only by their category masks
    pub fn on_contact(&mut self, a: impl Into<Category>, b: impl Into<Category>) {
        let contact = Contact::new(a, b);
        log::trace!("contact {:#010b}", contact.union().bits());

        if !involves_ball(&contact, Category::BALL) {
            return;
        }

        let Some(ball) = find_ball(&self.world) else {
            log::warn!("on_contact: no ball in world");
            return;
        };

        // A stopped (missed) or parked ball is never kicked
        if self.fsm.is_rallying() {
            if let Some(impulse) = stall_correction(&contact, ball.vel, &self.config) {
                self.pending_impulses.push(impulse);
            }
        }

        if let Some(side) = classify_edge_contact(&contact) {
            if !self.fsm.transition(GameAction::EdgeReached).success {
                return;
            }
            for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
                ball.vel = Vec2::ZERO;
            }
            self.commands
                .push(PhysicsCommand::SetBallVelocity(Vec2::ZERO));
            self.pending_impulses.clear();
            self.last_collided_edge = Some(side);
            self.events.missed = Some(side);
            log::debug!("ball reached the {:?} edge", side);
        }
    }

    /// Per-frame step: apply deferred impulses, settle a missed ball, then
    /// move the computer paddle if its interval has passed
    pub fn update(&mut self, current_time: f64) {
        self.time.now = current_time;

        for impulse in self.pending_impulses.drain(..) {
            log::trace!("stall correction {:?}", impulse);
            self.commands.push(PhysicsCommand::ApplyBallImpulse(impulse));
            self.events.ball_boosted = true;
        }

        award_point(
            &mut self.fsm,
            self.last_collided_edge,
            &mut self.score,
            &mut self.events,
        );

        if self.fsm.is_rallying() && self.time.computer_due(self.config.computer_interval) {
            self.time.last_computer_step = current_time;
            step_computer_paddle(
                &mut self.world,
                &self.field,
                &self.config,
                self.fsm.state(),
                &mut self.commands,
            );
        }
    }
}
