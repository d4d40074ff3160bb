use crate::{Aabb, Category, Side};
use glam::Vec2;

/// Ball component - mirror of the host-owned ball body
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Back to the field center, at rest
    pub fn reset(&mut self) {
        self.pos = Vec2::ZERO;
        self.vel = Vec2::ZERO;
    }
}

/// Paddle component - only `pos.x` changes after setup
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub size: Vec2,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2) -> Self {
        Self { side, pos, size }
    }

    pub fn half_width(&self) -> f32 {
        self.size.x / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.pos, self.size)
    }
}

/// What a physics body is, for hosts building their scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Ball,
    Paddle(Side),
    Wall,
    /// Scoring edge behind the given side's paddle
    Edge(Side),
}

/// Physics body component: category plus the categories it reports contacts with
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub kind: BodyKind,
    pub category: Category,
    pub contact_test: Category,
}

impl Body {
    pub fn new(kind: BodyKind, category: Category) -> Self {
        Self {
            kind,
            category,
            contact_test: Category::NONE,
        }
    }

    pub fn with_contact_test(mut self, mask: Category) -> Self {
        self.contact_test = mask;
        self
    }
}

/// Static line geometry for walls and scoring edges
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
}

impl Segment {
    pub fn new(from: Vec2, to: Vec2) -> Self {
        Self { from, to }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.from.min(self.to), self.from.max(self.to))
    }
}
