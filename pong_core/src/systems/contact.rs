//! Contact classification. Everything here is a pure function of the two
//! bodies' category masks, safe to call from inside a host contact callback.

use crate::{Category, Config, Side};
use glam::Vec2;

/// A contact reported by the host: the category masks of both bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub a: Category,
    pub b: Category,
}

impl Contact {
    pub fn new(a: impl Into<Category>, b: impl Into<Category>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    pub fn union(&self) -> Category {
        self.a | self.b
    }
}

/// True iff the two bodies together carry every flag in `mask`
pub fn involves_ball(contact: &Contact, mask: Category) -> bool {
    contact.union().contains(mask)
}

/// Which side's scoring edge was touched, if any
pub fn classify_edge_contact(contact: &Contact) -> Option<Side> {
    if involves_ball(contact, Category::PLAYER_EDGE) {
        Some(Side::Player)
    } else if involves_ball(contact, Category::COMPUTER_EDGE) {
        Some(Side::Computer)
    } else {
        None
    }
}

/// Impulse that keeps a ball from settling into a near-horizontal path.
///
/// Fires on wall or paddle contacts while `|vy| <= stall_threshold`. A ball at
/// exactly zero vertical speed is pushed toward negative y.
pub fn stall_correction(contact: &Contact, ball_vel: Vec2, config: &Config) -> Option<Vec2> {
    let bounced =
        involves_ball(contact, Category::WALL) || involves_ball(contact, Category::PADDLE);
    if !bounced || ball_vel.y.abs() > config.stall_threshold {
        return None;
    }

    let dir = if ball_vel.y > 0.0 { 1.0 } else { -1.0 };
    Some(Vec2::new(0.0, ball_vel.y * config.stall_gain + dir))
}
