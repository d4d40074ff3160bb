//! Field layout derived once from the host's field size.
//!
//! The origin is the field center; the player defends the bottom edge
//! (negative y) and the computer the top edge.

use crate::{Config, ConfigError, PerSide, Side};
use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Check if circle intersects AABB
    pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
        let closest = Vec2::new(
            center.x.clamp(self.min.x, self.max.x),
            center.y.clamp(self.min.y, self.max.y),
        );
        (center - closest).length_squared() <= radius * radius
    }
}

/// Immutable geometry for one session
#[derive(Debug, Clone)]
pub struct FieldLayout {
    pub size: Vec2,
    /// Overhang of the side walls past the paddles, beyond which the edges sit
    pub blank_height: f32,
    pub x_edge: f32,
    pub y_edge: f32,
    pub ball_radius: f32,
    pub paddle_size: Vec2,
    pub paddle_start: PerSide<Vec2>,
    /// Where the host draws each side's score
    pub score_label: PerSide<Vec2>,
    /// Field separator for the host to draw; not a physics body
    pub center_line: Aabb,
}

impl FieldLayout {
    pub fn new(size: Vec2, config: &Config) -> Result<Self, ConfigError> {
        if !(size.is_finite() && size.x > 0.0 && size.y > 0.0) {
            return Err(ConfigError::InvalidFieldSize {
                width: size.x,
                height: size.y,
            });
        }

        let (w, h) = (size.x, size.y);
        let blank_height = (w + h) * config.blank_ratio;
        let x_edge = w / 2.0;
        let y_edge = h / 2.0 + blank_height;

        let paddle_y = h / 2.0 * config.paddle_y_ratio;
        let paddle_start = PerSide::new(Vec2::new(0.0, -paddle_y), Vec2::new(0.0, paddle_y));

        let label_x = -x_edge * crate::Params::SCORE_LABEL_X_RATIO;
        let label_y = crate::Params::SCORE_LABEL_Y_OFFSET;
        let score_label = PerSide::new(Vec2::new(label_x, -label_y), Vec2::new(label_x, label_y));

        let line = w * config.center_line_ratio;
        let center_line = Aabb::new(Vec2::new(-x_edge, -line / 2.0), Vec2::new(x_edge, 0.0));

        Ok(Self {
            size,
            blank_height,
            x_edge,
            y_edge,
            ball_radius: (w + h) * config.ball_radius_ratio,
            paddle_size: Vec2::new(w * config.paddle_width_ratio, h * config.paddle_height_ratio),
            paddle_start,
            score_label,
            center_line,
        })
    }

    pub fn half_width(&self) -> f32 {
        self.x_edge
    }

    /// Wall segments, left then right
    pub fn walls(&self) -> [(Vec2, Vec2); 2] {
        [
            (
                Vec2::new(-self.x_edge, -self.y_edge),
                Vec2::new(-self.x_edge, self.y_edge),
            ),
            (
                Vec2::new(self.x_edge, -self.y_edge),
                Vec2::new(self.x_edge, self.y_edge),
            ),
        ]
    }

    /// Scoring edge behind the given side
    pub fn edge(&self, side: Side) -> (Vec2, Vec2) {
        let y = match side {
            Side::Player => -self.y_edge,
            Side::Computer => self.y_edge,
        };
        (Vec2::new(-self.x_edge, y), Vec2::new(self.x_edge, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(w: f32, h: f32) -> FieldLayout {
        FieldLayout::new(Vec2::new(w, h), &Config::new()).unwrap()
    }

    #[test]
    fn test_derived_extents() {
        let field = layout(400.0, 600.0);
        assert!((field.blank_height - 30.0).abs() < 1e-4);
        assert_eq!(field.x_edge, 200.0);
        assert!((field.y_edge - 330.0).abs() < 1e-4);
        assert!((field.ball_radius - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_paddle_placement() {
        let field = layout(400.0, 600.0);
        assert_eq!(field.paddle_size, Vec2::new(100.0, 15.0));
        assert_eq!(field.paddle_start[Side::Player], Vec2::new(0.0, -270.0));
        assert_eq!(field.paddle_start[Side::Computer], Vec2::new(0.0, 270.0));
    }

    #[test]
    fn test_edges_sit_beyond_paddles() {
        let field = layout(320.0, 480.0);
        let (a, b) = field.edge(Side::Player);
        assert_eq!(a.y, b.y);
        assert!(a.y < field.paddle_start[Side::Player].y);
        let (a, _) = field.edge(Side::Computer);
        assert!(a.y > field.paddle_start[Side::Computer].y);
        assert_eq!(field.walls()[0].0.x, -160.0);
        assert_eq!(field.walls()[1].1, Vec2::new(160.0, field.y_edge));
    }

    #[test]
    fn test_score_labels_mirror_vertically() {
        let field = layout(400.0, 600.0);
        let player = field.score_label[Side::Player];
        let computer = field.score_label[Side::Computer];
        assert_eq!(player.x, computer.x);
        assert!((player.x + 170.0).abs() < 1e-4);
        assert_eq!(player.y, -computer.y);
    }

    #[test]
    fn test_center_line_spans_field() {
        let field = layout(400.0, 600.0);
        assert!((field.center_line.min - Vec2::new(-200.0, -2.0)).length() < 1e-4);
        assert_eq!(field.center_line.max, Vec2::new(200.0, 0.0));
    }

    #[test]
    fn test_rejects_degenerate_size() {
        let config = Config::new();
        assert!(FieldLayout::new(Vec2::new(0.0, 10.0), &config).is_err());
        assert!(FieldLayout::new(Vec2::new(10.0, -1.0), &config).is_err());
        assert!(FieldLayout::new(Vec2::new(f32::INFINITY, 10.0), &config).is_err());
    }

    #[test]
    fn test_intersects_circle() {
        let aabb = Aabb::from_center_size(Vec2::ZERO, Vec2::new(2.0, 2.0));
        assert!(aabb.intersects_circle(Vec2::new(1.5, 0.0), 0.6));
        assert!(!aabb.intersects_circle(Vec2::new(1.5, 1.5), 0.6));
    }
}
