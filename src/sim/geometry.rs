//! Axis-aligned boxes and steering helpers
//!
//! World coordinates put the origin at the top-left corner with y growing
//! downward. Every entity occupies a [`Rect`] that must stay inside the world.

use glam::Vec2;

/// Axis-aligned bounding box (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Box of the given size centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size / 2.0,
            size,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.pos = center - self.size / 2.0;
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict overlap test (touching edges do not collide)
    pub fn intersects(&self, other: &Rect) -> bool {
        self.pos.x < other.right()
            && other.pos.x < self.right()
            && self.pos.y < other.bottom()
            && other.pos.y < self.bottom()
    }

    /// Half-open containment: left/top edges inclusive, right/bottom exclusive
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.pos.x
            && point.x < self.right()
            && point.y >= self.pos.y
            && point.y < self.bottom()
    }

    /// True if the whole box lies inside a world of the given size
    pub fn is_within(&self, world: Vec2) -> bool {
        self.pos.x >= 0.0 && self.pos.y >= 0.0 && self.right() <= world.x && self.bottom() <= world.y
    }

    /// Top-left position after clamping this box into the world
    pub fn clamped_pos(&self, world: Vec2) -> Vec2 {
        let max = (world - self.size).max(Vec2::ZERO);
        self.pos.clamp(Vec2::ZERO, max)
    }

    /// Pull the box back inside the world (saturating)
    pub fn clamp_to(&mut self, world: Vec2) {
        self.pos = self.clamped_pos(world);
    }
}

/// Unit vector pointing from `from` to `to`, or zero when they coincide
pub fn direction_vector(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize_or_zero()
}

/// One step of length `speed` from `source` toward `target` (center to
/// center), shortened so the moved box stays inside the world
pub fn seek_with_bounds(source: &Rect, target: &Rect, speed: f32, world: Vec2) -> Vec2 {
    let step = direction_vector(source.center(), target.center()) * speed;
    let moved = Rect::new(source.pos + step, source.size);
    moved.clamped_pos(world) - source.pos
}

/// Unit vector at a uniformly random angle
pub fn random_direction(rng: &mut impl rand::Rng) -> Vec2 {
    Vec2::from_angle(rng.random_range(0.0..std::f32::consts::TAU))
}

/// Uniformly random top-left position keeping a box of `size` in the world
pub fn random_position(rng: &mut impl rand::Rng, size: Vec2, world: Vec2) -> Vec2 {
    let max = (world - size).max(Vec2::ZERO);
    Vec2::new(
        rng.random_range(0.0..=max.x),
        rng.random_range(0.0..=max.y),
    )
}

/// Random top-left position whose box center is at least `min_distance`
/// from `avoid`
///
/// Loops until a candidate fits; callers must have checked the radius is
/// satisfiable with [`crate::config::GameConfig::validate_spawn_area`].
pub fn random_position_away_from(
    rng: &mut impl rand::Rng,
    size: Vec2,
    world: Vec2,
    avoid: Vec2,
    min_distance: f32,
) -> Vec2 {
    let min_sq = min_distance * min_distance;
    loop {
        let pos = random_position(rng, size, world);
        if (pos + size / 2.0).distance_squared(avoid) >= min_sq {
            return pos;
        }
    }
}
