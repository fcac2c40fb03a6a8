//! Player projectiles: bullets for carrots, garlic for the vampire

use glam::Vec2;

use super::geometry::Rect;
use crate::assets::Drawable;
use crate::config::GameConfig;

/// A straight-flying bullet
#[derive(Debug, Clone)]
pub struct Bullet {
    pub rect: Rect,
    pub sprite: Drawable,
    /// Displacement per tick
    pub vel: Vec2,
    /// Launch angle in degrees (rendering only)
    pub angle: f32,
}

impl Bullet {
    /// Bullet centered on `origin` flying along unit vector `direction`
    pub fn new(origin: Vec2, direction: Vec2, speed: f32, sprite: Drawable) -> Self {
        Self {
            rect: Rect::from_center(origin, sprite.size()),
            sprite,
            vel: direction * speed,
            angle: direction.y.atan2(direction.x).to_degrees(),
        }
    }

    pub fn update(&mut self) {
        self.rect.pos += self.vel;
    }

    /// Whether the bullet's center is still inside the world
    pub fn in_bounds(&self, world: Vec2) -> bool {
        Rect::new(Vec2::ZERO, world).contains_point(self.rect.center())
    }
}

/// Where a garlic shot is in its life
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GarlicFlight {
    /// Still travelling
    Flying,
    /// Reached max travel; lies on the ground until its timer runs out
    Landed,
}

/// The special anti-vampire projectile (one in flight at a time)
#[derive(Debug, Clone)]
pub struct GarlicShot {
    pub rect: Rect,
    pub sprite: Drawable,
    /// Unit heading
    pub direction: Vec2,
    pub speed: f32,
    pub traveled: f32,
    pub max_travel: f32,
    pub started_at: f64,
    pub duration: f64,
    /// Cosmetic spin, degrees
    pub rotation: f32,
    pub spin: f32,
    pub flight: GarlicFlight,
}

impl GarlicShot {
    pub fn new(
        origin: Vec2,
        direction: Vec2,
        now: f64,
        config: &GameConfig,
        sprite: Drawable,
    ) -> Self {
        let flight = if config.garlic_shot_max_travel > 0.0 {
            GarlicFlight::Flying
        } else {
            GarlicFlight::Landed
        };
        Self {
            rect: Rect::from_center(origin, sprite.size()),
            sprite,
            direction,
            speed: config.garlic_shot_speed,
            traveled: 0.0,
            max_travel: config.garlic_shot_max_travel,
            started_at: now,
            duration: config.garlic_shot_duration,
            rotation: 0.0,
            spin: config.garlic_shot_spin,
            flight,
        }
    }

    /// Move (until the travel cap) and spin
    pub fn update(&mut self, world: Vec2) {
        self.rotation = (self.rotation + self.spin) % 360.0;

        if self.flight == GarlicFlight::Landed {
            return;
        }

        let step = self.speed.min(self.max_travel - self.traveled);
        self.rect.pos += self.direction * step;
        self.rect.clamp_to(world);
        self.traveled += step;

        if self.traveled >= self.max_travel {
            self.flight = GarlicFlight::Landed;
        }
    }

    /// Gone for good: travel cap reached and the timer has run out
    pub fn is_expired(&self, now: f64) -> bool {
        self.traveled >= self.max_travel && now - self.started_at > self.duration
    }
}
