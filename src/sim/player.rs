//! The player character

use glam::Vec2;

use super::geometry::Rect;
use crate::assets::Drawable;
use crate::config::GameConfig;

/// Result of a damage attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Invincible, dying, or already dead; nothing changed
    Ignored,
    /// Health dropped but the player survives (hit sound, invincibility)
    Hurt,
    /// Health reached zero
    Killed,
}

/// The player-controlled character
#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    pub sprite: Drawable,
    pub health: u32,
    pub max_health: u32,
    pub garlic_count: u32,
    pub max_garlic: u32,
    pub carrot_juice_count: u32,
    pub max_carrot_juice: u32,
    pub speed: f32,
    /// Sprite mirroring only
    pub facing_left: bool,
    pub invincible: bool,
    pub last_hit_time: f64,
    pub invincibility_duration: f64,
    pub death_effect_active: bool,
    pub death_effect_start: f64,
    start_health: u32,
    spawn_pos: Vec2,
    health_changed: bool,
    garlic_changed: bool,
    juice_changed: bool,
}

impl Player {
    /// Player centered in the world with starting stats
    pub fn new(config: &GameConfig, sprite: Drawable) -> Self {
        let rect = Rect::from_center(config.world_size() / 2.0, sprite.size());
        Self {
            rect,
            sprite,
            health: config.start_health,
            max_health: config.max_health,
            garlic_count: 0,
            max_garlic: config.max_garlic,
            carrot_juice_count: 0,
            max_carrot_juice: config.max_carrot_juice,
            speed: config.player_speed,
            facing_left: false,
            invincible: false,
            last_hit_time: 0.0,
            invincibility_duration: config.player_invincibility_duration,
            death_effect_active: false,
            death_effect_start: 0.0,
            start_health: config.start_health,
            spawn_pos: rect.pos,
            health_changed: false,
            garlic_changed: false,
            juice_changed: false,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Step by `(dx, dy)` (each -1, 0 or 1) times speed, staying in the world
    pub fn move_by(&mut self, dx: i8, dy: i8, world: Vec2) {
        let dir = Vec2::new(f32::from(dx.signum()), f32::from(dy.signum()));
        self.rect.pos += dir * self.speed;
        self.rect.clamp_to(world);

        if dx < 0 {
            self.facing_left = true;
        } else if dx > 0 {
            self.facing_left = false;
        }
    }

    /// Unit vector the sprite faces (used when aiming at our own center)
    pub fn facing(&self) -> Vec2 {
        if self.facing_left { Vec2::NEG_X } else { Vec2::X }
    }

    /// Lose `amount` health unless protected
    pub fn take_damage(&mut self, amount: u32, now: f64) -> DamageOutcome {
        if self.invincible || self.death_effect_active || self.health == 0 {
            return DamageOutcome::Ignored;
        }

        self.health = self.health.saturating_sub(amount);
        self.health_changed = true;

        if self.health > 0 {
            self.invincible = true;
            self.last_hit_time = now;
            DamageOutcome::Hurt
        } else {
            DamageOutcome::Killed
        }
    }

    /// Drop invincibility once its window has fully elapsed
    pub fn update_invincibility(&mut self, now: f64) {
        if self.invincible && now >= self.last_hit_time + self.invincibility_duration {
            self.invincible = false;
        }
    }

    /// Begin the death animation
    pub fn start_death(&mut self, now: f64) {
        self.death_effect_active = true;
        self.death_effect_start = now;
    }

    /// Gain one health if below the cap. Returns whether anything changed.
    pub fn heal(&mut self, amount: u32) -> bool {
        if self.health >= self.max_health {
            return false;
        }
        self.health = self.health.saturating_add(amount).min(self.max_health);
        self.health_changed = true;
        true
    }

    /// Gain garlic if below the cap. Returns whether anything changed.
    pub fn add_garlic(&mut self, amount: u32) -> bool {
        if self.garlic_count >= self.max_garlic {
            return false;
        }
        self.garlic_count = self.garlic_count.saturating_add(amount).min(self.max_garlic);
        self.garlic_changed = true;
        true
    }

    /// Spend one garlic. Returns false if there was none.
    pub fn use_garlic(&mut self) -> bool {
        if self.garlic_count == 0 {
            return false;
        }
        self.garlic_count -= 1;
        self.garlic_changed = true;
        true
    }

    pub fn add_juice(&mut self, amount: u32) {
        let juice = self
            .carrot_juice_count
            .saturating_add(amount)
            .min(self.max_carrot_juice);
        if juice != self.carrot_juice_count {
            self.carrot_juice_count = juice;
            self.juice_changed = true;
        }
    }

    /// Read and clear the health notification
    pub fn take_health_changed(&mut self) -> bool {
        std::mem::take(&mut self.health_changed)
    }

    /// Read and clear the garlic notification
    pub fn take_garlic_changed(&mut self) -> bool {
        std::mem::take(&mut self.garlic_changed)
    }

    /// Read and clear the juice notification
    pub fn take_juice_changed(&mut self) -> bool {
        std::mem::take(&mut self.juice_changed)
    }

    /// Back to spawn with starting stats
    ///
    /// Every stat counts as changed so observers redraw.
    pub fn reset(&mut self) {
        self.rect.pos = self.spawn_pos;
        self.health = self.start_health;
        self.garlic_count = 0;
        self.carrot_juice_count = 0;
        self.invincible = false;
        self.last_hit_time = 0.0;
        self.death_effect_active = false;
        self.death_effect_start = 0.0;
        self.facing_left = false;
        self.health_changed = true;
        self.garlic_changed = true;
        self.juice_changed = true;
    }
}
