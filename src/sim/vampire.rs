//! The vampire
//!
//! A single relentless chaser. Garlic sends it into a short death effect
//! (which ends in a rare drop); touching the player makes it vanish
//! immediately. Either way it comes back somewhere random later.

use glam::Vec2;

use super::geometry::{Rect, seek_with_bounds};
use crate::assets::Drawable;

/// Vampire lifecycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VampireState {
    Active,
    /// Hit by garlic at `since`; `at` is the center where it died
    Dying { since: f64, at: Vec2 },
    /// Gone since `since`, waiting to respawn
    Inactive { since: f64 },
}

#[derive(Debug, Clone)]
pub struct Vampire {
    pub rect: Rect,
    pub sprite: Drawable,
    pub speed: f32,
    pub state: VampireState,
}

impl Vampire {
    pub fn new(pos: Vec2, sprite: Drawable, speed: f32) -> Self {
        Self {
            rect: Rect::new(pos, sprite.size()),
            sprite,
            speed,
            state: VampireState::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == VampireState::Active
    }

    pub fn is_dying(&self) -> bool {
        matches!(self.state, VampireState::Dying { .. })
    }

    /// Take one step toward the player (only while active)
    pub fn chase(&mut self, target: &Rect, world: Vec2) {
        if !self.is_active() {
            return;
        }
        self.rect.pos += seek_with_bounds(&self.rect, target, self.speed, world);
        self.rect.clamp_to(world);
    }

    /// Garlic hit: freeze in place and start the death effect
    pub fn start_death(&mut self, now: f64) {
        self.state = VampireState::Dying {
            since: now,
            at: self.rect.center(),
        };
    }

    /// Vanish without a death effect (after biting the player)
    pub fn deactivate(&mut self, now: f64) {
        self.state = VampireState::Inactive { since: now };
    }

    /// End the death effect once `duration` has elapsed
    ///
    /// Returns the death position exactly once, on the tick the effect ends.
    pub fn finish_death(&mut self, now: f64, duration: f64) -> Option<Vec2> {
        match self.state {
            VampireState::Dying { since, at } if now >= since + duration => {
                self.state = VampireState::Inactive { since: now };
                Some(at)
            }
            _ => None,
        }
    }

    /// True once an inactive vampire has waited out `delay`
    pub fn ready_to_respawn(&self, now: f64, delay: f64) -> bool {
        match self.state {
            VampireState::Inactive { since } => now >= since + delay,
            _ => false,
        }
    }

    /// Reappear at `pos`
    pub fn respawn(&mut self, pos: Vec2) {
        self.rect.pos = pos;
        self.state = VampireState::Active;
    }
}
