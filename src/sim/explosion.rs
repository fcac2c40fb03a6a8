//! Explosions and the items they leave behind

use glam::Vec2;

use super::geometry::Rect;
use crate::assets::{Drawable, Sprites};

/// A flashing explosion left where a carrot died
#[derive(Debug, Clone)]
pub struct Explosion {
    pub rect: Rect,
    pub sprite: Drawable,
    pub created_at: f64,
    pub last_flash: f64,
    pub flashes: u32,
    pub max_flashes: u32,
    pub flash_interval: f64,
    pub active: bool,
}

impl Explosion {
    pub fn new(center: Vec2, now: f64, max_flashes: u32, flash_interval: f64, sprite: Drawable) -> Self {
        Self {
            rect: Rect::from_center(center, sprite.size()),
            sprite,
            created_at: now,
            last_flash: now,
            flashes: 0,
            max_flashes,
            flash_interval,
            active: true,
        }
    }

    /// Count flashes; returns true on the tick the explosion finishes
    pub fn update(&mut self, now: f64) -> bool {
        if !self.active {
            return false;
        }
        if now >= self.last_flash + self.flash_interval {
            self.flashes += 1;
            self.last_flash = now;
            if self.flashes >= self.max_flashes {
                self.active = false;
                return true;
            }
        }
        false
    }

    /// Whether the sprite is shown this frame (alternates each flash)
    pub fn visible(&self) -> bool {
        self.flashes % 2 == 0
    }
}

/// What a collectible does when picked up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Restores one health
    Health,
    /// Adds one garlic
    Garlic,
    /// Carrot juice, the rare currency dropped by the vampire
    Juice,
}

impl ItemKind {
    pub fn sprite(self, sprites: &Sprites) -> Drawable {
        match self {
            ItemKind::Health => sprites.health_item,
            ItemKind::Garlic => sprites.garlic_item,
            ItemKind::Juice => sprites.juice_item,
        }
    }
}

/// A pickup lying in the world until the player touches it
#[derive(Debug, Clone)]
pub struct Collectible {
    pub rect: Rect,
    pub sprite: Drawable,
    pub kind: ItemKind,
}

impl Collectible {
    pub fn new(center: Vec2, kind: ItemKind, sprite: Drawable) -> Self {
        Self {
            rect: Rect::from_center(center, sprite.size()),
            sprite,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn explosion() -> Explosion {
        Explosion::new(Vec2::new(50.0, 50.0), 0.0, 3, 0.25, Drawable::placeholder(20.0, 20.0, [0; 4]))
    }

    #[test]
    fn test_flashes_then_finishes_once() {
        let mut e = explosion();
        assert!(!e.update(0.1));
        assert_eq!(e.flashes, 0);
        assert!(!e.update(0.25));
        assert!(!e.visible());
        assert!(!e.update(0.5));
        assert!(e.visible());
        assert!(e.update(0.75));
        assert!(!e.active);
        assert!(!e.update(1.0));
    }

    #[test]
    fn test_flash_on_deadline_at_odd_times() {
        for t in [255.069, 59.07] {
            let mut e = Explosion::new(Vec2::ZERO, t, 3, 0.1, Drawable::placeholder(20.0, 20.0, [0; 4]));
            e.update(t + 0.1);
            assert_eq!(e.flashes, 1, "flash late after {t}");
        }
    }

    #[test]
    fn test_centered_on_spawn() {
        let e = explosion();
        assert_eq!(e.rect.center(), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_item_sprites() {
        let sprites = Sprites::default();
        assert_eq!(ItemKind::Juice.sprite(&sprites), sprites.juice_item);
        let item = Collectible::new(Vec2::new(10.0, 10.0), ItemKind::Garlic, ItemKind::Garlic.sprite(&sprites));
        assert_eq!(item.rect.center(), Vec2::new(10.0, 10.0));
    }
}
