//! Drawable handles supplied by the frontend
//!
//! The simulation never looks inside an image. It only needs the size of
//! each sprite (to build bounding boxes) and a token to hand back to the
//! renderer. When the frontend fails to load a file it passes a
//! [`Drawable::Placeholder`] instead and the simulation behaves the same.

use glam::Vec2;

/// Opaque renderer-side identifier for a loaded image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageToken(pub u32);

/// Something the renderer can draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Drawable {
    /// A real decoded image
    Image { size: Vec2, token: ImageToken },
    /// Generated stand-in (solid rectangle of the given RGBA color)
    Placeholder { size: Vec2, color: [u8; 4] },
}

impl Drawable {
    pub const fn placeholder(width: f32, height: f32, color: [u8; 4]) -> Self {
        Drawable::Placeholder {
            size: Vec2::new(width, height),
            color,
        }
    }

    /// Pixel dimensions used for the owning entity's bounding box
    pub fn size(&self) -> Vec2 {
        match *self {
            Drawable::Image { size, .. } | Drawable::Placeholder { size, .. } => size,
        }
    }
}

/// One drawable per entity kind, handed to the engine at construction
#[derive(Debug, Clone, PartialEq)]
pub struct Sprites {
    pub player: Drawable,
    pub carrot: Drawable,
    pub vampire: Drawable,
    pub bullet: Drawable,
    pub garlic_shot: Drawable,
    pub explosion: Drawable,
    pub health_item: Drawable,
    pub garlic_item: Drawable,
    pub juice_item: Drawable,
}

impl Default for Sprites {
    /// Placeholder set matching the stock art dimensions
    fn default() -> Self {
        Self {
            player: Drawable::placeholder(64.0, 64.0, [80, 160, 255, 255]),
            carrot: Drawable::placeholder(48.0, 48.0, [255, 140, 0, 255]),
            vampire: Drawable::placeholder(64.0, 64.0, [140, 0, 40, 255]),
            bullet: Drawable::placeholder(10.0, 10.0, [255, 255, 255, 255]),
            garlic_shot: Drawable::placeholder(32.0, 32.0, [240, 240, 200, 255]),
            explosion: Drawable::placeholder(64.0, 64.0, [255, 220, 60, 255]),
            health_item: Drawable::placeholder(32.0, 32.0, [220, 30, 30, 255]),
            garlic_item: Drawable::placeholder(32.0, 32.0, [250, 250, 230, 255]),
            juice_item: Drawable::placeholder(32.0, 32.0, [255, 100, 0, 255]),
        }
    }
}

impl Sprites {
    /// Largest sprite extent on either axis
    pub fn max_extent(&self) -> f32 {
        [
            self.player,
            self.carrot,
            self.vampire,
            self.bullet,
            self.garlic_shot,
            self.explosion,
            self.health_item,
            self.garlic_item,
            self.juice_item,
        ]
        .iter()
        .map(|d| d.size().max_element())
        .fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_is_representation_independent() {
        let real = Drawable::Image {
            size: Vec2::new(20.0, 30.0),
            token: ImageToken(7),
        };
        let fake = Drawable::placeholder(20.0, 30.0, [0, 0, 0, 255]);
        assert_eq!(real.size(), fake.size());
    }

    #[test]
    fn test_max_extent() {
        let mut sprites = Sprites::default();
        sprites.vampire = Drawable::placeholder(120.0, 40.0, [0; 4]);
        assert_eq!(sprites.max_extent(), 120.0);
    }
}
