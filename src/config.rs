//! Gameplay configuration
//!
//! Every number the simulation uses comes from here. Values are loaded from
//! JSON (missing keys fall back to defaults) and validated against the
//! bounds declared in [`crate::tuning::TUNABLES`].

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::tuning::TUNABLES;

/// All tunables for one game session
///
/// Speeds and distances are in world pixels per tick, durations in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === World ===
    pub world_width: f32,
    pub world_height: f32,
    /// RNG seed used when the caller does not pick one
    pub seed: u64,

    // === Player ===
    pub player_speed: f32,
    pub start_health: u32,
    pub max_health: u32,
    pub max_garlic: u32,
    /// Practical cap for the juice counter
    pub max_carrot_juice: u32,
    pub player_invincibility_duration: f64,
    pub player_death_duration: f64,

    // === Projectiles ===
    pub bullet_speed: f32,
    pub garlic_shot_speed: f32,
    pub garlic_shot_max_travel: f32,
    pub garlic_shot_duration: f64,
    /// Cosmetic rotation, degrees per tick
    pub garlic_shot_spin: f32,

    // === Carrots ===
    pub carrot_count: u32,
    pub carrot_speed: f32,
    pub carrot_detection_radius: f32,
    pub carrot_chase_radius: f32,
    pub max_speed_multiplier: f32,
    /// Max per-axis perturbation applied to the wander direction each tick
    pub carrot_jitter: f32,
    pub carrot_respawn_delay: f64,
    pub carrot_spawn_safe_ratio: f32,

    // === Vampire ===
    pub vampire_speed: f32,
    pub vampire_death_duration: f64,
    pub vampire_respawn_time: f64,

    // === Explosions / drops ===
    pub explosion_max_flashes: u32,
    pub explosion_flash_interval: f64,
    pub item_drop_garlic_chance: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: 4000.0,
            world_height: 4000.0,
            seed: 0x5EED_CA77,

            player_speed: 5.0,
            start_health: 3,
            max_health: 5,
            max_garlic: 3,
            max_carrot_juice: 999,
            player_invincibility_duration: 1.0,
            player_death_duration: 2.0,

            bullet_speed: 10.0,
            garlic_shot_speed: 8.0,
            garlic_shot_max_travel: 300.0,
            garlic_shot_duration: 2.0,
            garlic_shot_spin: 12.0,

            carrot_count: 5,
            carrot_speed: 2.0,
            carrot_detection_radius: 300.0,
            carrot_chase_radius: 150.0,
            max_speed_multiplier: 2.5,
            carrot_jitter: 0.2,
            carrot_respawn_delay: 5.0,
            carrot_spawn_safe_ratio: 4.0,

            vampire_speed: 3.0,
            vampire_death_duration: 1.0,
            vampire_respawn_time: 5.0,

            explosion_max_flashes: 6,
            explosion_flash_interval: 0.1,
            item_drop_garlic_chance: 0.3,
        }
    }
}

impl GameConfig {
    /// Parse a JSON config and validate it
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// World dimensions as a vector
    pub fn world_size(&self) -> Vec2 {
        Vec2::new(self.world_width, self.world_height)
    }

    /// Minimum distance between a fresh carrot and the player's center
    pub fn carrot_safe_radius(&self) -> f32 {
        self.world_width.min(self.world_height) / self.carrot_spawn_safe_ratio
    }

    /// Check every tunable against its declared range and cross-field rules
    pub fn validate(&self) -> Result<(), ConfigError> {
        for tunable in TUNABLES {
            let value = (tunable.get)(self);
            if !value.is_finite() || value < tunable.min || value > tunable.max {
                return Err(ConfigError::OutOfRange {
                    name: tunable.name,
                    value,
                    min: tunable.min,
                    max: tunable.max,
                });
            }
        }

        if self.start_health == 0 || self.start_health > self.max_health {
            return Err(ConfigError::Inconsistent(format!(
                "start_health {} must be in 1..={}",
                self.start_health, self.max_health
            )));
        }
        if self.carrot_chase_radius > self.carrot_detection_radius {
            return Err(ConfigError::Inconsistent(format!(
                "carrot_chase_radius {} exceeds carrot_detection_radius {}",
                self.carrot_chase_radius, self.carrot_detection_radius
            )));
        }

        Ok(())
    }

    /// Check that carrots of the given size can always be placed outside the
    /// safe radius, wherever the player stands
    ///
    /// The farthest reachable spawn center is at least half the shorter span
    /// of the spawn area away from any point in the world.
    pub fn validate_spawn_area(&self, carrot_size: Vec2) -> Result<(), ConfigError> {
        let span = (self.world_size() - carrot_size).min_element();
        let available = span / 2.0;
        let radius = self.carrot_safe_radius();
        if span <= 0.0 || radius >= available {
            return Err(ConfigError::UnplaceableSpawns { radius, available });
        }
        Ok(())
    }
}
