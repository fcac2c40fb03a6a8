//! Data-driven game balance
//!
//! A static table of every numeric tunable in [`GameConfig`], with the range
//! a settings screen may move it through. Validation uses the same bounds.

use crate::config::GameConfig;

/// One adjustable config value
#[derive(Clone, Copy)]
pub struct Tunable {
    /// Config key (matches the JSON field name)
    pub name: &'static str,
    pub get: fn(&GameConfig) -> f64,
    pub set: fn(&mut GameConfig, f64),
    pub min: f64,
    pub max: f64,
    /// Increment used by [`Tunable::adjust`]
    pub step: f64,
}

impl std::fmt::Debug for Tunable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tunable")
            .field("name", &self.name)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("step", &self.step)
            .finish()
    }
}

impl Tunable {
    /// Move the value by `steps` increments, saturating at the bounds
    pub fn adjust(&self, config: &mut GameConfig, steps: i32) {
        let value = (self.get)(config) + self.step * f64::from(steps);
        (self.set)(config, value.clamp(self.min, self.max));
    }

    /// Current value as a fraction of its range (for slider widgets)
    pub fn fraction(&self, config: &GameConfig) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        (((self.get)(config) - self.min) / span).clamp(0.0, 1.0)
    }
}

macro_rules! tunable {
    (float $field:ident as $ty:ty, $min:expr, $max:expr, $step:expr) => {
        Tunable {
            name: stringify!($field),
            get: |c| f64::from(c.$field),
            set: |c, v| c.$field = v as $ty,
            min: $min,
            max: $max,
            step: $step,
        }
    };
    (int $field:ident, $min:expr, $max:expr, $step:expr) => {
        Tunable {
            name: stringify!($field),
            get: |c| f64::from(c.$field),
            set: |c, v| c.$field = v.round().max(0.0) as u32,
            min: $min,
            max: $max,
            step: $step,
        }
    };
}

/// Every tunable, in settings-screen order
pub static TUNABLES: &[Tunable] = &[
    tunable!(float world_width as f32, 200.0, 20_000.0, 100.0),
    tunable!(float world_height as f32, 200.0, 20_000.0, 100.0),
    tunable!(float player_speed as f32, 0.5, 50.0, 0.5),
    tunable!(int start_health, 1.0, 100.0, 1.0),
    tunable!(int max_health, 1.0, 100.0, 1.0),
    tunable!(int max_garlic, 0.0, 99.0, 1.0),
    tunable!(int max_carrot_juice, 1.0, 1_000_000.0, 1.0),
    tunable!(float player_invincibility_duration as f64, 0.0, 10.0, 0.1),
    tunable!(float player_death_duration as f64, 0.0, 10.0, 0.1),
    tunable!(float bullet_speed as f32, 0.5, 100.0, 0.5),
    tunable!(float garlic_shot_speed as f32, 0.5, 100.0, 0.5),
    tunable!(float garlic_shot_max_travel as f32, 0.0, 5_000.0, 10.0),
    tunable!(float garlic_shot_duration as f64, 0.0, 30.0, 0.1),
    tunable!(float garlic_shot_spin as f32, 0.0, 360.0, 1.0),
    tunable!(int carrot_count, 0.0, 500.0, 1.0),
    tunable!(float carrot_speed as f32, 0.0, 50.0, 0.5),
    tunable!(float carrot_detection_radius as f32, 0.0, 5_000.0, 10.0),
    tunable!(float carrot_chase_radius as f32, 0.0, 5_000.0, 10.0),
    tunable!(float max_speed_multiplier as f32, 1.0, 10.0, 0.1),
    tunable!(float carrot_jitter as f32, 0.0, 2.0, 0.05),
    tunable!(float carrot_respawn_delay as f64, 0.0, 120.0, 0.5),
    tunable!(float carrot_spawn_safe_ratio as f32, 1.0, 100.0, 0.5),
    tunable!(float vampire_speed as f32, 0.0, 50.0, 0.5),
    tunable!(float vampire_death_duration as f64, 0.0, 30.0, 0.1),
    tunable!(float vampire_respawn_time as f64, 0.0, 120.0, 0.5),
    tunable!(int explosion_max_flashes, 1.0, 100.0, 1.0),
    tunable!(float explosion_flash_interval as f64, 0.01, 5.0, 0.01),
    tunable!(float item_drop_garlic_chance as f64, 0.0, 1.0, 0.05),
];

/// Look up a tunable by its config key
pub fn find(name: &str) -> Option<&'static Tunable> {
    TUNABLES.iter().find(|t| t.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        for (i, a) in TUNABLES.iter().enumerate() {
            for b in &TUNABLES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut config = GameConfig::default();
        let speed = find("carrot_speed").unwrap();
        (speed.set)(&mut config, 3.5);
        assert_eq!(config.carrot_speed, 3.5);
        assert_eq!((speed.get)(&config), 3.5);
    }

    #[test]
    fn test_adjust_saturates() {
        let mut config = GameConfig::default();
        let chance = find("item_drop_garlic_chance").unwrap();
        chance.adjust(&mut config, 1_000);
        assert_eq!(config.item_drop_garlic_chance, 1.0);
        chance.adjust(&mut config, -1_000);
        assert_eq!(config.item_drop_garlic_chance, 0.0);
    }

    #[test]
    fn test_int_tunable_rounds() {
        let mut config = GameConfig::default();
        let count = find("carrot_count").unwrap();
        (count.set)(&mut config, 7.6);
        assert_eq!(config.carrot_count, 8);
        count.adjust(&mut config, -2);
        assert_eq!(config.carrot_count, 6);
    }

    #[test]
    fn test_fraction() {
        let config = GameConfig {
            max_speed_multiplier: 5.5,
            ..Default::default()
        };
        let mult = find("max_speed_multiplier").unwrap();
        assert!((mult.fraction(&config) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_name() {
        assert!(find("ball_gravity").is_none());
    }
}
