//! Carrot enemies
//!
//! Carrots wander with a jittery heading, speed up as the player gets near,
//! and bolt directly away once the player is inside the chase radius. Shot
//! carrots go dormant and reappear at their spawn point after a delay.

use glam::Vec2;
use rand::Rng;

use super::geometry::{Rect, direction_vector, random_direction};
use crate::assets::Drawable;
use crate::config::GameConfig;

/// Carrot lifecycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarrotState {
    Active,
    /// Shot at `since`, waiting to respawn
    Inactive { since: f64 },
}

#[derive(Debug, Clone)]
pub struct Carrot {
    pub rect: Rect,
    pub sprite: Drawable,
    /// Unit heading
    pub direction: Vec2,
    pub speed: f32,
    pub state: CarrotState,
    /// Top-left position the carrot returns to on respawn
    pub spawn_point: Vec2,
}

impl Carrot {
    pub fn new(spawn_point: Vec2, sprite: Drawable, speed: f32, rng: &mut impl Rng) -> Self {
        Self {
            rect: Rect::new(spawn_point, sprite.size()),
            sprite,
            direction: random_direction(rng),
            speed,
            state: CarrotState::Active,
            spawn_point,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == CarrotState::Active
    }

    /// Speed factor for a given squared distance to the player
    ///
    /// 1 at or beyond the detection radius, rising linearly to
    /// `max_speed_multiplier` at distance zero.
    pub fn speed_multiplier(dist_sq: f32, config: &GameConfig) -> f32 {
        let radius = config.carrot_detection_radius;
        if radius <= 0.0 || dist_sq >= radius * radius {
            return 1.0;
        }
        let closeness = 1.0 - dist_sq.sqrt() / radius;
        (1.0 + (config.max_speed_multiplier - 1.0) * closeness)
            .clamp(1.0, config.max_speed_multiplier)
    }

    /// Advance one tick of AI and movement. Inactive carrots do nothing.
    pub fn update(&mut self, player_center: Vec2, config: &GameConfig, rng: &mut impl Rng) {
        if !self.is_active() {
            return;
        }

        let center = self.rect.center();
        let dist_sq = center.distance_squared(player_center);
        let multiplier = Self::speed_multiplier(dist_sq, config);

        let chase = config.carrot_chase_radius;
        if dist_sq < chase * chase {
            // Run straight away from the player
            self.direction = direction_vector(player_center, center);
        } else {
            let jitter = config.carrot_jitter;
            let nudge = if jitter > 0.0 {
                Vec2::new(
                    rng.random_range(-jitter..=jitter),
                    rng.random_range(-jitter..=jitter),
                )
            } else {
                Vec2::ZERO
            };
            self.direction = (self.direction + nudge).normalize_or_zero();
        }

        if self.direction == Vec2::ZERO {
            self.direction = random_direction(rng);
        }

        self.rect.pos += self.direction * self.speed * multiplier;
        self.rect.clamp_to(config.world_size());
    }

    /// Deactivate after being shot
    pub fn kill(&mut self, now: f64) {
        self.state = CarrotState::Inactive { since: now };
    }

    /// True once an inactive carrot has waited out `delay`
    pub fn ready_to_respawn(&self, now: f64, delay: f64) -> bool {
        match self.state {
            CarrotState::Inactive { since } => now >= since + delay,
            CarrotState::Active => false,
        }
    }

    /// Back to the spawn point with a fresh heading
    pub fn respawn(&mut self, rng: &mut impl Rng) {
        self.rect.pos = self.spawn_point;
        self.direction = random_direction(rng);
        self.state = CarrotState::Active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn carrot_at(pos: Vec2, rng: &mut Pcg32) -> Carrot {
        Carrot::new(pos, Drawable::placeholder(48.0, 48.0, [0; 4]), 2.0, rng)
    }

    #[test]
    fn test_multiplier_range() {
        let config = GameConfig::default();
        let r = config.carrot_detection_radius;
        assert_eq!(Carrot::speed_multiplier(r * r, &config), 1.0);
        assert_eq!(Carrot::speed_multiplier(4.0 * r * r, &config), 1.0);
        assert_eq!(Carrot::speed_multiplier(0.0, &config), config.max_speed_multiplier);
        let half = Carrot::speed_multiplier((r / 2.0) * (r / 2.0), &config);
        let expected = 1.0 + (config.max_speed_multiplier - 1.0) * 0.5;
        assert!((half - expected).abs() < 1e-5);
    }

    #[test]
    fn test_flees_inside_chase_radius() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut carrot = carrot_at(Vec2::new(1000.0, 1000.0), &mut rng);
        let before = carrot.rect.center();
        // Player 50px to the left of the carrot
        let player = before - Vec2::new(50.0, 0.0);
        carrot.update(player, &config, &mut rng);

        assert!((carrot.direction - Vec2::X).length() < 1e-6);
        let moved = carrot.rect.center() - before;
        let expected = config.carrot_speed * Carrot::speed_multiplier(2500.0, &config);
        assert!((moved.x - expected).abs() < 1e-3);
        assert!(moved.y.abs() < 1e-3);
    }

    #[test]
    fn test_wanders_far_from_player() {
        // Carrot near the corner, player far away at the world center
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut carrot = carrot_at(Vec2::new(10.0, 10.0), &mut rng);
        let before = carrot.rect.pos;
        carrot.update(Vec2::splat(2000.0), &config, &mut rng);

        let step = carrot.rect.pos - before;
        assert!(step.length() <= config.carrot_speed + 1e-4);
        assert!((carrot.direction.length() - 1.0).abs() < 1e-5);
        assert!(carrot.rect.is_within(config.world_size()));
    }

    #[test]
    fn test_inactive_does_not_move() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(2);
        let mut carrot = carrot_at(Vec2::new(500.0, 500.0), &mut rng);
        carrot.kill(1.0);
        let before = carrot.rect.pos;
        carrot.update(Vec2::splat(520.0), &config, &mut rng);
        assert_eq!(carrot.rect.pos, before);
    }

    #[test]
    fn test_respawn_timing() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut carrot = carrot_at(Vec2::new(300.0, 300.0), &mut rng);
        carrot.rect.pos = Vec2::new(900.0, 900.0);
        carrot.kill(10.0);
        assert!(!carrot.ready_to_respawn(14.999, 5.0));
        assert!(carrot.ready_to_respawn(15.0, 5.0));
        carrot.respawn(&mut rng);
        assert!(carrot.is_active());
        assert_eq!(carrot.rect.pos, Vec2::new(300.0, 300.0));
        assert!((carrot.direction.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_respawn_on_deadline_at_odd_times() {
        let mut rng = Pcg32::seed_from_u64(3);
        for killed in [59.07, 255.069, 987.654] {
            let mut carrot = carrot_at(Vec2::new(100.0, 100.0), &mut rng);
            carrot.kill(killed);
            assert!(!carrot.ready_to_respawn(killed + 4.999, 5.0));
            assert!(carrot.ready_to_respawn(killed + 5.0, 5.0), "late after kill at {killed}");
        }
    }

    proptest! {
        #[test]
        fn prop_carrot_stays_in_world(
            seed in any::<u64>(),
            px in 0.0f32..4000.0,
            py in 0.0f32..4000.0,
            sx in 0.0f32..3952.0,
            sy in 0.0f32..3952.0,
        ) {
            let config = GameConfig { carrot_speed: 40.0, ..Default::default() };
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut carrot = carrot_at(Vec2::new(sx, sy), &mut rng);
            carrot.speed = config.carrot_speed;
            for _ in 0..200 {
                carrot.update(Vec2::new(px, py), &config, &mut rng);
                prop_assert!(carrot.rect.is_within(config.world_size()));
            }
        }
    }
}
