//! Game state and core simulation types
//!
//! [`GameState`] owns every entity. The frontend reads it to draw and calls
//! the action methods with player input; only the engine mutates the
//! collections.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::carrot::Carrot;
use super::explosion::{Collectible, Explosion, ItemKind};
use super::geometry::{Rect, direction_vector, random_position_away_from};
use super::player::Player;
use super::projectile::{Bullet, GarlicShot};
use super::vampire::{Vampire, VampireState};
use crate::assets::{Drawable, Sprites};
use crate::config::GameConfig;
use crate::error::ConfigError;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Normal play
    Playing,
    /// Health hit zero; death animation running, input ignored
    Dying,
    /// Run ended, waiting for reset
    GameOver,
}

/// Things that happened during a tick, for audio and UI feedback
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    BulletFired,
    GarlicThrown,
    /// Player lost health and survived
    PlayerHit,
    /// Player lost their last health point
    PlayerDied,
    GameOver,
    CarrotKilled { pos: Vec2 },
    CarrotRespawned,
    ExplosionFinished { pos: Vec2, drop: ItemKind },
    /// Garlic hit the vampire; death effect started
    VampireKilled { pos: Vec2 },
    /// Death effect ended and the juice dropped
    VampireVanished { pos: Vec2 },
    /// Vampire touched the player
    VampireBite,
    VampireRespawned,
    ItemCollected(ItemKind),
}

/// Layer hint for draw ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RenderLayer {
    Item,
    Enemy,
    Effect,
    Projectile,
    Player,
}

/// One thing to draw this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderItem {
    pub layer: RenderLayer,
    pub rect: Rect,
    pub sprite: Drawable,
    /// Degrees
    pub rotation: f32,
    /// Draw horizontally flipped
    pub mirrored: bool,
    /// Draw tinted/blinking (damage, death effect)
    pub flash: bool,
}

impl RenderItem {
    fn plain(layer: RenderLayer, rect: Rect, sprite: Drawable) -> Self {
        Self {
            layer,
            rect,
            sprite,
            rotation: 0.0,
            mirrored: false,
            flash: false,
        }
    }
}

/// Snapshot of the stats a HUD shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub health: u32,
    pub max_health: u32,
    pub garlic: u32,
    pub max_garlic: u32,
    pub juice: u32,
    pub carrots_killed: u32,
    pub vampires_killed: u32,
    pub phase: GamePhase,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub sprites: Sprites,
    pub phase: GamePhase,
    pub player: Player,
    pub vampire: Vampire,
    pub carrots: Vec<Carrot>,
    pub bullets: Vec<Bullet>,
    /// At most one garlic shot is alive at a time
    pub garlic_shot: Option<GarlicShot>,
    pub explosions: Vec<Explosion>,
    pub collectibles: Vec<Collectible>,
    pub vampire_killed_count: u32,
    pub carrots_killed_count: u32,
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Validate the config and build a fresh game seeded with `seed`
    pub fn new(config: GameConfig, sprites: Sprites, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        config.validate_spawn_area(sprites.carrot.size().max(sprites.vampire.size()))?;
        if sprites.max_extent() >= config.world_width.min(config.world_height) {
            return Err(ConfigError::Inconsistent(format!(
                "sprites up to {}px do not fit a {}x{} world",
                sprites.max_extent(),
                config.world_width,
                config.world_height
            )));
        }

        let player = Player::new(&config, sprites.player);
        let vampire = Vampire::new(Vec2::ZERO, sprites.vampire, config.vampire_speed);
        let mut state = Self {
            player,
            vampire,
            phase: GamePhase::Playing,
            carrots: Vec::with_capacity(config.carrot_count as usize),
            bullets: Vec::new(),
            garlic_shot: None,
            explosions: Vec::new(),
            collectibles: Vec::new(),
            vampire_killed_count: 0,
            carrots_killed_count: 0,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            config,
            sprites,
        };
        state.populate();
        Ok(state)
    }

    /// Build with the seed stored in the config
    pub fn from_config(config: GameConfig, sprites: Sprites) -> Result<Self, ConfigError> {
        let seed = config.seed;
        Self::new(config, sprites, seed)
    }

    pub fn world_size(&self) -> Vec2 {
        self.config.world_size()
    }

    /// Start over: player back to spawn, enemies re-placed, everything
    /// transient discarded
    pub fn reset(&mut self) {
        self.player.reset();
        self.bullets.clear();
        self.garlic_shot = None;
        self.explosions.clear();
        self.collectibles.clear();
        self.events.clear();
        self.vampire_killed_count = 0;
        self.carrots_killed_count = 0;
        self.phase = GamePhase::Playing;
        self.populate();
        log::info!("Game reset: {} carrots", self.carrots.len());
    }

    /// Place the vampire and a fresh set of carrots away from the player
    fn populate(&mut self) {
        let pos = self.safe_spawn(self.vampire.rect.size);
        self.vampire.deactivate(0.0);
        self.vampire.respawn(pos);

        self.carrots.clear();
        for _ in 0..self.config.carrot_count {
            let spawn = self.safe_spawn(self.sprites.carrot.size());
            let carrot = Carrot::new(spawn, self.sprites.carrot, self.config.carrot_speed, &mut self.rng);
            self.carrots.push(carrot);
        }
    }

    /// Random top-left for a box of `size` outside the player's safe radius
    pub(crate) fn safe_spawn(&mut self, size: Vec2) -> Vec2 {
        random_position_away_from(
            &mut self.rng,
            size,
            self.config.world_size(),
            self.player.center(),
            self.config.carrot_safe_radius(),
        )
    }

    fn accepts_input(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Apply one frame of movement input (each axis -1, 0 or 1)
    pub fn move_player(&mut self, dx: i8, dy: i8) {
        if !self.accepts_input() {
            return;
        }
        let world = self.world_size();
        self.player.move_by(dx, dy, world);
    }

    /// Aim from the player's center at `target`; facing direction if the
    /// target is the center itself
    fn aim(&self, target: Vec2) -> Vec2 {
        let dir = direction_vector(self.player.center(), target);
        if dir == Vec2::ZERO { self.player.facing() } else { dir }
    }

    /// Fire a bullet toward `target`. Returns false if the player can't act.
    pub fn fire_bullet(&mut self, target: Vec2) -> bool {
        if !self.accepts_input() {
            return false;
        }
        let bullet = Bullet::new(
            self.player.center(),
            self.aim(target),
            self.config.bullet_speed,
            self.sprites.bullet,
        );
        self.add_bullet(bullet);
        self.events.push(GameEvent::BulletFired);
        true
    }

    /// Throw garlic toward `target`
    ///
    /// Costs one garlic. Refused while another shot is alive or when out of
    /// garlic.
    pub fn throw_garlic(&mut self, target: Vec2, now: f64) -> bool {
        if !self.accepts_input() || self.garlic_shot.is_some() {
            return false;
        }
        if !self.player.use_garlic() {
            log::debug!("No garlic left to throw");
            return false;
        }
        let shot = GarlicShot::new(
            self.player.center(),
            self.aim(target),
            now,
            &self.config,
            self.sprites.garlic_shot,
        );
        self.garlic_shot = Some(shot);
        self.events.push(GameEvent::GarlicThrown);
        true
    }

    pub fn add_bullet(&mut self, bullet: Bullet) {
        self.bullets.push(bullet);
    }

    /// Spawn an explosion centered on `center`
    pub fn add_explosion(&mut self, center: Vec2, now: f64) {
        self.explosions.push(Explosion::new(
            center,
            now,
            self.config.explosion_max_flashes,
            self.config.explosion_flash_interval,
            self.sprites.explosion,
        ));
    }

    /// Drop an item centered on `center`
    pub fn add_collectible(&mut self, center: Vec2, kind: ItemKind) {
        self.collectibles
            .push(Collectible::new(center, kind, kind.sprite(&self.sprites)));
    }

    /// Hand over everything that happened since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn active_carrot_count(&self) -> usize {
        self.carrots.iter().filter(|c| c.is_active()).count()
    }

    pub fn hud(&self) -> Hud {
        Hud {
            health: self.player.health,
            max_health: self.player.max_health,
            garlic: self.player.garlic_count,
            max_garlic: self.player.max_garlic,
            juice: self.player.carrot_juice_count,
            carrots_killed: self.carrots_killed_count,
            vampires_killed: self.vampire_killed_count,
            phase: self.phase,
        }
    }

    /// Everything visible this frame, back to front
    pub fn render_items(&self) -> impl Iterator<Item = RenderItem> + '_ {
        let items = self
            .collectibles
            .iter()
            .map(|c| RenderItem::plain(RenderLayer::Item, c.rect, c.sprite));

        let carrots = self
            .carrots
            .iter()
            .filter(|c| c.is_active())
            .map(|c| RenderItem {
                mirrored: c.direction.x < 0.0,
                ..RenderItem::plain(RenderLayer::Enemy, c.rect, c.sprite)
            });

        let vampire = match self.vampire.state {
            VampireState::Inactive { .. } => None,
            state => Some(RenderItem {
                flash: matches!(state, VampireState::Dying { .. }),
                ..RenderItem::plain(RenderLayer::Enemy, self.vampire.rect, self.vampire.sprite)
            }),
        };

        let explosions = self
            .explosions
            .iter()
            .filter(|e| e.active)
            .map(|e| RenderItem {
                flash: !e.visible(),
                ..RenderItem::plain(RenderLayer::Effect, e.rect, e.sprite)
            });

        let bullets = self.bullets.iter().map(|b| RenderItem {
            rotation: b.angle,
            ..RenderItem::plain(RenderLayer::Projectile, b.rect, b.sprite)
        });

        let garlic = self.garlic_shot.iter().map(|g| RenderItem {
            rotation: g.rotation,
            ..RenderItem::plain(RenderLayer::Projectile, g.rect, g.sprite)
        });

        let player = std::iter::once(RenderItem {
            mirrored: self.player.facing_left,
            flash: self.player.invincible || self.player.death_effect_active,
            ..RenderItem::plain(RenderLayer::Player, self.player.rect, self.player.sprite)
        });

        items
            .chain(carrots)
            .chain(vampire)
            .chain(explosions)
            .chain(bullets)
            .chain(garlic)
            .chain(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_game(seed: u64) -> GameState {
        GameState::new(GameConfig::default(), Sprites::default(), seed).unwrap()
    }

    fn assert_initial_invariants(state: &GameState) {
        let config = &state.config;
        assert_eq!(state.player.health, config.start_health);
        assert_eq!(state.player.garlic_count, 0);
        assert_eq!(state.player.carrot_juice_count, 0);
        assert_eq!(state.carrots.len(), config.carrot_count as usize);
        assert_eq!(state.active_carrot_count(), config.carrot_count as usize);
        assert!(state.vampire.is_active());
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.bullets.is_empty());
        assert!(state.garlic_shot.is_none());
        assert!(state.explosions.is_empty());
        assert!(state.collectibles.is_empty());

        let safe = config.carrot_safe_radius();
        for carrot in &state.carrots {
            assert!(carrot.rect.center().distance(state.player.center()) >= safe);
            assert!(carrot.rect.is_within(config.world_size()));
            assert_eq!(carrot.rect.pos, carrot.spawn_point);
        }
    }

    #[test]
    fn test_new_game() {
        assert_initial_invariants(&new_game(12345));
    }

    #[test]
    fn test_reset_restores_initial_invariants() {
        let mut state = new_game(42);
        state.player.take_damage(2, 1.0);
        state.player.add_garlic(2);
        state.player.add_juice(3);
        state.carrots[0].kill(1.0);
        state.vampire.start_death(1.0);
        state.fire_bullet(Vec2::ZERO);
        state.add_explosion(Vec2::splat(100.0), 1.0);
        state.add_collectible(Vec2::splat(100.0), ItemKind::Health);
        state.vampire_killed_count = 4;
        state.phase = GamePhase::GameOver;

        state.reset();
        assert_initial_invariants(&state);
        assert_eq!(state.vampire_killed_count, 0);
        assert!(state.player.take_health_changed());
    }

    #[test]
    fn test_rejects_bad_config() {
        let config = GameConfig {
            carrot_spawn_safe_ratio: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            GameState::new(config, Sprites::default(), 1),
            Err(ConfigError::UnplaceableSpawns { .. })
        ));
    }

    #[test]
    fn test_fire_bullet_aims_at_target() {
        let mut state = new_game(1);
        let center = state.player.center();
        assert!(state.fire_bullet(center + Vec2::new(0.0, -100.0)));
        let bullet = &state.bullets[0];
        assert_eq!(bullet.rect.center(), center);
        assert!((bullet.vel - Vec2::new(0.0, -state.config.bullet_speed)).length() < 1e-4);
        assert!((bullet.angle + 90.0).abs() < 1e-3);
        assert_eq!(state.take_events(), vec![GameEvent::BulletFired]);
    }

    #[test]
    fn test_fire_at_own_center_uses_facing() {
        let mut state = new_game(1);
        state.move_player(-1, 0);
        let center = state.player.center();
        state.fire_bullet(center);
        assert!(state.bullets[0].vel.x < 0.0);
    }

    #[test]
    fn test_throw_garlic_rules() {
        let mut state = new_game(1);
        let target = Vec2::ZERO;
        // No garlic yet
        assert!(!state.throw_garlic(target, 0.0));

        state.player.add_garlic(2);
        assert!(state.throw_garlic(target, 0.0));
        assert_eq!(state.player.garlic_count, 1);
        // Only one shot alive at a time
        assert!(!state.throw_garlic(target, 0.1));
        assert_eq!(state.player.garlic_count, 1);
    }

    #[test]
    fn test_input_ignored_when_not_playing() {
        let mut state = new_game(1);
        state.phase = GamePhase::Dying;
        let before = state.player.rect.pos;
        state.move_player(1, 1);
        assert_eq!(state.player.rect.pos, before);
        assert!(!state.fire_bullet(Vec2::ZERO));
    }

    #[test]
    fn test_render_items_cover_live_entities() {
        let mut state = new_game(9);
        state.fire_bullet(Vec2::ZERO);
        state.add_collectible(Vec2::splat(300.0), ItemKind::Juice);
        state.carrots[0].kill(0.0);

        let items: Vec<_> = state.render_items().collect();
        let carrots = state.config.carrot_count as usize - 1;
        // item + carrots + vampire + bullet + player
        assert_eq!(items.len(), 1 + carrots + 1 + 1 + 1);
        assert_eq!(items.last().map(|i| i.layer), Some(RenderLayer::Player));

        state.vampire.state = VampireState::Inactive { since: 0.0 };
        assert_eq!(state.render_items().count(), items.len() - 1);
    }

    #[test]
    fn test_explosion_flash_phase_is_flagged() {
        let mut state = new_game(4);
        state.add_explosion(Vec2::splat(500.0), 0.0);
        let flash = |state: &GameState| {
            state
                .render_items()
                .find(|i| i.layer == RenderLayer::Effect)
                .map(|i| i.flash)
        };
        assert_eq!(flash(&state), Some(false));

        let interval = state.config.explosion_flash_interval;
        state.explosions[0].update(interval);
        assert_eq!(flash(&state), Some(true));

        state.explosions[0].active = false;
        assert_eq!(flash(&state), None);
    }

    #[test]
    fn test_hud_snapshot() {
        let mut state = new_game(3);
        state.player.add_garlic(1);
        let hud = state.hud();
        assert_eq!(hud.health, 3);
        assert_eq!(hud.garlic, 1);
        assert_eq!(hud.phase, GamePhase::Playing);
    }
}
