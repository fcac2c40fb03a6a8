//! Per-frame simulation step
//!
//! [`tick`] advances the world once for a caller-supplied timestamp. The
//! stages run in a fixed order; later stages see the results of earlier ones
//! within the same tick.

use rand::Rng;

use super::explosion::ItemKind;
use super::player::DamageOutcome;
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the game by one frame at absolute time `now` (seconds)
pub fn tick(state: &mut GameState, now: f64) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    update_player(state, now);
    update_carrots(state);
    update_bullets(state, now);
    respawn_carrots(state, now);
    update_garlic(state, now);
    update_vampire(state, now);
    finish_vampire_death(state, now);
    vampire_bite(state, now);
    update_explosions(state, now);
    collect_items(state);
}

impl GameState {
    /// Advance the game by one frame; see [`tick`]
    pub fn update(&mut self, now: f64) {
        tick(self, now);
    }
}

/// Invincibility window and the death animation timer
fn update_player(state: &mut GameState, now: f64) {
    state.player.update_invincibility(now);

    if state.phase == GamePhase::Dying
        && now >= state.player.death_effect_start + state.config.player_death_duration
    {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver);
        log::info!(
            "Game over: {} carrots, {} vampires, {} juice",
            state.carrots_killed_count,
            state.vampire_killed_count,
            state.player.carrot_juice_count
        );
    }
}

fn update_carrots(state: &mut GameState) {
    let player_center = state.player.center();
    for carrot in &mut state.carrots {
        carrot.update(player_center, &state.config, &mut state.rng);
    }
}

/// Move bullets, drop the ones that left the world, resolve carrot hits
///
/// A bullet kills at most one carrot and is consumed by the hit.
fn update_bullets(state: &mut GameState, now: f64) {
    let world = state.world_size();
    for bullet in &mut state.bullets {
        bullet.update();
    }
    state.bullets.retain(|b| b.in_bounds(world));

    let mut kills = Vec::new();
    let carrots = &mut state.carrots;
    state.bullets.retain(|bullet| {
        let hit = carrots
            .iter_mut()
            .find(|c| c.is_active() && c.rect.intersects(&bullet.rect));
        match hit {
            Some(carrot) => {
                carrot.kill(now);
                kills.push(carrot.rect.center());
                false
            }
            None => true,
        }
    });

    for pos in kills {
        log::debug!("Carrot shot at ({:.0}, {:.0})", pos.x, pos.y);
        state.carrots_killed_count = state.carrots_killed_count.saturating_add(1);
        state.add_explosion(pos, now);
        state.events.push(GameEvent::CarrotKilled { pos });
    }
}

fn respawn_carrots(state: &mut GameState, now: f64) {
    let delay = state.config.carrot_respawn_delay;
    for carrot in &mut state.carrots {
        if carrot.ready_to_respawn(now, delay) {
            carrot.respawn(&mut state.rng);
            state.events.push(GameEvent::CarrotRespawned);
        }
    }
}

/// Fly the garlic shot, expire it, or let it hit the vampire
fn update_garlic(state: &mut GameState, now: f64) {
    let Some(mut shot) = state.garlic_shot.take() else {
        return;
    };

    shot.update(state.world_size());

    if shot.is_expired(now) {
        return;
    }

    if state.vampire.is_active() && shot.rect.intersects(&state.vampire.rect) {
        state.vampire.start_death(now);
        state.vampire_killed_count = state.vampire_killed_count.saturating_add(1);
        let pos = state.vampire.rect.center();
        log::info!("Vampire hit by garlic ({} total)", state.vampire_killed_count);
        state.events.push(GameEvent::VampireKilled { pos });
        return;
    }

    state.garlic_shot = Some(shot);
}

/// Chase while active; come back after the respawn delay while inactive
fn update_vampire(state: &mut GameState, now: f64) {
    let world = state.world_size();
    if state.vampire.is_active() {
        let target = state.player.rect;
        state.vampire.chase(&target, world);
    } else if state.vampire.ready_to_respawn(now, state.config.vampire_respawn_time) {
        let pos = state.safe_spawn(state.vampire.rect.size);
        state.vampire.respawn(pos);
        log::info!("Vampire respawned at ({:.0}, {:.0})", pos.x, pos.y);
        state.events.push(GameEvent::VampireRespawned);
    }
}

/// End the death effect and drop juice where the vampire fell
fn finish_vampire_death(state: &mut GameState, now: f64) {
    if let Some(pos) = state
        .vampire
        .finish_death(now, state.config.vampire_death_duration)
    {
        state.add_collectible(pos, ItemKind::Juice);
        state.events.push(GameEvent::VampireVanished { pos });
    }
}

/// Contact with the player hurts them and sends the vampire away
fn vampire_bite(state: &mut GameState, now: f64) {
    if !state.vampire.is_active() || !state.vampire.rect.intersects(&state.player.rect) {
        return;
    }

    match state.player.take_damage(1, now) {
        DamageOutcome::Hurt => state.events.push(GameEvent::PlayerHit),
        DamageOutcome::Killed => {
            state.player.start_death(now);
            state.phase = GamePhase::Dying;
            state.events.push(GameEvent::PlayerDied);
            log::info!("Player died");
        }
        DamageOutcome::Ignored => {}
    }

    state.vampire.deactivate(now);
    state.events.push(GameEvent::VampireBite);
}

/// Count explosion flashes; finished explosions leave an item behind
fn update_explosions(state: &mut GameState, now: f64) {
    let mut drops = Vec::new();
    for explosion in &mut state.explosions {
        if explosion.update(now) {
            drops.push(explosion.rect.center());
        }
    }
    state.explosions.retain(|e| e.active);

    let chance = state.config.item_drop_garlic_chance;
    for pos in drops {
        let drop = if state.rng.random_bool(chance) {
            ItemKind::Garlic
        } else {
            ItemKind::Health
        };
        state.add_collectible(pos, drop);
        state.events.push(GameEvent::ExplosionFinished { pos, drop });
    }
}

/// Apply and remove every item the (living) player is touching
fn collect_items(state: &mut GameState) {
    if !state.player.is_alive() {
        return;
    }

    let player = &mut state.player;
    let events = &mut state.events;
    state.collectibles.retain(|item| {
        if !item.rect.intersects(&player.rect) {
            return true;
        }
        match item.kind {
            ItemKind::Health => {
                player.heal(1);
            }
            ItemKind::Garlic => {
                player.add_garlic(1);
            }
            ItemKind::Juice => player.add_juice(1),
        }
        log::debug!("Picked up {:?}", item.kind);
        events.push(GameEvent::ItemCollected(item.kind));
        false
    });
}
