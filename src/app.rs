//! Application context
//!
//! One [`App`] owns the simulation, the audio backend and the cached HUD.
//! The frontend builds it once and calls [`App::frame`] every rendered frame
//! with sampled input and the current time.

use glam::Vec2;

use crate::audio::{AudioSink, SoundEffect};
use crate::sim::{GamePhase, GameState, Hud};

/// Player input sampled for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Horizontal movement (-1, 0 or 1)
    pub dx: i8,
    /// Vertical movement (-1, 0 or 1)
    pub dy: i8,
    /// Fire a bullet at this world point
    pub fire: Option<Vec2>,
    /// Throw garlic at this world point
    pub throw_garlic: Option<Vec2>,
    /// Start a new game
    pub reset: bool,
}

/// Distance at which the autopilot runs from the vampire
const FLEE_DISTANCE: f32 = 400.0;
/// Max range the autopilot shoots carrots at
const SHOOT_RANGE: f32 = 600.0;
/// Frames between autopilot shots
const SHOOT_EVERY: u64 = 8;

impl FrameInput {
    /// Demo-mode input: run from the vampire, grab items, hunt carrots
    pub fn autopilot(state: &GameState, frame: u64) -> Self {
        let me = state.player.center();
        let mut input = Self::default();

        if state.phase == GamePhase::GameOver {
            input.reset = true;
            return input;
        }

        let vampire = state
            .vampire
            .is_active()
            .then(|| state.vampire.rect.center());
        let nearest_item = nearest(me, state.collectibles.iter().map(|c| c.rect.center()));
        let nearest_carrot = nearest(
            me,
            state
                .carrots
                .iter()
                .filter(|c| c.is_active())
                .map(|c| c.rect.center()),
        );

        let heading = match (vampire, nearest_item, nearest_carrot) {
            (Some(v), _, _) if v.distance(me) < FLEE_DISTANCE => me - v,
            (_, Some(item), _) => item - me,
            (_, _, Some(carrot)) => carrot - me,
            _ => Vec2::ZERO,
        };
        input.dx = axis(heading.x);
        input.dy = axis(heading.y);

        if let Some(carrot) = nearest_carrot
            && carrot.distance(me) < SHOOT_RANGE
            && frame % SHOOT_EVERY == 0
        {
            input.fire = Some(carrot);
        }

        if let Some(v) = vampire
            && v.distance(me) < state.config.garlic_shot_max_travel
            && state.player.garlic_count > 0
            && state.garlic_shot.is_none()
        {
            input.throw_garlic = Some(v);
        }

        input
    }
}

fn nearest(from: Vec2, points: impl Iterator<Item = Vec2>) -> Option<Vec2> {
    points.min_by(|a, b| {
        a.distance_squared(from)
            .partial_cmp(&b.distance_squared(from))
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}

/// Deadzoned sign of one heading component
fn axis(v: f32) -> i8 {
    if v > 1.0 {
        1
    } else if v < -1.0 {
        -1
    } else {
        0
    }
}

/// The running game: simulation plus frontend-facing state
pub struct App<A: AudioSink> {
    pub state: GameState,
    pub audio: A,
    hud: Hud,
    frames: u64,
}

impl<A: AudioSink> App<A> {
    pub fn new(state: GameState, audio: A) -> Self {
        let hud = state.hud();
        Self {
            state,
            audio,
            hud,
            frames: 0,
        }
    }

    /// Stats as of the last frame
    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Apply input, advance the simulation, play sounds
    ///
    /// Returns true when the HUD changed this frame.
    pub fn frame(&mut self, now: f64, input: &FrameInput) -> bool {
        self.frames += 1;

        if input.reset {
            self.state.reset();
        }

        self.state.move_player(input.dx, input.dy);
        if let Some(target) = input.fire {
            self.state.fire_bullet(target);
        }
        if let Some(target) = input.throw_garlic {
            self.state.throw_garlic(target, now);
        }

        self.state.update(now);

        for event in self.state.take_events() {
            if let Some(effect) = SoundEffect::for_event(&event) {
                self.audio.play(effect);
            }
        }

        let player = &mut self.state.player;
        // Read all three flags; each read clears its own
        let flagged = [
            player.take_health_changed(),
            player.take_garlic_changed(),
            player.take_juice_changed(),
        ]
        .contains(&true);

        let fresh = self.state.hud();
        let changed = flagged || fresh != self.hud;
        self.hud = fresh;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Sprites;
    use crate::config::GameConfig;
    use crate::sim::{ItemKind, VampireState};

    fn app() -> App<Vec<SoundEffect>> {
        let state = GameState::new(GameConfig::default(), Sprites::default(), 77).unwrap();
        App::new(state, Vec::new())
    }

    fn park_vampire(app: &mut App<Vec<SoundEffect>>) {
        app.state.vampire.state = VampireState::Inactive { since: 0.0 };
        app.state.config.vampire_respawn_time = 1e9;
    }

    #[test]
    fn test_fire_plays_sound() {
        let mut app = app();
        park_vampire(&mut app);
        let input = FrameInput {
            fire: Some(Vec2::ZERO),
            ..Default::default()
        };
        app.frame(0.0, &input);
        assert_eq!(app.audio, vec![SoundEffect::Shoot]);
        assert_eq!(app.state.bullets.len(), 1);
    }

    #[test]
    fn test_pickup_refreshes_hud_once() {
        let mut app = app();
        park_vampire(&mut app);
        let center = app.state.player.center();
        app.state.add_collectible(center, ItemKind::Garlic);

        assert!(app.frame(0.0, &FrameInput::default()));
        assert_eq!(app.hud().garlic, 1);
        assert!(app.audio.contains(&SoundEffect::Pickup));
        // Notification is edge-triggered
        assert!(!app.frame(0.016, &FrameInput::default()));
    }

    #[test]
    fn test_reset_input() {
        let mut app = app();
        app.state.player.health = 1;
        app.state.phase = GamePhase::GameOver;
        app.frame(1.0, &FrameInput {
            reset: true,
            ..Default::default()
        });
        assert_eq!(app.state.phase, GamePhase::Playing);
        assert_eq!(app.hud().health, app.state.config.start_health);
    }

    #[test]
    fn test_autopilot_flees_vampire() {
        let mut app = app();
        let me = app.state.player.rect.pos;
        app.state.vampire.respawn(me + Vec2::new(200.0, 0.0));
        let input = FrameInput::autopilot(&app.state, 1);
        assert_eq!(input.dx, -1);
    }

    #[test]
    fn test_autopilot_resets_after_game_over() {
        let mut app = app();
        app.state.phase = GamePhase::GameOver;
        assert!(FrameInput::autopilot(&app.state, 1).reset);
    }

    #[test]
    fn test_autopilot_session_stays_consistent() {
        let mut app = app();
        for frame in 0..3_000u32 {
            let now = f64::from(frame) / 60.0;
            let input = FrameInput::autopilot(&app.state, u64::from(frame));
            app.frame(now, &input);
            let world = app.state.world_size();
            assert!(app.state.player.rect.is_within(world));
            assert!(app.state.player.health <= app.state.player.max_health);
            assert!(app.state.player.garlic_count <= app.state.player.max_garlic);
            for carrot in &app.state.carrots {
                assert!(carrot.rect.is_within(world));
            }
        }
        assert_eq!(app.frames(), 3_000);
    }
}
