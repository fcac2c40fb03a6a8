//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time comes from the caller, never from a clock
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod carrot;
pub mod explosion;
pub mod geometry;
pub mod player;
pub mod projectile;
pub mod state;
pub mod tick;
pub mod vampire;

pub use carrot::{Carrot, CarrotState};
pub use explosion::{Collectible, Explosion, ItemKind};
pub use geometry::{Rect, direction_vector, seek_with_bounds};
pub use player::{DamageOutcome, Player};
pub use projectile::{Bullet, GarlicFlight, GarlicShot};
pub use state::{GameEvent, GamePhase, GameState, Hud, RenderItem, RenderLayer};
pub use tick::tick;
pub use vampire::{Vampire, VampireState};
