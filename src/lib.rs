//! Carrot Hunt - a top-down arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, spawning)
//! - `config`: Gameplay tunables, loaded from JSON and validated
//! - `tuning`: Declarative table of adjustable tunables
//! - `assets`: Drawable handles the frontend passes in
//! - `audio`: Event-to-sound mapping and the playback capability
//! - `app`: Application context tying simulation, audio and HUD together

pub mod app;
pub mod assets;
pub mod audio;
pub mod config;
pub mod error;
pub mod sim;
pub mod tuning;

pub use app::{App, FrameInput};
pub use assets::{Drawable, ImageToken, Sprites};
pub use config::GameConfig;
pub use error::ConfigError;
pub use sim::GameState;
