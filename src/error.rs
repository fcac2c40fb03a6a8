//! Configuration errors
//!
//! The simulation itself never fails once constructed; everything that can go
//! wrong is caught while loading and validating a [`GameConfig`].
//!
//! [`GameConfig`]: crate::config::GameConfig

use thiserror::Error;

/// Reasons a configuration is rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for [`crate::config::GameConfig`]
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A tunable lies outside its allowed range
    #[error("{name} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Two tunables contradict each other
    #[error("inconsistent config: {0}")]
    Inconsistent(String),

    /// Carrots could never be placed outside the player's safe radius
    #[error("carrot safe radius {radius} cannot be satisfied (at most {available} available)")]
    UnplaceableSpawns { radius: f32, available: f32 },
}
