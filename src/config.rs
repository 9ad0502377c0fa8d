//! Settings for a [`Game`][crate::Game], loadable from RON.

use std::path::Path;

use crate::error::{Error, Result};

/// Timing and simulation settings of a game.
///
/// Every field has a default, so a config file only needs to list what it changes:
/// ```
/// let config = ribs::GameConfig::from_ron_str("(fps: 30)").unwrap();
/// assert_eq!(config.fps, 30);
/// assert_eq!(config.damping, ribs::physics::DEFAULT_DAMPING);
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Name of the game, used in log messages.
    pub title: String,
    /// Fixed simulation ticks per second.
    pub fps: u32,
    /// Fraction of velocity kept after one second of damping.
    pub damping: f64,
    /// Upper bound on how much lag the game loop tries to catch up on at once.
    /// Anything beyond this is dropped to avoid a spiral of death.
    pub max_frame_skip_nanos: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            title: String::from("ribs"),
            fps: 60,
            damping: crate::physics::DEFAULT_DAMPING,
            max_frame_skip_nanos: 1_000_000_000 / 8,
        }
    }
}

impl GameConfig {
    /// Parse and validate a config from a RON string.
    pub fn from_ron_str(s: &str) -> Result<Self> {
        let config: GameConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_ron_str(&text)?;
        log::info!(
            "Loaded config for {:?} from {}",
            config.title,
            path.display()
        );
        Ok(config)
    }

    /// Check that the values make sense together.
    ///
    /// A config that passes this can be handed to [`Game::new`][crate::Game::new]
    /// without anything dividing by zero later.
    pub fn validate(&self) -> Result<()> {
        if self.fps == 0 {
            return Err(Error::InvalidConfig("fps must be greater than zero"));
        }
        if self.nanos_per_frame() == 0 {
            return Err(Error::InvalidConfig("fps must be at most one billion"));
        }
        if self.damping.is_nan() || self.damping < 0.0 {
            return Err(Error::InvalidConfig("damping must be non-negative"));
        }
        if u128::from(self.max_frame_skip_nanos) < self.nanos_per_frame() {
            return Err(Error::InvalidConfig(
                "max_frame_skip_nanos must fit at least one frame",
            ));
        }
        Ok(())
    }

    /// Length of one fixed tick in seconds.
    #[inline]
    pub fn dt_fixed(&self) -> f64 {
        1.0 / self.fps as f64
    }

    /// Length of one fixed tick in nanoseconds.
    #[inline]
    pub fn nanos_per_frame(&self) -> u128 {
        1_000_000_000 / u128::from(self.fps)
    }
}
