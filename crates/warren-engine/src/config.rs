//! Maze configuration, validation, and level resolution.
//!
//! [`MazeConfig`] carries everything `Maze::create` needs besides the
//! level number. [`validate()`](MazeConfig::validate) checks structural
//! invariants; [`resolve_level()`](MazeConfig::resolve_level) applies the
//! [`LevelPolicy`] to a requested level.

use std::error::Error;
use std::fmt;

use log::warn;
use warren_core::Level;
use warren_grid::Dimensions;

/// Environment variable holding a `u64` generation seed.
pub const ENV_SEED: &str = "WARREN_SEED";
/// Environment variable selecting the level policy (`reject` or `clamp`).
pub const ENV_LEVEL_POLICY: &str = "WARREN_LEVEL_POLICY";
/// Environment variable holding the highest accepted level.
pub const ENV_MAX_LEVEL: &str = "WARREN_MAX_LEVEL";

/// Default upper bound on accepted levels (a 2005x2005 grid).
pub const DEFAULT_MAX_LEVEL: u32 = 1000;

// ── LevelPolicy ────────────────────────────────────────────────────

/// What to do with a level outside `1..=max_level`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LevelPolicy {
    /// Fail with [`ConfigError::LevelZero`] or [`ConfigError::LevelAboveMax`].
    #[default]
    Reject,
    /// Clamp into `1..=max_level` and log a warning.
    Clamp,
}

impl LevelPolicy {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Some(Self::Reject),
            "clamp" => Some(Self::Clamp),
            _ => None,
        }
    }
}

impl fmt::Display for LevelPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reject => f.write_str("reject"),
            Self::Clamp => f.write_str("clamp"),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a [`MazeConfig`] or resolving a level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Level 0 requested under [`LevelPolicy::Reject`].
    LevelZero,
    /// Level above `max_level` requested under [`LevelPolicy::Reject`].
    LevelAboveMax {
        /// The requested level.
        level: u32,
        /// The configured maximum.
        max: u32,
    },
    /// `max_level` is zero.
    MaxLevelZero,
    /// `max_level` exceeds what [`Dimensions`] can represent.
    MaxLevelTooLarge {
        /// The configured maximum.
        max_level: u32,
        /// The largest supported level.
        limit: u32,
    },
    /// An environment variable held an unusable value.
    InvalidEnv {
        /// Variable name.
        var: &'static str,
        /// The raw value read.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LevelZero => write!(f, "level must be at least 1"),
            Self::LevelAboveMax { level, max } => {
                write!(f, "level {level} exceeds max_level {max}")
            }
            Self::MaxLevelZero => write!(f, "max_level must be at least 1"),
            Self::MaxLevelTooLarge { max_level, limit } => {
                write!(f, "max_level {max_level} exceeds supported limit {limit}")
            }
            Self::InvalidEnv { var, value, reason } => {
                write!(f, "{var}={value:?}: {reason}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── MazeConfig ─────────────────────────────────────────────────────

/// Inputs to maze construction other than the level.
///
/// # Examples
///
/// ```
/// use warren_engine::{LevelPolicy, MazeConfig};
///
/// let cfg = MazeConfig {
///     level_policy: LevelPolicy::Clamp,
///     ..MazeConfig::with_seed(9)
/// };
/// assert!(cfg.validate().is_ok());
/// assert_eq!(cfg.resolve_level(0).unwrap().0, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeConfig {
    /// Generation seed. `None` draws one from the thread RNG per maze;
    /// the drawn value is recorded on the maze.
    pub seed: Option<u64>,
    /// Handling of out-of-range levels. Default: [`LevelPolicy::Reject`].
    pub level_policy: LevelPolicy,
    /// Highest accepted level. Default: [`DEFAULT_MAX_LEVEL`].
    pub max_level: u32,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            level_policy: LevelPolicy::Reject,
            max_level: DEFAULT_MAX_LEVEL,
        }
    }
}

impl MazeConfig {
    /// Default configuration with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Read overrides from `WARREN_SEED`, `WARREN_LEVEL_POLICY`, and
    /// `WARREN_MAX_LEVEL`. Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidEnv`] if a variable is set but unparsable,
    /// or any [`validate()`](Self::validate) error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like [`from_env()`](Self::from_env) but reads variables through
    /// `lookup`, so callers can supply values from any source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(value) = lookup(ENV_SEED) {
            let seed = value
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidEnv {
                    var: ENV_SEED,
                    reason: e.to_string(),
                    value: value.clone(),
                })?;
            cfg.seed = Some(seed);
        }

        if let Some(value) = lookup(ENV_LEVEL_POLICY) {
            cfg.level_policy =
                LevelPolicy::parse(&value).ok_or_else(|| ConfigError::InvalidEnv {
                    var: ENV_LEVEL_POLICY,
                    reason: "expected `reject` or `clamp`".to_string(),
                    value: value.clone(),
                })?;
        }

        if let Some(value) = lookup(ENV_MAX_LEVEL) {
            cfg.max_level =
                value
                    .trim()
                    .parse::<u32>()
                    .map_err(|e| ConfigError::InvalidEnv {
                        var: ENV_MAX_LEVEL,
                        reason: e.to_string(),
                        value: value.clone(),
                    })?;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_level == 0 {
            return Err(ConfigError::MaxLevelZero);
        }
        if self.max_level > Dimensions::MAX_LEVEL {
            return Err(ConfigError::MaxLevelTooLarge {
                max_level: self.max_level,
                limit: Dimensions::MAX_LEVEL,
            });
        }
        Ok(())
    }

    /// Map a requested level onto an accepted [`Level`].
    ///
    /// Under [`LevelPolicy::Clamp`], 0 becomes 1 and anything above
    /// `max_level` becomes `max_level`, each with a `warn!` record.
    pub fn resolve_level(&self, requested: u32) -> Result<Level, ConfigError> {
        self.validate()?;
        let level = match (requested, self.level_policy) {
            (0, LevelPolicy::Reject) => return Err(ConfigError::LevelZero),
            (0, LevelPolicy::Clamp) => {
                warn!("level 0 requested; clamping to 1");
                1
            }
            (l, LevelPolicy::Reject) if l > self.max_level => {
                return Err(ConfigError::LevelAboveMax {
                    level: l,
                    max: self.max_level,
                })
            }
            (l, LevelPolicy::Clamp) if l > self.max_level => {
                warn!("level {l} requested; clamping to max_level {}", self.max_level);
                self.max_level
            }
            (l, _) => l,
        };
        Ok(Level(level))
    }
}
