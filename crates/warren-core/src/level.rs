//! Level numbers.

use std::fmt;

/// A 1-based level number.
///
/// The value is not validated here; dimension derivation in
/// `warren-grid` rejects level 0 and oversize levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Level(pub u32);

impl Level {
    /// The first level.
    pub const FIRST: Level = Level(1);

    /// The level after this one, saturating at `u32::MAX`.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
