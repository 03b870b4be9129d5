//! The two sides of the game and whose move is next.

use serde::{Deserialize, Serialize};

/// One of the two participants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human (or the collaborator acting for them).
    Player,
    /// The built-in opponent.
    Computer,
}

impl Side {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }

    /// Lowercase name, used by the Python bindings and log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Computer => "computer",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whose move is next.
///
/// `Undetermined` only before the first player has been chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    #[default]
    Undetermined,
    Player,
    Computer,
}

impl Turn {
    /// The side to move, if decided.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Turn::Undetermined => None,
            Turn::Player => Some(Side::Player),
            Turn::Computer => Some(Side::Computer),
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Turn::Undetermined => "undetermined",
            Turn::Player => "player",
            Turn::Computer => "computer",
        }
    }
}

impl From<Side> for Turn {
    fn from(side: Side) -> Self {
        match side {
            Side::Player => Turn::Player,
            Side::Computer => Turn::Computer,
        }
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
