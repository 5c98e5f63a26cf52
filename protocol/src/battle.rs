//! Shared addressing types for battle notation

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum number of active slots on one side
pub const MAX_SLOTS: usize = 2;

/// One of the two sides of a battle (p1, p2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SideId {
    Player,
    Opponent,
}

impl SideId {
    /// Both sides, player first
    pub const ALL: [SideId; 2] = [SideId::Player, SideId::Opponent];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "p1" | "player" => Some(SideId::Player),
            "p2" | "opponent" => Some(SideId::Opponent),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SideId::Player => "p1",
            SideId::Opponent => "p2",
        }
    }

    /// The side facing this one
    pub fn opponent(&self) -> Self {
        match self {
            SideId::Player => SideId::Opponent,
            SideId::Opponent => SideId::Player,
        }
    }
}

impl fmt::Display for SideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Game type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameType {
    Singles,
    #[default]
    Doubles,
}

impl GameType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "singles" => Some(GameType::Singles),
            "doubles" => Some(GameType::Doubles),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameType::Singles => "singles",
            GameType::Doubles => "doubles",
        }
    }

    /// Number of usable active slots per side
    pub fn slot_count(&self) -> usize {
        match self {
            GameType::Singles => 1,
            GameType::Doubles => MAX_SLOTS,
        }
    }
}

/// An on-field position in the form "p1a" / "p2b"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BattlePosition {
    pub side: SideId,
    pub slot: usize,
}

impl BattlePosition {
    pub fn new(side: SideId, slot: usize) -> Self {
        Self { side, slot }
    }

    /// Parse a position string like "p1a" or "p2b"
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let side = SideId::parse(s.get(..2)?)?;
        let mut rest = s[2..].chars();
        let slot = match rest.next()? {
            'a' => 0,
            'b' => 1,
            _ => return None,
        };
        if rest.next().is_some() {
            return None;
        }

        Some(Self { side, slot })
    }

    /// Slot letter used on the wire
    pub fn slot_letter(&self) -> char {
        (b'a' + self.slot as u8) as char
    }
}

impl fmt::Display for BattlePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.side.as_str(), self.slot_letter())
    }
}
