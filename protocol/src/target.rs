//! Move target-range categories

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Which positions a move may be aimed at
///
/// Supplied by move data; never inferred at battle time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetRange {
    /// One opposing combatant
    Single,
    /// One adjacent opposing combatant
    Adjacent,
    /// Every opposing combatant at once
    AllOpponents,
    /// Every combatant on the field
    All,
    /// The user only; no explicit target
    #[serde(rename = "self")]
    SelfTarget,
    /// A combatant on the user's own side
    Ally,
}

impl TargetRange {
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        match s.trim() {
            "single" => Ok(TargetRange::Single),
            "adjacent" => Ok(TargetRange::Adjacent),
            "all_opponents" => Ok(TargetRange::AllOpponents),
            "all" => Ok(TargetRange::All),
            "self" => Ok(TargetRange::SelfTarget),
            "ally" => Ok(TargetRange::Ally),
            "" => Err(ParseError::EmptyMessage),
            other => Err(ParseError::UnknownTarget(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetRange::Single => "single",
            TargetRange::Adjacent => "adjacent",
            TargetRange::AllOpponents => "all_opponents",
            TargetRange::All => "all",
            TargetRange::SelfTarget => "self",
            TargetRange::Ally => "ally",
        }
    }

    /// Whether the move hits more than one slot at once
    pub fn is_spread(&self) -> bool {
        matches!(self, TargetRange::AllOpponents | TargetRange::All)
    }
}

impl FromStr for TargetRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TargetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
