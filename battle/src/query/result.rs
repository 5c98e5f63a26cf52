//! Battle outcome evaluation

use std::fmt;

use crate::state::BattleState;

/// Outcome from the player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BattleResult {
    Win,
    Lose,
    Continue,
}

impl BattleResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            BattleResult::Win => "win",
            BattleResult::Lose => "lose",
            BattleResult::Continue => "continue",
        }
    }

    /// Whether the battle is over
    pub fn is_terminal(&self) -> bool {
        !matches!(self, BattleResult::Continue)
    }
}

impl fmt::Display for BattleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decide whether the battle is over
///
/// Looks at whole parties, bench included. The opponent being wiped out
/// is checked first, so a simultaneous double wipe is a win.
pub fn check_result(state: &BattleState) -> BattleResult {
    if state.opponent.party.all_fainted() {
        BattleResult::Win
    } else if state.player.party.all_fainted() {
        BattleResult::Lose
    } else {
        BattleResult::Continue
    }
}
