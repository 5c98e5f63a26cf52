//! Battle rules

use tandem_protocol::GameType;

/// Default priority given to switch actions: ahead of every move
pub const SWITCH_PRIORITY: i32 = i32::MAX;

/// Game-rule policy that callers apply when building actions
///
/// The turn scheduler never inspects these; it only sorts the priorities
/// it is handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleRules {
    /// Singles (one slot per side) or doubles (two)
    pub game_type: GameType,

    /// Priority assigned to switch actions
    pub switch_priority: i32,
}

impl BattleRules {
    pub fn singles() -> Self {
        Self {
            game_type: GameType::Singles,
            ..Self::default()
        }
    }

    pub fn doubles() -> Self {
        Self::default()
    }

    pub fn slot_count(&self) -> usize {
        self.game_type.slot_count()
    }
}

impl Default for BattleRules {
    fn default() -> Self {
        Self {
            game_type: GameType::Doubles,
            switch_priority: SWITCH_PRIORITY,
        }
    }
}
