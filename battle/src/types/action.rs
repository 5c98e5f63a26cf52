//! Per-turn actions submitted for active slots

use tandem_protocol::BattlePosition;

/// What an active slot does this turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    /// Use a move, optionally aimed at a position
    Fight { target: Option<BattlePosition> },

    /// Replace the occupant with a party member
    Switch { bench_index: usize },
}

/// A pending action for one turn
///
/// Built fresh every turn from current speed and the chosen move's
/// priority; never carried across turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    /// Slot the action is submitted for
    pub position: BattlePosition,

    /// Speed of the acting combatant at submission time
    pub speed: i32,

    /// Priority bracket; higher goes first
    pub priority: i32,

    pub kind: ActionKind,
}

impl Action {
    pub fn fight(
        position: BattlePosition,
        speed: i32,
        priority: i32,
        target: Option<BattlePosition>,
    ) -> Self {
        Self {
            position,
            speed,
            priority,
            kind: ActionKind::Fight { target },
        }
    }

    /// A switch with an explicit priority (see `BattleRules::switch_priority`)
    pub fn switch(position: BattlePosition, speed: i32, priority: i32, bench_index: usize) -> Self {
        Self {
            position,
            speed,
            priority,
            kind: ActionKind::Switch { bench_index },
        }
    }

    pub fn is_switch(&self) -> bool {
        matches!(self.kind, ActionKind::Switch { .. })
    }

    pub fn target(&self) -> Option<BattlePosition> {
        match self.kind {
            ActionKind::Fight { target } => target,
            ActionKind::Switch { .. } => None,
        }
    }
}
