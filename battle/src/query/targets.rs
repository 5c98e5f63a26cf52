//! Move target legality

use tandem_protocol::{BattlePosition, SideId, TargetRange};

use crate::state::BattleState;

/// Per-target damage multiplier for spread moves
pub const SPREAD_MULTIPLIER: f64 = 0.75;

/// Positions a move with `range` may legally be aimed at
///
/// Empty slots and fainted occupants are never returned. Positions on the
/// acting side come before the opposing side's, slot order within a side.
pub fn get_valid_targets(
    state: &BattleState,
    acting_side: SideId,
    range: TargetRange,
) -> Vec<BattlePosition> {
    let allies = state.side(acting_side);
    let foes = state.side(acting_side.opponent());

    match range {
        TargetRange::Single | TargetRange::Adjacent | TargetRange::AllOpponents => {
            foes.standing_positions().collect()
        }
        TargetRange::All => allies
            .standing_positions()
            .chain(foes.standing_positions())
            .collect(),
        TargetRange::SelfTarget => Vec::new(),
        // Includes the actor's own slot
        TargetRange::Ally => allies.standing_positions().collect(),
    }
}

/// Damage multiplier applied per target by the damage collaborator
pub fn get_spread_move_multiplier(range: TargetRange) -> f64 {
    if range.is_spread() {
        SPREAD_MULTIPLIER
    } else {
        1.0
    }
}
