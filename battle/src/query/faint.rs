//! Faint detection

use tandem_protocol::{BattlePosition, SideId};

use crate::state::BattleState;

/// Positions whose occupant has 0 HP or less
///
/// Every fainted slot on both sides is reported in one pass, player first.
/// Clearing the slots is left to the caller (see `BattleState::clear_fainted`).
pub fn check_faints(state: &BattleState) -> Vec<BattlePosition> {
    SideId::ALL
        .into_iter()
        .flat_map(|side| {
            state
                .side(side)
                .get_active()
                .filter(|(_, c)| c.is_fainted())
                .map(move |(slot, _)| BattlePosition::new(side, slot))
        })
        .collect()
}
