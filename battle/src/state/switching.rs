//! Slot replacement and faint cleanup

use std::fmt;

use tandem_protocol::{BattlePosition, SideId};

use super::battle::BattleState;
use crate::error::SwitchError;
use crate::query::check_faints;
use crate::types::SideState;

/// A successful switch-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchIn {
    /// Slot that was filled
    pub position: BattlePosition,

    /// Party index now occupying the slot
    pub party_index: usize,

    /// Party index that was in the slot before, if any
    pub replaced: Option<usize>,

    /// Name of the incoming combatant
    pub name: String,
}

impl fmt::Display for SwitchIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: Go! {}!", self.position, self.name)
    }
}

impl BattleState {
    /// Send party member `bench_index` into `slot` on `side`
    ///
    /// Checked in order: the index exists, the member is not fainted, and
    /// the member is not active in another slot. Any failure leaves the
    /// state untouched. The slot does not need to be empty; a healthy
    /// occupant can be swapped out voluntarily, and re-sending the current
    /// occupant is a no-op.
    ///
    /// # Panics
    /// If `slot` is not a usable slot for this battle's game type.
    pub fn switch_in(
        &mut self,
        side: SideId,
        slot: usize,
        bench_index: usize,
    ) -> Result<SwitchIn, SwitchError> {
        let side_state = self.side_mut(side);
        assert!(
            slot < side_state.slot_count(),
            "slot {} out of range ({} usable)",
            slot,
            side_state.slot_count()
        );

        validate_switch(side_state, slot, bench_index).inspect_err(|err| {
            tracing::debug!(side = %side, slot, bench_index, error = %err, "Switch rejected");
        })?;

        let replaced = side_state.active_index(slot);
        side_state.set_active(slot, Some(bench_index));

        let name = side_state
            .party
            .get(bench_index)
            .map(|c| c.name.clone())
            .unwrap_or_default();
        let switch = SwitchIn {
            position: BattlePosition::new(side, slot),
            party_index: bench_index,
            replaced,
            name,
        };

        tracing::debug!(
            position = %switch.position,
            party_index = bench_index,
            replaced = ?replaced,
            "Switched in"
        );

        Ok(switch)
    }

    /// Empty every slot whose occupant has fainted
    ///
    /// Returns the cleared positions, all faints of the pass at once.
    pub fn clear_fainted(&mut self) -> Vec<BattlePosition> {
        let fainted = check_faints(self);
        for position in &fainted {
            tracing::debug!(position = %position, turn = self.turn_number(), "Fainted");
            self.side_mut(position.side).set_active(position.slot, None);
        }
        fainted
    }

    /// Party indices that could be switched in on `side`
    pub fn replacement_candidates(&self, side: SideId) -> Vec<usize> {
        self.side(side).get_bench().map(|(idx, _)| idx).collect()
    }

    /// Usable slots on `side` that are currently empty
    pub fn open_slots(&self, side: SideId) -> Vec<BattlePosition> {
        let side_state = self.side(side);
        (0..side_state.slot_count())
            .filter(|&slot| side_state.active_index(slot).is_none())
            .map(|slot| BattlePosition::new(side, slot))
            .collect()
    }
}

fn validate_switch(side: &SideState, slot: usize, bench_index: usize) -> Result<(), SwitchError> {
    let member = side.party.get(bench_index).ok_or(SwitchError::OutOfRange {
        index: bench_index,
        party_size: side.party.len(),
    })?;

    if member.is_fainted() {
        return Err(SwitchError::Fainted { index: bench_index });
    }

    if let Some(other) = side.find_active_slot(bench_index)
        && other != slot
    {
        return Err(SwitchError::AlreadyActive {
            index: bench_index,
            slot: other,
        });
    }

    Ok(())
}
