//! Side (player or opponent) state

use tandem_protocol::{BattlePosition, MAX_SLOTS, SideId};

use super::combatant::{Combatant, Party};

/// One side of the battle
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideState {
    /// Which side this is
    pub side: SideId,

    /// Full roster in party order
    pub party: Party,

    /// Active party indices per slot
    /// For singles: slot 1 is always None
    pub(crate) slots: [Option<usize>; MAX_SLOTS],

    /// Number of usable slots (1 for singles, 2 for doubles)
    pub(crate) slot_count: usize,
}

impl SideState {
    /// Create a side with every slot empty
    pub fn new(side: SideId, party: Party, slot_count: usize) -> Self {
        Self {
            side,
            party,
            slots: [None; MAX_SLOTS],
            slot_count: slot_count.min(MAX_SLOTS),
        }
    }

    /// Fill the usable slots with the first living members in party order
    pub(crate) fn fill_slots(&mut self) {
        let mut alive = self.party.alive_indices();
        for slot in 0..self.slot_count() {
            self.slots[slot] = alive.next();
        }
    }

    /// Number of usable slots, never more than `MAX_SLOTS`
    pub fn slot_count(&self) -> usize {
        self.slot_count.min(MAX_SLOTS)
    }

    /// Party index held by a slot
    pub fn active_index(&self, slot: usize) -> Option<usize> {
        self.slots.get(slot).copied().flatten()
    }

    /// Get the active combatant at a slot (0-indexed)
    pub fn active(&self, slot: usize) -> Option<&Combatant> {
        self.active_index(slot).and_then(|idx| self.party.get(idx))
    }

    /// Get the active combatant at a slot mutably
    pub fn active_mut(&mut self, slot: usize) -> Option<&mut Combatant> {
        let idx = self.active_index(slot)?;
        self.party.get_mut(idx)
    }

    /// Iterate over occupied slots as (slot, combatant)
    pub fn get_active(&self) -> impl Iterator<Item = (usize, &Combatant)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, idx)| idx.map(|idx| (slot, idx)))
            .filter_map(|(slot, idx)| self.party.get(idx).map(|c| (slot, c)))
    }

    /// Positions of occupied slots whose occupant is still standing
    pub fn standing_positions(&self) -> impl Iterator<Item = BattlePosition> + '_ {
        self.get_active()
            .filter(|(_, c)| c.is_alive())
            .map(|(slot, _)| BattlePosition::new(self.side, slot))
    }

    /// Iterate over bench members (not active, not fainted)
    pub fn get_bench(&self) -> impl Iterator<Item = (usize, &Combatant)> {
        self.party
            .iter()
            .enumerate()
            .filter(|(idx, c)| c.is_alive() && self.find_active_slot(*idx).is_none())
    }

    /// Find the active slot for a party index
    pub fn find_active_slot(&self, party_index: usize) -> Option<usize> {
        self.slots.iter().position(|idx| *idx == Some(party_index))
    }

    /// Set the party index held by a slot
    pub(crate) fn set_active(&mut self, slot: usize, party_index: Option<usize>) {
        self.slots[slot] = party_index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_side() -> SideState {
        let party = Party::new(vec![
            Combatant::new("Pikachu", 35, 90),
            Combatant::new("Charizard", 78, 100),
            Combatant::new("Blastoise", 79, 78).with_hp(0),
            Combatant::new("Venusaur", 80, 80),
        ]);
        SideState::new(SideId::Player, party, 2)
    }

    #[test]
    fn test_new_side_has_empty_slots() {
        let side = create_test_side();
        assert_eq!(side.active_index(0), None);
        assert_eq!(side.active_index(1), None);
        assert_eq!(side.get_active().count(), 0);
    }

    #[test]
    fn test_fill_slots_in_party_order() {
        let mut side = create_test_side();
        side.fill_slots();

        assert_eq!(side.active(0).unwrap().name, "Pikachu");
        assert_eq!(side.active(1).unwrap().name, "Charizard");
    }

    #[test]
    fn test_fill_slots_singles_leaves_second_slot_empty() {
        let party = Party::new(vec![
            Combatant::new("Pikachu", 35, 90),
            Combatant::new("Charizard", 78, 100),
        ]);
        let mut side = SideState::new(SideId::Opponent, party, 1);
        side.fill_slots();

        assert_eq!(side.active_index(0), Some(0));
        assert_eq!(side.active_index(1), None);
    }

    #[test]
    fn test_get_bench() {
        let mut side = create_test_side();
        side.fill_slots();

        let bench: Vec<_> = side.get_bench().map(|(idx, _)| idx).collect();
        // Blastoise is fainted
        assert_eq!(bench, vec![3]);
    }

    #[test]
    fn test_standing_positions_skip_fainted_occupant() {
        let mut side = create_test_side();
        side.fill_slots();
        side.active_mut(0).unwrap().hp = 0;

        let positions: Vec<_> = side.standing_positions().collect();
        assert_eq!(positions, vec![BattlePosition::new(SideId::Player, 1)]);
    }

    #[test]
    fn test_find_active_slot() {
        let mut side = create_test_side();
        side.set_active(1, Some(3));

        assert_eq!(side.find_active_slot(3), Some(1));
        assert_eq!(side.find_active_slot(0), None);
    }

    #[test]
    fn test_slot_count_is_capped() {
        let side = SideState::new(SideId::Player, Party::default(), 5);
        assert_eq!(side.slot_count(), MAX_SLOTS);

        // A restored side may carry any stored count
        let mut side = create_test_side();
        side.slot_count = 3;
        side.fill_slots();
        assert_eq!(side.slot_count(), MAX_SLOTS);
        assert_eq!(side.active_index(1), Some(1));
    }

    #[test]
    fn test_out_of_range_slot_is_none() {
        let side = create_test_side();
        assert!(side.active(5).is_none());
    }
}
