//! BattleState - the coordination engine's single mutable state

use tandem_protocol::{BattlePosition, ChoiceCommand, MAX_SLOTS, SideId};

use crate::query::{BattleResult, check_result};
use crate::rules::BattleRules;
use crate::types::{Action, Combatant, Party, SideState};

/// A battle between the player and one opponent
///
/// One owner mutates it at a time; independent battles need independent
/// states. Nothing in here reads ambient state such as the clock or a
/// global RNG.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    /// The player's side
    pub player: SideState,

    /// The opponent's side
    pub opponent: SideState,

    /// Current turn number (starts at 1)
    turn_number: u32,

    rules: BattleRules,

    /// Terminal result, once reached
    outcome: Option<BattleResult>,
}

impl BattleState {
    /// Start a doubles battle
    pub fn new(player: Party, opponent: Party) -> Self {
        Self::with_rules(player, opponent, BattleRules::default())
    }

    /// Start a battle, sending out the first living members of each party
    pub fn with_rules(player: Party, opponent: Party, rules: BattleRules) -> Self {
        let slot_count = rules.slot_count();
        let mut player = SideState::new(SideId::Player, player, slot_count);
        let mut opponent = SideState::new(SideId::Opponent, opponent, slot_count);
        player.fill_slots();
        opponent.fill_slots();

        tracing::debug!(
            game_type = rules.game_type.as_str(),
            player_active = ?player.slots,
            opponent_active = ?opponent.slots,
            "Battle initialized"
        );

        Self {
            player,
            opponent,
            turn_number: 1,
            rules,
            outcome: None,
        }
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub fn rules(&self) -> &BattleRules {
        &self.rules
    }

    /// Get a side by id
    pub fn side(&self, side: SideId) -> &SideState {
        match side {
            SideId::Player => &self.player,
            SideId::Opponent => &self.opponent,
        }
    }

    /// Get a side mutably by id
    pub fn side_mut(&mut self, side: SideId) -> &mut SideState {
        match side {
            SideId::Player => &mut self.player,
            SideId::Opponent => &mut self.opponent,
        }
    }

    /// Iterate over both sides, player first
    pub fn sides(&self) -> impl Iterator<Item = &SideState> {
        [&self.player, &self.opponent].into_iter()
    }

    /// Combatant occupying a position, if any
    pub fn combatant_at(&self, position: BattlePosition) -> Option<&Combatant> {
        self.side(position.side).active(position.slot)
    }

    /// Combatant occupying a position, mutably (for the damage collaborator)
    pub fn combatant_at_mut(&mut self, position: BattlePosition) -> Option<&mut Combatant> {
        self.side_mut(position.side).active_mut(position.slot)
    }

    /// Build a fight action for the occupant of `position`
    ///
    /// # Panics
    /// If the slot is empty; only occupied slots submit actions.
    pub fn fight_action(
        &self,
        position: BattlePosition,
        priority: i32,
        target: Option<BattlePosition>,
    ) -> Action {
        Action::fight(position, self.occupant_speed(position), priority, target)
    }

    /// Build a switch action using the rules' switch priority
    ///
    /// # Panics
    /// If the slot is empty.
    pub fn switch_action(&self, position: BattlePosition, bench_index: usize) -> Action {
        Action::switch(
            position,
            self.occupant_speed(position),
            self.rules.switch_priority,
            bench_index,
        )
    }

    /// Build the action for a parsed choice
    ///
    /// `move_priority` is the chosen move's priority and only applies to
    /// moves; switches always use the rules' switch priority.
    ///
    /// # Panics
    /// If the slot is empty.
    pub fn choice_action(
        &self,
        position: BattlePosition,
        choice: &ChoiceCommand,
        move_priority: i32,
    ) -> Action {
        match *choice {
            ChoiceCommand::Move { target, .. } => {
                self.fight_action(position, move_priority, target)
            }
            ChoiceCommand::Switch { bench_index } => self.switch_action(position, bench_index),
        }
    }

    fn occupant_speed(&self, position: BattlePosition) -> i32 {
        match self.combatant_at(position) {
            Some(combatant) => combatant.speed,
            None => panic!("no active combatant at {}", position),
        }
    }

    /// Close the current turn and evaluate the result
    ///
    /// The turn number advances once per call until a terminal result is
    /// reached; after that the stored result is returned unchanged.
    pub fn end_turn(&mut self) -> BattleResult {
        if let Some(result) = self.outcome {
            return result;
        }

        let result = check_result(self);
        self.turn_number += 1;

        if result.is_terminal() {
            tracing::info!(
                turn = self.turn_number - 1,
                result = result.as_str(),
                "Battle resolved"
            );
            self.outcome = Some(result);
        } else {
            tracing::debug!(turn = self.turn_number, "Turn started");
        }

        result
    }

    /// Terminal result, if the battle is over
    pub fn outcome(&self) -> Option<BattleResult> {
        self.outcome
    }

    /// Check if the battle is over
    pub fn is_resolved(&self) -> bool {
        self.outcome.is_some()
    }
}

/// Start a doubles battle from two parties
pub fn init_battle(player: Party, opponent: Party) -> BattleState {
    BattleState::new(player, opponent)
}

/// Occupants of every slot, indexed by slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveMonsters<'a> {
    pub player: [Option<&'a Combatant>; MAX_SLOTS],
    pub opponent: [Option<&'a Combatant>; MAX_SLOTS],
}

/// Get the combatants in each side's slots
pub fn get_active_monsters(state: &BattleState) -> ActiveMonsters<'_> {
    ActiveMonsters {
        player: [state.player.active(0), state.player.active(1)],
        opponent: [state.opponent.active(0), state.opponent.active(1)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ActionKind;

    fn party(members: &[(&str, i32, i32)]) -> Party {
        members
            .iter()
            .map(|&(name, hp, speed)| Combatant::new(name, 100, speed).with_hp(hp))
            .collect()
    }

    #[test]
    fn test_init_skips_fainted_members() {
        let state = init_battle(
            party(&[("p1", 0, 50), ("p2", 100, 60), ("p3", 100, 70)]),
            party(&[("o1", 100, 80)]),
        );

        assert_eq!(state.player.active_index(0), Some(1));
        assert_eq!(state.player.active_index(1), Some(2));
        assert_eq!(state.opponent.active_index(0), Some(0));
        assert_eq!(state.opponent.active_index(1), None);
        assert_eq!(state.turn_number(), 1);
    }

    #[test]
    fn test_init_never_places_fainted() {
        let state = init_battle(
            party(&[("p1", 0, 50), ("p2", -5, 60)]),
            party(&[("o1", 0, 80), ("o2", 10, 80), ("o3", 0, 80), ("o4", 10, 80)]),
        );

        assert_eq!(state.player.get_active().count(), 0);
        assert_eq!(state.opponent.active_index(0), Some(1));
        assert_eq!(state.opponent.active_index(1), Some(3));
        assert!(
            state
                .sides()
                .flat_map(|side| side.get_active())
                .all(|(_, c)| c.is_alive())
        );
    }

    #[test]
    fn test_init_with_empty_parties() {
        let state = init_battle(Party::default(), Party::default());

        let active = get_active_monsters(&state);
        assert_eq!(active.player, [None, None]);
        assert_eq!(active.opponent, [None, None]);
    }

    #[test]
    fn test_singles_leaves_slot_one_empty() {
        let state = BattleState::with_rules(
            party(&[("p1", 100, 50), ("p2", 100, 60)]),
            party(&[("o1", 100, 80), ("o2", 100, 80)]),
            BattleRules::singles(),
        );

        let active = get_active_monsters(&state);
        assert_eq!(active.player[0].map(|c| c.name.as_str()), Some("p1"));
        assert!(active.player[1].is_none());
        assert!(active.opponent[1].is_none());
    }

    #[test]
    fn test_action_constructors_read_speed() {
        let state = init_battle(
            party(&[("p1", 100, 70), ("p2", 100, 120)]),
            party(&[("o1", 100, 90)]),
        );
        let pos = BattlePosition::new(SideId::Player, 1);

        let fight = state.fight_action(pos, 1, Some(BattlePosition::new(SideId::Opponent, 0)));
        assert_eq!(fight.speed, 120);
        assert_eq!(fight.priority, 1);

        let switch = state.switch_action(pos, 0);
        assert_eq!(switch.priority, state.rules().switch_priority);
        assert!(switch.is_switch());
    }

    #[test]
    fn test_choice_action_from_parsed_choices() {
        let state = init_battle(
            party(&[("p1", 100, 70), ("p2", 100, 120), ("p3", 100, 40)]),
            party(&[("o1", 100, 90)]),
        );
        let pos = BattlePosition::new(SideId::Player, 0);

        let choice = ChoiceCommand::Move {
            move_slot: 2,
            target: Some(BattlePosition::new(SideId::Opponent, 0)),
        };
        let fight = state.choice_action(pos, &choice, 1);
        assert_eq!(fight.target(), Some(BattlePosition::new(SideId::Opponent, 0)));
        assert_eq!(fight.priority, 1);
        assert_eq!(fight.speed, 70);

        let switch = state.choice_action(pos, &ChoiceCommand::Switch { bench_index: 2 }, 3);
        assert_eq!(switch.kind, ActionKind::Switch { bench_index: 2 });
        assert_eq!(switch.priority, state.rules().switch_priority);
    }

    #[test]
    #[should_panic(expected = "no active combatant at p2b")]
    fn test_action_for_empty_slot_panics() {
        let state = init_battle(party(&[("p1", 100, 70)]), party(&[("o1", 100, 90)]));
        state.fight_action(BattlePosition::new(SideId::Opponent, 1), 0, None);
    }

    #[test]
    fn test_end_turn_increments_until_resolved() {
        let mut state = init_battle(party(&[("p1", 100, 70)]), party(&[("o1", 100, 90)]));

        assert_eq!(state.end_turn(), BattleResult::Continue);
        assert_eq!(state.turn_number(), 2);

        state.opponent.party.get_mut(0).unwrap().hp = 0;
        assert_eq!(state.end_turn(), BattleResult::Win);
        assert_eq!(state.turn_number(), 3);
        assert!(state.is_resolved());

        // Terminal: no further progression
        assert_eq!(state.end_turn(), BattleResult::Win);
        assert_eq!(state.turn_number(), 3);
    }
}
