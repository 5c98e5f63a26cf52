//! Turn records and verification

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tandem_battle::{Action, BattleResult, BattleState, determine_action_order};
use tandem_protocol::BattlePosition;

use crate::ReplayError;
use crate::rng::{RecordingRng, ScriptedRng};

/// Everything needed to re-derive one turn's order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub turn: u32,

    /// Actions as submitted, before ordering
    pub actions: Vec<Action>,

    /// RNG draws consumed while ordering
    pub draws: Vec<f64>,

    /// Positions in execution order
    pub order: Vec<BattlePosition>,

    /// Positions that fainted during the turn
    #[serde(default)]
    pub faints: Vec<BattlePosition>,

    /// Result evaluated at the end of the turn
    #[serde(default)]
    pub result: Option<BattleResult>,
}

/// A recorded battle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Replay {
    pub turns: Vec<TurnRecord>,
}

impl Replay {
    /// Re-run every turn's ordering with its recorded draws
    ///
    /// Fails on the first turn whose order diverges, whose draw count
    /// differs, or whose turn number does not follow the previous one.
    pub fn verify(&self) -> Result<(), ReplayError> {
        let mut expected_turn = self.turns.first().map(|t| t.turn);

        for record in &self.turns {
            if let Some(expected) = expected_turn
                && record.turn != expected
            {
                return Err(ReplayError::TurnGap {
                    expected,
                    found: record.turn,
                });
            }

            let mut rng = ScriptedRng::new(record.draws.clone());
            let ordered = determine_action_order(record.actions.clone(), &mut || rng.draw());
            rng.finish(record.turn)?;

            let found = positions(&ordered);
            if found != record.order {
                return Err(ReplayError::OrderMismatch {
                    turn: record.turn,
                    expected: record.order.clone(),
                    found,
                });
            }

            expected_turn = Some(record.turn + 1);
        }

        Ok(())
    }

    /// Final result, if the recording reached one
    pub fn outcome(&self) -> Option<BattleResult> {
        self.turns
            .last()
            .and_then(|t| t.result)
            .filter(|r| r.is_terminal())
    }

    pub fn to_json(&self) -> Result<String, ReplayError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ReplayError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json()?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write replay {}", path.display()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read replay {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Failed to parse replay {}", path.display()))
    }
}

/// Records turns while a battle runs
#[derive(Debug, Default)]
pub struct Recorder {
    turns: Vec<TurnRecord>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Order this turn's actions, recording the draws used
    pub fn schedule<F>(
        &mut self,
        state: &BattleState,
        actions: Vec<Action>,
        rng: &mut F,
    ) -> Vec<Action>
    where
        F: FnMut() -> f64,
    {
        let mut recording = RecordingRng::new(rng);
        let ordered = determine_action_order(actions.clone(), &mut || recording.draw());

        self.turns.push(TurnRecord {
            turn: state.turn_number(),
            actions,
            draws: recording.into_draws(),
            order: positions(&ordered),
            faints: Vec::new(),
            result: None,
        });

        ordered
    }

    /// Note faints against the turn being recorded
    pub fn record_faints(&mut self, faints: &[BattlePosition]) {
        match self.turns.last_mut() {
            Some(record) => record.faints.extend_from_slice(faints),
            None => tracing::warn!(?faints, "Faints recorded before any turn was scheduled"),
        }
    }

    /// Close the turn being recorded with its result
    pub fn finish_turn(&mut self, result: BattleResult) {
        match self.turns.last_mut() {
            Some(record) => record.result = Some(result),
            None => tracing::warn!(
                result = result.as_str(),
                "Turn finished before any was scheduled"
            ),
        }
    }

    pub fn into_replay(self) -> Replay {
        Replay { turns: self.turns }
    }
}

fn positions(actions: &[Action]) -> Vec<BattlePosition> {
    actions.iter().map(|a| a.position).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use tandem_battle::{Combatant, Party, SideId, init_battle};

    fn tied_battle() -> BattleState {
        let party = |prefix: &str| -> Party {
            (0..3)
                .map(|i| Combatant::new(format!("{}{}", prefix, i), 50, 80))
                .collect()
        };
        init_battle(party("p"), party("o"))
    }

    fn all_fight(state: &BattleState) -> Vec<Action> {
        SideId::ALL
            .into_iter()
            .flat_map(|side| (0..2).map(move |slot| BattlePosition::new(side, slot)))
            .filter(|pos| state.combatant_at(*pos).is_some())
            .map(|pos| state.fight_action(pos, 0, None))
            .collect()
    }

    fn record_battle(seed: u64) -> Replay {
        let mut state = tied_battle();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut draw = move || rng.gen_range(0.0..1.0);
        let mut recorder = Recorder::new();

        while !state.is_resolved() {
            let ordered = recorder.schedule(&state, all_fight(&state), &mut draw);
            // Whoever moves first knocks out the last mover
            let last = ordered.last().unwrap().position;
            state.combatant_at_mut(last).unwrap().set_hp(0);

            let faints = state.clear_fainted();
            recorder.record_faints(&faints);
            for position in faints {
                if let Some(&index) = state.replacement_candidates(position.side).first() {
                    state.switch_in(position.side, position.slot, index).unwrap();
                }
            }
            recorder.finish_turn(state.end_turn());
        }

        recorder.into_replay()
    }

    #[test]
    fn test_recorded_battle_verifies() {
        let replay = record_battle(11);

        assert!(replay.turns.len() >= 3);
        assert!(replay.turns.iter().all(|t| !t.draws.is_empty()));
        assert!(replay.outcome().is_some());
        replay.verify().unwrap();
    }

    #[test]
    fn test_same_seed_same_replay() {
        assert_eq!(record_battle(3), record_battle(3));
    }

    #[test]
    fn test_json_keeps_replay() {
        let replay = record_battle(5);

        let json = replay.to_json().unwrap();
        let restored = Replay::from_json(&json).unwrap();

        assert_eq!(restored, replay);
        restored.verify().unwrap();
    }

    #[test]
    fn test_tampered_draws_are_detected() {
        let mut replay = record_battle(9);
        let turn = &mut replay.turns[0];
        turn.draws.pop();

        assert!(matches!(
            replay.verify(),
            Err(ReplayError::RngExhausted { turn: 1 })
        ));
    }

    #[test]
    fn test_tampered_order_is_detected() {
        let mut replay = record_battle(9);
        replay.turns[1].order.reverse();

        assert!(matches!(
            replay.verify(),
            Err(ReplayError::OrderMismatch { turn: 2, .. })
        ));
    }

    #[test]
    fn test_turn_gap_is_detected() {
        let mut replay = record_battle(9);
        replay.turns.remove(1);

        assert!(matches!(
            replay.verify(),
            Err(ReplayError::TurnGap {
                expected: 2,
                found: 3
            })
        ));
    }

    #[test]
    fn test_faints_without_turn_are_ignored() {
        let mut recorder = Recorder::new();
        recorder.record_faints(&[BattlePosition::new(SideId::Player, 0)]);
        recorder.finish_turn(BattleResult::Continue);

        assert!(recorder.into_replay().turns.is_empty());
    }
}
