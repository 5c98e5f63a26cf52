//! Battle coordination for single and double battles.
//!
//! This crate tracks which combatants are active on each side, orders the
//! actions submitted each turn, decides which positions a move may target,
//! detects faints, validates replacements and decides when the battle ends.
//!
//! # Overview
//!
//! Damage, AI and networking are collaborators around this crate, not part
//! of it:
//!
//! ```text
//! tandem-protocol (positions, choices, target ranges)
//!        │
//!        ▼
//! tandem-battle (coordination) ← THIS CRATE
//!        │
//!        ├─> move resolution (mutates HP through BattleState)
//!        └─> tandem-replay (deterministic record/verify)
//! ```
//!
//! # Main Types
//!
//! - [`BattleState`] - both sides, turn number, rules
//! - [`SideState`] - a party plus its active slots
//! - [`Combatant`], [`Party`] - roster data the engine reads
//! - [`Action`] - one pending action for an active slot
//! - [`BattleRules`] - singles/doubles and switch priority
//!
//! # Turn loop
//!
//! ```ignore
//! use tandem_battle::{determine_action_order, check_faints, init_battle};
//!
//! let mut state = init_battle(player_party, opponent_party);
//! let mut rng = || my_rng.gen_range(0.0..1.0);
//!
//! while !state.is_resolved() {
//!     let actions = collect_actions(&state);
//!     for action in determine_action_order(actions, &mut rng) {
//!         resolve(&mut state, action);
//!         for position in state.clear_fainted() {
//!             ask_for_replacement(&mut state, position);
//!         }
//!     }
//!     state.end_turn();
//! }
//! ```

pub mod error;
pub mod query;
pub mod rules;
pub mod state;
pub mod types;

// Re-export main types at crate root for convenience
pub use error::SwitchError;
pub use query::{
    BattleResult, SPREAD_MULTIPLIER, check_faints, check_result, compare_actions,
    determine_action_order, get_spread_move_multiplier, get_valid_targets,
};
pub use rules::{BattleRules, SWITCH_PRIORITY};
pub use state::{ActiveMonsters, BattleState, SwitchIn, get_active_monsters, init_battle};
pub use types::{Action, ActionKind, Combatant, Party, SideState};

// Re-export commonly used protocol types
pub use tandem_protocol::{
    BattlePosition, ChoiceCommand, GameType, MAX_SLOTS, SideId, TargetRange,
};
