//! Pure queries over battle state
//!
//! Turn ordering, target legality, faint detection and result evaluation.
//! None of these mutate state; randomness is always passed in.

mod faint;
mod order;
mod result;
mod targets;

pub use faint::check_faints;
pub use order::{compare_actions, determine_action_order};
pub use result::{BattleResult, check_result};
pub use targets::{SPREAD_MULTIPLIER, get_spread_move_multiplier, get_valid_targets};
