//! Battle state and the operations that mutate it

mod battle;
mod switching;

pub use battle::{ActiveMonsters, BattleState, get_active_monsters, init_battle};
pub use switching::SwitchIn;
