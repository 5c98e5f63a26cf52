//! Domain types for battle coordination

mod action;
mod combatant;
mod side;

pub use action::{Action, ActionKind};
pub use combatant::{Combatant, Party};
pub use side::SideState;
