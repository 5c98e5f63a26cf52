use thiserror::Error;

pub mod battle;
pub mod choice;
pub mod target;

pub use battle::{BattlePosition, GameType, MAX_SLOTS, SideId};
pub use choice::{ChoiceCommand, parse_choice, parse_choice_frame};
pub use target::TargetRange;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid message format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Unknown target range: {0}")]
    UnknownTarget(String),

    #[error("Empty message")]
    EmptyMessage,
}
