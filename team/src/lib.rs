//! Roster formats for the tandem battle engine
//!
//! Parties can be written as JSON or in a plain-text export format:
//!
//! ```text
//! Pikachu
//! HP: 20/35
//! Speed: 90
//!
//! Snorlax
//! HP: 160
//! Speed: 30
//! ```
//!
//! A [`BattleSetup`] file bundles both parties with the battle rules.

use thiserror::Error;

mod member;
mod setup;
mod text;

pub use member::{TeamMember, export_json, import_json};
pub use setup::{BattleSetup, load_setup_file, load_team_file};
pub use text::{export_text, import_text};

#[derive(Error, Debug)]
pub enum TeamError {
    #[error("Invalid team JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Line {line}: missing {field}")]
    MissingField { line: usize, field: &'static str },

    #[error("Line {line}: invalid number '{value}'")]
    InvalidNumber { line: usize, value: String },

    #[error("Line {line}: unrecognized entry '{text}'")]
    UnknownLine { line: usize, text: String },

    #[error("Member '{name}': {reason}")]
    InvalidMember { name: String, reason: String },

    #[error("Team is empty")]
    Empty,
}
