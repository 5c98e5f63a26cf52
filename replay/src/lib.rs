//! Deterministic replay for tandem battles
//!
//! Every random draw the scheduler consumes is recorded next to the actions
//! it ordered. Feeding the same draws back through
//! [`tandem_battle::determine_action_order`] must reproduce the same order;
//! [`Replay::verify`] checks exactly that.

use tandem_protocol::BattlePosition;
use thiserror::Error;

mod record;
mod rng;

pub use record::{Recorder, Replay, TurnRecord};
pub use rng::{RecordingRng, ScriptedRng};

#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("Turn {turn}: ran out of recorded draws")]
    RngExhausted { turn: u32 },

    #[error("Turn {turn}: {remaining} recorded draws were never used")]
    UnusedDraws { turn: u32, remaining: usize },

    #[error("Turn {turn}: order diverged, recorded {expected:?} but replayed {found:?}")]
    OrderMismatch {
        turn: u32,
        expected: Vec<BattlePosition>,
        found: Vec<BattlePosition>,
    },

    #[error("Expected turn {expected}, found turn {found}")]
    TurnGap { expected: u32, found: u32 },

    #[error("Invalid replay JSON: {0}")]
    Json(#[from] serde_json::Error),
}
