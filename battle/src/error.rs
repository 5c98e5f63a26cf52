//! Rejections returned to the caller as normal feedback

use thiserror::Error;

/// Why a switch-in was refused. The battle state is unchanged in every case.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwitchError {
    #[error("No party member at index {index} (party size {party_size})")]
    OutOfRange { index: usize, party_size: usize },

    #[error("Party member {index} has fainted and can't battle")]
    Fainted { index: usize },

    #[error("Party member {index} is already active in slot {slot}")]
    AlreadyActive { index: usize, slot: usize },
}
