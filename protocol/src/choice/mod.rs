
use crate::ParseError;
use crate::battle::BattlePosition;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Choices a side can submit for one of its active slots
///
/// Indices are 0-based in memory and 1-based on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceCommand {
    /// move MOVESLOT [TARGET]
    Move {
        move_slot: usize,
        target: Option<BattlePosition>,
    },

    /// switch PARTYINDEX
    Switch { bench_index: usize },
}

impl ChoiceCommand {
    /// Serialize command to protocol format
    pub fn to_protocol_string(&self) -> String {
        match self {
            Self::Move {
                move_slot,
                target: Some(target),
            } => format!("move {} {}", move_slot + 1, target),
            Self::Move {
                move_slot,
                target: None,
            } => format!("move {}", move_slot + 1),
            Self::Switch { bench_index } => format!("switch {}", bench_index + 1),
        }
    }
}

/// Parse a single choice like "move 1 p2a" or "switch 3"
pub fn parse_choice(text: &str) -> Result<ChoiceCommand, ParseError> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    let Some(verb) = parts.first() else {
        return Err(ParseError::EmptyMessage);
    };

    match *verb {
        "move" => {
            let move_slot = parse_index(parts.get(1), "move slot")?;
            let target = match parts.get(2) {
                Some(raw) => Some(BattlePosition::parse(raw).ok_or_else(|| {
                    ParseError::InvalidFormat(format!("bad target position: {}", raw))
                })?),
                None => None,
            };
            if parts.len() > 3 {
                return Err(ParseError::InvalidFormat(text.trim().to_string()));
            }
            Ok(ChoiceCommand::Move { move_slot, target })
        }
        "switch" => {
            let bench_index = parse_index(parts.get(1), "party index")?;
            if parts.len() > 2 {
                return Err(ParseError::InvalidFormat(text.trim().to_string()));
            }
            Ok(ChoiceCommand::Switch { bench_index })
        }
        other => Err(ParseError::InvalidFormat(format!("unknown choice: {}", other))),
    }
}

/// Parse a batch of choices, one "POSITION: CHOICE" per line
pub fn parse_choice_frame(frame: &str) -> Result<Vec<(BattlePosition, ChoiceCommand)>> {
    frame
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(number, line)| {
            parse_choice_line(line).with_context(|| format!("line {}: {}", number + 1, line.trim()))
        })
        .collect()
}

fn parse_choice_line(line: &str) -> Result<(BattlePosition, ChoiceCommand)> {
    let (pos_part, choice) = line
        .split_once(':')
        .ok_or_else(|| ParseError::MissingField("position".to_string()))?;

    let position = BattlePosition::parse(pos_part)
        .ok_or_else(|| ParseError::InvalidFormat(format!("bad position: {}", pos_part.trim())))?;

    Ok((position, parse_choice(choice)?))
}

// Wire indices are 1-based; zero is rejected.
fn parse_index(raw: Option<&&str>, field: &str) -> Result<usize, ParseError> {
    let raw = raw.ok_or_else(|| ParseError::MissingField(field.to_string()))?;
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(ParseError::InvalidFormat(format!("bad {}: {}", field, raw))),
    }
}
