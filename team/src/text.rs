//! Plain-text export format
//!
//! One block per member, separated by blank lines. The first line of a block
//! is the name, followed by `HP: cur/max` (or `HP: cur`) and `Speed: n`.

use tandem_battle::Party;

use crate::TeamError;
use crate::member::{TeamMember, members_to_party};

/// Parse a party from the text export format
pub fn import_text(text: &str) -> Result<Party, TeamError> {
    let mut members = Vec::new();
    let mut block: Vec<(usize, &str)> = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            if !block.is_empty() {
                members.push(parse_block(&block)?);
                block.clear();
            }
        } else {
            block.push((idx + 1, line));
        }
    }
    if !block.is_empty() {
        members.push(parse_block(&block)?);
    }

    members_to_party(members)
}

/// Write a party in the text export format
pub fn export_text(party: &Party) -> String {
    party
        .iter()
        .map(|c| format!("{}\nHP: {}/{}\nSpeed: {}\n", c.name, c.hp, c.max_hp, c.speed))
        .collect::<Vec<_>>()
        .join("\n")
}

fn parse_block(block: &[(usize, &str)]) -> Result<TeamMember, TeamError> {
    let (first_line, name) = block[0];
    let mut hp = None;
    let mut speed = None;

    for &(line, text) in &block[1..] {
        match text.split_once(':') {
            Some((key, value)) if key.trim().eq_ignore_ascii_case("hp") => {
                hp = Some(parse_hp(line, value.trim())?);
            }
            Some((key, value)) if key.trim().eq_ignore_ascii_case("speed") => {
                speed = Some(parse_number(line, value.trim())?);
            }
            _ => {
                return Err(TeamError::UnknownLine {
                    line,
                    text: text.to_string(),
                });
            }
        }
    }

    let last_line = block.last().map_or(first_line, |(line, _)| *line);
    let (hp, max_hp) = hp.ok_or(TeamError::MissingField {
        line: last_line,
        field: "HP",
    })?;
    let speed = speed.ok_or(TeamError::MissingField {
        line: last_line,
        field: "Speed",
    })?;

    Ok(TeamMember {
        name: name.to_string(),
        hp,
        max_hp,
        speed,
    })
}

fn parse_hp(line: usize, value: &str) -> Result<(i32, Option<i32>), TeamError> {
    match value.split_once('/') {
        Some((current, max)) => Ok((
            parse_number(line, current.trim())?,
            Some(parse_number(line, max.trim())?),
        )),
        None => Ok((parse_number(line, value)?, None)),
    }
}

fn parse_number(line: usize, value: &str) -> Result<i32, TeamError> {
    value.parse().map_err(|_| TeamError::InvalidNumber {
        line,
        value: value.to_string(),
    })
}
