//! Battle setup files

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tandem_battle::{BattleRules, BattleState, Party};

use crate::member::{TeamMember, members_to_party};
use crate::{TeamError, import_json, import_text};

/// Both rosters plus the rules to run them under
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleSetup {
    #[serde(default)]
    pub rules: BattleRules,
    pub player: Vec<TeamMember>,
    pub opponent: Vec<TeamMember>,
}

impl BattleSetup {
    /// Parse a setup from JSON
    pub fn from_json(json: &str) -> Result<Self, TeamError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate both rosters and start the battle
    pub fn into_battle(self) -> Result<BattleState, TeamError> {
        let player = members_to_party(self.player)?;
        let opponent = members_to_party(self.opponent)?;
        Ok(BattleState::with_rules(player, opponent, self.rules))
    }
}

/// Load a party from disk; `.json` files are JSON, anything else is text
pub fn load_team_file(path: impl AsRef<Path>) -> Result<Party> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read team file {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let party = if is_json {
        import_json(&contents)
    } else {
        import_text(&contents)
    }
    .with_context(|| format!("Failed to parse team file {}", path.display()))?;

    tracing::debug!(path = %path.display(), members = party.len(), "Loaded team");
    Ok(party)
}

/// Load a JSON battle setup from disk
pub fn load_setup_file(path: impl AsRef<Path>) -> Result<BattleSetup> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read setup file {}", path.display()))?;

    BattleSetup::from_json(&contents)
        .with_context(|| format!("Failed to parse setup file {}", path.display()))
}
