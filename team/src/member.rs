//! Serialized party member

use serde::{Deserialize, Serialize};
use tandem_battle::{Combatant, Party};

use crate::TeamError;

/// One roster entry as stored in team files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,

    /// Current HP; 0 or below for a member that starts fainted
    pub hp: i32,

    /// Maximum HP (defaults to `hp`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_hp: Option<i32>,

    pub speed: i32,
}

impl TeamMember {
    /// Check the entry and turn it into a combatant
    pub fn into_combatant(self) -> Result<Combatant, TeamError> {
        let invalid = |reason: String| TeamError::InvalidMember {
            name: self.name.clone(),
            reason,
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name is empty".to_string()));
        }

        let max_hp = self.max_hp.unwrap_or(self.hp);
        if max_hp < 1 {
            return Err(invalid(format!("max HP must be at least 1, got {}", max_hp)));
        }
        if self.hp > max_hp {
            return Err(invalid(format!("HP {} exceeds max HP {}", self.hp, max_hp)));
        }

        Ok(Combatant::new(self.name.trim(), max_hp, self.speed).with_hp(self.hp))
    }
}

impl From<&Combatant> for TeamMember {
    fn from(combatant: &Combatant) -> Self {
        Self {
            name: combatant.name.clone(),
            hp: combatant.hp,
            max_hp: (combatant.hp != combatant.max_hp).then_some(combatant.max_hp),
            speed: combatant.speed,
        }
    }
}

/// Build a party from a list of members, rejecting invalid entries
pub(crate) fn members_to_party(members: Vec<TeamMember>) -> Result<Party, TeamError> {
    if members.is_empty() {
        return Err(TeamError::Empty);
    }

    members
        .into_iter()
        .map(TeamMember::into_combatant)
        .collect::<Result<Vec<_>, _>>()
        .map(Party::new)
}

/// Parse a JSON array of members
pub fn import_json(json: &str) -> Result<Party, TeamError> {
    let members: Vec<TeamMember> = serde_json::from_str(json)?;
    members_to_party(members)
}

/// Serialize a party as a pretty-printed JSON array
pub fn export_json(party: &Party) -> Result<String, TeamError> {
    let members: Vec<TeamMember> = party.iter().map(TeamMember::from).collect();
    Ok(serde_json::to_string_pretty(&members)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_json() {
        let json = r#"[
            {"name": "Pikachu", "hp": 0, "max_hp": 35, "speed": 90},
            {"name": "Snorlax", "hp": 160, "speed": 30}
        ]"#;

        let party = import_json(json).unwrap();

        assert_eq!(party.len(), 2);
        assert!(party.get(0).unwrap().is_fainted());
        assert_eq!(party.get(1).unwrap().max_hp, 160);
    }

    #[test]
    fn test_export_then_import_keeps_party() {
        let party = Party::new(vec![
            Combatant::new("Pikachu", 35, 90).with_hp(12),
            Combatant::new("Snorlax", 160, 30),
        ]);

        let json = export_json(&party).unwrap();
        assert!(!json.contains("\"max_hp\": 160"));

        assert_eq!(import_json(&json).unwrap(), party);
    }

    #[test]
    fn test_rejects_hp_above_max() {
        let json = r#"[{"name": "Pikachu", "hp": 50, "max_hp": 35, "speed": 90}]"#;

        let err = import_json(json).unwrap_err();

        assert!(matches!(err, TeamError::InvalidMember { ref name, .. } if name == "Pikachu"));
    }

    #[test]
    fn test_rejects_blank_name_and_bad_max() {
        let blank = r#"[{"name": " ", "hp": 10, "speed": 90}]"#;
        assert!(matches!(import_json(blank), Err(TeamError::InvalidMember { .. })));

        let no_max = r#"[{"name": "Ghost", "hp": 0, "speed": 90}]"#;
        assert!(matches!(import_json(no_max), Err(TeamError::InvalidMember { .. })));
    }

    #[test]
    fn test_rejects_empty_and_malformed() {
        assert!(matches!(import_json("[]"), Err(TeamError::Empty)));
        assert!(matches!(import_json("{"), Err(TeamError::Json(_))));
    }
}
