//! Combatant and party types

/// A monster as seen by the coordination engine
///
/// Only the battle-relevant values are kept here. Stat formulas and
/// damage are resolved elsewhere and written back through the HP helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    /// Display name (nickname or species)
    pub name: String,

    /// Current HP; zero or below means fainted
    pub hp: i32,

    /// Maximum HP
    pub max_hp: i32,

    /// Effective speed, already resolved through stat formulas
    pub speed: i32,
}

impl Combatant {
    /// Create a combatant at full HP
    pub fn new(name: impl Into<String>, max_hp: i32, speed: i32) -> Self {
        Self {
            name: name.into(),
            hp: max_hp,
            max_hp,
            speed,
        }
    }

    /// Builder-style override of current HP (e.g. restoring a saved battle)
    pub fn with_hp(mut self, hp: i32) -> Self {
        self.hp = hp;
        self
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn is_fainted(&self) -> bool {
        !self.is_alive()
    }

    /// Get HP as percentage (0-100)
    pub fn hp_percent(&self) -> i32 {
        if self.max_hp <= 0 {
            return 0;
        }
        let percent = i64::from(self.hp.max(0)) * 100 / i64::from(self.max_hp);
        percent.min(100) as i32
    }

    /// Subtract damage, flooring at zero. Returns true if this knocked it out.
    pub fn apply_damage(&mut self, amount: i32) -> bool {
        let was_alive = self.is_alive();
        self.hp = self.hp.saturating_sub(amount.max(0)).max(0);
        was_alive && self.is_fainted()
    }

    /// Restore HP up to the maximum. Fainted combatants are not revived.
    pub fn heal(&mut self, amount: i32) {
        if self.is_alive() {
            self.hp = self.hp.saturating_add(amount.max(0)).min(self.max_hp);
        }
    }

    pub fn set_hp(&mut self, hp: i32) {
        self.hp = hp.min(self.max_hp);
    }
}

/// A side's full roster (active + bench), in party order
///
/// The party owns its combatants; slots only hold indices into it.
/// Its length never changes during a battle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Party {
    members: Vec<Combatant>,
}

impl Party {
    pub fn new(members: Vec<Combatant>) -> Self {
        Self { members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Combatant> {
        self.members.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Combatant> {
        self.members.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combatant> {
        self.members.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Combatant> {
        self.members.iter_mut()
    }

    /// Count non-fainted members
    pub fn alive_count(&self) -> usize {
        self.members.iter().filter(|c| c.is_alive()).count()
    }

    /// Count fainted members
    pub fn fainted_count(&self) -> usize {
        self.members.len() - self.alive_count()
    }

    /// Check if every member has fainted (true for an empty party)
    pub fn all_fainted(&self) -> bool {
        self.members.iter().all(|c| c.is_fainted())
    }

    /// Indices of living members in party order
    pub fn alive_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.members
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(|(idx, _)| idx)
    }
}

impl From<Vec<Combatant>> for Party {
    fn from(members: Vec<Combatant>) -> Self {
        Self::new(members)
    }
}

impl FromIterator<Combatant> for Party {
    fn from_iter<I: IntoIterator<Item = Combatant>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_combatant_is_full_hp() {
        let c = Combatant::new("Pikachu", 35, 90);
        assert_eq!(c.hp, 35);
        assert!(c.is_alive());
        assert_eq!(c.hp_percent(), 100);
    }

    #[test]
    fn test_apply_damage_floors_at_zero() {
        let mut c = Combatant::new("Pikachu", 35, 90);

        assert!(!c.apply_damage(10));
        assert_eq!(c.hp, 25);

        assert!(c.apply_damage(100));
        assert_eq!(c.hp, 0);
        assert!(c.is_fainted());

        // Already fainted: no second knock-out reported
        assert!(!c.apply_damage(5));
    }

    #[test]
    fn test_heal_caps_and_skips_fainted() {
        let mut c = Combatant::new("Snorlax", 160, 30).with_hp(100);
        c.heal(500);
        assert_eq!(c.hp, 160);

        c.set_hp(0);
        c.heal(50);
        assert_eq!(c.hp, 0);
    }

    #[test]
    fn test_hp_percent_with_huge_hp() {
        let c = Combatant::new("Blissey", i32::MAX, 55);
        assert_eq!(c.hp_percent(), 100);

        let c = c.with_hp(i32::MAX / 2);
        assert_eq!(c.hp_percent(), 49);

        let c = Combatant::new("Blissey", 100, 55).with_hp(i32::MAX);
        assert_eq!(c.hp_percent(), 100);
    }

    #[test]
    fn test_negative_hp_counts_as_fainted() {
        let c = Combatant::new("Gengar", 60, 110).with_hp(-3);
        assert!(c.is_fainted());
        assert_eq!(c.hp_percent(), 0);
    }

    #[test]
    fn test_party_counts() {
        let party: Party = vec![
            Combatant::new("Pikachu", 35, 90),
            Combatant::new("Charizard", 78, 100).with_hp(0),
            Combatant::new("Blastoise", 79, 78),
        ]
        .into();

        assert_eq!(party.len(), 3);
        assert_eq!(party.alive_count(), 2);
        assert_eq!(party.fainted_count(), 1);
        assert_eq!(party.alive_indices().collect::<Vec<_>>(), vec![0, 2]);
        assert!(!party.all_fainted());
    }

    #[test]
    fn test_empty_party_is_all_fainted() {
        let party = Party::default();
        assert!(party.is_empty());
        assert!(party.all_fainted());
    }
}
