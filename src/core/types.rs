//! Core vocabulary shared by the catalog and the team resolver

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gameplay category label carried by monsters and skills
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TypeTag {
    Aether,
    Affliction,
    Age,
    Burn,
    Critical,
    Dodge,
    Force,
    Heal,
    Poison,
    Power,
    Purge,
    Regeneration,
    Shield,
    Sidekick,
    Summon,
    Tank,
    Terror,
    Weakness,
}

impl TypeTag {
    /// Every tag, in alphabetical order
    pub const ALL: [TypeTag; 18] = [
        TypeTag::Aether,
        TypeTag::Affliction,
        TypeTag::Age,
        TypeTag::Burn,
        TypeTag::Critical,
        TypeTag::Dodge,
        TypeTag::Force,
        TypeTag::Heal,
        TypeTag::Poison,
        TypeTag::Power,
        TypeTag::Purge,
        TypeTag::Regeneration,
        TypeTag::Shield,
        TypeTag::Sidekick,
        TypeTag::Summon,
        TypeTag::Tank,
        TypeTag::Terror,
        TypeTag::Weakness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Aether => "Aether",
            TypeTag::Affliction => "Affliction",
            TypeTag::Age => "Age",
            TypeTag::Burn => "Burn",
            TypeTag::Critical => "Critical",
            TypeTag::Dodge => "Dodge",
            TypeTag::Force => "Force",
            TypeTag::Heal => "Heal",
            TypeTag::Poison => "Poison",
            TypeTag::Power => "Power",
            TypeTag::Purge => "Purge",
            TypeTag::Regeneration => "Regeneration",
            TypeTag::Shield => "Shield",
            TypeTag::Sidekick => "Sidekick",
            TypeTag::Summon => "Summon",
            TypeTag::Tank => "Tank",
            TypeTag::Terror => "Terror",
            TypeTag::Weakness => "Weakness",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeTag::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| format!("Invalid type tag: {}", s))
    }
}

/// Elemental affinity of a monster, or a mana cost component of an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Water,
    Earth,
    Wind,
    /// Matches any mana cost
    Wild,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Fire,
        Element::Water,
        Element::Earth,
        Element::Wind,
        Element::Wild,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Earth => "Earth",
            Element::Wind => "Wind",
            Element::Wild => "Wild",
        }
    }

    /// Small element icon shown next to mana costs
    pub fn icon_path(&self) -> String {
        format!("/assets/actions/16px-{}_element.webp", self.as_str())
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Element {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Element::ALL
            .iter()
            .copied()
            .find(|element| element.as_str() == s)
            .ok_or_else(|| format!("Invalid element: {}", s))
    }
}

/// Which catalog a skill belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillKind {
    Action,
    Trait,
}

impl SkillKind {
    pub const ALL: [SkillKind; 2] = [SkillKind::Action, SkillKind::Trait];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillKind::Action => "Action",
            SkillKind::Trait => "Trait",
        }
    }
}

impl fmt::Display for SkillKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Invalid skillType: {}", s))
    }
}

/// Display and override category of an action, derived from its flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionCategory {
    Attack,
    /// Free action usable for support
    Support,
    /// Support action that costs the turn
    DedicatedSupport,
}

impl ActionCategory {
    /// Classify from the stored `freeAction` / `isSupport` flags
    pub fn from_flags(free_action: bool, is_support: bool) -> Self {
        match (free_action, is_support) {
            (true, true) => ActionCategory::Support,
            (false, true) => ActionCategory::DedicatedSupport,
            _ => ActionCategory::Attack,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_tag_round_trips_through_str() {
        for tag in TypeTag::ALL {
            assert_eq!(tag.as_str().parse::<TypeTag>().unwrap(), tag);
        }
    }

    #[test]
    fn test_type_tag_all_is_sorted() {
        let mut sorted = TypeTag::ALL;
        sorted.sort();
        assert_eq!(sorted, TypeTag::ALL);
        // Enum order must agree with string order so canonical keys sort the same way
        let names: Vec<_> = TypeTag::ALL.iter().map(|t| t.as_str()).collect();
        let mut sorted_names = names.clone();
        sorted_names.sort();
        assert_eq!(names, sorted_names);
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let err = "Bogus".parse::<TypeTag>().unwrap_err();
        assert!(err.contains("Bogus"));
    }

    #[test]
    fn test_element_parse() {
        assert_eq!("Wild".parse::<Element>().unwrap(), Element::Wild);
        assert!("Lightning".parse::<Element>().is_err());
    }

    #[test]
    fn test_element_icon_path() {
        assert_eq!(
            Element::Fire.icon_path(),
            "/assets/actions/16px-Fire_element.webp"
        );
    }

    #[test]
    fn test_action_category_from_flags() {
        assert_eq!(ActionCategory::from_flags(true, true), ActionCategory::Support);
        assert_eq!(
            ActionCategory::from_flags(false, true),
            ActionCategory::DedicatedSupport
        );
        assert_eq!(ActionCategory::from_flags(true, false), ActionCategory::Attack);
        assert_eq!(ActionCategory::from_flags(false, false), ActionCategory::Attack);
    }
}
