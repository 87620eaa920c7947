//! Immutable in-memory catalog of monsters, actions and traits
//!
//! Built once at startup and passed by reference to the resolver and the
//! eligibility engine.

use ahash::AHashMap;

use crate::catalog::loader::{load_monsters_from_file, load_skills_from_file};
use crate::catalog::monster::{Monster, MonsterId};
use crate::catalog::skill::Skill;
use crate::core::config::ScrollConfig;
use crate::core::error::{Result, ScrollError};
use crate::core::types::SkillKind;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Sorted by name, unshifted before shifted
    monsters: Vec<Monster>,
    actions: Vec<Skill>,
    traits: Vec<Skill>,
    by_id: AHashMap<MonsterId, usize>,
    actions_by_name: AHashMap<String, usize>,
    traits_by_name: AHashMap<String, usize>,
}

impl Catalog {
    /// Assemble a catalog; monster keys and skill names must be unique
    pub fn new(mut monsters: Vec<Monster>, actions: Vec<Skill>, traits: Vec<Skill>) -> Result<Self> {
        monsters.sort_by(|a, b| a.name.cmp(&b.name).then(a.shifted.cmp(&b.shifted)));

        let mut by_id = AHashMap::with_capacity(monsters.len());
        for (index, monster) in monsters.iter().enumerate() {
            if by_id.insert(monster.id(), index).is_some() {
                return Err(ScrollError::DuplicateMonster(monster.id().to_string()));
            }
        }

        let actions_by_name = index_skills(&actions, SkillKind::Action)?;
        let traits_by_name = index_skills(&traits, SkillKind::Trait)?;

        let catalog = Self {
            monsters,
            actions,
            traits,
            by_id,
            actions_by_name,
            traits_by_name,
        };
        catalog.warn_missing_signatures();
        Ok(catalog)
    }

    /// Read the three catalog files named by `config`
    pub fn load(config: &ScrollConfig) -> Result<Self> {
        let monsters = load_monsters_from_file(&config.monsters_path())?;
        let actions = load_skills_from_file(&config.actions_path(), SkillKind::Action)?;
        let traits = load_skills_from_file(&config.traits_path(), SkillKind::Trait)?;
        Self::new(monsters, actions, traits)
    }

    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    pub fn actions(&self) -> &[Skill] {
        &self.actions
    }

    pub fn traits(&self) -> &[Skill] {
        &self.traits
    }

    pub fn monster(&self, id: &MonsterId) -> Option<&Monster> {
        self.by_id.get(id).map(|&index| &self.monsters[index])
    }

    /// Look up a monster by party slug (`Name` or `Name-shifted`)
    pub fn monster_by_slug(&self, slug: &str) -> Option<&Monster> {
        self.monster(&MonsterId::from_slug(slug))
    }

    pub fn action(&self, name: &str) -> Option<&Skill> {
        self.actions_by_name.get(name).map(|&index| &self.actions[index])
    }

    pub fn trait_named(&self, name: &str) -> Option<&Skill> {
        self.traits_by_name.get(name).map(|&index| &self.traits[index])
    }

    /// The trait a monster names as its signature, if present in the catalog
    pub fn signature_trait(&self, monster: &Monster) -> Option<&Skill> {
        monster
            .signature_trait
            .as_deref()
            .and_then(|name| self.trait_named(name))
    }

    fn warn_missing_signatures(&self) {
        for monster in &self.monsters {
            if let Some(name) = monster.signature_trait.as_deref() {
                if self.trait_named(name).is_none() {
                    tracing::warn!(
                        "{} names signature trait '{}' which is not in the trait catalog",
                        monster,
                        name
                    );
                }
            }
        }
    }
}

fn index_skills(skills: &[Skill], kind: SkillKind) -> Result<AHashMap<String, usize>> {
    let mut by_name = AHashMap::with_capacity(skills.len());
    for (index, skill) in skills.iter().enumerate() {
        if by_name.insert(skill.name.clone(), index).is_some() {
            return Err(ScrollError::DuplicateSkill {
                kind,
                name: skill.name.clone(),
            });
        }
    }
    Ok(by_name)
}
