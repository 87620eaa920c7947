//! Skill eligibility engine
//!
//! Turns the resolver's combination map into the concrete, attributed list
//! of actions and traits a target monster can use with its current party.

use crate::catalog::{Monster, Skill};
use crate::core::error::Result;
use crate::core::types::Element;
use crate::team::overrides::apply_overrides;
use crate::team::party::Party;
use crate::team::resolver::{ComboMap, EnablerCategory};

/// Query options for [`get_monster_skills`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillQuery {
    /// Only two-type (Maverick) skills; otherwise single-type skills too
    pub maverick_only: bool,
}

impl Default for SkillQuery {
    fn default() -> Self {
        Self { maverick_only: true }
    }
}

impl SkillQuery {
    pub fn maverick_only() -> Self {
        Self::default()
    }

    pub fn all_skills() -> Self {
        Self { maverick_only: false }
    }
}

/// A skill the target can use, with the monsters that justify it
#[derive(Debug, Clone)]
pub struct EnabledSkill<'a> {
    pub skill: &'a Skill,
    /// Empty only for always-available skills
    pub enabled_by: Vec<&'a Monster>,
    pub always_available: bool,
}

impl<'a> EnabledSkill<'a> {
    pub fn category(&self, target: &Monster) -> EnablerCategory {
        EnablerCategory::classify(target, &self.enabled_by)
    }

    pub fn is_enabled_by(&self, monster: &Monster) -> bool {
        self.enabled_by.iter().any(|m| m.same_as(monster))
    }
}

/// Whether the monster can pay for the action
///
/// Wild pays for anything; otherwise one shared element is enough.
pub fn check_element_match(monster: &Monster, action: &Skill) -> bool {
    monster.has_element(Element::Wild)
        || action
            .mana_cost
            .iter()
            .any(|element| monster.has_element(*element))
}

/// Resolve the skills `target` can use with `party`
///
/// The party has one to three members and must contain the target; missing
/// slots are padded with the target. The result has the per-monster
/// overrides applied and is ordered by [`sort_enabled_skills_by_source`].
pub fn get_monster_skills<'a>(
    target: &'a Monster,
    party: &[&'a Monster],
    actions: &'a [Skill],
    traits: &'a [Skill],
    query: SkillQuery,
) -> Result<Vec<EnabledSkill<'a>>> {
    let party = Party::new(party.to_vec())?;
    let slots = party.padded_for(target)?;
    let combos = ComboMap::resolve(target, &slots);

    let mut enabled = Vec::new();

    for skill in actions.iter().chain(traits) {
        let Some(combo) = skill.combo() else {
            continue;
        };
        let Some(enablers) = combos.get(&combo) else {
            continue;
        };
        if skill.is_action() && !check_element_match(target, skill) {
            continue;
        }
        enabled.push(EnabledSkill {
            skill,
            enabled_by: enablers.to_vec(),
            always_available: false,
        });
    }

    if !query.maverick_only {
        for skill in actions.iter().chain(traits) {
            let [tag] = skill.types.as_slice() else {
                continue;
            };
            if !target.has_type(*tag) {
                continue;
            }
            if skill.is_action() && !check_element_match(target, skill) {
                continue;
            }
            enabled.push(EnabledSkill {
                skill,
                enabled_by: vec![target],
                always_available: false,
            });
        }
    }

    tracing::debug!(
        "{} with party of {}: {} skills before overrides",
        target,
        party.len(),
        enabled.len()
    );

    Ok(sort_enabled_skills_by_source(&enabled, target))
}

/// Apply overrides, then order external, mixed, self-only; by name within each
pub fn sort_enabled_skills_by_source<'a>(
    skills: &[EnabledSkill<'a>],
    target: &Monster,
) -> Vec<EnabledSkill<'a>> {
    let mut sorted = apply_overrides(target, skills);
    sorted.sort_by(|a, b| {
        a.category(target)
            .cmp(&b.category(target))
            .then_with(|| a.skill.name.cmp(&b.skill.name))
    });
    sorted
}
