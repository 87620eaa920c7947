//! Named per-monster eligibility exceptions
//!
//! Each rule says which targets it applies to and which skills it lets
//! through. Rules are independent filters, so their order does not matter.

use crate::catalog::{Monster, Skill};
use crate::team::eligibility::EnabledSkill;

/// The only monster allowed to use cooking skills
pub const COOKING_MONSTER: &str = "Domovoy";

/// Monster restricted to support actions and traits
pub const NO_ATTACK_MONSTER: &str = "Sphinx";

#[derive(Clone, Copy)]
pub struct EligibilityOverride {
    pub name: &'static str,
    pub applies_to: fn(&Monster) -> bool,
    pub permits: fn(&Skill) -> bool,
}

pub static OVERRIDES: &[EligibilityOverride] = &[
    EligibilityOverride {
        name: "cooking skills",
        applies_to: not_cooking_monster,
        permits: not_cooking,
    },
    EligibilityOverride {
        name: "no attack actions",
        applies_to: is_no_attack_monster,
        permits: not_attack,
    },
];

fn not_cooking_monster(monster: &Monster) -> bool {
    monster.name != COOKING_MONSTER
}

fn not_cooking(skill: &Skill) -> bool {
    !skill.is_cooking()
}

fn is_no_attack_monster(monster: &Monster) -> bool {
    monster.name == NO_ATTACK_MONSTER
}

fn not_attack(skill: &Skill) -> bool {
    !skill.is_attack()
}

/// The first applicable override that forbids `target` from using `skill`
pub fn forbidding_override(target: &Monster, skill: &Skill) -> Option<&'static EligibilityOverride> {
    OVERRIDES
        .iter()
        .find(|rule| (rule.applies_to)(target) && !(rule.permits)(skill))
}

/// Whether every applicable override lets `target` use `skill`
pub fn permits(target: &Monster, skill: &Skill) -> bool {
    forbidding_override(target, skill).is_none()
}

/// Drop the skills an override forbids for `target`
pub fn apply_overrides<'a>(target: &Monster, skills: &[EnabledSkill<'a>]) -> Vec<EnabledSkill<'a>> {
    skills
        .iter()
        .filter(|enabled| match forbidding_override(target, enabled.skill) {
            Some(rule) => {
                tracing::debug!(
                    "Override '{}' removed {} for {}",
                    rule.name,
                    enabled.skill.name,
                    target
                );
                false
            }
            None => true,
        })
        .cloned()
        .collect()
}
