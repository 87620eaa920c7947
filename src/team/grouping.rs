//! Result organizer: group eligible skills for display
//!
//! Two strategies share the same input. The shared strategy puts each skill
//! in exactly one group keyed by its full enabler set. The per-monster
//! strategy gives every enabler its own group, so a skill with two enablers
//! appears twice.

use ahash::AHashMap;

use crate::catalog::Monster;
use crate::core::config::GroupingStrategy;
use crate::team::eligibility::EnabledSkill;
use crate::team::overrides::apply_overrides;
use crate::team::resolver::EnablerCategory;

/// Separator between monster slugs in a shared group key
const GROUP_KEY_SEPARATOR: &str = "|";

#[derive(Debug, Clone)]
pub struct SkillGroup<'a> {
    pub enablers: Vec<&'a Monster>,
    /// Sorted by skill name
    pub skills: Vec<EnabledSkill<'a>>,
    pub group_key: String,
    pub category: EnablerCategory,
}

impl<'a> SkillGroup<'a> {
    pub fn actions(&self) -> impl Iterator<Item = &EnabledSkill<'a>> {
        self.skills.iter().filter(|s| s.skill.is_action())
    }

    pub fn traits(&self) -> impl Iterator<Item = &EnabledSkill<'a>> {
        self.skills.iter().filter(|s| s.skill.is_trait())
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

/// Group by exact enabler set, ordered external, mixed, self-only
pub fn group_skills_by_enablers<'a>(
    skills: &[EnabledSkill<'a>],
    target: &Monster,
) -> Vec<SkillGroup<'a>> {
    let mut groups: Vec<SkillGroup<'a>> = Vec::new();
    let mut index_by_key: AHashMap<String, usize> = AHashMap::new();

    for enabled in apply_overrides(target, skills) {
        let mut enablers = enabled.enabled_by.clone();
        enablers.sort_by_key(|m| m.id());
        let group_key = enablers
            .iter()
            .map(|m| m.slug())
            .collect::<Vec<_>>()
            .join(GROUP_KEY_SEPARATOR);

        match index_by_key.get(&group_key) {
            Some(&index) => groups[index].skills.push(enabled),
            None => {
                index_by_key.insert(group_key.clone(), groups.len());
                groups.push(SkillGroup {
                    category: EnablerCategory::classify(target, &enablers),
                    enablers,
                    skills: vec![enabled],
                    group_key,
                });
            }
        }
    }

    finish(groups)
}

/// One group per individual enabler, ordered external then self
pub fn group_skills_by_individual_enablers<'a>(
    skills: &[EnabledSkill<'a>],
    target: &Monster,
) -> Vec<SkillGroup<'a>> {
    let mut groups: Vec<SkillGroup<'a>> = Vec::new();
    let mut index_by_key: AHashMap<String, usize> = AHashMap::new();

    for enabled in apply_overrides(target, skills) {
        for &enabler in &enabled.enabled_by {
            let group_key = enabler.slug();
            match index_by_key.get(&group_key) {
                Some(&index) => groups[index].skills.push(enabled.clone()),
                None => {
                    let category = if enabler.same_as(target) {
                        EnablerCategory::SelfOnly
                    } else {
                        EnablerCategory::External
                    };
                    index_by_key.insert(group_key.clone(), groups.len());
                    groups.push(SkillGroup {
                        enablers: vec![enabler],
                        skills: vec![enabled.clone()],
                        group_key,
                        category,
                    });
                }
            }
        }
    }

    finish(groups)
}

/// Group with the chosen strategy
pub fn organize<'a>(
    strategy: GroupingStrategy,
    skills: &[EnabledSkill<'a>],
    target: &Monster,
) -> Vec<SkillGroup<'a>> {
    match strategy {
        GroupingStrategy::Shared => group_skills_by_enablers(skills, target),
        GroupingStrategy::PerMonster => group_skills_by_individual_enablers(skills, target),
    }
}

fn finish(mut groups: Vec<SkillGroup<'_>>) -> Vec<SkillGroup<'_>> {
    for group in &mut groups {
        group.skills.sort_by(|a, b| a.skill.name.cmp(&b.skill.name));
    }
    groups.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| a.group_key.cmp(&b.group_key))
    });
    groups
}
