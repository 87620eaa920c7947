//! Team composition: which Maverick skills a party unlocks for each member
//!
//! Data flows party -> [`resolver`] (reachable type pairs and who supplies
//! them) -> [`eligibility`] (matching skills, element gate, overrides) ->
//! [`grouping`] (display groups).

pub mod eligibility;
pub mod grouping;
pub mod overrides;
pub mod party;
pub mod resolver;

pub use eligibility::{check_element_match, get_monster_skills, sort_enabled_skills_by_source, EnabledSkill, SkillQuery};
pub use grouping::{group_skills_by_enablers, group_skills_by_individual_enablers, organize, SkillGroup};
pub use overrides::{
    apply_overrides, forbidding_override, permits, EligibilityOverride, COOKING_MONSTER,
    NO_ATTACK_MONSTER, OVERRIDES,
};
pub use party::{Party, PARTY_SLOTS};
pub use resolver::{
    all_types, group_enabled_combos, monster_enabled_combos, monsters_with_type,
    sort_enabled_combos_by_source, type_combinations, ComboMap, EnabledCombo, EnablerCategory,
    MonsterEnabledCombos,
};
