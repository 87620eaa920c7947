//! Team combination resolver
//!
//! For a target monster in a three-slot party, pair each of the target's
//! types with each type of every slot (the target included) and record which
//! slot supplied the second type. The enabler of a combination is therefore
//! whoever contributed the partner type, not whoever merely has one of the
//! two tags.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::Monster;
use crate::core::combo::TypeCombo;
use crate::core::error::{Result, ScrollError};
use crate::core::types::TypeTag;
use crate::team::party::PARTY_SLOTS;

/// Where the enablers of a combination or skill come from, relative to a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnablerCategory {
    /// Only teammates enable it
    External,
    /// The target and at least one teammate
    Mixed,
    /// Only the target
    SelfOnly,
}

impl EnablerCategory {
    pub fn classify(target: &Monster, enablers: &[&Monster]) -> Self {
        let has_self = enablers.iter().any(|m| m.same_as(target));
        if !has_self {
            EnablerCategory::External
        } else if enablers.len() == 1 {
            EnablerCategory::SelfOnly
        } else {
            EnablerCategory::Mixed
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EnablerCategory::External => "external",
            EnablerCategory::Mixed => "mixed",
            EnablerCategory::SelfOnly => "self",
        }
    }
}

/// A reachable combination and the party members that supply it
#[derive(Debug, Clone)]
pub struct EnabledCombo<'a> {
    pub combo: TypeCombo,
    /// First-discovery order
    pub enabled_by: Vec<&'a Monster>,
}

impl<'a> EnabledCombo<'a> {
    pub fn key(&self) -> String {
        self.combo.key()
    }

    pub fn category(&self, target: &Monster) -> EnablerCategory {
        EnablerCategory::classify(target, &self.enabled_by)
    }
}

/// Combinations reachable by one target, keyed by canonical pair
#[derive(Debug, Clone, Default)]
pub struct ComboMap<'a> {
    entries: BTreeMap<TypeCombo, Vec<&'a Monster>>,
}

impl<'a> ComboMap<'a> {
    /// Resolve every combination `target` can reach with `slots`
    pub fn resolve(target: &'a Monster, slots: &[&'a Monster]) -> Self {
        let mut entries: BTreeMap<TypeCombo, Vec<&'a Monster>> = BTreeMap::new();

        for &other in slots {
            for &mine in &target.types {
                for &theirs in &other.types {
                    let Some(combo) = TypeCombo::new(mine, theirs) else {
                        continue;
                    };
                    let enablers = entries.entry(combo).or_default();
                    if !enablers.iter().any(|m| m.same_as(other)) {
                        enablers.push(other);
                    }
                }
            }
        }

        tracing::debug!(
            "{} reaches {} combinations across {} slots",
            target,
            entries.len(),
            slots.len()
        );
        Self { entries }
    }

    pub fn get(&self, combo: &TypeCombo) -> Option<&[&'a Monster]> {
        self.entries.get(combo).map(Vec::as_slice)
    }

    pub fn contains(&self, combo: &TypeCombo) -> bool {
        self.entries.contains_key(combo)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in canonical key order
    pub fn iter(&self) -> impl Iterator<Item = (&TypeCombo, &[&'a Monster])> {
        self.entries.iter().map(|(combo, enablers)| (combo, enablers.as_slice()))
    }

    pub fn into_enabled_combos(self) -> Vec<EnabledCombo<'a>> {
        self.entries
            .into_iter()
            .map(|(combo, enabled_by)| EnabledCombo { combo, enabled_by })
            .collect()
    }
}

/// All combinations enabled for one member of the party
#[derive(Debug, Clone)]
pub struct MonsterEnabledCombos<'a> {
    pub monster: &'a Monster,
    pub enabled_combos: Vec<EnabledCombo<'a>>,
}

/// Resolve combinations for every member of an exactly three-slot party
pub fn group_enabled_combos<'a>(monsters: &[&'a Monster]) -> Result<Vec<MonsterEnabledCombos<'a>>> {
    if monsters.len() != PARTY_SLOTS {
        return Err(ScrollError::contract(format!(
            "Expected exactly {} monsters, got {}",
            PARTY_SLOTS,
            monsters.len()
        )));
    }

    Ok(monsters
        .iter()
        .map(|&monster| MonsterEnabledCombos {
            monster,
            enabled_combos: ComboMap::resolve(monster, monsters).into_enabled_combos(),
        })
        .collect())
}

/// Resolve combinations for one target of a three-slot party
pub fn monster_enabled_combos<'a>(
    target: &'a Monster,
    monsters: &[&'a Monster],
) -> Result<MonsterEnabledCombos<'a>> {
    if monsters.len() != PARTY_SLOTS {
        return Err(ScrollError::contract(format!(
            "Expected exactly {} monsters, got {}",
            PARTY_SLOTS,
            monsters.len()
        )));
    }
    if !monsters.iter().any(|m| m.same_as(target)) {
        return Err(ScrollError::contract(format!(
            "Target monster {} not found in the provided group",
            target
        )));
    }

    Ok(MonsterEnabledCombos {
        monster: target,
        enabled_combos: ComboMap::resolve(target, monsters).into_enabled_combos(),
    })
}

/// Order combos external, then mixed, then self-only; alphabetical within each
pub fn sort_enabled_combos_by_source<'a>(
    combos: &[EnabledCombo<'a>],
    target: &Monster,
) -> Vec<EnabledCombo<'a>> {
    let mut sorted = combos.to_vec();
    sorted.sort_by_key(|c| (c.category(target), c.combo));
    sorted
}

/// Every distinct type across the monsters, sorted
pub fn all_types(monsters: &[&Monster]) -> Vec<TypeTag> {
    let mut types: Vec<TypeTag> = monsters.iter().flat_map(|m| m.types).collect();
    types.sort();
    types.dedup();
    types
}

pub fn monsters_with_type<'a>(monsters: &[&'a Monster], tag: TypeTag) -> Vec<&'a Monster> {
    monsters.iter().copied().filter(|m| m.has_type(tag)).collect()
}

/// Every pair over the union of the monsters' types
///
/// With `ignore_self_combinations`, pairs that any single monster can form
/// from its own types are dropped, leaving only cross-monster pairs.
pub fn type_combinations(monsters: &[&Monster], ignore_self_combinations: bool) -> Vec<TypeCombo> {
    let types = all_types(monsters);
    let mut combos = Vec::new();
    for (i, &a) in types.iter().enumerate() {
        for &b in &types[i + 1..] {
            if let Some(combo) = TypeCombo::new(a, b) {
                combos.push(combo);
            }
        }
    }

    if ignore_self_combinations {
        let own: Vec<TypeCombo> = monsters
            .iter()
            .flat_map(|m| m.self_type_combinations())
            .collect();
        combos.retain(|combo| !own.contains(combo));
    }

    combos
}
