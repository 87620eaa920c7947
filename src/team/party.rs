//! Party selection and the three-slot padding rule

use crate::catalog::{Catalog, Monster};
use crate::core::error::{Result, ScrollError};

/// Number of slots in a full party
pub const PARTY_SLOTS: usize = 3;

/// One to three selected monsters, borrowed from the catalog
#[derive(Debug, Clone)]
pub struct Party<'a> {
    members: Vec<&'a Monster>,
}

impl<'a> Party<'a> {
    pub fn new(members: Vec<&'a Monster>) -> Result<Self> {
        if members.is_empty() || members.len() > PARTY_SLOTS {
            return Err(ScrollError::contract(format!(
                "Expected 1-{} monsters, got {}",
                PARTY_SLOTS,
                members.len()
            )));
        }
        Ok(Self { members })
    }

    /// Resolve party slugs against the catalog; empty slots are skipped
    pub fn from_slugs<S: AsRef<str>>(catalog: &'a Catalog, slugs: &[S]) -> Result<Self> {
        let mut members = Vec::with_capacity(PARTY_SLOTS);
        for slug in slugs.iter().map(AsRef::as_ref) {
            let slug = slug.trim();
            if slug.is_empty() {
                continue;
            }
            let monster = catalog
                .monster_by_slug(slug)
                .ok_or_else(|| ScrollError::UnknownMonster(slug.to_string()))?;
            members.push(monster);
        }
        Self::new(members)
    }

    pub fn members(&self) -> &[&'a Monster] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, monster: &Monster) -> bool {
        self.members.iter().any(|m| m.same_as(monster))
    }

    /// Fill missing slots with the target itself
    ///
    /// Padding with the target only ever adds self-combinations, which the
    /// target can already form alone.
    pub fn padded_for(&self, target: &'a Monster) -> Result<[&'a Monster; PARTY_SLOTS]> {
        if !self.contains(target) {
            return Err(ScrollError::contract(format!(
                "Target monster {} not found in the provided party",
                target
            )));
        }
        let mut slots = [target; PARTY_SLOTS];
        for (slot, &member) in slots.iter_mut().zip(&self.members) {
            *slot = member;
        }
        Ok(slots)
    }
}
