//! Monster entities

use crate::core::combo::TypeCombo;
use crate::core::error::{Result, ScrollError};
use crate::core::types::{Element, TypeTag};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Suffix marking a shifted variant in party slugs
const SHIFTED_SLUG_SUFFIX: &str = "-shifted";

/// Unique key of a monster: the same base creature may exist shifted
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonsterId {
    pub name: String,
    pub shifted: bool,
}

impl MonsterId {
    pub fn new(name: impl Into<String>, shifted: bool) -> Self {
        Self {
            name: name.into(),
            shifted,
        }
    }

    /// Party slug: `Name` or `Name-shifted`
    pub fn slug(&self) -> String {
        if self.shifted {
            format!("{}{}", self.name, SHIFTED_SLUG_SUFFIX)
        } else {
            self.name.clone()
        }
    }

    pub fn from_slug(slug: &str) -> Self {
        match slug.strip_suffix(SHIFTED_SLUG_SUFFIX) {
            Some(name) => Self::new(name, true),
            None => Self::new(slug, false),
        }
    }
}

impl fmt::Display for MonsterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.shifted {
            write!(f, "{} (Shifted)", self.name)
        } else {
            f.write_str(&self.name)
        }
    }
}

/// A monster as loaded from the catalog; immutable after load
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Monster {
    pub name: String,
    pub shifted: bool,
    pub types: [TypeTag; 3],
    /// One or two elements
    pub elements: Vec<Element>,
    pub signature_trait: Option<String>,
    pub starting_hp: Option<f64>,
    pub portrait_filename: Option<String>,
}

impl Monster {
    pub fn new(
        name: impl Into<String>,
        shifted: bool,
        types: [TypeTag; 3],
        elements: Vec<Element>,
    ) -> Result<Self> {
        let name = name.into();
        if elements.is_empty() || elements.len() > 2 {
            return Err(ScrollError::contract(format!(
                "{} must have 1 or 2 elements, got {}",
                name,
                elements.len()
            )));
        }
        Ok(Self {
            name,
            shifted,
            types,
            elements,
            signature_trait: None,
            starting_hp: None,
            portrait_filename: None,
        })
    }

    pub fn with_signature_trait(mut self, name: impl Into<String>) -> Self {
        self.signature_trait = Some(name.into());
        self
    }

    pub fn with_starting_hp(mut self, hp: f64) -> Self {
        self.starting_hp = Some(hp);
        self
    }

    pub fn with_portrait_filename(mut self, filename: impl Into<String>) -> Self {
        self.portrait_filename = Some(filename.into());
        self
    }

    pub fn id(&self) -> MonsterId {
        MonsterId::new(self.name.clone(), self.shifted)
    }

    pub fn slug(&self) -> String {
        self.id().slug()
    }

    /// Identity comparison: name and shifted flag
    pub fn same_as(&self, other: &Monster) -> bool {
        self.shifted == other.shifted && self.name == other.name
    }

    pub fn has_type(&self, tag: TypeTag) -> bool {
        self.types.contains(&tag)
    }

    pub fn has_element(&self, element: Element) -> bool {
        self.elements.contains(&element)
    }

    /// Portrait asset path, derived from name and shifted flag
    pub fn image_path(&self) -> String {
        let suffix = if self.shifted { "_Shifted" } else { "" };
        format!("/assets/monsters/{}{}_Portrait.webp", self.name, suffix)
    }

    /// The pairs this monster forms from its own three types
    pub fn self_type_combinations(&self) -> Vec<TypeCombo> {
        let mut combos = Vec::with_capacity(3);
        for i in 0..self.types.len() {
            for j in (i + 1)..self.types.len() {
                if let Some(combo) = TypeCombo::new(self.types[i], self.types[j]) {
                    if !combos.contains(&combo) {
                        combos.push(combo);
                    }
                }
            }
        }
        combos
    }
}

impl fmt::Display for Monster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
