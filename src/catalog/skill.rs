//! Action and trait definitions

use crate::core::combo::TypeCombo;
use crate::core::types::{ActionCategory, Element, SkillKind, TypeTag};
use serde::{Deserialize, Serialize};

/// Marker in a description that flags a cooking skill
pub const COOKING_MARKER: &str = "Cooking";

/// An action or trait from the skill catalogs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub kind: SkillKind,
    /// Elements paid to use an action; ignored for traits
    pub mana_cost: Vec<Element>,
    /// Zero (starting), one, or two (Maverick) type tags
    pub types: Vec<TypeTag>,
    pub description: String,
    pub icon_filename: String,
    pub free_action: bool,
    pub is_support: bool,
    /// Monster this trait is the signature of, if any
    pub signature_monster: Option<String>,
}

impl Skill {
    pub fn new(name: impl Into<String>, kind: SkillKind, types: Vec<TypeTag>) -> Self {
        Self {
            name: name.into(),
            kind,
            mana_cost: Vec::new(),
            types,
            description: String::new(),
            icon_filename: String::new(),
            free_action: false,
            is_support: false,
            signature_monster: None,
        }
    }

    pub fn with_mana_cost(mut self, mana_cost: Vec<Element>) -> Self {
        self.mana_cost = mana_cost;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_flags(mut self, free_action: bool, is_support: bool) -> Self {
        self.free_action = free_action;
        self.is_support = is_support;
        self
    }

    pub fn is_action(&self) -> bool {
        self.kind == SkillKind::Action
    }

    pub fn is_trait(&self) -> bool {
        self.kind == SkillKind::Trait
    }

    /// Two-type skill that needs both types present across the party
    pub fn is_maverick(&self) -> bool {
        self.types.len() == 2
    }

    pub fn is_single_type(&self) -> bool {
        self.types.len() == 1
    }

    /// No type requirement; always available
    pub fn is_starting_only(&self) -> bool {
        self.types.is_empty()
    }

    /// Canonical pair for a Maverick skill
    pub fn combo(&self) -> Option<TypeCombo> {
        match self.types.as_slice() {
            [a, b] => TypeCombo::new(*a, *b),
            _ => None,
        }
    }

    pub fn has_element(&self, element: Element) -> bool {
        self.mana_cost.contains(&element)
    }

    /// `None` for traits
    pub fn action_category(&self) -> Option<ActionCategory> {
        match self.kind {
            SkillKind::Action => Some(ActionCategory::from_flags(self.free_action, self.is_support)),
            SkillKind::Trait => None,
        }
    }

    pub fn is_dedicated_support(&self) -> bool {
        self.action_category() == Some(ActionCategory::DedicatedSupport)
    }

    pub fn is_attack(&self) -> bool {
        self.action_category() == Some(ActionCategory::Attack)
    }

    pub fn is_cooking(&self) -> bool {
        self.description.contains(COOKING_MARKER)
    }

    pub fn icon_path(&self) -> String {
        match self.kind {
            SkillKind::Action => format!("/assets/actions/{}", self.icon_filename),
            SkillKind::Trait => format!("/assets/traits/{}", self.icon_filename),
        }
    }
}
