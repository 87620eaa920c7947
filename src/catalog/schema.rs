//! Declarative field schemas for raw catalog records
//!
//! Each entity kind has a static list of field rules. Checking a record
//! against its schema yields every reason the record is invalid, so the
//! loader can report all problems in one pass before anything is built.

use crate::core::types::{Element, SkillKind, TypeTag};
use serde_json::Value;

/// Closed vocabulary an enumerated field must draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vocabulary {
    TypeTag,
    Element,
    SkillKind,
}

impl Vocabulary {
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Vocabulary::TypeTag => value.parse::<TypeTag>().is_ok(),
            Vocabulary::Element => value.parse::<Element>().is_ok(),
            Vocabulary::SkillKind => value.parse::<SkillKind>().is_ok(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Vocabulary::TypeTag => "type tag",
            Vocabulary::Element => "element",
            Vocabulary::SkillKind => "skillType",
        }
    }
}

/// Constraint on a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Present, a string, and not empty
    RequiredString,
    RequiredBool,
    /// A string from the vocabulary
    RequiredEnum(Vocabulary),
    /// An array of vocabulary strings with a length in `min..=max`
    EnumList {
        vocabulary: Vocabulary,
        min: usize,
        max: usize,
    },
    OptionalString,
    OptionalBool,
    /// Any JSON number; `null` allowed
    OptionalNumber,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub rule: FieldRule,
}

const fn field(name: &'static str, rule: FieldRule) -> FieldSpec {
    FieldSpec { name, rule }
}

/// Field rules for one entity kind
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub entity: &'static str,
    pub fields: &'static [FieldSpec],
}

pub const MONSTER_SCHEMA: Schema = Schema {
    entity: "monster",
    fields: &[
        field("name", FieldRule::RequiredString),
        field("shifted", FieldRule::RequiredBool),
        field(
            "types",
            FieldRule::EnumList {
                vocabulary: Vocabulary::TypeTag,
                min: 3,
                max: 3,
            },
        ),
        field(
            "elements",
            FieldRule::EnumList {
                vocabulary: Vocabulary::Element,
                min: 1,
                max: 2,
            },
        ),
        field("signatureTrait", FieldRule::OptionalString),
        field("startingHP", FieldRule::OptionalNumber),
        field("portraitFilename", FieldRule::OptionalString),
    ],
};

pub const SKILL_SCHEMA: Schema = Schema {
    entity: "skill",
    fields: &[
        field("name", FieldRule::RequiredString),
        field("skillType", FieldRule::RequiredEnum(Vocabulary::SkillKind)),
        field(
            "manaCost",
            FieldRule::EnumList {
                vocabulary: Vocabulary::Element,
                min: 0,
                max: usize::MAX,
            },
        ),
        field(
            "types",
            FieldRule::EnumList {
                vocabulary: Vocabulary::TypeTag,
                min: 0,
                max: 2,
            },
        ),
        field("description", FieldRule::RequiredString),
        field("iconFilename", FieldRule::RequiredString),
        field("freeAction", FieldRule::OptionalBool),
        field("isSupport", FieldRule::OptionalBool),
        field("signatureMonster", FieldRule::OptionalString),
    ],
};

impl Schema {
    /// Every reason `record` violates this schema; empty when valid
    pub fn check(&self, record: &Value) -> Vec<String> {
        let Some(object) = record.as_object() else {
            return vec![format!("{} record must be an object", self.entity)];
        };

        let mut reasons = Vec::new();
        for spec in self.fields {
            let value = object.get(spec.name).filter(|v| !v.is_null());
            check_field(spec, value, &mut reasons);
        }
        reasons
    }
}

fn check_field(spec: &FieldSpec, value: Option<&Value>, reasons: &mut Vec<String>) {
    let name = spec.name;
    match spec.rule {
        FieldRule::RequiredString => {
            if !value.and_then(Value::as_str).is_some_and(|s| !s.is_empty()) {
                reasons.push(format!("Missing or invalid \"{}\" field", name));
            }
        }
        FieldRule::RequiredBool => {
            if !value.is_some_and(Value::is_boolean) {
                reasons.push(format!(
                    "Missing or invalid \"{}\" field (must be boolean)",
                    name
                ));
            }
        }
        FieldRule::RequiredEnum(vocabulary) => match value.and_then(Value::as_str) {
            None => reasons.push(format!("Missing or invalid \"{}\" field", name)),
            Some(s) if !vocabulary.accepts(s) => {
                reasons.push(format!("Invalid {}: {}", vocabulary.label(), s))
            }
            Some(_) => {}
        },
        FieldRule::EnumList {
            vocabulary,
            min,
            max,
        } => {
            let Some(items) = value.and_then(Value::as_array) else {
                reasons.push(format!(
                    "Missing or invalid \"{}\" field (must be array)",
                    name
                ));
                return;
            };
            if items.len() < min || items.len() > max {
                reasons.push(format!(
                    "{} array must have {} elements, got {}",
                    name,
                    describe_bounds(min, max),
                    items.len()
                ));
            }
            for item in items {
                match item.as_str() {
                    Some(s) if vocabulary.accepts(s) => {}
                    Some(s) => reasons.push(format!(
                        "Invalid {} in {}: {}",
                        vocabulary.label(),
                        name,
                        s
                    )),
                    None => reasons.push(format!(
                        "Invalid {} in {}: {}",
                        vocabulary.label(),
                        name,
                        item
                    )),
                }
            }
        }
        FieldRule::OptionalString => {
            if value.is_some_and(|v| !v.is_string()) {
                reasons.push(format!("{} must be a string if provided", name));
            }
        }
        FieldRule::OptionalBool => {
            if value.is_some_and(|v| !v.is_boolean()) {
                reasons.push(format!("{} must be a boolean if provided", name));
            }
        }
        FieldRule::OptionalNumber => {
            if value.is_some_and(|v| !v.is_number()) {
                reasons.push(format!("{} must be a number if provided", name));
            }
        }
    }
}

fn describe_bounds(min: usize, max: usize) -> String {
    if min == max {
        format!("exactly {}", min)
    } else if min == 0 {
        format!("at most {}", max)
    } else if max == min + 1 {
        format!("{} or {}", min, max)
    } else {
        format!("between {} and {}", min, max)
    }
}
