//! Load and validate monster, action and trait catalogs from JSON
//!
//! Every record is checked against its schema first; the whole batch fails
//! with one aggregated error if any record is invalid. Nothing is partially
//! loaded.

use crate::catalog::monster::Monster;
use crate::catalog::schema::{Schema, MONSTER_SCHEMA, SKILL_SCHEMA};
use crate::catalog::skill::Skill;
use crate::core::error::{Result, ScrollError};
use crate::core::types::{Element, SkillKind, TypeTag};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// Monster record as stored in `monsters.json`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MonsterRecord {
    name: String,
    shifted: bool,
    types: [TypeTag; 3],
    elements: Vec<Element>,
    #[serde(default)]
    signature_trait: Option<String>,
    #[serde(default, rename = "startingHP")]
    starting_hp: Option<f64>,
    #[serde(default)]
    portrait_filename: Option<String>,
}

/// Skill record as stored in `actions.json` / `traits.json`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SkillRecord {
    name: String,
    skill_type: SkillKind,
    mana_cost: Vec<Element>,
    types: Vec<TypeTag>,
    description: String,
    icon_filename: String,
    #[serde(default)]
    free_action: Option<bool>,
    #[serde(default)]
    is_support: Option<bool>,
    #[serde(default)]
    signature_monster: Option<String>,
}

impl MonsterRecord {
    fn into_monster(self) -> std::result::Result<Monster, String> {
        let mut monster =
            Monster::new(self.name, self.shifted, self.types, self.elements).map_err(|e| e.to_string())?;
        monster.signature_trait = self.signature_trait;
        monster.starting_hp = self.starting_hp;
        monster.portrait_filename = self.portrait_filename;
        Ok(monster)
    }
}

impl SkillRecord {
    fn into_skill(self) -> Skill {
        Skill {
            name: self.name,
            kind: self.skill_type,
            mana_cost: self.mana_cost,
            types: self.types,
            description: self.description,
            icon_filename: self.icon_filename,
            free_action: self.free_action.unwrap_or(false),
            is_support: self.is_support.unwrap_or(false),
            signature_monster: self.signature_monster,
        }
    }
}

/// Validate and build monsters from raw records
pub fn load_monsters_from_data(records: &[Value], source_name: &str) -> Result<Vec<Monster>> {
    let monsters = load_batch(records, source_name, |record| {
        check_schema(&MONSTER_SCHEMA, record)?;
        let parsed: MonsterRecord =
            serde_json::from_value(record.clone()).map_err(|e| e.to_string())?;
        parsed.into_monster()
    })?;
    tracing::info!("Loaded {} monsters from {}", monsters.len(), source_name);
    Ok(monsters)
}

/// Validate and build skills of one kind from raw records
///
/// A record whose `skillType` differs from `kind` is invalid.
pub fn load_skills_from_data(
    records: &[Value],
    kind: SkillKind,
    source_name: &str,
) -> Result<Vec<Skill>> {
    let skills = load_batch(records, source_name, |record| {
        check_schema(&SKILL_SCHEMA, record)?;
        let parsed: SkillRecord =
            serde_json::from_value(record.clone()).map_err(|e| e.to_string())?;
        if parsed.skill_type != kind {
            return Err(format!(
                "skillType {} does not belong in the {} catalog",
                parsed.skill_type, kind
            ));
        }
        Ok(parsed.into_skill())
    })?;
    tracing::info!("Loaded {} {} skills from {}", skills.len(), kind, source_name);
    Ok(skills)
}

pub fn load_monsters(records: &[Value]) -> Result<Vec<Monster>> {
    load_monsters_from_data(records, "monsters.json")
}

pub fn load_skills(records: &[Value], kind: SkillKind) -> Result<Vec<Skill>> {
    let source_name = match kind {
        SkillKind::Action => "actions.json",
        SkillKind::Trait => "traits.json",
    };
    load_skills_from_data(records, kind, source_name)
}

/// Parse a whole JSON document and load it as a monster catalog
pub fn load_monsters_from_str(json: &str, source_name: &str) -> Result<Vec<Monster>> {
    let document: Value = serde_json::from_str(json)?;
    load_monsters_from_data(expect_array(&document, source_name)?, source_name)
}

pub fn load_skills_from_str(json: &str, kind: SkillKind, source_name: &str) -> Result<Vec<Skill>> {
    let document: Value = serde_json::from_str(json)?;
    load_skills_from_data(expect_array(&document, source_name)?, kind, source_name)
}

pub fn load_monsters_from_file(path: &Path) -> Result<Vec<Monster>> {
    let content = std::fs::read_to_string(path)?;
    load_monsters_from_str(&content, &path.display().to_string())
}

pub fn load_skills_from_file(path: &Path, kind: SkillKind) -> Result<Vec<Skill>> {
    let content = std::fs::read_to_string(path)?;
    load_skills_from_str(&content, kind, &path.display().to_string())
}

fn expect_array<'v>(document: &'v Value, source_name: &str) -> Result<&'v [Value]> {
    document
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| ScrollError::CatalogValidation {
            source_name: source_name.to_string(),
            errors: vec![format!(
                "Expected array in {}, got {}",
                source_name,
                json_type_name(document)
            )],
        })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn check_schema(schema: &Schema, record: &Value) -> std::result::Result<(), String> {
    let reasons = schema.check(record);
    if reasons.is_empty() {
        Ok(())
    } else {
        Err(reasons.join("; "))
    }
}

/// Convert every record, collecting one message per failure
fn load_batch<T>(
    records: &[Value],
    source_name: &str,
    convert: impl Fn(&Value) -> std::result::Result<T, String>,
) -> Result<Vec<T>> {
    let mut loaded = Vec::with_capacity(records.len());
    let mut errors = Vec::new();

    for (index, record) in records.iter().enumerate() {
        match convert(record) {
            Ok(item) => loaded.push(item),
            Err(reason) => {
                let name = record
                    .get("name")
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())
                    .unwrap_or("unnamed");
                errors.push(format!("Item {} ({}): {}", index, name, reason));
            }
        }
    }

    if !errors.is_empty() {
        tracing::debug!("{} invalid records in {}", errors.len(), source_name);
        return Err(ScrollError::CatalogValidation {
            source_name: source_name.to_string(),
            errors,
        });
    }

    Ok(loaded)
}
