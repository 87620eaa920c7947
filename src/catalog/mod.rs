//! Static game data: monsters, actions and traits

pub mod loader;
pub mod monster;
pub mod registry;
pub mod schema;
pub mod skill;

pub use loader::{
    load_monsters, load_monsters_from_data, load_monsters_from_file, load_monsters_from_str,
    load_skills, load_skills_from_data, load_skills_from_file, load_skills_from_str,
};
pub use monster::{Monster, MonsterId};
pub use registry::Catalog;
pub use schema::{FieldRule, FieldSpec, Schema, Vocabulary, MONSTER_SCHEMA, SKILL_SCHEMA};
pub use skill::{Skill, COOKING_MARKER};
