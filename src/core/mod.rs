pub mod combo;
pub mod config;
pub mod error;
pub mod types;

pub use combo::TypeCombo;
pub use config::{GroupingStrategy, ScrollConfig};
pub use error::{Result, ScrollError};
pub use types::{ActionCategory, Element, SkillKind, TypeTag};
