use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrollError {
    /// One or more catalog records failed validation; nothing was loaded
    #[error("Validation errors in {source_name}:\n{}", .errors.join("\n"))]
    CatalogValidation {
        source_name: String,
        errors: Vec<String>,
    },

    /// The caller supplied an inconsistent party or target
    #[error("Contract violation: {0}")]
    ContractViolation(String),

    #[error("Unknown monster: {0}")]
    UnknownMonster(String),

    #[error("Duplicate monster in catalog: {0}")]
    DuplicateMonster(String),

    #[error("Duplicate {kind} in catalog: {name}")]
    DuplicateSkill { kind: crate::core::types::SkillKind, name: String },

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl ScrollError {
    pub fn contract(msg: impl Into<String>) -> Self {
        ScrollError::ContractViolation(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, ScrollError>;
