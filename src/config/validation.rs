//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check referential integrity (target group exists in the directory)
//! - Reject duplicate group keys and blank settings
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GeneratorConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system
//! - Empty group folders are NOT rejected here; they only matter once a zone
//!   line is rendered for that group

use std::collections::HashSet;
use std::fmt;

use crate::config::schema::GeneratorConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyTargetGroup,
    UnknownTargetGroup(String),
    EmptyGroupKey { index: usize },
    DuplicateGroup(String),
    EmptySetting(&'static str),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyTargetGroup => write!(f, "target_group must not be empty"),
            ValidationError::UnknownTargetGroup(key) => {
                write!(f, "target_group '{}' is not declared in [[groups]]", key)
            }
            ValidationError::EmptyGroupKey { index } => {
                write!(f, "groups[{}] has an empty key", index)
            }
            ValidationError::DuplicateGroup(key) => write!(f, "group '{}' declared twice", key),
            ValidationError::EmptySetting(name) => write!(f, "{} must not be empty", name),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a parsed configuration.
pub fn validate_config(config: &GeneratorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let settings = [
        ("routes_path", &config.routes_path),
        ("includes.proxy", &config.includes.proxy),
        ("includes.cache", &config.includes.cache),
        ("output.zone_file", &config.output.zone_file),
        ("output.location_file", &config.output.location_file),
        ("cache.levels", &config.cache.levels),
        ("cache.keys_zone_size", &config.cache.keys_zone_size),
        ("cache.max_size", &config.cache.max_size),
        ("cache.inactive", &config.cache.inactive),
    ];
    for (name, value) in settings {
        if value.trim().is_empty() {
            errors.push(ValidationError::EmptySetting(name));
        }
    }

    let mut seen = HashSet::new();
    for (index, group) in config.groups.iter().enumerate() {
        if group.key.is_empty() {
            errors.push(ValidationError::EmptyGroupKey { index });
        } else if !seen.insert(group.key.as_str()) {
            errors.push(ValidationError::DuplicateGroup(group.key.clone()));
        }
    }

    if config.target_group.is_empty() {
        errors.push(ValidationError::EmptyTargetGroup);
    } else if !seen.contains(config.target_group.as_str()) {
        errors.push(ValidationError::UnknownTargetGroup(config.target_group.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
