//! Layered error definitions
//!
//! Categorized by source: config / environment / target / handoff

use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum ContractError {
    // ===== Configuration Errors =====
    /// Configuration parse error
    #[error("config parse error: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration validation error
    #[error("config validation error at '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // ===== Environment Errors =====
    /// Required environment variable is not set
    #[error("missing environment variable: {var}")]
    MissingEnv { var: String },

    // ===== Target Errors =====
    /// Store id is absent from the catalog
    #[error("store '{id}' not found in catalog (known ids: {known_ids:?})")]
    TargetNotFound { id: String, known_ids: Vec<String> },

    // ===== Handoff Errors =====
    /// Submitting the stage graph to an engine failed
    #[error("engine '{engine}' handoff error: {message}")]
    Handoff { engine: String, message: String },

    // ===== General Errors =====
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ContractError {
    /// Create configuration parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
            source: None,
        }
    }

    /// Create configuration validation error
    pub fn config_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create missing environment variable error
    pub fn missing_env(var: impl Into<String>) -> Self {
        Self::MissingEnv { var: var.into() }
    }

    /// Create engine handoff error
    pub fn handoff(engine: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Handoff {
            engine: engine.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ContractError::config_validation("stores[0].id", "id cannot be empty");
        assert_eq!(
            err.to_string(),
            "config validation error at 'stores[0].id': id cannot be empty"
        );

        let err = ContractError::missing_env("GITHUB_SHA");
        assert_eq!(err.to_string(), "missing environment variable: GITHUB_SHA");

        let err = ContractError::TargetNotFound {
            id: "casm".into(),
            known_ids: vec!["other".into()],
        };
        assert!(err.to_string().contains("\"other\""));
    }
}
