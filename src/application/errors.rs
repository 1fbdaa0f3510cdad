//! Application layer errors

use std::path::PathBuf;
use thiserror::Error;

/// General bot errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    #[error("Skill error: {0}")]
    Skill(#[from] SkillError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Command execution errors
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),
}

/// Skill resolution and registration errors
#[derive(Error, Debug)]
pub enum SkillError {
    /// No skill with this name exists in the catalog
    #[error("Skill not found: {0}")]
    NotFound(String),

    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Registration failed: {0}")]
    Registration(String),

    #[error("Skill panicked during registration: {0}")]
    Panicked(String),

    #[error("Failed to read skills directory {}: {source}", .path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SkillError {
    /// True for the "module could not be found" class of failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, SkillError::NotFound(_))
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required variable {var}: {hint}")]
    MissingVar { var: &'static str, hint: &'static str },

    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_not_found_is_classified_as_not_found() {
        assert!(SkillError::NotFound("utils".into()).is_not_found());
        assert!(!SkillError::Registration("boom".into()).is_not_found());
        assert!(!SkillError::Panicked("boom".into()).is_not_found());
    }

    #[test]
    fn missing_var_message_names_the_variable() {
        let err = ConfigError::MissingVar {
            var: "SPARK_TOKEN",
            hint: "bots require a Webex API access token",
        };
        assert!(err.to_string().contains("SPARK_TOKEN"));
    }
}
