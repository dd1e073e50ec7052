use thiserror::Error;

use crate::targets::Target;

/// The main error type for gotask operations
#[derive(Debug, Error)]
pub enum GotaskError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Target error: {0}")]
    Target(String),

    #[error("Failed to execute '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Target '{target}' failed: '{step}' {}", describe_code(.code))]
    StepFailed {
        target: Target,
        step: String,
        code: Option<i32>,
    },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with code {}", code),
        None => "was terminated without an exit code".to_string(),
    }
}

impl GotaskError {
    /// Process exit code that should be reported for this error.
    ///
    /// A failing step propagates its own code when it fits in `1..=255`;
    /// everything else maps to `1`.
    pub fn exit_code(&self) -> u8 {
        match self {
            GotaskError::StepFailed {
                code: Some(code), ..
            } => u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1),
            _ => 1,
        }
    }
}

/// Result type alias for gotask operations
pub type GotaskResult<T> = Result<T, GotaskError>;
