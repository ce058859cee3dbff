use thiserror::Error;

#[derive(Error, Debug)]
pub enum PalindromeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Scenario failed for {strategy}: input {input:?} expected {expected:?}, got {actual:?}")]
    ScenarioFailed {
        strategy: String,
        input: String,
        expected: String,
        actual: String,
    },

    #[error("Invariant violated for input {input:?}: {reason}")]
    InvariantViolation { input: String, reason: String },
}

impl PalindromeError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            PalindromeError::IoError(e) => format!("Could not read input: {}", e),
            PalindromeError::SerializationError(e) => format!("Could not encode output: {}", e),
            PalindromeError::ConfigError { message } => format!("Configuration problem: {}", message),
            PalindromeError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            PalindromeError::ScenarioFailed { .. } | PalindromeError::InvariantViolation { .. } => {
                format!("Self-check failed: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PalindromeError::IoError(_) => "Check that the input file exists and is readable",
            PalindromeError::SerializationError(_) => "Retry with --format text",
            PalindromeError::ConfigError { .. } | PalindromeError::InvalidConfigValueError { .. } => {
                "Fix the command-line flags or the TOML config file and retry"
            }
            PalindromeError::ScenarioFailed { .. } | PalindromeError::InvariantViolation { .. } => {
                "Run again with --verbose and report the failing strategy"
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            PalindromeError::ConfigError { .. } | PalindromeError::InvalidConfigValueError { .. } => 1,
            PalindromeError::IoError(_) | PalindromeError::SerializationError(_) => 2,
            PalindromeError::ScenarioFailed { .. } | PalindromeError::InvariantViolation { .. } => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, PalindromeError>;
