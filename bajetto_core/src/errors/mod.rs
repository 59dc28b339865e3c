#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Failed to parse name '{name}': {message}")]
    InvalidValue { name: String, message: String },
    #[error("Validation failed for name '{name}': {message}")]
    ValidationFailed { name: String, message: String },
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}
