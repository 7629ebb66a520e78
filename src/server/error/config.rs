use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A variable listed as required in the configuration table is unset.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be used.
    #[error("Invalid value for environment variable {name}: {reason}")]
    InvalidEnvVar { name: String, reason: String },
}
