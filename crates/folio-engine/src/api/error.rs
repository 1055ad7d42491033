use std::fmt;

use crate::api::config::MAX_PARTICLES;

/// Errors raised while building a field, a knowledge base, or a config.
/// Construction-time only: stepping, linking and matching never fail.
#[derive(Debug)]
pub enum ConfigError {
    /// A field needs at least one particle and at most `MAX_PARTICLES`.
    InvalidCount(usize),
    /// Field bounds must be finite and strictly positive.
    InvalidBounds { width: f32, height: f32 },
    /// A tuning parameter is out of range (negative, NaN, ...).
    InvalidParam { name: &'static str, value: f32 },
    /// A knowledge-base entry declared no triggers.
    EmptyTriggers { entry: usize },
    /// A knowledge-base entry contains an empty or whitespace-only trigger.
    BlankTrigger { entry: usize },
    Json(serde_json::Error),
    #[cfg(feature = "chat")]
    Pattern(regex::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidCount(n) => {
                write!(f, "particle count must be in 1..={MAX_PARTICLES}, got {n}")
            }
            ConfigError::InvalidBounds { width, height } => {
                write!(f, "field bounds must be positive, got {width}x{height}")
            }
            ConfigError::InvalidParam { name, value } => {
                write!(f, "invalid value for {name}: {value}")
            }
            ConfigError::EmptyTriggers { entry } => {
                write!(f, "knowledge base entry {entry} has no triggers")
            }
            ConfigError::BlankTrigger { entry } => {
                write!(f, "knowledge base entry {entry} has a blank trigger")
            }
            ConfigError::Json(e) => write!(f, "JSON error: {e}"),
            #[cfg(feature = "chat")]
            ConfigError::Pattern(e) => write!(f, "trigger pattern error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Json(e) => Some(e),
            #[cfg(feature = "chat")]
            ConfigError::Pattern(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

#[cfg(feature = "chat")]
impl From<regex::Error> for ConfigError {
    fn from(e: regex::Error) -> Self {
        ConfigError::Pattern(e)
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_value() {
        let e = ConfigError::InvalidBounds { width: 0.0, height: 600.0 };
        assert_eq!(e.to_string(), "field bounds must be positive, got 0x600");
        let e = ConfigError::InvalidCount(0);
        assert!(e.to_string().contains("got 0"));
    }

    #[test]
    fn json_errors_convert_and_keep_source() {
        let err: ConfigError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
