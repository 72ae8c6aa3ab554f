use std::{fmt, io};

/// Crate-wide `Result` type using [`TabshError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, TabshError>;

/// Top-level error type for tabsh operations.
///
/// This type wraps more specific error kinds and provides a single
/// error type that can be used throughout the crate.
#[derive(Debug)]
pub enum TabshError {
    /// Autocompletion errors.
    Autocomplete(AutocompleteError),

    /// Configuration errors.
    Config(ConfigError),

    /// I/O errors.
    Io(io::Error),

    /// Generic error with a free-form message.
    Generic(String),
}

/// Autocompletion-specific errors.
///
/// Both variants are leaf conditions and carry no chained causes.
/// `NoMatch` is a normal, expected runtime outcome and is always recovered
/// locally by the embedding surface; `InvalidArgument` signals caller misuse
/// and should not occur once the embedding is correctly wired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutocompleteError {
    /// A required argument was absent. Carries the argument name.
    InvalidArgument(String),

    /// No candidate starts with the given prefix.
    NoMatch,
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },

    /// Generic configuration error.
    Generic(String),
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for TabshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabshError::Autocomplete(e) => write!(f, "{e}"),
            TabshError::Config(e) => write!(f, "Configuration error: {e}"),
            TabshError::Io(e) => write!(f, "I/O error: {e}"),
            TabshError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for AutocompleteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutocompleteError::InvalidArgument(name) => {
                write!(f, "Invalid argument: '{name}' is absent")
            }
            AutocompleteError::NoMatch => write!(f, "No completion available"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
            ConfigError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for TabshError {}
impl std::error::Error for AutocompleteError {}
impl std::error::Error for ConfigError {}

/* ========================= Conversions to TabshError ========================= */

impl From<io::Error> for TabshError {
    fn from(err: io::Error) -> Self {
        TabshError::Io(err)
    }
}

impl From<AutocompleteError> for TabshError {
    fn from(err: AutocompleteError) -> Self {
        TabshError::Autocomplete(err)
    }
}

impl From<ConfigError> for TabshError {
    fn from(err: ConfigError) -> Self {
        TabshError::Config(err)
    }
}

impl From<String> for TabshError {
    fn from(msg: String) -> Self {
        TabshError::Generic(msg)
    }
}

impl From<&str> for TabshError {
    fn from(msg: &str) -> Self {
        TabshError::Generic(msg.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_autocomplete_error_display() {
        assert_eq!(
            AutocompleteError::NoMatch.to_string(),
            "No completion available"
        );
        assert_eq!(
            AutocompleteError::InvalidArgument("prefix".to_string()).to_string(),
            "Invalid argument: 'prefix' is absent"
        );
    }

    #[test]
    fn test_error_kinds_are_distinguishable() {
        let no_match = AutocompleteError::NoMatch;
        let invalid = AutocompleteError::InvalidArgument("candidates".to_string());
        assert_ne!(no_match, invalid);
    }

    #[test]
    fn test_conversion_to_top_level_error() {
        let err: TabshError = AutocompleteError::NoMatch.into();
        assert!(matches!(
            err,
            TabshError::Autocomplete(AutocompleteError::NoMatch)
        ));

        let err: TabshError = ConfigError::FileNotFound("/tmp/missing.toml".to_string()).into();
        assert!(matches!(err, TabshError::Config(_)));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidValue {
            field: "vocabulary.commands".to_string(),
            value: "".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value '' for field 'vocabulary.commands'"
        );
    }
}
