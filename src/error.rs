// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Translation(TranslationError),
}

/// Specific error types for translation table loading.
/// All of these degrade to the default locale's table at the call site.
#[derive(Debug, Clone)]
pub enum TranslationError {
    /// No embedded table exists for the requested locale.
    MissingTable(String),

    /// The embedded resource exists but is not a valid string tree.
    InvalidTable { locale: String, detail: String },
}

impl fmt::Display for TranslationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationError::MissingTable(locale) => {
                write!(f, "no translation table for locale '{}'", locale)
            }
            TranslationError::InvalidTable { locale, detail } => {
                write!(f, "invalid translation table for '{}': {}", locale, detail)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Translation(e) => write!(f, "Translation Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<TranslationError> for Error {
    fn from(err: TranslationError) -> Self {
        Error::Translation(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn missing_table_names_the_locale() {
        let err: Error = TranslationError::MissingTable("fr".into()).into();
        assert!(format!("{}", err).contains("'fr'"));
    }

    #[test]
    fn invalid_table_includes_detail() {
        let err = TranslationError::InvalidTable {
            locale: "ja".into(),
            detail: "expected a map".into(),
        };
        assert!(format!("{}", err).contains("expected a map"));
    }
}
