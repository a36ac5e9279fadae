// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Failures surfaced by the upload workflow.
///
/// Every variant is caught at the submit boundary and rendered as an inline
/// message; none of them abort the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Submit was triggered without a selected file. Caught before any
    /// network activity.
    Validation(String),

    /// The request could not be sent, timed out, or came back with a
    /// non-success HTTP status.
    Transport(String),

    /// The response claimed success but its body was not valid JSON.
    /// Displayed exactly like a transport failure.
    Parse(String),

    /// The selected file could not be read or decoded.
    Io(String),

    /// Settings could not be read or written.
    Config(String),
}

impl Error {
    /// Returns the i18n message key for the user-facing text of this error.
    ///
    /// Transport and parse failures share one generic message; the specific
    /// cause only goes to the log.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Validation(_) => "error-no-file-selected",
            Error::Transport(_) | Error::Parse(_) => "error-pipeline-failed",
            Error::Io(_) => "error-file-read",
            Error::Config(_) => "error-config",
        }
    }

    /// Whether this error should be shown as a nudge rather than a failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(e) => write!(f, "Validation Error: {}", e),
            Error::Transport(e) => write!(f, "Transport Error: {}", e),
            Error::Parse(e) => write!(f, "Parse Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
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
    fn display_formats_transport_error() {
        let err = Error::Transport("connection refused".to_string());
        assert_eq!(format!("{}", err), "Transport Error: connection refused");
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
    fn from_json_error_produces_parse_variant() {
        let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: Error = json_error.into();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn transport_and_parse_share_one_message_key() {
        let transport = Error::Transport("HTTP status 500".into());
        let parse = Error::Parse("expected value at line 1".into());
        assert_eq!(transport.i18n_key(), parse.i18n_key());
        assert_eq!(transport.i18n_key(), "error-pipeline-failed");
    }

    #[test]
    fn validation_has_its_own_message_key() {
        let err = Error::Validation("no file selected".into());
        assert_eq!(err.i18n_key(), "error-no-file-selected");
        assert!(err.is_validation());
        assert!(!Error::Io("x".into()).is_validation());
    }
}
