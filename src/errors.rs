//! Unified error handling module.
//!
//! Error types are generated by a macro, carrying an error code and a
//! type name alongside the message.

use std::fmt;

/// Macro defining the crate error enum.
///
/// Generates:
/// - the enum definition
/// - code() - returns the error code
/// - error_type() - returns the error type name
/// - message() - returns the error detail
/// - snake_case convenience constructors
macro_rules! define_tutorcenter_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum TutorCenterError {
            $($variant(String),)*
        }

        impl TutorCenterError {
            /// Error code, stable across releases.
            pub fn code(&self) -> &'static str {
                match self {
                    $(TutorCenterError::$variant(_) => $code,)*
                }
            }

            /// Error type name.
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(TutorCenterError::$variant(_) => $type_name,)*
                }
            }

            /// Error detail message.
            pub fn message(&self) -> &str {
                match self {
                    $(TutorCenterError::$variant(msg) => msg,)*
                }
            }
        }

        paste::paste! {
            impl TutorCenterError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        TutorCenterError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_tutorcenter_errors! {
    Config("E001", "Configuration Error"),
    Validation("E002", "Validation Error"),
    StudentNotFound("E003", "Student Not Found"),
    Persistence("E004", "Persistence Error"),
    RemoteApi("E005", "Remote API Error"),
    Serialization("E006", "Serialization Error"),
    DateParse("E007", "Date Parse Error"),
    Authorization("E008", "Authorization Error"),
}

impl TutorCenterError {
    /// Colored output for development builds.
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// Plain one-line output.
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for TutorCenterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for TutorCenterError {}

impl From<reqwest::Error> for TutorCenterError {
    fn from(err: reqwest::Error) -> Self {
        TutorCenterError::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for TutorCenterError {
    fn from(err: serde_json::Error) -> Self {
        TutorCenterError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for TutorCenterError {
    fn from(err: chrono::ParseError) -> Self {
        TutorCenterError::DateParse(err.to_string())
    }
}

impl From<config::ConfigError> for TutorCenterError {
    fn from(err: config::ConfigError) -> Self {
        TutorCenterError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TutorCenterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(TutorCenterError::config("test").code(), "E001");
        assert_eq!(TutorCenterError::validation("test").code(), "E002");
        assert_eq!(TutorCenterError::persistence("test").code(), "E004");
        assert_eq!(TutorCenterError::authorization("test").code(), "E008");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            TutorCenterError::student_not_found("test").error_type(),
            "Student Not Found"
        );
        assert_eq!(
            TutorCenterError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = TutorCenterError::validation("task list is empty");
        assert_eq!(err.message(), "task list is empty");
    }

    #[test]
    fn test_format_simple() {
        let err = TutorCenterError::remote_api("HTTP 502");
        let formatted = err.format_simple();
        assert!(formatted.contains("Remote API Error"));
        assert!(formatted.contains("HTTP 502"));
    }
}
