use thiserror::Error;

/// Error raised when textual input cannot be turned into a model value.
///
/// The engine itself never fails; these errors only come from front ends
/// that accept field keys and values as text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown field key: {0}")]
    UnknownField(String),
    #[error("invalid value {value:?} for {field}; expected one of: {expected}")]
    InvalidChoice {
        field: &'static str,
        value: String,
        expected: String,
    },
    #[error("unknown VRU kind: {0}")]
    UnknownVruKind(String),
    #[error("unknown preference {0:?}; expected ignore, must or mustNot")]
    UnknownPreference(String),
    #[error("malformed range {0:?}; expected MIN..MAX")]
    MalformedRange(String),
    #[error("malformed edit {0:?}; expected KEY=VALUE")]
    MalformedEdit(String),
}

pub type Result<T> = std::result::Result<T, ParseError>;
