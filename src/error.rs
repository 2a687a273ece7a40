use thiserror::Error;

use crate::street::ElementKind;

/// A token that could not be turned into a street element.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid token `{token}`: {kind}")]
pub struct ParseError {
    pub token: String,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(token: &str, kind: impl Into<ParseErrorKind>) -> Self {
        Self { token: token.to_string(), kind: kind.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("unknown element kind `{0}`, expected one of `b`, `p` or `e`")]
    UnknownKind(char),
    #[error("expected `_` after the element kind")]
    MissingSeparator,
    #[error("a {element} takes {expected} parameters, found {found}")]
    ParameterCount { element: ElementKind, expected: usize, found: usize },
    #[error("{field} must be a whole number, found `{value}`")]
    InvalidNumber { field: &'static str, value: String },
    #[error("{field} must be a single character, found `{value}`")]
    InvalidGlyph { field: &'static str, value: String },
    #[error(transparent)]
    Invalid(#[from] InvalidElement),
}

/// Geometry an element cannot be drawn with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidElement {
    #[error("{0} must be at least 1")]
    Zero(&'static str),
    #[error("park width must be odd and at least 5, found {0}")]
    ParkWidth(usize),
    #[error("trash pattern must not be empty")]
    EmptyTrash,
}
