use thiserror::Error;

/// Failure modes of a parse attempt. `Syntax` means the input stopped
/// matching the grammar at some point; `Incomplete` means a valid prefix
/// was matched but trailing input remains. Both carry the unconsumed
/// remainder starting at the failure point.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected {expected} here: {rest:?}")]
    Syntax { expected: &'static str, rest: String },

    #[error("unconsumed input remains: {rest:?}")]
    Incomplete { rest: String },
}

impl ParseError {
    pub fn syntax(expected: &'static str, rest: impl Into<String>) -> Self {
        ParseError::Syntax { expected, rest: rest.into() }
    }

    pub fn incomplete(rest: impl Into<String>) -> Self {
        ParseError::Incomplete { rest: rest.into() }
    }

    pub fn rest(&self) -> &str {
        match self {
            ParseError::Syntax { rest, .. } => rest,
            ParseError::Incomplete { rest } => rest,
        }
    }
}
