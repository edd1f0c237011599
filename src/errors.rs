use rustyline::error::ReadlineError;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::token::SourceLocation;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error(
        "It was expected that, after an {origin} element, there would be a {} element, but there were {unexpected}",
        .expected.join(" or ")
    )]
    Unexpected {
        origin: String,
        expected: Vec<String>,
        unexpected: String,
        loc: SourceLocation,
    },
    #[error("It was not possible to determine what the value would be: {value}")]
    Undetermined { value: String, loc: SourceLocation },
    #[error("The {method} method is not instantiated")]
    NotInstantiated { method: String, loc: SourceLocation },
    /// `line` and `column` point at the last token scanned before input ran out.
    #[error("It was expected that there would be a “)”, in row: {line}, column: {column}.")]
    WasExperienced {
        loc: SourceLocation,
        line: usize,
        column: usize,
    },
}

impl SyntaxError {
    pub fn unexpected(
        origin: impl Into<String>,
        expected: &[&str],
        unexpected: impl Into<String>,
        loc: SourceLocation,
    ) -> Self {
        SyntaxError::Unexpected {
            origin: origin.into(),
            expected: expected.iter().map(|e| e.to_string()).collect(),
            unexpected: unexpected.into(),
            loc,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            SyntaxError::Unexpected { .. } => "Unexpected",
            SyntaxError::Undetermined { .. } => "Undetermined",
            SyntaxError::NotInstantiated { .. } => "NotInstantiated",
            SyntaxError::WasExperienced { .. } => "WasExperienced",
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            SyntaxError::Unexpected { .. } => 500,
            SyntaxError::Undetermined { .. } => 406,
            SyntaxError::NotInstantiated { .. } => 404,
            SyntaxError::WasExperienced { .. } => 783,
        }
    }

    pub fn loc(&self) -> SourceLocation {
        match self {
            SyntaxError::Unexpected { loc, .. }
            | SyntaxError::Undetermined { loc, .. }
            | SyntaxError::NotInstantiated { loc, .. }
            | SyntaxError::WasExperienced { loc, .. } => *loc,
        }
    }

    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            name: format!("{}Error", self.code()),
            message: self.to_string(),
            code: self.code(),
            status_code: self.status_code(),
            loc: self.loc(),
        }
    }
}

impl Serialize for SyntaxError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.report().serialize(serializer)
    }
}

/// Flat, serializable view of a [`SyntaxError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    pub name: String,
    pub message: String,
    pub code: &'static str,
    pub status_code: u16,
    pub loc: SourceLocation,
}

#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("Too many propositions: {count} (limit is {limit})")]
    TooManyPropositions { count: usize, limit: usize },
    #[error("Syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Readline error: {0}")]
    Readline(#[from] ReadlineError),
}
