use serde::{Deserialize, Serialize};
use std::fmt;

pub const LETTERS: &[&str] = &[
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r",
    "s", "u", "w", "x", "y", "z",
];

pub const NEGATION: &[&str] = &["¬", "~"];
pub const CONJUNCTION: &[&str] = &["^", "∧"];
pub const DISJUNCTION: &[&str] = &["∨", "˅"];
pub const CONDITIONAL: &[&str] = &["→"];
pub const BICONDITIONAL: &[&str] = &["↔"];
pub const XOR: &[&str] = &["⊕"];

pub const OPEN_PAREN: &str = "(";
pub const CLOSE_PAREN: &str = ")";

/// Negation glyph used when the evaluator names negated columns and groups.
pub const NEGATION_DISPLAY: &str = "~";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub start: Position,
    pub end: Position,
}

impl SourceLocation {
    pub fn at(line: usize, column: usize) -> Self {
        let position = Position { line, column };
        SourceLocation {
            start: position,
            end: position,
        }
    }

    pub fn span(start: SourceLocation, end: SourceLocation) -> Self {
        SourceLocation {
            start: start.start,
            end: end.end,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenType {
    Letter,
    Negation,
    Operator,
    OpenParen,
    CloseParen,
    Unknown,
}

impl TokenType {
    /// Name of the node kind this token would become, used in error reports.
    pub fn kind(&self) -> &'static str {
        match self {
            TokenType::Letter => "Proposition",
            TokenType::Negation => "Negation",
            TokenType::Operator => "Operation",
            TokenType::OpenParen => "SubExpression",
            TokenType::CloseParen => "ClosingParenthesis",
            TokenType::Unknown => "Undetermined",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub value: String,
    pub loc: SourceLocation,
}

impl Token {
    pub fn new(value: impl Into<String>, loc: SourceLocation) -> Self {
        Token {
            value: value.into(),
            loc,
        }
    }

    pub fn token_type(&self) -> TokenType {
        let value = self.value.as_str();
        if LETTERS.contains(&value) {
            TokenType::Letter
        } else if NEGATION.contains(&value) {
            TokenType::Negation
        } else if is_operator(value) {
            TokenType::Operator
        } else if value == OPEN_PAREN {
            TokenType::OpenParen
        } else if value == CLOSE_PAREN {
            TokenType::CloseParen
        } else {
            TokenType::Unknown
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.token_type() != TokenType::Unknown
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

fn is_operator(value: &str) -> bool {
    [CONJUNCTION, DISJUNCTION, CONDITIONAL, BICONDITIONAL, XOR]
        .iter()
        .any(|glyphs| glyphs.contains(&value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(value: &str) -> Token {
        Token::new(value, SourceLocation::at(1, 0))
    }

    #[test]
    fn classifies_glyphs() {
        assert_eq!(token("p").token_type(), TokenType::Letter);
        assert_eq!(token("¬").token_type(), TokenType::Negation);
        assert_eq!(token("⊕").token_type(), TokenType::Operator);
        assert_eq!(token("˅").token_type(), TokenType::Operator);
        assert_eq!(token("(").token_type(), TokenType::OpenParen);
        assert_eq!(token(")").token_type(), TokenType::CloseParen);
    }

    #[test]
    fn reserved_letters_are_not_variables() {
        assert!(!token("t").is_allowed());
        assert!(!token("v").is_allowed());
        assert!(!token("P").is_allowed());
        assert!(!token("=").is_allowed());
    }
}
