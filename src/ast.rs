use serde::{Deserialize, Serialize};
use std::fmt;

use crate::token::{
    SourceLocation, BICONDITIONAL, CONDITIONAL, CONJUNCTION, DISJUNCTION, NEGATION, XOR,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKey {
    Negation,
    Conjunction,
    Disjunction,
    Conditional,
    Biconditional,
    #[serde(rename = "XOR")]
    Xor,
    None,
}

impl OperationKey {
    /// Resolves the category of an operator glyph. Glyphs outside every
    /// category resolve to `None` and are rejected later by validation.
    pub fn from_symbol(symbol: &str) -> OperationKey {
        if NEGATION.contains(&symbol) {
            OperationKey::Negation
        } else if CONJUNCTION.contains(&symbol) {
            OperationKey::Conjunction
        } else if DISJUNCTION.contains(&symbol) {
            OperationKey::Disjunction
        } else if CONDITIONAL.contains(&symbol) {
            OperationKey::Conditional
        } else if BICONDITIONAL.contains(&symbol) {
            OperationKey::Biconditional
        } else if XOR.contains(&symbol) {
            OperationKey::Xor
        } else {
            OperationKey::None
        }
    }

    /// Reduces one operator run.
    pub fn apply(&self, operands: &[bool]) -> bool {
        let mut values = operands.iter().copied();
        match self {
            OperationKey::Negation => operands.first().map_or(false, |value| !value),
            OperationKey::Conjunction => !operands.is_empty() && values.all(|value| value),
            OperationKey::Disjunction => values.any(|value| value),
            OperationKey::Conditional => values.reduce(|acc, value| !acc || value).unwrap_or(false),
            OperationKey::Biconditional => values.reduce(|acc, value| acc == value).unwrap_or(false),
            OperationKey::Xor => values.reduce(|acc, value| acc != value).unwrap_or(false),
            OperationKey::None => false,
        }
    }
}

impl fmt::Display for OperationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationKey::Negation => "Negation",
            OperationKey::Conjunction => "Conjunction",
            OperationKey::Disjunction => "Disjunction",
            OperationKey::Conditional => "Conditional",
            OperationKey::Biconditional => "Biconditional",
            OperationKey::Xor => "XOR",
            OperationKey::None => "None",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    Proposition {
        value: String,
        negatived: bool,
        loc: SourceLocation,
    },
    Operation {
        value: String,
        key: OperationKey,
        loc: SourceLocation,
    },
    SubExpression {
        body: Vec<Node>,
        negatived: bool,
        loc: SourceLocation,
    },
}

impl Node {
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Proposition { .. } => "Proposition",
            Node::Operation { .. } => "Operation",
            Node::SubExpression { .. } => "SubExpression",
        }
    }

    pub fn loc(&self) -> SourceLocation {
        match self {
            Node::Proposition { loc, .. }
            | Node::Operation { loc, .. }
            | Node::SubExpression { loc, .. } => *loc,
        }
    }

    pub fn is_operand(&self) -> bool {
        !matches!(self, Node::Operation { .. })
    }
}
