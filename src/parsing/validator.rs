use crate::ast::{Node, OperationKey};
use crate::errors::SyntaxError;

const OPERAND: &[&str] = &["Proposition", "SubExpression"];
const OPERATION: &[&str] = &["Operation"];
const CATEGORIES: &[&str] = &[
    "Conjunction",
    "Disjunction",
    "Conditional",
    "Biconditional",
    "XOR",
];

/// Checks that one level alternates operand and operation, recursing into
/// groups. Returns the first violation in depth-first, left-to-right order.
pub fn validate(nodes: &[Node]) -> Result<(), SyntaxError> {
    if let Some(first @ Node::Operation { .. }) = nodes.first() {
        debug!("Leading operation at {:?}", first.loc().start);
        return Err(SyntaxError::unexpected(
            "Start",
            OPERAND,
            first.kind(),
            first.loc(),
        ));
    }

    for (index, node) in nodes.iter().enumerate() {
        let next = nodes.get(index + 1);

        match node {
            Node::Proposition { .. } => {
                if let Some(next) = next.filter(|next| next.is_operand()) {
                    return Err(SyntaxError::unexpected(
                        node.kind(),
                        OPERATION,
                        next.kind(),
                        next.loc(),
                    ));
                }
            }
            Node::Operation { value, key, loc } => {
                if *key == OperationKey::None {
                    return Err(SyntaxError::unexpected(
                        node.kind(),
                        CATEGORIES,
                        value.as_str(),
                        *loc,
                    ));
                }
                match next {
                    Some(next) if !next.is_operand() => {
                        return Err(SyntaxError::unexpected(
                            node.kind(),
                            OPERAND,
                            next.kind(),
                            next.loc(),
                        ));
                    }
                    Some(_) => {}
                    // Trailing operation
                    None => {
                        return Err(SyntaxError::unexpected(node.kind(), OPERAND, "None", *loc));
                    }
                }
            }
            Node::SubExpression { body, .. } => {
                validate(body)?;
                if let Some(next) = next.filter(|next| next.is_operand()) {
                    return Err(SyntaxError::unexpected(
                        node.kind(),
                        OPERATION,
                        next.kind(),
                        next.loc(),
                    ));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::SourceLocation;

    fn prop(value: &str, column: usize) -> Node {
        Node::Proposition {
            value: value.to_string(),
            negatived: false,
            loc: SourceLocation::at(1, column),
        }
    }

    fn op(value: &str, column: usize) -> Node {
        Node::Operation {
            value: value.to_string(),
            key: OperationKey::from_symbol(value),
            loc: SourceLocation::at(1, column),
        }
    }

    fn group(body: Vec<Node>, column: usize) -> Node {
        Node::SubExpression {
            body,
            negatived: false,
            loc: SourceLocation::at(1, column),
        }
    }

    fn origin_of(error: SyntaxError) -> (String, String) {
        match error {
            SyntaxError::Unexpected {
                origin, unexpected, ..
            } => (origin, unexpected),
            other => panic!("expected Unexpected, got {:?}", other),
        }
    }

    #[test]
    fn accepts_alternating_sequence() {
        let nodes = vec![
            prop("p", 0),
            op("^", 2),
            group(vec![prop("q", 5), op("∨", 7), prop("r", 9)], 4),
        ];
        assert!(validate(&nodes).is_ok());
        assert!(validate(&[]).is_ok());
    }

    #[test]
    fn rejects_two_operands() {
        let error = validate(&[prop("p", 0), prop("q", 2)]).unwrap_err();
        assert_eq!(error.loc(), SourceLocation::at(1, 2));
        assert_eq!(
            origin_of(error),
            ("Proposition".to_string(), "Proposition".to_string())
        );
    }

    #[test]
    fn rejects_two_operations() {
        let error = validate(&[prop("p", 0), op("^", 2), op("^", 4), prop("q", 6)]).unwrap_err();
        assert_eq!(
            origin_of(error),
            ("Operation".to_string(), "Operation".to_string())
        );
    }

    #[test]
    fn rejects_trailing_operation() {
        let error = validate(&[prop("p", 0), op("^", 2)]).unwrap_err();
        assert_eq!(error.loc(), SourceLocation::at(1, 2));
        assert_eq!(origin_of(error), ("Operation".to_string(), "None".to_string()));
    }

    #[test]
    fn rejects_leading_operation() {
        let error = validate(&[op("^", 0), prop("p", 2)]).unwrap_err();
        assert_eq!(origin_of(error), ("Start".to_string(), "Operation".to_string()));
    }

    #[test]
    fn rejects_uncategorized_operation() {
        let error = validate(&[prop("p", 0), op("->", 2), prop("q", 5)]).unwrap_err();
        assert_eq!(origin_of(error), ("Operation".to_string(), "->".to_string()));
    }

    #[test]
    fn group_followed_by_operand() {
        let nodes = vec![group(vec![prop("p", 1)], 0), prop("q", 4)];
        let error = validate(&nodes).unwrap_err();
        assert_eq!(
            origin_of(error),
            ("SubExpression".to_string(), "Proposition".to_string())
        );
    }

    #[test]
    fn nested_error_wins_over_later_error() {
        // (p q) r : the inner violation comes first
        let nodes = vec![group(vec![prop("p", 1), prop("q", 3)], 0), prop("r", 6)];
        let error = validate(&nodes).unwrap_err();
        assert_eq!(error.loc(), SourceLocation::at(1, 3));
    }
}
