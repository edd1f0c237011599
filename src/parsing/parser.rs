use crate::ast::{Node, OperationKey};
use crate::errors::SyntaxError;
use crate::parsing::scanner::Scanner;
use crate::parsing::validator::validate;
use crate::token::{SourceLocation, Token, TokenType};

const OPERAND: &[&str] = &["Proposition", "SubExpression"];
const OPERATION: &[&str] = &["Operation"];

/// Builds and validates the nodes of one token slice.
pub fn parse_impl(scanner: &mut Scanner<'_>) -> Result<Vec<Node>, SyntaxError> {
    let mut nodes = Vec::<Node>::new();

    loop {
        let Some(token) = scanner.peek() else {
            trace!("End of tokens");
            break;
        };

        match token.token_type() {
            TokenType::Letter => {
                debug!("Proposition: {}", token);
                nodes.push(Node::Proposition {
                    value: token.value.clone(),
                    negatived: scanner.preceded_by_negation(),
                    loc: token.loc,
                });
                scanner.next();
            }
            TokenType::Negation => {
                // Folded into the next operand through its look-back
                check_negation_target(token, scanner.peek_next(1))?;
                scanner.next();
            }
            TokenType::Operator => {
                let key = OperationKey::from_symbol(&token.value);
                debug!("Operation: {} ({})", token, key);
                nodes.push(Node::Operation {
                    value: token.value.clone(),
                    key,
                    loc: token.loc,
                });
                scanner.next();
            }
            TokenType::OpenParen => {
                let negatived = scanner.preceded_by_negation();
                scanner.next();
                let node = parse_sub_expression(scanner, token, negatived)?;
                nodes.push(node);
            }
            TokenType::CloseParen => {
                debug!("Unmatched ) at {:?}", token.loc.start);
                let (origin, expected) = match nodes.last() {
                    Some(node) if node.is_operand() => (node.kind(), OPERATION),
                    Some(node) => (node.kind(), OPERAND),
                    None => ("Start", OPERAND),
                };
                return Err(SyntaxError::unexpected(
                    origin,
                    expected,
                    TokenType::CloseParen.kind(),
                    token.loc,
                ));
            }
            TokenType::Unknown => {
                return Err(SyntaxError::NotInstantiated {
                    method: token.value.clone(),
                    loc: token.loc,
                });
            }
        }
    }

    validate(&nodes)?;
    Ok(nodes)
}

/// Consumes the group opened by `open` and parses its contents with a fresh
/// scanner.
fn parse_sub_expression<'a>(
    scanner: &mut Scanner<'a>,
    open: &'a Token,
    negatived: bool,
) -> Result<Node, SyntaxError> {
    let mut body_tokens = Vec::<Token>::new();
    let mut depth = 1;
    let mut last = open;

    let close = loop {
        let Some(token) = scanner.next() else {
            debug!("Unclosed ( at {:?}", open.loc.start);
            return Err(SyntaxError::WasExperienced {
                loc: open.loc,
                line: last.loc.start.line,
                column: last.loc.start.column,
            });
        };
        last = token;

        match token.token_type() {
            TokenType::OpenParen => depth += 1,
            TokenType::CloseParen => depth -= 1,
            _ => {}
        }
        if depth == 0 {
            break token;
        }
        body_tokens.push(token.clone());
    };

    if body_tokens.is_empty() {
        return Err(SyntaxError::unexpected(
            "SubExpression",
            OPERAND,
            "None",
            close.loc,
        ));
    }

    debug!("SubExpression with {} token(s)", body_tokens.len());
    let body = parse_impl(&mut Scanner::new(&body_tokens))?;

    Ok(Node::SubExpression {
        body,
        negatived,
        loc: SourceLocation::span(open.loc, close.loc),
    })
}

fn check_negation_target(negation: &Token, next: Option<&Token>) -> Result<(), SyntaxError> {
    match next.map(|token| token.token_type()) {
        Some(TokenType::Letter | TokenType::OpenParen | TokenType::Negation) => Ok(()),
        Some(other) => Err(SyntaxError::unexpected(
            TokenType::Negation.kind(),
            OPERAND,
            other.kind(),
            next.map_or(negation.loc, |token| token.loc),
        )),
        None => Err(SyntaxError::unexpected(
            TokenType::Negation.kind(),
            OPERAND,
            "None",
            negation.loc,
        )),
    }
}
