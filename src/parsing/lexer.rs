use crate::errors::SyntaxError;
use crate::token::{SourceLocation, Token};

/// Tokens of one input plus every disallowed character found in it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenized {
    pub tokens: Vec<Token>,
    pub exceptions: Vec<SyntaxError>,
}

impl Tokenized {
    /// The error a parse reports: the earliest offending token.
    pub fn first_exception(&self) -> Option<&SyntaxError> {
        self.exceptions.first()
    }
}

pub fn lex_impl(input: &str) -> Tokenized {
    let mut tokens = Vec::<Token>::new();

    for (line, content) in input.split('\n').enumerate() {
        for (column, c) in content.chars().enumerate() {
            if is_whitespace(c) {
                continue;
            }
            trace!("Token '{}' at {}:{}", c, line + 1, column);
            tokens.push(Token::new(c, SourceLocation::at(line + 1, column)));
        }
    }

    let exceptions = validate(&tokens);
    if !exceptions.is_empty() {
        debug!("{} disallowed character(s)", exceptions.len());
    }

    Tokenized { tokens, exceptions }
}

fn validate(tokens: &[Token]) -> Vec<SyntaxError> {
    tokens
        .iter()
        .filter(|token| !token.is_allowed())
        .map(|token| SyntaxError::Undetermined {
            value: token.value.clone(),
            loc: token.loc,
        })
        .collect()
}

fn is_whitespace(c: char) -> bool {
    c == ' '
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(tokenized: &Tokenized) -> Vec<&str> {
        tokenized.tokens.iter().map(|t| t.value.as_str()).collect()
    }

    #[test]
    fn one_token_per_character() {
        let tokenized = lex_impl("p ^ (q ˅ r)");
        assert_eq!(values(&tokenized), vec!["p", "^", "(", "q", "˅", "r", ")"]);
        assert!(tokenized.exceptions.is_empty());
    }

    #[test]
    fn positions_are_line_one_based_column_zero_based() {
        let tokenized = lex_impl("p ∧\n  q");
        let locs: Vec<(usize, usize)> = tokenized
            .tokens
            .iter()
            .map(|t| (t.loc.start.line, t.loc.start.column))
            .collect();
        assert_eq!(locs, vec![(1, 0), (1, 2), (2, 2)]);
    }

    #[test]
    fn multibyte_glyphs_count_as_one_column() {
        let tokenized = lex_impl("¬p→q");
        let columns: Vec<usize> = tokenized.tokens.iter().map(|t| t.loc.start.column).collect();
        assert_eq!(columns, vec![0, 1, 2, 3]);
    }

    #[test]
    fn collects_every_disallowed_character_in_order() {
        let tokenized = lex_impl("q ^ = & p");
        assert_eq!(tokenized.tokens.len(), 5);
        assert_eq!(tokenized.exceptions.len(), 2);
        assert_eq!(
            tokenized.first_exception(),
            Some(&SyntaxError::Undetermined {
                value: "=".to_string(),
                loc: SourceLocation::at(1, 4),
            })
        );
    }

    #[test]
    fn empty_input_has_no_tokens() {
        let tokenized = lex_impl("");
        assert!(tokenized.tokens.is_empty());
        assert!(tokenized.first_exception().is_none());
    }
}
