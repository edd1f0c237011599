use crate::token::{Token, TokenType};

/// Cursor over one slice of tokens. Every parse call owns its scanner, so
/// nested groups never share a position.
pub struct Scanner<'a> {
    input: &'a [Token],
    index: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a [Token]) -> Scanner<'a> {
        Scanner { input, index: 0 }
    }

    pub fn peek(&self) -> Option<&'a Token> {
        self.input.get(self.index)
    }

    pub fn peek_next(&self, offset: usize) -> Option<&'a Token> {
        self.input.get(self.index + offset)
    }

    pub fn previous(&self) -> Option<&'a Token> {
        self.index
            .checked_sub(1)
            .and_then(|index| self.input.get(index))
    }

    pub fn next(&mut self) -> Option<&'a Token> {
        let token = self.input.get(self.index);
        if token.is_some() {
            self.index += 1;
        }
        token
    }

    pub fn preceded_by_negation(&self) -> bool {
        self.previous()
            .is_some_and(|token| token.token_type() == TokenType::Negation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::SourceLocation;

    fn tokens(values: &[&str]) -> Vec<Token> {
        values
            .iter()
            .enumerate()
            .map(|(column, value)| Token::new(*value, SourceLocation::at(1, column)))
            .collect()
    }

    #[test]
    fn walks_and_looks_back() {
        let tokens = tokens(&["~", "p", "^"]);
        let mut scanner = Scanner::new(&tokens);
        assert!(scanner.previous().is_none());
        assert_eq!(scanner.peek_next(1).map(|t| t.value.as_str()), Some("p"));
        scanner.next();
        assert!(scanner.preceded_by_negation());
        scanner.next();
        assert!(!scanner.preceded_by_negation());
        assert_eq!(scanner.next().map(|t| t.value.as_str()), Some("^"));
        assert!(scanner.next().is_none());
        assert!(scanner.peek().is_none());
    }
}
