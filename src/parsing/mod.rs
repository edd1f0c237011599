mod lexer;
mod parser;
mod process;
mod scanner;
mod validator;

pub use crate::parsing::lexer::Tokenized;
pub use crate::parsing::validator::validate;

use crate::ast::Node;
use crate::errors::SyntaxError;
use crate::parsing::lexer::lex_impl;
use crate::parsing::parser::parse_impl;
use crate::parsing::process::process;
use crate::parsing::scanner::Scanner;
use crate::token::Token;

/// Splits `input` into positioned tokens, collecting disallowed characters
/// as exceptions instead of failing.
pub fn tokenize(input: &str) -> Tokenized {
    let input = process(input);
    debug!("Processed input: {:?}", input);
    lex_impl(&input)
}

/// Parses an expression into its validated tree. The first disallowed
/// character is reported before any node is built.
pub fn parse(input: &str) -> Result<Vec<Node>, SyntaxError> {
    debug!("User input: {}", input);

    let tokenized = tokenize(input);
    if let Some(exception) = tokenized.first_exception() {
        debug!("Tokenizer exception: {}", exception);
        return Err(exception.clone());
    }
    debug!("Lexed {} token(s)", tokenized.tokens.len());

    parse_tokens(&tokenized.tokens)
}

/// Parses already tokenized input. Tokens are not screened for disallowed
/// characters here; one reaching construction is `NotInstantiated`.
pub fn parse_tokens(tokens: &[Token]) -> Result<Vec<Node>, SyntaxError> {
    let mut scanner = Scanner::new(tokens);
    parse_impl(&mut scanner)
}
