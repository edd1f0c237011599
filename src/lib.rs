#[macro_use]
extern crate log;

pub mod ast;
pub mod config;
pub mod errors;
pub mod parsing;
pub mod persist;
pub mod structure;
pub mod table;
pub mod token;

pub use crate::ast::{Node, OperationKey};
pub use crate::errors::{RuntimeError, SyntaxError};
pub use crate::parsing::{parse, parse_tokens, tokenize};
pub use crate::structure::Structure;
pub use crate::table::Table;
