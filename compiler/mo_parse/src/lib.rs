//! Recursive descent parser for a practical Modelica subset.
//!
//! Produces the owned `mo_ir` syntax tree. Every consumed ordinary token
//! is attached to the tree in source order, so a downstream walker sees the
//! terminals exactly as they appeared in the source. Comments never reach
//! the parser; the lexer routes them onto the side channel.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{PResult, ParseError};

use mo_ir::{SyntaxNode, TokenList};
use tracing::debug;

/// Parser state.
pub struct Parser<'a> {
    pub(crate) cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    /// Create a new parser over an `Eof`-terminated token list.
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }
}

/// Parse a complete stored definition (one Modelica file).
pub fn parse(tokens: &TokenList) -> PResult<SyntaxNode> {
    debug!(tokens = tokens.len(), "parse stored definition");
    let mut parser = Parser::new(tokens);
    let root = parser.stored_definition()?;
    if !parser.cursor.at_eof() {
        return Err(parser.cursor.unexpected("end of input"));
    }
    Ok(root)
}
