//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, lookahead, and consumption. The token
//! list always ends with `Eof`, so `current()` is total.

use crate::error::{PResult, ParseError};
use mo_ir::{Token, TokenKind, TokenList};
use tracing::trace;

pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of the stream.
    ///
    /// # Panics
    /// Panics if the list does not end with an `Eof` token.
    pub fn new(tokens: &'a TokenList) -> Self {
        assert!(
            tokens.get(tokens.len().saturating_sub(1)).is_some_and(Token::is_eof),
            "token list must be terminated by Eof"
        );
        Cursor { tokens, pos: 0 }
    }

    /// The current token. Total: stays on `Eof` at the end.
    #[inline]
    pub fn current(&self) -> &Token {
        self.token_at(self.pos)
    }

    /// Kind of the current token.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Kind of the token `n` positions ahead (0 = current).
    #[inline]
    pub fn peek_kind(&self, n: usize) -> TokenKind {
        self.token_at(self.pos + n).kind
    }

    /// Whether the current token has the given kind.
    #[inline]
    pub fn at(&self, kind: TokenKind) -> bool {
        self.kind() == kind
    }

    #[inline]
    pub fn at_eof(&self) -> bool {
        self.current().is_eof()
    }

    /// Consume the current token and advance.
    pub fn bump(&mut self) -> Token {
        let token = self.current().clone();
        trace!(text = %token.text, kind = ?token.kind, "bump");
        if !token.is_eof() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        if self.at(kind) {
            Some(self.bump())
        } else {
            None
        }
    }

    /// Consume a token of the given kind or fail.
    pub fn expect(&mut self, kind: TokenKind, expected: &str) -> PResult<Token> {
        if self.at(kind) {
            Ok(self.bump())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Build an error for the current token.
    pub fn unexpected(&self, expected: &str) -> ParseError {
        let current = self.current();
        if current.is_eof() {
            ParseError::UnexpectedEof {
                expected: expected.to_owned(),
            }
        } else {
            ParseError::UnexpectedToken {
                expected: expected.to_owned(),
                found: current.text.clone(),
                span: current.span,
            }
        }
    }

    #[inline]
    fn token_at(&self, pos: usize) -> &'a Token {
        let last = self.tokens.len() - 1;
        match self.tokens.get(pos.min(last)) {
            Some(token) => token,
            // Unreachable: the constructor checks for a non-empty,
            // Eof-terminated list.
            None => unreachable!("cursor position out of bounds"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests can panic")]
mod tests {
    use super::*;
    use mo_ir::Span;
    use pretty_assertions::assert_eq;

    fn list(kinds: &[(TokenKind, &str)]) -> TokenList {
        let mut tokens = TokenList::new();
        for (i, (kind, text)) in kinds.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            tokens.push(Token::new(*kind, *text, i as u32, Span::DUMMY));
        }
        let idx = u32::try_from(kinds.len()).unwrap();
        tokens.push(Token::new(TokenKind::Eof, "", idx, Span::DUMMY));
        tokens
    }

    #[test]
    fn bump_advances_and_stops_at_eof() {
        let tokens = list(&[(TokenKind::Ident, "a"), (TokenKind::Semicolon, ";")]);
        let mut cursor = Cursor::new(&tokens);
        assert_eq!(cursor.bump().text, "a");
        assert_eq!(cursor.bump().text, ";");
        assert!(cursor.at_eof());
        assert!(cursor.bump().is_eof());
        assert!(cursor.at_eof());
    }

    #[test]
    fn expect_reports_found_token() {
        let tokens = list(&[(TokenKind::Ident, "a")]);
        let mut cursor = Cursor::new(&tokens);
        let err = cursor.expect(TokenKind::Semicolon, "`;`").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedToken {
                expected: "`;`".to_owned(),
                found: "a".to_owned(),
                span: Span::DUMMY,
            }
        );
    }

    #[test]
    fn peek_past_the_end_is_eof() {
        let tokens = list(&[(TokenKind::Ident, "a")]);
        let cursor = Cursor::new(&tokens);
        assert_eq!(cursor.peek_kind(5), TokenKind::Eof);
    }
}
