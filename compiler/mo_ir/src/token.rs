//! Token types for the Modelica lexer.
//!
//! Tokens carry their literal text (the formatter decides spacing by text
//! comparison), an absolute sequence index, and a span. The index space is
//! shared between ordinary and comment tokens: the lexer numbers every
//! token it scans, then routes ordinary tokens to the parser channel and
//! comment tokens to the side channel. Relative source order is therefore
//! always recoverable by comparing indices.

use super::Span;
use std::fmt;

/// A token with its literal text, absolute sequence index, and span.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// Absolute sequence index, shared across ordinary and comment tokens.
    pub index: u32,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, index: u32, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            index,
            span,
        }
    }

    /// Channel of this token (ordinary vs one of the comment channels).
    #[inline]
    pub fn channel(&self) -> Channel {
        self.kind.channel()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) #{} @ {}", self.kind, self.text, self.index, self.span)
    }
}

/// Token channel, as seen by the formatter.
///
/// The parser consumes only `Ordinary` tokens; the two comment channels are
/// invisible to the grammar and re-inserted by the formatter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Channel {
    Ordinary,
    BlockComment,
    LineComment,
}

/// Token kinds for the Modelica subset handled by the toolchain.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Keywords
    Within,
    Final,
    Encapsulated,
    Partial,
    Class,
    Model,
    Record,
    Block,
    Connector,
    Type,
    Package,
    Function,
    Operator,
    Expandable,
    Pure,
    Impure,
    End,
    Public,
    Protected,
    Equation,
    Algorithm,
    Initial,
    If,
    Then,
    Else,
    Elseif,
    For,
    Loop,
    In,
    While,
    When,
    Elsewhen,
    Connect,
    Extends,
    Constrainedby,
    Import,
    Parameter,
    Constant,
    Input,
    Output,
    Flow,
    Stream,
    Discrete,
    Replaceable,
    Redeclare,
    Inner,
    Outer,
    Annotation,
    Der,
    Not,
    And,
    Or,
    True,
    False,
    Each,

    // Punctuation and operators
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Semicolon,
    Comma,
    Dot,
    Colon,
    Equals,
    Assign,
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    DotPlus,
    DotMinus,
    DotStar,
    DotSlash,
    DotCaret,
    Lt,
    Le,
    Gt,
    Ge,
    EqEq,
    Ne,

    // Literals and identifiers
    Ident,
    Number,
    Str,

    // Side-channel trivia
    BlockComment,
    LineComment,

    Error,
    Eof,
}

impl TokenKind {
    /// Classify the token's channel.
    ///
    /// Everything except the two comment kinds is ordinary (visible to the
    /// grammar).
    #[inline]
    pub fn channel(self) -> Channel {
        match self {
            TokenKind::BlockComment => Channel::BlockComment,
            TokenKind::LineComment => Channel::LineComment,
            _ => Channel::Ordinary,
        }
    }
}

/// Ordered sequence of ordinary tokens, as consumed by the parser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    pub fn push(&mut self, token: Token) {
        debug_assert_eq!(
            token.channel(),
            Channel::Ordinary,
            "comment token routed to the ordinary channel"
        );
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, pos: usize) -> Option<&Token> {
        self.tokens.get(pos)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

/// Ordered sequence of comment tokens collected on the side channel.
///
/// Invariant: entries are comment-channel tokens in strictly increasing
/// index order (checked in debug builds on push).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommentList {
    comments: Vec<Token>,
}

impl CommentList {
    pub fn new() -> Self {
        CommentList {
            comments: Vec::new(),
        }
    }

    pub fn push(&mut self, token: Token) {
        debug_assert_ne!(
            token.channel(),
            Channel::Ordinary,
            "ordinary token routed to the comment channel"
        );
        debug_assert!(
            self.comments.last().is_none_or(|last| last.index < token.index),
            "comment indices must be strictly increasing"
        );
        self.comments.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.comments.iter()
    }
}

impl IntoIterator for CommentList {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.comments.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn channel_classification() {
        assert_eq!(TokenKind::Ident.channel(), Channel::Ordinary);
        assert_eq!(TokenKind::Semicolon.channel(), Channel::Ordinary);
        assert_eq!(TokenKind::BlockComment.channel(), Channel::BlockComment);
        assert_eq!(TokenKind::LineComment.channel(), Channel::LineComment);
    }

    #[test]
    fn token_list_preserves_order() {
        let mut list = TokenList::new();
        list.push(Token::new(TokenKind::Ident, "a", 0, Span::DUMMY));
        list.push(Token::new(TokenKind::Equals, "=", 1, Span::DUMMY));
        let texts: Vec<&str> = list.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "="]);
    }

    #[test]
    fn comment_list_accepts_both_comment_kinds() {
        let mut list = CommentList::new();
        list.push(Token::new(TokenKind::BlockComment, "/* a */", 3, Span::DUMMY));
        list.push(Token::new(TokenKind::LineComment, "// b", 7, Span::DUMMY));
        assert_eq!(list.len(), 2);
    }
}
