//! Shared syntax types for the Modelica formatter.
//!
//! Provides the data model every other crate works against:
//!
//! - [`span`]: compact byte-offset source spans
//! - [`token`]: tokens with literal text, channel classification, and the
//!   absolute sequence index shared between ordinary and comment tokens
//! - [`tree`]: rule kinds and the owned concrete syntax tree
//! - [`walk`]: depth-first tree traversal driving listener callbacks
//!
//! The formatter core consumes these types read-only; the lexer and parser
//! produce them.

pub mod span;
pub mod token;
pub mod tree;
pub mod walk;

pub use span::Span;
pub use token::{Channel, CommentList, Token, TokenKind, TokenList};
pub use tree::{Child, RuleKind, SyntaxNode};
pub use walk::{walk, TreeListener};
