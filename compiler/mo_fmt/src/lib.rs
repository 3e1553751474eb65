//! Modelica Formatter
//!
//! Source-to-source formatter for Modelica. The formatter re-emits a
//! parsed syntax tree token by token under a fixed layout policy; it
//! never rewrites, reorders, or drops tokens, so the output is always the
//! same program with normalized whitespace.
//!
//! # Architecture
//!
//! A single depth-first walk over the tree drives emission:
//!
//! 1. **Rule boundaries** consult the layout policy: some rules force a
//!    line break before themselves, some start an indented block.
//! 2. **Tokens** are emitted with spacing decided by literal-text lookup
//!    tables, after flushing any comments that preceded them in source.
//!
//! Indentation grows at most one level per output line no matter how many
//! nested rules request it, which keeps deeply nested constructs readable.
//!
//! # Modules
//!
//! - [`spacing`]: inter-token space decision tables
//! - [`layout`]: newline and indentation policy per rule kind
//! - [`indent`]: rendered/suppressed indentation stack
//! - [`comments`]: re-insertion queue for side-channel comment tokens
//! - [`emitter`]: output abstraction for string and writer output
//! - [`formatter`]: the emitting tree listener

pub mod comments;
pub mod emitter;
pub mod formatter;
pub mod indent;
pub mod layout;
pub mod spacing;

use std::io::Write;

use mo_ir::{walk, CommentList, SyntaxNode};

pub use emitter::{Emitter, StringEmitter, WriteEmitter, INDENT_UNIT};
pub use formatter::Formatter;
pub use spacing::SpacingTables;

/// Formatting options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatConfig {
    /// Break and indent every parenthesized argument onto its own line,
    /// instead of only the arguments of `annotation (...)`.
    pub indent_parenthesized_args: bool,
}

/// Errors surfaced while writing formatted output.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("failed to write formatted output")]
    Io(#[from] std::io::Error),
}

/// Format a parsed tree into a `String`.
///
/// `comments` is the side channel collected by the lexer for the same
/// token stream the tree was parsed from; every comment is re-inserted
/// next to the token it preceded in source.
pub fn format_tree(root: &SyntaxNode, comments: CommentList, config: FormatConfig) -> String {
    let emitter = StringEmitter::new();
    let mut formatter = Formatter::new(emitter, comments.into_iter().collect(), config);
    walk(&mut formatter, root);
    formatter.finish().into_output()
}

/// Format a parsed tree into any [`Write`] sink.
///
/// The output is buffered in memory and written in one piece, so a sink
/// never observes half-formatted text.
pub fn format_tree_to<W: Write>(
    root: &SyntaxNode,
    comments: CommentList,
    config: FormatConfig,
    sink: W,
) -> Result<(), FormatError> {
    let emitter = WriteEmitter::new(sink);
    let mut formatter = Formatter::new(emitter, comments.into_iter().collect(), config);
    walk(&mut formatter, root);
    formatter.finish().finish()
}

#[cfg(test)]
mod tests;
