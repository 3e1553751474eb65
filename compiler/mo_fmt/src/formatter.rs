//! The emitting tree listener.
//!
//! [`Formatter`] walks a syntax tree and rebuilds the source text token by
//! token: comments due before the next token are flushed first, then the
//! token gets its leading indentation or inter-token space, then the text
//! itself, and a `;` ends the line. Rule entries and exits drive the
//! newline and indentation policy from [`crate::layout`].

use mo_ir::{Channel, SyntaxNode, Token, TreeListener};

use crate::comments::CommentQueue;
use crate::emitter::Emitter;
use crate::indent::IndentStack;
use crate::layout::{forces_indent_before, forces_newline_before, ContextCounters};
use crate::spacing::SpacingTables;
use crate::FormatConfig;

/// Tree listener that renders formatted output into an [`Emitter`].
pub struct Formatter<E: Emitter> {
    emitter: E,
    config: FormatConfig,
    spacing: SpacingTables,
    indent: IndentStack,
    comments: CommentQueue,
    counters: ContextCounters,
    /// True at the start of output and right after each newline.
    on_new_line: bool,
    /// True once the current line has already gained an indent level.
    line_indent_bumped: bool,
    prev_text: String,
    prev_index: Option<u32>,
}

impl<E: Emitter> Formatter<E> {
    pub fn new(emitter: E, comments: Vec<Token>, config: FormatConfig) -> Self {
        Formatter {
            emitter,
            config,
            spacing: SpacingTables::new(),
            indent: IndentStack::new(),
            comments: CommentQueue::new(comments),
            counters: ContextCounters::default(),
            on_new_line: true,
            line_indent_bumped: false,
            prev_text: String::new(),
            prev_index: None,
        }
    }

    /// Flush comments past the last ordinary token and hand back the
    /// emitter. The output always ends with a newline.
    pub fn finish(mut self) -> E {
        let trailing: Vec<Token> = self.comments.drain_remaining().collect();
        for comment in &trailing {
            self.write_comment(comment);
        }
        if !self.on_new_line {
            self.write_newline();
        }
        self.emitter
    }

    fn write_newline(&mut self) {
        self.emitter.emit_newline();
        self.on_new_line = true;
        self.line_indent_bumped = false;
    }

    /// Emit indentation at line start, or a separating space mid-line.
    fn write_space_before(&mut self, text: &str) {
        if self.on_new_line {
            let levels = self.indent.rendered();
            if levels > 0 {
                self.emitter.emit_indent(levels);
            }
            self.on_new_line = false;
        } else if self.spacing.space_between(text, &self.prev_text) {
            self.emitter.emit_space();
        }
    }

    /// Emit a comment token. Comments do not become the previous token:
    /// spacing for the next ordinary token is still decided against the
    /// token before the comment.
    fn write_comment(&mut self, comment: &Token) {
        self.write_space_before(&comment.text);
        self.emitter.emit(&comment.text);
        if comment.channel() == Channel::LineComment {
            self.write_newline();
        }
    }

    /// Request one indent level, rendered only if this line has not
    /// already gained one. At most one visible increase per line.
    fn push_indent(&mut self) {
        let rendered = !self.line_indent_bumped;
        self.indent.push(rendered);
        if rendered {
            self.line_indent_bumped = true;
        }
    }
}

impl<E: Emitter> TreeListener for Formatter<E> {
    fn enter_rule(&mut self, node: &SyntaxNode) {
        if forces_newline_before(node.kind) && !self.on_new_line {
            self.write_newline();
        }

        // The indent decision reads the counters before this rule is
        // counted; the exit check below runs after it is uncounted, so
        // both sides see the same state and pushes pair with pops.
        if forces_indent_before(node.kind, &self.counters, &self.config) {
            if !self.on_new_line {
                self.write_newline();
            }
            self.push_indent();
        }

        self.counters.enter(node.kind);
    }

    fn exit_rule(&mut self, node: &SyntaxNode) {
        self.counters.exit(node.kind);
        if forces_indent_before(node.kind, &self.counters, &self.config) {
            self.indent.pop();
        }
    }

    fn visit_token(&mut self, token: &Token) {
        if token.is_eof() {
            return;
        }

        while let Some(comment) = self.comments.pop_due(token.index, self.prev_index) {
            self.write_comment(&comment);
        }

        self.write_space_before(&token.text);
        self.emitter.emit(&token.text);

        if token.text == ";" {
            self.write_newline();
        }

        self.prev_text.clone_from(&token.text);
        self.prev_index = Some(token.index);
    }
}
