//! Grammar productions.
//!
//! One function per rule, grouped the way the language reference groups
//! them: items (classes, elements, modifications), equations/statements,
//! and expressions. Shared small productions (names, descriptions,
//! annotations) live here.

pub(crate) mod expr;
pub(crate) mod item;
pub(crate) mod stmt;

use crate::error::PResult;
use crate::Parser;
use mo_ir::{RuleKind, SyntaxNode, TokenKind};

impl Parser<'_> {
    /// name : ['.'] IDENT { '.' IDENT }
    ///
    /// Tokens are pushed directly into `node`. Stops before a trailing
    /// `.*` (import wildcard), which the caller consumes.
    pub(crate) fn name_into(&mut self, node: &mut SyntaxNode) -> PResult<()> {
        if let Some(dot) = self.cursor.eat(TokenKind::Dot) {
            node.push_token(dot);
        }
        node.push_token(self.cursor.expect(TokenKind::Ident, "identifier")?);
        while self.cursor.at(TokenKind::Dot) && self.cursor.peek_kind(1) == TokenKind::Ident {
            node.push_token(self.cursor.bump());
            node.push_token(self.cursor.bump());
        }
        Ok(())
    }

    /// string_comment : STRING { '+' STRING }
    pub(crate) fn string_comment(&mut self) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::StringComment);
        node.push_token(self.cursor.expect(TokenKind::Str, "string")?);
        while let Some(plus) = self.cursor.eat(TokenKind::Plus) {
            node.push_token(plus);
            node.push_token(self.cursor.expect(TokenKind::Str, "string")?);
        }
        Ok(node)
    }

    /// annotation : 'annotation' class_modification
    pub(crate) fn annotation(&mut self) -> PResult<SyntaxNode> {
        let mut node = SyntaxNode::new(RuleKind::Annotation);
        node.push_token(self.cursor.expect(TokenKind::Annotation, "`annotation`")?);
        node.push_rule(self.class_modification()?);
        Ok(node)
    }

    /// comment : [string_comment] [annotation]
    ///
    /// Returns `None` when neither part is present.
    pub(crate) fn description(&mut self) -> PResult<Option<SyntaxNode>> {
        if !self.cursor.at(TokenKind::Str) && !self.cursor.at(TokenKind::Annotation) {
            return Ok(None);
        }
        let mut node = SyntaxNode::new(RuleKind::Description);
        if self.cursor.at(TokenKind::Str) {
            let comment = self.string_comment()?;
            node.push_rule(comment);
        }
        if self.cursor.at(TokenKind::Annotation) {
            let annotation = self.annotation()?;
            node.push_rule(annotation);
        }
        Ok(Some(node))
    }
}
