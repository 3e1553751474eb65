//! Concrete syntax tree.
//!
//! The parser produces an owned tree of rule nodes whose leaves are the
//! ordinary tokens, in source order. The formatter queries only each
//! node's [`RuleKind`] and never mutates the tree.

use super::Token;

/// Syntactic category of a tree node.
///
/// A closed set: the formatter's policy functions match on it
/// exhaustively, so adding a kind forces a decision at every policy site.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RuleKind {
    StoredDefinition,
    ClassDefinition,
    ClassSpecifier,
    Composition,
    ElementList,
    Element,
    ImportClause,
    ExtendsClause,
    ConstrainingClause,
    ComponentClause,
    Declaration,
    Description,
    Modification,
    ClassModification,
    ArgumentList,
    Argument,
    NamedArgument,
    FunctionArguments,
    FunctionArgument,
    Equations,
    AlgorithmStatements,
    Equation,
    Statement,
    ControlStructureBody,
    IfExpression,
    IfExpressionCondition,
    ElseifExpressionCondition,
    ElseExpressionCondition,
    IfExpressionBody,
    Expression,
    ComponentReference,
    FunctionCall,
    Vector,
    Matrix,
    ExpressionList,
    StringComment,
    Annotation,
    ForIndices,
    Subscripts,
}

/// A child of a rule node: either a nested rule or a terminal token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Child {
    Rule(SyntaxNode),
    Token(Token),
}

/// A node in the syntax tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxNode {
    pub kind: RuleKind,
    pub children: Vec<Child>,
}

impl SyntaxNode {
    pub fn new(kind: RuleKind) -> Self {
        SyntaxNode {
            kind,
            children: Vec::new(),
        }
    }

    pub fn push_rule(&mut self, node: SyntaxNode) {
        self.children.push(Child::Rule(node));
    }

    pub fn push_token(&mut self, token: Token) {
        self.children.push(Child::Token(token));
    }

    /// Iterate the terminal tokens of this subtree in source order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> + '_ {
        // Explicit stack to avoid a recursive iterator type.
        TokenIter {
            stack: vec![self.children.iter()],
        }
    }

    /// Rule-kind skeleton of the subtree, depth-first.
    ///
    /// Two trees with equal skeletons and equal token texts are isomorphic
    /// for the formatter's purposes.
    pub fn skeleton(&self) -> Vec<RuleKind> {
        let mut kinds = Vec::new();
        self.collect_skeleton(&mut kinds);
        kinds
    }

    fn collect_skeleton(&self, kinds: &mut Vec<RuleKind>) {
        kinds.push(self.kind);
        for child in &self.children {
            if let Child::Rule(rule) = child {
                rule.collect_skeleton(kinds);
            }
        }
    }
}

struct TokenIter<'a> {
    stack: Vec<std::slice::Iter<'a, Child>>,
}

impl<'a> Iterator for TokenIter<'a> {
    type Item = &'a Token;

    fn next(&mut self) -> Option<&'a Token> {
        loop {
            let iter = self.stack.last_mut()?;
            match iter.next() {
                Some(Child::Token(token)) => return Some(token),
                Some(Child::Rule(rule)) => self.stack.push(rule.children.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Span, TokenKind};
    use pretty_assertions::assert_eq;

    fn tok(text: &str, index: u32) -> Token {
        Token::new(TokenKind::Ident, text, index, Span::DUMMY)
    }

    #[test]
    fn tokens_iterates_in_source_order() {
        let mut inner = SyntaxNode::new(RuleKind::Expression);
        inner.push_token(tok("b", 1));
        let mut root = SyntaxNode::new(RuleKind::Equation);
        root.push_token(tok("a", 0));
        root.push_rule(inner);
        root.push_token(tok("c", 2));

        let texts: Vec<&str> = root.tokens().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn skeleton_is_depth_first() {
        let mut root = SyntaxNode::new(RuleKind::Equation);
        let mut expr = SyntaxNode::new(RuleKind::Expression);
        expr.push_rule(SyntaxNode::new(RuleKind::ComponentReference));
        root.push_rule(expr);
        root.push_rule(SyntaxNode::new(RuleKind::Annotation));

        assert_eq!(
            root.skeleton(),
            vec![
                RuleKind::Equation,
                RuleKind::Expression,
                RuleKind::ComponentReference,
                RuleKind::Annotation,
            ]
        );
    }
}
