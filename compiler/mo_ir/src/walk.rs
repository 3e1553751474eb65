//! Depth-first tree traversal.
//!
//! The walker visits the tree in source order on a single thread, calling
//! [`TreeListener::enter_rule`] before a node's children,
//! [`TreeListener::exit_rule`] after them, and
//! [`TreeListener::visit_token`] for each terminal. Listeners mutate their
//! own state only; the tree stays immutable.

use super::{Child, SyntaxNode, Token};

/// Callbacks invoked during a tree walk.
pub trait TreeListener {
    /// Called when entering a rule node, before its children.
    fn enter_rule(&mut self, node: &SyntaxNode);

    /// Called when exiting a rule node, after its children.
    fn exit_rule(&mut self, node: &SyntaxNode);

    /// Called for each terminal token, in source order.
    fn visit_token(&mut self, token: &Token);
}

/// Walk a subtree depth-first, left to right.
pub fn walk<L: TreeListener + ?Sized>(listener: &mut L, node: &SyntaxNode) {
    listener.enter_rule(node);
    for child in &node.children {
        match child {
            Child::Rule(rule) => walk(listener, rule),
            Child::Token(token) => listener.visit_token(token),
        }
    }
    listener.exit_rule(node);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RuleKind, Span, TokenKind};
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl TreeListener for Recorder {
        fn enter_rule(&mut self, node: &SyntaxNode) {
            self.events.push(format!("enter {:?}", node.kind));
        }

        fn exit_rule(&mut self, node: &SyntaxNode) {
            self.events.push(format!("exit {:?}", node.kind));
        }

        fn visit_token(&mut self, token: &Token) {
            self.events.push(format!("token {}", token.text));
        }
    }

    #[test]
    fn events_fire_in_tree_order() {
        let mut inner = SyntaxNode::new(RuleKind::Expression);
        inner.push_token(Token::new(TokenKind::Ident, "x", 0, Span::DUMMY));
        let mut root = SyntaxNode::new(RuleKind::Equation);
        root.push_rule(inner);
        root.push_token(Token::new(TokenKind::Semicolon, ";", 1, Span::DUMMY));

        let mut recorder = Recorder::default();
        walk(&mut recorder, &root);

        assert_eq!(
            recorder.events,
            vec![
                "enter Equation",
                "enter Expression",
                "token x",
                "exit Expression",
                "token ;",
                "exit Equation",
            ]
        );
    }
}
