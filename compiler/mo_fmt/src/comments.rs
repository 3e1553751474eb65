//! Re-insertion queue for comment tokens.
//!
//! The lexer routes comments to a side channel but hands them out with the
//! same absolute token indices as the ordinary stream. During emission the
//! formatter asks, before each ordinary token, for every queued comment
//! whose index falls strictly between the previous ordinary token and the
//! upcoming one. That window keeps each comment attached to the token it
//! preceded in the source.

use std::collections::VecDeque;

use mo_ir::{Channel, Token};

/// FIFO of pending comment tokens, ordered by index.
#[derive(Debug, Default)]
pub struct CommentQueue {
    pending: VecDeque<Token>,
}

impl CommentQueue {
    /// Build a queue from the lexer's comment channel.
    ///
    /// # Panics
    /// Panics if an ordinary-channel token is passed in; the queue only
    /// carries comments.
    pub fn new(comments: Vec<Token>) -> Self {
        for token in &comments {
            assert!(
                token.channel() != Channel::Ordinary,
                "ordinary token {:?} routed into the comment queue",
                token.kind
            );
        }
        CommentQueue {
            pending: comments.into(),
        }
    }

    /// Pop the front comment if it is due before the ordinary token at
    /// `next_index`. `previous` is the index of the last ordinary token
    /// written, or `None` at the start of the stream.
    pub fn pop_due(&mut self, next_index: u32, previous: Option<u32>) -> Option<Token> {
        let front = self.pending.front()?;
        let after_previous = previous.is_none_or(|prev| front.index > prev);
        if front.index < next_index && after_previous {
            self.pending.pop_front()
        } else {
            None
        }
    }

    /// Drain whatever is still queued, in order. Used once emission has
    /// passed the last ordinary token.
    pub fn drain_remaining(&mut self) -> impl Iterator<Item = Token> + '_ {
        self.pending.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mo_ir::{Span, TokenKind};

    fn comment(index: u32, text: &str) -> Token {
        Token::new(TokenKind::LineComment, text, index, Span::DUMMY)
    }

    #[test]
    fn pops_comments_inside_the_window() {
        let mut queue = CommentQueue::new(vec![comment(1, "// a"), comment(5, "// b")]);
        assert_eq!(queue.pop_due(3, Some(0)).map(|t| t.index), Some(1));
        assert_eq!(queue.pop_due(3, Some(0)), None);
        assert_eq!(queue.pop_due(6, Some(3)).map(|t| t.index), Some(5));
        assert!(queue.is_empty());
    }

    #[test]
    fn leading_comment_is_due_before_the_first_token() {
        let mut queue = CommentQueue::new(vec![comment(0, "// header")]);
        assert_eq!(queue.pop_due(1, None).map(|t| t.index), Some(0));
    }

    #[test]
    fn comment_at_or_before_previous_index_stays_queued() {
        let mut queue = CommentQueue::new(vec![comment(2, "// x")]);
        assert_eq!(queue.pop_due(5, Some(2)), None);
        assert_eq!(queue.drain_remaining().count(), 1);
    }

    #[test]
    #[should_panic(expected = "routed into the comment queue")]
    fn ordinary_tokens_are_rejected() {
        let _ = CommentQueue::new(vec![Token::new(TokenKind::Ident, "x", 0, Span::DUMMY)]);
    }
}
