//! Indentation depth bookkeeping.
//!
//! Every layout-triggering rule pushes an entry on entry and pops exactly
//! one on exit, so the stack is always balanced with the traversal. An
//! entry is `Rendered` only when it actually increased the visible
//! indentation; pushes after the current line already increased once are
//! `Suppressed`, capping the visible increase at one unit per line.

/// One stack entry per active layout-triggering rule.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IndentEntry {
    Rendered,
    Suppressed,
}

/// Stack of indentation entries.
#[derive(Debug, Default)]
pub struct IndentStack {
    entries: Vec<IndentEntry>,
}

impl IndentStack {
    pub fn new() -> Self {
        IndentStack::default()
    }

    /// Push an entry: rendered when the line has not bumped yet.
    pub fn push(&mut self, rendered: bool) {
        self.entries.push(if rendered {
            IndentEntry::Rendered
        } else {
            IndentEntry::Suppressed
        });
    }

    /// Pop one entry, whatever its tag.
    ///
    /// # Panics
    /// Panics on an empty stack: an unmatched pop means the enter/exit
    /// pairing is broken and continuing would corrupt the output.
    pub fn pop(&mut self) {
        if self.entries.pop().is_none() {
            panic!("indentation stack popped while empty");
        }
    }

    /// Number of rendered entries: the indent units to emit at the start
    /// of the next line.
    pub fn rendered(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| **e == IndentEntry::Rendered)
            .count()
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendered_counts_only_rendered_entries() {
        let mut stack = IndentStack::new();
        stack.push(true);
        stack.push(false);
        stack.push(true);
        assert_eq!(stack.depth(), 3);
        assert_eq!(stack.rendered(), 2);
    }

    #[test]
    fn pop_is_symmetric_regardless_of_tag() {
        let mut stack = IndentStack::new();
        stack.push(true);
        stack.push(false);
        stack.pop();
        stack.pop();
        assert!(stack.is_empty());
    }

    #[test]
    #[should_panic(expected = "popped while empty")]
    fn pop_on_empty_stack_panics() {
        let mut stack = IndentStack::new();
        stack.pop();
    }
}
