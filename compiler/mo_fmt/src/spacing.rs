//! Inter-token spacing policy.
//!
//! Decides, from the literal text of the current and previous token alone,
//! whether a space belongs between them. Two fixed token groups encode
//! that punctuation binds tightly: no space after an opening bracket, none
//! before a closing one, none around member access, tight arithmetic
//! operators, none before statement separators.

use rustc_hash::FxHashSet;

/// Tokens which should *generally* not have a space after them.
/// The `annotation (` override in [`SpacingTables::space_between`] wins
/// over these groups.
const NO_SPACE_AFTER: &[&str] = &["(", "=", ".", "[", "{", "-", "^", "*", "/", ";"];

/// Tokens which should *generally* not have a space before them.
const NO_SPACE_BEFORE: &[&str] = &[
    "(", ")", "[", "]", "}", ";", "=", ",", ".", "-", "^", "*", "/",
];

/// The two no-space token groups, hashed for per-pair lookups.
pub struct SpacingTables {
    no_space_after: FxHashSet<&'static str>,
    no_space_before: FxHashSet<&'static str>,
}

impl SpacingTables {
    pub fn new() -> Self {
        SpacingTables {
            no_space_after: NO_SPACE_AFTER.iter().copied().collect(),
            no_space_before: NO_SPACE_BEFORE.iter().copied().collect(),
        }
    }

    /// Whether a space should be inserted between `previous` and `current`.
    ///
    /// Pure in the pair: the only override is the literal `annotation (`
    /// case, which always gets a space.
    pub fn space_between(&self, current: &str, previous: &str) -> bool {
        if current == "(" && previous == "annotation" {
            return true;
        }
        !self.no_space_after.contains(previous) && !self.no_space_before.contains(current)
    }
}

impl Default for SpacingTables {
    fn default() -> Self {
        SpacingTables::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_separated() {
        let tables = SpacingTables::new();
        assert!(tables.space_between("M", "model"));
        assert!(tables.space_between("then", "true"));
    }

    #[test]
    fn equals_binds_tightly_on_both_sides() {
        let tables = SpacingTables::new();
        assert!(!tables.space_between("=", "a"));
        assert!(!tables.space_between("1", "="));
    }

    #[test]
    fn annotation_paren_override() {
        let tables = SpacingTables::new();
        assert!(tables.space_between("(", "annotation"));
        // Everything else keeps the parenthesis tight.
        assert!(!tables.space_between("(", "f"));
        assert!(!tables.space_between("(", "connect"));
    }

    #[test]
    fn brackets_and_separators_are_tight() {
        let tables = SpacingTables::new();
        assert!(!tables.space_between("x", "("));
        assert!(!tables.space_between(")", "x"));
        assert!(!tables.space_between(",", "a"));
        assert!(!tables.space_between(";", ")"));
        assert!(!tables.space_between("]", "1"));
        assert!(!tables.space_between("b", "."));
    }

    #[test]
    fn comma_separates_the_next_item() {
        let tables = SpacingTables::new();
        assert!(tables.space_between("x", ","));
    }

    #[test]
    fn arithmetic_is_tight_and_relations_are_not() {
        let tables = SpacingTables::new();
        assert!(!tables.space_between("*", "a"));
        assert!(!tables.space_between("b", "*"));
        assert!(tables.space_between(">", "a"));
        assert!(tables.space_between("b", ">"));
        // `+` is absent from both groups, so additions keep their spaces.
        assert!(tables.space_between("+", "a"));
        assert!(tables.space_between("b", "+"));
    }

    #[test]
    fn decisions_depend_only_on_the_pair() {
        let tables = SpacingTables::new();
        for _ in 0..3 {
            assert!(!tables.space_between("=", "a"));
            assert!(tables.space_between("b", "a"));
        }
    }
}
