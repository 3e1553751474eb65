//! Layout policy: which rules force newlines and indentation.
//!
//! Both decisions are pure per rule kind; the indent decision additionally
//! consults the ambient context counters so call-argument rules do not
//! indent again inside annotation or vector contexts that already did.
//!
//! The matches are exhaustive on purpose: adding a rule kind forces a
//! decision here instead of silently falling into a default arm.

use crate::FormatConfig;
use mo_ir::RuleKind;

/// Nesting depth counters for the contexts that gate indent exceptions.
///
/// Rules can nest inside themselves, so these are counters rather than
/// flags. Incremented on rule entry, decremented on exit; a balanced walk
/// leaves them at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContextCounters {
    pub annotation: u32,
    pub named_argument: u32,
    pub vector: u32,
}

impl ContextCounters {
    /// Record entry into a counted context, if `kind` is one.
    pub fn enter(&mut self, kind: RuleKind) {
        match kind {
            RuleKind::Annotation => self.annotation += 1,
            RuleKind::NamedArgument => self.named_argument += 1,
            RuleKind::Vector => self.vector += 1,
            _ => {}
        }
    }

    /// Record exit from a counted context, if `kind` is one.
    ///
    /// # Panics
    /// Panics on underflow: an exit without a matching entry is a
    /// traversal bug, not recoverable input.
    pub fn exit(&mut self, kind: RuleKind) {
        let counter = match kind {
            RuleKind::Annotation => &mut self.annotation,
            RuleKind::NamedArgument => &mut self.named_argument,
            RuleKind::Vector => &mut self.vector,
            _ => return,
        };
        *counter = counter
            .checked_sub(1)
            .unwrap_or_else(|| panic!("context counter underflow on {kind:?} exit"));
    }
}

/// Whether entering `kind` must force a newline when mid-line.
pub fn forces_newline_before(kind: RuleKind) -> bool {
    match kind {
        RuleKind::Composition
        | RuleKind::Equations
        | RuleKind::IfExpressionCondition
        | RuleKind::ElseifExpressionCondition
        | RuleKind::ElseExpressionCondition => true,

        RuleKind::StoredDefinition
        | RuleKind::ClassDefinition
        | RuleKind::ClassSpecifier
        | RuleKind::ElementList
        | RuleKind::Element
        | RuleKind::ImportClause
        | RuleKind::ExtendsClause
        | RuleKind::ConstrainingClause
        | RuleKind::ComponentClause
        | RuleKind::Declaration
        | RuleKind::Description
        | RuleKind::Modification
        | RuleKind::ClassModification
        | RuleKind::ArgumentList
        | RuleKind::Argument
        | RuleKind::NamedArgument
        | RuleKind::FunctionArguments
        | RuleKind::FunctionArgument
        | RuleKind::AlgorithmStatements
        | RuleKind::Equation
        | RuleKind::Statement
        | RuleKind::ControlStructureBody
        | RuleKind::IfExpression
        | RuleKind::IfExpressionBody
        | RuleKind::Expression
        | RuleKind::ComponentReference
        | RuleKind::FunctionCall
        | RuleKind::Vector
        | RuleKind::Matrix
        | RuleKind::ExpressionList
        | RuleKind::StringComment
        | RuleKind::Annotation
        | RuleKind::ForIndices
        | RuleKind::Subscripts => false,
    }
}

/// Whether entering `kind` must move to a new line and request an indent.
pub fn forces_indent_before(
    kind: RuleKind,
    counters: &ContextCounters,
    config: &FormatConfig,
) -> bool {
    match kind {
        RuleKind::Element
        | RuleKind::Equations
        | RuleKind::AlgorithmStatements
        | RuleKind::ControlStructureBody
        | RuleKind::StringComment
        | RuleKind::Annotation
        | RuleKind::ExpressionList
        | RuleKind::ConstrainingClause
        | RuleKind::IfExpression
        | RuleKind::IfExpressionBody => true,

        // Call-argument rules indent only under the config switch, and
        // never inside a context that already indented.
        RuleKind::Argument | RuleKind::NamedArgument => {
            config.indent_parenthesized_args && counters.annotation == 0
        }
        RuleKind::FunctionArgument => {
            config.indent_parenthesized_args
                && counters.annotation == 0
                && counters.named_argument == 0
                && counters.vector == 0
        }

        RuleKind::StoredDefinition
        | RuleKind::ClassDefinition
        | RuleKind::ClassSpecifier
        | RuleKind::Composition
        | RuleKind::ElementList
        | RuleKind::ImportClause
        | RuleKind::ExtendsClause
        | RuleKind::ComponentClause
        | RuleKind::Declaration
        | RuleKind::Description
        | RuleKind::Modification
        | RuleKind::ClassModification
        | RuleKind::ArgumentList
        | RuleKind::FunctionArguments
        | RuleKind::Equation
        | RuleKind::Statement
        | RuleKind::IfExpressionCondition
        | RuleKind::ElseifExpressionCondition
        | RuleKind::ElseExpressionCondition
        | RuleKind::Expression
        | RuleKind::ComponentReference
        | RuleKind::FunctionCall
        | RuleKind::Vector
        | RuleKind::Matrix
        | RuleKind::ForIndices
        | RuleKind::Subscripts => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indents(kind: RuleKind, counters: &ContextCounters, config: &FormatConfig) -> bool {
        forces_indent_before(kind, counters, config)
    }

    #[test]
    fn structural_breaks_force_newlines() {
        assert!(forces_newline_before(RuleKind::Composition));
        assert!(forces_newline_before(RuleKind::Equations));
        assert!(forces_newline_before(RuleKind::ElseExpressionCondition));
        assert!(!forces_newline_before(RuleKind::Element));
        assert!(!forces_newline_before(RuleKind::Expression));
    }

    #[test]
    fn block_like_rules_always_indent() {
        let counters = ContextCounters::default();
        let config = FormatConfig::default();
        for kind in [
            RuleKind::Element,
            RuleKind::Equations,
            RuleKind::AlgorithmStatements,
            RuleKind::ControlStructureBody,
            RuleKind::StringComment,
            RuleKind::Annotation,
            RuleKind::ExpressionList,
            RuleKind::ConstrainingClause,
            RuleKind::IfExpression,
            RuleKind::IfExpressionBody,
        ] {
            assert!(indents(kind, &counters, &config), "{kind:?} should indent");
        }
    }

    #[test]
    fn argument_rules_respect_the_config_switch() {
        let counters = ContextCounters::default();
        let off = FormatConfig::default();
        let on = FormatConfig {
            indent_parenthesized_args: true,
        };
        assert!(!indents(RuleKind::FunctionArgument, &counters, &off));
        assert!(!indents(RuleKind::Argument, &counters, &off));
        assert!(indents(RuleKind::FunctionArgument, &counters, &on));
        assert!(indents(RuleKind::NamedArgument, &counters, &on));
    }

    #[test]
    fn annotation_context_suppresses_argument_indents() {
        let config = FormatConfig {
            indent_parenthesized_args: true,
        };
        let counters = ContextCounters {
            annotation: 1,
            ..ContextCounters::default()
        };
        assert!(!indents(RuleKind::Argument, &counters, &config));
        assert!(!indents(RuleKind::NamedArgument, &counters, &config));
        assert!(!indents(RuleKind::FunctionArgument, &counters, &config));
        // Block-like rules stay indented regardless.
        assert!(indents(RuleKind::Annotation, &counters, &config));
    }

    #[test]
    fn function_arguments_also_respect_named_and_vector_contexts() {
        let config = FormatConfig {
            indent_parenthesized_args: true,
        };
        let named = ContextCounters {
            named_argument: 1,
            ..ContextCounters::default()
        };
        let vector = ContextCounters {
            vector: 2,
            ..ContextCounters::default()
        };
        assert!(!indents(RuleKind::FunctionArgument, &named, &config));
        assert!(!indents(RuleKind::FunctionArgument, &vector, &config));
        // Plain and named arguments are gated on annotations only.
        assert!(indents(RuleKind::Argument, &named, &config));
        assert!(indents(RuleKind::NamedArgument, &vector, &config));
    }

    #[test]
    fn counters_track_nesting() {
        let mut counters = ContextCounters::default();
        counters.enter(RuleKind::Annotation);
        counters.enter(RuleKind::Vector);
        counters.enter(RuleKind::Vector);
        assert_eq!(counters.annotation, 1);
        assert_eq!(counters.vector, 2);
        counters.exit(RuleKind::Vector);
        counters.exit(RuleKind::Vector);
        counters.exit(RuleKind::Annotation);
        assert_eq!(counters, ContextCounters::default());
    }

    #[test]
    #[should_panic(expected = "context counter underflow")]
    fn unbalanced_exit_panics() {
        let mut counters = ContextCounters::default();
        counters.exit(RuleKind::Vector);
    }
}
