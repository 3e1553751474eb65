//! End-to-end formatting tests: lex, parse, format, compare.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "tests can panic")]

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::{format_tree, format_tree_to, FormatConfig};

fn reformat_with(source: &str, config: FormatConfig) -> String {
    let lexed = mo_lexer::lex(source).expect("source should lex");
    let tree = mo_parse::parse(&lexed.tokens).expect("source should parse");
    format_tree(&tree, lexed.comments, config)
}

fn reformat(source: &str) -> String {
    reformat_with(source, FormatConfig::default())
}

#[test]
fn minimal_model() {
    let formatted = reformat("model M  Real x;\nequation x = 1;\nend M;\n");
    assert_eq!(formatted, "model M\n  Real x;\nequation\n  x=1;\nend M;\n");
}

#[test]
fn formatted_output_is_stable() {
    let formatted = reformat("model M  Real x;\nequation x = 1;\nend M;\n");
    assert_eq!(reformat(&formatted), formatted);
}

#[test]
fn extra_whitespace_is_collapsed() {
    let formatted = reformat("model  M\n\n\n  Real   x ;\nequation\n  x  =  1 ;\nend  M ;\n");
    assert_eq!(formatted, "model M\n  Real x;\nequation\n  x=1;\nend M;\n");
}

#[test]
fn operator_spacing_follows_the_tables() {
    let formatted = reformat("model M equation x = a + b - c*d/e^f; end M;");
    assert_eq!(formatted, "model M\nequation\n  x=a + b-c*d/e^f;\nend M;\n");
}

#[test]
fn within_clause_keeps_dotted_names_tight() {
    let formatted = reformat("within  Foo . Bar ;\nmodel M\nend M;\n");
    assert_eq!(formatted, "within Foo.Bar;\nmodel M\nend M;\n");
}

#[test]
fn comments_are_reinserted_in_order() {
    let source = "\
// header
model M \"doc\"
  Real x /* inline */;
equation
  x = 1; // why
end M;
";
    let expected = "\
// header
model M
  \"doc\"
  Real x /* inline */;
equation
  x=1;
// why
end M;
";
    assert_eq!(reformat(source), expected);
}

#[test]
fn no_comment_is_dropped() {
    let source = "\
// one
model M // two
  /* three */ Real x;
equation
  x = 1; /* four */
end M; // five
";
    let lexed = mo_lexer::lex(source).expect("source should lex");
    let formatted = reformat(source);
    for comment in lexed.comments.iter() {
        assert!(
            formatted.contains(&comment.text),
            "comment {:?} missing from output",
            comment.text
        );
    }
}

#[test]
fn block_comment_between_statements_keeps_separator_tightness() {
    // The comment lands at the start of the next line, and because a
    // comment never becomes the previous token, the following token is
    // still spaced against the `;` before it: tight on both sides.
    let formatted = reformat("model M\nequation\n  x = 1; /* b */ y = 2;\nend M;\n");
    let expected = "\
model M
equation
  x=1;
  /* b */y=2;
end M;
";
    assert_eq!(formatted, expected);
}

#[test]
fn trailing_comments_flush_at_the_end() {
    let formatted = reformat("model M\nend M;\n// trailing\n");
    assert_eq!(formatted, "model M\nend M;\n// trailing\n");
}

#[test]
fn annotations_break_onto_their_own_line() {
    let formatted = reformat("model M\n  Real x annotation(Placement(visible = true));\nend M;\n");
    assert_eq!(
        formatted,
        "model M\n  Real x\n    annotation (Placement(visible=true));\nend M;\n"
    );
}

#[test]
fn annotation_arguments_never_double_indent() {
    // With the argument switch on, arguments inside an annotation stay
    // inline: the annotation context already indented once.
    let config = FormatConfig {
        indent_parenthesized_args: true,
    };
    let formatted = reformat_with(
        "model M\n  Real x annotation(Placement(visible = true));\nend M;\n",
        config,
    );
    assert_eq!(
        formatted,
        "model M\n  Real x\n    annotation (Placement(visible=true));\nend M;\n"
    );
}

#[test]
fn call_arguments_break_when_the_switch_is_on() {
    let config = FormatConfig {
        indent_parenthesized_args: true,
    };
    let formatted = reformat_with("model M\nequation\n  x = f(a, b = c);\nend M;\n", config);
    let expected = "\
model M
equation
  x=f(
    a,
    b=c);
end M;
";
    assert_eq!(formatted, expected);
}

#[test]
fn vector_context_keeps_arguments_inline() {
    let config = FormatConfig {
        indent_parenthesized_args: true,
    };
    let formatted = reformat_with("model M\nequation\n  x = {f(a), g(b)};\nend M;\n", config);
    assert_eq!(formatted, "model M\nequation\n  x={f(a), g(b)};\nend M;\n");
}

#[test]
fn if_expressions_break_per_branch() {
    let formatted = reformat("model M\nequation\n  y = if x then 1 elseif z then 2 else 3;\nend M;\n");
    let expected = "\
model M
equation
  y=
    if x then
      1
    elseif z then
      2
    else
      3;
end M;
";
    assert_eq!(formatted, expected);
}

#[test]
fn loop_bodies_indent_once() {
    let source = "model M\nalgorithm\n  for i in 1:3 loop x := x + i; end for;\nend M;\n";
    let expected = "\
model M
algorithm
  for i in 1 : 3 loop
    x := x + i;
  end for;
end M;
";
    assert_eq!(reformat(source), expected);
}

#[test]
fn output_reparses_to_the_same_tree() {
    let source = "\
model M \"doc\"
  parameter Real k = 2;
  Real x annotation(Placement(visible = true));
equation
  x = k*x + f(a, b = {1, 2});
end M;
";
    let lexed = mo_lexer::lex(source).expect("source should lex");
    let tree = mo_parse::parse(&lexed.tokens).expect("source should parse");
    let formatted = format_tree(&tree, lexed.comments, FormatConfig::default());

    let relexed = mo_lexer::lex(&formatted).expect("output should lex");
    let retree = mo_parse::parse(&relexed.tokens).expect("output should parse");

    assert_eq!(retree.skeleton(), tree.skeleton());
    let texts = |root: &mo_ir::SyntaxNode| -> Vec<String> {
        root.tokens().map(|t| t.text.clone()).collect()
    };
    assert_eq!(texts(&retree), texts(&tree));
}

#[test]
fn writer_sink_matches_string_output() {
    let source = "model M\nequation\n  x = 1;\nend M;\n";
    let lexed = mo_lexer::lex(source).expect("source should lex");
    let tree = mo_parse::parse(&lexed.tokens).expect("source should parse");

    let via_string = format_tree(&tree, lexed.comments.clone(), FormatConfig::default());
    let mut sink = Vec::new();
    format_tree_to(&tree, lexed.comments, FormatConfig::default(), &mut sink)
        .expect("writing to a Vec cannot fail");
    assert_eq!(String::from_utf8(sink).expect("output is UTF-8"), via_string);
}

proptest! {
    #[test]
    fn formatting_is_idempotent(
        name in "M[a-zA-Z0-9]{0,6}",
        vars in proptest::collection::vec(("v[a-z0-9]{0,4}", 1u32..100), 1..5),
    ) {
        let mut source = format!("model {name}\n");
        for (var, _) in &vars {
            source.push_str(&format!("  Real {var};\n"));
        }
        source.push_str("equation\n");
        for (var, value) in &vars {
            source.push_str(&format!("  {var} = {value};\n"));
        }
        source.push_str(&format!("end {name};\n"));

        let once = reformat(&source);
        prop_assert_eq!(&reformat(&once), &once);
    }
}
