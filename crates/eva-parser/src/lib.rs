// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Parser for the EVA language.
//!
//! Transforms source text into an abstract syntax tree rooted at a code block.

mod hints;
mod parser;

pub use parser::{ParseError, Parser, SyntaxError, SyntaxErrorKind};

use eva_ast::Node;

/// Parse a whole program.
pub fn parse(source: &str) -> Result<Node, ParseError> {
    Parser::new(source).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use eva_ast::{Position, Span};

    fn tree(src: &str) -> String {
        match parse(src) {
            Ok(node) => node.to_string(),
            Err(e) => panic!("Parse error in {:?}: {} at {}", src, e, e.position()),
        }
    }

    fn syntax_error(src: &str) -> SyntaxError {
        match parse(src) {
            Err(ParseError::Syntax(e)) => e,
            other => panic!("Expected syntax error for {:?}, got {:?}", src, other),
        }
    }

    /// Render a lone top-level expression statement.
    fn expr(src: &str) -> String {
        let full = tree(src);
        let body = full
            .strip_prefix("block\n  block\n")
            .unwrap_or_else(|| panic!("Not a single statement: {}", full));
        body.lines()
            .map(|l| &l[4..])
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn parse_declaration() {
        assert_eq!(tree("var x"), "block\n  block\n    var x\n");
    }

    #[test]
    fn parse_empty_program() {
        assert_eq!(tree(""), "block\n");
        assert_eq!(tree("  \n\t "), "block\n");
    }

    #[test]
    fn parse_function_with_spans() {
        let root = parse("fun f() { return 1 }").unwrap();
        let Node::CodeBlock(program) = &root else {
            panic!("Expected root block");
        };
        assert_eq!(program.statements.len(), 1);

        let Node::Function(func) = &program.statements[0] else {
            panic!("Expected function");
        };
        assert_eq!(func.name, "f");
        assert!(func.params.is_empty());
        assert_eq!(func.span, Span::new(Position::new(1, 1), Position::new(1, 21)));

        let body = func.body();
        assert_eq!(body.span, Span::new(Position::new(1, 9), Position::new(1, 21)));

        let Node::Return(ret) = &body.statements[0] else {
            panic!("Expected return");
        };
        assert_eq!(ret.span, Span::new(Position::new(1, 11), Position::new(1, 19)));
        assert_eq!(ret.expr.span(), Span::new(Position::new(1, 18), Position::new(1, 19)));
        let Node::Value(value) = ret.expr.as_ref() else {
            panic!("Expected value, got {}", ret.expr.kind_name());
        };
        assert_eq!(value.value, 1.0);
    }

    #[test]
    fn parse_extern_function() {
        assert_eq!(tree("extern fun g(a, b)"), "block\n  extern function g(nargs=2)\n");

        let root = parse("extern fun g(a, b)").unwrap();
        let Node::CodeBlock(program) = &root else {
            panic!("Expected root block");
        };
        let Node::ExternFunction(ext) = &program.statements[0] else {
            panic!("Expected extern function");
        };
        assert_eq!(ext.name, "g");
        let names: Vec<_> = ext.params.iter().map(Node::as_ident).collect();
        assert_eq!(names, vec![Some("a"), Some("b")]);
    }

    #[test]
    fn parser_entry_reads_first_token() {
        let root = Parser::new("1 + 2").parse().unwrap();
        assert_eq!(root.to_string(), "block\n  block\n    +\n      1.0\n      2.0\n");
    }

    #[test]
    fn parse_function_params() {
        assert_eq!(
            tree("fun add(a, b) { return a + b }"),
            "block\n  function add(nargs=2)\n    block\n      return\n        +\n          a\n          b\n"
        );
    }

    #[test]
    fn parse_call() {
        assert_eq!(expr("f(1, x)"), "call f\n  1.0\n  x");
        assert_eq!(expr("f()"), "call f");
    }

    #[test]
    fn parse_assignment() {
        assert_eq!(expr("x = 2 * y"), "var x =\n  *\n    2.0\n    y");
    }

    #[test]
    fn subtraction_right_operand_is_addition() {
        assert_eq!(expr("1 - 2 - 3"), "-\n  1.0\n  -\n    2.0\n    3.0");
        assert_eq!(expr("a - b + c"), "-\n  a\n  +\n    b\n    c");
    }

    #[test]
    fn division_right_operand_is_multiplication() {
        assert_eq!(expr("8 / 4 * 2"), "/\n  8.0\n  *\n    4.0\n    2.0");
        assert_eq!(expr("2 * 3 / 4"), "*\n  2.0\n  /\n    3.0\n    4.0");
    }

    #[test]
    fn power_is_right_associative() {
        assert_eq!(expr("2 ** 3 ** 2"), "**\n  2.0\n  **\n    3.0\n    2.0");
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(expr("1 + 2 * 3"), "+\n  1.0\n  *\n    2.0\n    3.0");
    }

    #[test]
    fn parse_not() {
        assert_eq!(expr("not f(x)"), "not\n  call f\n    x");
    }

    #[test]
    fn parse_parenthesized() {
        assert_eq!(expr("2 * (1 + 2)"), "*\n  2.0\n  +\n    1.0\n    2.0");
    }

    #[test]
    fn leading_group_ends_the_expression() {
        let err = syntax_error("(1) + 2");
        assert_eq!(err.kind, SyntaxErrorKind::ExpectedExpression);
        assert_eq!(err.position, Position::new(1, 4));
    }

    #[test]
    fn parse_number_shapes() {
        assert_eq!(expr("0x1F"), "31.0");
        assert_eq!(expr("0o17"), "15.0");
        assert_eq!(expr("2.5"), "2.5");
    }

    #[test]
    fn parse_while_in_block() {
        assert_eq!(
            tree("{ while x x = x - 1 }"),
            "block\n  block\n    while\n      x\n      block\n        var x =\n          -\n            x\n            1.0\n"
        );
    }

    #[test]
    fn function_body_needs_braces() {
        let err = syntax_error("fun f() return 1");
        assert_eq!(err.kind, SyntaxErrorKind::MissingBraces);
        assert_eq!(err.position, Position::new(1, 8));
        assert_eq!(err.message, "Code block needs braces, found 'return'");
        assert_eq!(err.line, "fun f() return 1");
    }

    #[test]
    fn invalid_assignment_target() {
        let err = syntax_error("1 = 2");
        assert_eq!(err.kind, SyntaxErrorKind::InvalidAssignmentTarget);
        assert_eq!(err.position, Position::new(1, 4));
    }

    #[test]
    fn invalid_call_target() {
        let err = syntax_error("1(2)");
        assert_eq!(err.kind, SyntaxErrorKind::InvalidCallTarget);
    }

    #[test]
    fn unterminated_block() {
        let err = syntax_error("{ var x");
        assert_eq!(err.message, "Unexpected end of file, expecting '}'");
        assert_eq!(err.position, Position::new(1, 8));
    }

    #[test]
    fn unexpected_token_message() {
        let err = syntax_error("extern var");
        assert_eq!(err.message, "Unexpected token 'var', expecting 'fun'");
        assert!(err.hint.is_some());
    }

    #[test]
    fn parameters_must_be_names() {
        let err = syntax_error("fun f(1) {}");
        assert_eq!(err.kind, SyntaxErrorKind::InvalidParameter);
    }

    #[test]
    fn return_only_inside_braces() {
        let err = syntax_error("return 1");
        assert_eq!(err.kind, SyntaxErrorKind::ExpectedExpression);
    }

    #[test]
    fn lex_errors_pass_through() {
        let err = parse("var x\nx = 1 @ 2").unwrap_err();
        assert!(matches!(err, ParseError::Lex(_)));
        assert_eq!(err.position(), Position::new(2, 7));
        assert_eq!(err.line(), "x = 1 @ 2");
    }

    #[test]
    fn error_on_later_line() {
        let err = syntax_error("var x\nvar 1");
        assert_eq!(err.position, Position::new(2, 4));
        assert_eq!(err.line, "var 1");
        assert_eq!(err.message, "Unexpected token a number, expecting a name");
    }

    #[test]
    fn crlf_error_line_has_no_carriage_return() {
        let err = syntax_error("var x\r\nvar 1\r\n");
        assert_eq!(err.position, Position::new(2, 4));
        assert_eq!(err.line, "var 1");
    }

    #[test]
    fn wide_hex_literal_is_a_value() {
        let root = parse("0x10000000000000000").unwrap();
        let mut values = Vec::new();
        root.walk(&mut |node: &Node| {
            if let Node::Value(v) = node {
                values.push(v.value);
            }
        });
        assert_eq!(values, vec![18446744073709551616.0]);
    }

    #[test]
    fn child_spans_nest_inside_parents() {
        let src = "extern fun print(v)\n\nfun main() {\n  var i\n  i = 10\n  while i {\n    print(i * 2)\n    i = i - 1\n  }\n  return 0\n}\n";
        let root = parse(src).unwrap();

        let mut count = 0;
        root.walk(&mut |node: &Node| {
            count += 1;
            for child in node.children() {
                assert!(
                    node.span().contains(&child.span()),
                    "{} {:?} does not contain {} {:?}",
                    node.kind_name(),
                    node.span(),
                    child.kind_name(),
                    child.span()
                );
            }
        });
        assert!(count > 15);
        assert_eq!(root.span().end, Position::new(12, 1));
    }
}
