//! Classification Tests
//!
//! Predicates and resolvers exercised on parsed source:
//! - hoisting classification (`has_complex_expression`)
//! - bound-argument naming (`get_argument_name`)
//! - empty declarators, map calls, literal sets and if/block pairs

#[cfg(test)]
mod tests {
    use crate::ast::{Expr, NodeKind, NodeRef, Stmt};
    use crate::error::{TransformError, ERR_UNSUPPORTED_BIND_ARGUMENT};
    use crate::parse::{parse_expression, parse_module};
    use crate::predicates::{
        classify_expression, has_complex_expression, is_all_literal, is_array_map_call_expression,
        is_block_if_statement, is_contain_function, is_contain_jsx_element, is_empty_declarator,
    };
    use crate::resolve::get_argument_name;

    fn expr(src: &str) -> Expr {
        parse_expression(src).unwrap()
    }

    fn complex(src: &str) -> bool {
        has_complex_expression(NodeRef::from(&expr(src)))
    }

    fn first_declarator_is_empty(src: &str) -> bool {
        let program = parse_module(src).unwrap();
        let Stmt::VarDecl(decl) = &program.body[0] else {
            panic!("expected a variable declaration in {src:?}");
        };
        is_empty_declarator(NodeRef::Declarator(&decl.declarations[0]))
    }

    // ═══════════════════════════════════════════════════════════════════════════════
    // HOISTING CLASSIFICATION
    // ═══════════════════════════════════════════════════════════════════════════════

    #[test]
    fn test_complex_expression_table() {
        assert!(complex("foo()"));
        assert!(complex("`a${b}`"));
        assert!(complex("tag`x`"));
        assert!(!complex("a"));
        assert!(!complex("a.b.c"));
        assert!(!complex("a + b * c"));
    }

    #[test]
    fn test_jsx_is_never_complex() {
        assert!(!complex("foo(<view />)"));
        assert!(!complex("`${<view />}`"));
        assert!(!complex("cond ? <view>{format(x)}</view> : null"));
    }

    #[test]
    fn test_nested_call_in_binary_is_complex() {
        assert!(complex("a + (b * (c - f(x)))"));
        assert!(complex("a + b[`k${i}`]"));
    }

    #[test]
    fn test_contains_function_and_jsx() {
        assert!(!is_contain_function(NodeRef::from(&expr("a + b"))));
        assert!(is_contain_function(NodeRef::from(&expr("a + f()"))));
        assert!(is_contain_function(NodeRef::from(&expr("<view>{f()}</view>"))));

        assert!(is_contain_jsx_element(NodeRef::from(&expr("cond && <view />"))));
        assert!(is_contain_jsx_element(NodeRef::from(&expr("list.map(x => <text>{x}</text>)"))));
        assert!(!is_contain_jsx_element(NodeRef::from(&expr("cond && x"))));
        assert!(!is_contain_jsx_element(NodeRef::from(&expr("<>text</>"))));
    }

    #[test]
    fn test_classify_expression() {
        let e = expr("list.map(item => <view>{item}</view>)");
        let c = classify_expression(NodeRef::from(&e));
        assert!(c.is_array_map_call);
        // the map call is the node itself, not a descendant
        assert!(!c.contains_call);
        assert!(c.contains_jsx);
        assert!(!c.is_complex);
        assert!(!c.is_literal);

        let json = serde_json::to_value(c).unwrap();
        assert_eq!(json["isArrayMapCall"], true);

        let e = expr("list.map(item => format(item))");
        let c = classify_expression(NodeRef::from(&e));
        assert!(c.contains_call);
        assert!(c.is_complex);
    }

    #[test]
    fn test_scans_skip_the_node_itself() {
        assert!(!is_contain_function(NodeRef::from(&expr("f()"))));
        assert!(is_contain_function(NodeRef::from(&expr("f(g())"))));
        assert!(!is_contain_jsx_element(NodeRef::from(&expr("<view />"))));
        assert!(is_contain_jsx_element(NodeRef::from(&expr("<view><text /></view>"))));

        // the call below the outermost element counts once JSX is only the root
        assert!(complex("<view>{f()}</view>"));
        assert!(complex("<view class={`a${b}`} />"));
        assert!(!complex("<view>{a}</view>"));
        assert!(!complex("<view>{f(<text />)}</view>"));
    }

    // ═══════════════════════════════════════════════════════════════════════════════
    // NODE SHAPE
    // ═══════════════════════════════════════════════════════════════════════════════

    #[test]
    fn test_array_map_call() {
        assert!(is_array_map_call_expression(NodeRef::from(&expr("list.map(x => x)"))));
        assert!(is_array_map_call_expression(NodeRef::from(&expr("this.state.list.map(f)"))));
        assert!(!is_array_map_call_expression(NodeRef::from(&expr("list['map'](f)"))));
        assert!(!is_array_map_call_expression(NodeRef::from(&expr("map(f)"))));
        assert!(!is_array_map_call_expression(NodeRef::from(&expr("list.filter(f)"))));
        assert!(!is_array_map_call_expression(NodeRef::from(&expr("list.map"))));
    }

    #[test]
    fn test_empty_declarator_boundary() {
        assert!(first_declarator_is_empty("let x"));
        assert!(first_declarator_is_empty("let x = null"));
        assert!(!first_declarator_is_empty("let x = undefined"));
        assert!(!first_declarator_is_empty("let x = 0"));
        assert!(!first_declarator_is_empty("let x = ''"));

        assert!(!is_empty_declarator(NodeRef::from(&expr("null"))));
    }

    #[test]
    fn test_all_literal() {
        let Expr::Array(all) = expr("[1, 'a', null, `t`, true, /re/g, 10n]") else {
            panic!("expected array");
        };
        let nodes: Vec<NodeRef> = all.elements.iter().map(NodeRef::from).collect();
        assert!(is_all_literal(&nodes));

        let Expr::Array(mixed) = expr("[1, a]") else {
            panic!("expected array");
        };
        let nodes: Vec<NodeRef> = mixed.elements.iter().map(NodeRef::from).collect();
        assert!(!is_all_literal(&nodes));

        assert!(is_all_literal(&[]));
    }

    #[test]
    fn test_block_if_statement() {
        let program = parse_module("if (a) { b(); }\n{ c(); }").unwrap();
        let Stmt::If(if_stmt) = &program.body[0] else {
            panic!("expected if statement");
        };
        let if_node = NodeRef::Stmt(&program.body[0]);
        let block = NodeRef::Stmt(&if_stmt.consequent);
        let bare_block = NodeRef::Stmt(&program.body[1]);

        assert!(is_block_if_statement(Some(if_node), Some(block)));
        assert!(is_block_if_statement(Some(if_node), Some(bare_block)));
        assert!(!is_block_if_statement(Some(block), Some(if_node)));
        assert!(!is_block_if_statement(None, Some(block)));
        assert!(!is_block_if_statement(Some(if_node), None));
    }

    // ═══════════════════════════════════════════════════════════════════════════════
    // ARGUMENT NAMES
    // ═══════════════════════════════════════════════════════════════════════════════

    #[test]
    fn test_argument_name_mapping() {
        assert_eq!(get_argument_name(&expr("this")).unwrap(), "this");
        assert_eq!(get_argument_name(&expr("null")).unwrap(), "null");
        assert_eq!(get_argument_name(&expr("'a.b'")).unwrap(), "a.b");
        assert_eq!(get_argument_name(&expr("foo")).unwrap(), "foo");
        assert_eq!(get_argument_name(&expr("a.b.c")).unwrap(), "a.b.c");
        assert_eq!(get_argument_name(&expr("this.props.id")).unwrap(), "this.props.id");
    }

    #[test]
    fn test_argument_name_rejects_other_kinds() {
        let err = get_argument_name(&expr("1")).unwrap_err();
        assert_eq!(err.code(), ERR_UNSUPPORTED_BIND_ARGUMENT);
        assert!(matches!(
            err,
            TransformError::UnsupportedBindArgument {
                kind: NodeKind::NumericLiteral,
                location: Some(_),
            }
        ));

        for src in ["true", "f(x)", "`t`", "a + b", "() => 1"] {
            assert!(get_argument_name(&expr(src)).is_err(), "{src:?} should be rejected");
        }
    }
}
