//! Compile Context Tests
//!
//! Per-run state: the name counter spans files, diagnostics read the current
//! file's source, and options load from JSON with defaults.

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::ast::{Expr, Location, Position, Stmt};
    use crate::builders::hoist_expression;
    use crate::context::{CompileContext, TransformOptions};
    use crate::diagnostics::{CodeFrameError, CodeFrameOptions};
    use crate::error::{TransformError, ERR_INVALID_OPTIONS, ERR_UNSUPPORTED_BIND_ARGUMENT};
    use crate::parse::parse_module;
    use crate::printer::print_stmt;
    use crate::resolve::get_argument_name;

    fn loc(sl: u32, sc: u32, el: u32, ec: u32) -> Location {
        Location::new(Position::new(sl, sc), Position::new(el, ec))
    }

    #[test]
    fn test_names_are_unique_across_files() {
        let mut ctx = CompileContext::default();

        ctx.begin_file("/src/a.js", "const a = 1;");
        let first = ctx.fresh_name();
        ctx.begin_file("/src/b.js", "const b = 2;");
        let second = ctx.fresh_name();
        let (decl, _) = hoist_expression(ctx.ids(), Expr::ident("x"));

        assert_eq!(first, "a");
        assert_eq!(second, "b");
        assert_eq!(print_stmt(&decl), "const c = x;");
        assert_eq!(ctx.next_id(), 3);

        let mut next_run = CompileContext::default();
        assert_eq!(next_run.fresh_name(), "a");
    }

    #[test]
    fn test_code_frame_error_uses_current_file() {
        let mut ctx = CompileContext::default();
        ctx.begin_file("/src/a.js", "first();\nsecond();");
        ctx.begin_file("/src/b.js", "let x = 1;\nlet y = bad;");

        let err = ctx.code_frame_error(&loc(2, 8, 2, 11), "unknown binding");

        assert_eq!(ctx.file().map(|p| p.to_string_lossy().into_owned()), Some("/src/b.js".to_string()));
        assert_eq!(
            err.to_string(),
            "unknown binding\n-----\n  1 | let x = 1;\n> 2 | let y = bad;\n    |         ^^^"
        );
    }

    #[test]
    fn test_unset_source_degrades_to_empty_frame() {
        let ctx = CompileContext::default();
        let err = ctx.code_frame_error(&loc(4, 2, 4, 6), "no source");
        assert_eq!(err.frame, "");
        assert_eq!(err.to_string(), "no source\n-----\n");
    }

    #[test]
    fn test_report_carries_code_and_frame() {
        let source = "const handler = 1;\nbind(2);";
        let mut ctx = CompileContext::default();
        ctx.begin_file("/src/page.js", source);

        let program = parse_module(source).unwrap();
        let Stmt::Expr(call) = &program.body[1] else {
            panic!("expected expression statement");
        };
        let Expr::Call(call) = &call.expression else {
            panic!("expected call");
        };
        let err = get_argument_name(&call.arguments[0]).unwrap_err();

        let report = ctx.report(&err);
        assert_eq!(report.code.as_deref(), Some(ERR_UNSUPPORTED_BIND_ARGUMENT));
        assert_eq!(report.location, Some(loc(2, 5, 2, 6)));
        assert!(report.frame.ends_with("> 2 | bind(2);\n    |      ^"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["code"], ERR_UNSUPPORTED_BIND_ARGUMENT);
        let back: CodeFrameError = serde_json::from_value(json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_report_without_location() {
        let ctx = CompileContext::default();
        let report = ctx.report(&TransformError::Parse {
            message: "Unexpected token".into(),
        });
        assert_eq!(report.frame, "");
        assert_eq!(report.location, None);
        assert_eq!(report.message, "parse error: Unexpected token");
    }

    // ═══════════════════════════════════════════════════════════════════════════════
    // OPTIONS
    // ═══════════════════════════════════════════════════════════════════════════════

    #[test]
    fn test_options_defaults() {
        let options = TransformOptions::from_json("{}").unwrap();
        assert_eq!(options, TransformOptions::default());
        assert_eq!(options.template_extension, "wxml");
        assert_eq!(options.script_extension, "js");
        assert_eq!(options.index_file_stem, "index");
        assert_eq!(
            options.code_frame,
            CodeFrameOptions {
                lines_above: 2,
                lines_below: 3
            }
        );
    }

    #[test]
    fn test_options_partial_code_frame() {
        let options = TransformOptions::from_json(r#"{ "codeFrame": { "linesBelow": 0 } }"#).unwrap();
        assert_eq!(options.code_frame.lines_above, 2);
        assert_eq!(options.code_frame.lines_below, 0);

        let mut ctx = CompileContext::new(options);
        ctx.begin_file("/src/a.js", "a;\nb;\nc;");
        let err = ctx.code_frame_error(&loc(2, 0, 2, 1), "here");
        assert_eq!(err.frame, "  1 | a;\n> 2 | b;\n    | ^");
    }

    #[test]
    fn test_options_with_maximal_code_frame_window() {
        let options = TransformOptions::from_json(
            r#"{ "codeFrame": { "linesAbove": 18446744073709551615, "linesBelow": 18446744073709551615 } }"#,
        )
        .unwrap();
        let mut ctx = CompileContext::new(options);
        ctx.begin_file("/src/a.js", "a;\nb;");
        let err = ctx.code_frame_error(&loc(1, 0, 1, 1), "here");
        assert_eq!(err.frame, "> 1 | a;\n    | ^\n  2 | b;");
    }

    #[test]
    fn test_invalid_options() {
        let err = TransformOptions::from_json(r#"{ "templateExtension": ".wxml" }"#).unwrap_err();
        assert_eq!(err.code(), ERR_INVALID_OPTIONS);

        let err = TransformOptions::from_json(r#"{ "templateExtension": 3 }"#).unwrap_err();
        assert!(matches!(err, TransformError::InvalidOptions(_)));
    }
}
