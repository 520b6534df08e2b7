//! AST Predicates
//!
//! Pure classifiers used by the lowering rules to decide which rule applies to
//! a node. Subtree scans look at descendants only and stop at the first match.

use std::ops::ControlFlow;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::ast::{Expr, LiteralValue, NodeKind, NodeRef, Stmt};
use crate::visitor::{traverse, NodePath};

// ═══════════════════════════════════════════════════════════════════════════════
// NODE SHAPE
// ═══════════════════════════════════════════════════════════════════════════════

/// `xs.map(...)`: a call whose callee is a member access with the static
/// property `map`.
pub fn is_array_map_call_expression(node: NodeRef<'_>) -> bool {
    match node {
        NodeRef::Expr(Expr::Call(call)) => match call.callee.as_ref() {
            Expr::Member(member) => member.static_property_name() == Some("map"),
            _ => false,
        },
        _ => false,
    }
}

/// Both nodes are present, the first is an `if` and the second a block.
pub fn is_block_if_statement(
    if_statement: Option<NodeRef<'_>>,
    block_statement: Option<NodeRef<'_>>,
) -> bool {
    matches!(
        (if_statement, block_statement),
        (
            Some(NodeRef::Stmt(Stmt::If(_))),
            Some(NodeRef::Stmt(Stmt::Block(_)))
        )
    )
}

/// A declarator with no initializer or a literal `null` one. `undefined` is an
/// identifier and does not count.
pub fn is_empty_declarator(node: NodeRef<'_>) -> bool {
    match node {
        NodeRef::Declarator(decl) => match &decl.init {
            None => true,
            Some(Expr::Literal(lit)) => lit.value == LiteralValue::Null,
            Some(_) => false,
        },
        _ => false,
    }
}

/// Every node is a literal (template literals included). Vacuously true for an
/// empty slice.
pub fn is_all_literal(nodes: &[NodeRef<'_>]) -> bool {
    nodes.iter().all(|n| n.kind().is_literal())
}

// ═══════════════════════════════════════════════════════════════════════════════
// SUBTREE SCANS
// ═══════════════════════════════════════════════════════════════════════════════

/// Whether any descendant of `node` matches `pred`.
fn any_descendant(node: NodeRef<'_>, mut pred: impl FnMut(NodeKind) -> bool) -> bool {
    traverse(&NodePath::root(node), |path| {
        if pred(path.node().kind()) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })
    .is_break()
}

pub fn is_contain_function(node: NodeRef<'_>) -> bool {
    any_descendant(node, |kind| kind == NodeKind::CallExpression)
}

pub fn is_contain_jsx_element(node: NodeRef<'_>) -> bool {
    any_descendant(node, |kind| kind == NodeKind::JsxElement)
}

/// Whether an expression has to be hoisted into a named declaration before the
/// template can reference it.
///
/// A JSX descendant means the expression is never complex here; JSX goes
/// through its own lowering rule. Otherwise the node being a call or template
/// literal, or a call, template literal or tagged template below it, makes the
/// expression complex.
pub fn has_complex_expression(node: NodeRef<'_>) -> bool {
    if is_contain_jsx_element(node) {
        return false;
    }
    if matches!(
        node.kind(),
        NodeKind::TemplateLiteral | NodeKind::CallExpression
    ) {
        return true;
    }
    // the quasi of a tagged template is a template literal below the node
    if let NodeRef::Expr(Expr::TaggedTemplate(_)) = node {
        return true;
    }
    any_descendant(node, |kind| {
        matches!(
            kind,
            NodeKind::CallExpression
                | NodeKind::TemplateLiteral
                | NodeKind::TaggedTemplateExpression
        )
    })
}

/// All subtree classifications of one expression, as reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionClassification {
    pub is_array_map_call: bool,
    pub contains_call: bool,
    pub contains_jsx: bool,
    pub is_complex: bool,
    pub is_literal: bool,
}

pub fn classify_expression(node: NodeRef<'_>) -> ExpressionClassification {
    ExpressionClassification {
        is_array_map_call: is_array_map_call_expression(node),
        contains_call: is_contain_function(node),
        contains_jsx: is_contain_jsx_element(node),
        is_complex: has_complex_expression(node),
        is_literal: node.kind().is_literal(),
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// NUMERIC STRINGS
// ═══════════════════════════════════════════════════════════════════════════════

lazy_static! {
    static ref DECIMAL_RE: Regex =
        Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").unwrap();
    static ref RADIX_RE: Regex = Regex::new(r"^0([xX][0-9a-fA-F]+|[oO][0-7]+|[bB][01]+)$").unwrap();
}

/// Whether `value` reads as a finite number: a numeric prefix must parse and
/// the whole trimmed text must coerce to a finite value. Accepts decimal,
/// exponent and `0x`/`0o`/`0b` forms; rejects empty text, `NaN` and
/// `Infinity`.
pub fn is_numeric(value: &str) -> bool {
    let text = value.trim();
    if DECIMAL_RE.is_match(text) {
        return text.parse::<f64>().map_or(false, f64::is_finite);
    }
    if RADIX_RE.is_match(text) {
        let radix = match text.as_bytes()[1] {
            b'x' | b'X' => 16,
            b'o' | b'O' => 8,
            _ => 2,
        };
        let parsed = text[2..].chars().fold(0f64, |acc, c| {
            acc * radix as f64 + c.to_digit(radix).unwrap_or(0) as f64
        });
        return parsed.is_finite();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numeric() {
        for yes in ["0", "1", "1.5", "-2e3", " 42 ", ".5", "5.", "+7", "0x1F", "0b101", "0o17"] {
            assert!(is_numeric(yes), "{yes:?} should be numeric");
        }
        for no in ["", "  ", "abc", "1abc", "Infinity", "-Infinity", "NaN", "1e400", "-0x10", "1_000"] {
            assert!(!is_numeric(no), "{no:?} should not be numeric");
        }
    }
}
