//! Node synthesizers.
//!
//! Every builder returns a fresh node with `loc: None`; callers own the result
//! and splice it into their tree. No builder mutates its inputs.

use crate::ast::{
    Expr, Identifier, JsxAttr, JsxAttrItem, JsxAttrValue, JsxElement, JsxExpression, Pattern,
    Stmt, UnaryExpr, UnaryOp, VarDecl, VarDeclarator, VarKind,
};
use crate::ids::IdGenerator;

/// Conditional-render attribute of the template language.
pub const IF_ATTR: &str = "wx:if";

/// `const <name> = <init>;`
pub fn build_const_variable_declaration(name: impl Into<String>, init: Expr) -> Stmt {
    Stmt::VarDecl(VarDecl {
        kind: VarKind::Const,
        declarations: vec![VarDeclarator {
            id: Pattern::Identifier(Identifier::new(name)),
            init: Some(init),
            loc: None,
        }],
        loc: None,
    })
}

/// `<name>={<value>}`
pub fn build_jsx_attr(name: impl Into<String>, value: Expr) -> JsxAttr {
    JsxAttr {
        name: name.into(),
        value: Some(JsxAttrValue::Expression(JsxExpression::Expr(value))),
        loc: None,
    }
}

/// A copy of `el` with `wx:if={<value>}` appended to its attributes.
pub fn new_jsx_if_attr(el: &JsxElement, value: Expr) -> JsxElement {
    let mut out = el.clone();
    out.opening
        .attributes
        .push(JsxAttrItem::Attribute(build_jsx_attr(IF_ATTR, value)));
    out
}

/// `!Boolean(<expr>)`
pub fn reverse_boolean(expr: Expr) -> Expr {
    Expr::Unary(UnaryExpr {
        operator: UnaryOp::Not,
        argument: Box::new(Expr::call(Expr::ident("Boolean"), vec![expr])),
        loc: None,
    })
}

/// Moves `expr` into a `const` under a fresh name and returns the declaration
/// together with a reference to it.
pub fn hoist_expression(ids: &mut IdGenerator, expr: Expr) -> (Stmt, Expr) {
    let name = ids.fresh_name();
    let reference = Expr::ident(name.clone());
    (build_const_variable_declaration(name, expr), reference)
}
