//! Depth-first traversal over the closed AST.
//!
//! Rules:
//! 1. Traversal order is pre-order and fixed: a node is visited before its
//!    children, children in source order.
//! 2. A visitor returns `ControlFlow`; `Break` stops the whole walk and its
//!    payload is handed back to the caller.
//! 3. Every visit receives a `NodePath` carrying the borrowed ancestor chain.
//!    Paths are never stored beyond the call that receives them.

use std::ops::ControlFlow;

use crate::ast::{
    ArrowBody, Expr, JsxAttrItem, JsxAttrValue, JsxChild, JsxElement, JsxExpression, MemberProp,
    NodeRef, PropertyKey, Stmt,
};

// ═══════════════════════════════════════════════════════════════════════════════
// NODE PATH
// ═══════════════════════════════════════════════════════════════════════════════

/// A node together with its ancestors, ordered from the root down to the
/// immediate parent.
#[derive(Debug, Clone, Copy)]
pub struct NodePath<'p, 'a> {
    node: NodeRef<'a>,
    ancestors: &'p [NodeRef<'a>],
}

impl<'p, 'a> NodePath<'p, 'a> {
    pub fn new(node: NodeRef<'a>, ancestors: &'p [NodeRef<'a>]) -> Self {
        Self { node, ancestors }
    }

    /// A path for a node with no known ancestors.
    pub fn root(node: NodeRef<'a>) -> Self {
        Self {
            node,
            ancestors: &[],
        }
    }

    pub fn node(&self) -> NodeRef<'a> {
        self.node
    }

    pub fn ancestors(&self) -> &'p [NodeRef<'a>] {
        self.ancestors
    }

    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.ancestors.last().copied()
    }

    pub fn parent_path(&self) -> Option<NodePath<'p, 'a>> {
        self.ancestors
            .split_last()
            .map(|(parent, rest)| NodePath::new(*parent, rest))
    }

    /// Nearest ancestor matching `pred`, excluding the node itself.
    pub fn find_parent<F>(&self, mut pred: F) -> Option<NodeRef<'a>>
    where
        F: FnMut(NodeRef<'a>) -> bool,
    {
        self.ancestors.iter().rev().copied().find(|n| pred(*n))
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// WALKING
// ═══════════════════════════════════════════════════════════════════════════════

/// Visits every descendant of `path`'s node (the node itself excluded).
pub fn traverse<'a, B, F>(path: &NodePath<'_, 'a>, mut visit: F) -> ControlFlow<B>
where
    F: FnMut(&NodePath<'_, 'a>) -> ControlFlow<B>,
{
    let mut stack: Vec<NodeRef<'a>> = path.ancestors().to_vec();
    stack.push(path.node());
    path.node()
        .for_each_child(|child| walk_node(child, &mut stack, &mut visit))
}

/// Visits `root` and all its descendants.
pub fn walk<'a, B, F>(root: NodeRef<'a>, mut visit: F) -> ControlFlow<B>
where
    F: FnMut(&NodePath<'_, 'a>) -> ControlFlow<B>,
{
    let mut stack = Vec::new();
    walk_node(root, &mut stack, &mut visit)
}

/// First node in pre-order (the root included) matching `pred`.
pub fn find<'a, F>(root: NodeRef<'a>, mut pred: F) -> Option<NodeRef<'a>>
where
    F: FnMut(NodeRef<'a>) -> bool,
{
    match walk(root, |path| {
        if pred(path.node()) {
            ControlFlow::Break(path.node())
        } else {
            ControlFlow::Continue(())
        }
    }) {
        ControlFlow::Break(found) => Some(found),
        ControlFlow::Continue(()) => None,
    }
}

fn walk_node<'a, B, F>(
    node: NodeRef<'a>,
    stack: &mut Vec<NodeRef<'a>>,
    visit: &mut F,
) -> ControlFlow<B>
where
    F: FnMut(&NodePath<'_, 'a>) -> ControlFlow<B>,
{
    visit(&NodePath::new(node, &stack[..]))?;
    stack.push(node);
    let flow = node.for_each_child(|child| walk_node(child, stack, visit));
    stack.pop();
    flow
}

impl<'a> NodeRef<'a> {
    /// Calls `f` on each direct child in source order, stopping at the first
    /// `Break`.
    pub fn for_each_child<B, F>(self, mut f: F) -> ControlFlow<B>
    where
        F: FnMut(NodeRef<'a>) -> ControlFlow<B>,
    {
        match self {
            NodeRef::Program(program) => {
                for stmt in &program.body {
                    f(NodeRef::Stmt(stmt))?;
                }
            }
            NodeRef::Stmt(stmt) => walk_stmt_children(stmt, &mut f)?,
            NodeRef::Declarator(decl) => {
                if let Some(init) = &decl.init {
                    f(NodeRef::from(init))?;
                }
            }
            NodeRef::Expr(expr) => walk_expr_children(expr, &mut f)?,
            NodeRef::JsxElement(el) => walk_jsx_element_children(el, &mut f)?,
            NodeRef::JsxFragment(frag) => walk_jsx_children(&frag.children, &mut f)?,
            NodeRef::JsxAttr(attr) => match &attr.value {
                Some(JsxAttrValue::Expression(container)) => {
                    f(NodeRef::JsxExpressionContainer(container))?
                }
                Some(JsxAttrValue::Element(el)) => f(NodeRef::JsxElement(el))?,
                Some(JsxAttrValue::Fragment(frag)) => f(NodeRef::JsxFragment(frag))?,
                Some(JsxAttrValue::String(_)) | None => {}
            },
            NodeRef::JsxExpressionContainer(container) => {
                if let JsxExpression::Expr(expr) = container {
                    f(NodeRef::from(expr))?;
                }
            }
            NodeRef::JsxText(_) => {}
        }
        ControlFlow::Continue(())
    }
}

fn walk_stmt_children<'a, B, F>(stmt: &'a Stmt, f: &mut F) -> ControlFlow<B>
where
    F: FnMut(NodeRef<'a>) -> ControlFlow<B>,
{
    match stmt {
        Stmt::Expr(s) => f(NodeRef::from(&s.expression))?,
        Stmt::VarDecl(decl) => {
            for declarator in &decl.declarations {
                f(NodeRef::Declarator(declarator))?;
            }
        }
        Stmt::If(s) => {
            f(NodeRef::from(&s.test))?;
            f(NodeRef::Stmt(&s.consequent))?;
            if let Some(alternate) = &s.alternate {
                f(NodeRef::Stmt(alternate))?;
            }
        }
        Stmt::Block(block) => {
            for s in &block.body {
                f(NodeRef::Stmt(s))?;
            }
        }
        Stmt::Return(s) => {
            if let Some(argument) = &s.argument {
                f(NodeRef::from(argument))?;
            }
        }
        Stmt::Import(_) => {}
    }
    ControlFlow::Continue(())
}

fn walk_expr_children<'a, B, F>(expr: &'a Expr, f: &mut F) -> ControlFlow<B>
where
    F: FnMut(NodeRef<'a>) -> ControlFlow<B>,
{
    match expr {
        Expr::Identifier(_) | Expr::This(_) | Expr::Literal(_) => {}
        Expr::TemplateLiteral(tpl) => {
            for e in &tpl.expressions {
                f(NodeRef::from(e))?;
            }
        }
        Expr::TaggedTemplate(tagged) => {
            f(NodeRef::from(tagged.tag.as_ref()))?;
            for e in &tagged.quasi.expressions {
                f(NodeRef::from(e))?;
            }
        }
        Expr::Member(member) => {
            f(NodeRef::from(member.object.as_ref()))?;
            if let MemberProp::Computed(prop) = &member.property {
                f(NodeRef::from(prop.as_ref()))?;
            }
        }
        Expr::Call(call) => {
            f(NodeRef::from(call.callee.as_ref()))?;
            for arg in &call.arguments {
                f(NodeRef::from(arg))?;
            }
        }
        Expr::Unary(unary) => f(NodeRef::from(unary.argument.as_ref()))?,
        Expr::Binary(bin) => {
            f(NodeRef::from(bin.left.as_ref()))?;
            f(NodeRef::from(bin.right.as_ref()))?;
        }
        Expr::Logical(logical) => {
            f(NodeRef::from(logical.left.as_ref()))?;
            f(NodeRef::from(logical.right.as_ref()))?;
        }
        Expr::Conditional(cond) => {
            f(NodeRef::from(cond.test.as_ref()))?;
            f(NodeRef::from(cond.consequent.as_ref()))?;
            f(NodeRef::from(cond.alternate.as_ref()))?;
        }
        Expr::Array(array) => {
            for e in &array.elements {
                f(NodeRef::from(e))?;
            }
        }
        Expr::Object(object) => {
            for prop in &object.properties {
                if let PropertyKey::Computed(key) = &prop.key {
                    f(NodeRef::from(key.as_ref()))?;
                }
                f(NodeRef::from(&prop.value))?;
            }
        }
        Expr::Arrow(arrow) => match &arrow.body {
            ArrowBody::Expression(body) => f(NodeRef::from(body.as_ref()))?,
            ArrowBody::Block(block) => {
                for s in &block.body {
                    f(NodeRef::Stmt(s))?;
                }
            }
        },
        Expr::Paren(paren) => f(NodeRef::from(paren.expression.as_ref()))?,
        // Normalised away by `NodeRef::from`, but still walkable when built by hand.
        Expr::Jsx(el) => walk_jsx_element_children(el, f)?,
        Expr::JsxFragment(frag) => walk_jsx_children(&frag.children, f)?,
    }
    ControlFlow::Continue(())
}

fn walk_jsx_element_children<'a, B, F>(el: &'a JsxElement, f: &mut F) -> ControlFlow<B>
where
    F: FnMut(NodeRef<'a>) -> ControlFlow<B>,
{
    for item in &el.opening.attributes {
        match item {
            JsxAttrItem::Attribute(attr) => f(NodeRef::JsxAttr(attr))?,
            JsxAttrItem::Spread(spread) => f(NodeRef::from(&spread.argument))?,
        }
    }
    walk_jsx_children(&el.children, f)
}

fn walk_jsx_children<'a, B, F>(children: &'a [JsxChild], f: &mut F) -> ControlFlow<B>
where
    F: FnMut(NodeRef<'a>) -> ControlFlow<B>,
{
    for child in children {
        match child {
            JsxChild::Text(text) => f(NodeRef::JsxText(text))?,
            JsxChild::Element(el) => f(NodeRef::JsxElement(el))?,
            JsxChild::Fragment(frag) => f(NodeRef::JsxFragment(frag))?,
            JsxChild::Expression(container) => f(NodeRef::JsxExpressionContainer(container))?,
        }
    }
    ControlFlow::Continue(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::NodeKind;
    use crate::parse::parse_expression;

    #[test]
    fn test_pre_order_kinds() {
        let expr = parse_expression("a.b(c)").unwrap();
        let mut kinds = Vec::new();
        let _ = walk::<(), _>(NodeRef::from(&expr), |path| {
            kinds.push(path.node().kind());
            ControlFlow::Continue(())
        });
        assert_eq!(
            kinds,
            vec![
                NodeKind::CallExpression,
                NodeKind::MemberExpression,
                NodeKind::Identifier,
                NodeKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_traverse_excludes_root_and_stops() {
        let expr = parse_expression("f(g(1), h(2))").unwrap();
        let mut visited = 0;
        let flow = traverse(&NodePath::root(NodeRef::from(&expr)), |path| {
            visited += 1;
            if path.node().kind() == NodeKind::CallExpression {
                ControlFlow::Break(path.depth())
            } else {
                ControlFlow::Continue(())
            }
        });
        // callee `f`, then `g(1)` breaks at depth 1
        assert_eq!(flow, ControlFlow::Break(1));
        assert_eq!(visited, 2);
    }

    #[test]
    fn test_find_parent_skips_self() {
        let expr = parse_expression("<view><text>{a}</text></view>").unwrap();
        let mut seen = None;
        let _ = walk::<(), _>(NodeRef::from(&expr), |path| {
            if path.node().kind() == NodeKind::Identifier {
                let nearest = path
                    .find_parent(|n| n.kind() == NodeKind::JsxElement)
                    .map(|n| match n {
                        NodeRef::JsxElement(el) => el.name().to_string(),
                        _ => String::new(),
                    });
                seen = nearest;
            }
            ControlFlow::Continue(())
        });
        assert_eq!(seen.as_deref(), Some("text"));
    }

    #[test]
    fn test_expression_container_is_an_ancestor() {
        let expr = parse_expression("<view a={x}>{y}</view>").unwrap();
        let mut parents = Vec::new();
        let _ = walk::<(), _>(NodeRef::from(&expr), |path| {
            if path.node().kind() == NodeKind::Identifier {
                let chain: Vec<NodeKind> = path.ancestors().iter().map(|n| n.kind()).collect();
                parents.push(chain);
            }
            ControlFlow::Continue(())
        });
        assert_eq!(
            parents,
            vec![
                vec![
                    NodeKind::JsxElement,
                    NodeKind::JsxAttribute,
                    NodeKind::JsxExpressionContainer,
                ],
                vec![NodeKind::JsxElement, NodeKind::JsxExpressionContainer],
            ]
        );
    }
}
