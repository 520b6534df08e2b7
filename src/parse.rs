//! Parse Module
//!
//! Parses JSX-flavoured component source with oxc and lowers the oxc AST into
//! the closed model in `ast`. Constructs outside the representable subset are
//! rejected with a located `TransformError::UnsupportedSyntax`.

use oxc_allocator::Allocator;
use oxc_ast::ast as oxc;
use oxc_parser::Parser;
use oxc_span::{GetSpan, SourceType, Span};
use oxc_syntax::operator::{LogicalOperator, UnaryOperator};

use crate::ast::{
    ArrayExpr, ArrayPattern, ArrowBody, ArrowFunction, BinaryExpr, BlockStmt, CallExpr,
    ConditionalExpr, Expr, ExprStmt, Identifier, IfStmt, ImportDecl, JsxAttr, JsxAttrItem,
    JsxAttrValue, JsxChild, JsxElement, JsxExpression, JsxFragment, JsxOpeningElement,
    JsxSpreadAttr, JsxText, Literal, LiteralValue, Location, LogicalExpr, LogicalOp, MemberExpr,
    MemberProp, ObjectExpr, ObjectPattern, ParenExpr, Pattern, Position, Program, Property,
    PropertyKey, ReturnStmt, Stmt, TaggedTemplate, TemplateLiteral, ThisExpr, UnaryExpr, UnaryOp,
    VarDecl, VarDeclarator, VarKind,
};
use crate::error::TransformError;

// ═══════════════════════════════════════════════════════════════════════════════
// LINE INDEX
// ═══════════════════════════════════════════════════════════════════════════════

/// Maps byte offsets into `Position`s.
#[derive(Debug, Clone)]
pub struct LineIndex<'s> {
    source: &'s str,
    line_starts: Vec<usize>,
}

impl<'s> LineIndex<'s> {
    pub fn new(source: &'s str) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in source.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self {
            source,
            line_starts,
        }
    }

    pub fn position(&self, offset: u32) -> Position {
        let offset = (offset as usize).min(self.source.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i - 1,
        };
        let line_start = self.line_starts[line];
        let column = self
            .source
            .get(line_start..offset)
            .map_or(offset - line_start, |s| s.chars().count());
        Position::new(line as u32 + 1, column as u32)
    }

    pub fn location(&self, span: Span) -> Location {
        Location::new(self.position(span.start), self.position(span.end))
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// ENTRY POINTS
// ═══════════════════════════════════════════════════════════════════════════════

fn source_type() -> SourceType {
    SourceType::default()
        .with_typescript(true)
        .with_module(true)
        .with_jsx(true)
}

/// Parses a whole module.
pub fn parse_module(source: &str) -> Result<Program, TransformError> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, source_type()).parse();

    if let Some(error) = ret.errors.first() {
        return Err(TransformError::Parse {
            message: error.to_string(),
        });
    }

    let lowerer = Lowerer::new(source);
    let body = ret
        .program
        .body
        .iter()
        .filter(|stmt| !matches!(stmt, oxc::Statement::EmptyStatement(_)))
        .map(|stmt| lowerer.lower_statement(stmt))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Program {
        body,
        loc: Some(lowerer.loc(ret.program.span)),
    })
}

/// Parses a single expression. Locations are relative to `source`.
pub fn parse_expression(source: &str) -> Result<Expr, TransformError> {
    let allocator = Allocator::default();
    let expr = Parser::new(&allocator, source, source_type())
        .parse_expression()
        .map_err(|errors| TransformError::Parse {
            message: errors
                .first()
                .map(|e| e.to_string())
                .unwrap_or_else(|| "invalid expression".to_string()),
        })?;

    Lowerer::new(source).lower_expression(&expr)
}

// ═══════════════════════════════════════════════════════════════════════════════
// LOWERING
// ═══════════════════════════════════════════════════════════════════════════════

struct Lowerer<'s> {
    source: &'s str,
    lines: LineIndex<'s>,
}

impl<'s> Lowerer<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            source,
            lines: LineIndex::new(source),
        }
    }

    fn loc(&self, span: Span) -> Location {
        self.lines.location(span)
    }

    fn raw(&self, span: Span) -> String {
        self.source
            .get(span.start as usize..span.end as usize)
            .unwrap_or_default()
            .to_string()
    }

    fn unsupported(&self, what: &str, span: Span) -> TransformError {
        TransformError::UnsupportedSyntax {
            construct: what.to_string(),
            location: Some(self.loc(span)),
        }
    }

    fn lower_statement(&self, stmt: &oxc::Statement<'_>) -> Result<Stmt, TransformError> {
        match stmt {
            oxc::Statement::ExpressionStatement(es) => Ok(Stmt::Expr(ExprStmt {
                expression: self.lower_expression(&es.expression)?,
                loc: Some(self.loc(es.span)),
            })),
            oxc::Statement::VariableDeclaration(decl) => {
                Ok(Stmt::VarDecl(self.lower_variable_declaration(decl)?))
            }
            oxc::Statement::IfStatement(s) => Ok(Stmt::If(IfStmt {
                test: self.lower_expression(&s.test)?,
                consequent: Box::new(self.lower_statement(&s.consequent)?),
                alternate: match &s.alternate {
                    Some(alt) => Some(Box::new(self.lower_statement(alt)?)),
                    None => None,
                },
                loc: Some(self.loc(s.span)),
            })),
            oxc::Statement::BlockStatement(block) => Ok(Stmt::Block(BlockStmt {
                body: self.lower_statements(&block.body)?,
                loc: Some(self.loc(block.span)),
            })),
            oxc::Statement::ReturnStatement(ret) => Ok(Stmt::Return(ReturnStmt {
                argument: match &ret.argument {
                    Some(arg) => Some(self.lower_expression(arg)?),
                    None => None,
                },
                loc: Some(self.loc(ret.span)),
            })),
            oxc::Statement::ImportDeclaration(decl) => {
                let specifiers = decl
                    .specifiers
                    .iter()
                    .flat_map(|specs| specs.iter())
                    .map(|spec| {
                        let local = match spec {
                            oxc::ImportDeclarationSpecifier::ImportSpecifier(s) => &s.local,
                            oxc::ImportDeclarationSpecifier::ImportDefaultSpecifier(s) => &s.local,
                            oxc::ImportDeclarationSpecifier::ImportNamespaceSpecifier(s) => {
                                &s.local
                            }
                        };
                        Identifier {
                            name: local.name.to_string(),
                            loc: Some(self.loc(local.span)),
                        }
                    })
                    .collect();
                Ok(Stmt::Import(ImportDecl {
                    source: decl.source.value.to_string(),
                    specifiers,
                    loc: Some(self.loc(decl.span)),
                }))
            }
            other => Err(self.unsupported("statement", other.span())),
        }
    }

    fn lower_statements(
        &self,
        stmts: &[oxc::Statement<'_>],
    ) -> Result<Vec<Stmt>, TransformError> {
        stmts
            .iter()
            .filter(|stmt| !matches!(stmt, oxc::Statement::EmptyStatement(_)))
            .map(|stmt| self.lower_statement(stmt))
            .collect()
    }

    fn lower_variable_declaration(
        &self,
        decl: &oxc::VariableDeclaration<'_>,
    ) -> Result<VarDecl, TransformError> {
        let kind = match decl.kind {
            oxc::VariableDeclarationKind::Var => VarKind::Var,
            oxc::VariableDeclarationKind::Let => VarKind::Let,
            oxc::VariableDeclarationKind::Const => VarKind::Const,
            _ => return Err(self.unsupported("using declaration", decl.span)),
        };
        let declarations = decl
            .declarations
            .iter()
            .map(|d| {
                Ok(VarDeclarator {
                    id: self.lower_pattern(&d.id)?,
                    init: match &d.init {
                        Some(init) => Some(self.lower_expression(init)?),
                        None => None,
                    },
                    loc: Some(self.loc(d.span)),
                })
            })
            .collect::<Result<Vec<_>, TransformError>>()?;
        Ok(VarDecl {
            kind,
            declarations,
            loc: Some(self.loc(decl.span)),
        })
    }

    fn lower_pattern(&self, pattern: &oxc::BindingPattern<'_>) -> Result<Pattern, TransformError> {
        match pattern {
            oxc::BindingPattern::BindingIdentifier(id) => Ok(Pattern::Identifier(Identifier {
                name: id.name.to_string(),
                loc: Some(self.loc(id.span)),
            })),
            oxc::BindingPattern::ObjectPattern(obj) => {
                if let Some(rest) = &obj.rest {
                    return Err(self.unsupported("rest element", rest.span));
                }
                let properties = obj
                    .properties
                    .iter()
                    .map(|prop| self.lower_pattern(&prop.value))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Pattern::ObjectPattern(ObjectPattern {
                    properties,
                    loc: Some(self.loc(obj.span)),
                }))
            }
            oxc::BindingPattern::ArrayPattern(arr) => {
                if let Some(rest) = &arr.rest {
                    return Err(self.unsupported("rest element", rest.span));
                }
                let elements = arr
                    .elements
                    .iter()
                    .map(|elem| elem.as_ref().map(|p| self.lower_pattern(p)).transpose())
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Pattern::ArrayPattern(ArrayPattern {
                    elements,
                    loc: Some(self.loc(arr.span)),
                }))
            }
            other => Err(self.unsupported("binding pattern", other.span())),
        }
    }

    fn lower_boxed(&self, expr: &oxc::Expression<'_>) -> Result<Box<Expr>, TransformError> {
        self.lower_expression(expr).map(Box::new)
    }

    fn lower_expression(&self, expr: &oxc::Expression<'_>) -> Result<Expr, TransformError> {
        let loc = Some(self.loc(expr.span()));
        let lowered = match expr {
            oxc::Expression::Identifier(id) => Expr::Identifier(Identifier {
                name: id.name.to_string(),
                loc,
            }),
            oxc::Expression::ThisExpression(_) => Expr::This(ThisExpr { loc }),
            oxc::Expression::StringLiteral(s) => Expr::Literal(Literal {
                value: LiteralValue::String(s.value.to_string()),
                loc,
            }),
            oxc::Expression::NumericLiteral(n) => Expr::Literal(Literal {
                value: LiteralValue::Number(n.value),
                loc,
            }),
            oxc::Expression::BooleanLiteral(b) => Expr::Literal(Literal {
                value: LiteralValue::Boolean(b.value),
                loc,
            }),
            oxc::Expression::NullLiteral(_) => Expr::Literal(Literal {
                value: LiteralValue::Null,
                loc,
            }),
            oxc::Expression::RegExpLiteral(r) => Expr::Literal(Literal {
                value: LiteralValue::RegExp(self.raw(r.span)),
                loc,
            }),
            oxc::Expression::BigIntLiteral(b) => Expr::Literal(Literal {
                value: LiteralValue::BigInt(self.raw(b.span)),
                loc,
            }),
            oxc::Expression::TemplateLiteral(tpl) => {
                Expr::TemplateLiteral(self.lower_template_literal(tpl)?)
            }
            oxc::Expression::TaggedTemplateExpression(tagged) => {
                Expr::TaggedTemplate(TaggedTemplate {
                    tag: self.lower_boxed(&tagged.tag)?,
                    quasi: self.lower_template_literal(&tagged.quasi)?,
                    loc,
                })
            }
            oxc::Expression::StaticMemberExpression(member) => Expr::Member(MemberExpr {
                object: self.lower_boxed(&member.object)?,
                property: MemberProp::Ident(Identifier {
                    name: member.property.name.to_string(),
                    loc: Some(self.loc(member.property.span)),
                }),
                optional: member.optional,
                loc,
            }),
            oxc::Expression::ComputedMemberExpression(member) => Expr::Member(MemberExpr {
                object: self.lower_boxed(&member.object)?,
                property: MemberProp::Computed(self.lower_boxed(&member.expression)?),
                optional: member.optional,
                loc,
            }),
            oxc::Expression::CallExpression(call) => {
                let arguments = call
                    .arguments
                    .iter()
                    .map(|arg| match arg.as_expression() {
                        Some(e) => self.lower_expression(e),
                        None => Err(self.unsupported("spread argument", arg.span())),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Expr::Call(CallExpr {
                    callee: self.lower_boxed(&call.callee)?,
                    arguments,
                    optional: call.optional,
                    loc,
                })
            }
            oxc::Expression::UnaryExpression(unary) => {
                let operator = match unary.operator {
                    UnaryOperator::LogicalNot => UnaryOp::Not,
                    UnaryOperator::UnaryNegation => UnaryOp::Minus,
                    UnaryOperator::UnaryPlus => UnaryOp::Plus,
                    UnaryOperator::BitwiseNot => UnaryOp::BitNot,
                    UnaryOperator::Typeof => UnaryOp::TypeOf,
                    UnaryOperator::Void => UnaryOp::Void,
                    UnaryOperator::Delete => UnaryOp::Delete,
                };
                Expr::Unary(UnaryExpr {
                    operator,
                    argument: self.lower_boxed(&unary.argument)?,
                    loc,
                })
            }
            oxc::Expression::BinaryExpression(bin) => Expr::Binary(BinaryExpr {
                operator: bin.operator.as_str().to_string(),
                left: self.lower_boxed(&bin.left)?,
                right: self.lower_boxed(&bin.right)?,
                loc,
            }),
            oxc::Expression::LogicalExpression(logical) => Expr::Logical(LogicalExpr {
                operator: match logical.operator {
                    LogicalOperator::And => LogicalOp::And,
                    LogicalOperator::Or => LogicalOp::Or,
                    LogicalOperator::Coalesce => LogicalOp::Coalesce,
                },
                left: self.lower_boxed(&logical.left)?,
                right: self.lower_boxed(&logical.right)?,
                loc,
            }),
            oxc::Expression::ConditionalExpression(cond) => Expr::Conditional(ConditionalExpr {
                test: self.lower_boxed(&cond.test)?,
                consequent: self.lower_boxed(&cond.consequent)?,
                alternate: self.lower_boxed(&cond.alternate)?,
                loc,
            }),
            oxc::Expression::ArrayExpression(array) => {
                let elements = array
                    .elements
                    .iter()
                    .map(|el| match el.as_expression() {
                        Some(e) => self.lower_expression(e),
                        None => Err(self.unsupported("array hole or spread", el.span())),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Expr::Array(ArrayExpr { elements, loc })
            }
            oxc::Expression::ObjectExpression(object) => {
                let properties = object
                    .properties
                    .iter()
                    .map(|kind| match kind {
                        oxc::ObjectPropertyKind::ObjectProperty(prop) => {
                            if prop.method || !matches!(prop.kind, oxc::PropertyKind::Init) {
                                return Err(self.unsupported("object method", prop.span));
                            }
                            Ok(Property {
                                key: self.lower_property_key(&prop.key, prop.computed)?,
                                value: self.lower_expression(&prop.value)?,
                                shorthand: prop.shorthand,
                            })
                        }
                        oxc::ObjectPropertyKind::SpreadProperty(spread) => {
                            Err(self.unsupported("object spread", spread.span))
                        }
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Expr::Object(ObjectExpr { properties, loc })
            }
            oxc::Expression::ArrowFunctionExpression(arrow) => {
                if let Some(rest) = &arrow.params.rest {
                    return Err(self.unsupported("rest parameter", rest.span));
                }
                let params = arrow
                    .params
                    .items
                    .iter()
                    .map(|param| self.lower_pattern(&param.pattern))
                    .collect::<Result<Vec<_>, _>>()?;
                let body = match (arrow.expression, arrow.body.statements.first()) {
                    (true, Some(oxc::Statement::ExpressionStatement(es))) => {
                        ArrowBody::Expression(self.lower_boxed(&es.expression)?)
                    }
                    _ => ArrowBody::Block(BlockStmt {
                        body: self.lower_statements(&arrow.body.statements)?,
                        loc: Some(self.loc(arrow.body.span)),
                    }),
                };
                Expr::Arrow(ArrowFunction { params, body, loc })
            }
            oxc::Expression::ParenthesizedExpression(paren) => Expr::Paren(ParenExpr {
                expression: self.lower_boxed(&paren.expression)?,
                loc,
            }),
            oxc::Expression::JSXElement(el) => Expr::Jsx(self.lower_jsx_element(el)?),
            oxc::Expression::JSXFragment(frag) => {
                Expr::JsxFragment(self.lower_jsx_fragment(frag)?)
            }
            other => return Err(self.unsupported("expression", other.span())),
        };
        Ok(lowered)
    }

    fn lower_template_literal(
        &self,
        tpl: &oxc::TemplateLiteral<'_>,
    ) -> Result<TemplateLiteral, TransformError> {
        Ok(TemplateLiteral {
            quasis: tpl.quasis.iter().map(|q| q.value.raw.to_string()).collect(),
            expressions: tpl
                .expressions
                .iter()
                .map(|e| self.lower_expression(e))
                .collect::<Result<Vec<_>, _>>()?,
            loc: Some(self.loc(tpl.span)),
        })
    }

    fn lower_property_key(
        &self,
        key: &oxc::PropertyKey<'_>,
        computed: bool,
    ) -> Result<PropertyKey, TransformError> {
        if let oxc::PropertyKey::StaticIdentifier(id) = key {
            return Ok(PropertyKey::Identifier(Identifier {
                name: id.name.to_string(),
                loc: Some(self.loc(id.span)),
            }));
        }
        let Some(expr) = key.as_expression() else {
            return Err(self.unsupported("private property key", key.span()));
        };
        if computed {
            return Ok(PropertyKey::Computed(self.lower_boxed(expr)?));
        }
        match self.lower_expression(expr)? {
            Expr::Literal(lit) => Ok(PropertyKey::Literal(lit)),
            _ => Err(self.unsupported("property key", key.span())),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // JSX
    // ═══════════════════════════════════════════════════════════════════════════

    fn lower_jsx_element(&self, element: &oxc::JSXElement<'_>) -> Result<JsxElement, TransformError> {
        let opening = &element.opening_element;
        let attributes = opening
            .attributes
            .iter()
            .map(|item| match item {
                oxc::JSXAttributeItem::Attribute(attr) => {
                    Ok(JsxAttrItem::Attribute(self.lower_jsx_attribute(attr)?))
                }
                oxc::JSXAttributeItem::SpreadAttribute(spread) => {
                    Ok(JsxAttrItem::Spread(JsxSpreadAttr {
                        argument: self.lower_expression(&spread.argument)?,
                        loc: Some(self.loc(spread.span)),
                    }))
                }
            })
            .collect::<Result<Vec<_>, TransformError>>()?;

        Ok(JsxElement {
            opening: JsxOpeningElement {
                name: self.tag_name(&opening.name),
                attributes,
                self_closing: element.closing_element.is_none(),
                loc: Some(self.loc(opening.span)),
            },
            children: self.lower_jsx_children(&element.children)?,
            loc: Some(self.loc(element.span)),
        })
    }

    fn lower_jsx_fragment(
        &self,
        fragment: &oxc::JSXFragment<'_>,
    ) -> Result<JsxFragment, TransformError> {
        Ok(JsxFragment {
            children: self.lower_jsx_children(&fragment.children)?,
            loc: Some(self.loc(fragment.span)),
        })
    }

    fn lower_jsx_attribute(&self, attr: &oxc::JSXAttribute<'_>) -> Result<JsxAttr, TransformError> {
        let name = match &attr.name {
            oxc::JSXAttributeName::Identifier(id) => id.name.to_string(),
            oxc::JSXAttributeName::NamespacedName(ns) => {
                format!("{}:{}", ns.namespace.name, ns.name.name)
            }
        };
        let value = match &attr.value {
            None => None,
            Some(oxc::JSXAttributeValue::StringLiteral(s)) => Some(JsxAttrValue::String(Literal {
                value: LiteralValue::String(s.value.to_string()),
                loc: Some(self.loc(s.span)),
            })),
            Some(oxc::JSXAttributeValue::ExpressionContainer(container)) => Some(
                JsxAttrValue::Expression(self.lower_jsx_expression(&container.expression)?),
            ),
            Some(oxc::JSXAttributeValue::Element(el)) => {
                Some(JsxAttrValue::Element(Box::new(self.lower_jsx_element(el)?)))
            }
            Some(oxc::JSXAttributeValue::Fragment(frag)) => {
                Some(JsxAttrValue::Fragment(self.lower_jsx_fragment(frag)?))
            }
        };
        Ok(JsxAttr {
            name,
            value,
            loc: Some(self.loc(attr.span)),
        })
    }

    fn lower_jsx_expression(
        &self,
        expr: &oxc::JSXExpression<'_>,
    ) -> Result<JsxExpression, TransformError> {
        match expr.as_expression() {
            Some(e) => Ok(JsxExpression::Expr(self.lower_expression(e)?)),
            None => Ok(JsxExpression::Empty),
        }
    }

    fn lower_jsx_children(
        &self,
        children: &[oxc::JSXChild<'_>],
    ) -> Result<Vec<JsxChild>, TransformError> {
        children
            .iter()
            .map(|child| match child {
                oxc::JSXChild::Text(t) => Ok(JsxChild::Text(JsxText {
                    value: t.value.to_string(),
                    loc: Some(self.loc(t.span)),
                })),
                oxc::JSXChild::Element(el) => Ok(JsxChild::Element(self.lower_jsx_element(el)?)),
                oxc::JSXChild::Fragment(frag) => {
                    Ok(JsxChild::Fragment(self.lower_jsx_fragment(frag)?))
                }
                oxc::JSXChild::ExpressionContainer(container) => Ok(JsxChild::Expression(
                    self.lower_jsx_expression(&container.expression)?,
                )),
                oxc::JSXChild::Spread(spread) => Err(self.unsupported("JSX spread child", spread.span)),
            })
            .collect()
    }

    fn tag_name(&self, name: &oxc::JSXElementName<'_>) -> String {
        match name {
            oxc::JSXElementName::Identifier(id) => id.name.to_string(),
            oxc::JSXElementName::IdentifierReference(id) => id.name.to_string(),
            oxc::JSXElementName::NamespacedName(ns) => {
                format!("{}:{}", ns.namespace.name, ns.name.name)
            }
            oxc::JSXElementName::MemberExpression(me) => self.member_tag_name(me),
            oxc::JSXElementName::ThisExpression(_) => "this".to_string(),
        }
    }

    fn member_tag_name(&self, me: &oxc::JSXMemberExpression<'_>) -> String {
        let object = match &me.object {
            oxc::JSXMemberExpressionObject::IdentifierReference(id) => id.name.to_string(),
            oxc::JSXMemberExpressionObject::MemberExpression(inner) => self.member_tag_name(inner),
            _ => "this".to_string(),
        };
        format!("{}.{}", object, me.property.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_index_positions() {
        let index = LineIndex::new("ab\ncd\n\nef");
        assert_eq!(index.position(0), Position::new(1, 0));
        assert_eq!(index.position(4), Position::new(2, 1));
        assert_eq!(index.position(6), Position::new(3, 0));
        assert_eq!(index.position(8), Position::new(4, 1));
    }

    #[test]
    fn test_expression_locations() {
        let expr = parse_expression("foo(bar)").unwrap();
        let loc = expr.loc().unwrap();
        assert_eq!(loc.start, Position::new(1, 0));
        assert_eq!(loc.end, Position::new(1, 8));
    }

    #[test]
    fn test_module_statements() {
        let program = parse_module(
            r#"
            import Foo from './foo';
            let a = 1, b;
            if (a) { b = 2 }
            "#,
        );
        // assignment is outside the representable subset
        let err = program.unwrap_err();
        assert_eq!(err.code(), crate::error::ERR_UNSUPPORTED_SYNTAX);
        assert_eq!(err.location().unwrap().start.line, 4);
    }

    #[test]
    fn test_jsx_attributes_and_children() {
        let expr = parse_expression(r#"<view wx:key="id" hidden {...rest}>hi {name}</view>"#)
            .unwrap();
        let Expr::Jsx(el) = expr else {
            panic!("expected JSX element");
        };
        assert_eq!(el.name(), "view");
        assert!(!el.opening.self_closing);
        assert!(el.attr("wx:key").is_some());
        assert_eq!(el.attr("hidden").and_then(|a| a.value.as_ref()), None);
        assert_eq!(el.opening.attributes.len(), 3);
        assert_eq!(el.children.len(), 2);
    }

    #[test]
    fn test_parse_error() {
        let err = parse_module("const = ;").unwrap_err();
        assert!(matches!(err, TransformError::Parse { .. }));
    }
}
