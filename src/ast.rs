//! Closed AST model for the component source language.
//!
//! Nodes are produced by the front end (`parse`) or handed over as JSON by the
//! host pipeline. Every node kind this layer classifies has exactly one variant,
//! so predicates are exhaustive matches rather than shape probes.

use serde::{Deserialize, Serialize};
use std::fmt;

// ═══════════════════════════════════════════════════════════════════════════════
// SOURCE LOCATIONS
// ═══════════════════════════════════════════════════════════════════════════════

/// A point in the source text. `line` is 1-based, `column` is 0-based and
/// counted in chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Location {
    pub start: Position,
    pub end: Position,
}

impl Location {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// PROGRAM & STATEMENTS
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Program {
    pub body: Vec<Stmt>,
    #[serde(default)]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Stmt {
    #[serde(rename = "ExpressionStatement")]
    Expr(ExprStmt),
    #[serde(rename = "VariableDeclaration")]
    VarDecl(VarDecl),
    #[serde(rename = "IfStatement")]
    If(IfStmt),
    #[serde(rename = "BlockStatement")]
    Block(BlockStmt),
    #[serde(rename = "ReturnStatement")]
    Return(ReturnStmt),
    #[serde(rename = "ImportDeclaration")]
    Import(ImportDecl),
}

impl Stmt {
    pub fn loc(&self) -> Option<Location> {
        match self {
            Stmt::Expr(s) => s.loc,
            Stmt::VarDecl(s) => s.loc,
            Stmt::If(s) => s.loc,
            Stmt::Block(s) => s.loc,
            Stmt::Return(s) => s.loc,
            Stmt::Import(s) => s.loc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExprStmt {
    pub expression: Expr,
    #[serde(default)]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarKind {
    Var,
    Let,
    Const,
}

impl VarKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VarKind::Var => "var",
            VarKind::Let => "let",
            VarKind::Const => "const",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarDecl {
    pub kind: VarKind,
    pub declarations: Vec<VarDeclarator>,
    #[serde(default)]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarDeclarator {
    pub id: Pattern,
    #[serde(default)]
    pub init: Option<Expr>,
    #[serde(default)]
    pub loc: Option<Location>,
}

/// Binding target of a declarator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    Identifier(Identifier),
    ObjectPattern(ObjectPattern),
    ArrayPattern(ArrayPattern),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectPattern {
    pub properties: Vec<Pattern>,
    #[serde(default)]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayPattern {
    pub elements: Vec<Option<Pattern>>,
    #[serde(default)]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStmt {
    pub test: Expr,
    pub consequent: Box<Stmt>,
    #[serde(default)]
    pub alternate: Option<Box<Stmt>>,
    #[serde(default)]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    #[serde(default)]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnStmt {
    #[serde(default)]
    pub argument: Option<Expr>,
    #[serde(default)]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportDecl {
    pub source: String,
    /// Local binding names, in declaration order.
    pub specifiers: Vec<Identifier>,
    #[serde(default)]
    pub loc: Option<Location>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// EXPRESSIONS
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expr {
    Identifier(Identifier),
    #[serde(rename = "ThisExpression")]
    This(ThisExpr),
    Literal(Literal),
    TemplateLiteral(TemplateLiteral),
    #[serde(rename = "TaggedTemplateExpression")]
    TaggedTemplate(TaggedTemplate),
    #[serde(rename = "MemberExpression")]
    Member(MemberExpr),
    #[serde(rename = "CallExpression")]
    Call(CallExpr),
    #[serde(rename = "UnaryExpression")]
    Unary(UnaryExpr),
    #[serde(rename = "BinaryExpression")]
    Binary(BinaryExpr),
    #[serde(rename = "LogicalExpression")]
    Logical(LogicalExpr),
    #[serde(rename = "ConditionalExpression")]
    Conditional(ConditionalExpr),
    #[serde(rename = "ArrayExpression")]
    Array(ArrayExpr),
    #[serde(rename = "ObjectExpression")]
    Object(ObjectExpr),
    #[serde(rename = "ArrowFunctionExpression")]
    Arrow(ArrowFunction),
    #[serde(rename = "ParenthesizedExpression")]
    Paren(ParenExpr),
    #[serde(rename = "JSXElement")]
    Jsx(JsxElement),
    #[serde(rename = "JSXFragment")]
    JsxFragment(JsxFragment),
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Identifier(Identifier::new(name))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::Literal(Literal::new(LiteralValue::String(value.into())))
    }

    pub fn number(value: f64) -> Self {
        Expr::Literal(Literal::new(LiteralValue::Number(value)))
    }

    pub fn null() -> Self {
        Expr::Literal(Literal::new(LiteralValue::Null))
    }

    pub fn call(callee: Expr, arguments: Vec<Expr>) -> Self {
        Expr::Call(CallExpr {
            callee: Box::new(callee),
            arguments,
            optional: false,
            loc: None,
        })
    }

    pub fn loc(&self) -> Option<Location> {
        match self {
            Expr::Identifier(e) => e.loc,
            Expr::This(e) => e.loc,
            Expr::Literal(e) => e.loc,
            Expr::TemplateLiteral(e) => e.loc,
            Expr::TaggedTemplate(e) => e.loc,
            Expr::Member(e) => e.loc,
            Expr::Call(e) => e.loc,
            Expr::Unary(e) => e.loc,
            Expr::Binary(e) => e.loc,
            Expr::Logical(e) => e.loc,
            Expr::Conditional(e) => e.loc,
            Expr::Array(e) => e.loc,
            Expr::Object(e) => e.loc,
            Expr::Arrow(e) => e.loc,
            Expr::Paren(e) => e.loc,
            Expr::Jsx(e) => e.loc,
            Expr::JsxFragment(e) => e.loc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
    #[serde(default)]
    pub loc: Option<Location>,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            loc: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThisExpr {
    #[serde(default)]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Literal {
    pub value: LiteralValue,
    #[serde(default)]
    pub loc: Option<Location>,
}

impl Literal {
    pub fn new(value: LiteralValue) -> Self {
        Self { value, loc: None }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
    /// Raw source text, including slashes and flags.
    RegExp(String),
    /// Raw source text, including the `n` suffix.
    BigInt(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateLiteral {
    /// Raw text chunks; always one more than `expressions`.
    pub quasis: Vec<String>,
    pub expressions: Vec<Expr>,
    #[serde(default)]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedTemplate {
    pub tag: Box<Expr>,
    pub quasi: TemplateLiteral,
    #[serde(default)]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberExpr {
    pub object: Box<Expr>,
    pub property: MemberProp,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub loc: Option<Location>,
}

impl MemberExpr {
    /// The property name when it is written as `obj.name`.
    pub fn static_property_name(&self) -> Option<&str> {
        match &self.property {
            MemberProp::Ident(id) => Some(id.name.as_str()),
            MemberProp::Computed(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "node", rename_all = "camelCase")]
pub enum MemberProp {
    Ident(Identifier),
    Computed(Box<Expr>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    #[serde(rename = "!")]
    Not,
    #[serde(rename = "-")]
    Minus,
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "~")]
    BitNot,
    #[serde(rename = "typeof")]
    TypeOf,
    #[serde(rename = "void")]
    Void,
    #[serde(rename = "delete")]
    Delete,
}

impl UnaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::Minus => "-",
            UnaryOp::Plus => "+",
            UnaryOp::BitNot => "~",
            UnaryOp::TypeOf => "typeof",
            UnaryOp::Void => "void",
            UnaryOp::Delete => "delete",
        }
    }

    pub fn is_keyword(self) -> bool {
        matches!(self, UnaryOp::TypeOf | UnaryOp::Void | UnaryOp::Delete)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpr {
    pub operator: UnaryOp,
    pub argument: Box<Expr>,
    #[serde(default)]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    /// Operator as written, e.g. `"==="` or `"instanceof"`.
    pub operator: String,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    #[serde(default)]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalOp {
    #[serde(rename = "&&")]
    And,
    #[serde(rename = "||")]
    Or,
    #[serde(rename = "??")]
    Coalesce,
}

impl LogicalOp {
    pub fn as_str(self) -> &'static str {
        match self {
            LogicalOp::And => "&&",
            LogicalOp::Or => "||",
            LogicalOp::Coalesce => "??",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicalExpr {
    pub operator: LogicalOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    #[serde(default)]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalExpr {
    pub test: Box<Expr>,
    pub consequent: Box<Expr>,
    pub alternate: Box<Expr>,
    #[serde(default)]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayExpr {
    pub elements: Vec<Expr>,
    #[serde(default)]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectExpr {
    pub properties: Vec<Property>,
    #[serde(default)]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub key: PropertyKey,
    pub value: Expr,
    #[serde(default)]
    pub shorthand: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "node", rename_all = "camelCase")]
pub enum PropertyKey {
    Identifier(Identifier),
    Literal(Literal),
    Computed(Box<Expr>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowFunction {
    pub params: Vec<Pattern>,
    pub body: ArrowBody,
    #[serde(default)]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "node", rename_all = "camelCase")]
pub enum ArrowBody {
    Expression(Box<Expr>),
    Block(BlockStmt),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParenExpr {
    pub expression: Box<Expr>,
    #[serde(default)]
    pub loc: Option<Location>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// JSX
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsxElement {
    pub opening: JsxOpeningElement,
    #[serde(default)]
    pub children: Vec<JsxChild>,
    #[serde(default)]
    pub loc: Option<Location>,
}

impl JsxElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            opening: JsxOpeningElement {
                name: name.into(),
                attributes: Vec::new(),
                self_closing: true,
                loc: None,
            },
            children: Vec::new(),
            loc: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.opening.name
    }

    /// Looks up a plain (non-spread) attribute by its full name.
    pub fn attr(&self, name: &str) -> Option<&JsxAttr> {
        self.opening.attributes.iter().find_map(|item| match item {
            JsxAttrItem::Attribute(attr) if attr.name == name => Some(attr),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsxOpeningElement {
    /// Tag name as written: `view`, `Foo.Bar` or `ns:tag`.
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<JsxAttrItem>,
    #[serde(default)]
    pub self_closing: bool,
    #[serde(default)]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum JsxAttrItem {
    #[serde(rename = "JSXAttribute")]
    Attribute(JsxAttr),
    #[serde(rename = "JSXSpreadAttribute")]
    Spread(JsxSpreadAttr),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsxAttr {
    /// Full attribute name, namespaced names keep their colon (`wx:if`).
    pub name: String,
    #[serde(default)]
    pub value: Option<JsxAttrValue>,
    #[serde(default)]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsxSpreadAttr {
    pub argument: Expr,
    #[serde(default)]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum JsxAttrValue {
    #[serde(rename = "StringLiteral")]
    String(Literal),
    #[serde(rename = "JSXExpressionContainer")]
    Expression(JsxExpression),
    #[serde(rename = "JSXElement")]
    Element(Box<JsxElement>),
    #[serde(rename = "JSXFragment")]
    Fragment(JsxFragment),
}

/// Content of a `{ ... }` container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "expression", rename_all = "camelCase")]
pub enum JsxExpression {
    Expr(Expr),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum JsxChild {
    #[serde(rename = "JSXText")]
    Text(JsxText),
    #[serde(rename = "JSXElement")]
    Element(JsxElement),
    #[serde(rename = "JSXFragment")]
    Fragment(JsxFragment),
    #[serde(rename = "JSXExpressionContainer")]
    Expression(JsxExpression),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsxText {
    pub value: String,
    #[serde(default)]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JsxFragment {
    #[serde(default)]
    pub children: Vec<JsxChild>,
    #[serde(default)]
    pub loc: Option<Location>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// BORROWED NODE VIEW
// ═══════════════════════════════════════════════════════════════════════════════

/// A borrowed view of any node the layer classifies.
///
/// JSX reached through an expression is always viewed as `JsxElement` /
/// `JsxFragment` (see the `From<&Expr>` impl), so a JSX element is classified
/// the same way as an expression, an attribute value or a child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeRef<'a> {
    Program(&'a Program),
    Stmt(&'a Stmt),
    Declarator(&'a VarDeclarator),
    Expr(&'a Expr),
    JsxElement(&'a JsxElement),
    JsxFragment(&'a JsxFragment),
    JsxAttr(&'a JsxAttr),
    /// A `{ ... }` container, either a child or an attribute value.
    JsxExpressionContainer(&'a JsxExpression),
    JsxText(&'a JsxText),
}

impl<'a> From<&'a Expr> for NodeRef<'a> {
    fn from(expr: &'a Expr) -> Self {
        match expr {
            Expr::Jsx(el) => NodeRef::JsxElement(el),
            Expr::JsxFragment(frag) => NodeRef::JsxFragment(frag),
            other => NodeRef::Expr(other),
        }
    }
}

impl<'a> From<&'a Stmt> for NodeRef<'a> {
    fn from(stmt: &'a Stmt) -> Self {
        NodeRef::Stmt(stmt)
    }
}

impl<'a> From<&'a Program> for NodeRef<'a> {
    fn from(program: &'a Program) -> Self {
        NodeRef::Program(program)
    }
}

impl<'a> From<&'a VarDeclarator> for NodeRef<'a> {
    fn from(decl: &'a VarDeclarator) -> Self {
        NodeRef::Declarator(decl)
    }
}

impl<'a> From<&'a JsxElement> for NodeRef<'a> {
    fn from(el: &'a JsxElement) -> Self {
        NodeRef::JsxElement(el)
    }
}

impl<'a> From<&'a JsxAttr> for NodeRef<'a> {
    fn from(attr: &'a JsxAttr) -> Self {
        NodeRef::JsxAttr(attr)
    }
}

impl<'a> NodeRef<'a> {
    pub fn kind(self) -> NodeKind {
        match self {
            NodeRef::Program(_) => NodeKind::Program,
            NodeRef::Stmt(stmt) => match stmt {
                Stmt::Expr(_) => NodeKind::ExpressionStatement,
                Stmt::VarDecl(_) => NodeKind::VariableDeclaration,
                Stmt::If(_) => NodeKind::IfStatement,
                Stmt::Block(_) => NodeKind::BlockStatement,
                Stmt::Return(_) => NodeKind::ReturnStatement,
                Stmt::Import(_) => NodeKind::ImportDeclaration,
            },
            NodeRef::Declarator(_) => NodeKind::VariableDeclarator,
            NodeRef::Expr(expr) => expr_kind(expr),
            NodeRef::JsxElement(_) => NodeKind::JsxElement,
            NodeRef::JsxFragment(_) => NodeKind::JsxFragment,
            NodeRef::JsxAttr(_) => NodeKind::JsxAttribute,
            NodeRef::JsxExpressionContainer(_) => NodeKind::JsxExpressionContainer,
            NodeRef::JsxText(_) => NodeKind::JsxText,
        }
    }

    pub fn loc(self) -> Option<Location> {
        match self {
            NodeRef::Program(p) => p.loc,
            NodeRef::Stmt(s) => s.loc(),
            NodeRef::Declarator(d) => d.loc,
            NodeRef::Expr(e) => e.loc(),
            NodeRef::JsxElement(el) => el.loc,
            NodeRef::JsxFragment(f) => f.loc,
            NodeRef::JsxAttr(a) => a.loc,
            NodeRef::JsxExpressionContainer(container) => match container {
                JsxExpression::Expr(e) => e.loc(),
                JsxExpression::Empty => None,
            },
            NodeRef::JsxText(t) => t.loc,
        }
    }

    pub fn as_expr(self) -> Option<&'a Expr> {
        match self {
            NodeRef::Expr(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_stmt(self) -> Option<&'a Stmt> {
        match self {
            NodeRef::Stmt(s) => Some(s),
            _ => None,
        }
    }
}

pub fn expr_kind(expr: &Expr) -> NodeKind {
    match expr {
        Expr::Identifier(_) => NodeKind::Identifier,
        Expr::This(_) => NodeKind::ThisExpression,
        Expr::Literal(lit) => match lit.value {
            LiteralValue::String(_) => NodeKind::StringLiteral,
            LiteralValue::Number(_) => NodeKind::NumericLiteral,
            LiteralValue::Boolean(_) => NodeKind::BooleanLiteral,
            LiteralValue::Null => NodeKind::NullLiteral,
            LiteralValue::RegExp(_) => NodeKind::RegExpLiteral,
            LiteralValue::BigInt(_) => NodeKind::BigIntLiteral,
        },
        Expr::TemplateLiteral(_) => NodeKind::TemplateLiteral,
        Expr::TaggedTemplate(_) => NodeKind::TaggedTemplateExpression,
        Expr::Member(_) => NodeKind::MemberExpression,
        Expr::Call(_) => NodeKind::CallExpression,
        Expr::Unary(_) => NodeKind::UnaryExpression,
        Expr::Binary(_) => NodeKind::BinaryExpression,
        Expr::Logical(_) => NodeKind::LogicalExpression,
        Expr::Conditional(_) => NodeKind::ConditionalExpression,
        Expr::Array(_) => NodeKind::ArrayExpression,
        Expr::Object(_) => NodeKind::ObjectExpression,
        Expr::Arrow(_) => NodeKind::ArrowFunctionExpression,
        Expr::Paren(_) => NodeKind::ParenthesizedExpression,
        Expr::Jsx(_) => NodeKind::JsxElement,
        Expr::JsxFragment(_) => NodeKind::JsxFragment,
    }
}

/// Flat classification of node kinds, displayed with Babel-style names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Program,
    ExpressionStatement,
    VariableDeclaration,
    VariableDeclarator,
    IfStatement,
    BlockStatement,
    ReturnStatement,
    ImportDeclaration,
    Identifier,
    ThisExpression,
    StringLiteral,
    NumericLiteral,
    BooleanLiteral,
    NullLiteral,
    RegExpLiteral,
    BigIntLiteral,
    TemplateLiteral,
    TaggedTemplateExpression,
    MemberExpression,
    CallExpression,
    UnaryExpression,
    BinaryExpression,
    LogicalExpression,
    ConditionalExpression,
    ArrayExpression,
    ObjectExpression,
    ArrowFunctionExpression,
    ParenthesizedExpression,
    JsxElement,
    JsxFragment,
    JsxAttribute,
    JsxExpressionContainer,
    JsxText,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::ExpressionStatement => "ExpressionStatement",
            NodeKind::VariableDeclaration => "VariableDeclaration",
            NodeKind::VariableDeclarator => "VariableDeclarator",
            NodeKind::IfStatement => "IfStatement",
            NodeKind::BlockStatement => "BlockStatement",
            NodeKind::ReturnStatement => "ReturnStatement",
            NodeKind::ImportDeclaration => "ImportDeclaration",
            NodeKind::Identifier => "Identifier",
            NodeKind::ThisExpression => "ThisExpression",
            NodeKind::StringLiteral => "StringLiteral",
            NodeKind::NumericLiteral => "NumericLiteral",
            NodeKind::BooleanLiteral => "BooleanLiteral",
            NodeKind::NullLiteral => "NullLiteral",
            NodeKind::RegExpLiteral => "RegExpLiteral",
            NodeKind::BigIntLiteral => "BigIntLiteral",
            NodeKind::TemplateLiteral => "TemplateLiteral",
            NodeKind::TaggedTemplateExpression => "TaggedTemplateExpression",
            NodeKind::MemberExpression => "MemberExpression",
            NodeKind::CallExpression => "CallExpression",
            NodeKind::UnaryExpression => "UnaryExpression",
            NodeKind::BinaryExpression => "BinaryExpression",
            NodeKind::LogicalExpression => "LogicalExpression",
            NodeKind::ConditionalExpression => "ConditionalExpression",
            NodeKind::ArrayExpression => "ArrayExpression",
            NodeKind::ObjectExpression => "ObjectExpression",
            NodeKind::ArrowFunctionExpression => "ArrowFunctionExpression",
            NodeKind::ParenthesizedExpression => "ParenthesizedExpression",
            NodeKind::JsxElement => "JSXElement",
            NodeKind::JsxFragment => "JSXFragment",
            NodeKind::JsxAttribute => "JSXAttribute",
            NodeKind::JsxExpressionContainer => "JSXExpressionContainer",
            NodeKind::JsxText => "JSXText",
        }
    }

    /// Literal kinds in the Babel sense, template literals included.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            NodeKind::StringLiteral
                | NodeKind::NumericLiteral
                | NodeKind::BooleanLiteral
                | NodeKind::NullLiteral
                | NodeKind::RegExpLiteral
                | NodeKind::BigIntLiteral
                | NodeKind::TemplateLiteral
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
