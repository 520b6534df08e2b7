//! Printer Module
//!
//! Re-serializes AST nodes to source text. Output is normalized rather than
//! faithful: parentheses are emitted only where precedence requires them,
//! string literals are double-quoted and blocks use four-space indentation.

use crate::ast::{
    ArrowBody, BlockStmt, Expr, JsxAttr, JsxAttrItem, JsxAttrValue, JsxChild, JsxElement,
    JsxExpression, JsxFragment, Literal, LiteralValue, LogicalOp, MemberProp, Pattern,
    PropertyKey, Stmt, TemplateLiteral, UnaryOp,
};

pub fn print_expr(expr: &Expr) -> String {
    let mut p = Printer::default();
    p.expr(expr, prec::LOWEST);
    p.out
}

pub fn print_stmt(stmt: &Stmt) -> String {
    let mut p = Printer::default();
    p.stmt(stmt);
    p.out
}

pub fn print_jsx_element(el: &JsxElement) -> String {
    let mut p = Printer::default();
    p.jsx_element(el);
    p.out
}

mod prec {
    pub const LOWEST: u8 = 0;
    pub const ASSIGN: u8 = 2;
    pub const CONDITIONAL: u8 = 3;
    pub const LOGICAL_OR: u8 = 4;
    pub const LOGICAL_AND: u8 = 5;
    pub const EXPONENT: u8 = 14;
    pub const UNARY: u8 = 15;
    pub const CALL: u8 = 18;
    pub const PRIMARY: u8 = 20;
}

fn binary_precedence(op: &str) -> u8 {
    match op {
        "|" => 6,
        "^" => 7,
        "&" => 8,
        "==" | "!=" | "===" | "!==" => 9,
        "<" | ">" | "<=" | ">=" | "instanceof" | "in" => 10,
        "<<" | ">>" | ">>>" => 11,
        "+" | "-" => 12,
        "*" | "/" | "%" => 13,
        "**" => prec::EXPONENT,
        _ => 6,
    }
}

fn logical_precedence(op: LogicalOp) -> u8 {
    match op {
        LogicalOp::And => prec::LOGICAL_AND,
        LogicalOp::Or | LogicalOp::Coalesce => prec::LOGICAL_OR,
    }
}

fn precedence(expr: &Expr) -> u8 {
    match expr {
        Expr::Arrow(_) => prec::ASSIGN,
        Expr::Conditional(_) => prec::CONDITIONAL,
        Expr::Logical(l) => logical_precedence(l.operator),
        Expr::Binary(b) => binary_precedence(&b.operator),
        Expr::Unary(_) => prec::UNARY,
        Expr::Call(_) | Expr::Member(_) | Expr::TaggedTemplate(_) => prec::CALL,
        _ => prec::PRIMARY,
    }
}

/// `??` may not be mixed with `&&`/`||` without explicit parentheses.
fn mixes_coalesce(parent: LogicalOp, child: &Expr) -> bool {
    match child {
        Expr::Logical(l) => (parent == LogicalOp::Coalesce) != (l.operator == LogicalOp::Coalesce),
        _ => false,
    }
}

fn quote(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

fn number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n < 0.0 {
        format!("-{}", finite_number(-n))
    } else {
        finite_number(n)
    }
}

/// JavaScript `Number::toString` for a positive finite value, built from the
/// shortest round-trip digits.
fn finite_number(n: f64) -> String {
    let sci = format!("{:e}", n);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let k = digits.len() as i32;
    // position of the decimal point relative to the digit string
    let point = exponent + 1;

    if k <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{}.{}", int, frac)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, sign, exponent.abs())
        } else {
            format!("{}.{}e{}{}", first, rest, sign, exponent.abs())
        }
    }
}

#[derive(Default)]
struct Printer {
    out: String,
    indent: usize,
}

impl Printer {
    fn push(&mut self, s: &str) {
        self.out.push_str(s);
    }

    fn newline(&mut self) {
        self.out.push('\n');
        for _ in 0..self.indent {
            self.out.push_str("    ");
        }
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // STATEMENTS
    // ═══════════════════════════════════════════════════════════════════════════

    fn stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Expr(s) => {
                let starts_ambiguous = matches!(
                    s.expression,
                    Expr::Object(_) | Expr::Arrow(_)
                );
                if starts_ambiguous {
                    self.push("(");
                    self.expr(&s.expression, prec::LOWEST);
                    self.push(")");
                } else {
                    self.expr(&s.expression, prec::LOWEST);
                }
                self.push(";");
            }
            Stmt::VarDecl(decl) => {
                self.push(decl.kind.as_str());
                self.push(" ");
                for (i, d) in decl.declarations.iter().enumerate() {
                    if i > 0 {
                        self.push(", ");
                    }
                    self.pattern(&d.id);
                    if let Some(init) = &d.init {
                        self.push(" = ");
                        self.expr(init, prec::ASSIGN);
                    }
                }
                self.push(";");
            }
            Stmt::If(s) => {
                self.push("if (");
                self.expr(&s.test, prec::LOWEST);
                self.push(") ");
                self.stmt(&s.consequent);
                if let Some(alt) = &s.alternate {
                    self.push(" else ");
                    self.stmt(alt);
                }
            }
            Stmt::Block(block) => self.block(block),
            Stmt::Return(s) => match &s.argument {
                Some(arg) => {
                    self.push("return ");
                    self.expr(arg, prec::LOWEST);
                    self.push(";");
                }
                None => self.push("return;"),
            },
            Stmt::Import(decl) => {
                self.push("import ");
                if !decl.specifiers.is_empty() {
                    let names: Vec<&str> =
                        decl.specifiers.iter().map(|s| s.name.as_str()).collect();
                    self.push("{ ");
                    self.push(&names.join(", "));
                    self.push(" } from ");
                }
                self.push(&quote(&decl.source));
                self.push(";");
            }
        }
    }

    fn block(&mut self, block: &BlockStmt) {
        if block.body.is_empty() {
            self.push("{}");
            return;
        }
        self.push("{");
        self.indent += 1;
        for s in &block.body {
            self.newline();
            self.stmt(s);
        }
        self.indent -= 1;
        self.newline();
        self.push("}");
    }

    fn pattern(&mut self, pattern: &Pattern) {
        match pattern {
            Pattern::Identifier(id) => self.push(&id.name),
            Pattern::ObjectPattern(obj) => {
                if obj.properties.is_empty() {
                    self.push("{}");
                    return;
                }
                self.push("{ ");
                for (i, p) in obj.properties.iter().enumerate() {
                    if i > 0 {
                        self.push(", ");
                    }
                    self.pattern(p);
                }
                self.push(" }");
            }
            Pattern::ArrayPattern(arr) => {
                self.push("[");
                for (i, p) in arr.elements.iter().enumerate() {
                    if i > 0 {
                        self.push(", ");
                    }
                    if let Some(p) = p {
                        self.pattern(p);
                    }
                }
                self.push("]");
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // EXPRESSIONS
    // ═══════════════════════════════════════════════════════════════════════════

    fn expr(&mut self, expr: &Expr, min: u8) {
        let wrap = precedence(expr) < min;
        if wrap {
            self.push("(");
        }
        self.expr_inner(expr);
        if wrap {
            self.push(")");
        }
    }

    fn expr_inner(&mut self, expr: &Expr) {
        match expr {
            Expr::Identifier(id) => self.push(&id.name),
            Expr::This(_) => self.push("this"),
            Expr::Literal(lit) => self.literal(lit),
            Expr::TemplateLiteral(tpl) => self.template(tpl),
            Expr::TaggedTemplate(tagged) => {
                self.expr(&tagged.tag, prec::CALL);
                self.template(&tagged.quasi);
            }
            Expr::Member(member) => {
                let numeric_object = matches!(
                    member.object.as_ref(),
                    Expr::Literal(Literal {
                        value: LiteralValue::Number(_),
                        ..
                    })
                );
                if numeric_object {
                    self.push("(");
                    self.expr(&member.object, prec::LOWEST);
                    self.push(")");
                } else {
                    self.expr(&member.object, prec::CALL);
                }
                match &member.property {
                    MemberProp::Ident(id) => {
                        self.push(if member.optional { "?." } else { "." });
                        self.push(&id.name);
                    }
                    MemberProp::Computed(prop) => {
                        self.push(if member.optional { "?.[" } else { "[" });
                        self.expr(prop, prec::LOWEST);
                        self.push("]");
                    }
                }
            }
            Expr::Call(call) => {
                self.expr(&call.callee, prec::CALL);
                self.push(if call.optional { "?.(" } else { "(" });
                self.comma_list(&call.arguments);
                self.push(")");
            }
            Expr::Unary(unary) => {
                self.push(unary.operator.as_str());
                let needs_space = unary.operator.is_keyword()
                    || matches!(
                        (unary.operator, unary.argument.as_ref()),
                        (UnaryOp::Minus, Expr::Unary(inner)) if inner.operator == UnaryOp::Minus
                    )
                    || matches!(
                        (unary.operator, unary.argument.as_ref()),
                        (UnaryOp::Plus, Expr::Unary(inner)) if inner.operator == UnaryOp::Plus
                    );
                if needs_space {
                    self.push(" ");
                }
                self.expr(&unary.argument, prec::UNARY);
            }
            Expr::Binary(bin) => {
                let p = binary_precedence(&bin.operator);
                let (left_min, right_min) = if bin.operator == "**" {
                    // right-associative; a unary base must be parenthesized
                    (p + 2, p)
                } else {
                    (p, p + 1)
                };
                self.expr(&bin.left, left_min);
                self.push(" ");
                self.push(&bin.operator);
                self.push(" ");
                self.expr(&bin.right, right_min);
            }
            Expr::Logical(logical) => {
                let p = logical_precedence(logical.operator);
                let left_min = if mixes_coalesce(logical.operator, &logical.left) {
                    prec::PRIMARY
                } else {
                    p
                };
                let right_min = if mixes_coalesce(logical.operator, &logical.right) {
                    prec::PRIMARY
                } else {
                    p + 1
                };
                self.expr(&logical.left, left_min);
                self.push(" ");
                self.push(logical.operator.as_str());
                self.push(" ");
                self.expr(&logical.right, right_min);
            }
            Expr::Conditional(cond) => {
                self.expr(&cond.test, prec::LOGICAL_OR);
                self.push(" ? ");
                self.expr(&cond.consequent, prec::ASSIGN);
                self.push(" : ");
                self.expr(&cond.alternate, prec::ASSIGN);
            }
            Expr::Array(array) => {
                self.push("[");
                self.comma_list(&array.elements);
                self.push("]");
            }
            Expr::Object(object) => {
                if object.properties.is_empty() {
                    self.push("{}");
                    return;
                }
                self.push("{ ");
                for (i, prop) in object.properties.iter().enumerate() {
                    if i > 0 {
                        self.push(", ");
                    }
                    if prop.shorthand {
                        self.expr(&prop.value, prec::ASSIGN);
                        continue;
                    }
                    match &prop.key {
                        PropertyKey::Identifier(id) => self.push(&id.name),
                        PropertyKey::Literal(lit) => self.literal(lit),
                        PropertyKey::Computed(key) => {
                            self.push("[");
                            self.expr(key, prec::ASSIGN);
                            self.push("]");
                        }
                    }
                    self.push(": ");
                    self.expr(&prop.value, prec::ASSIGN);
                }
                self.push(" }");
            }
            Expr::Arrow(arrow) => {
                self.push("(");
                for (i, p) in arrow.params.iter().enumerate() {
                    if i > 0 {
                        self.push(", ");
                    }
                    self.pattern(p);
                }
                self.push(") => ");
                match &arrow.body {
                    ArrowBody::Expression(body) if matches!(body.as_ref(), Expr::Object(_)) => {
                        self.push("(");
                        self.expr(body, prec::LOWEST);
                        self.push(")");
                    }
                    ArrowBody::Expression(body) => self.expr(body, prec::ASSIGN),
                    ArrowBody::Block(block) => self.block(block),
                }
            }
            Expr::Paren(paren) => {
                self.push("(");
                self.expr(&paren.expression, prec::LOWEST);
                self.push(")");
            }
            Expr::Jsx(el) => self.jsx_element(el),
            Expr::JsxFragment(frag) => self.jsx_fragment(frag),
        }
    }

    fn comma_list(&mut self, exprs: &[Expr]) {
        for (i, e) in exprs.iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            self.expr(e, prec::ASSIGN);
        }
    }

    fn literal(&mut self, lit: &Literal) {
        match &lit.value {
            LiteralValue::String(s) => {
                let quoted = quote(s);
                self.push(&quoted);
            }
            LiteralValue::Number(n) => {
                let text = number(*n);
                self.push(&text);
            }
            LiteralValue::Boolean(b) => self.push(if *b { "true" } else { "false" }),
            LiteralValue::Null => self.push("null"),
            LiteralValue::RegExp(raw) | LiteralValue::BigInt(raw) => self.push(raw),
        }
    }

    fn template(&mut self, tpl: &TemplateLiteral) {
        self.push("`");
        for (i, quasi) in tpl.quasis.iter().enumerate() {
            self.push(quasi);
            if let Some(e) = tpl.expressions.get(i) {
                self.push("${");
                self.expr(e, prec::LOWEST);
                self.push("}");
            }
        }
        self.push("`");
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // JSX
    // ═══════════════════════════════════════════════════════════════════════════

    fn jsx_element(&mut self, el: &JsxElement) {
        self.push("<");
        self.push(&el.opening.name);
        for item in &el.opening.attributes {
            self.push(" ");
            match item {
                JsxAttrItem::Attribute(attr) => self.jsx_attr(attr),
                JsxAttrItem::Spread(spread) => {
                    self.push("{...");
                    self.expr(&spread.argument, prec::ASSIGN);
                    self.push("}");
                }
            }
        }
        if el.children.is_empty() && el.opening.self_closing {
            self.push(" />");
            return;
        }
        self.push(">");
        self.jsx_children(&el.children);
        self.push("</");
        self.push(&el.opening.name);
        self.push(">");
    }

    fn jsx_fragment(&mut self, frag: &JsxFragment) {
        self.push("<>");
        self.jsx_children(&frag.children);
        self.push("</>");
    }

    fn jsx_attr(&mut self, attr: &JsxAttr) {
        self.push(&attr.name);
        match &attr.value {
            None => {}
            Some(JsxAttrValue::String(lit)) => {
                let value = match &lit.value {
                    LiteralValue::String(s) => s.as_str(),
                    _ => "",
                };
                // JSX attribute strings have no escapes
                if !value.contains('"') {
                    self.push(&format!("=\"{}\"", value));
                } else if !value.contains('\'') {
                    self.push(&format!("='{}'", value));
                } else {
                    self.push(&format!("={{{}}}", quote(value)));
                }
            }
            Some(JsxAttrValue::Expression(e)) => {
                self.push("=");
                self.jsx_expression(e);
            }
            Some(JsxAttrValue::Element(el)) => {
                self.push("=");
                self.jsx_element(el);
            }
            Some(JsxAttrValue::Fragment(frag)) => {
                self.push("=");
                self.jsx_fragment(frag);
            }
        }
    }

    fn jsx_expression(&mut self, e: &JsxExpression) {
        self.push("{");
        if let JsxExpression::Expr(expr) = e {
            self.expr(expr, prec::LOWEST);
        }
        self.push("}");
    }

    fn jsx_children(&mut self, children: &[JsxChild]) {
        for child in children {
            match child {
                JsxChild::Text(text) => self.push(&text.value),
                JsxChild::Element(el) => self.jsx_element(el),
                JsxChild::Fragment(frag) => self.jsx_fragment(frag),
                JsxChild::Expression(e) => self.jsx_expression(e),
            }
        }
    }
}
