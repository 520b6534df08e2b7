//! Expression and statement resolvers.
//!
//! Each resolver extracts a canonical name from a node. Resolvers are the only
//! part of the classification layer allowed to fail, and they fail with a
//! located `TransformError` instead of a sentinel.

use crate::ast::{expr_kind, Expr, Identifier, LiteralValue, MemberExpr, Pattern, Stmt};
use crate::error::TransformError;
use crate::printer::print_expr;

/// Sentinel returned by `find_identifier_from_statement` when the statement
/// binds no plain identifier.
pub const RETURN_SLOT: &str = "__return";

/// Display name of an argument bound to an event handler.
///
/// | argument       | name                |
/// |----------------|---------------------|
/// | `this`         | `"this"`            |
/// | `null`         | `"null"`            |
/// | `"a.b"`        | `"a.b"`             |
/// | `foo`          | `"foo"`             |
/// | `a.b.c`        | `"a.b.c"` (printed) |
pub fn get_argument_name(arg: &Expr) -> Result<String, TransformError> {
    match arg {
        Expr::This(_) => Ok("this".to_string()),
        Expr::Literal(lit) => match &lit.value {
            LiteralValue::Null => Ok("null".to_string()),
            LiteralValue::String(s) => Ok(s.clone()),
            _ => Err(unsupported_bind_argument(arg)),
        },
        Expr::Identifier(id) => Ok(id.name.clone()),
        Expr::Member(_) => Ok(print_expr(arg)),
        _ => Err(unsupported_bind_argument(arg)),
    }
}

fn unsupported_bind_argument(arg: &Expr) -> TransformError {
    TransformError::UnsupportedBindArgument {
        kind: expr_kind(arg),
        location: arg.loc(),
    }
}

/// Root identifier of a member chain: `a` for `a.b.c` or `a[0].b`.
///
/// Chains rooted in anything else (`this`, a call, a parenthesized
/// expression) are rejected with `MemberChainRoot`.
pub fn find_first_identifier_from_member_expression(
    member: &MemberExpr,
) -> Result<&Identifier, TransformError> {
    let mut object = member.object.as_ref();
    loop {
        match object {
            Expr::Member(inner) => object = inner.object.as_ref(),
            Expr::Identifier(id) => return Ok(id),
            other => {
                return Err(TransformError::MemberChainRoot {
                    kind: expr_kind(other),
                    location: other.loc(),
                })
            }
        }
    }
}

/// Name of the first declarator bound to a plain identifier, or
/// [`RETURN_SLOT`].
pub fn find_identifier_from_statement(stmt: &Stmt) -> &str {
    if let Stmt::VarDecl(decl) = stmt {
        let bound = decl.declarations.iter().find_map(|d| match &d.id {
            Pattern::Identifier(id) => Some(id.name.as_str()),
            _ => None,
        });
        if let Some(name) = bound {
            return name;
        }
    }
    RETURN_SLOT
}
