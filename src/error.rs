//! Error Module
//!
//! Failures raised by resolvers, the front end and option loading. Each variant
//! carries a stable string code so hosts can match on codes instead of message
//! text.

use thiserror::Error;

use crate::ast::{Location, NodeKind};

// ═══════════════════════════════════════════════════════════════════════════════
// ERROR CODES
// ═══════════════════════════════════════════════════════════════════════════════

pub const ERR_UNSUPPORTED_BIND_ARGUMENT: &str = "WX-ERR-BIND-ARG";
pub const ERR_MEMBER_CHAIN_ROOT: &str = "WX-ERR-MEMBER-ROOT";
pub const ERR_UNSUPPORTED_SYNTAX: &str = "WX-ERR-SYNTAX";
pub const ERR_PARSE: &str = "WX-ERR-PARSE";
pub const ERR_INVALID_OPTIONS: &str = "WX-ERR-OPTIONS";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// Event-handler binding only accepts `this`, `null`, strings,
    /// identifiers and member chains as bound arguments.
    #[error("bind does not support passing this argument ({kind})")]
    UnsupportedBindArgument {
        kind: NodeKind,
        location: Option<Location>,
    },

    #[error("member expression chain is rooted in {kind}, expected an identifier")]
    MemberChainRoot {
        kind: NodeKind,
        location: Option<Location>,
    },

    #[error("unsupported syntax: {construct}")]
    UnsupportedSyntax {
        construct: String,
        location: Option<Location>,
    },

    #[error("parse error: {message}")]
    Parse { message: String },

    #[error("invalid transform options: {0}")]
    InvalidOptions(String),
}

impl TransformError {
    pub fn code(&self) -> &'static str {
        match self {
            TransformError::UnsupportedBindArgument { .. } => ERR_UNSUPPORTED_BIND_ARGUMENT,
            TransformError::MemberChainRoot { .. } => ERR_MEMBER_CHAIN_ROOT,
            TransformError::UnsupportedSyntax { .. } => ERR_UNSUPPORTED_SYNTAX,
            TransformError::Parse { .. } => ERR_PARSE,
            TransformError::InvalidOptions(_) => ERR_INVALID_OPTIONS,
        }
    }

    pub fn location(&self) -> Option<Location> {
        match self {
            TransformError::UnsupportedBindArgument { location, .. }
            | TransformError::MemberChainRoot { location, .. }
            | TransformError::UnsupportedSyntax { location, .. } => *location,
            TransformError::Parse { .. } | TransformError::InvalidOptions(_) => None,
        }
    }
}

impl From<serde_json::Error> for TransformError {
    fn from(err: serde_json::Error) -> Self {
        TransformError::InvalidOptions(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Position;

    #[test]
    fn test_codes_and_locations() {
        let loc = Location::new(Position::new(3, 4), Position::new(3, 9));
        let err = TransformError::UnsupportedBindArgument {
            kind: NodeKind::NumericLiteral,
            location: Some(loc),
        };
        assert_eq!(err.code(), "WX-ERR-BIND-ARG");
        assert_eq!(err.location(), Some(loc));
        assert_eq!(
            err.to_string(),
            "bind does not support passing this argument (NumericLiteral)"
        );

        let err = TransformError::InvalidOptions("bad".into());
        assert_eq!(err.code(), ERR_INVALID_OPTIONS);
        assert_eq!(err.location(), None);
    }
}
