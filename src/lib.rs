//! # WX Transformer Native
//!
//! Classification, synthesis and diagnostics layer of a compiler that lowers
//! JSX component source into a mini-program template language (`.wxml`).
//!
//! ## Layering
//!
//! 1. **Names** (`ids`): one `IdGenerator` per compilation run. Labels are
//!    spreadsheet-column style (`a`..`z`, `aa`..) and never repeat within a run.
//!
//! 2. **Predicates** (`predicates`): pure, total classifiers over the closed AST.
//!    Subtree scans are explicit depth-first walks that stop at the first match.
//!
//! 3. **Resolvers** (`resolve`): extract a canonical name from a node. The only
//!    fallible part of classification; failures carry a `WX-ERR-*` code and the
//!    offending node's location.
//!
//! 4. **Synthesizers** (`builders`): construct new nodes. Inputs are never
//!    mutated; `new_jsx_if_attr` returns an augmented copy.
//!
//! 5. **Templates** (`templates`): name → node registry. Definitions nested
//!    inside a JSX tree are dropped, re-registration overwrites.
//!
//! 6. **Diagnostics** (`diagnostics`, `context`): code frames rendered against
//!    the current file's source held by the run's `CompileContext`.
//!
//! 7. **Output paths** (`path_resolver`): import specifier → template artifact
//!    path, probing the filesystem for directory-style imports.
//!
//! `parse` lowers oxc's AST into the closed model and `printer` turns nodes back
//! into source text.

pub mod ast;
pub mod builders;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod ids;
pub mod parse;
pub mod path_resolver;
pub mod predicates;
pub mod printer;
pub mod resolve;
pub mod templates;
pub mod visitor;

#[cfg(feature = "napi")]
mod bindings;

#[cfg(test)]
mod classification_tests;
#[cfg(test)]
mod context_tests;
#[cfg(test)]
mod path_resolver_tests;

pub use builders::{
    build_const_variable_declaration, build_jsx_attr, hoist_expression, new_jsx_if_attr,
    reverse_boolean,
};
pub use context::{CompileContext, TransformOptions};
pub use diagnostics::{build_code_frame, CodeFrameError, CodeFrameOptions};
pub use error::TransformError;
pub use ids::{create_uuid, to_letters, IdGenerator};
pub use parse::{parse_expression, parse_module};
pub use path_resolver::{path_resolver, FileProbe, OsFileProbe, PathResolver};
pub use predicates::{
    has_complex_expression, is_all_literal, is_array_map_call_expression,
    is_block_if_statement, is_contain_function, is_contain_jsx_element, is_empty_declarator,
    is_numeric,
};
pub use resolve::{
    find_first_identifier_from_member_expression, find_identifier_from_statement,
    get_argument_name,
};
pub use templates::{set_template, TemplateRegistry};
pub use visitor::NodePath;
