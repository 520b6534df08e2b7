//! Node host bindings. Nodes and options cross the boundary as JSON strings.

use napi_derive::napi;

use crate::ast::{Location, NodeRef};
use crate::context::{CompileContext, TransformOptions};
use crate::ids::{create_uuid, to_letters};
use crate::parse::parse_expression;
use crate::predicates::{classify_expression, is_numeric};
use crate::resolve::get_argument_name;

fn load_options(options_json: Option<String>) -> napi::Result<TransformOptions> {
    match options_json {
        Some(json) => TransformOptions::from_json(&json)
            .map_err(|e| napi::Error::from_reason(format!("[{}] {}", e.code(), e))),
        None => Ok(TransformOptions::default()),
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// NAMES
// ═══════════════════════════════════════════════════════════════════════════════

#[napi]
pub fn to_letters_native(n: u32) -> String {
    to_letters(n as u64)
}

#[napi]
pub fn create_uuid_native() -> String {
    create_uuid()
}

// ═══════════════════════════════════════════════════════════════════════════════
// CLASSIFICATION
// ═══════════════════════════════════════════════════════════════════════════════

#[napi]
pub fn is_numeric_native(value: String) -> bool {
    is_numeric(&value)
}

/// Parses `code` as an expression and returns its classification as JSON.
#[napi]
pub fn classify_expression_native(code: String) -> napi::Result<String> {
    let expr = parse_expression(&code)
        .map_err(|e| napi::Error::from_reason(format!("[{}] {}", e.code(), e)))?;
    serde_json::to_string(&classify_expression(NodeRef::from(&expr)))
        .map_err(|e| napi::Error::from_reason(format!("Serialize error: {}", e)))
}

/// Bound-argument name of `code`. Failures carry a code frame of `code`.
#[napi]
pub fn argument_name_native(code: String, file_path: String) -> napi::Result<String> {
    let mut ctx = CompileContext::default();
    ctx.begin_file(file_path, code.clone());
    let name = parse_expression(&code).and_then(|expr| get_argument_name(&expr));
    name.map_err(|e| napi::Error::from_reason(ctx.report(&e).to_string()))
}

#[napi]
pub fn code_frame_native(
    source: String,
    location_json: String,
    message: String,
    options_json: Option<String>,
) -> napi::Result<String> {
    let loc: Location = serde_json::from_str(&location_json)
        .map_err(|e| napi::Error::from_reason(format!("Location parse error: {}", e)))?;
    let mut ctx = CompileContext::new(load_options(options_json)?);
    ctx.begin_file("<input>", source);
    Ok(ctx.code_frame_error(&loc, message).to_string())
}

// ═══════════════════════════════════════════════════════════════════════════════
// OUTPUT PATHS
// ═══════════════════════════════════════════════════════════════════════════════

#[napi]
pub fn resolve_template_path_native(
    import: String,
    current_file: String,
    options_json: Option<String>,
) -> napi::Result<String> {
    let ctx = CompileContext::new(load_options(options_json)?);
    Ok(ctx.path_resolver().resolve(&import, &current_file))
}

/// `requests_json` is an array of `[import, currentFile]` pairs.
#[napi]
pub fn resolve_template_paths_native(
    requests_json: String,
    options_json: Option<String>,
) -> napi::Result<Vec<String>> {
    let requests: Vec<(String, String)> = serde_json::from_str(&requests_json)
        .map_err(|e| napi::Error::from_reason(format!("Requests parse error: {}", e)))?;
    let ctx = CompileContext::new(load_options(options_json)?);
    Ok(ctx.path_resolver().resolve_batch(&requests))
}
