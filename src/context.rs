//! Compilation context.
//!
//! Holds the state one compilation run needs: the name generator, the source
//! text of the file being processed, and the options. One context per run
//! (or per worker); nothing here is global.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ast::Location;
use crate::diagnostics::{render_code_frame, CodeFrameError, CodeFrameOptions};
use crate::error::TransformError;
use crate::ids::IdGenerator;
use crate::path_resolver::{FileProbe, OsFileProbe, PathResolver};

// ═══════════════════════════════════════════════════════════════════════════════
// OPTIONS
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransformOptions {
    /// Extension of emitted template files, without the dot.
    pub template_extension: String,
    /// Extension probed for extensionless script imports.
    pub script_extension: String,
    /// File stem of a directory's entry module.
    pub index_file_stem: String,
    pub code_frame: CodeFrameOptions,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            template_extension: "wxml".to_string(),
            script_extension: "js".to_string(),
            index_file_stem: "index".to_string(),
            code_frame: CodeFrameOptions::default(),
        }
    }
}

impl TransformOptions {
    /// Parses options from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, TransformError> {
        let options: TransformOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    fn validate(&self) -> Result<(), TransformError> {
        for (field, value) in [
            ("templateExtension", &self.template_extension),
            ("scriptExtension", &self.script_extension),
            ("indexFileStem", &self.index_file_stem),
        ] {
            if value.is_empty() || value.contains(['/', '\\']) || value.starts_with('.') {
                return Err(TransformError::InvalidOptions(format!(
                    "{} must be a bare name, got {:?}",
                    field, value
                )));
            }
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// CONTEXT
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Default)]
pub struct CompileContext {
    ids: IdGenerator,
    source: String,
    file: Option<PathBuf>,
    options: TransformOptions,
}

impl CompileContext {
    pub fn new(options: TransformOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    pub fn ids(&mut self) -> &mut IdGenerator {
        &mut self.ids
    }

    pub fn next_id(&mut self) -> u64 {
        self.ids.next_id()
    }

    pub fn fresh_name(&mut self) -> String {
        self.ids.fresh_name()
    }

    /// Switches the source buffer to a new file. The name counter carries on
    /// so names stay unique across the whole run.
    pub fn begin_file(&mut self, path: impl Into<PathBuf>, source: impl Into<String>) {
        let path = path.into();
        tracing::debug!(file = %path.display(), "begin file");
        self.file = Some(path);
        self.source = source.into();
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Error for `loc` rendered against the current file's source.
    pub fn code_frame_error(&self, loc: &Location, message: impl Into<String>) -> CodeFrameError {
        CodeFrameError {
            code: None,
            message: message.into(),
            location: Some(*loc),
            frame: render_code_frame(&self.source, loc, &self.options.code_frame),
        }
    }

    /// Converts a transform failure into a located diagnostic. The frame is
    /// empty when the error carries no location.
    pub fn report(&self, err: &TransformError) -> CodeFrameError {
        let location = err.location();
        CodeFrameError {
            code: Some(err.code().to_string()),
            message: err.to_string(),
            location,
            frame: location
                .map(|loc| render_code_frame(&self.source, &loc, &self.options.code_frame))
                .unwrap_or_default(),
        }
    }

    pub fn path_resolver(&self) -> PathResolver<OsFileProbe> {
        PathResolver::from_options(OsFileProbe, &self.options)
    }

    pub fn path_resolver_with<P: FileProbe>(&self, probe: P) -> PathResolver<P> {
        PathResolver::from_options(probe, &self.options)
    }
}
