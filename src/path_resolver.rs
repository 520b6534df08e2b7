//! Output path resolution.
//!
//! Maps an import specifier to the path of the template artifact it produces:
//!
//! | import        | on disk (next to the importer) | result              |
//! |---------------|--------------------------------|---------------------|
//! | `./foo.js`    | (not probed)                   | `./foo.wxml`        |
//! | `./foo`       | `foo/index.js`                 | `./foo/index.wxml`  |
//! | `./foo`       | `foo.js`                       | `./foo.wxml`        |
//! | `./foo`       | neither, or the probe errors   | `./foo.wxml`        |
//!
//! Probes are synchronous filesystem checks; resolve in batches during a
//! build-time pass rather than on a hot path.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::context::TransformOptions;

/// Existence checks against the filesystem.
pub trait FileProbe: Send + Sync {
    fn exists(&self, path: &Path) -> io::Result<bool>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileProbe;

impl FileProbe for OsFileProbe {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        path.try_exists()
    }
}

#[derive(Debug, Clone)]
pub struct PathResolver<P: FileProbe = OsFileProbe> {
    probe: P,
    template_extension: String,
    script_extension: String,
    index_file_stem: String,
}

impl Default for PathResolver<OsFileProbe> {
    fn default() -> Self {
        Self::from_options(OsFileProbe, &TransformOptions::default())
    }
}

impl<P: FileProbe> PathResolver<P> {
    pub fn new(probe: P) -> Self {
        Self::from_options(probe, &TransformOptions::default())
    }

    pub fn from_options(probe: P, options: &TransformOptions) -> Self {
        Self {
            probe,
            template_extension: options.template_extension.clone(),
            script_extension: options.script_extension.clone(),
            index_file_stem: options.index_file_stem.clone(),
        }
    }

    /// Template artifact path for `import` as written in `current_file`.
    pub fn resolve(&self, import: &str, current_file: &str) -> String {
        let ext = extname(import);
        if !ext.is_empty() {
            let stem = import.trim_end_matches('/');
            return self.with_template_ext(&stem[..stem.len() - ext.len()]);
        }

        let base = Path::new(current_file)
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(import);
        let index_file = base.join(format!("{}.{}", self.index_file_stem, self.script_extension));
        let script_file = with_suffix(&base, &format!(".{}", self.script_extension));

        let probed = self
            .probe
            .exists(&index_file)
            .and_then(|has_index| Ok((has_index, self.probe.exists(&script_file)?)));

        match probed {
            Ok((true, _)) => {
                tracing::trace!(import, index = %index_file.display(), "resolved to directory index");
                format!(
                    "{}/{}",
                    import.trim_end_matches('/'),
                    self.with_template_ext(&self.index_file_stem)
                )
            }
            Ok((false, has_script)) => {
                tracing::trace!(import, has_script, "resolved to sibling file");
                self.with_template_ext(import)
            }
            Err(err) => {
                tracing::warn!(import, current_file, error = %err, "file probe failed, using fallback path");
                self.with_template_ext(import)
            }
        }
    }

    /// Resolves `(import, current_file)` pairs in parallel. Output order
    /// matches input order.
    pub fn resolve_batch<S: AsRef<str> + Sync>(&self, requests: &[(S, S)]) -> Vec<String> {
        requests
            .par_iter()
            .map(|(import, current_file)| self.resolve(import.as_ref(), current_file.as_ref()))
            .collect()
    }

    fn with_template_ext(&self, stem: &str) -> String {
        format!("{}.{}", stem, self.template_extension)
    }
}

/// Resolves with the default extensions against the real filesystem.
pub fn path_resolver(import: &str, current_file: &str) -> String {
    PathResolver::<OsFileProbe>::default().resolve(import, current_file)
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut s: OsString = path.as_os_str().to_owned();
    s.push(suffix);
    PathBuf::from(s)
}

/// Extension of the last path segment including the dot, or `""`. Names
/// that only start with a dot (`.eslintrc`) have no extension.
pub fn extname(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    let base = trimmed.rsplit('/').next().unwrap_or(trimmed);
    if base == "." || base == ".." {
        return "";
    }
    match base.rfind('.') {
        None | Some(0) => "",
        Some(i) => &base[i..],
    }
}
