//! Output Path Resolution Tests
//!
//! Real filesystem layouts under a temp dir, plus a failing probe for the
//! fallback path.

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io;
    use std::path::Path;

    use tempfile::TempDir;
    use tracing_test::traced_test;

    use crate::context::{CompileContext, TransformOptions};
    use crate::path_resolver::{path_resolver, FileProbe, OsFileProbe, PathResolver};

    struct FailingProbe;

    impl FileProbe for FailingProbe {
        fn exists(&self, _path: &Path) -> io::Result<bool> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "probe denied"))
        }
    }

    /// `src/a.js` plus whatever `files` lists, relative to the temp root.
    fn project(files: &[&str]) -> (TempDir, String) {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("a.js"), "").unwrap();
        for file in files {
            let path = dir.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "").unwrap();
        }
        let importer = src.join("a.js").to_string_lossy().into_owned();
        (dir, importer)
    }

    #[test]
    fn test_extension_is_replaced_without_probing() {
        let resolver = PathResolver::new(FailingProbe);
        assert_eq!(resolver.resolve("./foo.js", "/src/a.js"), "./foo.wxml");
        assert_eq!(resolver.resolve("../lib/bar.tsx", "/src/a.js"), "../lib/bar.wxml");
        assert_eq!(path_resolver("./foo.js", "/src/a.js"), "./foo.wxml");
    }

    #[test]
    fn test_directory_index_wins() {
        let (_dir, importer) = project(&["src/foo/index.js", "src/foo.js"]);
        assert_eq!(path_resolver("./foo", &importer), "./foo/index.wxml");
        assert_eq!(path_resolver("./foo/", &importer), "./foo/index.wxml");
    }

    #[test]
    fn test_sibling_script_file() {
        let (_dir, importer) = project(&["src/foo.js"]);
        assert_eq!(path_resolver("./foo", &importer), "./foo.wxml");
    }

    #[test]
    fn test_missing_target_falls_back() {
        let (_dir, importer) = project(&[]);
        assert_eq!(path_resolver("./foo", &importer), "./foo.wxml");
    }

    #[traced_test]
    #[test]
    fn test_probe_error_falls_back() {
        let resolver = PathResolver::new(FailingProbe);
        assert_eq!(resolver.resolve("./foo", "/src/a.js"), "./foo.wxml");
        assert!(logs_contain("file probe failed"));
    }

    #[test]
    fn test_configured_extensions() {
        let (_dir, importer) = project(&["src/comp/main.ts"]);
        let options = TransformOptions::from_json(
            r#"{ "templateExtension": "axml", "scriptExtension": "ts", "indexFileStem": "main" }"#,
        )
        .unwrap();
        let ctx = CompileContext::new(options);

        let resolver = ctx.path_resolver();
        assert_eq!(resolver.resolve("./comp", &importer), "./comp/main.axml");
        assert_eq!(resolver.resolve("./page.js", &importer), "./page.axml");
    }

    #[test]
    fn test_batch_preserves_order() {
        let (_dir, importer) = project(&["src/foo/index.js", "src/bar.js"]);
        let requests: Vec<(String, String)> = ["./foo", "./bar", "./baz.js", "./missing"]
            .iter()
            .map(|import| (import.to_string(), importer.clone()))
            .collect();

        let resolved = PathResolver::new(OsFileProbe).resolve_batch(&requests);

        assert_eq!(
            resolved,
            vec!["./foo/index.wxml", "./bar.wxml", "./baz.wxml", "./missing.wxml"]
        );
    }
}
