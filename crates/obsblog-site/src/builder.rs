//! Recursive tree mirroring: convert markdown, copy everything else.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use obsblog_render::{convert_document, document_shell};

/// A file that could not be processed.
#[derive(Debug, Clone)]
pub struct FileFailure {
    /// Input path of the file.
    pub path: PathBuf,
    /// Error message.
    pub message: String,
}

/// Outcome of a build run.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Markdown files converted to HTML.
    pub converted: usize,
    /// Non-markdown files copied verbatim.
    pub copied: usize,
    /// Files skipped because of I/O errors.
    pub failures: Vec<FileFailure>,
}

impl BuildReport {
    /// Whether any file was skipped.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Error that aborts a build run.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Input root does not exist.
    #[error("Input directory not found: {}", .0.display())]
    InputNotFound(PathBuf),
    /// Input root is not a directory.
    #[error("Input path is not a directory: {}", .0.display())]
    InputNotDirectory(PathBuf),
    /// I/O error on the input or output root.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Mirrors an input tree into an output tree.
///
/// Markdown files (`.md`, case-insensitive) are converted through the render
/// pipeline and written with an `.html` extension; all other files are
/// copied byte-for-byte. The output directory structure replicates the input
/// exactly. Existing output files are overwritten; stale outputs from
/// earlier runs are never pruned.
///
/// Per-file failures (unreadable file, failed write) are logged, recorded in
/// the report, and skipped — one bad file does not abort the run.
pub struct SiteBuilder {
    input_root: PathBuf,
    output_root: PathBuf,
}

impl SiteBuilder {
    /// Create a builder for the given roots.
    #[must_use]
    pub fn new(input_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            input_root: input_root.into(),
            output_root: output_root.into(),
        }
    }

    /// Run the build: walk the input tree and populate the output tree.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] if the input root is missing, not a directory
    /// or unreadable, or if the output root cannot be created. Individual
    /// file failures do not error; they are reported in the result.
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        if !self.input_root.exists() {
            return Err(BuildError::InputNotFound(self.input_root.clone()));
        }
        if !self.input_root.is_dir() {
            return Err(BuildError::InputNotDirectory(self.input_root.clone()));
        }
        fs::create_dir_all(&self.output_root)?;

        let mut report = BuildReport::default();
        self.mirror_directory(&self.input_root, &self.output_root, &mut report)?;
        Ok(report)
    }

    /// Mirror one directory level, recursing into subdirectories.
    ///
    /// Only the `read_dir` of the directory itself propagates as an error;
    /// everything below is recorded per entry and skipped.
    fn mirror_directory(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        report: &mut BuildReport,
    ) -> io::Result<()> {
        for entry in fs::read_dir(input_dir)? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    record_failure(report, input_dir, &err);
                    continue;
                }
            };
            let path = entry.path();
            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(err) => {
                    record_failure(report, &path, &err);
                    continue;
                }
            };

            if file_type.is_dir() {
                let child_output = output_dir.join(entry.file_name());
                if let Err(err) = fs::create_dir_all(&child_output) {
                    record_failure(report, &path, &err);
                    continue;
                }
                if let Err(err) = self.mirror_directory(&path, &child_output, report) {
                    record_failure(report, &path, &err);
                }
            } else if is_markdown(&path) {
                let dest = output_dir.join(entry.file_name()).with_extension("html");
                match convert_file(&path, &dest) {
                    Ok(()) => report.converted += 1,
                    Err(err) => record_failure(report, &path, &err),
                }
            } else {
                let dest = output_dir.join(entry.file_name());
                match fs::copy(&path, &dest) {
                    Ok(_) => report.copied += 1,
                    Err(err) => record_failure(report, &path, &err),
                }
            }
        }
        Ok(())
    }
}

/// Whether a path names a markdown file (`.md`, ASCII case-insensitive).
fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

/// Convert one markdown file and write the HTML document.
fn convert_file(input: &Path, output: &Path) -> io::Result<()> {
    let raw = fs::read_to_string(input)?;
    let body = convert_document(&raw);
    let title = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    fs::write(output, document_shell(&title, &body))
}

/// Log a skipped file and add it to the report.
fn record_failure(report: &mut BuildReport, path: &Path, err: &io::Error) {
    tracing::warn!(path = %path.display(), error = %err, "skipping file");
    report.failures.push(FileFailure {
        path: path.to_path_buf(),
        message: err.to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn build(input: &Path, output: &Path) -> BuildReport {
        SiteBuilder::new(input, output).build().unwrap()
    }

    #[test]
    fn test_converts_markdown_to_html() {
        let temp = tempfile::tempdir().unwrap();
        let input = temp.path().join("vault");
        let output = temp.path().join("site");
        fs::create_dir_all(&input).unwrap();
        fs::write(input.join("note.md"), "# Title\n\nBody").unwrap();

        let report = build(&input, &output);
        assert_eq!(report.converted, 1);
        assert_eq!(report.copied, 0);
        assert!(!report.has_failures());

        let html = fs::read_to_string(output.join("note.html")).unwrap();
        assert!(html.contains("<title>note</title>"));
        assert!(html.contains("<h1>Title</h1>"));
    }

    #[test]
    fn test_copies_other_files_verbatim() {
        let temp = tempfile::tempdir().unwrap();
        let input = temp.path().join("vault");
        let output = temp.path().join("site");
        fs::create_dir_all(&input).unwrap();
        let bytes: Vec<u8> = (0..=255).collect();
        fs::write(input.join("img.png"), &bytes).unwrap();

        let report = build(&input, &output);
        assert_eq!(report.copied, 1);
        assert_eq!(fs::read(output.join("img.png")).unwrap(), bytes);
    }

    #[test]
    fn test_mirrors_nested_directories() {
        let temp = tempfile::tempdir().unwrap();
        let input = temp.path().join("vault");
        let output = temp.path().join("site");
        fs::create_dir_all(input.join("a/b")).unwrap();
        fs::write(input.join("a/b/deep.md"), "text").unwrap();

        build(&input, &output);
        assert!(output.join("a/b/deep.html").is_file());
    }

    #[test]
    fn test_markdown_extension_case_insensitive() {
        let temp = tempfile::tempdir().unwrap();
        let input = temp.path().join("vault");
        let output = temp.path().join("site");
        fs::create_dir_all(&input).unwrap();
        fs::write(input.join("NOTE.MD"), "text").unwrap();

        let report = build(&input, &output);
        assert_eq!(report.converted, 1);
        assert!(output.join("NOTE.html").is_file());
    }

    #[test]
    fn test_overwrites_existing_output() {
        let temp = tempfile::tempdir().unwrap();
        let input = temp.path().join("vault");
        let output = temp.path().join("site");
        fs::create_dir_all(&input).unwrap();
        fs::create_dir_all(&output).unwrap();
        fs::write(input.join("note.md"), "new content").unwrap();
        fs::write(output.join("note.html"), "stale").unwrap();

        build(&input, &output);
        let html = fs::read_to_string(output.join("note.html")).unwrap();
        assert!(html.contains("new content"));
    }

    #[test]
    fn test_stale_outputs_not_pruned() {
        let temp = tempfile::tempdir().unwrap();
        let input = temp.path().join("vault");
        let output = temp.path().join("site");
        fs::create_dir_all(&input).unwrap();
        fs::create_dir_all(&output).unwrap();
        fs::write(output.join("leftover.html"), "old").unwrap();

        build(&input, &output);
        assert!(output.join("leftover.html").is_file());
    }

    #[test]
    fn test_missing_input_root() {
        let temp = tempfile::tempdir().unwrap();
        let result = SiteBuilder::new(temp.path().join("absent"), temp.path().join("out")).build();
        assert!(matches!(result, Err(BuildError::InputNotFound(_))));
    }

    #[test]
    fn test_input_root_not_a_directory() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("file");
        fs::write(&file, "x").unwrap();

        let result = SiteBuilder::new(&file, temp.path().join("out")).build();
        assert!(matches!(result, Err(BuildError::InputNotDirectory(_))));
    }

    #[test]
    fn test_unreadable_markdown_is_skipped_not_fatal() {
        let temp = tempfile::tempdir().unwrap();
        let input = temp.path().join("vault");
        let output = temp.path().join("site");
        fs::create_dir_all(&input).unwrap();
        // Invalid UTF-8 makes read_to_string fail for this entry only.
        fs::write(input.join("bad.md"), [0xff, 0xfe, 0x00]).unwrap();
        fs::write(input.join("good.md"), "fine").unwrap();

        let report = build(&input, &output);
        assert_eq!(report.converted, 1);
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].path.ends_with("bad.md"));
        assert!(output.join("good.html").is_file());
        assert!(!output.join("bad.html").exists());
    }
}
