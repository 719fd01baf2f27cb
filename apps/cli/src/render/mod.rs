//! Render Adapter — runs the external typesetter on a `.tex` source.
//!
//! After a successful run every file in the source's directory is deleted
//! unless it is a `.tex` source, a `.pdf` output, or a retained file name
//! (the job-description placeholder). A failed run leaves everything in place.

use std::fs;
use std::path::{Path, PathBuf};

use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::errors::AppError;

const KEPT_EXTENSIONS: &[&str] = &["tex", "pdf"];

#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Typesetter executable, `pdflatex` by default.
    pub program: String,
    /// File names that survive cleanup regardless of extension.
    pub retained_files: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered { pdf: PathBuf },
    /// The host OS has no supported typesetter; nothing was run.
    Unsupported,
}

pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn is_supported_platform() -> bool {
        cfg!(any(target_os = "linux", target_os = "macos"))
    }

    /// Renders `source` into a PDF next to it.
    pub async fn render(&self, source: &Path) -> Result<RenderOutcome, AppError> {
        if !Self::is_supported_platform() {
            warn!(
                "Rendering is not supported on {}; {} was left as is",
                std::env::consts::OS,
                source.display()
            );
            return Ok(RenderOutcome::Unsupported);
        }

        if !source.is_file() {
            return Err(AppError::MissingInput(format!(
                "source {} not found",
                source.display()
            )));
        }

        let dir = source
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        info!("Rendering {} with {}", source.display(), self.config.program);

        let status = Command::new(&self.config.program)
            .arg("-interaction=nonstopmode")
            .arg("-output-directory")
            .arg(dir)
            .arg(source)
            .status()
            .await
            .map_err(|e| {
                AppError::Render(format!("could not run {}: {e}", self.config.program))
            })?;

        if !status.success() {
            return Err(AppError::Render(format!(
                "{} exited with {} while rendering {}",
                self.config.program,
                status,
                source.display()
            )));
        }

        let removed = clean_build_artifacts(dir, &self.config.retained_files)?;
        debug!("Removed {} build artifacts from {}", removed, dir.display());

        let pdf = source.with_extension("pdf");
        info!("Rendered {}", pdf.display());
        Ok(RenderOutcome::Rendered { pdf })
    }
}

/// Deletes every regular file in `dir` that is not a `.tex`/`.pdf` file or a
/// retained name. Subdirectories are left alone. Returns how many files went.
pub fn clean_build_artifacts(dir: &Path, retained: &[String]) -> Result<usize, AppError> {
    let mut removed = 0;

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let path = entry.path();
        if is_kept(&path, retained) {
            continue;
        }

        fs::remove_file(&path)?;
        removed += 1;
    }

    Ok(removed)
}

fn is_kept(path: &Path, retained: &[String]) -> bool {
    let kept_extension = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| KEPT_EXTENSIONS.contains(&e));
    let retained_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| retained.iter().any(|r| r == n));
    kept_extension || retained_name
}

#[cfg(test)]
mod tests {
    use super::*;

    fn retained() -> Vec<String> {
        vec!["job_description.txt".to_string()]
    }

    fn touch(dir: &Path, names: &[&str]) {
        for name in names {
            fs::write(dir.join(name), "x").unwrap();
        }
    }

    fn listing(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_cleanup_keeps_only_sources_outputs_and_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        touch(
            dir.path(),
            &[
                "resume_acme.tex",
                "resume_acme.pdf",
                "resume_acme.aux",
                "resume_acme.log",
                "resume_acme.out",
                "job_description.txt",
                "notes.txt",
            ],
        );

        let removed = clean_build_artifacts(dir.path(), &retained()).unwrap();

        assert_eq!(removed, 4);
        assert_eq!(
            listing(dir.path()),
            vec!["job_description.txt", "resume_acme.pdf", "resume_acme.tex"]
        );
    }

    #[cfg(any(target_os = "linux", target_os = "macos"))]
    #[test]
    fn test_linux_and_macos_are_supported() {
        assert!(Renderer::is_supported_platform());
    }

    #[test]
    fn test_cleanup_leaves_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("figures")).unwrap();

        assert_eq!(clean_build_artifacts(dir.path(), &retained()).unwrap(), 0);
        assert!(dir.path().join("figures").is_dir());
    }

    #[cfg(unix)]
    mod with_fake_typesetter {
        use std::os::unix::fs::PermissionsExt;

        use super::*;

        /// Writes a shell script standing in for pdflatex. It receives the same
        /// arguments: flags, `-output-directory <dir>`, then the source.
        fn fake_program(dir: &Path, body: &str) -> String {
            let path = dir.join("fake-latex.sh");
            fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path.to_string_lossy().into_owned()
        }

        #[tokio::test]
        async fn test_successful_render_cleans_artifacts() {
            let bin = tempfile::tempdir().unwrap();
            let program = fake_program(
                bin.path(),
                r#"out="$3"; src="$4"; base=$(basename "$src" .tex)
touch "$out/$base.pdf" "$out/$base.aux" "$out/$base.log""#,
            );
            let work = tempfile::tempdir().unwrap();
            touch(work.path(), &["resume_acme.tex", "job_description.txt"]);
            let renderer = Renderer::new(RenderConfig {
                program,
                retained_files: retained(),
            });

            let source = work.path().join("resume_acme.tex");
            let outcome = renderer.render(&source).await.unwrap();

            assert_eq!(
                outcome,
                RenderOutcome::Rendered {
                    pdf: work.path().join("resume_acme.pdf")
                }
            );
            assert_eq!(
                listing(work.path()),
                vec!["job_description.txt", "resume_acme.pdf", "resume_acme.tex"]
            );
        }

        #[tokio::test]
        async fn test_failed_render_is_fatal_and_skips_cleanup() {
            let bin = tempfile::tempdir().unwrap();
            let program = fake_program(bin.path(), r#"touch "$3/partial.log"; exit 1"#);
            let work = tempfile::tempdir().unwrap();
            touch(work.path(), &["resume_acme.tex"]);
            let renderer = Renderer::new(RenderConfig {
                program,
                retained_files: retained(),
            });

            let err = renderer
                .render(&work.path().join("resume_acme.tex"))
                .await
                .unwrap_err();

            assert!(matches!(err, AppError::Render(_)));
            assert!(work.path().join("partial.log").exists());
        }
    }

    #[tokio::test]
    async fn test_missing_program_is_a_render_error() {
        if !Renderer::is_supported_platform() {
            return;
        }
        let work = tempfile::tempdir().unwrap();
        touch(work.path(), &["resume_acme.tex"]);
        let renderer = Renderer::new(RenderConfig {
            program: "resumake-no-such-typesetter".to_string(),
            retained_files: retained(),
        });

        let err = renderer
            .render(&work.path().join("resume_acme.tex"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Render(_)));
    }

    #[tokio::test]
    async fn test_missing_source_is_missing_input() {
        if !Renderer::is_supported_platform() {
            return;
        }
        let work = tempfile::tempdir().unwrap();
        let renderer = Renderer::new(RenderConfig {
            program: "pdflatex".to_string(),
            retained_files: retained(),
        });

        let err = renderer
            .render(&work.path().join("resume_acme.tex"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MissingInput(_)));
    }
}
