//! Section Assembler — concatenates LaTeX fragments into one résumé source.
//!
//! Order: shared prefix (design, header, education) → type-specific skills and
//! experience → shared suffix (certifications) → `\end{document}`.
//! Missing fragments are skipped with a warning; the build carries on.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::errors::AppError;
use crate::latex::END_DOCUMENT;
use crate::output::{OutputDir, JOB_DESCRIPTION_PLACEHOLDER};

const SHARED_PREFIX: &[&str] = &["design.tex", "header.tex", "education.tex"];
const SHARED_SUFFIX: &[&str] = &["certifications.tex"];

pub const COVER_HEADER: &str = "cover_header.tex";
pub const COVER_FOOTER: &str = "cover_footer.tex";

// ────────────────────────────────────────────────────────────────────────────
// Resume type
// ────────────────────────────────────────────────────────────────────────────

/// A resume-type tag known to be in the configured allowed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeType(String);

impl ResumeType {
    /// Accepts `raw` only if it is exactly one of the allowed tags.
    pub fn parse(raw: &str, allowed: &[String]) -> Result<Self, AppError> {
        if allowed.iter().any(|a| a == raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(AppError::InvalidArgument(invalid_type_message(raw, allowed)))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResumeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn invalid_type_message(raw: &str, allowed: &[String]) -> String {
    let mut msg = format!("Invalid resume type: {raw}\nValid resume types are:");
    for t in allowed {
        msg.push_str("\n - ");
        msg.push_str(t);
    }
    msg
}

// ────────────────────────────────────────────────────────────────────────────
// Fragment store
// ────────────────────────────────────────────────────────────────────────────

/// Read-only directory of named LaTeX fragments.
#[derive(Debug, Clone)]
pub struct FragmentStore {
    dir: PathBuf,
}

impl FragmentStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the fragment, or `None` (with a warning) when the file is absent.
    pub fn read_optional(&self, name: &str) -> Result<Option<String>, AppError> {
        let path = self.dir.join(name);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("Warning: {} does not exist.", path.display());
                Ok(None)
            }
            Err(e) => Err(AppError::Io(e)),
        }
    }

    pub fn read_required(&self, name: &str) -> Result<String, AppError> {
        let path = self.dir.join(name);
        fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                AppError::MissingInput(format!("fragment {} not found", path.display()))
            }
            _ => AppError::Io(e),
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Assembler
// ────────────────────────────────────────────────────────────────────────────

/// Paths written by a successful build.
#[derive(Debug, Clone)]
pub struct BuildArtifacts {
    pub source: PathBuf,
    pub job_description: PathBuf,
    pub fragments_used: usize,
}

pub struct SectionAssembler {
    store: FragmentStore,
}

impl SectionAssembler {
    pub fn new(store: FragmentStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &FragmentStore {
        &self.store
    }

    /// Fragment file names for one resume type, in document order.
    pub fn section_order(resume_type: &ResumeType) -> Vec<String> {
        SHARED_PREFIX
            .iter()
            .map(|s| s.to_string())
            .chain([
                format!("skills_{resume_type}.tex"),
                format!("experience_{resume_type}.tex"),
            ])
            .chain(SHARED_SUFFIX.iter().map(|s| s.to_string()))
            .collect()
    }

    /// Concatenates every present fragment (each followed by a newline) and closes the document.
    /// Returns the text and how many fragments were found.
    pub fn assemble(&self, resume_type: &ResumeType) -> Result<(String, usize), AppError> {
        let mut content = String::new();
        let mut used = 0;

        for section in Self::section_order(resume_type) {
            if let Some(text) = self.store.read_optional(&section)? {
                content.push_str(&text);
                content.push('\n');
                used += 1;
            }
        }

        content.push_str(END_DOCUMENT);
        Ok((content, used))
    }

    /// Assembles the résumé, clears the identifier's directory, then writes the
    /// source and the job-description placeholder.
    pub fn build(
        &self,
        resume_type: &ResumeType,
        output: &OutputDir,
    ) -> Result<BuildArtifacts, AppError> {
        let (content, fragments_used) = self.assemble(resume_type)?;

        output.reset()?;

        let source = output.resume_source();
        fs::write(&source, content)?;

        let job_description = output.job_description();
        fs::write(&job_description, JOB_DESCRIPTION_PLACEHOLDER)?;

        info!(
            "Resume for {} has been built and saved to {}",
            resume_type,
            source.display()
        );
        info!(
            "Job description placeholder has been created at {}",
            job_description.display()
        );

        Ok(BuildArtifacts {
            source,
            job_description,
            fragments_used,
        })
    }
}
