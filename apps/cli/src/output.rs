//! Identifier-scoped output directories: `<output_root>/<identifier>/`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::AppError;

/// Placeholder written next to every new résumé; the user pastes the job description into it.
pub const JOB_DESCRIPTION_FILE: &str = "job_description.txt";

/// Initial contents of `job_description.txt`.
/// `{role}` and `{company}` are left for the user to fill in.
pub const JOB_DESCRIPTION_PLACEHOLDER: &str = "Role: {role}\n\
Company: {company}\n\
\n\
Paste the job description below this line and run `resumake cover <identifier>`.\n";

/// The directory holding every artifact built for one identifier.
#[derive(Debug, Clone)]
pub struct OutputDir {
    identifier: String,
    path: PathBuf,
}

impl OutputDir {
    /// Validates the identifier and resolves its directory under `root`.
    /// Nothing is touched on disk.
    pub fn new(root: &Path, identifier: &str) -> Result<Self, AppError> {
        validate_identifier(identifier)?;
        Ok(Self {
            identifier: identifier.to_string(),
            path: root.join(identifier),
        })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn resume_source(&self) -> PathBuf {
        self.path.join(format!("resume_{}.tex", self.identifier))
    }

    pub fn resume_pdf(&self) -> PathBuf {
        self.resume_source().with_extension("pdf")
    }

    pub fn cover_source(&self) -> PathBuf {
        self.path.join(format!("cover_{}.tex", self.identifier))
    }

    pub fn cover_pdf(&self) -> PathBuf {
        self.cover_source().with_extension("pdf")
    }

    pub fn job_description(&self) -> PathBuf {
        self.path.join(JOB_DESCRIPTION_FILE)
    }

    /// Deletes the directory and everything in it, then recreates it empty.
    ///
    /// Not safe against another process building the same identifier.
    pub fn reset(&self) -> Result<(), AppError> {
        if self.path.exists() {
            debug!("Clearing {}", self.path.display());
            fs::remove_dir_all(&self.path)?;
        }
        fs::create_dir_all(&self.path)?;
        Ok(())
    }

    /// Reads the job description with the untouched placeholder lines removed.
    /// A file with nothing left after that is treated as missing.
    pub fn read_job_description(&self) -> Result<String, AppError> {
        let path = self.job_description();
        let text = fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => AppError::MissingInput(format!(
                "job description {} not found; run `create` first",
                path.display()
            )),
            _ => AppError::Io(e),
        })?;

        let stripped = strip_placeholder_preamble(&text);
        let description = stripped.trim();
        if description.is_empty() {
            return Err(AppError::MissingInput(format!(
                "{} has no job description; paste it below the placeholder lines",
                path.display()
            )));
        }
        Ok(description.to_string())
    }
}

/// Drops every line still identical to a placeholder line.
/// Filled-in lines such as `Role: Engineer` are kept.
fn strip_placeholder_preamble(text: &str) -> String {
    text.lines()
        .filter(|line| {
            let trimmed = line.trim();
            trimmed.is_empty()
                || !JOB_DESCRIPTION_PLACEHOLDER
                    .lines()
                    .any(|p| !p.is_empty() && p == trimmed)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn validate_identifier(identifier: &str) -> Result<(), AppError> {
    let trimmed = identifier.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidArgument(
            "identifier cannot be empty".to_string(),
        ));
    }
    if trimmed == "." || trimmed == ".." || identifier.contains(['/', '\\']) {
        return Err(AppError::InvalidArgument(format!(
            "identifier '{identifier}' must be a plain directory name"
        )));
    }
    Ok(())
}
