//! Cover letter generation — prompt the model, parse its JSON, make it LaTeX-safe.
//!
//! Flow: build prompt → ChatModel → strict parse → escape → split paragraphs.
//! A response that does not match the schema is fatal; there is no fallback text.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cover_letter::prompts::{COVER_LETTER_PROMPT_TEMPLATE, TARGET_WORDS};
use crate::errors::AppError;
use crate::latex::{escape, split_paragraphs};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{complete_json, ChatModel};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Raw JSON object the model is asked to return.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoverLetterResponse {
    pub role: String,
    pub company: String,
    pub body: String,
}

/// A generated letter, ready to drop into a LaTeX template.
/// All fields are already escaped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverLetter {
    pub role: String,
    pub company: String,
    pub body: Vec<String>,
}

impl From<CoverLetterResponse> for CoverLetter {
    fn from(raw: CoverLetterResponse) -> Self {
        Self {
            role: escape(raw.role.trim()),
            company: escape(raw.company.trim()),
            body: split_paragraphs(&escape(&raw.body)),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Writer
// ────────────────────────────────────────────────────────────────────────────

/// Turns a job description plus résumé text into a `CoverLetter` via a `ChatModel`.
pub struct CoverLetterWriter<'a> {
    model: &'a dyn ChatModel,
}

impl<'a> CoverLetterWriter<'a> {
    pub fn new(model: &'a dyn ChatModel) -> Self {
        Self { model }
    }

    pub async fn write(
        &self,
        job_description: &str,
        resume_text: &str,
    ) -> Result<CoverLetter, AppError> {
        let prompt = build_prompt(job_description, resume_text);

        let raw: CoverLetterResponse =
            complete_json(self.model, &prompt, JSON_ONLY_SYSTEM).await?;
        let letter = CoverLetter::from(raw);

        if letter.body.is_empty() {
            return Err(AppError::Schema("cover letter body is empty".to_string()));
        }

        info!(
            "Generated cover letter for {} at {} ({} paragraphs)",
            letter.role,
            letter.company,
            letter.body.len()
        );
        Ok(letter)
    }
}

fn build_prompt(job_description: &str, resume_text: &str) -> String {
    COVER_LETTER_PROMPT_TEMPLATE
        .replace("{target_words}", &TARGET_WORDS.to_string())
        .replace("{resume_text}", resume_text.trim())
        .replace("{job_description}", job_description.trim())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
