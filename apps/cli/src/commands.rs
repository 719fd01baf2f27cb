//! Command handlers. Each one is a straight line of blocking steps; any error
//! ends the command and is reported by `main`.

use std::fs;

use tracing::info;

use crate::cover_letter::resume_text::first_page_text;
use crate::cover_letter::{compose_cover_letter, CoverLetterWriter};
use crate::errors::AppError;
use crate::fragments::{ResumeType, COVER_FOOTER, COVER_HEADER};
use crate::llm_client::ChatModel;
use crate::output::OutputDir;
use crate::render::RenderOutcome;
use crate::state::AppState;

/// `create <resume_type> <identifier>`: rebuild the résumé source from fragments and render it.
pub async fn create(
    state: &AppState,
    resume_type: &str,
    identifier: &str,
) -> Result<RenderOutcome, AppError> {
    let resume_type = ResumeType::parse(resume_type, &state.config.resume_types)?;
    let output = OutputDir::new(&state.config.output_root, identifier)?;

    let artifacts = state.assembler.build(&resume_type, &output)?;
    info!(
        "Assembled {} fragments into {}",
        artifacts.fragments_used,
        artifacts.source.display()
    );

    state.renderer.render(&artifacts.source).await
}

/// `generate <identifier>`: render the existing résumé source without rebuilding it.
pub async fn generate(state: &AppState, identifier: &str) -> Result<RenderOutcome, AppError> {
    let output = OutputDir::new(&state.config.output_root, identifier)?;
    let source = output.resume_source();
    if !source.is_file() {
        return Err(AppError::MissingInput(format!(
            "{} not found; run `create <resume_type> {identifier}` first",
            source.display()
        )));
    }

    state.renderer.render(&source).await
}

/// `cover <identifier>`: generate, render and keep only the PDF of a cover letter.
pub async fn cover(state: &AppState, identifier: &str) -> Result<RenderOutcome, AppError> {
    let output = OutputDir::new(&state.config.output_root, identifier)?;
    let client = state.llm_client()?;
    info!("Using model {}", client.model());

    let resume_text = first_page_text(&output.resume_pdf())?;
    write_cover_letter(state, &output, &client, &resume_text).await
}

/// Everything `cover` does once the résumé text is known.
pub async fn write_cover_letter(
    state: &AppState,
    output: &OutputDir,
    model: &dyn ChatModel,
    resume_text: &str,
) -> Result<RenderOutcome, AppError> {
    let job_description = output.read_job_description()?;
    let store = state.assembler.store();
    let header = store.read_required(COVER_HEADER)?;
    let footer = store.read_optional(COVER_FOOTER)?;

    let letter = CoverLetterWriter::new(model)
        .write(&job_description, resume_text)
        .await?;

    let source = output.cover_source();
    fs::write(
        &source,
        compose_cover_letter(&header, footer.as_deref(), &letter),
    )?;

    let outcome = state.renderer.render(&source).await?;
    if let RenderOutcome::Rendered { .. } = outcome {
        fs::remove_file(&source)?;
        info!("Removed intermediate {}", source.display());
    }
    Ok(outcome)
}
