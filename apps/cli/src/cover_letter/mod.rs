// Content Generator Adapter: job description + résumé text in, LaTeX cover letter out.
// All model calls go through llm_client.

pub mod generator;
pub mod prompts;
pub mod resume_text;
pub mod template;

pub use generator::{CoverLetter, CoverLetterResponse, CoverLetterWriter};
pub use template::compose_cover_letter;
