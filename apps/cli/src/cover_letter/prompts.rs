// LLM prompt constants for cover-letter generation.

/// Target length of the generated body. About one typeset page.
pub const TARGET_WORDS: u32 = 750;

/// Cover letter prompt template.
/// Replace: {target_words}, {resume_text}, {job_description}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write the body of a professional, concise cover letter for a software developer.

How to write it:
- Study the job description for the key qualifications it asks for.
- Open with a short introduction of the candidate and their career goals.
- Highlight the candidate's skills that match the role, backed by concrete examples from the resume.
- Mention what is distinctive about the company (mission, product, values) and how it lines up with the candidate.
- Close by restating why the candidate fits and inviting further discussion.
- Use the terminology of the job description.

Length: around {target_words} words (one page), split into several paragraphs separated by a newline character (\n).

Return a JSON object with this EXACT schema (no extra fields):
{
  "role": "the role title taken from the job description",
  "company": "the company name taken from the job description",
  "body": "the cover letter body"
}

HARD RULES:
1. The body contains NO salutation, NO greeting, NO sign-off, NO "regards" and NO contact details. Only the paragraphs.
2. The output is parsed by a program: nothing outside the JSON object.
3. The body must be close to {target_words} words.

CANDIDATE RESUME:
{resume_text}

JOB DESCRIPTION:
{job_description}"#;
