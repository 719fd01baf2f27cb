//! Puts a generated letter into the header/body/footer LaTeX layout.

use crate::cover_letter::generator::CoverLetter;
use crate::latex::{END_DOCUMENT, PARAGRAPH_SPACING};

pub const ROLE_TOKEN: &str = "{role}";
pub const COMPANY_TOKEN: &str = "{company}";

/// Header template with `{role}` and `{company}` filled in, followed by the
/// paragraphs, an optional footer, and `\end{document}`.
pub fn compose_cover_letter(header: &str, footer: Option<&str>, letter: &CoverLetter) -> String {
    let mut doc = header
        .replace(ROLE_TOKEN, &letter.role)
        .replace(COMPANY_TOKEN, &letter.company);

    if !doc.ends_with('\n') {
        doc.push('\n');
    }
    doc.push('\n');
    doc.push_str(&letter.body.join(PARAGRAPH_SPACING));
    doc.push_str("\n\n");

    if let Some(footer) = footer {
        doc.push_str(footer.trim_end());
        doc.push_str("\n\n");
    }

    doc.push_str(END_DOCUMENT);
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter() -> CoverLetter {
        CoverLetter {
            role: "Engineer".to_string(),
            company: "Acme".to_string(),
            body: vec!["First.".to_string(), "Second.".to_string()],
        }
    }

    #[test]
    fn test_tokens_are_substituted_everywhere() {
        let header = "\\documentclass{letter}\n\\begin{document}\nRe: {role} at {company}, {company}\n";
        let doc = compose_cover_letter(header, None, &letter());

        assert!(doc.contains("Re: Engineer at Acme, Acme"));
        assert!(!doc.contains(ROLE_TOKEN));
        assert!(!doc.contains(COMPANY_TOKEN));
    }

    #[test]
    fn test_paragraphs_are_separated_by_spacing_directive() {
        let doc = compose_cover_letter("\\begin{document}", None, &letter());

        assert!(doc.contains("First.\n\n\\vspace{0.5em}\n\nSecond."));
        assert_eq!(doc.matches("\\vspace{0.5em}").count(), 1);
        assert!(doc.ends_with("\\end{document}\n"));
    }

    #[test]
    fn test_footer_goes_before_closing_directive() {
        let doc = compose_cover_letter("\\begin{document}\n", Some("Sincerely,\\\\Jane\n"), &letter());

        let footer_at = doc.find("Sincerely").unwrap();
        let second_at = doc.find("Second.").unwrap();
        let end_at = doc.find("\\end{document}").unwrap();
        assert!(second_at < footer_at && footer_at < end_at);
    }
}
