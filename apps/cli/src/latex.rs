//! LaTeX helpers shared by the résumé and cover-letter builders.

/// Spacing directive placed between two cover-letter paragraphs.
pub const PARAGRAPH_SPACING: &str = "\n\n\\vspace{0.5em}\n\n";

/// Closes every document we emit.
pub const END_DOCUMENT: &str = "\\end{document}\n";

fn replacement(c: char) -> Option<&'static str> {
    match c {
        '%' => Some("\\%"),
        '&' => Some("\\&"),
        '#' => Some("\\#"),
        '_' => Some("\\_"),
        '{' => Some("\\{"),
        '}' => Some("\\}"),
        '$' => Some("\\$"),
        '^' => Some("\\^{}"),
        '~' => Some("\\~{}"),
        _ => None,
    }
}

/// Escapes LaTeX reserved characters.
///
/// One pass over the input: the braces emitted for `^` and `~` are never
/// looked at again, so nothing gets escaped twice. Backslashes pass through.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        match replacement(c) {
            Some(r) => out.push_str(r),
            None => out.push(c),
        }
    }
    out.replace("c++", "C\\texttt{++}")
}

/// Splits text on newlines, dropping segments that are empty or whitespace-only.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}
