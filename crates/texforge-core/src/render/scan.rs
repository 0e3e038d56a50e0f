//! Single-pass placeholder substitution
//!
//! The template is scanned once, left to right. At every occurrence of the
//! opening delimiter the known placeholder tokens are tried; a match is
//! replaced and scanning resumes *after* the token in the template, so
//! substituted text is never scanned again.
//!
//! # Guarantees
//!
//! - **Forward-only scanning**: position never moves backward
//! - **No recursive expansion**: a value containing `{{.other}}` is emitted verbatim
//! - **Pass-through**: delimiters that start no known token are copied as-is

/// One placeholder token and the text that replaces it
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Substitution {
    pub token: String,
    pub replacement: String,
}

/// Ordered substitution table
///
/// Longer tokens are tried first, ties broken by token text, so the result
/// does not depend on the order entries were added in.
#[derive(Debug, Default)]
pub(crate) struct SubstitutionTable {
    entries: Vec<Substitution>,
}

impl SubstitutionTable {
    pub fn new(mut entries: Vec<Substitution>) -> Self {
        entries.sort_by(|a, b| {
            b.token
                .len()
                .cmp(&a.token.len())
                .then_with(|| a.token.cmp(&b.token))
        });
        Self { entries }
    }

    fn match_at(&self, text: &str) -> Option<&Substitution> {
        self.entries.iter().find(|s| text.starts_with(s.token.as_str()))
    }
}

/// Result of a substitution pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScanOutput {
    pub text: String,
    /// Number of placeholders replaced
    pub replaced: usize,
}

/// Replace every token occurrence in `template` in a single pass
///
/// `left` must be non-empty; every token in `table` starts with it.
pub(crate) fn substitute(template: &str, left: &str, table: &SubstitutionTable) -> ScanOutput {
    let mut text = String::with_capacity(template.len());
    let mut replaced = 0;
    let mut pos = 0;

    while let Some(offset) = template[pos..].find(left) {
        let start = pos + offset;
        text.push_str(&template[pos..start]);

        let rest = &template[start..];
        match table.match_at(rest) {
            Some(sub) => {
                text.push_str(&sub.replacement);
                pos = start + sub.token.len();
                replaced += 1;
            }
            None => {
                // Step one character so overlapping delimiters are still found
                let step = rest.chars().next().map_or(1, char::len_utf8);
                text.push_str(&rest[..step]);
                pos = start + step;
            }
        }
    }

    text.push_str(&template[pos..]);
    ScanOutput { text, replaced }
}
