//! Document-type detection and metadata
//!
//! Detection inspects template content for structural markers and picks the
//! first match in a fixed priority order. It never fails: content with no
//! recognizable marker is [`DocumentType::Plain`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Document dialect a template is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// LaTeX presentation (`beamer` class or package)
    Beamer,
    Latex,
    Html,
    Markdown,
    Plain,
}

/// Detection priority; the first matching type wins
const DETECTION_ORDER: [DocumentType; 4] = [
    DocumentType::Beamer,
    DocumentType::Latex,
    DocumentType::Html,
    DocumentType::Markdown,
];

impl DocumentType {
    pub const ALL: [DocumentType; 5] = [
        DocumentType::Beamer,
        DocumentType::Latex,
        DocumentType::Html,
        DocumentType::Markdown,
        DocumentType::Plain,
    ];

    /// Tag used to select a render strategy
    pub fn tag(self) -> &'static str {
        match self {
            DocumentType::Beamer => "beamer",
            DocumentType::Latex => "latex",
            DocumentType::Html => "html",
            DocumentType::Markdown => "markdown",
            DocumentType::Plain => "plain",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.tag() == tag)
    }

    /// File extension of rendered output, without the dot
    pub fn extension(self) -> &'static str {
        match self {
            DocumentType::Beamer | DocumentType::Latex => "tex",
            DocumentType::Html => "html",
            DocumentType::Markdown => "md",
            DocumentType::Plain => "txt",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            DocumentType::Beamer => "LaTeX Beamer",
            DocumentType::Latex => "LaTeX",
            DocumentType::Html => "HTML",
            DocumentType::Markdown => "Markdown",
            DocumentType::Plain => "Plain text",
        }
    }

    /// True for types compiled by a LaTeX engine
    pub fn is_latex_family(self) -> bool {
        matches!(self, DocumentType::Beamer | DocumentType::Latex)
    }

    fn matches(self, content: &str) -> bool {
        match self {
            DocumentType::Beamer => {
                content.contains("\\usepackage{beamer}")
                    || document_class(content) == Some("beamer")
            }
            DocumentType::Latex => content.contains("\\documentclass"),
            DocumentType::Html => {
                let lower = content.to_ascii_lowercase();
                lower.contains("<!doctype html") || lower.contains("<html")
            }
            DocumentType::Markdown => content.lines().any(is_markdown_heading),
            DocumentType::Plain => true,
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(&s.to_ascii_lowercase()).ok_or_else(|| {
            let known: Vec<&str> = Self::ALL.iter().map(|d| d.tag()).collect();
            format!("unknown document type '{}' (expected one of: {})", s, known.join(", "))
        })
    }
}

/// Detect the document type of template content
pub fn detect_document_type(content: &str) -> DocumentType {
    DETECTION_ORDER
        .into_iter()
        .find(|d| d.matches(content))
        .unwrap_or(DocumentType::Plain)
}

/// Class name from `\documentclass[opts]{name}`
fn document_class(content: &str) -> Option<&str> {
    let start = content.find("\\documentclass")? + "\\documentclass".len();
    let rest = content[start..].trim_start();
    let rest = match rest.strip_prefix('[') {
        Some(options) => &options[options.find(']')? + 1..],
        None => rest,
    };
    let rest = rest.trim_start().strip_prefix('{')?;
    let end = rest.find('}')?;
    Some(rest[..end].trim())
}

/// `# Title` through `###### Title`
fn is_markdown_heading(line: &str) -> bool {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    (1..=6).contains(&hashes) && line[hashes..].starts_with(' ')
}
