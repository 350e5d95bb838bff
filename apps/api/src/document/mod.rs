// Document core: section model, shared heading matcher, and the two renderers.
// The label set and matching rule are defined exactly once here — the splitter
// and both renderers must agree on what counts as a heading.

pub mod docx;
pub mod pdf;
pub mod splitter;

use thiserror::Error;

/// The recognized section headings, in the order the rewrite prompt requests them.
///
/// This is configuration, not data: the splitter and both renderers reuse this
/// exact list so a heading recognized in one format is recognized in the other.
pub const SECTION_LABELS: [&str; 6] = [
    "Summary",
    "Key Skills",
    "Professional Experience",
    "Education",
    "Certifications",
    "Additional Information",
];

/// A heading/body pair extracted from the rewritten résumé text.
///
/// `heading: None` marks the unlabeled leading fragment (typically the
/// name/contact block before the first recognized heading).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: Option<String>,
    pub body: String,
}

/// Tests whether `line` is a heading line, returning the matched label.
///
/// Anchored rule: after optional leading whitespace the line must start with
/// the exact label spelling (case-sensitive), followed only by optional
/// whitespace, at most one colon, and optional trailing whitespace. A label
/// embedded in prose ("Education is my passion") is not a heading.
pub fn match_label<'a>(line: &str, labels: &[&'a str]) -> Option<&'a str> {
    let trimmed = line.trim_start();
    for &label in labels {
        if let Some(rest) = trimmed.strip_prefix(label) {
            let rest = rest.trim_start();
            let rest = rest.strip_prefix(':').unwrap_or(rest);
            if rest.trim().is_empty() {
                return Some(label);
            }
        }
    }
    None
}

// ────────────────────────────────────────────────────────────────────────────
// Output format
// ────────────────────────────────────────────────────────────────────────────

/// The two supported download formats. Anything unrecognized defaults to docx.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Docx,
    Pdf,
}

impl OutputFormat {
    /// Parses the request's `format` field. Absent or unknown values → docx.
    pub fn from_param(param: Option<&str>) -> Self {
        match param.map(str::trim) {
            Some(p) if p.eq_ignore_ascii_case("pdf") => OutputFormat::Pdf,
            _ => OutputFormat::Docx,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Docx => "docx",
            OutputFormat::Pdf => "pdf",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            OutputFormat::Pdf => "application/pdf",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Shared visual style
// ────────────────────────────────────────────────────────────────────────────

/// Title font size in points (bold).
pub const TITLE_SIZE_PT: u32 = 18;
/// Section heading font size in points (bold, level-2 weight).
pub const HEADING_SIZE_PT: u32 = 14;
/// Body font size in points.
pub const BODY_SIZE_PT: u32 = 11;
/// Vertical space after each body paragraph, in points.
pub const PARAGRAPH_SPACE_PT: u32 = 6;
/// Vertical space before each section heading, in points.
pub const SECTION_SPACE_PT: u32 = 12;

/// Rendering failed at the output-stream level. Content shape never causes
/// this; both renderers accept empty sections, duplicates, and unicode.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("docx packaging failed: {0}")]
    Docx(String),

    #[error("pdf serialization failed: {0}")]
    Pdf(String),
}
