//! Output cleanup — strips cosmetic artifacts from the rewritten text before
//! it reaches the splitter. Pure string transform, idempotent, and must never
//! touch a recognized section-heading line.

use once_cell::sync::Lazy;
use regex::Regex;

/// Boilerplate phrases the model tends to echo back ("Tailored CV", ...).
static ARTIFACT_PHRASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)tailored\s+(?:cv|resume)").expect("valid artifact regex"));

/// Decorative separator runs: two or more hyphens, underscores, or equals.
static SEPARATOR_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-_=]{2,}").expect("valid separator regex"));

/// Removes artifact phrases and decorative separator runs. Everything else,
/// including heading lines and single-hyphen bullets, passes through intact.
pub fn strip_artifacts(text: &str) -> String {
    let cleaned = ARTIFACT_PHRASE.replace_all(text, "");
    SEPARATOR_RUN.replace_all(&cleaned, "").into_owned()
}
