//! Generation pipeline — orchestrates one tailoring request end to end.
//!
//! Flow: validate inputs → rewrite via LLM → cleanup filter → title
//! resolution → section split → render to the requested format.
//!
//! Validation happens before the rewriter call, so bad input never costs an
//! LLM round trip. Rendering happens entirely in memory; a byte stream is
//! returned only when the whole document succeeded.

use serde::Deserialize;
use tracing::info;

use crate::document::splitter::split;
use crate::document::{docx::render_docx, pdf::render_pdf, OutputFormat, SECTION_LABELS};
use crate::errors::AppError;
use crate::tailoring::cleanup::strip_artifacts;
use crate::tailoring::rewriter::ResumeRewriter;
use crate::tailoring::title::resolve_title;

// ────────────────────────────────────────────────────────────────────────────
// Request / response types
// ────────────────────────────────────────────────────────────────────────────

/// Request body for document generation.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub resume_text: String,
    pub jd_text: String,
    /// Explicit target role. When absent the title is extracted from the JD.
    pub target_title: Option<String>,
    /// "docx" or "pdf"; absent or unrecognized values default to docx.
    pub format: Option<String>,
}

/// A fully rendered downloadable document.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub mime_type: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs the full tailoring pipeline and returns the rendered document.
pub async fn generate_document(
    rewriter: &dyn ResumeRewriter,
    request: GenerateRequest,
) -> Result<RenderedDocument, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }
    if request.jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }

    let format = OutputFormat::from_param(request.format.as_deref());

    let rewritten = rewriter
        .rewrite(&request.resume_text, &request.jd_text)
        .await?;

    let cleaned = strip_artifacts(&rewritten);
    let title = resolve_title(request.target_title.as_deref(), &request.jd_text);
    let sections = split(&cleaned, &SECTION_LABELS);
    info!(
        "Rendering {} section(s) as {} for '{}'",
        sections.len(),
        format.extension(),
        title.stem
    );

    let bytes = match format {
        OutputFormat::Docx => render_docx(&title.display, &sections)?,
        OutputFormat::Pdf => render_pdf(&title.display, &sections)?,
    };

    Ok(RenderedDocument {
        filename: format!("{}.{}", title.stem, format.extension()),
        mime_type: format.mime_type(),
        bytes,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests — end-to-end scenarios against stub rewriters
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;

    const RESUME: &str = "John Doe\nSummary\nExperienced engineer.\nKey Skills\n- Go\n- Rust";
    const JD: &str = "Hiring for Senior Backend Engineer";

    /// Returns a canned rewrite and counts how often it was called.
    struct StubRewriter {
        output: String,
        calls: AtomicUsize,
    }

    impl StubRewriter {
        fn new(output: &str) -> Self {
            StubRewriter {
                output: output.to_string(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ResumeRewriter for StubRewriter {
        async fn rewrite(&self, _resume_text: &str, _jd_text: &str) -> Result<String, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.output.clone())
        }
    }

    /// Simulates an upstream failure.
    struct FailingRewriter;

    #[async_trait]
    impl ResumeRewriter for FailingRewriter {
        async fn rewrite(&self, _resume_text: &str, _jd_text: &str) -> Result<String, AppError> {
            Err(AppError::Llm("upstream unavailable".to_string()))
        }
    }

    fn request(format: Option<&str>) -> GenerateRequest {
        GenerateRequest {
            resume_text: RESUME.to_string(),
            jd_text: JD.to_string(),
            target_title: None,
            format: format.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_docx_generation_end_to_end() {
        let rewriter = StubRewriter::new(RESUME);
        let doc = generate_document(&rewriter, request(Some("docx"))).await.unwrap();

        assert_eq!(doc.filename, "Senior_Backend_Engineer.docx");
        assert!(doc.mime_type.contains("wordprocessingml"));
        assert!(!doc.bytes.is_empty());
        assert_eq!(&doc.bytes[..2], b"PK");
    }

    #[tokio::test]
    async fn test_pdf_generation_end_to_end() {
        let rewriter = StubRewriter::new(RESUME);
        let doc = generate_document(&rewriter, request(Some("pdf"))).await.unwrap();

        assert!(doc.filename.ends_with(".pdf"));
        assert_eq!(doc.mime_type, "application/pdf");
        assert!(doc.bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_missing_format_defaults_to_docx() {
        let rewriter = StubRewriter::new(RESUME);
        let doc = generate_document(&rewriter, request(None)).await.unwrap();
        assert!(doc.filename.ends_with(".docx"));
    }

    #[tokio::test]
    async fn test_empty_resume_fails_before_rewrite_call() {
        let rewriter = StubRewriter::new(RESUME);
        let mut req = request(None);
        req.resume_text = "   ".to_string();

        let err = generate_document(&rewriter, req).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(rewriter.calls.load(Ordering::SeqCst), 0, "no LLM call on invalid input");
    }

    #[tokio::test]
    async fn test_empty_jd_fails_validation() {
        let rewriter = StubRewriter::new(RESUME);
        let mut req = request(None);
        req.jd_text = String::new();

        let err = generate_document(&rewriter, req).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates_without_bytes() {
        let err = generate_document(&FailingRewriter, request(Some("pdf")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }

    #[tokio::test]
    async fn test_explicit_target_title_drives_filename() {
        let rewriter = StubRewriter::new(RESUME);
        let mut req = request(Some("docx"));
        req.target_title = Some("platform engineer".to_string());

        let doc = generate_document(&rewriter, req).await.unwrap();
        assert_eq!(doc.filename, "Platform_Engineer.docx");
    }

    #[tokio::test]
    async fn test_headingless_rewrite_still_renders() {
        let rewriter = StubRewriter::new("Just one paragraph, no recognized headings.");
        let doc = generate_document(&rewriter, request(None)).await.unwrap();
        assert_eq!(&doc.bytes[..2], b"PK");
    }
}
