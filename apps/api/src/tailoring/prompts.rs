// All LLM prompt constants for the tailoring module.
// Reuses the cross-cutting plain-text fragment from llm_client::prompts.

/// System prompt for the résumé rewrite call.
pub const REWRITE_SYSTEM: &str =
    "You are a professional resume optimizer. \
    You rewrite resumes to be ATS-friendly and precisely tailored to a target job description. \
    Use concise bullet points, strong action verbs, and relevant keywords from the job description. \
    Never invent experience the candidate does not have.";

/// Rewrite prompt template. Replace `{jd_text}` and `{resume_text}` before sending.
///
/// The section names listed here must match the recognized label set exactly —
/// the splitter keys on these spellings.
pub const REWRITE_PROMPT_TEMPLATE: &str = r#"Rewrite the following CV so it is ATS-friendly and tailored to the job description.

Structure the output using exactly these section headings, each on its own line:
- Summary
- Key Skills
- Professional Experience
- Education
- Certifications (if any)
- Additional Information (if any)

Keep the candidate's name and contact details as the first lines, before any heading.

=== JOB DESCRIPTION ===
{jd_text}

=== EXISTING CV ===
{resume_text}

{plain_text_instruction}
"#;
