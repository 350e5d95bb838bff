//! Resume Rewriter — pluggable, trait-based adapter around the LLM call.
//!
//! `AppState` holds an `Arc<dyn ResumeRewriter>`, so the generation pipeline
//! never talks to the network directly and tests swap in stubs.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::llm_client::prompts::PLAIN_TEXT_INSTRUCTION;
use crate::llm_client::LlmClient;
use crate::tailoring::prompts::{REWRITE_PROMPT_TEMPLATE, REWRITE_SYSTEM};

/// The rewriter trait. Given the candidate's résumé and the target JD, return
/// the rewritten résumé as one block of plain text, or fail.
#[async_trait]
pub trait ResumeRewriter: Send + Sync {
    async fn rewrite(&self, resume_text: &str, jd_text: &str) -> Result<String, AppError>;
}

/// Production rewriter backed by the LLM client.
pub struct LlmRewriter(pub LlmClient);

#[async_trait]
impl ResumeRewriter for LlmRewriter {
    async fn rewrite(&self, resume_text: &str, jd_text: &str) -> Result<String, AppError> {
        let prompt = build_rewrite_prompt(resume_text, jd_text);
        self.0
            .complete_text(&prompt, REWRITE_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Resume rewrite failed: {e}")))
    }
}

/// Builds the rewrite prompt by filling the template.
fn build_rewrite_prompt(resume_text: &str, jd_text: &str) -> String {
    REWRITE_PROMPT_TEMPLATE
        .replace("{jd_text}", jd_text)
        .replace("{resume_text}", resume_text)
        .replace("{plain_text_instruction}", PLAIN_TEXT_INSTRUCTION)
}
