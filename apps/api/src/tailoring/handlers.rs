//! Axum route handlers for the Tailoring API.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::errors::AppError;
use crate::state::AppState;
use crate::tailoring::generator::{generate_document, GenerateRequest};

/// POST /api/v1/generate
///
/// Full tailoring pipeline: rewrite → cleanup → split → render.
/// Responds with the document bytes as an attachment download.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Response, AppError> {
    let document = generate_document(state.rewriter.as_ref(), request).await?;

    let headers = [
        (header::CONTENT_TYPE, document.mime_type.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", document.filename),
        ),
    ];

    Ok((headers, document.bytes).into_response())
}
