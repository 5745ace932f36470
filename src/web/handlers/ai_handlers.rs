// src/web/handlers/ai_handlers.rs
//! Summary-generation handler; proxies to the configured AI service.

use rocket::serde::json::Json;
use rocket::State;

use crate::ai::{SummaryClient, SummaryRequest};
use crate::error::ApiError;
use crate::web::types::SummaryResponse;

pub async fn generate_summary_handler(
    request: Json<SummaryRequest>,
    client: &State<SummaryClient>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let summary = client.generate(&request.into_inner()).await?;

    Ok(Json(SummaryResponse {
        success: true,
        summary,
    }))
}
