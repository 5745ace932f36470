// src/web/handlers/publish_handlers.rs
//! Public profile URL and QR code handlers.

use rocket::serde::json::Json;
use rocket::State;

use crate::error::ApiError;
use crate::publish::{self, Publisher, QrOptions};
use crate::web::types::QrResponse;

pub async fn get_qr_handler(
    resume_id: &str,
    publisher: &State<Publisher>,
) -> Result<Json<QrResponse>, ApiError> {
    // The QR is a pure function of the URL; no store lookup involved.
    let profile_url = publisher.profile_url(resume_id);
    let qr_data_url = publish::qr_data_url(&profile_url, &QrOptions::default())?;

    Ok(Json(QrResponse {
        success: true,
        profile_url,
        qr_data_url,
    }))
}
