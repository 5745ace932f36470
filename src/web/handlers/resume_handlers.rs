// src/web/handlers/resume_handlers.rs
//! Version store, feedback and export handlers.

use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::State;
use tracing::info;

use crate::error::ApiError;
use crate::store::{DatabaseConfig, ResumeStore};
use crate::web::types::*;
use crate::{export, schema, templates};

pub async fn save_version_handler(
    request: Json<SaveVersionRequest>,
    db_config: &State<DatabaseConfig>,
) -> Result<status::Custom<Json<SaveVersionResponse>>, ApiError> {
    let request = request.into_inner();
    let store = ResumeStore::new(db_config.pool()?);

    let (resume_id, latest_version) = store
        .append_version(&request.user_identifier, request.version_data)
        .await?;

    info!(
        "Saved resume version for {} (resume {})",
        request.user_identifier, resume_id
    );

    Ok(status::Custom(
        Status::Created,
        Json(SaveVersionResponse {
            success: true,
            message: "Resume version saved".to_string(),
            resume_id,
            latest_version,
        }),
    ))
}

pub async fn get_latest_handler(
    user_identifier: &str,
    db_config: &State<DatabaseConfig>,
) -> Result<Json<LatestVersionResponse>, ApiError> {
    let store = ResumeStore::new(db_config.pool()?);
    let (resume_id, latest_version, versions_count) = store.get_latest(user_identifier).await?;

    Ok(Json(LatestVersionResponse {
        success: true,
        resume_id,
        versions_count,
        latest_version,
    }))
}

pub async fn list_versions_handler(
    user_identifier: &str,
    db_config: &State<DatabaseConfig>,
) -> Result<Json<VersionsResponse>, ApiError> {
    let store = ResumeStore::new(db_config.pool()?);
    let (resume_id, versions) = store.list_versions(user_identifier).await?;

    Ok(Json(VersionsResponse {
        success: true,
        resume_id,
        versions,
    }))
}

pub async fn add_comment_handler(
    resume_id: &str,
    request: Json<CommentRequest>,
    db_config: &State<DatabaseConfig>,
) -> Result<status::Custom<Json<CommentResponse>>, ApiError> {
    let request = request.into_inner();
    let store = ResumeStore::new(db_config.pool()?);

    let latest_version = store
        .add_comment(resume_id, &request.text, request.author)
        .await?;

    Ok(status::Custom(
        Status::Created,
        Json(CommentResponse {
            success: true,
            message: "Comment added".to_string(),
            latest_version,
        }),
    ))
}

pub async fn get_public_handler(
    resume_id: &str,
    db_config: &State<DatabaseConfig>,
) -> Result<Json<PublicResumeResponse>, ApiError> {
    let store = ResumeStore::new(db_config.pool()?);
    let latest_version = store.get_public(resume_id).await?;

    Ok(Json(PublicResumeResponse {
        success: true,
        resume_id: resume_id.to_string(),
        latest_version,
    }))
}

pub async fn export_pdf_handler(
    resume_id: &str,
    db_config: &State<DatabaseConfig>,
) -> Result<PdfResponse, ApiError> {
    let store = ResumeStore::new(db_config.pool()?);
    let version = store.get_public(resume_id).await?;

    let descriptor = templates::resolve(&version.content.job_category, &version.content.template_key);
    let filename = export::pdf_filename(&version.content.full_name);
    let data = export::render_pdf(&version, descriptor)?;

    info!("Rendered PDF for resume {} ({} bytes)", resume_id, data.len());
    Ok(PdfResponse::new(data, filename))
}

pub async fn get_templates_handler() -> Json<TemplatesResponse> {
    let templates = templates::catalog()
        .into_iter()
        .map(|(job_category, template_key, descriptor)| TemplateCatalogEntry {
            job_category,
            template_key,
            descriptor,
            fields: schema::fields_for(job_category),
            skills_hint: schema::skills_hint(job_category),
        })
        .collect();

    Json(TemplatesResponse {
        success: true,
        templates,
    })
}

pub async fn health_handler() -> Json<TextResponse> {
    Json(TextResponse::success("Resume builder API is running"))
}
