// src/web/types.rs

use rocket::http::ContentType;
use rocket::response::{self, Responder};
use rocket::{Request, Response};
use serde::{Deserialize, Serialize};

use crate::model::{NewVersionData, ResumeVersion};
use crate::schema::FieldDescriptor;
use crate::templates::TemplateDescriptor;

pub struct PdfResponse {
    pub data: Vec<u8>,
    pub filename: String,
}

impl PdfResponse {
    pub fn new(data: Vec<u8>, filename: String) -> Self {
        Self { data, filename }
    }
}

impl<'r> Responder<'r, 'static> for PdfResponse {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        Response::build()
            .header(ContentType::PDF)
            .raw_header(
                "Content-Disposition",
                format!("inline; filename=\"{}\"", self.filename),
            )
            .sized_body(self.data.len(), std::io::Cursor::new(self.data))
            .ok()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveVersionRequest {
    pub user_identifier: String,
    pub version_data: NewVersionData,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveVersionResponse {
    pub success: bool,
    pub message: String,
    pub resume_id: String,
    pub latest_version: ResumeVersion,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestVersionResponse {
    pub success: bool,
    pub resume_id: String,
    pub versions_count: i64,
    pub latest_version: ResumeVersion,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionsResponse {
    pub success: bool,
    pub resume_id: String,
    pub versions: Vec<ResumeVersion>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    pub text: String,
    #[serde(default)]
    pub author: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub success: bool,
    pub message: String,
    pub latest_version: ResumeVersion,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicResumeResponse {
    pub success: bool,
    pub resume_id: String,
    pub latest_version: ResumeVersion,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QrResponse {
    pub success: bool,
    pub profile_url: String,
    pub qr_data_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub success: bool,
    pub summary: String,
}

/// One template gallery entry: the static descriptor plus the builder form
/// fields for its category.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateCatalogEntry {
    pub job_category: &'static str,
    pub template_key: &'static str,
    #[serde(flatten)]
    pub descriptor: &'static TemplateDescriptor,
    pub fields: &'static [FieldDescriptor],
    pub skills_hint: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatesResponse {
    pub success: bool,
    pub templates: Vec<TemplateCatalogEntry>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextResponse {
    pub success: bool,
    pub message: String,
}

impl TextResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Catcher body; mirrors the shape ApiError produces so clients see one
/// error format regardless of where the failure happened.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatcherBody {
    pub success: bool,
    pub message: &'static str,
    pub error_code: &'static str,
}

impl CatcherBody {
    pub fn new(message: &'static str, error_code: &'static str) -> Self {
        Self {
            success: false,
            message,
            error_code,
        }
    }
}
