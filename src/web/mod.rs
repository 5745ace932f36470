// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use types::*;

use crate::ai::{SummaryClient, SummaryRequest};
use crate::environment::EnvironmentConfig;
use crate::error::ApiError;
use crate::publish::Publisher;
use crate::store::DatabaseConfig;
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Request, Response, State};
use tracing::{error, info};

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
    }
}

#[post("/resumes", data = "<request>")]
pub async fn save_version(
    request: Json<SaveVersionRequest>,
    db_config: &State<DatabaseConfig>,
) -> Result<status::Custom<Json<SaveVersionResponse>>, ApiError> {
    handlers::save_version_handler(request, db_config).await
}

#[get("/resumes/latest/<user_identifier>")]
pub async fn get_latest(
    user_identifier: &str,
    db_config: &State<DatabaseConfig>,
) -> Result<Json<LatestVersionResponse>, ApiError> {
    handlers::get_latest_handler(user_identifier, db_config).await
}

#[get("/resumes/versions/<user_identifier>")]
pub async fn list_versions(
    user_identifier: &str,
    db_config: &State<DatabaseConfig>,
) -> Result<Json<VersionsResponse>, ApiError> {
    handlers::list_versions_handler(user_identifier, db_config).await
}

#[post("/resumes/<resume_id>/comments", data = "<request>")]
pub async fn add_comment(
    resume_id: &str,
    request: Json<CommentRequest>,
    db_config: &State<DatabaseConfig>,
) -> Result<status::Custom<Json<CommentResponse>>, ApiError> {
    handlers::add_comment_handler(resume_id, request, db_config).await
}

#[get("/resumes/<resume_id>/pdf", rank = 2)]
pub async fn export_pdf(
    resume_id: &str,
    db_config: &State<DatabaseConfig>,
) -> Result<PdfResponse, ApiError> {
    handlers::export_pdf_handler(resume_id, db_config).await
}

#[get("/resumes/<resume_id>/qr", rank = 2)]
pub async fn get_qr(
    resume_id: &str,
    publisher: &State<Publisher>,
) -> Result<Json<QrResponse>, ApiError> {
    handlers::get_qr_handler(resume_id, publisher).await
}

#[get("/public/resume/<resume_id>")]
pub async fn get_public(
    resume_id: &str,
    db_config: &State<DatabaseConfig>,
) -> Result<Json<PublicResumeResponse>, ApiError> {
    handlers::get_public_handler(resume_id, db_config).await
}

#[post("/ai/summary", data = "<request>")]
pub async fn generate_summary(
    request: Json<SummaryRequest>,
    client: &State<SummaryClient>,
) -> Result<Json<SummaryResponse>, ApiError> {
    handlers::generate_summary_handler(request, client).await
}

#[get("/templates")]
pub async fn get_templates() -> Json<TemplatesResponse> {
    handlers::get_templates_handler().await
}

#[get("/health")]
pub async fn health() -> Json<TextResponse> {
    handlers::health_handler().await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<CatcherBody> {
    Json(CatcherBody::new("Invalid request format", "BAD_REQUEST"))
}

#[rocket::catch(404)]
pub fn not_found() -> Json<CatcherBody> {
    Json(CatcherBody::new("Resource not found", "NOT_FOUND"))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<CatcherBody> {
    Json(CatcherBody::new("Internal server error", "INTERNAL_ERROR"))
}

pub fn build_rocket(
    figment: rocket::figment::Figment,
    db_config: DatabaseConfig,
    publisher: Publisher,
    summary_client: SummaryClient,
) -> rocket::Rocket<rocket::Build> {
    rocket::custom(figment)
        .attach(Cors)
        .manage(db_config)
        .manage(publisher)
        .manage(summary_client)
        .register("/api", catchers![bad_request, not_found, internal_error])
        .mount(
            "/api",
            routes![
                save_version,
                get_latest,
                list_versions,
                add_comment,
                export_pdf,
                get_qr,
                get_public,
                generate_summary,
                get_templates,
                health,
                options,
            ],
        )
}

// Main server start function
pub async fn start_web_server(env: EnvironmentConfig) -> Result<()> {
    let mut db_config = DatabaseConfig::new(env.database_path.clone());

    if let Err(e) = db_config.init_pool().await {
        error!("Failed to initialize database: {}", e);
        return Err(e);
    }

    if let Err(e) = db_config.migrate().await {
        error!("Failed to run database migrations: {}", e);
        return Err(e);
    }

    let publisher = Publisher::new(env.public_base_url.clone());
    let summary_client = SummaryClient::new(env.ai_service_url.clone())?;

    info!("Starting resume builder API server");
    info!("Database: {}", db_config.database_path.display());
    info!("Public base URL: {}", env.public_base_url);

    let figment = rocket::Config::figment()
        .merge(("port", env.port))
        .merge(("address", "0.0.0.0"));

    let _rocket = build_rocket(figment, db_config, publisher, summary_client)
        .launch()
        .await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store;
    use rocket::local::asynchronous::Client;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_client() -> Client {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory sqlite");
        store::migrate(&pool).await.expect("migrations");

        let db_config = DatabaseConfig {
            database_path: ":memory:".into(),
            pool: Some(pool),
        };
        let publisher = Publisher::new("http://localhost:5173");
        let summary_client =
            SummaryClient::new("http://localhost:9".to_string()).expect("summary client");

        Client::tracked(build_rocket(
            rocket::Config::figment(),
            db_config,
            publisher,
            summary_client,
        ))
        .await
        .expect("rocket client")
    }

    #[rocket::async_test]
    async fn test_qr_is_minted_for_any_resume_id() {
        let client = test_client().await;

        let response = client.get("/api/resumes/no-such-id/qr").dispatch().await;
        assert_eq!(response.status(), Status::Ok);

        let body = response.into_string().await.expect("body");
        assert!(body.contains("http://localhost:5173/profile/no-such-id"));
        assert!(body.contains("data:image/png;base64,"));
    }

    #[rocket::async_test]
    async fn test_public_resume_unknown_id_is_404() {
        let client = test_client().await;
        let response = client.get("/api/public/resume/no-such-id").dispatch().await;
        assert_eq!(response.status(), Status::NotFound);
    }
}
