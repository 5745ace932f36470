// src/store.rs
//! Append-only resume persistence.
//!
//! Versions and comments live in their own tables so every mutation is a
//! single `INSERT`: concurrent version-appends and comment-appends against
//! the same resume cannot lose data the way a read-modify-write over an
//! embedded array would. "Latest version" is resolved at read time as the
//! highest version rowid per resume.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::path::PathBuf;
use tracing::info;
use uuid::Uuid;

use crate::error::ApiError;
use crate::model::{Comment, NewVersionData, ResumeVersion, DEFAULT_COMMENT_AUTHOR};
use crate::validation;

#[derive(Debug)]
pub struct DatabaseConfig {
    pub database_path: PathBuf,
    pub pool: Option<SqlitePool>,
}

impl DatabaseConfig {
    pub fn new(database_path: PathBuf) -> Self {
        Self {
            database_path,
            pool: None,
        }
    }

    /// Initialize the database connection pool
    pub async fn init_pool(&mut self) -> Result<()> {
        if let Some(parent) = self.database_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .context("Failed to create database directory")?;
        }

        let database_url = format!("sqlite:{}?mode=rwc", self.database_path.display());
        let pool = SqlitePool::connect(&database_url)
            .await
            .context("Failed to connect to SQLite database")?;
        self.pool = Some(pool);

        info!("Database connection pool initialized: {}", database_url);
        Ok(())
    }

    pub fn pool(&self) -> Result<&SqlitePool, ApiError> {
        self.pool.as_ref().ok_or_else(|| {
            ApiError::Internal(anyhow::anyhow!(
                "Database pool not initialized. Call init_pool() first."
            ))
        })
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        let pool = self
            .pool
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Database pool not initialized"))?;
        migrate(pool).await
    }
}

pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS resumes (
            id TEXT PRIMARY KEY,
            user_identifier TEXT NOT NULL UNIQUE,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS resume_versions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            resume_id TEXT NOT NULL REFERENCES resumes(id),
            payload TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS version_comments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            version_id INTEGER NOT NULL REFERENCES resume_versions(id),
            text TEXT NOT NULL,
            author TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_versions_resume ON resume_versions(resume_id);",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_comments_version ON version_comments(version_id);",
    )
    .execute(pool)
    .await?;

    info!("Database migrations completed");
    Ok(())
}

#[derive(sqlx::FromRow)]
struct ResumeRow {
    id: String,
}

#[derive(sqlx::FromRow)]
struct VersionRow {
    id: i64,
    payload: String,
    created_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    text: String,
    author: String,
    created_at: DateTime<Utc>,
}

pub struct ResumeStore<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ResumeStore<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    async fn comments_for(&self, version_id: i64) -> Result<Vec<Comment>, ApiError> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT text, author, created_at
            FROM version_comments
            WHERE version_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(version_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| Comment {
                text: row.text,
                author: row.author,
                created_at: row.created_at,
            })
            .collect())
    }

    async fn hydrate(&self, row: VersionRow) -> Result<ResumeVersion, ApiError> {
        let content =
            serde_json::from_str(&row.payload).context("Failed to parse stored version payload")?;
        let comments = self.comments_for(row.id).await?;
        Ok(ResumeVersion {
            content,
            comments,
            created_at: row.created_at,
        })
    }

    async fn find_resume_id(&self, user_identifier: &str) -> Result<Option<String>, ApiError> {
        let row = sqlx::query_as::<_, ResumeRow>("SELECT id FROM resumes WHERE user_identifier = ?")
            .bind(user_identifier)
            .fetch_optional(self.pool)
            .await?;
        Ok(row.map(|r| r.id))
    }

    async fn latest_version_row(&self, resume_id: &str) -> Result<Option<VersionRow>, ApiError> {
        let row = sqlx::query_as::<_, VersionRow>(
            r#"
            SELECT id, payload, created_at
            FROM resume_versions
            WHERE resume_id = ?
            ORDER BY id DESC
            LIMIT 1
            "#,
        )
        .bind(resume_id)
        .fetch_optional(self.pool)
        .await?;
        Ok(row)
    }

    /// Validate and append a new version, creating the resume on first
    /// submission for an unseen identifier. The returned version is always
    /// the just-appended one, with an empty comment list.
    pub async fn append_version(
        &self,
        user_identifier: &str,
        data: NewVersionData,
    ) -> Result<(String, ResumeVersion), ApiError> {
        if user_identifier.trim().is_empty() {
            return Err(ApiError::validation(
                "userIdentifier and versionData are required",
            ));
        }

        validation::validate_contact(&data.email, &data.phone)?;

        let content = data.into_content();
        let now = Utc::now();

        // Upsert so concurrent first submissions for the same identifier
        // both land on the single surviving row instead of one losing to
        // the UNIQUE constraint.
        let candidate_id = Uuid::new_v4().to_string();
        sqlx::query(
            r#"
            INSERT INTO resumes (id, user_identifier, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(user_identifier) DO UPDATE SET updated_at = excluded.updated_at
            "#,
        )
        .bind(&candidate_id)
        .bind(user_identifier)
        .bind(now)
        .bind(now)
        .execute(self.pool)
        .await?;

        let resume_id = self.find_resume_id(user_identifier).await?.ok_or_else(|| {
            ApiError::Internal(anyhow::anyhow!("resume row missing after upsert"))
        })?;
        if resume_id == candidate_id {
            info!("Created resume {} for identifier {}", resume_id, user_identifier);
        }

        let payload =
            serde_json::to_string(&content).context("Failed to serialize version payload")?;

        sqlx::query(
            r#"
            INSERT INTO resume_versions (resume_id, payload, created_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&resume_id)
        .bind(payload)
        .bind(now)
        .execute(self.pool)
        .await?;

        Ok((
            resume_id,
            ResumeVersion {
                content,
                comments: Vec::new(),
                created_at: now,
            },
        ))
    }

    /// Latest version for a user identifier, with the total version count.
    pub async fn get_latest(
        &self,
        user_identifier: &str,
    ) -> Result<(String, ResumeVersion, i64), ApiError> {
        let resume_id = self
            .find_resume_id(user_identifier)
            .await?
            .ok_or_else(|| ApiError::not_found("No resume found"))?;

        let row = self
            .latest_version_row(&resume_id)
            .await?
            .ok_or_else(|| ApiError::not_found("No resume found"))?;

        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM resume_versions WHERE resume_id = ?")
                .bind(&resume_id)
                .fetch_one(self.pool)
                .await?;

        let version = self.hydrate(row).await?;
        Ok((resume_id, version, count))
    }

    /// All versions in submission order.
    pub async fn list_versions(
        &self,
        user_identifier: &str,
    ) -> Result<(String, Vec<ResumeVersion>), ApiError> {
        let resume_id = self
            .find_resume_id(user_identifier)
            .await?
            .ok_or_else(|| ApiError::not_found("No resume versions found"))?;

        let rows = sqlx::query_as::<_, VersionRow>(
            r#"
            SELECT id, payload, created_at
            FROM resume_versions
            WHERE resume_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(&resume_id)
        .fetch_all(self.pool)
        .await?;

        if rows.is_empty() {
            return Err(ApiError::not_found("No resume versions found"));
        }

        let mut versions = Vec::with_capacity(rows.len());
        for row in rows {
            versions.push(self.hydrate(row).await?);
        }

        Ok((resume_id, versions))
    }

    /// Latest version keyed by the opaque resume identifier. Exposes the
    /// full version including comments; deliberate, documented tradeoff of
    /// the public profile.
    pub async fn get_public(&self, resume_id: &str) -> Result<ResumeVersion, ApiError> {
        let row = self
            .latest_version_row(resume_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Resume not found"))?;
        self.hydrate(row).await
    }

    /// Append a comment to the current latest version only. Earlier
    /// versions keep their frozen comment lists.
    pub async fn add_comment(
        &self,
        resume_id: &str,
        text: &str,
        author: Option<String>,
    ) -> Result<ResumeVersion, ApiError> {
        if text.trim().is_empty() {
            return Err(ApiError::validation("Comment text is required"));
        }

        let row = self
            .latest_version_row(resume_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Resume not found"))?;

        let author = author
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_COMMENT_AUTHOR.to_string());

        sqlx::query(
            r#"
            INSERT INTO version_comments (version_id, text, author, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(row.id)
        .bind(text)
        .bind(author)
        .bind(Utc::now())
        .execute(self.pool)
        .await?;

        self.hydrate(row).await
    }
}
