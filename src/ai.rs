// src/ai.rs
//! Outbound call to the summary-generation service. Best-effort: failures
//! surface as ExternalService errors and never block resume save/read/export.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ApiError;

const COMPLETIONS_ENDPOINT: &str = "/v1/chat/completions";
const MODEL: &str = "gpt-4.1-mini";
const MAX_OUTPUT_TOKENS: u32 = 120;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummaryRequest {
    pub job_category: String,
    pub template_key: String,
    pub role: String,
    pub current_summary: String,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

pub struct SummaryClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl SummaryClient {
    pub fn new(base_url: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        let api_key = std::env::var("OPENAI_API_KEY").ok();
        if api_key.is_none() {
            warn!("OPENAI_API_KEY not set; summary generation will be unavailable");
        }

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Generate a 2-3 sentence ATS-oriented summary for the given category
    /// and role.
    pub async fn generate(&self, request: &SummaryRequest) -> Result<String, ApiError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            ApiError::ExternalService("Summary service is not configured".to_string())
        })?;

        let prompt = build_prompt(request);
        let url = format!("{}{}", self.base_url, COMPLETIONS_ENDPOINT);
        info!("Calling summary service: {}", url);

        let payload = ChatRequest {
            model: MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            max_tokens: MAX_OUTPUT_TOKENS,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ApiError::ExternalService(format!("Summary service call failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!("summary service returned {status}: {detail}");
            return Err(ApiError::ExternalService(format!(
                "Summary service returned status {status}"
            )));
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            ApiError::ExternalService(format!("Failed to parse summary response: {e}"))
        })?;

        let summary = parsed
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .unwrap_or_default();

        Ok(summary)
    }
}

fn category_label(job_category: &str) -> &'static str {
    match job_category {
        "blue-collar" => "blue-collar (hands-on / field work)",
        "grey-collar" => "grey-collar (field + customer / tech)",
        _ => "white-collar (office / knowledge work)",
    }
}

fn template_label(template_key: &str) -> &'static str {
    match template_key {
        "ats-basic" => "ATS-friendly single-column",
        "modern-flex" => "modern but still ATS-safe",
        _ => "compact one-page",
    }
}

fn build_prompt(request: &SummaryRequest) -> String {
    let role = if request.role.is_empty() {
        "not specified"
    } else {
        &request.role
    };

    format!(
        "You are an assistant that writes resume summaries for workers in India.\n\n\
         Job category: {}\n\
         Resume template style: {}\n\
         Target role: {}\n\n\
         Existing summary (may be empty):\n\"{}\"\n\n\
         Write a 2-3 sentence professional summary in plain English (no bullet points), \
         optimised for ATS, suitable for this job category and role. Use simple language \
         and focus on real work done, tools, safety/quality, and customer impact. \
         Do not include headings like \"Summary:\" in the text.",
        category_label(&request.job_category),
        template_label(&request.template_key),
        role,
        request.current_summary
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_carries_category_and_role() {
        let request = SummaryRequest {
            job_category: "blue-collar".to_string(),
            template_key: "compact".to_string(),
            role: "Electrician".to_string(),
            current_summary: "5 years of wiring work".to_string(),
        };
        let prompt = build_prompt(&request);
        assert!(prompt.contains("blue-collar (hands-on / field work)"));
        assert!(prompt.contains("compact one-page"));
        assert!(prompt.contains("Electrician"));
        assert!(prompt.contains("5 years of wiring work"));
    }

    #[test]
    fn test_prompt_defaults_missing_role() {
        let prompt = build_prompt(&SummaryRequest::default());
        assert!(prompt.contains("Target role: not specified"));
    }
}
