use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{StatusCode, blocking::Client};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::Translator;

/// Google Cloud Translation v2 REST endpoint.
pub const DEFAULT_API_URL: &str = "https://translation.googleapis.com/language/translate/v2";

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("no translation API key configured (pass --api-key or set POLYDOC_API_KEY)")]
    MissingApiKey,

    #[error("translation API error ({status}): {body}")]
    Api { status: StatusCode, body: String },

    #[error("translation API response contained no {0}")]
    EmptyResponse(&'static str),
}

#[derive(Debug, Serialize)]
struct DetectRequest<'a> {
    q: &'a str,
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    target: &'a str,
    format: &'static str,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct DetectData {
    detections: Vec<Vec<Detection>>,
}

#[derive(Debug, Deserialize)]
struct Detection {
    language: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateData {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
}

/// Blocking client for the Google Cloud Translation v2 API.
///
/// The API key is checked lazily: a run that never needs the service
/// works without one.
pub struct GoogleTranslator {
    client: Client,
    api_url: String,
    api_key: Option<String>,
}

impl GoogleTranslator {
    pub fn new(api_url: &str, api_key: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn post<B: Serialize, R: for<'de> Deserialize<'de>>(&self, url: &str, body: &B) -> Result<R> {
        let key = self.api_key.as_deref().ok_or(TranslateError::MissingApiKey)?;

        let response = self
            .client
            .post(url)
            .query(&[("key", key)])
            .json(body)
            .send()
            .context("Failed to send request to translation API")?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(TranslateError::Api { status, body }.into());
        }

        let envelope: Envelope<R> = response
            .json()
            .context("Failed to parse translation API response")?;
        Ok(envelope.data)
    }
}

impl Translator for GoogleTranslator {
    fn detect_language(&self, text: &str) -> Result<String> {
        debug!(chars = text.chars().count(), "detecting language");
        let url = format!("{}/detect", self.api_url);
        let data: DetectData = self.post(&url, &DetectRequest { q: text })?;
        first_detection(data)
    }

    fn translate(&self, text: &str, target: &str) -> Result<String> {
        debug!(target, chars = text.chars().count(), "translating");
        let request = TranslateRequest {
            q: text,
            target,
            format: "text",
        };
        let data: TranslateData = self.post(&self.api_url, &request)?;
        first_translation(data)
    }
}

fn first_detection(data: DetectData) -> Result<String> {
    data.detections
        .into_iter()
        .flatten()
        .next()
        .map(|d| d.language)
        .ok_or_else(|| TranslateError::EmptyResponse("detections").into())
}

fn first_translation(data: TranslateData) -> Result<String> {
    data.translations
        .into_iter()
        .next()
        .map(|t| t.translated_text)
        .ok_or_else(|| TranslateError::EmptyResponse("translations").into())
}
