//! reqwest-backed services
//!
//! Talk to the lookup backend over JSON:
//!
//! - `POST {base}/get_definition` with `{word, sentence, lang_code}`
//! - `POST {base}/save_word` with `{word, definition, context}`
//!
//! Subtitle files are fetched with `GET`, relative URLs resolved against
//! the same base.

use super::{
    SaveRequest, SaveResponse, SubtitleFetcher, TranslationRequest, TranslationResponse,
    Translator, VocabularyStore,
};
use crate::core::{PlayerError, Result};
use async_trait::async_trait;
use reqwest::Client;
use subsync_core::decode_text;
use tracing::{debug, warn};

fn normalize_base(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

fn endpoint(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!("{base_url}/{}", path.trim_start_matches('/'))
    }
}

/// Fetches subtitle files over HTTP
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: Client,
    base_url: String,
}

impl HttpFetcher {
    /// Create a fetcher resolving relative URLs against `base_url`
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a fetcher sharing an existing client
    #[must_use]
    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: normalize_base(base_url),
        }
    }
}

#[async_trait]
impl SubtitleFetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        if url.is_empty() {
            return Ok(String::new());
        }

        let url = endpoint(&self.base_url, url);
        debug!(%url, "fetching subtitles");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| {
                warn!(%url, error = %err, "subtitle fetch failed");
                PlayerError::network(err)
            })?;

        let bytes = resp.bytes().await.map_err(PlayerError::network)?;
        Ok(decode_text(&bytes)?)
    }
}

/// Lookup backend client for word translations
#[derive(Debug, Clone)]
pub struct HttpTranslator {
    http: Client,
    base_url: String,
}

impl HttpTranslator {
    /// Create a translator posting to `{base_url}/get_definition`
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a translator sharing an existing client
    #[must_use]
    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: normalize_base(base_url),
        }
    }
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn translate(&self, request: &TranslationRequest) -> Result<TranslationResponse> {
        let url = endpoint(&self.base_url, "get_definition");

        let resp = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|err| {
                warn!(word = %request.word, error = %err, "lookup request failed");
                PlayerError::translation(err)
            })?;

        let status = resp.status();
        if !status.is_success() {
            warn!(word = %request.word, %status, "lookup service returned an error");
            return Err(PlayerError::translation(format!("lookup service returned {status}")));
        }

        resp.json().await.map_err(PlayerError::translation)
    }
}

/// Vocabulary backend client
#[derive(Debug, Clone)]
pub struct HttpVocabulary {
    http: Client,
    base_url: String,
}

impl HttpVocabulary {
    /// Create a store posting to `{base_url}/save_word`
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a store sharing an existing client
    #[must_use]
    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: normalize_base(base_url),
        }
    }
}

#[async_trait]
impl VocabularyStore for HttpVocabulary {
    async fn save(&self, request: &SaveRequest) -> Result<SaveResponse> {
        let url = endpoint(&self.base_url, "save_word");

        let resp = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|err| {
                warn!(word = %request.word, error = %err, "save request failed");
                PlayerError::save(err)
            })?;

        let status = resp.status();
        if !status.is_success() {
            warn!(word = %request.word, %status, "vocabulary service returned an error");
            return Err(PlayerError::save(format!("vocabulary service returned {status}")));
        }

        resp.json().await.map_err(PlayerError::save)
    }
}
