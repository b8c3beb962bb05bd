//! External service seams
//!
//! Subtitle retrieval, word translation and vocabulary persistence sit
//! behind async traits so sessions can be driven by HTTP backends, local
//! files or in-memory fakes.

mod fs;
#[cfg(feature = "http")]
mod http;

pub use fs::FsFetcher;
#[cfg(feature = "http")]
pub use http::{HttpFetcher, HttpTranslator, HttpVocabulary};

use crate::core::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Source of raw subtitle text
#[async_trait]
pub trait SubtitleFetcher: Send + Sync {
    /// Fetch the text behind `url`
    ///
    /// An empty `url` means "no track" and yields `Ok(String::new())`
    /// without touching the backend. Transfer failures are
    /// [`PlayerError::Network`](crate::PlayerError::Network).
    async fn fetch_text(&self, url: &str) -> Result<String>;
}

/// Word and sentence translation service
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate a clicked word in the context of its line
    async fn translate(&self, request: &TranslationRequest) -> Result<TranslationResponse>;
}

/// Persistence for saved words
#[async_trait]
pub trait VocabularyStore: Send + Sync {
    /// Save a word with its definition and context sentence
    async fn save(&self, request: &SaveRequest) -> Result<SaveResponse>;
}

/// Body of a translation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Clicked word
    pub word: String,
    /// Line the word appeared in
    pub sentence: String,
    /// Language of the line
    pub lang_code: String,
}

impl From<subsync_core::WordLookup> for TranslationRequest {
    fn from(lookup: subsync_core::WordLookup) -> Self {
        Self {
            word: lookup.word,
            sentence: lookup.sentence,
            lang_code: lookup.lang_code,
        }
    }
}

/// Translation of a word and its line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationResponse {
    /// Translation of the word alone
    pub word_translation: String,
    /// Translated line, with the matching word wrapped in `<mark>`
    pub sentence_translation: String,
}

/// Body of a save request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRequest {
    /// Word to save
    pub word: String,
    /// Resolved definition
    pub definition: String,
    /// Line the word appeared in
    pub context: String,
}

/// Confirmation from the vocabulary store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveResponse {
    /// Message to show the user
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_response_tolerates_missing_fields() {
        let parsed: TranslationResponse =
            serde_json::from_str(r#"{"word_translation": "house"}"#).unwrap();
        assert_eq!(parsed.word_translation, "house");
        assert_eq!(parsed.sentence_translation, "");
    }

    #[test]
    fn request_uses_backend_field_names() {
        let body = serde_json::to_value(TranslationRequest {
            word: "casa".into(),
            sentence: "mi casa".into(),
            lang_code: "ES".into(),
        })
        .unwrap();
        assert_eq!(body["lang_code"], "ES");
        assert_eq!(body["sentence"], "mi casa");
    }
}
