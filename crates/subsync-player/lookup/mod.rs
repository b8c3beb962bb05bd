//! Word lookup popup
//!
//! Drives the popup opened by a word click: translate the word and its
//! line, show the result next to the original line, and optionally save
//! the word. Service failures never escape as panics or retries; they end
//! in a [`StatusMessage`] the UI shows in place of the translation.

use crate::{
    core::{errors::SAVE_FAILED, PlayerError, Result},
    services::{
        SaveRequest, SaveResponse, TranslationRequest, TranslationResponse, Translator,
        VocabularyStore,
    },
};
use serde::{Deserialize, Serialize};
use subsync_core::WordLookup;
use tracing::{debug, warn};

/// A clicked word plus the markup of its line with the word highlighted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSelection {
    /// Word, line and language sent to the translator
    pub lookup: WordLookup,
    /// Line text with the clicked word wrapped in `<mark>`
    pub original_markup: String,
}

/// Severity of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// Confirmation
    Info,
    /// Something failed
    Error,
}

/// Short user-visible message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    /// Severity
    pub kind: StatusKind,
    /// Text to show
    pub text: String,
}

impl StatusMessage {
    /// Confirmation message
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    /// Failure message
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

impl From<&PlayerError> for StatusMessage {
    fn from(err: &PlayerError) -> Self {
        Self::error(err.status_message())
    }
}

/// Popup lifecycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LookupState {
    /// Nothing open
    #[default]
    Closed,
    /// Waiting for the translator
    Translating,
    /// Translation available
    Ready(TranslationResponse),
    /// Translation failed; the status line says why
    Failed,
}

/// Word lookup popup state machine
#[derive(Debug, Clone)]
pub struct LookupPopup {
    native_lang_code: String,
    selection: Option<WordSelection>,
    state: LookupState,
    status: Option<StatusMessage>,
}

impl LookupPopup {
    /// Create a closed popup
    ///
    /// Lines in `native_lang_code` are echoed locally instead of being sent
    /// to the translator.
    #[must_use]
    pub fn new(native_lang_code: &str) -> Self {
        Self {
            native_lang_code: native_lang_code.trim().to_lowercase(),
            selection: None,
            state: LookupState::Closed,
            status: None,
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &LookupState {
        &self.state
    }

    /// Current status line
    #[must_use]
    pub const fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Selected word, while open
    #[must_use]
    pub const fn selection(&self) -> Option<&WordSelection> {
        self.selection.as_ref()
    }

    /// Check whether a line in `lang_code` is echoed rather than translated
    #[must_use]
    pub fn is_native(&self, lang_code: &str) -> bool {
        lang_code.trim().to_lowercase() == self.native_lang_code
    }

    /// Open the popup for a word and return the request to send
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::EmptyWord`] if the word has no lookup key, as
    /// for a token made only of punctuation. The popup is left closed.
    pub fn open(&mut self, selection: WordSelection) -> Result<TranslationRequest> {
        if selection.lookup.word.trim().is_empty() {
            self.close();
            return Err(PlayerError::EmptyWord);
        }

        let request = TranslationRequest::from(selection.lookup.clone());
        debug!(word = %request.word, lang = %request.lang_code, "lookup opened");
        self.selection = Some(selection);
        self.state = LookupState::Translating;
        self.status = None;
        Ok(request)
    }

    /// Record the translator's answer
    pub fn resolve(&mut self, result: Result<TranslationResponse>) {
        match result {
            Ok(response) => {
                self.state = LookupState::Ready(response);
                self.status = None;
            }
            Err(err) => {
                warn!(error = %err, "lookup failed");
                self.status = Some(StatusMessage::from(&err));
                self.state = LookupState::Failed;
            }
        }
    }

    /// Open the popup and translate, echoing native-language lines locally
    ///
    /// # Errors
    ///
    /// Returns the translator's error, or [`PlayerError::EmptyWord`]. The
    /// popup shows the matching status line in either case.
    pub async fn translate<T>(
        &mut self,
        translator: &T,
        selection: WordSelection,
    ) -> Result<TranslationResponse>
    where
        T: Translator + ?Sized,
    {
        let request = match self.open(selection) {
            Ok(request) => request,
            Err(err) => {
                self.status = Some(StatusMessage::from(&err));
                return Err(err);
            }
        };

        let result = if self.is_native(&request.lang_code) {
            Ok(native_echo(&request))
        } else {
            translator.translate(&request).await
        };

        self.resolve(result.clone());
        result
    }

    /// Save request for the open word
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::MissingDefinition`] unless a translation is
    /// ready with a non-empty word translation.
    pub fn save_request(&self) -> Result<SaveRequest> {
        match (&self.state, &self.selection) {
            (LookupState::Ready(response), Some(selection))
                if !response.word_translation.trim().is_empty() =>
            {
                Ok(SaveRequest {
                    word: selection.lookup.word.clone(),
                    definition: response.word_translation.trim().to_string(),
                    context: selection.lookup.sentence.clone(),
                })
            }
            _ => Err(PlayerError::MissingDefinition),
        }
    }

    /// Save the open word
    ///
    /// The missing-definition guard runs before any call to `store`.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::MissingDefinition`] or the store's error; the
    /// status line is updated either way.
    pub async fn save<V>(&mut self, store: &V) -> Result<SaveResponse>
    where
        V: VocabularyStore + ?Sized,
    {
        let request = match self.save_request() {
            Ok(request) => request,
            Err(err) => {
                self.status = Some(StatusMessage::from(&err));
                return Err(err);
            }
        };

        match store.save(&request).await {
            Ok(response) => {
                debug!(word = %request.word, "word saved");
                self.status = Some(StatusMessage::info(response.message.clone()));
                Ok(response)
            }
            Err(err) => {
                warn!(word = %request.word, error = %err, "save failed");
                self.status = Some(StatusMessage::error(SAVE_FAILED));
                Err(err)
            }
        }
    }

    /// Close the popup and clear its state
    pub fn close(&mut self) {
        self.selection = None;
        self.state = LookupState::Closed;
        self.status = None;
    }
}

/// Local answer for a line already in the learner's language
///
/// The word maps to itself and every occurrence of it in the sentence is
/// wrapped in `<mark>`.
#[must_use]
pub fn native_echo(request: &TranslationRequest) -> TranslationResponse {
    TranslationResponse {
        word_translation: request.word.clone(),
        sentence_translation: request
            .sentence
            .replace(&request.word, &format!("<mark>{}</mark>", request.word)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(word: &str, sentence: &str, lang: &str) -> WordSelection {
        WordSelection {
            lookup: WordLookup {
                word: word.to_string(),
                sentence: sentence.to_string(),
                lang_code: lang.to_string(),
            },
            original_markup: sentence.to_string(),
        }
    }

    #[test]
    fn echo_marks_every_occurrence() {
        let response = native_echo(&TranslationRequest {
            word: "go".into(),
            sentence: "go, go now".into(),
            lang_code: "EN".into(),
        });
        assert_eq!(response.word_translation, "go");
        assert_eq!(
            response.sentence_translation,
            "<mark>go</mark>, <mark>go</mark> now"
        );
    }

    #[test]
    fn empty_word_is_rejected() {
        let mut popup = LookupPopup::new("en");
        assert_eq!(
            popup.open(selection("", "...", "ES")),
            Err(PlayerError::EmptyWord)
        );
        assert_eq!(popup.state(), &LookupState::Closed);
    }

    #[test]
    fn save_requires_ready_translation() {
        let mut popup = LookupPopup::new("en");
        assert_eq!(popup.save_request(), Err(PlayerError::MissingDefinition));

        popup.open(selection("casa", "mi casa", "ES")).unwrap();
        assert_eq!(popup.save_request(), Err(PlayerError::MissingDefinition));

        popup.resolve(Ok(TranslationResponse {
            word_translation: "  ".into(),
            sentence_translation: "my <mark>house</mark>".into(),
        }));
        assert_eq!(popup.save_request(), Err(PlayerError::MissingDefinition));

        popup.resolve(Ok(TranslationResponse {
            word_translation: "house".into(),
            sentence_translation: "my <mark>house</mark>".into(),
        }));
        assert_eq!(
            popup.save_request().unwrap(),
            SaveRequest {
                word: "casa".into(),
                definition: "house".into(),
                context: "mi casa".into(),
            }
        );
    }

    #[test]
    fn native_language_match_ignores_case() {
        let popup = LookupPopup::new("EN");
        assert!(popup.is_native("en"));
        assert!(popup.is_native(" En "));
        assert!(!popup.is_native("es"));
    }
}
