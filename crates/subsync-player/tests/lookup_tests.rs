//! Word lookup popup against fake translation and vocabulary services

use async_trait::async_trait;
use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};
use subsync_core::WordLookup;
use subsync_player::{
    LookupPopup, LookupState, PlayerError, Result, SaveRequest, SaveResponse, StatusKind,
    StatusMessage, TranslationRequest, TranslationResponse, Translator, VocabularyStore,
    WordSelection,
};

#[derive(Default)]
struct FakeTranslator {
    calls: AtomicUsize,
    fail: bool,
}

#[async_trait]
impl Translator for FakeTranslator {
    async fn translate(&self, request: &TranslationRequest) -> Result<TranslationResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(PlayerError::translation("backend returned 500"));
        }
        Ok(TranslationResponse {
            word_translation: format!("{}-en", request.word),
            sentence_translation: format!("[{}]", request.sentence),
        })
    }
}

#[derive(Default)]
struct FakeStore {
    saved: Mutex<Vec<SaveRequest>>,
    fail: bool,
}

#[async_trait]
impl VocabularyStore for FakeStore {
    async fn save(&self, request: &SaveRequest) -> Result<SaveResponse> {
        if self.fail {
            return Err(PlayerError::save("database locked"));
        }
        self.saved.lock().push(request.clone());
        Ok(SaveResponse {
            message: format!("Saved '{}'", request.word),
        })
    }
}

fn selection(word: &str, sentence: &str, lang: &str) -> WordSelection {
    WordSelection {
        lookup: WordLookup {
            word: word.to_string(),
            sentence: sentence.to_string(),
            lang_code: lang.to_string(),
        },
        original_markup: sentence.replacen(word, &format!("<mark>{word}</mark>"), 1),
    }
}

#[tokio::test]
async fn foreign_word_goes_to_translator() {
    let translator = FakeTranslator::default();
    let mut popup = LookupPopup::new("en");

    let response = popup
        .translate(&translator, selection("gato", "el gato duerme", "ES"))
        .await
        .unwrap();

    assert_eq!(response.word_translation, "gato-en");
    assert_eq!(translator.calls.load(Ordering::SeqCst), 1);
    assert_eq!(popup.state(), &LookupState::Ready(response));
    assert_eq!(
        popup.selection().map(|s| s.original_markup.as_str()),
        Some("el <mark>gato</mark> duerme")
    );
}

#[tokio::test]
async fn native_word_is_echoed_without_translator() {
    let translator = FakeTranslator::default();
    let mut popup = LookupPopup::new("en");

    let response = popup
        .translate(&translator, selection("cat", "the cat and the cat", "EN"))
        .await
        .unwrap();

    assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
    assert_eq!(response.word_translation, "cat");
    assert_eq!(
        response.sentence_translation,
        "the <mark>cat</mark> and the <mark>cat</mark>"
    );
}

#[tokio::test]
async fn translation_failure_sets_status_line() {
    let translator = FakeTranslator {
        fail: true,
        ..FakeTranslator::default()
    };
    let mut popup = LookupPopup::new("en");

    let result = popup
        .translate(&translator, selection("gato", "el gato", "ES"))
        .await;

    assert!(matches!(result, Err(PlayerError::Translation(_))));
    assert_eq!(popup.state(), &LookupState::Failed);
    assert_eq!(
        popup.status(),
        Some(&StatusMessage::error("Could not translate this line."))
    );
}

#[tokio::test]
async fn save_sends_word_definition_and_context() {
    let translator = FakeTranslator::default();
    let store = FakeStore::default();
    let mut popup = LookupPopup::new("en");

    popup
        .translate(&translator, selection("gato", "el gato duerme", "ES"))
        .await
        .unwrap();
    let response = popup.save(&store).await.unwrap();

    assert_eq!(response.message, "Saved 'gato'");
    assert_eq!(
        store.saved.lock().as_slice(),
        &[SaveRequest {
            word: "gato".into(),
            definition: "gato-en".into(),
            context: "el gato duerme".into(),
        }]
    );
    let status = popup.status().unwrap();
    assert_eq!(status.kind, StatusKind::Info);
}

#[tokio::test]
async fn save_without_definition_never_calls_store() {
    let store = FakeStore::default();
    let mut popup = LookupPopup::new("en");

    let result = popup.save(&store).await;

    assert_eq!(result, Err(PlayerError::MissingDefinition));
    assert!(store.saved.lock().is_empty());
    assert_eq!(
        popup.status(),
        Some(&StatusMessage::error("Cannot save, no definition found."))
    );
}

#[tokio::test]
async fn save_failure_reports_generic_message() {
    let translator = FakeTranslator::default();
    let store = FakeStore {
        fail: true,
        ..FakeStore::default()
    };
    let mut popup = LookupPopup::new("en");

    popup
        .translate(&translator, selection("gato", "el gato", "ES"))
        .await
        .unwrap();
    let result = popup.save(&store).await;

    assert!(matches!(result, Err(PlayerError::Save(_))));
    assert_eq!(popup.status(), Some(&StatusMessage::error("Failed to save word.")));
}

#[tokio::test]
async fn close_resets_popup() {
    let translator = FakeTranslator::default();
    let mut popup = LookupPopup::new("en");
    popup
        .translate(&translator, selection("gato", "el gato", "ES"))
        .await
        .unwrap();

    popup.close();

    assert_eq!(popup.state(), &LookupState::Closed);
    assert!(popup.selection().is_none());
    assert!(popup.status().is_none());
}
