//! Local file subtitle source

use super::SubtitleFetcher;
use crate::core::{PlayerError, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use subsync_core::decode_text;
use tracing::warn;

/// Reads subtitle files from disk, resolving relative paths against a root
#[derive(Debug, Clone, Default)]
pub struct FsFetcher {
    root: Option<PathBuf>,
}

impl FsFetcher {
    /// Resolve paths as given
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Resolve relative paths against `root`
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, url: &str) -> PathBuf {
        let path = PathBuf::from(url);
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path,
        }
    }
}

#[async_trait]
impl SubtitleFetcher for FsFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        if url.is_empty() {
            return Ok(String::new());
        }

        let path = self.resolve(url);
        let bytes = tokio::fs::read(&path).await.map_err(|err| {
            warn!(path = %path.display(), error = %err, "failed to read subtitle file");
            PlayerError::network(format!("{}: {err}", path.display()))
        })?;
        decode_text(&bytes).map_err(|err| {
            warn!(path = %path.display(), error = %err, "unreadable subtitle file");
            PlayerError::from(err)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use subsync_core::CoreError;

    #[tokio::test]
    async fn empty_url_is_no_track() {
        assert_eq!(FsFetcher::new().fetch_text("").await.unwrap(), "");
    }

    #[tokio::test]
    async fn reads_relative_to_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("abc.es.srt"), "1\n00:00:01,000 --> 00:00:02,000\nHola\n")
            .unwrap();

        let fetcher = FsFetcher::with_root(dir.path());
        let text = fetcher.fetch_text("abc.es.srt").await.unwrap();
        assert!(text.contains("Hola"));
    }

    #[tokio::test]
    async fn missing_file_is_network_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FsFetcher::with_root(dir.path())
            .fetch_text("missing.srt")
            .await
            .unwrap_err();
        assert!(matches!(err, PlayerError::Network(_)));
    }

    #[tokio::test]
    async fn utf8_bom_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bom.srt"), b"\xEF\xBB\xBF1\nHola\n").unwrap();

        let text = FsFetcher::with_root(dir.path())
            .fetch_text("bom.srt")
            .await
            .unwrap();
        assert_eq!(text, "1\nHola\n");
    }

    #[tokio::test]
    async fn utf16_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("wide.srt"), [0xFF, 0xFE, b'1', 0x00]).unwrap();

        let err = FsFetcher::with_root(dir.path())
            .fetch_text("wide.srt")
            .await
            .unwrap_err();
        assert_eq!(
            err,
            PlayerError::Core(CoreError::UnsupportedEncoding("UTF-16LE"))
        );
    }
}
