// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The text-extraction capability implementation.
//
// Decode, preparation, and neural inference are all CPU-bound, so the whole
// chain runs on a blocking thread via `spawn_blocking` and the async caller
// just awaits it.

use std::sync::Arc;

use funkwerk_core::AppConfig;
use funkwerk_core::capability::TextExtractor;
use funkwerk_core::error::{FunkwerkError, Result};
use tracing::instrument;

use crate::engine::{RecognizerConfig, TextRecognizer};
use crate::prep::PhotoPrep;

/// OCR-backed [`TextExtractor`].
///
/// Cheap to clone; the underlying engine (and its loaded models) is shared.
#[derive(Clone)]
pub struct OcrTextExtractor {
    recognizer: Arc<TextRecognizer>,
    enhance_photos: bool,
}

impl std::fmt::Debug for OcrTextExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OcrTextExtractor")
            .field("enhance_photos", &self.enhance_photos)
            .finish_non_exhaustive()
    }
}

impl OcrTextExtractor {
    pub fn new(recognizer: TextRecognizer, enhance_photos: bool) -> Self {
        Self {
            recognizer: Arc::new(recognizer),
            enhance_photos,
        }
    }

    /// Build an extractor from application settings, loading OCR models from
    /// the configured directory (or the shared cache when unset).
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let recognizer_config = match &config.model_dir {
            Some(dir) => RecognizerConfig::from_dir(dir),
            None => RecognizerConfig::default(),
        };
        let recognizer = TextRecognizer::new(recognizer_config)?;
        Ok(Self::new(recognizer, config.enhance_photos))
    }
}

impl TextExtractor for OcrTextExtractor {
    #[instrument(skip_all, fields(byte_len = image.len(), enhance = self.enhance_photos))]
    async fn extract(&self, image: &[u8]) -> Result<String> {
        let bytes = image.to_vec();
        let recognizer = Arc::clone(&self.recognizer);
        let enhance = self.enhance_photos;

        tokio::task::spawn_blocking(move || {
            let decoded = image::load_from_memory(&bytes).map_err(|err| {
                FunkwerkError::ImageDecode(format!("failed to decode photo: {err}"))
            })?;
            let prepared = if enhance {
                PhotoPrep::from_dynamic(decoded).prepare().into_dynamic()
            } else {
                decoded
            };
            recognizer.recognize(&prepared)
        })
        .await
        .map_err(|err| FunkwerkError::Ocr(format!("recognition task failed: {err}")))?
    }
}
