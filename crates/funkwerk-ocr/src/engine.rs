// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text recognition engine for Funkwerk.
//
// Wraps the `ocrs` crate, a pure-Rust OCR engine backed by neural network
// models executed via `rten`. The engine needs two model files:
//
// - `text-detection.rten` — locates text regions in the image.
// - `text-recognition.rten` — decodes characters from detected regions.
//
// Models land in `$XDG_CACHE_HOME/ocrs` (typically `~/.cache/ocrs`) after
// running the `ocrs-cli` tool once, or can be downloaded from
// <https://github.com/robertknight/ocrs-models/releases>.
//
// Model loading is the expensive step; build one `TextRecognizer` and reuse
// it for every photo. `ocrs` and `rten` must be compiled in release mode —
// debug builds are 10-100x slower.

use std::path::{Path, PathBuf};

use funkwerk_core::error::FunkwerkError;
use image::DynamicImage;
use ocrs::{ImageSource, OcrEngine, OcrEngineParams};
use rten::Model;
use tracing::{debug, info, instrument};

const DETECTION_MODEL_FILENAME: &str = "text-detection.rten";
const RECOGNITION_MODEL_FILENAME: &str = "text-recognition.rten";

/// Shared model cache directory, per the XDG Base Directory spec.
fn default_model_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
        PathBuf::from(xdg).join("ocrs")
    } else if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".cache").join("ocrs")
    } else {
        PathBuf::from("ocrs-models")
    }
}

/// Model file locations for constructing a [`TextRecognizer`].
#[derive(Debug, Clone)]
pub struct RecognizerConfig {
    /// Path to the text-detection model file (`.rten`).
    pub detection_model_path: PathBuf,
    /// Path to the text-recognition model file (`.rten`).
    pub recognition_model_path: PathBuf,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self::from_dir(default_model_dir())
    }
}

impl RecognizerConfig {
    /// Point at a directory containing both model files under their
    /// well-known names.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            detection_model_path: dir.join(DETECTION_MODEL_FILENAME),
            recognition_model_path: dir.join(RECOGNITION_MODEL_FILENAME),
        }
    }

    /// Verify that both model files exist.
    pub fn validate(&self) -> Result<(), FunkwerkError> {
        for path in [&self.detection_model_path, &self.recognition_model_path] {
            if !path.exists() {
                return Err(FunkwerkError::Ocr(format!(
                    "model not found at {}; run `ocrs-cli` once to download models, \
                     or see <https://github.com/robertknight/ocrs-models/releases>",
                    path.display()
                )));
            }
        }
        Ok(())
    }
}

/// Recognizes text in credential photos.
pub struct TextRecognizer {
    engine: OcrEngine,
}

impl TextRecognizer {
    /// Load models from the paths in `config` and initialise the engine.
    ///
    /// # Errors
    ///
    /// Returns [`FunkwerkError::Ocr`] if model files are missing or corrupt.
    #[instrument(skip_all, fields(
        detection = %config.detection_model_path.display(),
        recognition = %config.recognition_model_path.display(),
    ))]
    pub fn new(config: RecognizerConfig) -> Result<Self, FunkwerkError> {
        config.validate()?;

        info!("loading OCR models");
        let detection_model = Model::load_file(&config.detection_model_path).map_err(|err| {
            FunkwerkError::Ocr(format!(
                "failed to load detection model from {}: {}",
                config.detection_model_path.display(),
                err
            ))
        })?;
        let recognition_model =
            Model::load_file(&config.recognition_model_path).map_err(|err| {
                FunkwerkError::Ocr(format!(
                    "failed to load recognition model from {}: {}",
                    config.recognition_model_path.display(),
                    err
                ))
            })?;

        let engine = OcrEngine::new(OcrEngineParams {
            detection_model: Some(detection_model),
            recognition_model: Some(recognition_model),
            ..Default::default()
        })
        .map_err(|err| FunkwerkError::Ocr(format!("failed to initialise OCR engine: {err}")))?;

        info!("OCR engine ready");
        Ok(Self { engine })
    }

    /// Load models from the shared cache directory.
    pub fn with_defaults() -> Result<Self, FunkwerkError> {
        Self::new(RecognizerConfig::default())
    }

    /// Recognize all text in a photo.
    ///
    /// Returns the recognized text as one `String` with lines separated by
    /// newline characters. The input is converted to RGB8 internally.
    #[instrument(skip_all, fields(width = image.width(), height = image.height()))]
    pub fn recognize(&self, image: &DynamicImage) -> Result<String, FunkwerkError> {
        let rgb = image.to_rgb8();
        let (width, height) = rgb.dimensions();

        let source = ImageSource::from_bytes(rgb.as_raw(), (width, height)).map_err(|err| {
            FunkwerkError::Ocr(format!(
                "failed to create image source ({width}x{height}): {err}"
            ))
        })?;

        let input = self
            .engine
            .prepare_input(source)
            .map_err(|err| FunkwerkError::Ocr(format!("OCR preprocessing failed: {err}")))?;

        let text = self
            .engine
            .get_text(&input)
            .map_err(|err| FunkwerkError::Ocr(format!("OCR text recognition failed: {err}")))?;

        debug!(
            line_count = text.lines().count(),
            char_count = text.len(),
            "recognition complete"
        );
        Ok(text)
    }
}
