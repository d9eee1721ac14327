// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// funkwerk-ocr — Text extraction from credential photos.
//
// Realizes the text-extraction capability: raw image bytes in, recognized
// plain text out. Recognition uses the `ocrs` neural OCR engine (models
// executed via `rten`), preceded by a photo-preparation pass tuned for
// small, low-contrast router labels.

pub mod engine;
pub mod extractor;
pub mod prep;

pub use engine::{RecognizerConfig, TextRecognizer};
pub use extractor::OcrTextExtractor;
pub use prep::PhotoPrep;
