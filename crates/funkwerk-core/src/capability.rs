// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Capability traits for the external collaborators the pipeline consumes.
//
// The scanner treats OCR and join-code rendering as black boxes: bytes in,
// text or image out. Both are asynchronous and may be slow; the OCR
// capability may fail. Implementations live in `funkwerk-ocr` and
// `funkwerk-provision`; tests substitute mocks.

use crate::error::Result;
use crate::types::RenderedCode;

/// Converts raw image bytes into recognized plain text.
///
/// The returned text carries no invariants: arbitrary whitespace, multiple
/// lines, and OCR noise are all expected. Failure is opaque — the pipeline
/// maps any error to the `extractor-error` outcome without inspecting it.
pub trait TextExtractor: Send + Sync {
    /// Recognize text in an image supplied as raw bytes (any common raster
    /// format).
    fn extract(&self, image: &[u8]) -> impl Future<Output = Result<String>> + Send;
}

/// Renders a provisioning payload string as a scannable image.
///
/// Assumed to succeed for well-formed payload strings; failures surface as
/// infrastructure errors, not as a scan outcome.
pub trait PayloadRenderer: Send + Sync {
    /// Render the payload and return the image, passed through to the
    /// collaborator unmodified.
    fn render(&self, payload: &str) -> impl Future<Output = Result<RenderedCode>> + Send;
}
