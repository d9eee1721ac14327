// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Funkwerk.

use thiserror::Error;

/// Top-level error type for all Funkwerk operations.
///
/// Note that "no credentials found in the text" is NOT an error — it is a
/// regular outcome expressed by [`crate::types::ExtractionOutcome`]. This
/// enum covers infrastructure failures only.
#[derive(Debug, Error)]
pub enum FunkwerkError {
    // -- Text extraction --
    #[error("image decoding failed: {0}")]
    ImageDecode(String),

    #[error("OCR failed: {0}")]
    Ocr(String),

    // -- Provisioning output --
    #[error("QR encoding failed: {0}")]
    QrEncode(String),

    // -- Orchestration --
    #[error("a scan is already in progress")]
    ScanInProgress,

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -- Platform bridge --
    #[error("platform bridge error: {0}")]
    Bridge(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, FunkwerkError>;
