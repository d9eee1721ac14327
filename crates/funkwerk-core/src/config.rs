// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Error-correction level for the rendered join code.
///
/// Higher levels survive more print damage at the cost of a denser code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QrCorrectionLevel {
    Low,
    Medium,
    Quartile,
    High,
}

/// Persistent application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory containing the OCR model files. `None` uses the shared
    /// model cache location.
    pub model_dir: Option<PathBuf>,
    /// Run the photo-preparation pass (contrast stretch, binarization)
    /// before recognition. Helps with small, low-contrast label photos.
    pub enhance_photos: bool,
    /// Pixels per QR module in the rendered join code.
    pub qr_module_size: u32,
    /// Surround the join code with a quiet zone.
    pub qr_quiet_zone: bool,
    /// Error-correction level for the join code.
    pub qr_error_correction: QrCorrectionLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model_dir: None,
            enhance_photos: true,
            qr_module_size: 8,
            qr_quiet_zone: true,
            qr_error_correction: QrCorrectionLevel::Medium,
        }
    }
}
