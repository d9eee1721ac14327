// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// QR rendering — turns a provisioning payload into a scannable PNG image.
//
// The rasterization itself is delegated to the `qrcode` crate; this module
// only configures it and packages the result for the collaborator.

use std::io::Cursor;

use funkwerk_core::capability::PayloadRenderer;
use funkwerk_core::config::{AppConfig, QrCorrectionLevel};
use funkwerk_core::error::{FunkwerkError, Result};
use funkwerk_core::types::RenderedCode;
use image::{DynamicImage, ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};
use tracing::{debug, instrument};

/// Renders provisioning payloads as QR code images.
#[derive(Debug, Clone)]
pub struct QrRenderer {
    module_size: u32,
    quiet_zone: bool,
    ec_level: EcLevel,
}

impl QrRenderer {
    /// Create a renderer with explicit settings.
    ///
    /// `module_size` is clamped to at least 1 pixel per module.
    pub fn new(module_size: u32, quiet_zone: bool, level: QrCorrectionLevel) -> Self {
        Self {
            module_size: module_size.max(1),
            quiet_zone,
            ec_level: match level {
                QrCorrectionLevel::Low => EcLevel::L,
                QrCorrectionLevel::Medium => EcLevel::M,
                QrCorrectionLevel::Quartile => EcLevel::Q,
                QrCorrectionLevel::High => EcLevel::H,
            },
        }
    }

    /// Create a renderer from application settings.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.qr_module_size,
            config.qr_quiet_zone,
            config.qr_error_correction,
        )
    }

    /// Render a payload to PNG bytes.
    #[instrument(skip_all, fields(payload_len = payload.len()))]
    fn render_png(&self, payload: &str) -> Result<RenderedCode> {
        let code = QrCode::with_error_correction_level(payload.as_bytes(), self.ec_level)
            .map_err(|err| {
                FunkwerkError::QrEncode(format!("payload does not fit a QR code: {err}"))
            })?;

        let img = code
            .render::<Luma<u8>>()
            .module_dimensions(self.module_size, self.module_size)
            .quiet_zone(self.quiet_zone)
            .build();
        let (width, height) = img.dimensions();

        let mut png = Vec::new();
        DynamicImage::ImageLuma8(img)
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|err| {
                FunkwerkError::QrEncode(format!("failed to encode join code as PNG: {err}"))
            })?;

        debug!(width, height, bytes = png.len(), "join code rendered");
        Ok(RenderedCode { png, width, height })
    }
}

impl Default for QrRenderer {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl PayloadRenderer for QrRenderer {
    async fn render(&self, payload: &str) -> Result<RenderedCode> {
        self.render_png(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    #[test]
    fn renders_png_bytes() {
        let renderer = QrRenderer::default();
        let code = renderer
            .render_png("WIFI:S:Cafe;T:WPA;P:p@ss;;")
            .expect("render should succeed for a small payload");
        assert!(code.png.starts_with(&PNG_MAGIC));
        assert!(code.width > 0 && code.height > 0);
        assert_eq!(code.width, code.height, "QR codes are square");
    }

    #[test]
    fn module_size_scales_the_output() {
        let small = QrRenderer::new(1, false, QrCorrectionLevel::Medium)
            .render_png("WIFI:S:x;T:WPA;P:y;;")
            .unwrap();
        let large = QrRenderer::new(4, false, QrCorrectionLevel::Medium)
            .render_png("WIFI:S:x;T:WPA;P:y;;")
            .unwrap();
        assert_eq!(large.width, small.width * 4);
    }

    #[test]
    fn oversized_payload_is_an_encode_error() {
        let renderer = QrRenderer::default();
        let huge = "x".repeat(8000); // beyond QR version 40 capacity
        let err = renderer.render_png(&huge).unwrap_err();
        assert!(matches!(err, FunkwerkError::QrEncode(_)));
    }
}
