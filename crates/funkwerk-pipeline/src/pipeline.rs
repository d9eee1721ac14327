// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The scan pipeline — image bytes in, scan report out.

use chrono::{DateTime, Utc};
use funkwerk_core::capability::{PayloadRenderer, TextExtractor};
use funkwerk_core::error::Result;
use funkwerk_core::types::{
    ExtractionOutcome, FailureReason, ProvisionedNetwork, ScanId, ScanOutcome, ScanReport,
};
use funkwerk_provision::{encode, parse};
use tracing::{info, warn};

/// Runs one submission through extract → parse → encode → render.
///
/// Generic over the two consumed capabilities so tests can substitute
/// mocks. Holds no mutable state; every call is independent.
pub struct ScanPipeline<X, R> {
    extractor: X,
    renderer: R,
}

impl<X: TextExtractor, R: PayloadRenderer> ScanPipeline<X, R> {
    pub fn new(extractor: X, renderer: R) -> Self {
        Self {
            extractor,
            renderer,
        }
    }

    /// Process one submitted image.
    ///
    /// Extraction failures become `Failed(ExtractorError)`; unmatchable text
    /// becomes `Failed(NotFound)`. The `Err` branch is reserved for
    /// infrastructure problems (the renderer is assumed to succeed for
    /// well-formed payloads). No cancellation path exists once extraction
    /// has started; bounding extraction time is the capability's concern.
    pub async fn scan(&self, image: &[u8]) -> Result<ScanReport> {
        let id = ScanId::new();
        let started_at = Utc::now();
        info!(scan = %id, byte_len = image.len(), "scan started");

        let text = match self.extractor.extract(image).await {
            Ok(text) => text,
            Err(err) => {
                // Opaque by design: the collaborator only learns that the
                // extractor failed, not why.
                warn!(scan = %id, error = %err, "text extraction failed");
                return Ok(failed_report(id, started_at, FailureReason::ExtractorError));
            }
        };

        let credentials = match parse(&text) {
            ExtractionOutcome::Success(credentials) => credentials,
            ExtractionOutcome::Failure(reason) => {
                info!(scan = %id, %reason, "no credential pair in recognized text");
                return Ok(failed_report(id, started_at, reason));
            }
        };

        let encoded = encode(&credentials);
        let code = self.renderer.render(encoded.payload.as_str()).await?;
        info!(scan = %id, ssid = %credentials.ssid, "credentials provisioned");

        Ok(ScanReport {
            id,
            started_at,
            completed_at: Utc::now(),
            outcome: ScanOutcome::Provisioned(ProvisionedNetwork {
                credentials,
                payload: encoded.payload,
                join_uri: encoded.join_uri,
                code,
            }),
        })
    }
}

fn failed_report(id: ScanId, started_at: DateTime<Utc>, reason: FailureReason) -> ScanReport {
    ScanReport {
        id,
        started_at,
        completed_at: Utc::now(),
        outcome: ScanOutcome::Failed(reason),
    }
}
