// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Funkwerk credential scanner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for one scan submission.
///
/// Correlates log lines and reports for a single image; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScanId(pub Uuid);

impl ScanId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ScanId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ScanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A WiFi credential pair recovered from recognized text.
///
/// Both fields are trimmed of surrounding whitespace. `ssid` is non-empty
/// when produced by the parser; `password` may be empty for an open network.
/// No further validation (length, charset) is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// The human-readable network name.
    pub ssid: String,
    /// The network password, possibly empty.
    pub password: String,
}

impl Credentials {
    /// Build a credential pair, trimming surrounding whitespace from both
    /// fields.
    pub fn new(ssid: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into().trim().to_owned(),
            password: password.into().trim().to_owned(),
        }
    }

    /// Whether this describes an open (passwordless) network.
    pub fn is_open(&self) -> bool {
        self.password.is_empty()
    }
}

/// Why a scan produced no credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureReason {
    /// Text was obtained but no credential pair could be matched.
    NotFound,
    /// The text-extraction capability failed or threw.
    ExtractorError,
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => f.write_str("not-found"),
            Self::ExtractorError => f.write_str("extractor-error"),
        }
    }
}

/// Result of running the credential parser over recognized text.
///
/// Created once per submitted image and consumed immediately; there is no
/// partial success — either both fields were found or the whole extraction
/// failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractionOutcome {
    /// Both an SSID and a password were matched.
    Success(Credentials),
    /// No pair could be produced.
    Failure(FailureReason),
}

impl ExtractionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The extracted credentials, if any.
    pub fn credentials(&self) -> Option<&Credentials> {
        match self {
            Self::Success(c) => Some(c),
            Self::Failure(_) => None,
        }
    }
}

/// The standardized provisioning string understood by QR scanning apps.
///
/// Wire format: `WIFI:S:<ssid>;T:WPA;P:<password>;;` — exactly one instance
/// per credential pair, deterministic, always security type WPA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisioningPayload(String);

impl ProvisioningPayload {
    /// Wrap an already-formatted provisioning string.
    ///
    /// Callers should go through `funkwerk_provision::encode` rather than
    /// formatting the template by hand.
    pub fn from_string(payload: String) -> Self {
        Self(payload)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProvisioningPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A best-effort direct-join URI for the platform join collaborator.
///
/// Format: `wifi:ssid=<pct-ssid>;password=<pct-password>;;` with both
/// components percent-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinUri(String);

impl JoinUri {
    pub fn from_string(uri: String) -> Self {
        Self(uri)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JoinUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A rendered join-code image, passed through to the collaborator unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedCode {
    /// PNG-encoded image bytes.
    pub png: Vec<u8>,
    /// Pixel width of the rendered image.
    pub width: u32,
    /// Pixel height of the rendered image.
    pub height: u32,
}

/// Everything the collaborator needs to present a successful scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisionedNetwork {
    pub credentials: Credentials,
    pub payload: ProvisioningPayload,
    pub join_uri: JoinUri,
    pub code: RenderedCode,
}

/// Terminal result of one scan submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanOutcome {
    /// Credentials extracted, payload encoded, join code rendered.
    Provisioned(ProvisionedNetwork),
    /// The scan failed; the collaborator may offer a manual retry by
    /// resubmitting a new image.
    Failed(FailureReason),
}

impl ScanOutcome {
    pub fn is_provisioned(&self) -> bool {
        matches!(self, Self::Provisioned(_))
    }

    pub fn network(&self) -> Option<&ProvisionedNetwork> {
        match self {
            Self::Provisioned(n) => Some(n),
            Self::Failed(_) => None,
        }
    }
}

/// Report for one completed scan submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub id: ScanId,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub outcome: ScanOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_are_trimmed() {
        let c = Credentials::new("  Home-5G \t", " abc123\n");
        assert_eq!(c.ssid, "Home-5G");
        assert_eq!(c.password, "abc123");
        assert!(!c.is_open());
    }

    #[test]
    fn open_network_has_empty_password() {
        let c = Credentials::new("Cafe", "   ");
        assert!(c.is_open());
    }

    #[test]
    fn failure_reason_display_matches_wire_names() {
        assert_eq!(FailureReason::NotFound.to_string(), "not-found");
        assert_eq!(FailureReason::ExtractorError.to_string(), "extractor-error");
    }

    #[test]
    fn outcome_accessors() {
        let ok = ExtractionOutcome::Success(Credentials::new("a", "b"));
        assert!(ok.is_success());
        assert_eq!(ok.credentials().unwrap().ssid, "a");

        let err = ExtractionOutcome::Failure(FailureReason::NotFound);
        assert!(!err.is_success());
        assert!(err.credentials().is_none());
    }

    #[test]
    fn failure_reason_serializes_kebab_case() {
        let json = serde_json::to_string(&FailureReason::ExtractorError).unwrap();
        assert_eq!(json, "\"extractor-error\"");
    }
}
