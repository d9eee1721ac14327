// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for non-technical users.
//
// Every technical error is mapped to plain English with a clear suggestion.
// The severity levels drive presentation in the embedding UI.

use crate::error::FunkwerkError;
use crate::types::FailureReason;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Bad photo, slow engine — retaking the photo is likely to work.
    Transient,
    /// User must do something (install models, free disk space).
    ActionRequired,
    /// Cannot be fixed by retrying — unsupported platform, bad file.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Whether resubmitting a new photo is likely to help.
    pub retriable: bool,
    /// Severity level (drives icon/colour in UI).
    pub severity: Severity,
}

/// Convert a `FunkwerkError` into a `HumanError` anyone can understand.
pub fn humanize_error(err: &FunkwerkError) -> HumanError {
    match err {
        FunkwerkError::ImageDecode(_) => HumanError {
            message: "There's a problem with this image.".into(),
            suggestion: "The image may be damaged or in an unusual format. Try saving it as a JPEG or PNG first.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        FunkwerkError::Ocr(detail) => {
            if detail.contains("model not found") {
                HumanError {
                    message: "The text-recognition models aren't installed.".into(),
                    suggestion: "Run `ocrs-cli` once to download the models, then try again.".into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: "Text recognition didn't work on this photo.".into(),
                    suggestion: "Try taking the photo again with better lighting, making sure the label is clear and in focus.".into(),
                    retriable: true,
                    severity: Severity::Transient,
                }
            }
        }

        FunkwerkError::QrEncode(detail) => HumanError {
            message: "We couldn't build the join code.".into(),
            suggestion: format!("The network details may be too long to fit in a code. ({detail})"),
            retriable: false,
            severity: Severity::Permanent,
        },

        FunkwerkError::ScanInProgress => HumanError {
            message: "A scan is already running.".into(),
            suggestion: "Wait for the current scan to finish, then try again.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        FunkwerkError::Io(_) => HumanError {
            message: "A file couldn't be read or written.".into(),
            suggestion: "Check that the file exists and that there is free disk space, then try again.".into(),
            retriable: true,
            severity: Severity::ActionRequired,
        },

        FunkwerkError::Serialization(_) => HumanError {
            message: "The app's settings file is damaged.".into(),
            suggestion: "Delete the settings file to reset to defaults, then try again.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        FunkwerkError::Bridge(detail) => HumanError {
            message: "Joining the network didn't work.".into(),
            suggestion: format!("You can still join by scanning the code with your camera. ({detail})"),
            retriable: true,
            severity: Severity::Transient,
        },

        FunkwerkError::PlatformUnavailable => HumanError {
            message: "One-tap joining isn't available on this device.".into(),
            suggestion: "Scan the join code with your phone's camera instead.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },
    }
}

/// Convert a scan failure reason into a `HumanError`.
///
/// Both reasons are terminal for the current submission; "retry" always
/// means resubmitting a new photo.
pub fn humanize_failure(reason: &FailureReason) -> HumanError {
    match reason {
        FailureReason::NotFound => HumanError {
            message: "We couldn't find a network name and password in this photo.".into(),
            suggestion: "Make sure the label shows both the network name (SSID) and the password, and that both are readable in the photo.".into(),
            retriable: true,
            severity: Severity::Transient,
        },
        FailureReason::ExtractorError => HumanError {
            message: "We couldn't read any text from this photo.".into(),
            suggestion: "Try taking the photo again with more light and the label filling the frame.".into(),
            retriable: true,
            severity: Severity::Transient,
        },
    }
}
