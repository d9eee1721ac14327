// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Credential parser — locates a network name and password in recognized text.
//
// Router labels and café cards write credentials in a handful of shapes:
//
//   SSID: Home-5G          Network  Home-5G        WiFi: Guest
//   Password: abc123       Pass abc123             Key: hunter2
//
// Each field has an ordered list of labels, tried in sequence; the first
// label whose pattern yields a non-empty capture wins, and only the first
// occurrence of that label in the text is used. A label followed by nothing
// (e.g. a bare "Password:" line) is not a match and falls through to the
// next label. Both fields must match for the extraction to succeed.

use funkwerk_core::types::{Credentials, ExtractionOutcome, FailureReason};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Labels that introduce the network name, highest priority first.
const SSID_LABELS: [&str; 3] = ["SSID", "Network", "WiFi"];

/// Labels that introduce the password, highest priority first.
const PASSWORD_LABELS: [&str; 3] = ["Password", "Pass", "Key"];

// --- Compiled patterns ---

static SSID_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| compile_label_patterns(&SSID_LABELS));
static PASSWORD_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| compile_label_patterns(&PASSWORD_LABELS));

/// Build one pattern per label: the label (any letter case), a delimiter
/// (colon or a run of spaces/tabs), then the value running to end of line.
///
/// The value must start with a non-whitespace character, so a label with
/// only trailing whitespace on its line never matches and the regex engine
/// naturally skips ahead to a later occurrence of the same label.
fn compile_label_patterns(labels: &[&str]) -> Vec<Regex> {
    labels
        .iter()
        .map(|label| {
            Regex::new(&format!(r"(?i){label}(?:[ \t]*:[ \t]*|[ \t]+)(\S[^\r\n]*)"))
                .expect("label pattern is a valid regex")
        })
        .collect()
}

/// First non-empty capture across the ordered pattern list.
fn first_capture(text: &str, patterns: &[Regex]) -> Option<String> {
    patterns.iter().find_map(|pattern| {
        let captures = pattern.captures(text)?;
        let value = captures.get(1)?.as_str().trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_owned())
        }
    })
}

/// Parse recognized text into a credential pair.
///
/// Total and pure: empty text, arbitrarily long text, and text with no
/// relevant tokens are all valid inputs, and identical text always yields
/// an identical outcome. No partial result is ever produced — either both
/// fields match or the whole call reports `not-found`.
pub fn parse(text: &str) -> ExtractionOutcome {
    let ssid = first_capture(text, &SSID_PATTERNS);
    let password = first_capture(text, &PASSWORD_PATTERNS);

    match (ssid, password) {
        (Some(ssid), Some(password)) => {
            debug!(ssid = %ssid, "credential pair matched");
            ExtractionOutcome::Success(Credentials::new(ssid, password))
        }
        (ssid, password) => {
            debug!(
                ssid_found = ssid.is_some(),
                password_found = password.is_some(),
                "no credential pair in recognized text"
            );
            ExtractionOutcome::Failure(FailureReason::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expect_success(text: &str) -> Credentials {
        match parse(text) {
            ExtractionOutcome::Success(c) => c,
            ExtractionOutcome::Failure(reason) => {
                panic!("expected credentials from {text:?}, got {reason}")
            }
        }
    }

    #[test]
    fn plain_label_lines() {
        let c = expect_success("SSID: Home-5G\nPassword: abc123\n");
        assert_eq!(c.ssid, "Home-5G");
        assert_eq!(c.password, "abc123");
    }

    #[test]
    fn ssid_label_outranks_network() {
        let c = expect_success("Network: A\nSSID: B\nPassword: x\n");
        assert_eq!(c.ssid, "B");
    }

    #[test]
    fn labels_match_any_letter_case() {
        let c = expect_success("wifi: Guest\nkey: hunter2\n");
        assert_eq!(c.ssid, "Guest");
        assert_eq!(c.password, "hunter2");
    }

    #[test]
    fn empty_capture_falls_through_to_next_label() {
        let c = expect_success("SSID: Home\nPassword:\nKey: letmein\n");
        assert_eq!(c.password, "letmein");
    }

    #[test]
    fn whitespace_only_capture_falls_through() {
        let c = expect_success("SSID: Home\nPassword:   \nKey: letmein\n");
        assert_eq!(c.password, "letmein");
    }

    #[test]
    fn missing_password_label_fails() {
        assert_eq!(
            parse("SSID: Home-5G\nhave a nice stay\n"),
            ExtractionOutcome::Failure(FailureReason::NotFound)
        );
    }

    #[test]
    fn missing_ssid_label_fails() {
        assert_eq!(
            parse("Password: abc123\n"),
            ExtractionOutcome::Failure(FailureReason::NotFound)
        );
    }

    #[test]
    fn empty_text_fails() {
        assert_eq!(
            parse(""),
            ExtractionOutcome::Failure(FailureReason::NotFound)
        );
    }

    #[test]
    fn whitespace_run_is_a_valid_delimiter() {
        let c = expect_success("Network\tCafeGuest\nPass   swordfish\n");
        assert_eq!(c.ssid, "CafeGuest");
        assert_eq!(c.password, "swordfish");
    }

    #[test]
    fn value_without_trailing_newline_runs_to_end_of_input() {
        let c = expect_success("SSID: Attic\nPassword: trailing");
        assert_eq!(c.password, "trailing");
    }

    #[test]
    fn only_first_occurrence_of_winning_label_is_used() {
        let c = expect_success("SSID: First\nSSID: Second\nPassword: pw\n");
        assert_eq!(c.ssid, "First");
    }

    #[test]
    fn captures_are_trimmed() {
        let c = expect_success("SSID:   Padded Net  \nPassword:  spaced pw \n");
        assert_eq!(c.ssid, "Padded Net");
        assert_eq!(c.password, "spaced pw");
    }

    #[test]
    fn ocr_noise_around_labels_is_ignored() {
        let text = "** Guest access **\nroom 214\nNetwork: Lobby-2G\nnotes...\nPass: w1nter\nenjoy!";
        let c = expect_success(text);
        assert_eq!(c.ssid, "Lobby-2G");
        assert_eq!(c.password, "w1nter");
    }

    #[test]
    fn parse_is_idempotent() {
        let text = "SSID: Home-5G\nPassword: abc123\n";
        assert_eq!(parse(text), parse(text));
    }
}
