// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Provisioning encoder — builds the scannable payload and the join URI.
//
// COMPATIBILITY: the payload template performs NO escaping of `;`, `:` or
// `\` inside the ssid/password. The provisioning-string convention used by
// scanning apps technically requires backslash-escaping of those characters,
// but codes for such networks are already in circulation in unescaped form;
// escaping here would make freshly rendered codes disagree with printed
// artifacts. Kept verbatim, not a bug to silently fix.

use funkwerk_core::types::{Credentials, JoinUri, ProvisioningPayload};

/// The two encodings of a credential pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedProvision {
    /// Scannable provisioning string: `WIFI:S:<ssid>;T:WPA;P:<password>;;`.
    pub payload: ProvisioningPayload,
    /// Direct-join URI: `wifi:ssid=<ssid>;password=<password>;;`,
    /// components percent-encoded.
    pub join_uri: JoinUri,
}

/// Encode a credential pair.
///
/// Deterministic and side-effect free: one payload per credential pair,
/// always with security type WPA — no other security-type value is ever
/// emitted.
pub fn encode(credentials: &Credentials) -> EncodedProvision {
    let payload = ProvisioningPayload::from_string(format!(
        "WIFI:S:{};T:WPA;P:{};;",
        credentials.ssid, credentials.password
    ));

    let join_uri = JoinUri::from_string(format!(
        "wifi:ssid={};password={};;",
        urlencoding::encode(&credentials.ssid),
        urlencoding::encode(&credentials.password)
    ));

    EncodedProvision { payload, join_uri }
}
