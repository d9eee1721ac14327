// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// funkwerk-provision — Credential extraction and provisioning encoding.
//
// Provides the credential parser (prioritized label matching over recognized
// text), the provisioning-payload and join-URI encoder, and the QR renderer
// that turns a payload into a scannable image.

pub mod parser;
pub mod payload;
pub mod qr;

// Re-export the primary entry points so callers can use
// `funkwerk_provision::parse` etc.
pub use parser::parse;
pub use payload::{EncodedProvision, encode};
pub use qr::QrRenderer;
