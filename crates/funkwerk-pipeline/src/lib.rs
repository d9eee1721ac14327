// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// funkwerk-pipeline — Orchestration for one scan submission.
//
// Sequences the external capabilities: await text extraction, parse
// synchronously, encode synchronously, await join-code rendering. Extractor
// failures are mapped to the `extractor-error` outcome rather than being
// propagated raw.

pub mod pipeline;
pub mod state;

pub use pipeline::ScanPipeline;
pub use state::{ScanSession, ScanState};
