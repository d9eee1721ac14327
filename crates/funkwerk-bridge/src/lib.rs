// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Funkwerk — Native platform bridge abstractions.
//
// Defines the traits through which the scanner hands a join URI to the
// operating system. The join is best-effort and fire-and-forget; the core
// never learns whether it succeeded. Mobile embeddings provide their own
// `PlatformBridge` implementations; the stub covers desktop and CI.

pub mod stub;
pub mod traits;

/// Retrieve the bridge implementation for the current platform.
pub fn platform_bridge() -> Box<dyn traits::PlatformBridge> {
    Box::new(stub::StubBridge)
}
