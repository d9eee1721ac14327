// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for native capabilities.
//
// Joining a WiFi network programmatically is platform- and OS-version
// dependent. The bridge traits isolate that surface; platforms without a
// join mechanism return `FunkwerkError::PlatformUnavailable` from the stub
// implementation.

use funkwerk_core::error::Result;

/// Unified bridge that groups all native capabilities.
pub trait PlatformBridge: NativeWifiJoin + NativeConnectivity {
    /// Human-readable platform name (e.g. "iOS 17", "Android 14").
    fn platform_name(&self) -> &str;
}

/// Hand a join URI to the operating system.
pub trait NativeWifiJoin {
    /// Request that the OS join the network described by `uri`.
    ///
    /// Fire-and-forget: `Ok(())` means the request was handed off, not that
    /// the join succeeded — no result is ever observed.
    fn request_join(&self, uri: &str) -> Result<()>;
}

/// Network connectivity information.
pub trait NativeConnectivity {
    /// Get the current WiFi network name (SSID), if connected and permitted.
    fn wifi_ssid(&self) -> Result<Option<String>>;
}
