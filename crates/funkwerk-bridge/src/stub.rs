// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub bridge for desktop/CI builds where native join APIs are unavailable.
//
// Every trait method returns `PlatformUnavailable` — real implementations
// are supplied by the embedding mobile app.

use funkwerk_core::error::{FunkwerkError, Result};

use crate::traits::*;

/// No-op bridge returned on platforms without a native join mechanism.
pub struct StubBridge;

impl PlatformBridge for StubBridge {
    fn platform_name(&self) -> &str {
        "Desktop (stub)"
    }
}

impl NativeWifiJoin for StubBridge {
    fn request_join(&self, _uri: &str) -> Result<()> {
        tracing::warn!("NativeWifiJoin::request_join called on stub bridge");
        Err(FunkwerkError::PlatformUnavailable)
    }
}

impl NativeConnectivity for StubBridge {
    fn wifi_ssid(&self) -> Result<Option<String>> {
        Err(FunkwerkError::PlatformUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_join_is_unavailable() {
        let err = StubBridge.request_join("wifi:ssid=x;password=y;;").unwrap_err();
        assert!(matches!(err, FunkwerkError::PlatformUnavailable));
    }
}
