// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-aware settings persistence.

use std::path::{Path, PathBuf};

use funkwerk_core::AppConfig;
use funkwerk_core::error::Result;

const CONFIG_FILE: &str = "config.json";

/// Return the application data directory, creating it if needed.
pub fn data_dir() -> PathBuf {
    let base = dirs_fallback();
    let dir = base.join("funkwerk");
    std::fs::create_dir_all(&dir).ok();
    dir
}

fn dirs_fallback() -> PathBuf {
    // Try XDG data dir, then fallback to home
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg);
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".local").join("share");
    }
    // Last resort
    PathBuf::from("/tmp")
}

/// Load persisted settings, if any.
pub fn load_config(dir: &Path) -> Option<AppConfig> {
    let path = dir.join(CONFIG_FILE);
    let data = std::fs::read_to_string(&path).ok()?;
    serde_json::from_str(&data).ok()
}

/// Persisted settings or defaults.
pub fn load_or_default() -> AppConfig {
    load_config(&data_dir()).unwrap_or_default()
}

/// Write settings to the data directory as pretty JSON.
pub fn persist_config(config: &AppConfig) -> Result<()> {
    let path = data_dir().join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(&path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_loads_as_none() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(load_config(tmp.path()).is_none());
    }

    #[test]
    fn damaged_config_loads_as_none() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE), "{not json").unwrap();
        assert!(load_config(tmp.path()).is_none());
    }
}
