// Filter persistence collaborator
//
// The widget reports every trimmed filter value to an injected store so the
// current filter survives the session (the shareable-state slot). The widget
// never reads it back - restoring at startup is the application's job.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Receives the trimmed filter text on every update, including the empty one
pub trait FilterStore {
    fn set_tab_filter(&mut self, pattern: &str);
}

/// Persisted state file contents
#[derive(Debug, Serialize, Deserialize)]
struct FilterState {
    tab_filter: String,
    updated: DateTime<Utc>,
}

/// Store that writes the filter to a TOML state file
///
/// Write failures are logged and swallowed: filtering must never block on
/// persistence.
pub struct StateFileStore {
    path: PathBuf,
}

impl StateFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read a previously persisted filter, if any
    ///
    /// Used by the application at startup; the widget itself has no read
    /// path. Unreadable or unparsable files are treated as absent.
    pub fn load_filter(path: &Path) -> Option<String> {
        let contents = std::fs::read_to_string(path).ok()?;
        let state: FilterState = toml::from_str(&contents).ok()?;
        Some(state.tab_filter)
    }
}

impl FilterStore for StateFileStore {
    fn set_tab_filter(&mut self, pattern: &str) {
        let state = FilterState {
            tab_filter: pattern.to_string(),
            updated: Utc::now(),
        };

        let body = match toml::to_string(&state) {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("could not serialize filter state: {}", e);
                return;
            }
        };

        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("could not create state directory {:?}: {}", parent, e);
                return;
            }
        }

        if let Err(e) = std::fs::write(&self.path, body) {
            tracing::warn!("could not persist filter to {:?}: {}", self.path, e);
        }
    }
}

/// Store used when persistence is disabled in config
pub struct NullFilterStore;

impl FilterStore for NullFilterStore {
    fn set_tab_filter(&mut self, _pattern: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_state_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "tabsift-test-{}-{}.toml",
            tag,
            std::process::id()
        ))
    }

    #[test]
    fn test_state_file_round_trip() {
        let path = temp_state_path("roundtrip");
        let mut store = StateFileStore::new(path.clone());

        store.set_tab_filter("alpha beta");
        assert_eq!(
            StateFileStore::load_filter(&path),
            Some("alpha beta".to_string())
        );

        // Every update overwrites, including the empty filter
        store.set_tab_filter("");
        assert_eq!(StateFileStore::load_filter(&path), Some(String::new()));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let path = temp_state_path("missing");
        let _ = std::fs::remove_file(&path);
        assert_eq!(StateFileStore::load_filter(&path), None);
    }

    #[test]
    fn test_load_garbage_is_none() {
        let path = temp_state_path("garbage");
        std::fs::write(&path, "not = [valid").unwrap();
        assert_eq!(StateFileStore::load_filter(&path), None);
        let _ = std::fs::remove_file(&path);
    }
}
