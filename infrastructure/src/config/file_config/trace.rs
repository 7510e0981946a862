//! Relay transcript configuration from TOML (`[trace]` section)
//!
//! ```toml
//! [trace]
//! path = "runs/last.jsonl"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw trace configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTraceConfig {
    /// Where to write the JSONL relay transcript; disabled when unset
    pub path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_disabled_by_default() {
        assert!(FileTraceConfig::default().path.is_none());
    }

    #[test]
    fn test_trace_path_deserialize() {
        let config: super::super::FileConfig =
            toml::from_str("[trace]\npath = \"out/run.jsonl\"\n").unwrap();
        assert_eq!(config.trace.path, Some(PathBuf::from("out/run.jsonl")));
    }
}
