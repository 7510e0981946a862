//! JSONL file writer for relay events.
//!
//! Each [`RelayEvent`] is serialized as a single JSON line carrying its
//! `type` tag, a `timestamp` and a per-file `seq`, appended to the file via a
//! buffered writer.

use byzgen_application::{RelayEvent, RelayObserver};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL relay logger that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlRelayLogger {
    writer: Mutex<Sink>,
    path: PathBuf,
}

struct Sink {
    out: BufWriter<File>,
    seq: u64,
}

impl JsonlRelayLogger {
    /// Create a new logger writing to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be created.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create transcript directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match File::create(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not create transcript file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(Sink {
                out: BufWriter::new(file),
                seq: 0,
            }),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the transcript file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RelayObserver for JsonlRelayLogger {
    fn record(&self, event: RelayEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let Ok(serde_json::Value::Object(mut map)) = serde_json::to_value(&event) else {
            return;
        };
        map.insert(
            "timestamp".to_string(),
            serde_json::Value::String(timestamp),
        );

        if let Ok(mut sink) = self.writer.lock() {
            // seq is assigned under the lock so it matches line order
            map.insert("seq".to_string(), serde_json::Value::from(sink.seq));
            sink.seq += 1;

            let Ok(line) = serde_json::to_string(&map) else {
                return;
            };
            let _ = writeln!(sink.out, "{}", line);
            let _ = sink.out.flush();
        }
    }
}

impl Drop for JsonlRelayLogger {
    fn drop(&mut self) {
        if let Ok(mut sink) = self.writer.lock() {
            let _ = sink.out.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byzgen_domain::{Loyalty, Order};
    use std::io::Read;
    use std::sync::Arc;

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        let mut content = String::new();
        File::open(path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_jsonl_logger_writes_valid_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.jsonl");
        let logger = JsonlRelayLogger::new(&path).unwrap();

        logger.record(RelayEvent::MessageSent {
            from: 0,
            to: 2,
            order: Order::Attack,
            path: vec![0],
            recursion_level: 1,
        });
        logger.record(RelayEvent::GeneralDecided {
            general: 2,
            loyalty: Loyalty::Traitor,
            action: Order::Retreat,
        });

        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);

        for (i, line) in lines.iter().enumerate() {
            assert!(line.get("timestamp").is_some());
            assert_eq!(line["seq"], i as u64);
        }

        assert_eq!(lines[0]["type"], "message_sent");
        assert_eq!(lines[0]["to"], 2);
        assert_eq!(lines[0]["path"], serde_json::json!([0]));

        assert_eq!(lines[1]["type"], "general_decided");
        assert_eq!(lines[1]["loyalty"], "traitor");
        assert_eq!(lines[1]["action"], "RETREAT");
    }

    #[test]
    fn test_jsonl_logger_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runs").join("nested").join("t.jsonl");
        let logger = JsonlRelayLogger::new(&path).unwrap();
        assert_eq!(logger.path(), path.as_path());
        assert!(path.exists());
    }

    #[test]
    fn test_concurrent_records_keep_unique_seq() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("concurrent.jsonl");
        let logger = Arc::new(JsonlRelayLogger::new(&path).unwrap());

        let handles: Vec<_> = (1..=4)
            .map(|general| {
                let logger = Arc::clone(&logger);
                std::thread::spawn(move || {
                    for count in 1..=25 {
                        logger.record(RelayEvent::ReportFiled {
                            general,
                            order: Order::Attack,
                            path: vec![0],
                            report_count: count,
                        });
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 100);
        let seqs: Vec<u64> = lines.iter().map(|l| l["seq"].as_u64().unwrap()).collect();
        assert_eq!(seqs, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_jsonl_logger_returns_none_for_directory_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(JsonlRelayLogger::new(dir.path()).is_none());
    }
}
