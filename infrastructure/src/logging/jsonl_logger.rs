//! JSONL file writer for submission events.
//!
//! Each [`SubmissionEvent`] becomes one JSON line carrying a `type` and an
//! RFC 3339 `timestamp`. The file is opened in append mode so the log spans
//! sessions.

use content_request_application::ports::submission_logger::{SubmissionEvent, SubmissionLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL submission logger that appends one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every event and
/// on `Drop`.
pub struct JsonlSubmissionLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlSubmissionLogger {
    /// Open (or create) the log at `path`.
    ///
    /// Creates parent directories as needed. Returns `None` if the file
    /// cannot be opened; submissions then simply go unlogged.
    pub fn open(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create submission log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open submission log {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(event: SubmissionEvent) -> Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);

        let mut record = Map::new();
        record.insert("type".to_string(), Value::from(event.event_type));
        record.insert("timestamp".to_string(), Value::from(timestamp));
        match event.payload {
            Value::Object(fields) => record.extend(fields),
            Value::Null => {}
            other => {
                record.insert("data".to_string(), other);
            }
        }
        Value::Object(record)
    }
}

impl SubmissionLogger for JsonlSubmissionLogger {
    fn log(&self, event: SubmissionEvent) {
        let Ok(line) = serde_json::to_string(&Self::record(event)) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlSubmissionLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_type_timestamp_and_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("submissions.jsonl");
        let logger = JsonlSubmissionLogger::open(&path).unwrap();

        logger.log(SubmissionEvent::new(
            "submission_finished",
            serde_json::json!({"client_name": "koala", "status": "success", "http_code": 200}),
        ));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["type"], "submission_finished");
        assert_eq!(lines[0]["client_name"], "koala");
        assert_eq!(lines[0]["http_code"], 200);
        assert!(lines[0]["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn test_appends_across_openings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("submissions.jsonl");

        for status in ["timeout", "success"] {
            let logger = JsonlSubmissionLogger::open(&path).unwrap();
            logger.log(SubmissionEvent::new(
                "submission_finished",
                serde_json::json!({"status": status}),
            ));
        }

        let statuses: Vec<String> = read_lines(&path)
            .iter()
            .map(|v| v["status"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(statuses, vec!["timeout", "success"]);
    }

    #[test]
    fn test_non_object_payload_goes_under_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("submissions.jsonl");
        let logger = JsonlSubmissionLogger::open(&path).unwrap();

        logger.log(SubmissionEvent::new("note", serde_json::json!("reload")));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines[0]["type"], "note");
        assert_eq!(lines[0]["data"], "reload");
    }

    #[test]
    fn test_open_fails_for_directory_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(JsonlSubmissionLogger::open(dir.path()).is_none());
    }
}
