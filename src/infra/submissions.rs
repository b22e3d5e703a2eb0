// ============================================================
// Layer 6 — Append-only Submission Log
// ============================================================
// Feedback and contact messages each go to their own plain-text
// file. A record is appended exactly as given: no escaping, no
// framing, no size limit.
//
// Each log owns a mutex so two requests writing to the same file
// at once can never interleave their records. The file is opened
// per append (OpenOptions with append + create), so deleting or
// rotating it between requests is safe.
//
// Reference: Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use parking_lot::Mutex;
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};

use crate::domain::traits::SubmissionStore;

pub struct SubmissionLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl SubmissionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), lock: Mutex::new(()) }
    }

    #[cfg(test)]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SubmissionStore for SubmissionLog {
    fn append(&self, record: &str) -> Result<()> {
        let _guard = self.lock.lock();

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
        }

        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Cannot open '{}' for appending", self.path.display()))?;

        f.write_all(record.as_bytes())
            .with_context(|| format!("Cannot append to '{}'", self.path.display()))?;

        tracing::debug!("Appended {} bytes to '{}'", record.len(), self.path.display());
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_appends_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let log = SubmissionLog::new(dir.path().join("feedback.txt"));

        log.append("first\n").unwrap();
        log.append("second\n").unwrap();

        let contents = fs::read_to_string(log.path()).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn test_creates_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let log = SubmissionLog::new(dir.path().join("nested/data/contact.txt"));
        log.append("hello\n").unwrap();
        assert!(log.path().exists());
    }

    #[test]
    fn test_concurrent_appends_do_not_interleave() {
        let dir = tempfile::tempdir().unwrap();
        let log = Arc::new(SubmissionLog::new(dir.path().join("feedback.txt")));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let log = Arc::clone(&log);
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        log.append(&format!("{}\n", i.to_string().repeat(200))).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let contents = fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 200);
        for line in lines {
            let first = line.chars().next().unwrap();
            assert!(line.chars().all(|c| c == first));
            assert_eq!(line.len(), 200);
        }
    }
}
