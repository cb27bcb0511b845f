use std::fs::{File, OpenOptions};
use std::io::{LineWriter, Write};
use std::path::Path;

use parking_lot::Mutex;

/// Shared append-only traffic log, optionally mirrored to stdout.
///
/// Both relay directions write completed frames here, so the whole record
/// write happens under one lock; partial lines from concurrent frame
/// completions never interleave. File records carry a local timestamp, the
/// stdout mirror does not.
pub struct TrafficLog {
    file: Mutex<LineWriter<File>>,
    mirror_stdout: bool,
}

impl TrafficLog {
    pub fn open(path: impl AsRef<Path>, mirror_stdout: bool) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        Ok(Self {
            file: Mutex::new(LineWriter::new(file)),
            mirror_stdout,
        })
    }

    /// Write one record. Log failures must not kill a healthy worker, so
    /// write errors are downgraded to a warning.
    pub fn message(&self, msg: &str) {
        let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let mut file = self.file.lock();
        if let Err(e) = writeln!(file, "{stamp} {msg}") {
            log::warn!("traffic log write failed: {e}");
        }
        if self.mirror_stdout {
            println!("{msg}");
        }
    }
}
