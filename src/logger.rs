use chrono::Utc;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        println!("\x1b[32m[INFO] [{}]\x1b[0m {}", chrono::Utc::now().format("%H:%M:%S"), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        println!("\x1b[33m[LOG]  [{}]\x1b[0m {}", chrono::Utc::now().format("%H:%M:%S"), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        println!("\x1b[35m[WARN] [{}]\x1b[0m {}", chrono::Utc::now().format("%H:%M:%S"), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        println!("\x1b[31m[ERROR][{}]\x1b[0m {}", chrono::Utc::now().format("%H:%M:%S"), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => {
        panic!("\x1b[1;31m[FATAL][{}]\x1b[0m {}", chrono::Utc::now().format("%H:%M:%S"), format!($($arg)*))
    };
}

/// Step-by-step trace of warp preparation and fuel accounting.
///
/// Lines always go to the console. When a trace file could be opened they are
/// additionally appended there with a full timestamp, so a session leaves a
/// reviewable record next to the preference file.
pub struct DebugTrace {
    file: Option<File>,
}

impl DebugTrace {
    /// Opens the trace sink. `None` keeps the trace console-only; a path that
    /// cannot be opened for appending degrades to console-only as well.
    pub fn open(path: Option<&Path>) -> Self {
        let Some(p) = path else {
            return Self::console_only();
        };
        match OpenOptions::new().append(true).create(true).open(p) {
            Ok(f) => Self { file: Some(f) },
            Err(err) => {
                crate::warn!("Failed to open debug trace {}: {err}", p.display());
                Self::console_only()
            }
        }
    }

    /// Console-only trace sink.
    pub fn console_only() -> Self { Self { file: None } }

    pub fn has_file(&self) -> bool { self.file.is_some() }

    /// Writes one trace line. A failed file write drops the file handle so a
    /// full disk cannot take the whole plugin down with it.
    pub fn line(&mut self, msg: &str) {
        crate::log!("{msg}");
        if let Some(file) = self.file.as_mut() {
            let stamped = format!(
                "{} {}: {msg}",
                Utc::now().format("%Y-%m-%d %H:%M:%S%.6f"),
                crate::PLUGIN_NAME
            );
            if writeln!(file, "{stamped}").and_then(|()| file.flush()).is_err() {
                self.file = None;
                crate::warn!("Debug trace file write failed, falling back to console only");
            }
        }
    }
}
