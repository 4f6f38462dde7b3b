//! Wire-traffic log controlled by the `LSPP_LOG_FILE` environment variable.
//!
//! When the variable is set, inbound and outbound payloads are appended to
//! that file as `<unix_seconds>>><text>` lines. When unset, logging is a
//! no-op. Failures to open or write the file are swallowed; logging must
//! never take the server down.

use once_cell::sync::Lazy;
use std::fs::OpenOptions;
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

// The log path is resolved once per process.
static LOG_FILE: Lazy<Option<String>> = Lazy::new(|| std::env::var("LSPP_LOG_FILE").ok());

/// Append one line to the wire log, if configured.
pub(crate) fn log(text: &str) {
    let Some(path) = LOG_FILE.as_ref() else {
        return;
    };
    let seconds =
        SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or_default();
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = writeln!(file, "{seconds}>>{text}");
    }
}
