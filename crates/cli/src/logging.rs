// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structured logging setup: `tracing` + `tracing-subscriber`'s
//! `EnvFilter`, driven by the configuration surface's validated
//! `log_level`. Every log line goes to both a log file (truncated at
//! startup) and stdout at the same level.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LogLevel;

/// Writes every line to stdout and to a (separately locked) log file.
/// `tracing_subscriber::fmt`'s `MakeWriter` wants `io::Write`, and this
/// crate has no other use for a dual-sink writer, so this stays a small
/// local type rather than pulling in `tracing-appender`.
struct TeeWriter {
 file: Mutex<File>,
}

impl Write for &TeeWriter {
 fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
 io::stdout().write_all(buf)?;
 self.file.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).write_all(buf)?;
 Ok(buf.len())
 }

 fn flush(&mut self) -> io::Result<()> {
 io::stdout().flush()?;
 self.file.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).flush()
 }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for TeeWriter {
 type Writer = &'a TeeWriter;

 fn make_writer(&'a self) -> Self::Writer {
 self
 }
}

/// Initializes the global `tracing` subscriber at the configured level,
/// truncating (and creating, if absent) the log file at `log_file`. Falls
/// back to stdout-only logging if the log file can't be opened rather
/// than failing startup over a non-fatal setup problem.
pub fn init(level: LogLevel, log_file: &Path) {
 let filter = EnvFilter::new(level.as_filter_directive());

 match File::create(log_file) {
 Ok(file) => {
 let writer = TeeWriter { file: Mutex::new(file) };
 tracing_subscriber::fmt().with_env_filter(filter).with_writer(writer).init();
 }
 Err(err) => {
 tracing_subscriber::fmt().with_env_filter(filter).init();
 tracing::warn!(path = %log_file.display(), error = %err, "failed to open log file, logging to stdout only");
 }
 }
}
