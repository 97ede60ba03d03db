// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// State-file errors. `load` never returns one of
/// these — a corrupt or unreadable file is recovered by backup-and-reset and
/// only logged. `save` surfaces failures so the caller can log at `error`.
#[derive(Debug, Error)]
pub enum StorageError {
 #[error("failed to write state file {path}: {source}")]
 Io {
 path: String,
 #[source]
 source: std::io::Error,
 },
 #[error("failed to serialize state for {path}: {source}")]
 Serialize {
 path: String,
 #[source]
 source: serde_json::Error,
 },
}
