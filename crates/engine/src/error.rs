// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use msr_storage::StorageError;

/// Cycle-level failures: conditions severe enough that the whole
/// reconciliation cycle aborts rather than continuing with a reduced
/// server set. Individual server or item failures never reach this type —
/// they are logged and skipped where they occur.
#[derive(Debug, Error)]
pub enum EngineError {
 #[error("no servers were reachable this cycle")]
 NoServersAvailable,
 #[error("state storage error: {0}")]
 Storage(#[from] StorageError),
}
