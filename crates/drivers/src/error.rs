// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Errors surfaced by a server driver's network or authentication layer.
/// Recoverable per server: the engine logs and continues with the
/// remaining servers rather than aborting the whole cycle.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DriverError {
 #[error("login failed: {0}")]
 Login(String),
 #[error("transport error: {0}")]
 Transport(String),
 #[error("request timed out")]
 Timeout,
 #[error("failed to parse server response: {0}")]
 Parse(String),
 #[error("{0}")]
 Other(String),
}
