// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors for a single incoming item that cannot be used at all. Not
//! fatal: logged, and the single item is skipped while the rest of the
//! batch proceeds.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
 #[error("item has no usable identifier (no native guid, external id, or location)")]
 Unmatchable,
}
