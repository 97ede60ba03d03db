// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared whole-file JSON persistence for the two state documents.
//!
//! `load` never fails: an absent or empty file yields `T::default()`, and a
//! file that fails to parse is copied to `<path>.corrupted` before yielding
//! `T::default()` — state-file errors are recovered, not surfaced.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::error::StorageError;

pub fn load<T>(path: &Path) -> T
where
 T: DeserializeOwned + Default,
{
 let raw = match fs::read(path) {
 Ok(bytes) => bytes,
 Err(err) if err.kind() == std::io::ErrorKind::NotFound => return T::default(),
 Err(err) => {
 error!(path = %path.display(), error = %err, "failed to read state file, starting empty");
 return T::default();
 }
 };

 if raw.is_empty() {
 warn!(path = %path.display(), "state file is empty, returning empty state");
 return T::default();
 }

 match serde_json::from_slice(&raw) {
 Ok(state) => state,
 Err(err) => {
 error!(path = %path.display(), error = %err, "failed to decode state file");
 backup_corrupted(path);
 T::default()
 }
 }
}

fn backup_corrupted(path: &Path) {
 let backup_path = path.with_extension(match path.extension() {
 Some(ext) => format!("{}.corrupted", ext.to_string_lossy()),
 None => "corrupted".to_string(),
 });
 match fs::copy(path, &backup_path) {
 Ok(_) => info!(path = %path.display(), backup = %backup_path.display(), "backed up corrupted state file"),
 Err(err) => error!(path = %path.display(), error = %err, "failed to back up corrupted state file"),
 }
}

/// Whole-file replace. Writes to a sibling temp file and renames it into
/// place so a crash mid-write never leaves a half-written state file.
pub fn save<T>(path: &Path, state: &T) -> Result<(), StorageError>
where
 T: Serialize,
{
 let json = serde_json::to_vec_pretty(state).map_err(|source| StorageError::Serialize {
 path: path.display().to_string(),
 source,
 })?;

 let tmp_path = path.with_extension("tmp");
 fs::write(&tmp_path, &json).map_err(|source| StorageError::Io {
 path: tmp_path.display().to_string(),
 source,
 })?;

 match fs::rename(&tmp_path, path) {
 Ok(()) => Ok(()),
 Err(_) => {
 // Cross-device rename or a deployment that bind-mounts the state
 // directory (Docker `EBUSY`): fall back to a direct overwrite.
 fs::write(path, &json).map_err(|source| StorageError::Io {
 path: path.display().to_string(),
 source,
 })
 }
 }
}

#[cfg(test)]
#[path = "file_store_tests.rs"]
mod tests;
