// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use msr_core::WatchedState;

use crate::error::StorageError;
use crate::file_store;

pub fn load_watched_state(path: &Path) -> WatchedState {
 file_store::load(path)
}

pub fn save_watched_state(path: &Path, state: &WatchedState) -> Result<(), StorageError> {
 file_store::save(path, state)
}
