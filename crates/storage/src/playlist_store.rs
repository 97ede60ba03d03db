// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use msr_core::PlaylistState;

use crate::error::StorageError;
use crate::file_store;

pub fn load_playlist_state(path: &Path) -> PlaylistState {
 file_store::load(path)
}

pub fn save_playlist_state(path: &Path, state: &PlaylistState) -> Result<(), StorageError> {
 file_store::save(path, state)
}
