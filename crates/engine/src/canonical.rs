// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Canonicalization of a raw per-server snapshot into global (canonical)
//! user/library names by applying the configured name mapping tables. Done
//! once, right after fetch, so every later stage (prune, merge,
//! mark-already-synced, diff & push) works purely in canonical names and
//! never touches a mapping table again.

use std::collections::HashMap;

use msr_core::{PlaylistState, UserData, UserPlaylists, WatchedState};

use crate::mapping::NameMapping;

/// Folds every library under every raw (server-local) user into the
/// canonical user+library it maps to. If two server-local users map to the
/// same canonical name (or two libraries to the same canonical library),
/// their contents are merged union-style at this step using the same
/// last-wins-over-append rule a plain `HashMap` insert would give for
/// scalar fields — list-valued fields (`movies`, `series`) are
/// concatenated rather than overwritten, so no local data is dropped
/// purely by the renaming step itself.
pub fn canonicalize_watched(
 raw: HashMap<String, UserData>,
 user_mapping: &NameMapping,
 library_mapping: &NameMapping,
) -> HashMap<String, UserData> {
 let mut out: HashMap<String, UserData> = HashMap::new();
 for (local_user, user_data) in raw {
 let canonical_user = user_mapping.canonical(&local_user);
 let target_user = out.entry(canonical_user).or_default();
 for (local_lib, lib_data) in user_data.libraries {
 let canonical_lib = library_mapping.canonical(&local_lib);
 let target_lib = target_user.library_mut(&canonical_lib);
 target_lib.movies.extend(lib_data.movies);
 target_lib.series.extend(lib_data.series);
 }
 }
 out
}

pub fn canonicalize_playlists(
 raw: HashMap<String, UserPlaylists>,
 user_mapping: &NameMapping,
) -> HashMap<String, UserPlaylists> {
 let mut out: HashMap<String, UserPlaylists> = HashMap::new();
 for (local_user, user_playlists) in raw {
 let canonical_user = user_mapping.canonical(&local_user);
 let target_user = out.entry(canonical_user).or_default();
 for (title, playlist) in user_playlists.playlists {
 target_user.playlists.entry(title).or_insert(playlist);
 }
 }
 out
}

/// Convenience re-export point: callers needing the whole persisted shape
/// (e.g. to build a `previous_state` for a driver call) just wrap the
/// canonicalized map back into [`WatchedState`]/[`PlaylistState`].
pub fn as_watched_state(users: HashMap<String, UserData>) -> WatchedState {
 WatchedState { users: users.into_iter().collect() }
}

pub fn as_playlist_state(users: HashMap<String, UserPlaylists>) -> PlaylistState {
 PlaylistState { users: users.into_iter().collect() }
}

#[cfg(test)]
#[path = "canonical_tests.rs"]
mod tests;
