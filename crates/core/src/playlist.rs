// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Playlists: named, ordered containers of [`MediaIdentifiers`], synced
//! the same way as watched state but specialized per (user, playlist
//! title) rather than per (user, library).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::identifiers::MediaIdentifiers;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
 pub title: String,
 #[serde(default, skip_serializing_if = "Vec::is_empty")]
 pub items: Vec<MediaIdentifiers>,
}

impl Playlist {
 pub fn new(title: impl Into<String>) -> Self {
 Self {
 title: title.into(),
 items: Vec::new(),
 }
 }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPlaylists {
 #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
 pub playlists: BTreeMap<String, Playlist>,
}

impl UserPlaylists {
 pub fn playlist_mut(&mut self, title: &str) -> &mut Playlist {
 self.playlists
 .entry(title.to_string())
 .or_insert_with(|| Playlist::new(title))
 }
}

/// Top-level persisted playlist state, stored separately from
/// [`crate::state::WatchedState`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaylistState {
 #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
 pub users: BTreeMap<String, UserPlaylists>,
}

impl PlaylistState {
 pub fn new() -> Self {
 Self::default()
 }

 pub fn user_mut(&mut self, name: &str) -> &mut UserPlaylists {
 self.users.entry(name.to_string()).or_default()
 }
}
