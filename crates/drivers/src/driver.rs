// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::HashMap;

use async_trait::async_trait;
use msr_core::{LibraryKind, MediaIdentifiers, PlaylistState, UserData, UserPlaylists, WatchedState};

use crate::error::DriverError;

/// A user account as reported by a server, before it is resolved against
/// the canonical per-user identity used across servers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverUser {
 pub name: String,
 pub is_admin: bool,
 pub access_to_this_server: bool,
}

/// The capability contract the engine drives every media server through.
/// Implementations own authentication, request pacing, and translation of
/// server-native responses into the shared data model; they never decide
/// *whether* to push a change, only *how*.
///
/// Mutating calls take `dryrun`: a true driver still validates the request
/// and reports success, but performs no network write. This lets the
/// engine advance its sync ledger identically whether or not changes were
/// actually applied.
#[async_trait]
pub trait ServerDriver: Send + Sync {
 /// A short human-readable label for logs (hostname, display name).
 fn info(&self) -> &str;

 /// Stable identifier for this server instance, used as the key into
 /// per-item `synced_to_servers` maps.
 fn machine_id(&self) -> &str;

 async fn list_users(&self) -> Result<Vec<DriverUser>, DriverError>;

 async fn list_libraries(&self) -> Result<HashMap<String, LibraryKind>, DriverError>;

 /// Fetches current watched-state for the given users, restricted to
 /// `library_filter`. `previous_state` is supplied so a driver can skip
 /// re-fetching items it already knows are unchanged.
 async fn get_watched(
 &self,
 users: &[String],
 library_filter: &HashMap<String, LibraryKind>,
 previous_state: &WatchedState,
 ) -> Result<HashMap<String, UserData>, DriverError>;

 async fn get_playlists(
 &self,
 users: &[String],
 previous_playlist_state: &PlaylistState,
 ) -> Result<HashMap<String, UserPlaylists>, DriverError>;

 /// Pushes watched-status additions and removals, keyed by the server's
 /// own usernames. `user_mapping` and `library_mapping` translate
 /// canonical names back to this server's local names for any item a
 /// driver needs to resolve further (e.g. disambiguating a rename).
 async fn update_watched(
 &self,
 additions: &HashMap<String, UserData>,
 removals: &HashMap<String, UserData>,
 user_mapping: &HashMap<String, String>,
 library_mapping: &HashMap<String, String>,
 dryrun: bool,
 ) -> Result<(), DriverError>;

 async fn update_playlists(
 &self,
 playlists: &HashMap<String, UserPlaylists>,
 user_mapping: &HashMap<String, String>,
 dryrun: bool,
 ) -> Result<(), DriverError>;

 async fn delete_playlist_by_title(
 &self,
 user: &str,
 title: &str,
 dryrun: bool,
 ) -> Result<(), DriverError>;

 async fn remove_item_from_playlist(
 &self,
 user: &str,
 title: &str,
 identifiers: &MediaIdentifiers,
 dryrun: bool,
 ) -> Result<(), DriverError>;

 /// Releases any held connection or session. Called once per server at
 /// shutdown; drivers with nothing to release can no-op.
 async fn close(&self) -> Result<(), DriverError>;
}
