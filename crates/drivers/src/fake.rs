// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::HashMap;

use async_trait::async_trait;
use msr_core::{LibraryKind, MediaIdentifiers, PlaylistState, UserData, UserPlaylists, WatchedState};
use parking_lot::Mutex;

use crate::driver::{DriverUser, ServerDriver};
use crate::error::DriverError;

/// Everything a [`FakeDriver`] remembers, separated from the outer struct
/// so tests can lock it once and inspect both seeded state and recorded
/// calls without juggling multiple mutexes.
#[derive(Debug, Default)]
struct Inner {
 users: Vec<DriverUser>,
 libraries: HashMap<String, LibraryKind>,
 watched: HashMap<String, UserData>,
 playlists: HashMap<String, UserPlaylists>,
 pushed_additions: Vec<HashMap<String, UserData>>,
 pushed_removals: Vec<HashMap<String, UserData>>,
 pushed_playlists: Vec<HashMap<String, UserPlaylists>>,
 deleted_playlists: Vec<(String, String)>,
 removed_items: Vec<(String, String, MediaIdentifiers)>,
 closed: bool,
 fail_next: Option<DriverError>,
}

/// An in-memory [`ServerDriver`] for engine tests. Seed it with users,
/// libraries, and watched/playlist state, then assert on what the engine
/// pushed back through `pushed_*`/`deleted_playlists`/`removed_items`.
pub struct FakeDriver {
 machine_id: String,
 info: String,
 inner: Mutex<Inner>,
}

impl FakeDriver {
 pub fn new(machine_id: impl Into<String>, info: impl Into<String>) -> Self {
 Self {
 machine_id: machine_id.into(),
 info: info.into(),
 inner: Mutex::new(Inner::default()),
 }
 }

 pub fn with_users(self, users: Vec<DriverUser>) -> Self {
 self.inner.lock().users = users;
 self
 }

 pub fn with_libraries(self, libraries: HashMap<String, LibraryKind>) -> Self {
 self.inner.lock().libraries = libraries;
 self
 }

 pub fn seed_watched(self, watched: HashMap<String, UserData>) -> Self {
 self.inner.lock().watched = watched;
 self
 }

 pub fn seed_playlists(self, playlists: HashMap<String, UserPlaylists>) -> Self {
 self.inner.lock().playlists = playlists;
 self
 }

 /// Makes the next mutating call return `err` instead of succeeding.
 pub fn fail_next_call(&self, err: DriverError) {
 self.inner.lock().fail_next = Some(err);
 }

 pub fn pushed_additions(&self) -> Vec<HashMap<String, UserData>> {
 self.inner.lock().pushed_additions.clone()
 }

 pub fn pushed_removals(&self) -> Vec<HashMap<String, UserData>> {
 self.inner.lock().pushed_removals.clone()
 }

 pub fn pushed_playlists(&self) -> Vec<HashMap<String, UserPlaylists>> {
 self.inner.lock().pushed_playlists.clone()
 }

 pub fn deleted_playlists(&self) -> Vec<(String, String)> {
 self.inner.lock().deleted_playlists.clone()
 }

 pub fn removed_items(&self) -> Vec<(String, String, MediaIdentifiers)> {
 self.inner.lock().removed_items.clone()
 }

 pub fn was_closed(&self) -> bool {
 self.inner.lock().closed
 }

 fn take_failure(&self) -> Option<DriverError> {
 self.inner.lock().fail_next.take()
 }
}

#[async_trait]
impl ServerDriver for FakeDriver {
 fn info(&self) -> &str {
 &self.info
 }

 fn machine_id(&self) -> &str {
 &self.machine_id
 }

 async fn list_users(&self) -> Result<Vec<DriverUser>, DriverError> {
 if let Some(err) = self.take_failure() {
 return Err(err);
 }
 Ok(self.inner.lock().users.clone())
 }

 async fn list_libraries(&self) -> Result<HashMap<String, LibraryKind>, DriverError> {
 if let Some(err) = self.take_failure() {
 return Err(err);
 }
 Ok(self.inner.lock().libraries.clone())
 }

 async fn get_watched(
 &self,
 users: &[String],
 _library_filter: &HashMap<String, LibraryKind>,
 _previous_state: &WatchedState,
 ) -> Result<HashMap<String, UserData>, DriverError> {
 if let Some(err) = self.take_failure() {
 return Err(err);
 }
 let inner = self.inner.lock();
 Ok(inner
 .watched
 .iter()
 .filter(|(user, _)| users.contains(user))
 .map(|(user, data)| (user.clone(), data.clone()))
 .collect())
 }

 async fn get_playlists(
 &self,
 users: &[String],
 _previous_playlist_state: &PlaylistState,
 ) -> Result<HashMap<String, UserPlaylists>, DriverError> {
 if let Some(err) = self.take_failure() {
 return Err(err);
 }
 let inner = self.inner.lock();
 Ok(inner
 .playlists
 .iter()
 .filter(|(user, _)| users.contains(user))
 .map(|(user, data)| (user.clone(), data.clone()))
 .collect())
 }

 async fn update_watched(
 &self,
 additions: &HashMap<String, UserData>,
 removals: &HashMap<String, UserData>,
 _user_mapping: &HashMap<String, String>,
 _library_mapping: &HashMap<String, String>,
 dryrun: bool,
 ) -> Result<(), DriverError> {
 if let Some(err) = self.take_failure() {
 return Err(err);
 }
 if dryrun {
 return Ok(());
 }
 let mut inner = self.inner.lock();
 inner.pushed_additions.push(additions.clone());
 inner.pushed_removals.push(removals.clone());
 Ok(())
 }

 async fn update_playlists(
 &self,
 playlists: &HashMap<String, UserPlaylists>,
 _user_mapping: &HashMap<String, String>,
 dryrun: bool,
 ) -> Result<(), DriverError> {
 if let Some(err) = self.take_failure() {
 return Err(err);
 }
 if dryrun {
 return Ok(());
 }
 self.inner.lock().pushed_playlists.push(playlists.clone());
 Ok(())
 }

 async fn delete_playlist_by_title(
 &self,
 user: &str,
 title: &str,
 dryrun: bool,
 ) -> Result<(), DriverError> {
 if let Some(err) = self.take_failure() {
 return Err(err);
 }
 if dryrun {
 return Ok(());
 }
 self.inner
 .lock()
 .deleted_playlists
 .push((user.to_string(), title.to_string()));
 Ok(())
 }

 async fn remove_item_from_playlist(
 &self,
 user: &str,
 title: &str,
 identifiers: &MediaIdentifiers,
 dryrun: bool,
 ) -> Result<(), DriverError> {
 if let Some(err) = self.take_failure() {
 return Err(err);
 }
 if dryrun {
 return Ok(());
 }
 self.inner
 .lock()
 .removed_items
 .push((user.to_string(), title.to_string(), identifiers.clone()));
 Ok(())
 }

 async fn close(&self) -> Result<(), DriverError> {
 self.inner.lock().closed = true;
 Ok(())
 }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
