// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The persisted global watched state: `users -> libraries -> movies/series`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::library::LibraryData;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserData {
 #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
 pub libraries: BTreeMap<String, LibraryData>,
}

impl UserData {
 pub fn library_mut(&mut self, name: &str) -> &mut LibraryData {
 self.libraries
 .entry(name.to_string())
 .or_insert_with(|| LibraryData::new(name))
 }
}

/// Top-level persisted watched state, owned exclusively by the reconciler
/// process.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WatchedState {
 #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
 pub users: BTreeMap<String, UserData>,
}

impl WatchedState {
 pub fn new() -> Self {
 Self::default()
 }

 pub fn user_mut(&mut self, name: &str) -> &mut UserData {
 self.users.entry(name.to_string()).or_default()
 }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
