// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A TV series: identifiers plus an ordered list of episodes.

use serde::{Deserialize, Serialize};

use crate::identifiers::MediaIdentifiers;
use crate::item::MediaItem;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
 pub identifiers: MediaIdentifiers,
 #[serde(default, skip_serializing_if = "Vec::is_empty")]
 pub episodes: Vec<MediaItem>,
}

impl Series {
 pub fn new(identifiers: MediaIdentifiers) -> Self {
 Self {
 identifiers,
 episodes: Vec::new(),
 }
 }

 /// True once every episode has been pruned out from under it.
 pub fn is_empty(&self) -> bool {
 self.episodes.is_empty()
 }
}
