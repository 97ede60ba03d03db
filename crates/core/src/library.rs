// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A library (movie or show collection) within one user's data.

use serde::{Deserialize, Serialize};

use crate::item::MediaItem;
use crate::series::Series;

/// The two library types the system understands; other types are
/// silently skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LibraryKind {
 Movie,
 Show,
}

impl LibraryKind {
 pub fn parse(raw: &str) -> Option<Self> {
 match raw.to_ascii_lowercase().as_str() {
 "movie" | "movies" => Some(Self::Movie),
 "show" | "shows" | "series" | "tv" => Some(Self::Show),
 _ => None,
 }
 }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LibraryData {
 pub title: String,
 #[serde(default, skip_serializing_if = "Vec::is_empty")]
 pub movies: Vec<MediaItem>,
 #[serde(default, skip_serializing_if = "Vec::is_empty")]
 pub series: Vec<Series>,
}

impl LibraryData {
 pub fn new(title: impl Into<String>) -> Self {
 Self {
 title: title.into(),
 movies: Vec::new(),
 series: Vec::new(),
 }
 }

 pub fn is_empty(&self) -> bool {
 self.movies.is_empty() && self.series.is_empty()
 }
}
