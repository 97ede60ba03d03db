// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The cross-server item match relation.
//!
//! Two items match if **any** of the following hold, checked in order:
//! 1. an external id (imdb/tvdb/tmdb) is shared and non-empty,
//! 2. a native guid matches literally or by suffix-form,
//! 3. their location basenames intersect.
//!
//! The relation is symmetric by construction but is *not* transitive:
//! never chain match results, always compare pairwise.

use crate::identifiers::MediaIdentifiers;

/// rule 1: external id hit.
fn external_id_match(a: &MediaIdentifiers, b: &MediaIdentifiers) -> bool {
 matches_on(&a.imdb_id, &b.imdb_id) || matches_on(&a.tvdb_id, &b.tvdb_id) || matches_on(&a.tmdb_id, &b.tmdb_id)
}

fn matches_on(a: &Option<String>, b: &Option<String>) -> bool {
 match (a, b) {
 (Some(a), Some(b)) => !a.is_empty() && a == b,
 _ => false,
 }
}

/// rule 2: native-guid hit, literal or suffix-form.
fn native_guid_match(a: &MediaIdentifiers, b: &MediaIdentifiers) -> bool {
 match (&a.native_guid, &b.native_guid) {
 (Some(ga), Some(gb)) => ga == gb || a.native_guid_suffix() == b.native_guid_suffix(),
 _ => false,
 }
}

/// rule 3: location hit — basenames intersect.
fn location_match(a: &MediaIdentifiers, b: &MediaIdentifiers) -> bool {
 if a.locations.is_empty() || b.locations.is_empty() {
 return false;
 }
 let a_names: std::collections::HashSet<&str> = a.location_basenames().collect();
 b.location_basenames().any(|name| a_names.contains(name))
}

/// The full match relation. Symmetric, not transitive:
/// `media_items_match(a, b) == media_items_match(b, a)` for all `a, b`.
pub fn media_items_match(a: &MediaIdentifiers, b: &MediaIdentifiers) -> bool {
 external_id_match(a, b) || native_guid_match(a, b) || location_match(a, b)
}

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;
