// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Allow/deny filtering for the Fetch stage's user and library enumeration:
//! users by name, libraries by name and by [`msr_core::LibraryKind`].
//! Loading the allow/deny lists themselves is out of scope; this only
//! applies already-parsed lists.

use std::collections::HashSet;

use msr_core::LibraryKind;

/// An allow-list / deny-list pair over string keys. An empty allow-list
/// means "no restriction". Deny is checked first: "allow-list set ⇒ keep
/// only those in it, deny-list ⇒ drop those in it regardless".
#[derive(Debug, Clone, Default)]
pub struct NameFilter {
 allow: Option<HashSet<String>>,
 deny: HashSet<String>,
}

impl NameFilter {
 pub fn new(allow: Option<HashSet<String>>, deny: HashSet<String>) -> Self {
 Self { allow, deny }
 }

 pub fn permits(&self, name: &str) -> bool {
 if self.deny.contains(name) {
 return false;
 }
 match &self.allow {
 Some(allow) => allow.contains(name),
 None => true,
 }
 }
}

/// Library filtering additionally restricts by type — only `movie`/`show`
/// pass at all; anything else is silently skipped regardless of the
/// configured lists.
#[derive(Debug, Clone, Default)]
pub struct LibraryFilter {
 pub name: NameFilter,
 pub kind: NameFilter,
}

impl LibraryFilter {
 pub fn new(name: NameFilter, kind: NameFilter) -> Self {
 Self { name, kind }
 }

 pub fn permits(&self, library_name: &str, kind: LibraryKind) -> bool {
 let kind_label = match kind {
 LibraryKind::Movie => "movie",
 LibraryKind::Show => "show",
 };
 self.name.permits(library_name) && self.kind.permits(kind_label)
 }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
