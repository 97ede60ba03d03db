// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical-name resolution applied during the Fetch stage's user
//! enumeration, so later merging keys everything by canonical name.
//!
//! Loading the mapping tables themselves from configuration is out of
//! scope here; this only applies an already-parsed table.

use std::collections::HashMap;

/// A server-local-name → canonical-name table, looked up case-insensitively
/// so server usernames match the mapping table regardless of case.
#[derive(Debug, Clone, Default)]
pub struct NameMapping {
 table: HashMap<String, String>,
}

impl NameMapping {
 pub fn new(table: HashMap<String, String>) -> Self {
 Self { table }
 }

 pub fn empty() -> Self {
 Self::default()
 }

 /// Resolves `server_local_name` to its canonical form, falling back to
 /// the original name when no mapping entry matches.
 pub fn canonical(&self, server_local_name: &str) -> String {
 self.table
 .iter()
 .find(|(k, _)| k.eq_ignore_ascii_case(server_local_name))
 .map(|(_, v)| v.clone())
 .unwrap_or_else(|| server_local_name.to_string())
 }

 /// The table a driver needs at push time: canonical name → this
 /// server's local name, the inverse of the fetch-time lookup.
 pub fn as_driver_table(&self) -> HashMap<String, String> {
 self.table.iter().map(|(local, canonical)| (canonical.clone(), local.clone())).collect()
 }
}

#[cfg(test)]
#[path = "mapping_tests.rs"]
mod tests;
