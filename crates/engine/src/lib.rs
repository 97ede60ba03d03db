// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! msr-engine: the reconciliation pipeline — Fetch, Prune, Merge,
//! Sync-Ledger, Diff & Push, and the Playlist Reconciler — driven once per
//! cycle by [`cycle::run_watched_cycle`] / [`cycle::run_playlist_cycle`].

pub mod canonical;
pub mod cycle;
pub mod diff_push;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod mapping;
pub mod merge;
pub mod playlist;
pub mod pool;
pub mod prune;
pub mod sync_ledger;

pub use cycle::{CycleConfig, CycleReport, ServerEntry};
pub use error::EngineError;
pub use filter::{LibraryFilter, NameFilter};
pub use mapping::NameMapping;
pub use playlist::PlaylistAction;
