// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! msr-core: the cross-server media identity model, watched/playlist state,
//! and the item match relation that the rest of the reconciler is built on.

pub mod clock;
pub mod error;
pub mod identifiers;
pub mod identity;
pub mod item;
pub mod library;
pub mod playlist;
pub mod series;
pub mod state;
pub mod status;
pub mod sync;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use clock::{Clock, FakeClock, SystemClock};
pub use error::ItemError;
pub use identifiers::MediaIdentifiers;
pub use identity::media_items_match;
pub use item::MediaItem;
pub use library::{LibraryData, LibraryKind};
pub use playlist::{Playlist, PlaylistState, UserPlaylists};
pub use series::Series;
pub use state::{UserData, WatchedState};
pub use status::{WatchedStatus, PROGRESS_THRESHOLD_MS};
pub use sync::ServerSyncInfo;
