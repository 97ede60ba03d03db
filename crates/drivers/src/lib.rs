// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! The `ServerDriver` capability contract a media server implements to be
//! driven by the reconciliation engine, plus an in-memory test double.
//! Concrete drivers (Plex, Jellyfin, ...) live outside this crate — it
//! defines only the seam the engine consumes.

mod driver;
mod error;

#[cfg(any(test, feature = "test-support"))]
mod fake;

pub use driver::{DriverUser, ServerDriver};
pub use error::DriverError;

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeDriver;
