// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters to integrate with other Overstory crates.
//!
//! Enabled via feature flags to keep the core small and dependency-free.

#[cfg(feature = "host_adapter")]
pub mod host;
