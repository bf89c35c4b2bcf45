// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Lightbox**: Failure message display time
//! - **Preload**: Decoded image cache bounds

// ==========================================================================
// Lightbox Defaults
// ==========================================================================

/// Seconds the "failed to load" message stays before the indicator resets.
pub const DEFAULT_FAILURE_RESET_SECS: u64 = 2;

/// Minimum failure message duration (in seconds).
pub const MIN_FAILURE_RESET_SECS: u64 = 1;

/// Maximum failure message duration (in seconds).
pub const MAX_FAILURE_RESET_SECS: u64 = 10;

// ==========================================================================
// Preload Cache Defaults
// ==========================================================================

/// Default decoded image cache size in megabytes.
/// Holds ~4 full HD images (8 MB each).
pub const DEFAULT_CACHE_MB: u32 = 32;

/// Minimum decoded image cache size in megabytes.
pub const MIN_CACHE_MB: u32 = 8;

/// Maximum decoded image cache size in megabytes.
pub const MAX_CACHE_MB: u32 = 128;

/// Default maximum number of cached images.
pub const DEFAULT_CACHE_MAX_IMAGES: usize = 16;

/// Minimum number of cached images.
pub const MIN_CACHE_MAX_IMAGES: usize = 4;

/// Maximum number of cached images.
pub const MAX_CACHE_MAX_IMAGES: usize = 32;
