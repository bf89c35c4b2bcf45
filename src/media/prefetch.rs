// SPDX-License-Identifier: MPL-2.0
//! Decoded image cache shared by overlay loads and neighbour preloads.
//!
//! A preload only warms this cache. When the overlay later asks for the same
//! URL the decoded image is served from memory instead of refetched.
//!
//! - **LRU eviction**: least recently used images go first
//! - **Memory-bounded**: total size limited by a byte budget
//! - **URL-keyed**: entries indexed by the resolved image URL

use crate::config::{
    PreloadConfig, DEFAULT_CACHE_MAX_IMAGES, DEFAULT_CACHE_MB, MAX_CACHE_MAX_IMAGES,
    MAX_CACHE_MB, MIN_CACHE_MAX_IMAGES, MIN_CACHE_MB,
};
use crate::media::ImageData;
use lru::LruCache;
use std::num::NonZeroUsize;

const MB: usize = 1024 * 1024;

/// Limits for the decoded image cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    pub max_bytes: usize,
    pub max_images: usize,
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_CACHE_MB as usize * MB,
            max_images: DEFAULT_CACHE_MAX_IMAGES,
            enabled: true,
        }
    }
}

impl CacheConfig {
    /// Creates a configuration with limits clamped to the supported range.
    #[must_use]
    pub fn new(max_bytes: usize, max_images: usize) -> Self {
        Self {
            max_bytes: max_bytes.clamp(MIN_CACHE_MB as usize * MB, MAX_CACHE_MB as usize * MB),
            max_images: max_images.clamp(MIN_CACHE_MAX_IMAGES, MAX_CACHE_MAX_IMAGES),
            enabled: true,
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }
}

impl From<&PreloadConfig> for CacheConfig {
    fn from(config: &PreloadConfig) -> Self {
        if config.is_enabled() {
            Self::new(config.cache_bytes(), config.cache_max_images())
        } else {
            Self::disabled()
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    image: ImageData,
    size_bytes: usize,
}

/// LRU cache of decoded images keyed by URL.
pub struct ImageCache {
    cache: LruCache<String, CacheEntry>,
    config: CacheConfig,
    current_bytes: usize,
}

impl ImageCache {
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_images).unwrap_or(NonZeroUsize::MIN);

        Self {
            cache: LruCache::new(capacity),
            config,
            current_bytes: 0,
        }
    }

    /// Stores a decoded image.
    ///
    /// Returns `false` if caching is disabled or the image exceeds half the
    /// byte budget.
    pub fn insert(&mut self, url: String, image: ImageData) -> bool {
        if !self.config.enabled {
            return false;
        }

        let size_bytes = image.size_bytes();
        if size_bytes > self.config.max_bytes / 2 {
            tracing::debug!(%url, size_bytes, "image too large to cache");
            return false;
        }

        if let Some(existing) = self.cache.pop(&url) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes);
        }

        while self.current_bytes + size_bytes > self.config.max_bytes {
            let Some((_, evicted)) = self.cache.pop_lru() else {
                break;
            };
            self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
        }

        // `push` hands back the entry displaced by the count limit.
        if let Some((_, evicted)) = self.cache.push(url, CacheEntry { image, size_bytes }) {
            self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
        }
        self.current_bytes += size_bytes;

        true
    }

    /// Returns the cached image for `url`, marking it recently used.
    pub fn get(&mut self, url: &str) -> Option<ImageData> {
        if !self.config.enabled {
            return None;
        }

        self.cache.get(url).map(|entry| entry.image.clone())
    }

    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        self.config.enabled && self.cache.contains(url)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("enabled", &self.config.enabled)
            .field("image_count", &self.cache.len())
            .field("memory_usage", &self.current_bytes)
            .field("max_bytes", &self.config.max_bytes)
            .field("max_images", &self.config.max_images)
            .finish()
    }
}
