// SPDX-License-Identifier: MPL-2.0
//! Overlay state owned by the lightbox controller.

use crate::domain::{step_index, Direction, Gallery, ImageDescriptor};
use std::collections::HashSet;

/// URLs confirmed fetched for the current gallery.
///
/// Cleared on every open so entries from a previous gallery never satisfy a
/// preload check for the new one, even when URLs collide.
#[derive(Debug, Clone, Default)]
pub struct PreloadSet {
    urls: HashSet<String>,
}

impl PreloadSet {
    /// Records a URL. Recording an existing URL is a no-op.
    pub fn insert(&mut self, url: &str) {
        if !self.urls.contains(url) {
            self.urls.insert(url.to_owned());
        }
    }

    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    pub fn clear(&mut self) {
        self.urls.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

/// Open/closed flag, current gallery position and bookkeeping tokens.
///
/// `session` changes on every open and `generation` on every render; async
/// completions carry the values they were issued with and are discarded when
/// they no longer match.
#[derive(Debug, Clone, Default)]
pub struct OverlayState {
    pub(super) is_open: bool,
    pub(super) gallery: Gallery,
    pub(super) current_index: usize,
    pub(super) preloaded: PreloadSet,
    pub(super) session: u64,
    pub(super) generation: u64,
    /// Generation whose failure-reset timer is still allowed to fire.
    pub(super) pending_reset: Option<u64>,
}

impl OverlayState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current(&self) -> Option<&ImageDescriptor> {
        self.gallery.get(self.current_index)
    }

    #[must_use]
    pub fn preloaded(&self) -> &PreloadSet {
        &self.preloaded
    }

    #[must_use]
    pub fn session(&self) -> u64 {
        self.session
    }

    /// Index one step away from the current one, wrapped.
    #[must_use]
    pub fn neighbor(&self, direction: Direction) -> usize {
        step_index(self.current_index, direction, self.gallery.len())
    }
}
