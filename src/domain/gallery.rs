// SPDX-License-Identifier: MPL-2.0
//! Gallery value objects.
//!
//! A [`Gallery`] is the ordered list of [`ImageDescriptor`]s belonging to one
//! content container. Galleries are immutable and cheap to clone: opening the
//! lightbox hands the controller its own reference to the shared list.

use std::sync::Arc;

/// One navigable image: the full-size URL plus the text shown to screen
/// readers and in the overlay.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageDescriptor {
    full_url: String,
    alt_text: String,
}

impl ImageDescriptor {
    /// Creates a descriptor from the link target and the thumbnail's alt text.
    #[must_use]
    pub fn new(full_url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            full_url: full_url.into(),
            alt_text: alt_text.into(),
        }
    }

    #[must_use]
    pub fn full_url(&self) -> &str {
        &self.full_url
    }

    #[must_use]
    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }
}

/// Ordered, shared sequence of image descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery(Arc<[ImageDescriptor]>);

impl Gallery {
    #[must_use]
    pub fn new(images: Vec<ImageDescriptor>) -> Self {
        Self(Arc::from(images))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true when the gallery has something to navigate to.
    #[must_use]
    pub fn is_navigable(&self) -> bool {
        self.0.len() > 1
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageDescriptor> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageDescriptor> {
        self.0.iter()
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl FromIterator<ImageDescriptor> for Gallery {
    fn from_iter<I: IntoIterator<Item = ImageDescriptor>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Gallery {
    type Item = &'a ImageDescriptor;
    type IntoIter = std::slice::Iter<'a, ImageDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Direction of travel through a gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Steps `current` once in `direction`, wrapping at both ends.
///
/// `len` must be non-zero; an empty gallery has no valid index and yields 0.
#[must_use]
pub fn step_index(current: usize, direction: Direction, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let current = current % len;
    match direction {
        Direction::Next => (current + 1) % len,
        Direction::Previous => (current + len - 1) % len,
    }
}
