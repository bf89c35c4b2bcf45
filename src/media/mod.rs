// SPDX-License-Identifier: MPL-2.0
//! Image retrieval, decoding and caching.

pub mod fetch;
pub mod image;
pub mod prefetch;

pub use fetch::{load_document, load_image, resolve_location, Document};
pub use image::{decode_image, ImageData};
pub use prefetch::{CacheConfig, ImageCache};
