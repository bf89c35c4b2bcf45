// SPDX-License-Identifier: MPL-2.0
//! Domain layer: value objects with no dependency on the UI toolkit.
//!
//! - [`gallery`]: [`ImageDescriptor`](gallery::ImageDescriptor),
//!   [`Gallery`](gallery::Gallery) and wrap-around stepping.

pub mod gallery;

pub use gallery::{step_index, Direction, Gallery, ImageDescriptor};
