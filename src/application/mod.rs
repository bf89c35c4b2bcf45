// SPDX-License-Identifier: MPL-2.0
//! Application layer - the lightbox use case and its ports.
//!
//! - [`lightbox`]: the overlay controller (state machine, preload policy,
//!   stale-result suppression)
//! - [`port`]: trait definitions the presentation layer implements
//!
//! # Dependency Rule
//!
//! - Application layer depends on the domain layer (galleries, directions)
//! - The Iced host implements the [`port::Surface`] trait
//! - Nothing here knows about widgets, HTTP or decoding
//!
//! # Example
//!
//! ```ignore
//! use iced_lightbox::application::lightbox::{Controller, Message};
//!
//! let mut controller = Controller::default();
//! let effects = controller.handle(Message::Open { gallery, index: 0 }, &mut surface);
//! ```

pub mod lightbox;
pub mod port;
