// SPDX-License-Identifier: MPL-2.0
//! User interface: the scanned page and the lightbox overlay on top of it.
//!
//! Follows the Elm-style "state down, messages up" pattern. Views only read
//! state and emit messages; all changes go through `App::update`.
//!
//! - [`page`] - Gallery cards and image link tiles
//! - [`lightbox`] - Overlay view model and rendering
//! - [`widgets`] - Custom Iced widgets (scroll lock)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod lightbox;
pub mod page;
pub mod styles;
pub mod widgets;
