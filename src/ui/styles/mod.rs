// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the page and the overlay.

pub mod button;
pub mod container;
pub mod overlay;
pub mod tooltip;
