// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! - [`surface`]: what the lightbox controller needs from a display.
//!
//! Ports use domain types only; no Iced handles appear in signatures. Async
//! work is not modelled here: callers turn controller effects into Iced
//! `Task`s and report results back.

pub mod surface;

pub use surface::Surface;
