// SPDX-License-Identifier: MPL-2.0
//! `iced_lightbox` opens an HTML page, finds its image galleries and shows
//! them in a keyboard-navigable lightbox overlay built with the Iced GUI
//! framework.
//!
//! Galleries are discovered per `<article>`, images are fetched over HTTP(S)
//! or from disk, and the next image in the direction of travel is preloaded
//! into a memory-bounded cache.

#![doc(html_root_url = "https://docs.rs/iced_lightbox/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod discovery;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
