// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::lightbox::{self, LoadTicket, PreloadTicket, ResetTicket};
use crate::error::Error;
use crate::media::{Document, ImageData};
use crate::ui::page;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// The page given on the command line was fetched (or failed to be).
    PageLoaded(Result<Document, Error>),
    Page(page::Message),
    Lightbox(lightbox::Message),
    /// Result of loading the image the overlay is waiting for.
    ImageLoaded {
        ticket: LoadTicket,
        result: Result<ImageData, Error>,
    },
    /// Result of warming the cache with a neighbouring image.
    ImagePreloaded {
        ticket: PreloadTicket,
        result: Result<ImageData, Error>,
    },
    /// The failure message has been shown long enough.
    LoadingResetElapsed(ResetTicket),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// HTML page to open: a path or an `http(s)`/`file` URL.
    pub page: Option<String>,
    /// Disables neighbour preloading regardless of `settings.toml`.
    pub no_preload: bool,
}
