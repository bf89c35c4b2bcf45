// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay controller.
//!
//! The controller owns the [`OverlayState`] and is the only place where it
//! changes. User intents arrive as [`Message`]s; async completions arrive
//! through the `*_finished`/`*_elapsed` methods. Every call draws through a
//! [`Surface`] and returns the [`Effect`]s the host must run (image fetches,
//! background preloads, the failure-reset timer).
//!
//! ```text
//!            open                 navigate
//!   Closed ────────▶ Open ◀──────────────┐
//!     ▲               │ └─────────────────┘
//!     └───────────────┘
//!     close / Escape / backdrop
//! ```

mod state;

pub use state::{OverlayState, PreloadSet};

use crate::application::port::Surface;
use crate::config::DEFAULT_FAILURE_RESET_SECS;
use crate::domain::{Direction, Gallery};
use std::time::Duration;

/// Request to load the full-size image of a gallery entry for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub url: String,
    pub index: usize,
    session: u64,
    generation: u64,
}

/// Request to warm the cache with a neighbouring entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreloadTicket {
    pub url: String,
    session: u64,
}

/// Token for the delayed reset of the loading indicator after a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTicket {
    generation: u64,
}

/// Side effects requested by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch and decode the image, then report through
    /// [`Controller::load_succeeded`] or [`Controller::load_failed`].
    Load(LoadTicket),
    /// Fetch in the background, then report through
    /// [`Controller::preload_finished`].
    Preload(PreloadTicket),
    /// Wait `delay`, then call [`Controller::loading_reset_elapsed`].
    ScheduleLoadingReset { ticket: ResetTicket, delay: Duration },
}

/// Keys the overlay reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
}

/// Where a pointer press inside the overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressTarget {
    /// The dimmed area around the content.
    Backdrop,
    /// The content box, outside the image and controls.
    Content,
    Image,
    Control,
    /// Text drawn over the content: position badge, loading indicator, caption.
    Label,
}

impl PressTarget {
    fn closes_overlay(self) -> bool {
        matches!(self, PressTarget::Backdrop | PressTarget::Content)
    }
}

/// User intents handled by the controller.
#[derive(Debug, Clone)]
pub enum Message {
    /// An image link was activated.
    Open { gallery: Gallery, index: usize },
    Navigate(Direction),
    Close,
    Pressed(PressTarget),
    KeyPressed(Key),
}

/// Texts written into the loading indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub loading: String,
    pub failed: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            loading: "loading...".to_owned(),
            failed: "failed to load image".to_owned(),
        }
    }
}

/// Tunables taken from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// How long the failure message stays before the indicator resets.
    pub failure_reset_delay: Duration,
    /// Whether neighbouring entries are fetched ahead of navigation.
    pub preload_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            failure_reset_delay: Duration::from_secs(DEFAULT_FAILURE_RESET_SECS),
            preload_enabled: true,
        }
    }
}

/// Drives the overlay state machine.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    state: OverlayState,
    labels: Labels,
    settings: Settings,
    mounted: bool,
}

impl Controller {
    #[must_use]
    pub fn new(labels: Labels, settings: Settings) -> Self {
        Self {
            labels,
            settings,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Handles a user intent.
    pub fn handle<S: Surface>(&mut self, message: Message, surface: &mut S) -> Vec<Effect> {
        match message {
            Message::Open { gallery, index } => self.open(gallery, index, surface),
            Message::Navigate(direction) => self.navigate(direction, surface),
            Message::Close => {
                self.close(surface);
                Vec::new()
            }
            Message::Pressed(target) => {
                if self.state.is_open && target.closes_overlay() {
                    self.close(surface);
                }
                Vec::new()
            }
            Message::KeyPressed(key) => {
                if !self.state.is_open {
                    return Vec::new();
                }
                match key {
                    Key::Escape => {
                        self.close(surface);
                        Vec::new()
                    }
                    Key::ArrowLeft => self.navigate(Direction::Previous, surface),
                    Key::ArrowRight => self.navigate(Direction::Next, surface),
                }
            }
        }
    }

    fn open<S: Surface>(&mut self, gallery: Gallery, index: usize, surface: &mut S) -> Vec<Effect> {
        if index >= gallery.len() {
            tracing::warn!(index, len = gallery.len(), "ignoring activation outside gallery");
            return Vec::new();
        }

        if !self.mounted {
            surface.mount();
            self.mounted = true;
        }

        self.state.gallery = gallery;
        self.state.current_index = index;
        self.state.preloaded.clear();
        self.state.session += 1;
        tracing::debug!(
            session = self.state.session,
            index,
            len = self.state.gallery.len(),
            "opening lightbox"
        );

        let mut effects = vec![self.render(surface)];
        surface.set_overlay_visible(true);
        surface.set_scroll_locked(true);
        self.state.is_open = true;

        effects.extend(self.preload_neighbor(Direction::Next));
        effects
    }

    fn navigate<S: Surface>(&mut self, direction: Direction, surface: &mut S) -> Vec<Effect> {
        if !self.state.is_open {
            return Vec::new();
        }

        self.state.current_index = self.state.neighbor(direction);
        tracing::debug!(index = self.state.current_index, ?direction, "navigating");

        let mut effects = vec![self.render(surface)];
        effects.extend(self.preload_neighbor(direction));
        effects
    }

    fn close<S: Surface>(&mut self, surface: &mut S) {
        if !self.mounted {
            return;
        }
        surface.set_overlay_visible(false);
        surface.set_scroll_locked(false);
        if self.state.is_open {
            tracing::debug!(session = self.state.session, "closing lightbox");
        }
        self.state.is_open = false;
    }

    /// Resets the display for the current entry and requests its load.
    fn render<S: Surface>(&mut self, surface: &mut S) -> Effect {
        self.state.generation += 1;
        self.state.pending_reset = None;

        surface.set_loading_text(&self.labels.loading);
        surface.set_loading_visible(true);
        surface.set_image_visible(false);
        surface.set_nav_visible(self.state.gallery.is_navigable());

        let url = self
            .state
            .current()
            .map(|image| image.full_url().to_owned())
            .unwrap_or_default();

        Effect::Load(LoadTicket {
            url,
            index: self.state.current_index,
            session: self.state.session,
            generation: self.state.generation,
        })
    }

    fn preload_neighbor(&self, direction: Direction) -> Option<Effect> {
        if !self.settings.preload_enabled || !self.state.gallery.is_navigable() {
            return None;
        }

        let next = self.state.neighbor(direction);
        let url = self.state.gallery.get(next)?.full_url();
        if self.state.preloaded.contains(url) {
            return None;
        }

        Some(Effect::Preload(PreloadTicket {
            url: url.to_owned(),
            session: self.state.session,
        }))
    }

    fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.session == self.state.session && ticket.generation == self.state.generation
    }

    /// Reports a successful display load.
    ///
    /// Stale completions only record their URL as preloaded.
    pub fn load_succeeded<S: Surface>(
        &mut self,
        ticket: &LoadTicket,
        image: S::Image,
        surface: &mut S,
    ) {
        if ticket.session == self.state.session {
            self.state.preloaded.insert(&ticket.url);
        }

        if !self.is_current(ticket) {
            tracing::debug!(url = %ticket.url, "discarding stale image load");
            return;
        }

        let alt = self
            .state
            .gallery
            .get(ticket.index)
            .map(|image| image.alt_text())
            .unwrap_or_default();
        surface.set_image(image, alt);
        surface.set_loading_visible(false);
        surface.set_image_visible(true);
    }

    /// Reports a failed display load.
    pub fn load_failed<S: Surface>(&mut self, ticket: &LoadTicket, surface: &mut S) -> Vec<Effect> {
        if !self.is_current(ticket) {
            tracing::debug!(url = %ticket.url, "discarding stale image failure");
            return Vec::new();
        }

        surface.set_loading_text(&self.labels.failed);
        self.state.pending_reset = Some(self.state.generation);

        vec![Effect::ScheduleLoadingReset {
            ticket: ResetTicket {
                generation: self.state.generation,
            },
            delay: self.settings.failure_reset_delay,
        }]
    }

    /// Hides the failure message, unless a newer render cancelled the timer.
    pub fn loading_reset_elapsed<S: Surface>(&mut self, ticket: ResetTicket, surface: &mut S) {
        if self.state.pending_reset != Some(ticket.generation) {
            return;
        }
        self.state.pending_reset = None;
        surface.set_loading_visible(false);
        surface.set_loading_text(&self.labels.loading);
    }

    /// Reports the outcome of a background preload. Failures are dropped.
    pub fn preload_finished(&mut self, ticket: &PreloadTicket, succeeded: bool) {
        if succeeded && ticket.session == self.state.session {
            self.state.preloaded.insert(&ticket.url);
        }
    }
}

#[cfg(test)]
mod tests;
