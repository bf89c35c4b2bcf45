// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page and the lightbox.
//!
//! The `App` struct wires together the page scan, the lightbox controller, the
//! decoded image cache and localization, and translates controller effects
//! into Iced tasks (image fetches, preloads, the failure-reset timer).

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::lightbox::{Controller, Labels, Settings};
use crate::config;
use crate::i18n::fluent::I18n;
use crate::media::{self, CacheConfig, ImageCache};
use crate::ui::lightbox::PageSurface;
use crate::ui::page::PageStatus;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    page: PageStatus,
    controller: Controller,
    surface: PageSurface,
    cache: ImageCache,
    client: reqwest::Client,
    /// i18n key of a startup warning shown above the page.
    warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("page", &self.page)
            .field("lightbox_open", &self.controller.is_open())
            .field("cache", &self.cache)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Indicator texts for the current locale.
fn labels(i18n: &I18n) -> Labels {
    Labels {
        loading: i18n.tr("lightbox-loading"),
        failed: i18n.tr("lightbox-load-failed"),
    }
}

fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to default HTTP client");
            reqwest::Client::new()
        })
}

impl App {
    /// Initializes application state and kicks off the page fetch when a page
    /// was given on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut preload = config.preload.clone();
        if flags.no_preload {
            preload.enabled = Some(false);
        }
        let settings = Settings {
            failure_reset_delay: config.lightbox.failure_reset_delay(),
            preload_enabled: preload.is_enabled(),
        };
        tracing::debug!(
            ?settings,
            locale = %i18n.current_locale(),
            config_dir = ?paths::get_app_config_dir(),
            "starting"
        );

        let mut app = App {
            controller: Controller::new(labels(&i18n), settings),
            i18n,
            page: PageStatus::NoSource,
            surface: PageSurface::default(),
            cache: ImageCache::new(CacheConfig::from(&preload)),
            client: http_client(),
            warning,
        };

        let task = match flags.page {
            Some(location) => {
                app.page = PageStatus::Loading;
                Task::perform(
                    media::load_document(app.client.clone(), location),
                    Message::PageLoaded,
                )
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match &self.page {
            PageStatus::Ready(page) => match &page.title {
                Some(title) => format!("{title} - {app_name}"),
                None => app_name,
            },
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.controller.is_open())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            page: &mut self.page,
            controller: &mut self.controller,
            surface: &mut self.surface,
            cache: &mut self.cache,
            client: &self.client,
        };

        match message {
            Message::PageLoaded(result) => update::handle_page_loaded(&mut ctx, result),
            Message::Page(page_message) => update::handle_page_message(&mut ctx, page_message),
            Message::Lightbox(lightbox_message) => {
                update::handle_lightbox_message(&mut ctx, lightbox_message)
            }
            Message::ImageLoaded { ticket, result } => {
                update::handle_image_loaded(&mut ctx, ticket, result)
            }
            Message::ImagePreloaded { ticket, result } => {
                update::handle_image_preloaded(&mut ctx, &ticket, result);
                Task::none()
            }
            Message::LoadingResetElapsed(ticket) => {
                ctx.controller.loading_reset_elapsed(ticket, ctx.surface);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            page: &self.page,
            controller: &self.controller,
            surface: &self.surface,
            warning: self.warning.as_deref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_locale() {
        let i18n = I18n::new(Some("fr".to_string()), &config::Config::default());
        let labels = labels(&i18n);
        assert_eq!(labels.loading, "chargement...");
        assert_ne!(labels.failed, Labels::default().failed);
    }

    #[test]
    fn window_minimum_fits_default() {
        let settings = window_settings();
        let min = settings.min_size.expect("min size");
        assert!(min.width <= settings.size.width);
        assert!(min.height <= settings.size.height);
    }
}
