// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers feed messages to the lightbox controller and turn the effects it
//! returns into Iced tasks. Cached images short-circuit the network.

use super::Message;
use crate::application::lightbox::{self, Controller, Effect, LoadTicket, PreloadTicket};
use crate::discovery;
use crate::error::Error;
use crate::media::{self, Document, ImageCache, ImageData};
use crate::ui::lightbox::PageSurface;
use crate::ui::page::{self, PageStatus};
use iced::Task;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub page: &'a mut PageStatus,
    pub controller: &'a mut Controller,
    pub surface: &'a mut PageSurface,
    pub cache: &'a mut ImageCache,
    pub client: &'a reqwest::Client,
}

pub fn handle_page_loaded(ctx: &mut UpdateContext<'_>, result: Result<Document, Error>) -> Task<Message> {
    *ctx.page = match result {
        Ok(document) => {
            let page = discovery::discover(&document.html, Some(&document.base));
            tracing::info!(
                url = %document.base,
                galleries = page.containers.len(),
                images = page.image_count(),
                "page ready"
            );
            PageStatus::Ready(page)
        }
        Err(err) => {
            tracing::warn!(%err, "page could not be loaded");
            PageStatus::Failed(err)
        }
    };
    Task::none()
}

pub fn handle_page_message(ctx: &mut UpdateContext<'_>, message: page::Message) -> Task<Message> {
    match message {
        page::Message::LinkActivated { container, index } => {
            let PageStatus::Ready(page) = &*ctx.page else {
                return Task::none();
            };
            let Some(found) = page.containers.get(container) else {
                tracing::warn!(container, "ignoring activation of unknown gallery");
                return Task::none();
            };
            let gallery = found.gallery().clone();
            handle_lightbox_message(ctx, lightbox::Message::Open { gallery, index })
        }
    }
}

pub fn handle_lightbox_message(
    ctx: &mut UpdateContext<'_>,
    message: lightbox::Message,
) -> Task<Message> {
    let effects = ctx.controller.handle(message, ctx.surface);
    run_effects(ctx, effects)
}

pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    ticket: LoadTicket,
    result: Result<ImageData, Error>,
) -> Task<Message> {
    match result {
        Ok(image) => {
            ctx.cache.insert(ticket.url.clone(), image.clone());
            ctx.controller.load_succeeded(&ticket, image, ctx.surface);
            Task::none()
        }
        Err(err) => {
            tracing::warn!(url = %ticket.url, %err, "image failed to load");
            let effects = ctx.controller.load_failed(&ticket, ctx.surface);
            run_effects(ctx, effects)
        }
    }
}

pub fn handle_image_preloaded(
    ctx: &mut UpdateContext<'_>,
    ticket: &PreloadTicket,
    result: Result<ImageData, Error>,
) {
    let succeeded = match result {
        Ok(image) => {
            ctx.cache.insert(ticket.url.clone(), image);
            true
        }
        Err(err) => {
            tracing::debug!(url = %ticket.url, %err, "preload failed");
            false
        }
    };
    ctx.controller.preload_finished(ticket, succeeded);
}

fn run_effects(ctx: &mut UpdateContext<'_>, effects: Vec<Effect>) -> Task<Message> {
    Task::batch(effects.into_iter().map(|effect| run_effect(ctx, effect)))
}

fn run_effect(ctx: &mut UpdateContext<'_>, effect: Effect) -> Task<Message> {
    match effect {
        Effect::Load(ticket) => {
            if let Some(image) = ctx.cache.get(&ticket.url) {
                tracing::debug!(url = %ticket.url, "serving image from cache");
                return Task::done(Message::ImageLoaded {
                    ticket,
                    result: Ok(image),
                });
            }
            let client = ctx.client.clone();
            Task::future(async move {
                let result = media::load_image(client, ticket.url.clone()).await;
                Message::ImageLoaded { ticket, result }
            })
        }
        Effect::Preload(ticket) => {
            if let Some(image) = ctx.cache.get(&ticket.url) {
                return Task::done(Message::ImagePreloaded {
                    ticket,
                    result: Ok(image),
                });
            }
            let client = ctx.client.clone();
            Task::future(async move {
                let result = media::load_image(client, ticket.url.clone()).await;
                Message::ImagePreloaded { ticket, result }
            })
        }
        Effect::ScheduleLoadingReset { ticket, delay } => Task::future(async move {
            tokio::time::sleep(delay).await;
            Message::LoadingResetElapsed(ticket)
        }),
    }
}
