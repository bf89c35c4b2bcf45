// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is always drawn; the lightbox is stacked on top of it while the
//! overlay is visible.

use super::Message;
use crate::application::lightbox::Controller;
use crate::i18n::fluent::I18n;
use crate::ui::lightbox::{self, PageSurface};
use crate::ui::page::{self, PageStatus};
use iced::widget::Stack;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub page: &'a PageStatus,
    pub controller: &'a Controller,
    pub surface: &'a PageSurface,
    pub warning: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page_view = page::view(page::ViewContext {
        status: ctx.page,
        i18n: ctx.i18n,
        scroll_locked: ctx.surface.is_scroll_locked(),
        warning: ctx.warning,
    })
    .map(Message::Page);

    match ctx.surface.visible_overlay() {
        Some(overlay) => Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(page_view)
            .push(lightbox::view(overlay, ctx.controller.state(), ctx.i18n).map(Message::Lightbox))
            .into(),
        None => page_view,
    }
}
