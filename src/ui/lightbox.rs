// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of the lightbox overlay.
//!
//! [`PageSurface`] is the view model the controller draws into. It only
//! stores what the [`Surface`] calls wrote; [`view`] turns that into widgets.
//! Pointer presses are reported back with the region they hit so the
//! controller decides whether the overlay closes.

use crate::application::lightbox::{Message, OverlayState, PressTarget};
use crate::application::port::Surface;
use crate::domain::Direction;
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, center, container, image, mouse_area, tooltip, Column, Container, Row, Space, Stack,
    Text,
};
use iced::{ContentFit, Element, Length};

/// Image currently assigned to the overlay.
#[derive(Debug, Clone)]
pub struct ShownImage {
    pub data: ImageData,
    pub alt: String,
}

/// Overlay node, created on the first open and reused afterwards.
#[derive(Debug, Clone, Default)]
pub struct OverlayView {
    pub visible: bool,
    pub loading_visible: bool,
    pub loading_text: String,
    pub image: Option<ShownImage>,
    pub image_visible: bool,
    pub nav_visible: bool,
}

/// Host-side surface: the overlay node plus the page scroll lock.
#[derive(Debug, Clone, Default)]
pub struct PageSurface {
    overlay: Option<OverlayView>,
    scroll_locked: bool,
}

impl PageSurface {
    #[must_use]
    pub fn overlay(&self) -> Option<&OverlayView> {
        self.overlay.as_ref()
    }

    /// The overlay, if mounted and visible.
    #[must_use]
    pub fn visible_overlay(&self) -> Option<&OverlayView> {
        self.overlay.as_ref().filter(|overlay| overlay.visible)
    }

    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    fn with_overlay(&mut self, apply: impl FnOnce(&mut OverlayView)) {
        if let Some(overlay) = self.overlay.as_mut() {
            apply(overlay);
        }
    }
}

impl Surface for PageSurface {
    type Image = ImageData;

    fn mount(&mut self) {
        self.overlay.get_or_insert_with(OverlayView::default);
    }

    fn set_overlay_visible(&mut self, visible: bool) {
        self.with_overlay(|overlay| overlay.visible = visible);
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn set_loading_visible(&mut self, visible: bool) {
        self.with_overlay(|overlay| overlay.loading_visible = visible);
    }

    fn set_loading_text(&mut self, text: &str) {
        self.with_overlay(|overlay| text.clone_into(&mut overlay.loading_text));
    }

    fn set_image(&mut self, image: ImageData, alt: &str) {
        self.with_overlay(|overlay| {
            overlay.image = Some(ShownImage {
                data: image,
                alt: alt.to_owned(),
            });
        });
    }

    fn set_image_visible(&mut self, visible: bool) {
        self.with_overlay(|overlay| overlay.image_visible = visible);
    }

    fn set_nav_visible(&mut self, visible: bool) {
        self.with_overlay(|overlay| overlay.nav_visible = visible);
    }
}

/// Builds the overlay layer drawn on top of the page.
pub fn view<'a>(
    overlay: &'a OverlayView,
    state: &OverlayState,
    i18n: &I18n,
) -> Element<'a, Message> {
    let button_style =
        || styles::button::overlay(palette::WHITE, opacity::OVERLAY_MEDIUM, opacity::OVERLAY_HOVER);

    let close_button = button(center(Text::new("✕").size(typography::BODY_LG)))
        .width(Length::Fixed(sizing::CONTROL))
        .height(Length::Fixed(sizing::CONTROL))
        .style(button_style())
        .on_press(Message::Close);

    let mut top_bar = Row::new().align_y(Vertical::Center).spacing(spacing::SM);
    if overlay.nav_visible {
        let current = (state.current_index() + 1).to_string();
        let total = state.gallery().len().to_string();
        let position = i18n.tr_with_args(
            "lightbox-position",
            &[("current", current.as_str()), ("total", total.as_str())],
        );
        top_bar = top_bar.push(label(
            Container::new(Text::new(position).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::overlay::indicator(radius::SM)),
        ));
    }
    top_bar = top_bar
        .push(Space::new().width(Length::Fill))
        .push(styles::tooltip::styled(
            close_button,
            i18n.tr("lightbox-close"),
            tooltip::Position::Bottom,
        ));

    let mut stage = Stack::new().width(Length::Fill).height(Length::Fill);
    if overlay.image_visible {
        if let Some(shown) = &overlay.image {
            let picture = image(shown.data.handle.clone()).content_fit(ContentFit::Contain);
            stage = stage.push(center(
                mouse_area(picture).on_press(Message::Pressed(PressTarget::Image)),
            ));
        }
    }
    if overlay.loading_visible {
        stage = stage.push(center(label(
            container(Text::new(overlay.loading_text.as_str()).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(styles::overlay::indicator(radius::MD)),
        )));
    }

    let mut middle = Row::new()
        .align_y(Vertical::Center)
        .spacing(spacing::MD)
        .height(Length::Fill);
    if overlay.nav_visible {
        middle = middle.push(nav_button(
            "◀",
            i18n.tr("lightbox-previous"),
            Direction::Previous,
            button_style(),
        ));
    }
    middle = middle.push(stage);
    if overlay.nav_visible {
        middle = middle.push(nav_button(
            "▶",
            i18n.tr("lightbox-next"),
            Direction::Next,
            button_style(),
        ));
    }

    let mut content = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .push(top_bar)
        .push(middle);
    if let Some(shown) = overlay.image.as_ref().filter(|_| overlay.image_visible) {
        if !shown.alt.is_empty() {
            content = content.push(label(
                Text::new(shown.alt.as_str()).size(typography::CAPTION),
            ));
        }
    }

    let content_area = mouse_area(content).on_press(Message::Pressed(PressTarget::Content));

    mouse_area(
        container(content_area)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XL)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::Pressed(PressTarget::Backdrop))
    .into()
}

/// Keeps presses on overlay text from reaching the content area.
fn label<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    mouse_area(content)
        .on_press(Message::Pressed(PressTarget::Label))
        .into()
}

fn nav_button<'a>(
    glyph: &'a str,
    tip: String,
    direction: Direction,
    style: impl Fn(&iced::Theme, button::Status) -> button::Style + 'a,
) -> Element<'a, Message> {
    let control = button(center(Text::new(glyph).size(typography::BODY_LG)))
        .width(Length::Fixed(sizing::CONTROL))
        .height(Length::Fixed(sizing::CONTROL))
        .style(style)
        .on_press(Message::Navigate(direction));

    styles::tooltip::styled(control, tip, tooltip::Position::Top).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel() -> ImageData {
        ImageData::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    #[test]
    fn writes_before_mount_are_ignored() {
        let mut surface = PageSurface::default();
        surface.set_overlay_visible(true);
        surface.set_loading_text("loading...");
        assert!(surface.overlay().is_none());
        assert!(surface.visible_overlay().is_none());
    }

    #[test]
    fn mount_keeps_existing_overlay() {
        let mut surface = PageSurface::default();
        surface.mount();
        surface.set_loading_text("first");
        surface.mount();
        assert_eq!(
            surface.overlay().map(|o| o.loading_text.as_str()),
            Some("first")
        );
    }

    #[test]
    fn surface_records_controller_writes() {
        let mut surface = PageSurface::default();
        surface.mount();
        surface.set_overlay_visible(true);
        surface.set_scroll_locked(true);
        surface.set_loading_visible(false);
        surface.set_image(pixel(), "a red door");
        surface.set_image_visible(true);
        surface.set_nav_visible(true);

        let overlay = surface.visible_overlay().expect("visible overlay");
        assert!(surface.is_scroll_locked());
        assert!(!overlay.loading_visible);
        assert!(overlay.image_visible);
        assert!(overlay.nav_visible);
        assert_eq!(overlay.image.as_ref().map(|i| i.alt.as_str()), Some("a red door"));
    }

    #[test]
    fn hidden_overlay_is_not_drawn() {
        let mut surface = PageSurface::default();
        surface.mount();
        surface.set_overlay_visible(true);
        surface.set_overlay_visible(false);
        assert!(surface.overlay().is_some());
        assert!(surface.visible_overlay().is_none());
    }
}
