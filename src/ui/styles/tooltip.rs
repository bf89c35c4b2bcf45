// SPDX-License-Identifier: MPL-2.0
//! Tooltips naming the overlay controls.

use crate::ui::design_tokens::{radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

/// Tooltip box contrasting with the dark backdrop.
pub fn tooltip_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.95, 0.95, 0.95, 0.98))),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: Color::from_rgba(0.7, 0.7, 0.7, 0.3),
        },
        shadow: shadow::SM,
        text_color: Some(Color::from_rgb(0.1, 0.1, 0.1)),
        ..Default::default()
    }
}

/// Wraps `content` with a styled tooltip showing `tip`.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::CAPTION))
        .padding(spacing::XS)
        .style(tooltip_container);

    tooltip(content, tip_container, position).gap(spacing::XS)
}
