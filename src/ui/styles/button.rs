// SPDX-License-Identifier: MPL-2.0
//! Button styles for overlay controls and page thumbnails.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Translucent round buttons drawn over the backdrop (close, previous, next).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Image link tile on the page. Highlights its border on hover.
pub fn thumbnail(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let base = if is_light {
        palette::GRAY_100
    } else {
        palette::GRAY_700
    };
    let text_color = if is_light {
        palette::GRAY_900
    } else {
        palette::WHITE
    };

    let (border_color, shadow) = match status {
        button::Status::Hovered | button::Status::Pressed => (palette::PRIMARY_500, shadow::SM),
        _ => (palette::GRAY_400, shadow::NONE),
    };

    button::Style {
        background: Some(Background::Color(base)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow,
        snap: true,
    }
}
