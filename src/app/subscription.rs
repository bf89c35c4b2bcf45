// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keys only matter while the lightbox is open, so the keyboard listener is
//! subscribed only then.

use super::Message;
use crate::application::lightbox::{self, Key};
use iced::keyboard::{self, key::Named};
use iced::{event, Subscription};

/// Routes Escape and the horizontal arrow keys to the lightbox.
pub fn create_event_subscription(lightbox_open: bool) -> Subscription<Message> {
    if !lightbox_open {
        return Subscription::none();
    }

    event::listen_with(|event, _status, _window_id| {
        let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = &event else {
            return None;
        };
        lightbox_key(key).map(|key| Message::Lightbox(lightbox::Message::KeyPressed(key)))
    })
}

fn lightbox_key(key: &keyboard::Key) -> Option<Key> {
    match key {
        keyboard::Key::Named(Named::Escape) => Some(Key::Escape),
        keyboard::Key::Named(Named::ArrowLeft) => Some(Key::ArrowLeft),
        keyboard::Key::Named(Named::ArrowRight) => Some(Key::ArrowRight),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_keys_are_mapped() {
        assert_eq!(
            lightbox_key(&keyboard::Key::Named(Named::Escape)),
            Some(Key::Escape)
        );
        assert_eq!(
            lightbox_key(&keyboard::Key::Named(Named::ArrowLeft)),
            Some(Key::ArrowLeft)
        );
        assert_eq!(
            lightbox_key(&keyboard::Key::Named(Named::ArrowRight)),
            Some(Key::ArrowRight)
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(lightbox_key(&keyboard::Key::Named(Named::ArrowUp)), None);
        assert_eq!(
            lightbox_key(&keyboard::Key::Character("a".into())),
            None
        );
    }
}
