// SPDX-License-Identifier: MPL-2.0
//! Display surface port.
//!
//! The lightbox controller never touches widgets directly. It drives a
//! [`Surface`], which the Iced host implements on its view model and tests
//! implement with a recorder. Pointer and key listeners are wired by the host
//! and forwarded to the controller as plain method calls.

/// Minimal rendering capability needed by the lightbox overlay.
pub trait Surface {
    /// Decoded image handle type shown by this surface.
    type Image;

    /// Creates the overlay node. Called once, on the first open.
    fn mount(&mut self);

    /// Shows or hides the whole overlay.
    fn set_overlay_visible(&mut self, visible: bool);

    /// Locks or unlocks scrolling of the page behind the overlay.
    fn set_scroll_locked(&mut self, locked: bool);

    /// Shows or hides the loading indicator.
    fn set_loading_visible(&mut self, visible: bool);

    /// Replaces the loading indicator text.
    fn set_loading_text(&mut self, text: &str);

    /// Assigns the displayed image and its alternative text.
    fn set_image(&mut self, image: Self::Image, alt: &str);

    /// Shows or hides the image element.
    fn set_image_visible(&mut self, visible: bool);

    /// Shows or hides the previous/next controls.
    fn set_nav_visible(&mut self, visible: bool);
}
