// SPDX-License-Identifier: MPL-2.0
use super::*;
use crate::domain::ImageDescriptor;

/// Surface that records the last value written to each property.
#[derive(Debug, Default)]
struct Recorder {
    mounts: u32,
    overlay_visible: bool,
    scroll_locked: bool,
    loading_visible: bool,
    loading_text: String,
    image: Option<&'static str>,
    alt: String,
    image_visible: bool,
    nav_visible: bool,
    image_visible_ever: bool,
}

impl Surface for Recorder {
    type Image = &'static str;

    fn mount(&mut self) {
        self.mounts += 1;
    }

    fn set_overlay_visible(&mut self, visible: bool) {
        self.overlay_visible = visible;
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn set_loading_visible(&mut self, visible: bool) {
        self.loading_visible = visible;
    }

    fn set_loading_text(&mut self, text: &str) {
        self.loading_text = text.to_owned();
    }

    fn set_image(&mut self, image: Self::Image, alt: &str) {
        self.image = Some(image);
        self.alt = alt.to_owned();
    }

    fn set_image_visible(&mut self, visible: bool) {
        self.image_visible = visible;
        self.image_visible_ever |= visible;
    }

    fn set_nav_visible(&mut self, visible: bool) {
        self.nav_visible = visible;
    }
}

fn gallery(urls: &[&str]) -> Gallery {
    urls.iter()
        .map(|url| ImageDescriptor::new(*url, format!("alt {url}")))
        .collect()
}

fn loads(effects: &[Effect]) -> Vec<LoadTicket> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Load(ticket) => Some(ticket.clone()),
            _ => None,
        })
        .collect()
}

fn preloads(effects: &[Effect]) -> Vec<String> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Preload(ticket) => Some(ticket.url.clone()),
            _ => None,
        })
        .collect()
}

fn open(
    controller: &mut Controller,
    surface: &mut Recorder,
    urls: &[&str],
    index: usize,
) -> Vec<Effect> {
    controller.handle(
        Message::Open {
            gallery: gallery(urls),
            index,
        },
        surface,
    )
}

#[test]
fn open_shows_overlay_and_requests_current_entry() {
    let mut controller = Controller::default();
    let mut surface = Recorder::default();

    let effects = open(&mut controller, &mut surface, &["a.jpg", "b.jpg"], 1);

    assert!(controller.is_open());
    assert_eq!(controller.state().current_index(), 1);
    assert!(surface.overlay_visible);
    assert!(surface.scroll_locked);
    assert!(surface.loading_visible);
    assert!(!surface.image_visible);
    assert_eq!(surface.loading_text, "loading...");

    let loads = loads(&effects);
    assert_eq!(loads.len(), 1);
    assert_eq!(loads[0].url, "b.jpg");
    assert_eq!(loads[0].index, 1);
}

#[test]
fn overlay_is_mounted_once() {
    let mut controller = Controller::default();
    let mut surface = Recorder::default();

    open(&mut controller, &mut surface, &["a.jpg"], 0);
    controller.handle(Message::Close, &mut surface);
    open(&mut controller, &mut surface, &["b.jpg"], 0);

    assert_eq!(surface.mounts, 1);
    assert!(controller.is_mounted());
}

#[test]
fn scenario_three_images_preloads_in_direction_of_travel() {
    let mut controller = Controller::default();
    let mut surface = Recorder::default();
    let urls = ["a.jpg", "b.jpg", "c.jpg"];

    let effects = open(&mut controller, &mut surface, &urls, 0);
    assert_eq!(preloads(&effects), ["b.jpg"]);

    let effects = controller.handle(Message::Navigate(Direction::Next), &mut surface);
    assert_eq!(controller.state().current_index(), 1);
    assert_eq!(preloads(&effects), ["c.jpg"]);

    let effects = controller.handle(Message::Navigate(Direction::Next), &mut surface);
    assert_eq!(controller.state().current_index(), 2);
    assert_eq!(preloads(&effects), ["a.jpg"]);

    controller.handle(Message::Navigate(Direction::Previous), &mut surface);
    controller.handle(Message::Navigate(Direction::Previous), &mut surface);
    assert_eq!(controller.state().current_index(), 0);
}

#[test]
fn single_image_gallery_never_preloads_and_hides_controls() {
    let mut controller = Controller::default();
    let mut surface = Recorder::default();

    let effects = open(&mut controller, &mut surface, &["only.jpg"], 0);
    assert!(preloads(&effects).is_empty());
    assert!(!surface.nav_visible);

    let effects = controller.handle(Message::KeyPressed(Key::ArrowRight), &mut surface);
    assert!(preloads(&effects).is_empty());
    assert_eq!(controller.state().current_index(), 0);
    assert!(!surface.nav_visible);
}

#[test]
fn multi_image_gallery_shows_controls() {
    let mut controller = Controller::default();
    let mut surface = Recorder::default();

    open(&mut controller, &mut surface, &["a.jpg", "b.jpg"], 0);
    assert!(surface.nav_visible);

    controller.handle(Message::Close, &mut surface);
    open(&mut controller, &mut surface, &["c.jpg"], 0);
    assert!(!surface.nav_visible);
}

#[test]
fn index_stays_in_range_for_any_navigation_sequence() {
    let mut controller = Controller::default();
    let mut surface = Recorder::default();

    for len in 1..=5 {
        let urls: Vec<String> = (0..len).map(|i| format!("{i}.jpg")).collect();
        let refs: Vec<&str> = urls.iter().map(String::as_str).collect();
        open(&mut controller, &mut surface, &refs, len - 1);

        // Deterministic mix of directions.
        for step in 0..(len * 7) {
            let direction = if step % 3 == 0 {
                Direction::Previous
            } else {
                Direction::Next
            };
            controller.handle(Message::Navigate(direction), &mut surface);
            assert!(controller.state().current_index() < len);
        }
        controller.handle(Message::Close, &mut surface);
    }
}

#[test]
fn forward_len_times_returns_to_start() {
    let mut controller = Controller::default();
    let mut surface = Recorder::default();
    let urls = ["a.jpg", "b.jpg", "c.jpg", "d.jpg"];

    for start in 0..urls.len() {
        open(&mut controller, &mut surface, &urls, start);
        for _ in 0..urls.len() {
            controller.handle(Message::Navigate(Direction::Next), &mut surface);
        }
        assert_eq!(controller.state().current_index(), start);
    }
}

#[test]
fn preloaded_urls_are_skipped() {
    let mut controller = Controller::default();
    let mut surface = Recorder::default();

    let effects = open(&mut controller, &mut surface, &["a.jpg", "b.jpg"], 0);
    let [Effect::Load(load), Effect::Preload(ticket)] = effects.as_slice() else {
        panic!("expected a load of a.jpg and a preload of b.jpg");
    };
    controller.load_succeeded(load, "a", &mut surface);
    controller.preload_finished(ticket, true);

    // Onto b.jpg, heading towards a.jpg which is already displayed.
    let effects = controller.handle(Message::Navigate(Direction::Previous), &mut surface);
    assert_eq!(controller.state().current_index(), 1);
    assert!(preloads(&effects).is_empty());

    // Back onto a.jpg, heading towards b.jpg which was preloaded.
    let effects = controller.handle(Message::Navigate(Direction::Next), &mut surface);
    assert_eq!(controller.state().current_index(), 0);
    assert!(preloads(&effects).is_empty());
}

#[test]
fn failed_preload_is_not_recorded() {
    let mut controller = Controller::default();
    let mut surface = Recorder::default();

    let effects = open(&mut controller, &mut surface, &["a.jpg", "b.jpg", "c.jpg"], 0);
    let ticket = match &effects[1] {
        Effect::Preload(ticket) => ticket.clone(),
        other => panic!("unexpected effect {other:?}"),
    };
    controller.preload_finished(&ticket, false);
    assert!(!controller.state().preloaded().contains("b.jpg"));
}

#[test]
fn opening_new_gallery_clears_preload_set_even_for_same_url() {
    let mut controller = Controller::default();
    let mut surface = Recorder::default();

    let effects = open(&mut controller, &mut surface, &["a.jpg", "shared.jpg"], 0);
    let ticket = loads(&effects).remove(0);
    controller.load_succeeded(&ticket, "pixels-a", &mut surface);
    let preload = match &effects[1] {
        Effect::Preload(ticket) => ticket.clone(),
        other => panic!("unexpected effect {other:?}"),
    };
    controller.preload_finished(&preload, true);
    assert!(controller.state().preloaded().contains("shared.jpg"));

    controller.handle(Message::Close, &mut surface);
    let effects = open(&mut controller, &mut surface, &["b.jpg", "shared.jpg"], 0);

    assert!(controller.state().preloaded().is_empty());
    assert_eq!(preloads(&effects), ["shared.jpg"]);
}

#[test]
fn late_preload_from_previous_gallery_does_not_leak() {
    let mut controller = Controller::default();
    let mut surface = Recorder::default();

    let effects = open(&mut controller, &mut surface, &["a.jpg", "shared.jpg"], 0);
    let stale = match &effects[1] {
        Effect::Preload(ticket) => ticket.clone(),
        other => panic!("unexpected effect {other:?}"),
    };

    open(&mut controller, &mut surface, &["b.jpg", "shared.jpg"], 0);
    controller.preload_finished(&stale, true);

    assert!(!controller.state().preloaded().contains("shared.jpg"));
}

#[test]
fn successful_load_shows_image_and_records_url() {
    let mut controller = Controller::default();
    let mut surface = Recorder::default();

    let effects = open(&mut controller, &mut surface, &["a.jpg", "b.jpg"], 0);
    let ticket = loads(&effects).remove(0);
    controller.load_succeeded(&ticket, "pixels-a", &mut surface);

    assert!(surface.image_visible);
    assert!(!surface.loading_visible);
    assert_eq!(surface.image, Some("pixels-a"));
    assert_eq!(surface.alt, "alt a.jpg");
    assert!(controller.state().preloaded().contains("a.jpg"));
}

#[test]
fn failed_load_shows_message_then_resets() {
    let labels = Labels {
        loading: "wait".to_owned(),
        failed: "broken".to_owned(),
    };
    let mut controller = Controller::new(labels, Settings::default());
    let mut surface = Recorder::default();

    let effects = open(&mut controller, &mut surface, &["a.jpg"], 0);
    let ticket = loads(&effects).remove(0);
    let effects = controller.load_failed(&ticket, &mut surface);

    assert_eq!(surface.loading_text, "broken");
    assert!(surface.loading_visible);
    assert!(!surface.image_visible);

    let [Effect::ScheduleLoadingReset { ticket, delay }] = effects.as_slice() else {
        panic!("expected a single reset timer, got {effects:?}");
    };
    assert_eq!(*delay, Duration::from_secs(2));

    controller.loading_reset_elapsed(*ticket, &mut surface);
    assert_eq!(surface.loading_text, "wait");
    assert!(!surface.loading_visible);
    assert!(!surface.image_visible_ever);
    assert!(!controller.state().preloaded().contains("a.jpg"));
}

#[test]
fn new_render_cancels_pending_reset() {
    let mut controller = Controller::default();
    let mut surface = Recorder::default();

    let effects = open(&mut controller, &mut surface, &["a.jpg", "b.jpg"], 0);
    let first = loads(&effects).remove(0);
    let effects = controller.load_failed(&first, &mut surface);
    let Some(Effect::ScheduleLoadingReset { ticket: reset, .. }) = effects.first().cloned() else {
        panic!("expected reset timer");
    };

    let effects = controller.handle(Message::Navigate(Direction::Next), &mut surface);
    assert_eq!(surface.loading_text, "loading...");
    let second = loads(&effects).remove(0);
    controller.load_succeeded(&second, "pixels-b", &mut surface);

    // The old timer fires after the successful load: nothing may change.
    controller.loading_reset_elapsed(reset, &mut surface);
    assert_eq!(surface.loading_text, "loading...");
    assert!(surface.image_visible);
    assert_eq!(surface.image, Some("pixels-b"));
}

#[test]
fn stale_load_does_not_overwrite_newer_navigation() {
    let mut controller = Controller::default();
    let mut surface = Recorder::default();

    let effects = open(&mut controller, &mut surface, &["a.jpg", "b.jpg", "c.jpg"], 0);
    let slow = loads(&effects).remove(0);

    let effects = controller.handle(Message::Navigate(Direction::Next), &mut surface);
    let fast = loads(&effects).remove(0);
    controller.load_succeeded(&fast, "pixels-b", &mut surface);

    controller.load_succeeded(&slow, "pixels-a", &mut surface);
    assert_eq!(surface.image, Some("pixels-b"));
    assert_eq!(surface.alt, "alt b.jpg");
    // The bytes did arrive, so a.jpg no longer needs a preload.
    assert!(controller.state().preloaded().contains("a.jpg"));

    let effects = controller.load_failed(&slow, &mut surface);
    assert!(effects.is_empty());
    assert_eq!(surface.loading_text, "loading...");
}

#[test]
fn keys_are_ignored_while_closed() {
    let mut controller = Controller::default();
    let mut surface = Recorder::default();

    let effects = controller.handle(Message::KeyPressed(Key::ArrowRight), &mut surface);
    assert!(effects.is_empty());

    open(&mut controller, &mut surface, &["a.jpg", "b.jpg"], 0);
    controller.handle(Message::KeyPressed(Key::Escape), &mut surface);
    assert!(!controller.is_open());
    assert!(!surface.overlay_visible);
    assert!(!surface.scroll_locked);

    let effects = controller.handle(Message::KeyPressed(Key::ArrowLeft), &mut surface);
    assert!(effects.is_empty());
    let effects = controller.handle(Message::Navigate(Direction::Next), &mut surface);
    assert!(effects.is_empty());
    assert_eq!(controller.state().current_index(), 0);
}

#[test]
fn arrow_keys_navigate_while_open() {
    let mut controller = Controller::default();
    let mut surface = Recorder::default();

    open(&mut controller, &mut surface, &["a.jpg", "b.jpg", "c.jpg"], 0);
    controller.handle(Message::KeyPressed(Key::ArrowLeft), &mut surface);
    assert_eq!(controller.state().current_index(), 2);
    controller.handle(Message::KeyPressed(Key::ArrowRight), &mut surface);
    assert_eq!(controller.state().current_index(), 0);
}

#[test]
fn only_backdrop_and_content_presses_close() {
    let mut controller = Controller::default();
    let mut surface = Recorder::default();
    open(&mut controller, &mut surface, &["a.jpg"], 0);

    controller.handle(Message::Pressed(PressTarget::Image), &mut surface);
    controller.handle(Message::Pressed(PressTarget::Control), &mut surface);
    assert!(controller.is_open());

    controller.handle(Message::Pressed(PressTarget::Content), &mut surface);
    assert!(!controller.is_open());

    open(&mut controller, &mut surface, &["a.jpg"], 0);
    controller.handle(Message::Pressed(PressTarget::Backdrop), &mut surface);
    assert!(!controller.is_open());
}

#[test]
fn presses_on_overlay_text_keep_it_open() {
    let mut controller = Controller::default();
    let mut surface = Recorder::default();
    open(&mut controller, &mut surface, &["a.jpg", "b.jpg"], 0);

    let effects = controller.handle(Message::Pressed(PressTarget::Label), &mut surface);

    assert!(effects.is_empty());
    assert!(controller.is_open());
    assert!(surface.overlay_visible && surface.scroll_locked);
}

#[test]
fn close_retains_gallery_and_index() {
    let mut controller = Controller::default();
    let mut surface = Recorder::default();

    open(&mut controller, &mut surface, &["a.jpg", "b.jpg"], 1);
    controller.handle(Message::Close, &mut surface);

    assert_eq!(controller.state().gallery().len(), 2);
    assert_eq!(controller.state().current_index(), 1);
}

#[test]
fn out_of_range_activation_is_ignored() {
    let mut controller = Controller::default();
    let mut surface = Recorder::default();

    let effects = open(&mut controller, &mut surface, &["a.jpg"], 3);
    assert!(effects.is_empty());
    assert!(!controller.is_open());
    assert_eq!(surface.mounts, 0);
}

#[test]
fn disabled_preloading_issues_no_requests() {
    let settings = Settings {
        preload_enabled: false,
        ..Settings::default()
    };
    let mut controller = Controller::new(Labels::default(), settings);
    let mut surface = Recorder::default();

    let effects = open(&mut controller, &mut surface, &["a.jpg", "b.jpg"], 0);
    assert!(preloads(&effects).is_empty());
    assert_eq!(loads(&effects).len(), 1);
}
