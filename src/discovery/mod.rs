// SPDX-License-Identifier: MPL-2.0
//! Gallery discovery on an HTML page.
//!
//! Every `<article>` forms one gallery out of the links nested under an
//! element carrying the `post-image` class, in document order. A page without
//! any article is treated as a single flat gallery. Containers without a
//! matching link are dropped.
//!
//! The scanner is a tolerant pass over `quick-xml` events: void elements may
//! stay unclosed, end tags may be stray or mismatched, and `<script>`/`<style>`
//! bodies are skipped. Markup the reader rejects outright, such as legacy
//! `<![if ...]>` blocks, is skipped up to its closing `>` and the scan goes on.

use crate::domain::{Gallery, ImageDescriptor};
use quick_xml::escape::{resolve_html5_entity, unescape_with};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use reqwest::Url;
use std::borrow::Cow;

/// Class token marking an image link wrapper.
pub const POST_IMAGE_CLASS: &str = "post-image";

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Where a gallery came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// The n-th `<article>` of the page, counted from 1 in document order.
    Article { ordinal: usize },
    /// The whole page, used when it has no article.
    Document,
}

/// One gallery found on the page, with what is needed to present its links.
#[derive(Debug, Clone)]
pub struct GalleryContainer {
    kind: ContainerKind,
    heading: Option<String>,
    gallery: Gallery,
    thumbnails: Vec<Option<String>>,
}

impl GalleryContainer {
    #[must_use]
    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    /// First `h1`..`h3` text inside the article, if any.
    #[must_use]
    pub fn heading(&self) -> Option<&str> {
        self.heading.as_deref()
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    /// Resolved `src` of the thumbnail inside link `index`.
    #[must_use]
    pub fn thumbnail(&self, index: usize) -> Option<&str> {
        self.thumbnails.get(index).and_then(|src| src.as_deref())
    }
}

/// Result of scanning a page.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub title: Option<String>,
    pub containers: Vec<GalleryContainer>,
}

impl Page {
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.containers.iter().map(|c| c.gallery.len()).sum()
    }
}

/// Scans `html` for galleries. Relative URLs are resolved against `base`.
#[must_use]
pub fn discover(html: &str, base: Option<&Url>) -> Page {
    let html = strip_raw_text(html);
    let mut scanner = Scanner::new(base);
    let mut skip_depth = 0usize;
    let mut offset = 0usize;

    'scan: loop {
        let mut reader = tolerant_reader(&html[offset..]);
        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    let tag = tag_name(&e);
                    if matches!(tag.as_str(), "script" | "style") {
                        skip_depth += 1;
                    } else if skip_depth == 0 {
                        scanner.open(&tag, &e, VOID_ELEMENTS.contains(&tag.as_str()));
                    }
                }
                Ok(Event::Empty(e)) => {
                    if skip_depth == 0 {
                        scanner.open(&tag_name(&e), &e, true);
                    }
                }
                Ok(Event::End(e)) => {
                    let tag =
                        String::from_utf8_lossy(e.local_name().as_ref()).to_ascii_lowercase();
                    if matches!(tag.as_str(), "script" | "style") {
                        skip_depth = skip_depth.saturating_sub(1);
                    } else if skip_depth == 0 {
                        scanner.close(&tag);
                    }
                }
                Ok(Event::Text(e)) => {
                    if skip_depth == 0 && scanner.capture.is_some() {
                        scanner.text(&decode_entities(&String::from_utf8_lossy(&e)));
                    }
                }
                Ok(Event::CData(e)) => {
                    if skip_depth == 0 {
                        scanner.text(&String::from_utf8_lossy(&e));
                    }
                }
                Ok(Event::Eof) => break 'scan,
                Ok(_) => {}
                Err(err) => {
                    let failed_at = offset + usize::try_from(reader.error_position()).unwrap_or(0);
                    tracing::warn!(position = failed_at, %err, "skipping malformed markup");
                    // Resume after the end of the offending construct.
                    match html.get(failed_at..).and_then(|rest| rest.find('>')) {
                        Some(end) => {
                            offset = failed_at + end + 1;
                            continue 'scan;
                        }
                        None => break 'scan,
                    }
                }
            }
        }
    }

    scanner.finish()
}

fn tolerant_reader(html: &str) -> Reader<&[u8]> {
    let mut reader = Reader::from_str(html);
    let config = reader.config_mut();
    config.trim_text(false);
    config.check_end_names = false;
    config.allow_unmatched_ends = true;
    reader
}

/// Decodes character references and HTML named entities. Text that does not
/// decode cleanly, such as a bare `&`, is kept as written.
fn decode_entities(raw: &str) -> String {
    unescape_with(raw, resolve_html5_entity)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| raw.to_owned())
}

/// Empties `<script>` and `<style>` bodies, which are raw text in HTML and
/// may contain `<` that would otherwise be read as markup.
fn strip_raw_text(html: &str) -> Cow<'_, str> {
    let lower = html.to_ascii_lowercase();
    let mut stripped = String::new();
    let mut copied = 0;
    let mut cursor = 0;

    while let Some((start, tag)) = find_raw_text_open(&lower, cursor) {
        let Some(open_end) = lower[start..].find('>').map(|i| start + i + 1) else {
            break;
        };
        if lower[..open_end].ends_with("/>") {
            cursor = open_end;
            continue;
        }
        let close = format!("</{tag}");
        let body_end = lower[open_end..]
            .find(&close)
            .map_or(html.len(), |i| open_end + i);

        stripped.push_str(&html[copied..open_end]);
        copied = body_end;
        cursor = body_end;
    }

    if copied == 0 {
        Cow::Borrowed(html)
    } else {
        stripped.push_str(&html[copied..]);
        Cow::Owned(stripped)
    }
}

fn find_raw_text_open(lower: &str, from: usize) -> Option<(usize, &'static str)> {
    let mut cursor = from;
    while let Some(offset) = lower[cursor..].find('<') {
        let start = cursor + offset;
        let rest = &lower[start + 1..];
        for tag in ["script", "style"] {
            let boundary = rest.strip_prefix(tag).and_then(|after| after.chars().next());
            if matches!(boundary, Some(c) if c.is_ascii_whitespace() || c == '>' || c == '/') {
                return Some((start, tag));
            }
        }
        cursor = start + 1;
    }
    None
}

fn tag_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).to_ascii_lowercase()
}

#[derive(Debug, Default)]
struct Attributes {
    class: Option<String>,
    href: Option<String>,
    src: Option<String>,
    alt: Option<String>,
}

impl Attributes {
    fn from_start(e: &BytesStart<'_>) -> Self {
        let mut attributes = Self::default();
        for attr in e.html_attributes().flatten() {
            let slot = match attr.key.as_ref().to_ascii_lowercase().as_slice() {
                b"class" => &mut attributes.class,
                b"href" => &mut attributes.href,
                b"src" => &mut attributes.src,
                b"alt" => &mut attributes.alt,
                _ => continue,
            };
            // First occurrence wins, as in browsers.
            if slot.is_none() {
                *slot = Some(decode_entities(&String::from_utf8_lossy(&attr.value)));
            }
        }
        attributes
    }

    fn has_class(&self, token: &str) -> bool {
        self.class
            .as_deref()
            .is_some_and(|class| class.split_ascii_whitespace().any(|t| t == token))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Capture {
    Title,
    Heading { article: usize },
}

#[derive(Debug)]
struct Frame {
    tag: String,
    post_image: bool,
    article: Option<usize>,
    capture: Option<Capture>,
    anchor: bool,
}

#[derive(Debug)]
struct PendingLink {
    href: Option<String>,
    alt: Option<String>,
    thumbnail: Option<String>,
    articles: Vec<usize>,
}

#[derive(Debug)]
struct Entry {
    descriptor: ImageDescriptor,
    thumbnail: Option<String>,
}

#[derive(Debug, Default)]
struct ArticleBuilder {
    heading: Option<String>,
    entries: Vec<Entry>,
}

struct Scanner<'a> {
    base: Option<&'a Url>,
    stack: Vec<Frame>,
    articles: Vec<ArticleBuilder>,
    flat: Vec<Entry>,
    link: Option<PendingLink>,
    capture: Option<Capture>,
    captured: String,
    title: Option<String>,
}

impl<'a> Scanner<'a> {
    fn new(base: Option<&'a Url>) -> Self {
        Self {
            base,
            stack: Vec::new(),
            articles: Vec::new(),
            flat: Vec::new(),
            link: None,
            capture: None,
            captured: String::new(),
            title: None,
        }
    }

    fn open(&mut self, tag: &str, e: &BytesStart<'_>, self_closing: bool) {
        let attributes = Attributes::from_start(e);
        let mut frame = Frame {
            tag: tag.to_string(),
            post_image: attributes.has_class(POST_IMAGE_CLASS),
            article: None,
            capture: None,
            anchor: false,
        };

        match tag {
            "a" => {
                // Anchors cannot nest; a new one ends the previous.
                self.finish_link();
                if self.stack.iter().any(|f| f.post_image) {
                    self.link = Some(PendingLink {
                        href: attributes.href,
                        alt: None,
                        thumbnail: None,
                        articles: self.stack.iter().filter_map(|f| f.article).collect(),
                    });
                    frame.anchor = true;
                }
            }
            "img" => {
                if let Some(link) = self.link.as_mut().filter(|link| link.alt.is_none()) {
                    link.alt = Some(attributes.alt.unwrap_or_default());
                    link.thumbnail = attributes.src.map(|src| resolve(self.base, &src));
                }
            }
            "article" => {
                self.articles.push(ArticleBuilder::default());
                frame.article = Some(self.articles.len() - 1);
            }
            "title" if self.title.is_none() && self.capture.is_none() => {
                frame.capture = Some(Capture::Title);
            }
            "h1" | "h2" | "h3" if self.capture.is_none() => {
                let article = self.stack.iter().rev().find_map(|f| f.article);
                if let Some(article) = article.filter(|&i| self.articles[i].heading.is_none()) {
                    frame.capture = Some(Capture::Heading { article });
                }
            }
            _ => {}
        }

        if let Some(capture) = frame.capture {
            self.capture = Some(capture);
            self.captured.clear();
        }

        if self_closing {
            self.pop(frame);
        } else {
            self.stack.push(frame);
        }
    }

    /// Closes the innermost open element named `tag` and everything above it.
    /// Unknown end tags are ignored.
    fn close(&mut self, tag: &str) {
        let Some(position) = self.stack.iter().rposition(|f| f.tag == tag) else {
            return;
        };
        while self.stack.len() > position {
            if let Some(frame) = self.stack.pop() {
                self.pop(frame);
            }
        }
    }

    fn pop(&mut self, frame: Frame) {
        if frame.anchor {
            self.finish_link();
        }
        if let Some(capture) = frame.capture {
            self.finish_capture(capture);
        }
    }

    fn text(&mut self, text: &str) {
        if self.capture.is_some() {
            self.captured.push_str(text);
        }
    }

    fn finish_capture(&mut self, capture: Capture) {
        self.capture = None;
        let text = self.captured.split_ascii_whitespace().collect::<Vec<_>>().join(" ");
        self.captured.clear();
        if text.is_empty() {
            return;
        }
        match capture {
            Capture::Title => self.title = Some(text),
            Capture::Heading { article } => {
                if let Some(builder) = self.articles.get_mut(article) {
                    builder.heading = Some(text);
                }
            }
        }
    }

    fn finish_link(&mut self) {
        let Some(link) = self.link.take() else {
            return;
        };
        let Some(href) = link.href else {
            tracing::debug!("skipping post-image link without href");
            return;
        };

        let descriptor = ImageDescriptor::new(
            resolve(self.base, &href),
            link.alt.unwrap_or_default(),
        );
        for &article in &link.articles {
            if let Some(builder) = self.articles.get_mut(article) {
                builder.entries.push(Entry {
                    descriptor: descriptor.clone(),
                    thumbnail: link.thumbnail.clone(),
                });
            }
        }
        self.flat.push(Entry {
            descriptor,
            thumbnail: link.thumbnail,
        });
    }

    fn finish(mut self) -> Page {
        while let Some(frame) = self.stack.pop() {
            self.pop(frame);
        }
        self.finish_link();

        let containers = if self.articles.is_empty() {
            vec![container(ContainerKind::Document, None, self.flat)]
        } else {
            self.articles
                .into_iter()
                .enumerate()
                .map(|(i, article)| {
                    container(
                        ContainerKind::Article { ordinal: i + 1 },
                        article.heading,
                        article.entries,
                    )
                })
                .collect()
        };

        let containers: Vec<_> = containers
            .into_iter()
            .filter(|c| !c.gallery.is_empty())
            .collect();
        tracing::debug!(containers = containers.len(), "page scanned");

        Page {
            title: self.title,
            containers,
        }
    }
}

fn container(kind: ContainerKind, heading: Option<String>, entries: Vec<Entry>) -> GalleryContainer {
    let (descriptors, thumbnails): (Vec<_>, Vec<_>) = entries
        .into_iter()
        .map(|entry| (entry.descriptor, entry.thumbnail))
        .unzip();
    GalleryContainer {
        kind,
        heading,
        gallery: Gallery::new(descriptors),
        thumbnails,
    }
}

/// Resolves a link the way a browser's `link.href` does.
fn resolve(base: Option<&Url>, href: &str) -> String {
    let href = href.trim();
    match base {
        Some(base) => match base.join(href) {
            Ok(url) => url.into(),
            Err(err) => {
                tracing::warn!(href, %err, "keeping unresolvable link as written");
                href.to_string()
            }
        },
        None => href.to_string(),
    }
}
