// SPDX-License-Identifier: MPL-2.0
//! The scanned page: one card per gallery container, one tile per image link.

use crate::discovery::{ContainerKind, GalleryContainer, Page};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::scroll_lock;
use iced::alignment::Horizontal;
use iced::widget::{button, center, scrollable, Column, Container, Row, Text};
use iced::{Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Tile `index` of container `container` was clicked.
    LinkActivated { container: usize, index: usize },
}

/// What the page area currently shows.
#[derive(Debug, Clone, Default)]
pub enum PageStatus {
    #[default]
    NoSource,
    Loading,
    Failed(Error),
    Ready(Page),
}

/// Everything the page view reads.
pub struct ViewContext<'a> {
    pub status: &'a PageStatus,
    pub i18n: &'a I18n,
    pub scroll_locked: bool,
    /// i18n key of a warning shown above the page, if any.
    pub warning: Option<&'a str>,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let body: Element<'a, Message> = match ctx.status {
        PageStatus::NoSource => notice(i18n.tr("page-no-source")),
        PageStatus::Loading => notice(i18n.tr("page-loading")),
        PageStatus::Failed(error) => notice(i18n.tr_with_args(
            "page-load-error",
            &[("reason", i18n.tr(error.i18n_key()).as_str())],
        )),
        PageStatus::Ready(page) if page.containers.is_empty() => notice(i18n.tr("page-empty")),
        PageStatus::Ready(page) => cards(page, i18n),
    };

    let mut column = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .max_width(sizing::PAGE_MAX_WIDTH)
        .width(Length::Fill);
    if let Some(key) = ctx.warning {
        column = column.push(Text::new(i18n.tr(key)).size(typography::BODY).color(palette::ERROR_500));
    }
    if let PageStatus::Ready(Page {
        title: Some(title), ..
    }) = ctx.status
    {
        column = column.push(Text::new(title.as_str()).size(typography::TITLE_LG));
    }
    column = column.push(body);

    let page = scrollable(
        Container::new(column)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    scroll_lock(page, ctx.scroll_locked).into()
}

fn notice<'a>(message: String) -> Element<'a, Message> {
    center(Text::new(message).size(typography::BODY_LG))
        .height(Length::Fixed(sizing::THUMBNAIL * 2.0))
        .into()
}

fn cards<'a>(page: &'a Page, i18n: &I18n) -> Element<'a, Message> {
    page.containers
        .iter()
        .enumerate()
        .fold(Column::new().spacing(spacing::LG), |column, (index, c)| {
            column.push(card(index, c, i18n))
        })
        .into()
}

fn card<'a>(index: usize, container: &'a GalleryContainer, i18n: &I18n) -> Element<'a, Message> {
    let heading = container_heading(container, i18n);

    let tiles = container
        .gallery()
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::SM), |row, (i, image)| {
            let label = if image.alt_text().is_empty() {
                i18n.tr_with_args("page-image-label", &[("number", (i + 1).to_string().as_str())])
            } else {
                image.alt_text().to_owned()
            };
            let source = container.thumbnail(i).unwrap_or(image.full_url());

            let tile = Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(label).size(typography::BODY))
                .push(Text::new(file_name(source)).size(typography::CAPTION));

            row.push(
                button(tile)
                    .width(Length::Fixed(sizing::THUMBNAIL))
                    .padding(spacing::SM)
                    .style(styles::button::thumbnail)
                    .on_press(Message::LinkActivated {
                        container: index,
                        index: i,
                    }),
            )
        })
        .wrap();

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(Text::new(heading).size(typography::TITLE_SM))
            .push(tiles),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

fn container_heading(container: &GalleryContainer, i18n: &I18n) -> String {
    if let Some(heading) = container.heading() {
        return heading.to_owned();
    }
    match container.kind() {
        ContainerKind::Article { ordinal } => {
            i18n.tr_with_args("page-article-heading", &[("number", ordinal.to_string().as_str())])
        }
        ContainerKind::Document => i18n.tr("page-document-heading"),
    }
}

/// Last path segment of a URL, for tile captions.
fn file_name(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or(url)
}
