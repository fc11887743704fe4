// SPDX-License-Identifier: MPL-2.0
//! Image gallery: large preview, dot indicators and thumbnail strip.
//!
//! The selected index is owned by [`State`] and only changes through
//! [`State::handle`], which ignores positions outside the image sequence.
//! That keeps the index valid for any message, including ones that did not
//! come from enumerating the images.

use crate::domain::ImageRef;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::widget::{button, container, image, tooltip, Column, Row, Stack};
use iced::{alignment, ContentFit, Element, Length};
use std::path::{Path, PathBuf};

/// Gallery selection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    selected: usize,
    len: usize,
}

/// Messages for the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A thumbnail or dot at this position was clicked.
    Select(usize),
    /// Keyboard: next image, wrapping to the first.
    Next,
    /// Keyboard: previous image, wrapping to the last.
    Previous,
}

/// Whether a dot or thumbnail belongs to the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Active,
    Inactive,
}

impl State {
    /// Creates the state for a gallery of `len` images, selecting the first.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Applies a message. Returns true when the selection changed.
    pub fn handle(&mut self, message: Message) -> bool {
        if self.len == 0 {
            return false;
        }
        let target = match message {
            Message::Select(index) if index < self.len => index,
            Message::Select(index) => {
                tracing::debug!(index, len = self.len, "ignoring out-of-range gallery index");
                return false;
            }
            Message::Next => (self.selected + 1) % self.len,
            Message::Previous => (self.selected + self.len - 1) % self.len,
        };
        let changed = target != self.selected;
        self.selected = target;
        changed
    }

    /// Highlight of the dot/thumbnail at `index`.
    #[must_use]
    pub fn highlight(&self, index: usize) -> Highlight {
        if index == self.selected {
            Highlight::Active
        } else {
            Highlight::Inactive
        }
    }
}

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub hotel_name: &'a str,
    pub images: &'a [ImageRef],
    pub assets_dir: &'a Path,
}

/// Resolves an image reference against the assets directory.
#[must_use]
pub fn image_path(assets_dir: &Path, image: &ImageRef) -> PathBuf {
    assets_dir.join(image.id())
}

impl State {
    /// Render the gallery card.
    pub fn view<'a>(&self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let Some(current) = ctx.images.get(self.selected) else {
            return Column::new().into();
        };

        let alt = ctx.i18n.tr_with_args(
            "gallery-image-alt",
            &[
                ("name", ctx.hotel_name),
                ("index", &(self.selected + 1).to_string()),
            ],
        );

        let preview = image(image::Handle::from_path(image_path(ctx.assets_dir, current)))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
            .content_fit(ContentFit::Cover);

        let dots = (0..ctx.images.len()).fold(Row::new().spacing(spacing::XS), |row, index| {
            let active = self.highlight(index) == Highlight::Active;
            row.push(
                button(
                    container("")
                        .width(Length::Fixed(sizing::DOT))
                        .height(Length::Fixed(sizing::DOT)),
                )
                .padding(0)
                .on_press(Message::Select(index))
                .style(styles::button::dot(active)),
            )
        });

        let dots_overlay = container(dots)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD);

        let preview_with_dots = tooltip(
            Stack::new().push(preview).push(dots_overlay),
            container(iced::widget::text(alt)).padding(spacing::XS),
            tooltip::Position::FollowCursor,
        )
        .style(styles::container::tooltip);

        let thumbnails = ctx.images.iter().enumerate().fold(
            Row::new().spacing(spacing::XS),
            |row, (index, image_ref)| {
                let active = self.highlight(index) == Highlight::Active;
                let thumb = image(image::Handle::from_path(image_path(ctx.assets_dir, image_ref)))
                    .width(Length::Fill)
                    .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
                    .content_fit(ContentFit::Cover);
                row.push(
                    button(thumb)
                        .padding(2)
                        .width(Length::FillPortion(1))
                        .on_press(Message::Select(index))
                        .style(styles::button::thumbnail(active)),
                )
            },
        );

        let content = Column::new()
            .push(preview_with_dots)
            .push(container(thumbnails).padding(spacing::MD));

        container(content)
            .width(Length::Fill)
            .style(styles::container::feature_card)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_image() {
        let state = State::new(3);
        assert_eq!(state.selected(), 0);
        assert_eq!(state.highlight(0), Highlight::Active);
    }

    #[test]
    fn select_moves_preview_and_active_dot() {
        let mut state = State::new(3);
        assert!(state.handle(Message::Select(2)));
        assert_eq!(state.selected(), 2);
        assert_eq!(state.highlight(2), Highlight::Active);
        assert_eq!(state.highlight(0), Highlight::Inactive);
        assert_eq!(state.highlight(1), Highlight::Inactive);
    }

    #[test]
    fn selecting_current_image_reports_no_change() {
        let mut state = State::new(3);
        assert!(!state.handle(Message::Select(0)));
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let mut state = State::new(3);
        state.handle(Message::Select(1));
        assert!(!state.handle(Message::Select(3)));
        assert_eq!(state.selected(), 1);
    }

    #[test]
    fn next_and_previous_wrap() {
        let mut state = State::new(3);
        state.handle(Message::Previous);
        assert_eq!(state.selected(), 2);
        state.handle(Message::Next);
        assert_eq!(state.selected(), 0);
        state.handle(Message::Next);
        assert_eq!(state.selected(), 1);
    }

    #[test]
    fn empty_gallery_never_moves() {
        let mut state = State::new(0);
        assert!(state.is_empty());
        assert!(!state.handle(Message::Next));
        assert!(!state.handle(Message::Select(0)));
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn image_path_joins_assets_dir() {
        let path = image_path(Path::new("/srv/images"), &ImageRef::new("hotel2.jpg"));
        assert_eq!(path, PathBuf::from("/srv/images/hotel2.jpg"));
    }
}
