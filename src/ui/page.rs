// SPDX-License-Identifier: MPL-2.0
//! Hotel detail page.
//!
//! Owns the two pieces of local UI state (gallery selection and the viewer's
//! own rating) and lays out the header, the content cards and the booking
//! sidebar. The listing itself is read-only.

use crate::domain::Hotel;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::stars::{self, StarSize};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::{booking, format, gallery, icons, rating_widget};
use iced::alignment::{Horizontal, Vertical};
use iced::font::{Font, Weight};
use iced::widget::{container, scrollable, text, Column, Row, Space};
use iced::{Element, Length, Theme};
use std::path::Path;

const AMENITIES_PER_ROW: usize = 4;

/// Page view-model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    gallery: gallery::State,
    rating: rating_widget::State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Gallery(gallery::Message),
    Rating(rating_widget::Message),
    Booking(booking::Message),
}

/// Contextual data needed to render the page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub hotel: &'a Hotel,
    pub assets_dir: &'a Path,
    pub theme: Theme,
    /// Translation keys of warnings raised while starting up.
    pub warnings: &'a [String],
}

impl State {
    #[must_use]
    pub fn new(hotel: &Hotel) -> Self {
        Self {
            gallery: gallery::State::new(hotel.image_count()),
            rating: rating_widget::State::default(),
        }
    }

    #[must_use]
    pub fn gallery(&self) -> &gallery::State {
        &self.gallery
    }

    #[must_use]
    pub fn rating(&self) -> &rating_widget::State {
        &self.rating
    }

    pub fn handle(&mut self, message: Message, hotel: &Hotel) {
        match message {
            Message::Gallery(message) => {
                if self.gallery.handle(message) {
                    tracing::debug!(index = self.gallery.selected(), "gallery image selected");
                }
            }
            Message::Rating(message) => self.rating.handle(message),
            Message::Booking(message) => booking::handle(message, hotel),
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let ViewContext {
            i18n,
            hotel,
            assets_dir,
            theme,
            warnings,
        } = ctx;
        let theme = &theme;

        let gallery = self
            .gallery
            .view(gallery::ViewContext {
                i18n,
                hotel_name: &hotel.name,
                images: &hotel.images,
                assets_dir,
            })
            .map(Message::Gallery);

        let main = Column::new()
            .spacing(spacing::LG)
            .width(Length::Fill)
            .push(gallery)
            .push(about(hotel, i18n, theme))
            .push(amenities(hotel, i18n, theme))
            .push(reviews(hotel, i18n, theme))
            .push(card(
                i18n.tr("section-rate"),
                self.rating.view(i18n, theme).map(Message::Rating),
            ));

        let sidebar = booking::view(hotel, i18n, theme).map(Message::Booking);

        let body = Row::new()
            .spacing(spacing::LG)
            .push(main)
            .push(sidebar);

        let mut page = Column::new().spacing(spacing::LG);
        for key in warnings {
            page = page.push(
                container(text(i18n.tr(key)).size(typography::BODY_SM))
                    .padding(spacing::SM)
                    .width(Length::Fill)
                    .style(styles::container::warning),
            );
        }
        let page = page.push(header(hotel, i18n, theme)).push(body);

        let centered = container(page.max_width(sizing::CONTENT_MAX_WIDTH))
            .padding(spacing::XL)
            .width(Length::Fill)
            .align_x(Horizontal::Center);

        container(scrollable(centered))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::page)
            .into()
    }
}

fn bold() -> Font {
    Font {
        weight: Weight::Bold,
        ..Font::default()
    }
}

/// Card with a section title above its content.
fn card<'a>(title: String, content: Element<'a, Message>) -> Element<'a, Message> {
    container(
        Column::new()
            .spacing(spacing::MD)
            .push(text(title).size(typography::TITLE_MD).font(bold()))
            .push(content),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

fn header<'a>(hotel: &'a Hotel, i18n: &I18n, theme: &Theme) -> Element<'a, Message> {
    let colors = ColorScheme::for_theme(theme);

    let location = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icons::sized(icons::map_pin(), sizing::ICON_MD, colors.brand_primary))
        .push(
            text(hotel.location.as_str())
                .size(typography::BODY_LG)
                .color(colors.text_muted),
        );

    let identity = Column::new()
        .spacing(spacing::XS)
        .push(
            text(hotel.name.as_str())
                .size(typography::DISPLAY)
                .font(bold())
                .color(colors.text_primary),
        )
        .push(location)
        .push(stars::view::<Message>(hotel.rating, StarSize::Lg, theme));

    let price = Column::new()
        .align_x(Horizontal::Right)
        .push(
            text(format::price(hotel.price_per_night, &hotel.currency, i18n))
                .size(typography::PRICE)
                .font(bold())
                .color(colors.brand_primary),
        )
        .push(
            text(i18n.tr("header-per-night"))
                .size(typography::BODY_SM)
                .color(colors.text_muted),
        );

    Row::new()
        .align_y(Vertical::Bottom)
        .push(identity)
        .push(Space::new().width(Length::Fill))
        .push(price)
        .into()
}

fn about<'a>(hotel: &'a Hotel, i18n: &I18n, theme: &Theme) -> Element<'a, Message> {
    let colors = ColorScheme::for_theme(theme);

    let description = text(hotel.description.as_str())
        .size(typography::BODY_LG)
        .color(colors.text_primary)
        .wrapping(text::Wrapping::Word);

    card(i18n.tr("section-about"), description.into())
}

fn amenities<'a>(hotel: &'a Hotel, i18n: &I18n, theme: &Theme) -> Element<'a, Message> {
    let colors = ColorScheme::for_theme(theme);

    let grid = hotel.amenities.chunks(AMENITIES_PER_ROW).fold(
        Column::new().spacing(spacing::MD),
        |grid, chunk| {
            let mut row = chunk.iter().fold(Row::new().spacing(spacing::MD), |row, amenity| {
                let tile = Column::new()
                    .spacing(spacing::XS)
                    .align_x(Horizontal::Center)
                    .push(icons::sized(
                        icons::amenity(amenity.icon),
                        sizing::ICON_LG,
                        colors.brand_primary,
                    ))
                    .push(
                        text(amenity.label.as_str())
                            .size(typography::BODY_SM)
                            .color(colors.text_primary),
                    );
                row.push(
                    container(tile)
                        .padding(spacing::MD)
                        .width(Length::FillPortion(1))
                        .align_x(Horizontal::Center)
                        .style(styles::container::tile),
                )
            });
            // Pad the last row so tiles keep the same width.
            for _ in chunk.len()..AMENITIES_PER_ROW {
                row = row.push(Space::new().width(Length::FillPortion(1)));
            }
            grid.push(row)
        },
    );

    card(i18n.tr("section-amenities"), grid.into())
}

fn reviews<'a>(hotel: &'a Hotel, i18n: &I18n, theme: &Theme) -> Element<'a, Message> {
    let colors = ColorScheme::for_theme(theme);

    let list = hotel
        .reviews
        .iter()
        .fold(Column::new().spacing(spacing::MD), |list, review| {
            let heading = Row::new()
                .align_y(Vertical::Center)
                .push(
                    text(review.author.as_str())
                        .size(typography::TITLE_SM)
                        .font(bold())
                        .color(colors.text_primary),
                )
                .push(Space::new().width(Length::Fill))
                .push(stars::view::<Message>(review.rating, StarSize::Sm, theme));

            list.push(
                container(
                    Column::new().spacing(spacing::XS).push(heading).push(
                        text(review.comment.as_str())
                            .size(typography::BODY)
                            .color(colors.text_muted)
                            .wrapping(text::Wrapping::Word),
                    ),
                )
                .padding(spacing::MD)
                .width(Length::Fill)
                .style(styles::container::tile),
            )
        });

    card(i18n.tr("section-reviews"), list.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing;

    fn hotel() -> Hotel {
        listing::load_embedded().expect("embedded listing")
    }

    #[test]
    fn initial_state_is_first_image_and_unrated() {
        let hotel = hotel();
        let state = State::new(&hotel);
        assert_eq!(state.gallery().selected(), 0);
        assert_eq!(state.gallery().len(), hotel.image_count());
        assert_eq!(state.rating().user_rating().value(), 0);
    }

    #[test]
    fn booking_actions_change_nothing() {
        let hotel = hotel();
        let mut state = State::new(&hotel);
        let before = state.clone();
        state.handle(Message::Booking(booking::Message::Reserve), &hotel);
        state.handle(Message::Booking(booking::Message::RequestQuote), &hotel);
        assert_eq!(state, before);
    }

    #[test]
    fn page_builds_in_both_themes() {
        let hotel = hotel();
        let state = State::new(&hotel);
        let i18n = I18n::new(Some("tr".to_string()), &crate::config::Config::default());
        for theme in [Theme::Light, Theme::Dark] {
            let _ = about(&hotel, &i18n, &theme);
            let _ = state.view(ViewContext {
                i18n: &i18n,
                hotel: &hotel,
                assets_dir: Path::new("assets/images"),
                theme,
                warnings: &[],
            });
        }
    }

    #[test]
    fn messages_route_to_their_component() {
        let hotel = hotel();
        let mut state = State::new(&hotel);
        state.handle(Message::Gallery(gallery::Message::Select(1)), &hotel);
        state.handle(Message::Rating(rating_widget::Message::Rate(4)), &hotel);
        assert_eq!(state.gallery().selected(), 1);
        assert_eq!(state.rating().user_rating().value(), 4);
    }
}
