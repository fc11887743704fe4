// SPDX-License-Identifier: MPL-2.0
//! Booking sidebar: price, payment options, call-to-action buttons and perks.
//!
//! Reserve and Get a quote are placeholders. They emit a message that the
//! sidebar logs, and no state changes.

use crate::domain::Hotel;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::{format, icons};
use iced::alignment::Vertical;
use iced::font::{Font, Weight};
use iced::widget::{button, container, rule, text, Column, Row};
use iced::{Element, Length, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Reserve,
    RequestQuote,
}

/// Handles a sidebar action. Both actions are logged only.
pub fn handle(message: Message, hotel: &Hotel) {
    match message {
        Message::Reserve => {
            tracing::info!(hotel = %hotel.name, "reserve requested (not available)");
        }
        Message::RequestQuote => {
            tracing::info!(hotel = %hotel.name, "quote requested (not available)");
        }
    }
}

pub fn view<'a>(hotel: &'a Hotel, i18n: &I18n, theme: &Theme) -> Element<'a, Message> {
    let colors = ColorScheme::for_theme(theme);
    let bold = Font {
        weight: Weight::Bold,
        ..Font::default()
    };

    let price = Column::new()
        .spacing(spacing::XXS)
        .push(
            text(format::price(hotel.price_per_night, &hotel.currency, i18n))
                .size(typography::PRICE)
                .font(bold)
                .color(colors.brand_primary),
        )
        .push(
            text(i18n.tr("booking-per-night"))
                .size(typography::BODY_SM)
                .color(colors.text_muted),
        );

    let options = hotel.payment_options.iter().fold(
        Column::new().spacing(spacing::XS).push(
            text(i18n.tr("booking-payment-options"))
                .size(typography::TITLE_SM)
                .font(bold),
        ),
        |column, option| {
            column.push(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(Vertical::Center)
                    .push(
                        container("")
                            .width(Length::Fixed(sizing::BULLET))
                            .height(Length::Fixed(sizing::BULLET))
                            .style(styles::container::bullet),
                    )
                    .push(
                        text(option.as_str())
                            .size(typography::BODY_SM)
                            .color(colors.text_muted),
                    ),
            )
        },
    );

    let action = |label: String, message: Message| {
        button(
            container(text(label).size(typography::BODY).font(bold))
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .on_press(message)
    };

    let actions = Column::new()
        .spacing(spacing::SM)
        .push(action(i18n.tr("booking-reserve"), Message::Reserve).style(styles::button::primary))
        .push(
            action(i18n.tr("booking-quote"), Message::RequestQuote)
                .style(styles::button::outline),
        );

    let perks = hotel
        .perks
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, perk| {
            column.push(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(Vertical::Center)
                    .push(icons::sized(
                        icons::check(),
                        typography::BODY_SM,
                        colors.brand_primary,
                    ))
                    .push(
                        text(perk.as_str())
                            .size(typography::BODY_SM)
                            .color(colors.text_muted),
                    ),
            )
        });

    let content = Column::new()
        .spacing(spacing::LG)
        .push(price)
        .push(options)
        .push(actions)
        .push(rule::horizontal(1))
        .push(perks);

    container(content)
        .padding(spacing::LG)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .style(styles::container::feature_card)
        .into()
}
