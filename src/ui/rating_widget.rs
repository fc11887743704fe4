// SPDX-License-Identifier: MPL-2.0
//! "Rate your experience" widget.
//!
//! Five clickable stars. The chosen value is only kept in memory, nothing is
//! submitted anywhere.

use crate::domain::newtypes::rating_bounds::STAR_COUNT;
use crate::domain::UserRating;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, text, Column, Row};
use iced::{Element, Theme};

/// Rating widget state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    user_rating: UserRating,
}

/// Messages for the rating widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Star `k` (1-based) was clicked.
    Rate(u8),
}

impl State {
    #[must_use]
    pub fn user_rating(&self) -> UserRating {
        self.user_rating
    }

    /// Applies a message. Values outside 1..=5 leave the state unchanged.
    pub fn handle(&mut self, message: Message) {
        match message {
            Message::Rate(star) => match UserRating::from_star(star) {
                Some(rating) => {
                    tracing::debug!(rating = star, "user rating set");
                    self.user_rating = rating;
                }
                None => tracing::debug!(star, "ignoring out-of-range user rating"),
            },
        }
    }

    /// Localized confirmation, or `None` while unrated.
    #[must_use]
    pub fn confirmation(&self, i18n: &I18n) -> Option<String> {
        self.user_rating.is_rated().then(|| {
            i18n.tr_with_count(
                "rating-confirmation",
                "rating",
                i64::from(self.user_rating.value()),
            )
        })
    }

    pub fn view<'a>(&self, i18n: &I18n, theme: &Theme) -> Element<'a, Message> {
        let colors = ColorScheme::for_theme(theme);

        let stars = (1..=STAR_COUNT).fold(Row::new().spacing(spacing::XS), |row, star| {
            let (glyph, color) = if self.user_rating.lights(star) {
                (icons::star_filled(), colors.accent)
            } else {
                (icons::star_outline(), colors.star_empty)
            };
            row.push(
                button(icons::sized(glyph, sizing::STAR_INPUT, color))
                    .padding(0)
                    .on_press(Message::Rate(star))
                    .style(styles::button::star_input),
            )
        });

        let mut content = Column::new().spacing(spacing::MD).push(stars);
        if let Some(confirmation) = self.confirmation(i18n) {
            content = content.push(
                text(confirmation)
                    .size(typography::BODY)
                    .color(colors.text_muted),
            );
        }
        content.into()
    }
}
