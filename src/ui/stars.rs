// SPDX-License-Identifier: MPL-2.0
//! Read-only star rating display.
//!
//! [`indicators`] turns a rating into five [`StarFill`] values and
//! [`label`] formats the number shown next to them. Both are pure so the
//! rendering rules can be checked without a window; [`view`] only maps the
//! result onto widgets.

use crate::domain::newtypes::rating_bounds::STAR_COUNT;
use crate::domain::Rating;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::theming::ColorScheme;
use iced::alignment::Vertical;
use iced::widget::{text, Row};
use iced::{Color, Element, Theme};

/// How much of a single star is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarFill {
    Full,
    Half,
    Empty,
}

/// Size class of a star row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StarSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl StarSize {
    #[must_use]
    pub fn pixels(self) -> f32 {
        match self {
            StarSize::Sm => sizing::STAR_SM,
            StarSize::Md => sizing::STAR_MD,
            StarSize::Lg => sizing::STAR_LG,
        }
    }
}

/// Fill of star `star` (1-based) for `rating`.
///
/// Stars up to `floor(r)` are full. When `r` has a fractional remainder the
/// next star is half filled. Everything after is empty.
#[must_use]
pub fn fill_for(rating: Rating, star: u8) -> StarFill {
    let whole = rating.whole_stars();
    if star <= whole {
        StarFill::Full
    } else if star == whole + 1 && rating.has_fraction() {
        StarFill::Half
    } else {
        StarFill::Empty
    }
}

/// The five indicators for `rating`, in display order.
#[must_use]
pub fn indicators(rating: Rating) -> [StarFill; STAR_COUNT as usize] {
    std::array::from_fn(|i| {
        // i < 5, the cast cannot truncate.
        fill_for(rating, i as u8 + 1)
    })
}

/// Rating formatted with exactly one decimal place.
#[must_use]
pub fn label(rating: Rating) -> String {
    format!("{:.1}", rating.value())
}

/// Color token for a fill under the given theme.
#[must_use]
pub fn fill_color(fill: StarFill, theme: &Theme) -> Color {
    let colors = ColorScheme::for_theme(theme);
    match fill {
        StarFill::Full => colors.accent,
        StarFill::Half => colors.accent_half(),
        StarFill::Empty => colors.star_empty,
    }
}

/// Renders five stars followed by the numeric rating.
pub fn view<'a, Message: 'a>(rating: Rating, size: StarSize, theme: &Theme) -> Element<'a, Message> {
    let muted = ColorScheme::for_theme(theme).text_muted;

    let stars = indicators(rating)
        .into_iter()
        .fold(Row::new().spacing(spacing::XXS), |row, fill| {
            let glyph = match fill {
                StarFill::Full | StarFill::Half => icons::star_filled(),
                StarFill::Empty => icons::star_outline(),
            };
            row.push(icons::sized(glyph, size.pixels(), fill_color(fill, theme)))
        });

    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(stars)
        .push(text(label(rating)).size(typography::BODY_SM).color(muted))
        .into()
}
