// SPDX-License-Identifier: MPL-2.0
//! Rating newtypes.
//!
//! This module provides type-safe wrappers for rating values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Rating Bounds
// =============================================================================

/// Rating bounds shared by the hotel, reviews and the user's own rating.
pub mod rating_bounds {
    /// Lowest possible rating.
    pub const MIN: f64 = 0.0;
    /// Highest possible rating.
    pub const MAX: f64 = 5.0;
    /// Number of stars drawn for any rating.
    pub const STAR_COUNT: u8 = 5;
}

// =============================================================================
// Rating
// =============================================================================

/// Aggregate or review rating, guaranteed to be within 0.0–5.0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Rating(f64);

impl Rating {
    /// Creates a new rating, clamping the value to the valid range.
    /// Non-finite input collapses to the minimum.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(rating_bounds::MIN, rating_bounds::MAX))
        } else {
            Self(rating_bounds::MIN)
        }
    }

    /// Creates a rating only if `value` is already in range.
    #[must_use]
    pub fn try_new(value: f64) -> Option<Self> {
        if value.is_finite() && (rating_bounds::MIN..=rating_bounds::MAX).contains(&value) {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Number of whole stars (`floor(r)`).
    #[must_use]
    pub fn whole_stars(self) -> u8 {
        // Range is 0..=5, the cast cannot truncate.
        self.0.floor() as u8
    }

    /// Whether the rating carries a fractional remainder.
    #[must_use]
    pub fn has_fraction(self) -> bool {
        self.0.fract() > 0.0
    }
}

// =============================================================================
// UserRating
// =============================================================================

/// The viewer's own rating: 0 means "not yet rated", otherwise 1–5 stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct UserRating(u8);

impl UserRating {
    /// The unrated state.
    pub const UNRATED: Self = Self(0);

    /// Rating given by clicking star `star`; `None` outside 1–5.
    #[must_use]
    pub fn from_star(star: u8) -> Option<Self> {
        (1..=rating_bounds::STAR_COUNT)
            .contains(&star)
            .then_some(Self(star))
    }

    /// Returns the number of stars given (0 when unrated).
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns true once the viewer has picked a star.
    #[must_use]
    pub fn is_rated(self) -> bool {
        self.0 > 0
    }

    /// Whether star `star` should be lit for this rating.
    #[must_use]
    pub fn lights(self, star: u8) -> bool {
        star <= self.0
    }
}
