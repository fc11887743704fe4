// SPDX-License-Identifier: MPL-2.0
//! The hotel record shown by the page.

use super::newtypes::Rating;

/// Icons an amenity can be drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmenityIcon {
    Wifi,
    Car,
    Utensils,
    Waves,
    /// Fallback for identifiers the page has no glyph for.
    Generic,
}

impl AmenityIcon {
    /// Maps a listing icon identifier to a glyph. Unknown identifiers
    /// fall back to [`AmenityIcon::Generic`].
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "wifi" => Self::Wifi,
            "car" | "parking" => Self::Car,
            "utensils" | "restaurant" => Self::Utensils,
            "waves" | "beach" => Self::Waves,
            _ => Self::Generic,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Amenity {
    pub icon: AmenityIcon,
    pub label: String,
}

/// A guest review. Reviews keep listing order; they are never sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub author: String,
    pub comment: String,
    pub rating: Rating,
}

/// Reference to a gallery image, resolved against the assets directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef(String);

impl ImageRef {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.0
    }
}

/// Immutable hotel listing.
///
/// Constructed only by [`crate::listing`], which guarantees `images` is
/// non-empty so index 0 is always a valid gallery selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    pub name: String,
    pub location: String,
    pub description: String,
    pub price_per_night: u32,
    pub currency: String,
    pub payment_options: Vec<String>,
    pub rating: Rating,
    pub amenities: Vec<Amenity>,
    pub reviews: Vec<Review>,
    pub images: Vec<ImageRef>,
    pub perks: Vec<String>,
}

impl Hotel {
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.images.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amenity_icon_maps_known_ids() {
        assert_eq!(AmenityIcon::from_id("wifi"), AmenityIcon::Wifi);
        assert_eq!(AmenityIcon::from_id("Car"), AmenityIcon::Car);
        assert_eq!(AmenityIcon::from_id(" utensils "), AmenityIcon::Utensils);
        assert_eq!(AmenityIcon::from_id("waves"), AmenityIcon::Waves);
    }

    #[test]
    fn amenity_icon_falls_back_to_generic() {
        assert_eq!(AmenityIcon::from_id("spa"), AmenityIcon::Generic);
        assert_eq!(AmenityIcon::from_id(""), AmenityIcon::Generic);
    }
}
