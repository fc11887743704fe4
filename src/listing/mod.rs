// SPDX-License-Identifier: MPL-2.0
//! Loading of the hotel listing shown by the page.
//!
//! The listing ships inside the binary as `assets/data/hotel.toml`. A
//! different listing can be supplied as a TOML file with the same layout
//! (`--listing` on the command line or `[listing] path` in the settings).
//!
//! Every listing goes through [`parse`], which rejects records the page
//! cannot show: no images (the gallery would have no valid index) or
//! ratings outside 0.0–5.0.
//!
//! # Examples
//!
//! ```
//! let hotel = hotel_lens::listing::load_embedded().expect("bundled listing is valid");
//! assert_eq!(hotel.images.len(), 3);
//! ```

use crate::domain::{Amenity, AmenityIcon, Hotel, ImageRef, Rating, Review};
use crate::error::{ListingError, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/data/"]
struct Asset;

/// File name of the bundled listing inside `assets/data/`.
const EMBEDDED_LISTING: &str = "hotel.toml";

// =============================================================================
// File Layout
// =============================================================================

#[derive(Debug, Deserialize)]
struct ListingFile {
    name: String,
    location: String,
    #[serde(default)]
    description: String,
    price_per_night: u32,
    #[serde(default = "default_currency")]
    currency: String,
    #[serde(default)]
    payment_options: Vec<String>,
    rating: f64,
    #[serde(default)]
    amenities: Vec<AmenityEntry>,
    #[serde(default)]
    reviews: Vec<ReviewEntry>,
    #[serde(default)]
    images: Vec<String>,
    #[serde(default)]
    perks: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct AmenityEntry {
    icon: String,
    label: String,
}

#[derive(Debug, Deserialize)]
struct ReviewEntry {
    author: String,
    comment: String,
    rating: f64,
}

fn default_currency() -> String {
    "TL".to_string()
}

// =============================================================================
// Parsing and Validation
// =============================================================================

/// Parses and validates a listing from TOML text.
pub fn parse(content: &str) -> Result<Hotel> {
    let file: ListingFile = toml::from_str(content)
        .map_err(|err| ListingError::Malformed(err.message().to_string()))?;
    validate(file)
}

fn validate(file: ListingFile) -> Result<Hotel> {
    if file.images.is_empty() {
        return Err(ListingError::NoImages.into());
    }

    let rating =
        Rating::try_new(file.rating).ok_or(ListingError::RatingOutOfRange(file.rating))?;

    let reviews = file
        .reviews
        .into_iter()
        .map(|entry| {
            let rating = Rating::try_new(entry.rating).ok_or_else(|| {
                ListingError::ReviewRatingOutOfRange {
                    author: entry.author.clone(),
                    rating: entry.rating,
                }
            })?;
            Ok(Review {
                author: entry.author,
                comment: entry.comment,
                rating,
            })
        })
        .collect::<std::result::Result<Vec<_>, ListingError>>()?;

    let amenities = file
        .amenities
        .into_iter()
        .map(|entry| Amenity {
            icon: AmenityIcon::from_id(&entry.icon),
            label: entry.label,
        })
        .collect();

    Ok(Hotel {
        name: file.name,
        location: file.location,
        description: file.description,
        price_per_night: file.price_per_night,
        currency: file.currency,
        payment_options: file.payment_options,
        rating,
        amenities,
        reviews,
        images: file.images.into_iter().map(ImageRef::new).collect(),
        perks: file.perks,
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the listing bundled with the binary.
pub fn load_embedded() -> Result<Hotel> {
    let content = Asset::get(EMBEDDED_LISTING).ok_or(ListingError::MissingEmbedded)?;
    parse(&String::from_utf8_lossy(content.data.as_ref()))
}

/// Loads a listing from a TOML file on disk.
pub fn load_from_path(path: &Path) -> Result<Hotel> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// Loads the listing at `path`, falling back to the bundled listing when
/// the file cannot be read or is rejected.
///
/// Returns the listing together with an optional warning key suitable for
/// the log, set when the fallback was taken.
pub fn load_or_embedded(path: Option<&Path>) -> Result<(Hotel, Option<&'static str>)> {
    if let Some(path) = path {
        match load_from_path(path) {
            Ok(hotel) => {
                tracing::info!(path = %path.display(), "loaded listing file");
                return Ok((hotel, None));
            }
            Err(err) => {
                tracing::error!(path = %path.display(), %err, "listing rejected, using bundled listing");
                return load_embedded().map(|hotel| (hotel, Some("warning-listing-fallback")));
            }
        }
    }

    load_embedded().map(|hotel| (hotel, None))
}
