// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Listing(ListingError),
}

/// Reasons a hotel listing is refused by the loader.
/// Used to log a precise cause before falling back to the bundled listing.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingError {
    /// The listing file is not valid TOML or misses required fields.
    Malformed(String),

    /// The listing has no images, so the gallery has no valid index.
    NoImages,

    /// The aggregate rating is outside 0.0–5.0 or not a number.
    RatingOutOfRange(f64),

    /// A review rating is outside 0.0–5.0 or not a number.
    ReviewRatingOutOfRange { author: String, rating: f64 },

    /// The bundled listing resource is missing from the binary.
    MissingEmbedded,
}

impl fmt::Display for ListingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingError::Malformed(msg) => write!(f, "Malformed listing: {}", msg),
            ListingError::NoImages => write!(f, "Listing has no images"),
            ListingError::RatingOutOfRange(rating) => {
                write!(f, "Hotel rating {} is outside 0.0-5.0", rating)
            }
            ListingError::ReviewRatingOutOfRange { author, rating } => {
                write!(f, "Review by {} has rating {} outside 0.0-5.0", author, rating)
            }
            ListingError::MissingEmbedded => write!(f, "Bundled listing resource not found"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Listing(e) => write!(f, "Listing Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ListingError> for Error {
    fn from(err: ListingError) -> Self {
        Error::Listing(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn listing_error_wraps_into_error() {
        let err: Error = ListingError::NoImages.into();
        assert!(matches!(err, Error::Listing(ListingError::NoImages)));
        assert_eq!(format!("{}", err), "Listing Error: Listing has no images");
    }

    #[test]
    fn review_rating_error_names_author() {
        let err = ListingError::ReviewRatingOutOfRange {
            author: "Ayşe Y.".to_string(),
            rating: 7.0,
        };
        let message = format!("{}", err);
        assert!(message.contains("Ayşe Y."));
        assert!(message.contains('7'));
    }
}
