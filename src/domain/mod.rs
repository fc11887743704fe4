// SPDX-License-Identifier: MPL-2.0
//! Domain layer - listing types and rating value objects.
//!
//! Nothing here depends on the GUI toolkit or on serialization, so the
//! types can be built and tested in isolation.
//!
//! # Modules
//!
//! - [`listing`]: The [`Hotel`](listing::Hotel) record with its amenities,
//!   reviews and image references
//! - [`newtypes`]: [`Rating`](newtypes::Rating) and
//!   [`UserRating`](newtypes::UserRating)

pub mod listing;
pub mod newtypes;

pub use listing::{Amenity, AmenityIcon, Hotel, ImageRef, Review};
pub use newtypes::{Rating, UserRating};
