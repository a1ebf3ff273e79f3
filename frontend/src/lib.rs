//! # Dashboard Frontend
//!
//! Terminal rendition of the local business dashboard.
//!
//! ## Flow
//! - Ask for a business name and location, both required
//! - Fetch rating, reviews and an SEO headline from the API
//! - Show the card, offer to regenerate the headline
//!
//! Only the headline changes on regenerate. Rating and reviews stay what the
//! first fetch returned until a new business is submitted.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod form;
pub mod stars;
