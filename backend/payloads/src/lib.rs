//! # Payloads
//!
//! JSON shapes exchanged between the dashboard frontend and backend.
//!
//! ## Requests
//! - `POST /business-data`: [`BusinessQuery`] as the JSON body
//! - `GET /regenerate-headline`: [`BusinessQuery`] as query parameters
//!
//! ## Responses
//! - [`Health`], [`BusinessInsight`], [`Headline`] on success
//! - [`ErrorBody`] on any failure, status code carries the kind
//!
//! Nothing here is stored. Every value is built per request and dropped once sent.
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BusinessQuery {
    pub name: String,
    pub location: String,
}

impl BusinessQuery {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }
}

/// Generated metrics for a business.
///
/// `rating` stays a string with one fraction digit, e.g. `"4.2"`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BusinessInsight {
    pub rating: String,
    pub reviews: u32,
    pub headline: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Headline {
    pub headline: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Health {
    pub status: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
