//! # Dashboard
//!
//! State behind the single dashboard screen.
//!
//! ## Actions
//! - Submit: validate the form, fetch rating/reviews/headline, replace the card
//! - Regenerate: fetch a new headline for the current form values, replace only the headline
//!
//! Each action is split in a `begin_*` half that marks it busy and a `finish_*`
//! half that applies the response and clears the busy flag. A second `begin_*`
//! while the first is in flight is refused with [`Outcome::Busy`].
//!
//! Any failure, network or status, ends in the same generic alert. Nothing is retried.
use payloads::{BusinessInsight, BusinessQuery};
use tracing::error;

use crate::{
    api::ApiClient,
    error::ClientError,
    form::{BusinessForm, Field, FieldErrors},
    stars::render_stars,
};

pub const FETCH_FAILED: &str = "Failed to fetch business data. Please try again.";
pub const REGENERATE_FAILED: &str = "Failed to regenerate headline. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Updated,
    Invalid,
    Busy,
    NothingToRegenerate,
    Failed(&'static str),
}

#[derive(Debug, Default)]
pub struct Dashboard {
    form: BusinessForm,
    errors: FieldErrors,
    insight: Option<BusinessInsight>,
    loading: bool,
    regenerating: bool,
}

impl Dashboard {
    pub fn form(&self) -> &BusinessForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn insight(&self) -> Option<&BusinessInsight> {
        self.insight.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_regenerating(&self) -> bool {
        self.regenerating
    }

    /// Editing a field clears its error.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value.into());
        self.errors.clear(field);
    }

    pub fn begin_submit(&mut self) -> Result<BusinessQuery, Outcome> {
        if self.loading {
            return Err(Outcome::Busy);
        }

        match self.form.validate() {
            Ok(query) => {
                self.errors = FieldErrors::default();
                self.loading = true;
                Ok(query)
            }
            Err(errors) => {
                self.errors = errors;
                Err(Outcome::Invalid)
            }
        }
    }

    pub fn finish_submit(&mut self, result: Result<BusinessInsight, ClientError>) -> Outcome {
        self.loading = false;

        match result {
            Ok(insight) => {
                self.insight = Some(insight);
                Outcome::Updated
            }
            Err(e) => {
                error!("Error fetching business data: {e}");
                Outcome::Failed(FETCH_FAILED)
            }
        }
    }

    pub async fn submit(&mut self, api: &ApiClient) -> Outcome {
        match self.begin_submit() {
            Ok(query) => {
                let result = api.business_data(&query).await;
                self.finish_submit(result)
            }
            Err(outcome) => outcome,
        }
    }

    /// Uses the form as it is now, without validating it again.
    pub fn begin_regenerate(&mut self) -> Result<BusinessQuery, Outcome> {
        if self.insight.is_none() {
            return Err(Outcome::NothingToRegenerate);
        }

        if self.regenerating {
            return Err(Outcome::Busy);
        }

        self.regenerating = true;
        Ok(self.form.query())
    }

    pub fn finish_regenerate(&mut self, result: Result<String, ClientError>) -> Outcome {
        self.regenerating = false;

        match (result, self.insight.as_mut()) {
            (Ok(headline), Some(insight)) => {
                insight.headline = headline;
                Outcome::Updated
            }
            (Ok(_), None) => Outcome::NothingToRegenerate,
            (Err(e), _) => {
                error!("Error regenerating headline: {e}");
                Outcome::Failed(REGENERATE_FAILED)
            }
        }
    }

    pub async fn regenerate(&mut self, api: &ApiClient) -> Outcome {
        match self.begin_regenerate() {
            Ok(query) => {
                let result = api.regenerate_headline(&query).await;
                self.finish_regenerate(result)
            }
            Err(outcome) => outcome,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            "Analyzing Business..."
        } else {
            "Get Business Insights"
        }
    }

    pub fn regenerate_label(&self) -> &'static str {
        if self.regenerating {
            "Generating..."
        } else {
            "Regenerate"
        }
    }

    /// Text card for the current insight, empty when nothing was fetched yet.
    pub fn render(&self) -> String {
        let Some(insight) = &self.insight else {
            return String::new();
        };

        let rating = insight.rating.parse().unwrap_or(f64::NAN);

        [
            format!("{} - Business Overview", self.form.name),
            String::new(),
            format!("Google Rating    {}", render_stars(rating)),
            format!("  {}", insight.rating),
            "  Out of 5 stars".to_string(),
            String::new(),
            "Total Reviews".to_string(),
            format!("  {}", insight.reviews),
            "  Customer reviews".to_string(),
            String::new(),
            format!("AI-Generated SEO Headline    [{}]", self.regenerate_label()),
            format!("  {}", insight.headline),
            "  Optimized for search engines and local discovery".to_string(),
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::form::{LOCATION_REQUIRED, NAME_REQUIRED};

    fn insight(headline: &str) -> BusinessInsight {
        BusinessInsight {
            rating: "4.2".to_string(),
            reviews: 187,
            headline: headline.to_string(),
        }
    }

    fn filled() -> Dashboard {
        let mut dashboard = Dashboard::default();
        dashboard.set_field(Field::Name, "Joe's Cafe");
        dashboard.set_field(Field::Location, "Austin");
        dashboard
    }

    fn offline_error() -> ClientError {
        ClientError::Status {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            message: "Internal server error".to_string(),
        }
    }

    #[test]
    fn test_invalid_form_sends_nothing() {
        let mut dashboard = Dashboard::default();
        dashboard.set_field(Field::Name, "  ");

        assert_eq!(dashboard.begin_submit(), Err(Outcome::Invalid));
        assert_eq!(dashboard.errors().name, Some(NAME_REQUIRED));
        assert_eq!(dashboard.errors().location, Some(LOCATION_REQUIRED));
        assert!(!dashboard.is_loading());
    }

    #[test]
    fn test_typing_clears_field_error() {
        let mut dashboard = Dashboard::default();
        let _ = dashboard.begin_submit();

        dashboard.set_field(Field::Name, "J");

        assert_eq!(dashboard.errors().name, None);
        assert_eq!(dashboard.errors().location, Some(LOCATION_REQUIRED));
    }

    #[test]
    fn test_duplicate_submit_is_busy() {
        let mut dashboard = filled();

        assert!(dashboard.begin_submit().is_ok());
        assert_eq!(dashboard.submit_label(), "Analyzing Business...");
        assert_eq!(dashboard.begin_submit(), Err(Outcome::Busy));

        dashboard.finish_submit(Ok(insight("Headline")));

        assert_eq!(dashboard.submit_label(), "Get Business Insights");
        assert!(dashboard.begin_submit().is_ok());
    }

    #[test]
    fn test_failed_submit_alerts_and_resets() {
        let mut dashboard = filled();
        dashboard.begin_submit().unwrap();

        assert_eq!(
            dashboard.finish_submit(Err(offline_error())),
            Outcome::Failed(FETCH_FAILED)
        );
        assert!(!dashboard.is_loading());
        assert!(dashboard.insight().is_none());
    }

    #[test]
    fn test_regenerate_needs_insight() {
        let mut dashboard = filled();

        assert_eq!(
            dashboard.begin_regenerate(),
            Err(Outcome::NothingToRegenerate)
        );
    }

    #[test]
    fn test_failed_regenerate_keeps_headline() {
        let mut dashboard = filled();
        dashboard.begin_submit().unwrap();
        dashboard.finish_submit(Ok(insight("Old")));

        dashboard.begin_regenerate().unwrap();
        assert_eq!(dashboard.begin_regenerate(), Err(Outcome::Busy));
        assert_eq!(
            dashboard.finish_regenerate(Err(offline_error())),
            Outcome::Failed(REGENERATE_FAILED)
        );

        assert_eq!(dashboard.insight().unwrap().headline, "Old");
        assert!(!dashboard.is_regenerating());
    }

    #[test]
    fn test_render_card() {
        let mut dashboard = filled();
        dashboard.begin_submit().unwrap();
        dashboard.finish_submit(Ok(insight("Inside Joe's Cafe: Austin's Rising Star")));

        let card = dashboard.render();

        assert!(card.starts_with("Joe's Cafe - Business Overview"));
        assert!(card.contains("★★★★⯪"));
        assert!(card.contains("187"));
        assert!(card.contains("Inside Joe's Cafe: Austin's Rising Star"));
        assert_eq!(card.lines().count(), 13);
        assert_eq!(
            card.lines().last(),
            Some("  Optimized for search engines and local discovery")
        );
    }

    #[tokio::test]
    async fn test_regenerate_only_replaces_headline() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/business-data");
                then.status(200).json_body(json!({
                    "rating": "4.2",
                    "reviews": 187,
                    "headline": "Joe's Cafe: Austin's Premier Business Success Story"
                }));
            })
            .await;
        let regenerate = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/regenerate-headline")
                    .query_param("name", "Joe's Cafe")
                    .query_param("location", "Austin");
                then.status(200)
                    .json_body(json!({ "headline": "Inside Joe's Cafe: Austin's Rising Star" }));
            })
            .await;

        let api = ApiClient::new(&server.base_url());
        let mut dashboard = filled();

        assert_eq!(dashboard.submit(&api).await, Outcome::Updated);
        assert_eq!(dashboard.regenerate(&api).await, Outcome::Updated);

        regenerate.assert_async().await;
        assert_eq!(
            dashboard.insight(),
            Some(&BusinessInsight {
                rating: "4.2".to_string(),
                reviews: 187,
                headline: "Inside Joe's Cafe: Austin's Rising Star".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_error_status_alerts() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/business-data");
                then.status(500)
                    .json_body(json!({ "error": "Internal server error" }));
            })
            .await;

        let api = ApiClient::new(&server.base_url());
        let mut dashboard = filled();

        assert_eq!(dashboard.submit(&api).await, Outcome::Failed(FETCH_FAILED));
        assert!(!dashboard.is_loading());
    }

    #[tokio::test]
    async fn test_unreachable_server_alerts() {
        let api = ApiClient::new("http://127.0.0.1:9");
        let mut dashboard = filled();

        assert_eq!(dashboard.submit(&api).await, Outcome::Failed(FETCH_FAILED));
    }
}
