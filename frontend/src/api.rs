use payloads::{BusinessInsight, BusinessQuery, ErrorBody, Headline, Health};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ClientError;

pub const DEFAULT_API_URL: &str = "http://localhost:3001";

pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn health(&self) -> Result<Health, ClientError> {
        let response = self.http.get(self.url("/health")).send().await?;

        decode(response).await
    }

    pub async fn business_data(&self, query: &BusinessQuery) -> Result<BusinessInsight, ClientError> {
        debug!("Fetching business data for {query:?}");

        let response = self
            .http
            .post(self.url("/business-data"))
            .json(query)
            .send()
            .await?;

        decode(response).await
    }

    pub async fn regenerate_headline(&self, query: &BusinessQuery) -> Result<String, ClientError> {
        debug!("Regenerating headline for {query:?}");

        let response = self
            .http
            .get(self.url("/regenerate-headline"))
            .query(&[("name", &query.name), ("location", &query.location)])
            .send()
            .await?;

        let Headline { headline } = decode(response).await?;

        Ok(headline)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();

    if !status.is_success() {
        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| status.to_string());

        return Err(ClientError::Status { status, message });
    }

    Ok(response.json().await?)
}
