use std::{any::Any, sync::Arc};

use axum::{
    Json,
    extract::{
        self, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    response::{IntoResponse, Response},
};
use payloads::{BusinessInsight, Headline, Health};
use tokio::time::sleep;
use tracing::{debug, error};

use crate::{
    error::{AppError, BODY_FIELDS_REQUIRED, QUERY_FIELDS_REQUIRED},
    headlines::{generate_insight, random_headline},
    state::State,
    utils::{RawQuery, validate_query},
};

pub const HEALTH_STATUS: &str = "OK";
pub const HEALTH_MESSAGE: &str = "Business Dashboard API is running";

pub async fn health_handler() -> Json<Health> {
    Json(Health {
        status: HEALTH_STATUS.to_string(),
        message: HEALTH_MESSAGE.to_string(),
    })
}

pub async fn business_data_handler(
    extract::State(state): extract::State<Arc<State>>,
    payload: Result<Json<RawQuery>, JsonRejection>,
) -> Result<Json<BusinessInsight>, AppError> {
    // an unreadable body counts as missing fields
    let raw = payload.map(|Json(raw)| raw).unwrap_or_else(|rejection| {
        debug!("Unreadable business data body: {rejection}");
        RawQuery::default()
    });

    let query = validate_query(raw, BODY_FIELDS_REQUIRED)?;
    let insight = generate_insight(&mut rand::rng(), &query);

    sleep(state.config.insight_delay).await;

    Ok(Json(insight))
}

pub async fn regenerate_headline_handler(
    extract::State(state): extract::State<Arc<State>>,
    params: Result<Query<RawQuery>, QueryRejection>,
) -> Result<Json<Headline>, AppError> {
    let raw = params.map(|Query(raw)| raw).unwrap_or_else(|rejection| {
        debug!("Unreadable regenerate query: {rejection}");
        RawQuery::default()
    });

    let query = validate_query(raw, QUERY_FIELDS_REQUIRED)?;
    let headline = random_headline(&mut rand::rng(), &query.name, &query.location);

    sleep(state.config.headline_delay).await;

    Ok(Json(Headline { headline }))
}

pub async fn not_found_handler() -> AppError {
    AppError::NotFound
}

pub fn panic_handler(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    error!("Handler panicked: {details}");

    AppError::Internal(details.to_string()).into_response()
}
