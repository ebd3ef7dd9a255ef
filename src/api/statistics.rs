//! Sales statistics.

use std::str::FromStr;

use log::debug;
use serde_json::{json, Value};

use super::{unexpected, MojangApi};
use crate::dispatch::ClassifiedResponse;
use crate::error_handling::{ApiError, ApiResult};
use crate::models::{Metric, Statistics};

/// Validates metric keys.
///
/// # Errors
///
/// - `ApiError::NoMetrics` if `metrics` is empty
/// - `ApiError::InvalidMetric` for the first key outside the supported set
pub fn parse_metrics<S: AsRef<str>>(metrics: &[S]) -> ApiResult<Vec<Metric>> {
    if metrics.is_empty() {
        return Err(ApiError::NoMetrics);
    }
    metrics
        .iter()
        .map(|key| {
            let key = key.as_ref();
            Metric::from_str(key).map_err(|_| ApiError::InvalidMetric(key.to_string()))
        })
        .collect()
}

impl MojangApi {
    /// Fetches sales statistics for the given metric keys.
    ///
    /// Keys are validated before anything is sent.
    ///
    /// # Errors
    ///
    /// `NoMetrics` / `InvalidMetric` for bad input; upstream, domain and
    /// transport errors otherwise.
    pub async fn get_statistics<S: AsRef<str>>(&self, metrics: &[S]) -> ApiResult<Statistics> {
        let metrics = parse_metrics(metrics)?;
        self.get_metric_statistics(&metrics).await
    }

    /// Fetches sales statistics for already-typed metrics.
    ///
    /// # Errors
    ///
    /// `NoMetrics` for an empty slice; upstream, domain and transport errors otherwise.
    pub async fn get_metric_statistics(&self, metrics: &[Metric]) -> ApiResult<Statistics> {
        if metrics.is_empty() {
            return Err(ApiError::NoMetrics);
        }

        let keys: Vec<&str> = metrics.iter().map(AsRef::as_ref).collect();
        debug!("Requesting statistics for {:?}", keys);
        let url = format!("{}/orders/statistics", self.config().api_base);

        match self
            .dispatcher
            .post_json(&url, &json!({ "metricKeys": keys }))
            .await?
        {
            ClassifiedResponse::JsonObject(object) => serde_json::from_value(Value::Object(object))
                .map_err(|e| ApiError::MalformedPayload(format!("statistics: {e}"))),
            other => Err(unexpected(other, "statistics")),
        }
    }
}
