//! HTTP client for the public tour information API.
//!
//! Wraps `reqwest` with envelope validation, error classification, and
//! bounded retry. One method per upstream operation; every method returns a
//! typed `Result` and never panics across the public boundary.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tourhub_core::AppConfig;

use crate::envelope::{normalize, ApiEnvelope};
use crate::error::{result_code_message, TourApiError};
use crate::retry::{retry_with_backoff, RetryPolicy};
use crate::types::{AreaCode, AreaListParams, KeywordParams, Listing, TourItem};

/// Which of the two service keys a call injects.
///
/// The server-only key must never appear in a client-tier call; tier
/// selection is a security boundary, not a retry concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyTier {
    Client,
    Server,
}

/// Client for the tour information REST API.
///
/// Manages the HTTP client, both credential-tier keys, the base URL, and
/// the retry policy. Use [`TourApiClient::from_config`] for production or
/// [`TourApiClient::with_base_url`] to point at a mock server in tests.
pub struct TourApiClient {
    client: Client,
    base_url: Url,
    client_key: String,
    server_key: String,
    app_name: String,
    retry: RetryPolicy,
}

impl TourApiClient {
    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TourApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`TourApiError::InvalidBaseUrl`] if the
    /// configured base URL does not parse.
    pub fn from_config(config: &AppConfig) -> Result<Self, TourApiError> {
        Self::with_base_url(
            &config.tourapi_client_key,
            &config.tourapi_server_key,
            &config.tourapi_app_name,
            config.request_timeout_secs,
            RetryPolicy {
                max_retries: config.max_retries,
                base_delay_ms: config.retry_base_delay_ms,
                max_delay_ms: config.retry_max_delay_ms,
            },
            &config.tourapi_base_url,
        )
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`TourApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`TourApiError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        client_key: &str,
        server_key: &str,
        app_name: &str,
        timeout_secs: u64,
        retry: RetryPolicy,
        base_url: &str,
    ) -> Result<Self, TourApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("tourhub/0.1 (tour-information)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // joining an operation name appends a path segment rather than
        // replacing the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| TourApiError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            client_key: client_key.to_owned(),
            server_key: server_key.to_owned(),
            app_name: app_name.to_owned(),
            retry,
        })
    }

    /// Fetches the full region (area code) list.
    ///
    /// # Errors
    ///
    /// - [`TourApiError::Upstream`] if the envelope carries an error code.
    /// - [`TourApiError::NoData`] if the envelope carries no items.
    /// - [`TourApiError::Http`] / [`TourApiError::Status`] on network failure
    ///   or a non-2xx response after retries.
    /// - [`TourApiError::Parse`] if the body does not match the envelope shape.
    pub async fn area_codes(&self, tier: KeyTier) -> Result<Listing<AreaCode>, TourApiError> {
        let url = self.build_url("areaCode2", tier, &[("numOfRows", "50"), ("pageNo", "1")])?;
        self.fetch_listing(url, "areaCode2").await
    }

    /// Fetches one page of places for an area, optionally filtered by
    /// sigungu and content type.
    ///
    /// # Errors
    ///
    /// Same failure surface as [`TourApiClient::area_codes`].
    pub async fn area_based_list(
        &self,
        tier: KeyTier,
        params: &AreaListParams,
    ) -> Result<Listing<TourItem>, TourApiError> {
        let num_of_rows = params.num_of_rows.to_string();
        let page_no = params.page_no.to_string();

        let mut extra: Vec<(&str, &str)> = vec![
            ("numOfRows", num_of_rows.as_str()),
            ("pageNo", page_no.as_str()),
        ];
        if let Some(arrange) = &params.arrange {
            extra.push(("arrange", arrange));
        }
        if let Some(area_code) = &params.area_code {
            extra.push(("areaCode", area_code));
        }
        if let Some(sigungu_code) = &params.sigungu_code {
            extra.push(("sigunguCode", sigungu_code));
        }
        if let Some(content_type_id) = &params.content_type_id {
            extra.push(("contentTypeId", content_type_id));
        }

        let url = self.build_url("areaBasedList2", tier, &extra)?;
        self.fetch_listing(url, "areaBasedList2").await
    }

    /// Searches places by keyword, optionally filtered by area and content
    /// type.
    ///
    /// An empty keyword is rejected locally as a missing-parameter failure
    /// without issuing a request; the upstream would reject it anyway.
    ///
    /// # Errors
    ///
    /// Same failure surface as [`TourApiClient::area_codes`].
    pub async fn search_keyword(
        &self,
        tier: KeyTier,
        params: &KeywordParams,
    ) -> Result<Listing<TourItem>, TourApiError> {
        if params.keyword.trim().is_empty() {
            return Err(TourApiError::Upstream {
                code: "02".to_owned(),
                message: result_code_message("02"),
            });
        }

        let num_of_rows = params.num_of_rows.to_string();
        let page_no = params.page_no.to_string();

        let mut extra: Vec<(&str, &str)> = vec![
            ("keyword", params.keyword.as_str()),
            ("numOfRows", num_of_rows.as_str()),
            ("pageNo", page_no.as_str()),
        ];
        if let Some(area_code) = &params.area_code {
            extra.push(("areaCode", area_code));
        }
        if let Some(content_type_id) = &params.content_type_id {
            extra.push(("contentTypeId", content_type_id));
        }

        let url = self.build_url("searchKeyword2", tier, &extra)?;
        self.fetch_listing(url, "searchKeyword2").await
    }

    fn key_for(&self, tier: KeyTier) -> &str {
        match tier {
            KeyTier::Client => &self.client_key,
            KeyTier::Server => &self.server_key,
        }
    }

    /// Builds the full request URL for an operation: common parameters
    /// (service key for the selected tier, mobile-OS tag, app name, JSON
    /// output) merged with operation-specific ones, all percent-encoded via
    /// [`Url::query_pairs_mut`].
    pub(crate) fn build_url(
        &self,
        op: &str,
        tier: KeyTier,
        extra: &[(&str, &str)],
    ) -> Result<Url, TourApiError> {
        let mut url = self
            .base_url
            .join(op)
            .map_err(|e| TourApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("serviceKey", self.key_for(tier));
            pairs.append_pair("MobileOS", "ETC");
            pairs.append_pair("MobileApp", &self.app_name);
            pairs.append_pair("_type", "json");
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends one GET with retry on transient failures, then validates and
    /// flattens the envelope.
    ///
    /// Envelope-level failures (error result codes, absent items) surface
    /// after the retry layer on purpose: they indicate a request or
    /// configuration defect and must never be retried.
    pub(crate) async fn fetch_listing<T: DeserializeOwned>(
        &self,
        url: Url,
        context: &'static str,
    ) -> Result<Listing<T>, TourApiError> {
        let envelope = retry_with_backoff(self.retry, || {
            let url = url.clone();
            async move { self.get_envelope::<T>(&url, context).await }
        })
        .await?;
        normalize(envelope, context)
    }

    /// One GET: asserts a 2xx status and parses the body as an envelope.
    ///
    /// The error context carries the operation name rather than the URL so
    /// that service keys never leak into logs.
    async fn get_envelope<T: DeserializeOwned>(
        &self,
        url: &Url,
        context: &str,
    ) -> Result<ApiEnvelope<T>, TourApiError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TourApiError::Status {
                status: status.as_u16(),
                context: context.to_owned(),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| TourApiError::Parse {
            context: context.to_owned(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
