//! Error taxonomy and classification for the Tour API client.
//!
//! [`TourApiError`] is the single failure type crossing the client's public
//! boundary. Classification ([`TourApiError::kind`], [`TourApiError::user_message`])
//! is pure and side-effect-free: the same decision point selects both retry
//! eligibility and the sentence shown to end users.

use thiserror::Error;

/// Errors returned by the Tour API client.
#[derive(Debug, Error)]
pub enum TourApiError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// An HTTP response was received but its status was non-2xx.
    #[error("unexpected HTTP status {status} for {context}")]
    Status { status: u16, context: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Parse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The envelope header carried a non-success result code.
    #[error("Tour API result code {code}: {message}")]
    Upstream { code: String, message: String },

    /// The envelope reported success but carried no `items` field.
    ///
    /// The upstream signals "nothing here" by omitting `items` entirely,
    /// which is not the same as an explicitly empty item array.
    #[error("Tour API returned no data for {context}")]
    NoData { context: String },

    /// The configured base URL could not be parsed.
    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Coarse classification of a [`TourApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport-level failure (connection refused, DNS, timeout).
    Network,
    /// An HTTP response arrived with a non-2xx status.
    ApiStatus,
    /// The payload was not valid JSON or did not match the expected shape.
    Parse,
    /// Everything else, including upstream result-code failures.
    Unknown,
}

impl TourApiError {
    /// Classifies this error into one of the fixed [`ErrorKind`]s.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            TourApiError::Http(_) => ErrorKind::Network,
            TourApiError::Status { .. } => ErrorKind::ApiStatus,
            TourApiError::Parse { .. } => ErrorKind::Parse,
            TourApiError::Upstream { .. }
            | TourApiError::NoData { .. }
            | TourApiError::InvalidBaseUrl { .. } => ErrorKind::Unknown,
        }
    }

    /// Numeric HTTP status, present only for [`ErrorKind::ApiStatus`] errors.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            TourApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The sentence callers display verbatim to end users.
    ///
    /// Developers log the raw error (`Display`/`kind()`/`status_code()`)
    /// instead; the raw form is never shown to end users.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TourApiError::Http(_) => {
                "Could not reach the tour information service. Check your connection and try again."
                    .to_owned()
            }
            TourApiError::Status { status, .. } => status_message(*status).to_owned(),
            TourApiError::Parse { .. } => {
                "The tour information service returned an unreadable response.".to_owned()
            }
            TourApiError::Upstream { message, .. } => message.clone(),
            TourApiError::NoData { .. } => {
                "No tour information is available for this request.".to_owned()
            }
            TourApiError::InvalidBaseUrl { .. } => {
                "The tour information service is misconfigured. Contact the site administrator."
                    .to_owned()
            }
        }
    }
}

/// Maps an HTTP status to a user-actionable sentence.
fn status_message(status: u16) -> &'static str {
    match status {
        400 => "The request was malformed. Adjust your search and try again.",
        401 => "The service credential was not accepted. Contact the site administrator.",
        403 => "Access to the tour information service was denied.",
        404 => "The requested tour information could not be found.",
        429 => "Too many requests right now. Wait a moment and try again.",
        500 => "The tour information service hit an internal error. Try again shortly.",
        503 => "The tour information service is temporarily unavailable. Try again shortly.",
        _ => "The tour information service returned a server error.",
    }
}

/// Maps an envelope result code to a curated user-facing sentence.
///
/// Codes follow the upstream's two-digit scheme; anything unmapped falls
/// back to a generic sentence carrying the raw code.
pub(crate) fn result_code_message(code: &str) -> String {
    match code {
        "01" => "The request contained an invalid parameter. Adjust your search and try again.".to_owned(),
        "02" => "A required parameter was missing from the request.".to_owned(),
        "03" => "The service key was not accepted. Contact the site administrator.".to_owned(),
        "04" => "The service key has expired. Contact the site administrator.".to_owned(),
        "05" => "The daily request quota for the tour service has been exceeded. Try again tomorrow.".to_owned(),
        _ => format!("The tour information service reported an error (code {code})."),
    }
}
