//! Resilient client for the public tour information API.
//!
//! The upstream wraps every response in a result-code envelope, serializes
//! a lone record as a bare object instead of a one-element array, and fails
//! in ways ranging from transient 5xx to quota exhaustion. This crate
//! absorbs all of that: [`TourApiClient`] exposes one typed method per
//! upstream operation, retries transient failures with bounded exponential
//! backoff, and classifies every failure into an [`ErrorKind`] plus a
//! user-facing message.

pub mod client;
pub mod envelope;
pub mod error;
pub mod geo;
pub mod retry;
pub mod types;

mod detail;

pub use client::{KeyTier, TourApiClient};
pub use error::{ErrorKind, TourApiError};
pub use geo::{to_geo, GeoPoint};
pub use retry::RetryPolicy;
pub use types::{
    AreaCode, AreaListParams, KeywordParams, Listing, PetTourInfo, TourDetail, TourImage,
    TourIntro, TourItem,
};
