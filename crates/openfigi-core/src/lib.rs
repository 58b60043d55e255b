//! # OpenFIGI Core
//!
//! Typed client for the [OpenFIGI API](https://www.openfigi.com/api).
//!
//! ## Overview
//!
//! Requests are described with validated value objects. Every cross-field
//! rule the API documents is checked locally, before any network call:
//!
//! - **Reference values** for enumerated fields (`exchCode`, `currency`, ...)
//! - **Mutual exclusion** of `exchCode` and `micCode`
//! - **Intervals** for strike, contract size, coupon, expiration and maturity
//! - **Conditional fields**: expiration needs `Option`, maturity needs `Pool`,
//!   `BASE_TICKER` / `ID_EXCH_SYMBOL` need `securityType2`
//!
//! Three query kinds are supported: mapping (bulk identifier resolution),
//! search and filter (paged, filter adds a total count).
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`builder`] | Fluent builders for base and mapping items |
//! | [`client`] | Async API client |
//! | [`config`] | Base URL / API key configuration |
//! | [`domain`] | Items and interval types |
//! | [`error`] | Validation and client errors |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`request`] | Mapping batch |
//! | [`response`] | Decoded responses and pagination |
//! | [`status`] | Documented status code meanings |
//! | [`values`] | Reference value sets |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use openfigi_core::{BaseItemSetters, MappingItem, MappingRequest, OpenFigiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OpenFigiClient::default();
//!
//!     let job = MappingItem::builder("TICKER", "IBM")
//!         .with_exch_code("US")
//!         .build()?;
//!     let results = MappingRequest::from(vec![job]).fetch(&client).await?;
//!
//!     for figi in &results[0].data {
//!         println!("{:?}", figi.figi);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pagination
//!
//! ```rust,ignore
//! let item = BaseItem::builder().with_exch_code("US").build()?;
//! let mut page = client.search(&item, "IBM", None).await?;
//! while page.has_next() {
//!     page = page.next(&client).await?;
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use openfigi_core::FigiError;
//!
//! fn describe(error: &FigiError) -> String {
//!     match error {
//!         FigiError::Validation(inner) => format!("fix the request: {inner}"),
//!         FigiError::Status { status: 429, .. } => String::from("slow down"),
//!         FigiError::NoMoreResults => String::from("done"),
//!         other => other.to_string(),
//!     }
//! }
//! ```
//!
//! ## Security
//!
//! - The API key is sent only as the `X-OPENFIGI-APIKEY` header
//! - It is never logged and is redacted from `Debug` output

pub mod builder;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod request;
pub mod response;
pub mod status;
pub mod values;

// Builders
pub use builder::{BaseItemBuilder, BaseItemSetters, MappingItemBuilder};

// Client
pub use client::OpenFigiClient;

// Configuration
pub use config::{
    api_base_url, api_key, set_api_base_url, set_api_key, ClientConfig, SharedConfig,
    API_KEY_HEADER, DEFAULT_BASE_URL,
};

// Domain models
pub use domain::{BaseItem, BoundedInterval, DateInterval, IdValue, MappingItem, NumericInterval};

// Error types
pub use error::{FigiError, IntervalFault, ValidationError};

// HTTP client types
pub use http_client::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, ReqwestHttpClient,
};

// Requests and responses
pub use request::MappingRequest;
pub use response::{FigiObject, FilterPage, MappingResult, SearchPage};

pub use status::explain_status;
pub use values::{ValueKey, ID_TYPES_REQUIRING_SECURITY_TYPE_2};
