//! HTTP loading of the static JSON documents.
//!
//! Both documents are fetched fresh on every page view. Failures are
//! terminal for the render pass: the caller surfaces them inline and
//! never retries.

use crate::data::{ItinerariesDoc, StatesDoc};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum DataError {
    #[error("network error fetching {url}: {message}")]
    Network { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Http { url: String, status: u16 },

    #[error("failed to parse {url}: {message}")]
    Parse { url: String, message: String },

    #[error("{what} '{key}' not found")]
    NotFound { what: &'static str, key: String },
}

/// URL of a document under the site's `data/` directory.
pub fn data_url(base_path: &str, filename: &str) -> String {
    format!("{base_path}/data/{filename}")
}

pub async fn fetch_states(base_path: &str) -> Result<StatesDoc, DataError> {
    fetch_json(&data_url(base_path, "states.json")).await
}

pub async fn fetch_itineraries(base_path: &str) -> Result<ItinerariesDoc, DataError> {
    fetch_json(&data_url(base_path, "itineraries.json")).await
}

async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, DataError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|err| DataError::Network {
            url: url.to_string(),
            message: err.to_string(),
        })?;

    if !response.ok() {
        return Err(DataError::Http {
            url: url.to_string(),
            status: response.status(),
        });
    }

    response.json::<T>().await.map_err(|err| DataError::Parse {
        url: url.to_string(),
        message: err.to_string(),
    })
}
