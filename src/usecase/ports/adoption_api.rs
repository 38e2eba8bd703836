use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::entities::dog::{Dog, DogId};
use crate::domain::errors::ListingError;
use crate::usecase::search::query_params::SearchParams;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl From<ApiError> for ListingError {
    fn from(value: ApiError) -> Self {
        match value {
            ApiError::Unauthorized => ListingError::Unauthorized,
            ApiError::Network(_) | ApiError::Decode(_) => ListingError::NetworkFailure,
        }
    }
}

/// Body of a search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub result_ids: Vec<DogId>,
    pub total: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub name: String,
    pub email: String,
}

/// The remote adoption service. Implementations must include session
/// credentials on every call and report HTTP 401 as [`ApiError::Unauthorized`].
#[async_trait(?Send)]
pub trait AdoptionApi {
    async fn breeds(&self) -> Result<Vec<String>, ApiError>;
    async fn search(&self, params: &SearchParams) -> Result<SearchResponse, ApiError>;
    /// Hydrates ids into records. Unknown ids are simply missing from the result.
    async fn dogs(&self, ids: &[DogId]) -> Result<Vec<Dog>, ApiError>;
    async fn match_dog(&self, candidates: &[DogId]) -> Result<DogId, ApiError>;
    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
}
