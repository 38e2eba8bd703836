use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::domain::entities::dog::{Dog, DogId};
use crate::usecase::ports::adoption_api::{AdoptionApi, ApiError, Credentials, SearchResponse};
use crate::usecase::search::query_params::SearchParams;

#[derive(Deserialize)]
struct MatchResponse {
    #[serde(rename = "match")]
    matched: DogId,
}

/// [`AdoptionApi`] over HTTP with session cookies.
#[derive(Clone)]
pub struct HttpAdoptionApi {
    client: Client,
    base_url: String,
}

impl HttpAdoptionApi {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            client: build_client()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        with_credentials(self.client.get(self.url(path)))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        with_credentials(self.client.post(self.url(path)))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client() -> Result<Client, ApiError> {
    Client::builder()
        .cookie_store(true)
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn build_client() -> Result<Client, ApiError> {
    Ok(Client::new())
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request
}

async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(response.status())?;
    Ok(response)
}

fn check_status(status: StatusCode) -> Result<(), ApiError> {
    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }
    if !status.is_success() {
        return Err(ApiError::Network(format!("unexpected status {status}")));
    }
    Ok(())
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl AdoptionApi for HttpAdoptionApi {
    async fn breeds(&self) -> Result<Vec<String>, ApiError> {
        read_json(send(self.get("/dogs/breeds")).await?).await
    }

    async fn search(&self, params: &SearchParams) -> Result<SearchResponse, ApiError> {
        debug!(?params, "GET /dogs/search");
        read_json(send(self.get("/dogs/search").query(params)).await?).await
    }

    async fn dogs(&self, ids: &[DogId]) -> Result<Vec<Dog>, ApiError> {
        debug!(count = ids.len(), "POST /dogs");
        read_json(send(self.post("/dogs").json(ids)).await?).await
    }

    async fn match_dog(&self, candidates: &[DogId]) -> Result<DogId, ApiError> {
        let body: MatchResponse = read_json(send(self.post("/dogs/match").json(candidates)).await?).await?;
        Ok(body.matched)
    }

    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        send(self.post("/auth/login").json(credentials)).await?;
        Ok(())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        send(self.post("/auth/logout")).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_401_is_unauthorized() {
        assert_eq!(check_status(StatusCode::UNAUTHORIZED), Err(ApiError::Unauthorized));
    }

    #[test]
    fn other_failures_are_network_errors() {
        assert!(matches!(
            check_status(StatusCode::INTERNAL_SERVER_ERROR),
            Err(ApiError::Network(_))
        ));
        assert!(matches!(check_status(StatusCode::FORBIDDEN), Err(ApiError::Network(_))));
        assert_eq!(check_status(StatusCode::OK), Ok(()));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let api = HttpAdoptionApi::new("https://example.test/").expect("client should build");

        assert_eq!(api.base_url(), "https://example.test");
        assert_eq!(api.url("/dogs"), "https://example.test/dogs");
    }

    #[test]
    fn match_response_reads_match_field() {
        let body: MatchResponse = serde_json::from_str(r#"{"match":"d9"}"#).expect("should parse");

        assert_eq!(body.matched, DogId::from("d9"));
    }
}
