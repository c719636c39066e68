//! `TmdbClient` - TMDB API client implementation.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use super::api::LocalTmdbApi;
use super::error::FetchError;
use super::types::{
    ListParams, SearchParams, TmdbCombinedCredits, TmdbErrorResponse, TmdbMovieDetails,
    TmdbMovieListResponse, TmdbMultiSearchResponse, TmdbPersonSearchResponse, TmdbTvDetails,
};

/// Default base URL for TMDB API v3.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3/";

/// TMDB API client.
///
/// Authenticates with a v3 API key sent as the `api_key` query parameter.
/// Each request is a single attempt; there is no retry.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// v3 API key.
    api_key: String,
}

/// Builder for `TmdbClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClientBuilder {
    base_url: Option<Url>,
    api_key: Option<String>,
    user_agent: Option<String>,
}

impl TmdbClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            user_agent: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the v3 API key (required).
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `api_key` is not set or empty.
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TmdbClient> {
        let api_key = self.api_key.context("api_key is required")?;
        anyhow::ensure!(!api_key.trim().is_empty(), "api_key must not be empty");
        let user_agent = self.user_agent.context("user_agent is required")?;

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            let result = Url::parse(DEFAULT_BASE_URL);
            result.context("invalid default base URL")?
        };

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(TmdbClient {
            http_client,
            base_url,
            api_key,
        })
    }
}

impl TmdbClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> TmdbClientBuilder {
        TmdbClientBuilder::new()
    }

    /// Returns the base URL requests are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends one GET request and decodes the JSON body into `T`.
    ///
    /// The API key is appended as the `api_key` query parameter. Failures
    /// are logged at `error` level and returned; nothing is retried.
    ///
    /// # Errors
    ///
    /// - `FetchError::InvalidUrl` if `path` cannot be joined to the base URL.
    /// - `FetchError::Network` if the transport fails.
    /// - `FetchError::HttpStatus` if the status is not 2xx.
    /// - `FetchError::Parse` if the body is not valid JSON for `T`.
    #[instrument(skip_all, fields(path = %path))]
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let result = self.send_and_decode(path, query).await;
        if let Err(ref err) = result {
            tracing::error!(error = %err, "TMDB fetch failed");
        }
        result
    }

    async fn send_and_decode<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|source| FetchError::InvalidUrl {
                path: String::from(path),
                source,
            })?;

        tracing::debug!(url = %url, ?query, "TMDB API request");

        let response = self
            .http_client
            .get(url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .send()
            .await
            .map_err(|source| FetchError::Network {
                path: String::from(path),
                source,
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|source| FetchError::Network {
            path: String::from(path),
            source,
        })?;

        if !status.is_success() {
            let message = serde_json::from_str::<TmdbErrorResponse>(&body).map_or(
                body,
                |error_response| {
                    format!(
                        "{} (code {})",
                        error_response.status_message, error_response.status_code
                    )
                },
            );
            return Err(FetchError::HttpStatus {
                path: String::from(path),
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|source| FetchError::Parse {
            path: String::from(path),
            source,
        })
    }
}

/// Builds the query pairs shared by the search endpoints.
fn search_query(params: &SearchParams) -> Vec<(&'static str, String)> {
    vec![
        ("query", params.query.clone()),
        ("language", params.language.clone()),
        ("page", params.page.to_string()),
        ("include_adult", params.include_adult.to_string()),
    ]
}

/// Builds the query pairs shared by the movie list endpoints.
fn list_query(params: &ListParams) -> [(&'static str, String); 2] {
    [
        ("language", params.language.clone()),
        ("page", params.page.to_string()),
    ]
}

impl LocalTmdbApi for TmdbClient {
    #[instrument(skip_all)]
    async fn top_rated_movies(
        &self,
        params: &ListParams,
    ) -> Result<TmdbMovieListResponse, FetchError> {
        self.fetch_json("movie/top_rated", &list_query(params)).await
    }

    #[instrument(skip_all)]
    async fn popular_movies(
        &self,
        params: &ListParams,
    ) -> Result<TmdbMovieListResponse, FetchError> {
        self.fetch_json("movie/popular", &list_query(params)).await
    }

    #[instrument(skip_all)]
    async fn search_multi(
        &self,
        params: &SearchParams,
    ) -> Result<TmdbMultiSearchResponse, FetchError> {
        self.fetch_json("search/multi", &search_query(params)).await
    }

    #[instrument(skip_all)]
    async fn search_person(
        &self,
        params: &SearchParams,
    ) -> Result<TmdbPersonSearchResponse, FetchError> {
        self.fetch_json("search/person", &search_query(params)).await
    }

    #[instrument(skip_all)]
    async fn movie_details(
        &self,
        movie_id: u64,
        language: &str,
    ) -> Result<TmdbMovieDetails, FetchError> {
        let path = format!("movie/{movie_id}");
        let query = [("language", String::from(language))];
        self.fetch_json(&path, &query).await
    }

    #[instrument(skip_all)]
    async fn tv_details(
        &self,
        series_id: u64,
        language: &str,
    ) -> Result<TmdbTvDetails, FetchError> {
        let path = format!("tv/{series_id}");
        let query = [("language", String::from(language))];
        self.fetch_json(&path, &query).await
    }

    #[instrument(skip_all)]
    async fn person_combined_credits(
        &self,
        person_id: u64,
        language: &str,
    ) -> Result<TmdbCombinedCredits, FetchError> {
        let path = format!("person/{person_id}/combined_credits");
        let query = [("language", String::from(language))];
        self.fetch_json(&path, &query).await
    }
}
