//! `TmdbApi` trait definition.
#![allow(clippy::future_not_send)]

use super::error::FetchError;
use super::types::{
    ListParams, SearchParams, TmdbCombinedCredits, TmdbMovieDetails, TmdbMovieListResponse,
    TmdbMultiSearchResponse, TmdbPersonSearchResponse, TmdbTvDetails,
};

/// TMDB API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
///
/// Every method is a single attempt. Failures are logged by the
/// implementation and returned to the caller.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(TmdbApi: Send)]
pub trait LocalTmdbApi {
    /// Fetches the top-rated movies list.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the HTTP request or JSON parsing fails.
    async fn top_rated_movies(
        &self,
        params: &ListParams,
    ) -> Result<TmdbMovieListResponse, FetchError>;

    /// Fetches the popular movies list.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the HTTP request or JSON parsing fails.
    async fn popular_movies(&self, params: &ListParams)
    -> Result<TmdbMovieListResponse, FetchError>;

    /// Searches movies, TV series and persons in one request.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the HTTP request or JSON parsing fails.
    async fn search_multi(
        &self,
        params: &SearchParams,
    ) -> Result<TmdbMultiSearchResponse, FetchError>;

    /// Searches persons.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the HTTP request or JSON parsing fails.
    async fn search_person(
        &self,
        params: &SearchParams,
    ) -> Result<TmdbPersonSearchResponse, FetchError>;

    /// Fetches movie details.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the HTTP request or JSON parsing fails.
    async fn movie_details(
        &self,
        movie_id: u64,
        language: &str,
    ) -> Result<TmdbMovieDetails, FetchError>;

    /// Fetches TV series details.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the HTTP request or JSON parsing fails.
    async fn tv_details(&self, series_id: u64, language: &str)
    -> Result<TmdbTvDetails, FetchError>;

    /// Fetches a person's combined movie and TV credits.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the HTTP request or JSON parsing fails.
    async fn person_combined_credits(
        &self,
        person_id: u64,
        language: &str,
    ) -> Result<TmdbCombinedCredits, FetchError>;
}
