//! TMDB API client module.
//!
//! Handles HTTP requests to the TMDB API v3 endpoints
//! and retrieves movie, TV series, and person data.

mod api;
mod client;
mod error;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalTmdbApi, TmdbApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{DEFAULT_BASE_URL, TmdbClient, TmdbClientBuilder};
pub use error::FetchError;
#[allow(clippy::module_name_repetitions)]
pub use types::{
    ListParams, SearchParams, TmdbCombinedCredits, TmdbCredit, TmdbErrorResponse, TmdbGenre,
    TmdbMovieDetails, TmdbMovieListItem, TmdbMovieListResponse, TmdbMultiResult,
    TmdbMultiSearchResponse, TmdbPage, TmdbPersonResult, TmdbPersonSearchResponse, TmdbTvDetails,
    TmdbTvListItem,
};

/// Base URL of the TMDB website, used for "open in browser" links.
pub const TMDB_WEB_BASE_URL: &str = "https://www.themoviedb.org";
