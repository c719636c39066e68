//! API client library for filmdeck.
//!
//! Provides a client for the TMDB v3 API.

/// TMDB API client.
pub mod tmdb;
