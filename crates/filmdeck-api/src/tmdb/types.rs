//! TMDB API response types and request parameters.

use serde::Deserialize;

// --- Paged envelope ---

/// Paged envelope returned by list and search endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbPage<T> {
    /// Current page number.
    pub page: u32,
    /// Page entries, in API order.
    pub results: Vec<T>,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u32,
    /// Total number of results.
    #[serde(default)]
    pub total_results: u32,
}

/// Response from `movie/top_rated` and `movie/popular`.
pub type TmdbMovieListResponse = TmdbPage<TmdbMovieListItem>;

/// Response from `search/multi`.
pub type TmdbMultiSearchResponse = TmdbPage<TmdbMultiResult>;

/// Response from `search/person`.
pub type TmdbPersonSearchResponse = TmdbPage<TmdbPersonResult>;

// --- List entries ---

/// A movie entry in a list or search response.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieListItem {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Original title.
    #[serde(default)]
    pub original_title: Option<String>,
    /// Release date (YYYY-MM-DD, empty or null when unknown).
    #[serde(default)]
    pub release_date: Option<String>,
    /// Overview text.
    #[serde(default)]
    pub overview: Option<String>,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop image path.
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
}

/// A TV series entry in a search response.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbTvListItem {
    /// TMDB series ID.
    pub id: u64,
    /// Localized name.
    pub name: String,
    /// Original name.
    #[serde(default)]
    pub original_name: Option<String>,
    /// First air date (YYYY-MM-DD, empty or null when unknown).
    #[serde(default)]
    pub first_air_date: Option<String>,
    /// Overview text.
    #[serde(default)]
    pub overview: Option<String>,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Origin countries (ISO 3166-1).
    #[serde(default)]
    pub origin_country: Vec<String>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
}

/// A person entry in a search response.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbPersonResult {
    /// TMDB person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Department the person is best known for (e.g. "Acting").
    #[serde(default)]
    pub known_for_department: Option<String>,
    /// Profile image path.
    #[serde(default)]
    pub profile_path: Option<String>,
    /// Type tag. Absent on `search/person`, present on `search/multi`.
    #[serde(default)]
    pub media_type: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
}

/// A single `search/multi` result, discriminated by its `media_type` tag.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "media_type", rename_all = "lowercase")]
pub enum TmdbMultiResult {
    /// A movie.
    Movie(TmdbMovieListItem),
    /// A TV series.
    Tv(TmdbTvListItem),
    /// A person.
    Person(TmdbPersonResult),
    /// Any tag this client does not model (e.g. "collection").
    #[serde(other)]
    Other,
}

// --- Details ---

/// Genre entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbGenre {
    /// Genre ID.
    pub id: u32,
    /// Genre name.
    pub name: String,
}

/// Response from `movie/{movie_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieDetails {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Original title.
    #[serde(default)]
    pub original_title: Option<String>,
    /// Tagline.
    #[serde(default)]
    pub tagline: Option<String>,
    /// Overview text.
    #[serde(default)]
    pub overview: Option<String>,
    /// Release date.
    #[serde(default)]
    pub release_date: Option<String>,
    /// Runtime in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
    /// Release status (e.g. "Released").
    #[serde(default)]
    pub status: Option<String>,
    /// Genres.
    #[serde(default)]
    pub genres: Vec<TmdbGenre>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Official homepage.
    #[serde(default)]
    pub homepage: Option<String>,
    /// IMDb ID.
    #[serde(default)]
    pub imdb_id: Option<String>,
}

/// Response from `tv/{series_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbTvDetails {
    /// TMDB series ID.
    pub id: u64,
    /// Localized name.
    pub name: String,
    /// Original name.
    #[serde(default)]
    pub original_name: Option<String>,
    /// Tagline.
    #[serde(default)]
    pub tagline: Option<String>,
    /// Overview text.
    #[serde(default)]
    pub overview: Option<String>,
    /// First air date.
    #[serde(default)]
    pub first_air_date: Option<String>,
    /// Last air date.
    #[serde(default)]
    pub last_air_date: Option<String>,
    /// Total number of seasons.
    #[serde(default)]
    pub number_of_seasons: u32,
    /// Total number of episodes.
    #[serde(default)]
    pub number_of_episodes: u32,
    /// Status (e.g., "Returning Series", "Ended").
    #[serde(default)]
    pub status: Option<String>,
    /// Genres.
    #[serde(default)]
    pub genres: Vec<TmdbGenre>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Official homepage.
    #[serde(default)]
    pub homepage: Option<String>,
}

// --- Combined credits ---

/// Response from `person/{person_id}/combined_credits`.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCombinedCredits {
    /// TMDB person ID.
    pub id: u64,
    /// Acting credits.
    #[serde(default)]
    pub cast: Vec<TmdbCredit>,
    /// Crew credits.
    #[serde(default)]
    pub crew: Vec<TmdbCredit>,
}

/// A single cast or crew credit (movie or TV).
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCredit {
    /// TMDB movie or series ID.
    pub id: u64,
    /// Type tag ("movie" or "tv").
    #[serde(default)]
    pub media_type: Option<String>,
    /// Movie title.
    #[serde(default)]
    pub title: Option<String>,
    /// Series name.
    #[serde(default)]
    pub name: Option<String>,
    /// Movie release date.
    #[serde(default)]
    pub release_date: Option<String>,
    /// Series first air date.
    #[serde(default)]
    pub first_air_date: Option<String>,
    /// Overview text.
    #[serde(default)]
    pub overview: Option<String>,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Character played (cast only).
    #[serde(default)]
    pub character: Option<String>,
    /// Job (crew only).
    #[serde(default)]
    pub job: Option<String>,
}

impl TmdbCombinedCredits {
    /// Consumes the credits and returns cast followed by crew.
    #[must_use]
    pub fn into_combined(self) -> Vec<TmdbCredit> {
        let mut combined = self.cast;
        combined.extend(self.crew);
        combined
    }
}

// --- Error Response ---

/// TMDB API error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbErrorResponse {
    /// TMDB error code.
    pub status_code: u32,
    /// Error message.
    pub status_message: String,
    /// Success flag (always false for errors).
    #[serde(default)]
    pub success: bool,
}

// --- Request Parameters ---

/// Parameters for the `movie/top_rated` and `movie/popular` endpoints.
#[derive(Debug, Clone)]
pub struct ListParams {
    /// Response language (default: "en-US").
    pub language: String,
    /// Result page (1-500, default: 1).
    pub page: u32,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            language: String::from("en-US"),
            page: 1,
        }
    }
}

impl ListParams {
    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}

/// Parameters for the `search/multi` and `search/person` endpoints.
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Search query. Sent as-is, including the empty string.
    pub query: String,
    /// Response language (default: "en-US").
    pub language: String,
    /// Result page (1-500, default: 1).
    pub page: u32,
    /// Include adult content.
    pub include_adult: bool,
}

impl SearchParams {
    /// Creates new search params with the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            language: String::from("en-US"),
            page: 1,
            include_adult: false,
        }
    }

    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}
