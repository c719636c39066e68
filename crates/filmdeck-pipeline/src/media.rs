//! `MediaItem` - discriminated display model.
//!
//! Each TMDB shape gets its own mapping into the union, applied once when
//! a response is parsed. Rendering never probes raw fields.

use filmdeck_api::tmdb::{
    TmdbCredit, TmdbMovieListItem, TmdbMultiResult, TmdbPersonResult, TmdbTvListItem,
};

/// Item type discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// A movie.
    Movie,
    /// A TV series.
    TvSeries,
    /// A person.
    Person,
}

/// A movie.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    /// TMDB movie ID.
    pub id: u64,
    /// Title.
    pub title: String,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Release date as sent by the API.
    pub release_date: Option<String>,
    /// Overview text (never empty).
    pub overview: Option<String>,
    /// Vote average.
    pub vote_average: f64,
    /// Credit tagged `tv` by the API, labelled as a TV series.
    pub tv_credit: bool,
}

/// A TV series.
#[derive(Debug, Clone, PartialEq)]
pub struct TvSeries {
    /// TMDB series ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// First air date (never empty).
    pub first_air_date: Option<String>,
}

/// A person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// TMDB person ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Department the person is best known for.
    pub known_for_department: Option<String>,
    /// Profile image path.
    pub profile_path: Option<String>,
}

/// A movie, TV series, or person ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaItem {
    /// A movie.
    Movie(Movie),
    /// A TV series.
    TvSeries(TvSeries),
    /// A person.
    Person(Person),
}

/// Drops empty strings, which the API sends in place of null.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl MediaItem {
    /// TMDB identifier.
    #[must_use]
    pub const fn id(&self) -> u64 {
        match self {
            Self::Movie(m) => m.id,
            Self::TvSeries(t) => t.id,
            Self::Person(p) => p.id,
        }
    }

    /// Title for movies, name for series and persons.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Movie(m) => &m.title,
            Self::TvSeries(t) => &t.name,
            Self::Person(p) => &p.name,
        }
    }

    /// Poster path for movies and series, profile path for persons.
    #[must_use]
    pub fn image_path(&self) -> Option<&str> {
        match self {
            Self::Movie(m) => m.poster_path.as_deref(),
            Self::TvSeries(t) => t.poster_path.as_deref(),
            Self::Person(p) => p.profile_path.as_deref(),
        }
    }

    /// Variant discriminator.
    #[must_use]
    pub const fn kind(&self) -> MediaKind {
        match self {
            Self::Movie(_) => MediaKind::Movie,
            Self::TvSeries(_) => MediaKind::TvSeries,
            Self::Person(_) => MediaKind::Person,
        }
    }

    /// Maps a `search/multi` result. Returns `None` for tags outside
    /// movie, tv and person.
    #[must_use]
    pub fn from_multi(result: TmdbMultiResult) -> Option<Self> {
        match result {
            TmdbMultiResult::Movie(m) => Some(m.into()),
            TmdbMultiResult::Tv(t) => Some(t.into()),
            TmdbMultiResult::Person(p) => Some(p.into()),
            TmdbMultiResult::Other => None,
        }
    }

    /// Maps a combined-credits entry.
    ///
    /// Every credit becomes a movie; series credits fall back to `name`
    /// and keep their `media_type` tag only for the label.
    #[must_use]
    pub fn from_credit(credit: TmdbCredit) -> Self {
        Self::Movie(Movie {
            id: credit.id,
            title: credit.title.or(credit.name).unwrap_or_default(),
            poster_path: credit.poster_path,
            release_date: credit.release_date,
            overview: non_empty(credit.overview),
            vote_average: credit.vote_average,
            tv_credit: credit.media_type.as_deref() == Some("tv"),
        })
    }
}

impl From<TmdbMovieListItem> for MediaItem {
    fn from(m: TmdbMovieListItem) -> Self {
        Self::Movie(Movie {
            id: m.id,
            title: m.title,
            poster_path: m.poster_path,
            release_date: m.release_date,
            overview: non_empty(m.overview),
            vote_average: m.vote_average,
            tv_credit: false,
        })
    }
}

impl From<TmdbTvListItem> for MediaItem {
    fn from(t: TmdbTvListItem) -> Self {
        Self::TvSeries(TvSeries {
            id: t.id,
            name: t.name,
            poster_path: t.poster_path,
            first_air_date: non_empty(t.first_air_date),
        })
    }
}

impl From<TmdbPersonResult> for MediaItem {
    fn from(p: TmdbPersonResult) -> Self {
        Self::Person(Person {
            id: p.id,
            name: p.name,
            known_for_department: p.known_for_department,
            profile_path: non_empty(p.profile_path),
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use filmdeck_api::tmdb::{TmdbCombinedCredits, TmdbMultiSearchResponse};

    use super::*;

    #[test]
    fn test_from_multi_maps_each_tag() {
        // Arrange
        let json = include_str!("../../../fixtures/tmdb/search_multi_inception.json");
        let response: TmdbMultiSearchResponse = serde_json::from_str(json).unwrap();

        // Act
        let kinds: Vec<Option<MediaKind>> = response
            .results
            .into_iter()
            .map(|r| MediaItem::from_multi(r).map(|item| item.kind()))
            .collect();

        // Assert
        assert_eq!(
            kinds,
            vec![
                Some(MediaKind::Movie),
                Some(MediaKind::Person),
                Some(MediaKind::TvSeries),
                Some(MediaKind::TvSeries),
                None,
                Some(MediaKind::Movie),
            ]
        );
    }

    #[test]
    fn test_empty_strings_become_none() {
        // Arrange
        let json = include_str!("../../../fixtures/tmdb/search_multi_inception.json");
        let response: TmdbMultiSearchResponse = serde_json::from_str(json).unwrap();
        let mut items = response.results.into_iter().filter_map(MediaItem::from_multi);

        // Act
        let last_tv = items.nth(3).unwrap();
        let last_movie = items.nth(0).unwrap();

        // Assert
        assert!(matches!(last_tv, MediaItem::TvSeries(ref t) if t.first_air_date.is_none()));
        assert!(matches!(last_movie, MediaItem::Movie(ref m) if m.overview.is_none()));
    }

    #[test]
    fn test_from_credit_maps_every_credit_to_movie() {
        // Arrange
        let json = include_str!("../../../fixtures/tmdb/combined_credits_525.json");
        let credits: TmdbCombinedCredits = serde_json::from_str(json).unwrap();

        // Act
        let items: Vec<MediaItem> = credits
            .into_combined()
            .into_iter()
            .map(MediaItem::from_credit)
            .collect();

        // Assert
        assert!(items.iter().all(|item| item.kind() == MediaKind::Movie));
        assert_eq!(items[1].display_name(), "Inception");
        assert_eq!(items[2].display_name(), "Breaking Bad");
        assert!(matches!(&items[1], MediaItem::Movie(m) if !m.tv_credit));
        assert!(matches!(
            &items[2],
            MediaItem::Movie(m) if m.tv_credit && m.release_date.is_none()
        ));
    }

    #[test]
    fn test_from_credit_tv_name_fills_title() {
        // Arrange
        let credit: TmdbCredit = serde_json::from_str(
            r#"{"id":1396,"media_type":"tv","name":"Breaking Bad","vote_average":9.0}"#,
        )
        .unwrap();

        // Act
        let item = MediaItem::from_credit(credit);

        // Assert
        assert_eq!(item.kind(), MediaKind::Movie);
        assert_eq!(item.id(), 1396);
        assert_eq!(item.display_name(), "Breaking Bad");
    }

    #[test]
    fn test_common_accessors() {
        // Arrange
        let item = MediaItem::Person(Person {
            id: 525,
            name: String::from("Christopher Nolan"),
            known_for_department: Some(String::from("Directing")),
            profile_path: None,
        });

        // Act & Assert
        assert_eq!(item.id(), 525);
        assert_eq!(item.display_name(), "Christopher Nolan");
        assert_eq!(item.image_path(), None);
    }
}
