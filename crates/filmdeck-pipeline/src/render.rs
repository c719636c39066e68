//! Pure rendering from items to view trees.

use filmdeck_api::tmdb::{TMDB_WEB_BASE_URL, TmdbGenre, TmdbMovieDetails, TmdbTvDetails};

use crate::media::MediaItem;
use crate::view::{Card, CardImage, ClickAction, DetailView};

/// Default image CDN prefix (w500 posters).
pub const DEFAULT_CDN_PREFIX: &str = "https://image.tmdb.org/t/p/w500";

/// Default image for persons without a profile picture.
pub const DEFAULT_PERSON_PLACEHOLDER: &str = "img/default-person-image.jpg";

/// Image resolution settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageConfig {
    /// Prefix concatenated with API image paths.
    pub cdn_prefix: String,
    /// Source used for persons lacking a profile image.
    pub person_placeholder: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            cdn_prefix: String::from(DEFAULT_CDN_PREFIX),
            person_placeholder: String::from(DEFAULT_PERSON_PLACEHOLDER),
        }
    }
}

impl ImageConfig {
    /// Concatenates the CDN prefix with a raw path. A missing path yields
    /// the bare prefix.
    #[must_use]
    pub fn resolve(&self, path: Option<&str>) -> String {
        format!("{}{}", self.cdn_prefix, path.unwrap_or_default())
    }

    /// Image source for an item.
    ///
    /// Persons fall back to the placeholder. Movies and series always use
    /// the CDN, even without a poster path.
    #[must_use]
    pub fn source_for(&self, item: &MediaItem) -> String {
        match item {
            MediaItem::Person(p) => p
                .profile_path
                .as_deref()
                .map_or_else(|| self.person_placeholder.clone(), |path| self.resolve(Some(path))),
            MediaItem::Movie(_) | MediaItem::TvSeries(_) => self.resolve(item.image_path()),
        }
    }
}

/// Display flags of a rendered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderFlags {
    /// Show `Type: Movie` / `Type: TV Series` on movies and series.
    pub show_media_type: bool,
    /// Show the overview line on movies.
    pub show_overview: bool,
}

impl RenderFlags {
    /// Top-rated and popular lists.
    pub const LIST: Self = Self {
        show_media_type: false,
        show_overview: false,
    };

    /// Multi and person search results.
    pub const SEARCH: Self = Self {
        show_media_type: true,
        show_overview: true,
    };

    /// Person credits.
    pub const CREDITS: Self = Self {
        show_media_type: true,
        show_overview: false,
    };
}

/// Renders one item into a card.
#[must_use]
pub fn render_card(item: &MediaItem, flags: RenderFlags, images: &ImageConfig) -> Card {
    let title = String::from(item.display_name());

    let media_label = match item {
        MediaItem::Movie(m) if flags.show_media_type && m.tv_credit => {
            Some(String::from("Type: TV Series"))
        }
        MediaItem::Movie(_) if flags.show_media_type => Some(String::from("Type: Movie")),
        MediaItem::TvSeries(_) if flags.show_media_type => Some(String::from("Type: TV Series")),
        _ => None,
    };

    let detail = match item {
        MediaItem::Movie(m) => {
            format!("Release Date: {}", m.release_date.as_deref().unwrap_or_default())
        }
        MediaItem::TvSeries(t) => t.first_air_date.as_deref().map_or_else(
            || String::from("Release Date: Not Available"),
            |date| format!("First Air Date: {date}"),
        ),
        MediaItem::Person(p) => format!(
            "Known For: {}",
            p.known_for_department.as_deref().unwrap_or_default()
        ),
    };

    let overview = match item {
        MediaItem::Movie(m) if flags.show_overview => {
            m.overview.as_deref().map(|o| format!("Overview: {o}"))
        }
        _ => None,
    };

    let action = match item {
        MediaItem::Movie(m) => ClickAction::MovieDetail(m.id),
        MediaItem::TvSeries(t) => ClickAction::TvDetail(t.id),
        MediaItem::Person(p) => ClickAction::PersonCredits(p.id),
    };

    Card {
        image: CardImage {
            src: images.source_for(item),
            alt: title.clone(),
        },
        title,
        media_label,
        detail,
        overview,
        action,
    }
}

/// Renders a list of items, preserving order.
#[must_use]
pub fn render_cards(items: &[MediaItem], flags: RenderFlags, images: &ImageConfig) -> Vec<Card> {
    items
        .iter()
        .map(|item| render_card(item, flags, images))
        .collect()
}

fn join_genres(genres: &[TmdbGenre]) -> String {
    genres
        .iter()
        .map(|g| g.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_rating(vote_average: f64) -> String {
    format!("{vote_average:.1}/10")
}

/// Pushes `(label, value)` when the value is present and non-empty.
fn push_fact(facts: &mut Vec<(String, String)>, label: &str, value: Option<String>) {
    if let Some(v) = value.filter(|v| !v.is_empty()) {
        facts.push((String::from(label), v));
    }
}

/// Renders the movie detail view.
#[must_use]
pub fn render_movie_detail(details: &TmdbMovieDetails, images: &ImageConfig) -> DetailView {
    let mut facts = Vec::new();
    push_fact(&mut facts, "Release Date", details.release_date.clone());
    push_fact(
        &mut facts,
        "Runtime",
        details.runtime.map(|r| format!("{r} min")),
    );
    push_fact(&mut facts, "Genres", Some(join_genres(&details.genres)));
    push_fact(
        &mut facts,
        "Rating",
        Some(format!(
            "{} ({} votes)",
            format_rating(details.vote_average),
            details.vote_count
        )),
    );
    push_fact(&mut facts, "Status", details.status.clone());
    push_fact(&mut facts, "Homepage", details.homepage.clone());

    DetailView {
        title: details.title.clone(),
        image: CardImage {
            src: images.resolve(details.poster_path.as_deref()),
            alt: details.title.clone(),
        },
        tagline: details.tagline.clone().filter(|t| !t.is_empty()),
        facts,
        overview: details.overview.clone().filter(|o| !o.is_empty()),
        link: format!("{TMDB_WEB_BASE_URL}/movie/{}", details.id),
    }
}

/// Renders the TV series detail view.
#[must_use]
pub fn render_tv_detail(details: &TmdbTvDetails, images: &ImageConfig) -> DetailView {
    let mut facts = Vec::new();
    push_fact(&mut facts, "First Air Date", details.first_air_date.clone());
    push_fact(&mut facts, "Last Air Date", details.last_air_date.clone());
    push_fact(
        &mut facts,
        "Seasons",
        Some(details.number_of_seasons.to_string()),
    );
    push_fact(
        &mut facts,
        "Episodes",
        Some(details.number_of_episodes.to_string()),
    );
    push_fact(&mut facts, "Genres", Some(join_genres(&details.genres)));
    push_fact(
        &mut facts,
        "Rating",
        Some(format_rating(details.vote_average)),
    );
    push_fact(&mut facts, "Status", details.status.clone());
    push_fact(&mut facts, "Homepage", details.homepage.clone());

    DetailView {
        title: details.name.clone(),
        image: CardImage {
            src: images.resolve(details.poster_path.as_deref()),
            alt: details.name.clone(),
        },
        tagline: details.tagline.clone().filter(|t| !t.is_empty()),
        facts,
        overview: details.overview.clone().filter(|o| !o.is_empty()),
        link: format!("{TMDB_WEB_BASE_URL}/tv/{}", details.id),
    }
}
