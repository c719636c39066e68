//! View tree types.
//!
//! Everything here is plain data: adapters decide how a card or a detail
//! view is drawn.

use std::fmt;

/// Literal message shown when a search leaves nothing to display.
pub const NOTHING_FOUND: &str = "Nothing found";

/// Literal message shown when a fetch fails.
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again later.";

/// Named containers a pipeline operation can render into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerId {
    /// Top-rated movies section.
    TopRated,
    /// Popular movies section.
    Popular,
    /// Search results (multi search, person search, person credits).
    SearchResults,
}

impl ContainerId {
    /// All containers, in display order.
    pub const ALL: [Self; 3] = [Self::TopRated, Self::Popular, Self::SearchResults];

    /// Section heading for the container.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::TopRated => "Top Rated",
            Self::Popular => "Popular",
            Self::SearchResults => "Search Results",
        }
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Follow-up fetch triggered by clicking a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Show the movie detail view.
    MovieDetail(u64),
    /// Show the TV series detail view.
    TvDetail(u64),
    /// Show the person's top credits in the search results.
    PersonCredits(u64),
}

/// Image reference of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImage {
    /// Resolved image source (CDN URL or local placeholder).
    pub src: String,
    /// Alternative text.
    pub alt: String,
}

/// One rendered item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Poster or profile image.
    pub image: CardImage,
    /// Display name (title or name).
    pub title: String,
    /// `Type: Movie` / `Type: TV Series`, when the media-type label is shown.
    pub media_label: Option<String>,
    /// Type-specific secondary line.
    pub detail: String,
    /// `Overview: ...`, movies only and only when requested.
    pub overview: Option<String>,
    /// Follow-up fetch for this card.
    pub action: ClickAction,
}

/// Full contents of one container. Mounting replaces whatever was there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerView {
    /// A list of cards (possibly empty).
    Cards(Vec<Card>),
    /// A literal message in place of cards.
    Message(String),
}

impl ContainerView {
    /// Number of cards in the view; messages count as zero.
    #[must_use]
    pub fn card_count(&self) -> usize {
        match self {
            Self::Cards(cards) => cards.len(),
            Self::Message(_) => 0,
        }
    }

    /// Returns the cards, or an empty slice for messages.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        match self {
            Self::Cards(cards) => cards,
            Self::Message(_) => &[],
        }
    }
}

/// Projection of a movie or TV detail record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    /// Title or name.
    pub title: String,
    /// Poster image.
    pub image: CardImage,
    /// Tagline, when the record has one.
    pub tagline: Option<String>,
    /// Labelled facts in display order (e.g. `("Runtime", "148 min")`).
    pub facts: Vec<(String, String)>,
    /// Overview text.
    pub overview: Option<String>,
    /// TMDB web page for the record.
    pub link: String,
}

/// Contents of the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailContent {
    /// A loaded detail record.
    Loaded(DetailView),
    /// A literal message (e.g. a failed fetch).
    Message(String),
}
