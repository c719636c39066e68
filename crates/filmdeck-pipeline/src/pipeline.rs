//! `Pipeline` - fetch, project, render, mount.
//!
//! Every operation is one best-effort fetch. Failures are logged and
//! rendered as a message; nothing escapes to the caller.
#![allow(clippy::future_not_send)]

use filmdeck_api::tmdb::{
    FetchError, ListParams, LocalTmdbApi, SearchParams, TmdbCredit, TmdbMovieListItem,
    TmdbMultiResult, TmdbPersonResult,
};

use crate::media::MediaItem;
use crate::render::{ImageConfig, RenderFlags, render_cards, render_movie_detail, render_tv_detail};
use crate::surface::Surface;
use crate::view::{
    ClickAction, ContainerId, ContainerView, DetailContent, FAILURE_MESSAGE, NOTHING_FOUND,
};

/// Number of entries kept from the top-rated and popular lists.
pub const LIST_LIMIT: usize = 10;

/// Number of credits shown for a person.
pub const CREDITS_LIMIT: usize = 3;

/// What an operation left on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The target was replaced with this many cards (or one detail view).
    Rendered(usize),
    /// Nothing qualified; the "Nothing found" message was mounted.
    Empty,
    /// The fetch failed; the failure message was mounted.
    Failed,
}

/// Settings applied to every request and render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSettings {
    /// Response language sent to the API.
    pub language: String,
    /// Image resolution settings.
    pub images: ImageConfig,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            language: String::from("en-US"),
            images: ImageConfig::default(),
        }
    }
}

/// Keeps the first `limit` movies in API order.
#[must_use]
pub fn first_movies(results: Vec<TmdbMovieListItem>, limit: usize) -> Vec<MediaItem> {
    results
        .into_iter()
        .take(limit)
        .map(MediaItem::from)
        .collect()
}

/// Keeps movies and TV series from a multi search.
#[must_use]
pub fn movies_and_series(results: Vec<TmdbMultiResult>) -> Vec<MediaItem> {
    results
        .into_iter()
        .filter(|r| matches!(r, TmdbMultiResult::Movie(_) | TmdbMultiResult::Tv(_)))
        .filter_map(MediaItem::from_multi)
        .collect()
}

/// Drops person-search entries tagged as TV.
#[must_use]
pub fn persons(results: Vec<TmdbPersonResult>) -> Vec<MediaItem> {
    results
        .into_iter()
        .filter(|p| p.media_type.as_deref() != Some("tv"))
        .map(MediaItem::from)
        .collect()
}

/// Sorts credits by rating, highest first, and keeps the first `limit`.
///
/// The sort is stable: equal ratings keep their API order.
#[must_use]
pub fn top_credits(mut credits: Vec<TmdbCredit>, limit: usize) -> Vec<MediaItem> {
    credits.sort_by(|a, b| b.vote_average.total_cmp(&a.vote_average));
    credits
        .into_iter()
        .take(limit)
        .map(MediaItem::from_credit)
        .collect()
}

/// Fetch-and-render pipeline over an API and a surface.
#[derive(Debug)]
pub struct Pipeline<A, S> {
    api: A,
    surface: S,
    settings: PipelineSettings,
}

impl<A: LocalTmdbApi, S: Surface> Pipeline<A, S> {
    /// Creates a pipeline.
    pub const fn new(api: A, surface: S, settings: PipelineSettings) -> Self {
        Self {
            api,
            surface,
            settings,
        }
    }

    /// Returns the surface views are mounted on.
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the pipeline settings.
    pub const fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    fn list_params(&self) -> ListParams {
        ListParams::default().language(self.settings.language.as_str())
    }

    fn search_params(&self, query: &str) -> SearchParams {
        SearchParams::new(query).language(self.settings.language.as_str())
    }

    /// Renders `items` into `container`, replacing its contents.
    fn mount_cards(&self, container: ContainerId, items: &[MediaItem], flags: RenderFlags) -> Outcome {
        let cards = render_cards(items, flags, &self.settings.images);
        let count = cards.len();
        self.surface.mount(container, ContainerView::Cards(cards));
        tracing::debug!(container = %container, count, "rendered container");
        Outcome::Rendered(count)
    }

    /// Renders search-style results, or the empty-result message.
    fn mount_results(&self, items: &[MediaItem], flags: RenderFlags) -> Outcome {
        if items.is_empty() {
            self.surface.mount(
                ContainerId::SearchResults,
                ContainerView::Message(String::from(NOTHING_FOUND)),
            );
            tracing::debug!("search returned nothing to display");
            return Outcome::Empty;
        }
        self.mount_cards(ContainerId::SearchResults, items, flags)
    }

    /// Logs a failed fetch and replaces `container` with the failure message.
    fn fail(&self, container: ContainerId, operation: &str, err: &FetchError) -> Outcome {
        tracing::error!(operation, error = %err, "error fetching {operation}");
        self.surface.mount(
            container,
            ContainerView::Message(String::from(FAILURE_MESSAGE)),
        );
        Outcome::Failed
    }

    /// Logs a failed detail fetch and replaces the detail view with the
    /// failure message.
    fn fail_detail(&self, operation: &str, err: &FetchError) -> Outcome {
        tracing::error!(operation, error = %err, "error fetching {operation}");
        self.surface
            .show_detail(DetailContent::Message(String::from(FAILURE_MESSAGE)));
        Outcome::Failed
    }

    /// Shows the first 10 top-rated movies.
    pub async fn list_top_rated(&self) -> Outcome {
        match self.api.top_rated_movies(&self.list_params()).await {
            Ok(page) => {
                let items = first_movies(page.results, LIST_LIMIT);
                self.mount_cards(ContainerId::TopRated, &items, RenderFlags::LIST)
            }
            Err(err) => self.fail(ContainerId::TopRated, "top rated movies", &err),
        }
    }

    /// Shows the first 10 popular movies.
    pub async fn list_popular(&self) -> Outcome {
        match self.api.popular_movies(&self.list_params()).await {
            Ok(page) => {
                let items = first_movies(page.results, LIST_LIMIT);
                self.mount_cards(ContainerId::Popular, &items, RenderFlags::LIST)
            }
            Err(err) => self.fail(ContainerId::Popular, "popular movies", &err),
        }
    }

    /// Searches movies and TV series and shows every match.
    pub async fn search_multi(&self, query: &str) -> Outcome {
        match self.api.search_multi(&self.search_params(query)).await {
            Ok(page) => {
                let items = movies_and_series(page.results);
                self.mount_results(&items, RenderFlags::SEARCH)
            }
            Err(err) => self.fail(ContainerId::SearchResults, "movies/TV series", &err),
        }
    }

    /// Searches persons and shows every match.
    pub async fn search_person(&self, query: &str) -> Outcome {
        match self.api.search_person(&self.search_params(query)).await {
            Ok(page) => {
                let items = persons(page.results);
                self.mount_results(&items, RenderFlags::SEARCH)
            }
            Err(err) => self.fail(ContainerId::SearchResults, "persons", &err),
        }
    }

    /// Shows a person's three best-rated credits in the search results.
    pub async fn fetch_person_credits(&self, person_id: u64) -> Outcome {
        let language = self.settings.language.as_str();
        match self.api.person_combined_credits(person_id, language).await {
            Ok(credits) => {
                let items = top_credits(credits.into_combined(), CREDITS_LIMIT);
                self.mount_results(&items, RenderFlags::CREDITS)
            }
            Err(err) => self.fail(ContainerId::SearchResults, "person credits", &err),
        }
    }

    /// Shows the movie detail view.
    pub async fn fetch_movie_detail(&self, movie_id: u64) -> Outcome {
        let language = self.settings.language.as_str();
        match self.api.movie_details(movie_id, language).await {
            Ok(details) => {
                let view = render_movie_detail(&details, &self.settings.images);
                self.surface.show_detail(DetailContent::Loaded(view));
                Outcome::Rendered(1)
            }
            Err(err) => self.fail_detail("movie details", &err),
        }
    }

    /// Shows the TV series detail view.
    pub async fn fetch_tv_detail(&self, series_id: u64) -> Outcome {
        let language = self.settings.language.as_str();
        match self.api.tv_details(series_id, language).await {
            Ok(details) => {
                let view = render_tv_detail(&details, &self.settings.images);
                self.surface.show_detail(DetailContent::Loaded(view));
                Outcome::Rendered(1)
            }
            Err(err) => self.fail_detail("TV series details", &err),
        }
    }

    /// Runs the follow-up fetch of a clicked card.
    pub async fn dispatch(&self, action: ClickAction) -> Outcome {
        match action {
            ClickAction::MovieDetail(id) => self.fetch_movie_detail(id).await,
            ClickAction::TvDetail(id) => self.fetch_tv_detail(id).await,
            ClickAction::PersonCredits(id) => self.fetch_person_credits(id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use std::cell::RefCell;

    use filmdeck_api::tmdb::{
        TmdbClient, TmdbCombinedCredits, TmdbMovieDetails, TmdbMovieListResponse,
        TmdbMultiSearchResponse, TmdbPersonSearchResponse, TmdbTvDetails,
    };
    use serde::de::DeserializeOwned;
    use tracing_mock::{expect, subscriber};

    use super::*;

    /// Canned API: `None` bodies answer with HTTP 503.
    #[derive(Default)]
    struct FakeApi {
        movies: Option<String>,
        multi: Option<String>,
        persons: Option<String>,
        credits: Option<String>,
        movie: Option<String>,
        tv: Option<String>,
    }

    fn reply<T: DeserializeOwned>(body: Option<&String>, path: &str) -> Result<T, FetchError> {
        let Some(body) = body else {
            return Err(FetchError::HttpStatus {
                path: String::from(path),
                status: 503,
                message: String::from("Service Unavailable"),
            });
        };
        serde_json::from_str(body).map_err(|source| FetchError::Parse {
            path: String::from(path),
            source,
        })
    }

    impl LocalTmdbApi for FakeApi {
        async fn top_rated_movies(
            &self,
            _params: &ListParams,
        ) -> Result<TmdbMovieListResponse, FetchError> {
            reply(self.movies.as_ref(), "movie/top_rated")
        }

        async fn popular_movies(
            &self,
            _params: &ListParams,
        ) -> Result<TmdbMovieListResponse, FetchError> {
            reply(self.movies.as_ref(), "movie/popular")
        }

        async fn search_multi(
            &self,
            _params: &SearchParams,
        ) -> Result<TmdbMultiSearchResponse, FetchError> {
            reply(self.multi.as_ref(), "search/multi")
        }

        async fn search_person(
            &self,
            _params: &SearchParams,
        ) -> Result<TmdbPersonSearchResponse, FetchError> {
            reply(self.persons.as_ref(), "search/person")
        }

        async fn movie_details(
            &self,
            _movie_id: u64,
            _language: &str,
        ) -> Result<TmdbMovieDetails, FetchError> {
            reply(self.movie.as_ref(), "movie/0")
        }

        async fn tv_details(
            &self,
            _series_id: u64,
            _language: &str,
        ) -> Result<TmdbTvDetails, FetchError> {
            reply(self.tv.as_ref(), "tv/0")
        }

        async fn person_combined_credits(
            &self,
            _person_id: u64,
            _language: &str,
        ) -> Result<TmdbCombinedCredits, FetchError> {
            reply(self.credits.as_ref(), "person/0/combined_credits")
        }
    }

    /// Surface that records every mount in order.
    #[derive(Default)]
    struct RecordingSurface {
        mounts: RefCell<Vec<(ContainerId, ContainerView)>>,
        details: RefCell<Vec<DetailContent>>,
    }

    impl Surface for RecordingSurface {
        fn mount(&self, container: ContainerId, view: ContainerView) {
            self.mounts.borrow_mut().push((container, view));
        }

        fn show_detail(&self, content: DetailContent) {
            self.details.borrow_mut().push(content);
        }
    }

    impl RecordingSurface {
        fn last(&self) -> (ContainerId, ContainerView) {
            self.mounts.borrow().last().cloned().unwrap()
        }
    }

    fn pipeline(api: FakeApi) -> Pipeline<FakeApi, RecordingSurface> {
        Pipeline::new(api, RecordingSurface::default(), PipelineSettings::default())
    }

    fn movie_page(count: usize) -> String {
        let results: Vec<serde_json::Value> = (0..count)
            .map(|i| {
                serde_json::json!({
                    "id": i,
                    "title": format!("Movie {i}"),
                    "release_date": "2020-01-01",
                    "overview": "Plot.",
                    "poster_path": format!("/m{i}.jpg"),
                    "vote_average": 7.0
                })
            })
            .collect();
        serde_json::json!({ "page": 1, "results": results }).to_string()
    }

    fn credits_with_ratings(ratings: &[f64]) -> String {
        let cast: Vec<serde_json::Value> = ratings
            .iter()
            .enumerate()
            .map(|(i, r)| {
                serde_json::json!({
                    "id": i,
                    "media_type": "movie",
                    "title": format!("Credit {i}"),
                    "vote_average": r
                })
            })
            .collect();
        serde_json::json!({ "id": 1, "cast": cast, "crew": [] }).to_string()
    }

    #[tokio::test]
    async fn test_list_top_rated_keeps_first_ten_in_order() {
        // Arrange
        let p = pipeline(FakeApi {
            movies: Some(movie_page(12)),
            ..FakeApi::default()
        });

        // Act
        let outcome = p.list_top_rated().await;

        // Assert
        assert_eq!(outcome, Outcome::Rendered(10));
        let (container, view) = p.surface().last();
        assert_eq!(container, ContainerId::TopRated);
        let titles: Vec<&str> = view.cards().iter().map(|c| c.title.as_str()).collect();
        let expected: Vec<String> = (0..10).map(|i| format!("Movie {i}")).collect();
        assert_eq!(titles, expected);
        assert!(view.cards().iter().all(|c| c.media_label.is_none() && c.overview.is_none()));
    }

    #[tokio::test]
    async fn test_list_popular_with_fewer_than_ten() {
        // Arrange
        let p = pipeline(FakeApi {
            movies: Some(String::from(include_str!(
                "../../../fixtures/tmdb/popular_page1.json"
            ))),
            ..FakeApi::default()
        });

        // Act
        let outcome = p.list_popular().await;

        // Assert
        assert_eq!(outcome, Outcome::Rendered(3));
        let (container, view) = p.surface().last();
        assert_eq!(container, ContainerId::Popular);
        assert_eq!(view.cards()[0].title, "The Wild Robot");
    }

    #[tokio::test]
    async fn test_empty_list_clears_container() {
        // Arrange
        let p = pipeline(FakeApi {
            movies: Some(movie_page(0)),
            ..FakeApi::default()
        });

        // Act
        let outcome = p.list_top_rated().await;

        // Assert
        assert_eq!(outcome, Outcome::Rendered(0));
        assert_eq!(p.surface().last().1, ContainerView::Cards(Vec::new()));
    }

    #[tokio::test]
    async fn test_search_multi_keeps_movies_and_series_only() {
        // Arrange
        let p = pipeline(FakeApi {
            multi: Some(String::from(include_str!(
                "../../../fixtures/tmdb/search_multi_inception.json"
            ))),
            ..FakeApi::default()
        });

        // Act
        let outcome = p.search_multi("inception").await;

        // Assert
        assert_eq!(outcome, Outcome::Rendered(4));
        let (container, view) = p.surface().last();
        assert_eq!(container, ContainerId::SearchResults);
        let actions: Vec<ClickAction> = view.cards().iter().map(|c| c.action).collect();
        assert_eq!(
            actions,
            vec![
                ClickAction::MovieDetail(27_205),
                ClickAction::TvDetail(64_661),
                ClickAction::TvDetail(250_001),
                ClickAction::MovieDetail(64_956),
            ]
        );
        assert!(view.cards().iter().all(|c| c.media_label.is_some()));
        assert!(view.cards()[0].overview.is_some());
        assert_eq!(view.cards()[2].detail, "Release Date: Not Available");
    }

    #[tokio::test]
    async fn test_search_multi_with_only_people_shows_nothing_found() {
        // Arrange
        let p = pipeline(FakeApi {
            multi: Some(String::from(include_str!(
                "../../../fixtures/tmdb/search_multi_people_only.json"
            ))),
            ..FakeApi::default()
        });

        // Act
        let outcome = p.search_multi("nolan").await;

        // Assert
        assert_eq!(outcome, Outcome::Empty);
        let (container, view) = p.surface().last();
        assert_eq!(container, ContainerId::SearchResults);
        assert_eq!(view, ContainerView::Message(String::from(NOTHING_FOUND)));
        assert_eq!(view.card_count(), 0);
    }

    #[tokio::test]
    async fn test_search_person_renders_people() {
        // Arrange
        let p = pipeline(FakeApi {
            persons: Some(String::from(include_str!(
                "../../../fixtures/tmdb/search_person_nolan.json"
            ))),
            ..FakeApi::default()
        });

        // Act
        let outcome = p.search_person("nolan").await;

        // Assert
        assert_eq!(outcome, Outcome::Rendered(3));
        let (_, view) = p.surface().last();
        assert_eq!(view.cards()[0].detail, "Known For: Directing");
        assert_eq!(view.cards()[1].image.src, "img/default-person-image.jpg");
        assert_eq!(view.cards()[2].action, ClickAction::PersonCredits(3_996_001));
    }

    #[tokio::test]
    async fn test_search_person_drops_tv_tagged_entries() {
        // Arrange
        let body = serde_json::json!({
            "page": 1,
            "results": [
                { "id": 1, "name": "Odd Entry", "media_type": "tv" },
                { "id": 2, "name": "Real Person", "known_for_department": "Acting" }
            ]
        })
        .to_string();
        let p = pipeline(FakeApi {
            persons: Some(body),
            ..FakeApi::default()
        });

        // Act
        let outcome = p.search_person("x").await;

        // Assert
        assert_eq!(outcome, Outcome::Rendered(1));
        assert_eq!(p.surface().last().1.cards()[0].title, "Real Person");
    }

    #[tokio::test]
    async fn test_search_person_empty_shows_nothing_found() {
        // Arrange
        let p = pipeline(FakeApi {
            persons: Some(String::from(include_str!(
                "../../../fixtures/tmdb/search_empty.json"
            ))),
            ..FakeApi::default()
        });

        // Act
        let outcome = p.search_person("zzzz").await;

        // Assert
        assert_eq!(outcome, Outcome::Empty);
    }

    #[test]
    fn test_top_credits_is_stable_for_equal_ratings() {
        // Arrange
        let body = credits_with_ratings(&[5.0, 9.0, 9.0, 3.0]);
        let credits: TmdbCombinedCredits = serde_json::from_str(&body).unwrap();

        // Act
        let items = top_credits(credits.into_combined(), CREDITS_LIMIT);

        // Assert
        let ids: Vec<u64> = items.iter().map(MediaItem::id).collect();
        assert_eq!(ids, vec![1, 2, 0]);
    }

    #[tokio::test]
    async fn test_person_credits_renders_top_three_with_label() {
        // Arrange
        let p = pipeline(FakeApi {
            credits: Some(String::from(include_str!(
                "../../../fixtures/tmdb/combined_credits_525.json"
            ))),
            ..FakeApi::default()
        });

        // Act
        let outcome = p.dispatch(ClickAction::PersonCredits(525)).await;

        // Assert
        assert_eq!(outcome, Outcome::Rendered(3));
        let (container, view) = p.surface().last();
        assert_eq!(container, ContainerId::SearchResults);
        let cards = view.cards();
        let titles: Vec<&str> = cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Inception", "Breaking Bad", "Memento Mori Cameo"]);
        let actions: Vec<ClickAction> = cards.iter().map(|c| c.action).collect();
        assert_eq!(
            actions,
            vec![
                ClickAction::MovieDetail(27_205),
                ClickAction::MovieDetail(1396),
                ClickAction::MovieDetail(77),
            ]
        );
        let labels: Vec<Option<&str>> = cards.iter().map(|c| c.media_label.as_deref()).collect();
        assert_eq!(
            labels,
            vec![Some("Type: Movie"), Some("Type: TV Series"), Some("Type: Movie")]
        );
        assert_eq!(cards[0].detail, "Release Date: 2010-07-15");
        assert_eq!(cards[1].detail, "Release Date: ");
        assert!(cards.iter().all(|c| c.overview.is_none()));
    }

    #[tokio::test]
    async fn test_new_render_replaces_previous_results() {
        // Arrange
        let p = pipeline(FakeApi {
            multi: Some(String::from(include_str!(
                "../../../fixtures/tmdb/search_multi_inception.json"
            ))),
            persons: Some(String::from(include_str!(
                "../../../fixtures/tmdb/search_empty.json"
            ))),
            ..FakeApi::default()
        });

        // Act
        p.search_multi("inception").await;
        p.search_person("nobody").await;

        // Assert: each mount carries the full contents of the container
        let mounts = p.surface().mounts.borrow();
        assert_eq!(mounts.len(), 2);
        assert_eq!(mounts[0].1.card_count(), 4);
        assert_eq!(mounts[1].1.card_count(), 0);
    }

    #[tokio::test]
    async fn test_movie_detail_dispatch() {
        // Arrange
        let p = pipeline(FakeApi {
            movie: Some(String::from(include_str!(
                "../../../fixtures/tmdb/movie_details_27205.json"
            ))),
            ..FakeApi::default()
        });

        // Act
        let outcome = p.dispatch(ClickAction::MovieDetail(27_205)).await;

        // Assert
        assert_eq!(outcome, Outcome::Rendered(1));
        let details = p.surface().details.borrow();
        assert!(matches!(&details[0], DetailContent::Loaded(v) if v.title == "Inception"));
        assert!(p.surface().mounts.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_tv_detail_dispatch() {
        // Arrange
        let p = pipeline(FakeApi {
            tv: Some(String::from(include_str!(
                "../../../fixtures/tmdb/tv_details_1396.json"
            ))),
            ..FakeApi::default()
        });

        // Act
        let outcome = p.dispatch(ClickAction::TvDetail(1396)).await;

        // Assert
        assert_eq!(outcome, Outcome::Rendered(1));
        let details = p.surface().details.borrow();
        assert!(matches!(&details[0], DetailContent::Loaded(v) if v.title == "Breaking Bad"));
    }

    #[tokio::test]
    async fn test_detail_failure_shows_message() {
        // Arrange
        let p = pipeline(FakeApi::default());

        // Act
        let outcome = p.fetch_movie_detail(1).await;

        // Assert
        assert_eq!(outcome, Outcome::Failed);
        let details = p.surface().details.borrow();
        assert_eq!(
            details[0],
            DetailContent::Message(String::from(FAILURE_MESSAGE))
        );
    }

    #[tokio::test]
    async fn test_parse_failure_shows_message() {
        // Arrange
        let p = pipeline(FakeApi {
            multi: Some(String::from("{\"page\": 1, \"results\": 42}")),
            ..FakeApi::default()
        });

        // Act
        let outcome = p.search_multi("x").await;

        // Assert
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(
            p.surface().last().1,
            ContainerView::Message(String::from(FAILURE_MESSAGE))
        );
    }

    #[tokio::test]
    async fn test_failure_is_logged_once_at_error_level() {
        // Arrange
        let (subscriber, handle) = subscriber::mock()
            .event(expect::event().at_level(tracing::Level::ERROR))
            .only()
            .run_with_handle();
        let p = pipeline(FakeApi::default());

        // Act
        let outcome = {
            let _guard = tracing::subscriber::set_default(subscriber);
            p.list_popular().await
        };

        // Assert
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(
            p.surface().last(),
            (
                ContainerId::Popular,
                ContainerView::Message(String::from(FAILURE_MESSAGE))
            )
        );
        handle.assert_finished();
    }

    #[tokio::test]
    async fn test_http_failure_through_real_client_is_logged_and_shown() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = TmdbClient::builder()
            .base_url(format!("{}/3/", mock_server.uri()).parse().unwrap())
            .api_key("test-key")
            .user_agent("test/0.0.0")
            .build()
            .unwrap();
        let p = Pipeline::new(client, RecordingSurface::default(), PipelineSettings::default());
        let (subscriber, handle) = subscriber::mock()
            .with_filter(|meta| meta.is_event() && *meta.level() == tracing::Level::ERROR)
            .event(
                expect::event()
                    .at_level(tracing::Level::ERROR)
                    .with_target("filmdeck_api::tmdb::client")
                    .with_fields(expect::msg("TMDB fetch failed")),
            )
            .event(
                expect::event()
                    .at_level(tracing::Level::ERROR)
                    .with_target("filmdeck_pipeline::pipeline"),
            )
            .only()
            .run_with_handle();

        // Act
        let outcome = {
            let _guard = tracing::subscriber::set_default(subscriber);
            p.list_top_rated().await
        };

        // Assert
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(
            p.surface().last(),
            (
                ContainerId::TopRated,
                ContainerView::Message(String::from(FAILURE_MESSAGE))
            )
        );
        handle.assert_finished();
    }
}
