//! Fetch-and-render pipeline for filmdeck.
//!
//! Turns TMDB responses into a uniform display model: parsed items are
//! mapped once into [`media::MediaItem`], filtered and truncated per
//! operation, then rendered by pure functions into cards that an adapter
//! mounts through the [`surface::Surface`] trait.

/// Display model shared by every TMDB shape.
pub mod media;
/// Pipeline operations (list, search, detail, credits).
pub mod pipeline;
/// Pure rendering of items into view trees.
pub mod render;
/// Adapter seam for mounting rendered views.
pub mod surface;
/// View tree types produced by rendering.
pub mod view;

pub use media::{MediaItem, MediaKind, Movie, Person, TvSeries};
pub use pipeline::{Outcome, Pipeline, PipelineSettings};
pub use render::{ImageConfig, RenderFlags};
pub use surface::Surface;
pub use view::{
    Card, CardImage, ClickAction, ContainerId, ContainerView, DetailContent, DetailView,
    FAILURE_MESSAGE, NOTHING_FOUND,
};
