//! Surface that prints mounted views through `tracing`.

use filmdeck_pipeline::{Card, ClickAction, ContainerId, ContainerView, DetailContent, Surface};

/// Prints each mounted container as a block of `info` lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSurface;

/// Short label of a click action, e.g. `movie 27205`.
pub fn action_label(action: ClickAction) -> String {
    match action {
        ClickAction::MovieDetail(id) => format!("movie {id}"),
        ClickAction::TvDetail(id) => format!("tv {id}"),
        ClickAction::PersonCredits(id) => format!("person {id}"),
    }
}

/// Formats a card as display lines, title first.
fn card_lines(card: &Card) -> Vec<String> {
    let mut lines = vec![format!("[{}] {}", action_label(card.action), card.title)];
    if let Some(label) = &card.media_label {
        lines.push(format!("    {label}"));
    }
    lines.push(format!("    {}", card.detail));
    if let Some(overview) = &card.overview {
        lines.push(format!("    {overview}"));
    }
    lines.push(format!("    Image: {}", card.image.src));
    lines
}

impl Surface for LogSurface {
    fn mount(&self, container: ContainerId, view: ContainerView) {
        tracing::info!("== {container} ==");
        match view {
            ContainerView::Cards(cards) => {
                for card in &cards {
                    for line in card_lines(card) {
                        tracing::info!("{line}");
                    }
                }
                tracing::info!("Total: {} items", cards.len());
            }
            ContainerView::Message(message) => tracing::info!("{message}"),
        }
    }

    fn show_detail(&self, content: DetailContent) {
        match content {
            DetailContent::Loaded(view) => {
                tracing::info!("== {} ==", view.title);
                if let Some(tagline) = &view.tagline {
                    tracing::info!("{tagline}");
                }
                for (label, value) in &view.facts {
                    tracing::info!("{label}: {value}");
                }
                if let Some(overview) = &view.overview {
                    tracing::info!("Overview: {overview}");
                }
                tracing::info!("Poster: {}", view.image.src);
                tracing::info!("More: {}", view.link);
            }
            DetailContent::Message(message) => tracing::info!("{message}"),
        }
    }
}
