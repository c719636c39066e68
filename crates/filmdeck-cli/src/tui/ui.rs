//! TUI rendering logic for the browser.

use filmdeck_pipeline::{Card, ContainerId, ContainerView, DetailContent, DetailView};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use super::state::{BrowserState, InputMode};
use crate::surface::action_label;

/// Draws the browser UI.
#[allow(clippy::indexing_slicing)]
pub fn draw(frame: &mut Frame, state: &mut BrowserState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // search inputs
            Constraint::Min(8),    // panes
            Constraint::Length(3), // footer
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], state);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    let panes = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(body[0]);

    for (area, container) in panes.iter().zip(ContainerId::ALL) {
        draw_pane(frame, *area, state, container);
    }

    draw_detail(frame, body[1], state);
    draw_footer(frame, chunks[2], state);
}

/// Draws the two search inputs.
#[allow(clippy::indexing_slicing)]
fn draw_header(frame: &mut Frame, area: Rect, state: &BrowserState) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let input_style = |mode: InputMode| {
        if state.input_mode == mode {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        }
    };

    let movies = Paragraph::new(state.movie_query.as_str())
        .style(input_style(InputMode::MovieSearch))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search movies / TV: / "),
        );
    frame.render_widget(movies, header_chunks[0]);

    let persons = Paragraph::new(state.person_query.as_str())
        .style(input_style(InputMode::PersonSearch))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search persons: ? "),
        );
    frame.render_widget(persons, header_chunks[1]);
}

/// Builds the list item for one card.
fn card_item(card: &Card) -> ListItem<'static> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            card.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ({})", action_label(card.action)),
            Style::default().fg(Color::DarkGray),
        ),
    ])];
    if let Some(label) = &card.media_label {
        lines.push(Line::from(format!("  {label}")));
    }
    lines.push(Line::from(format!("  {}", card.detail)));
    if let Some(overview) = &card.overview {
        lines.push(Line::from(Span::styled(
            format!("  {overview}"),
            Style::default().fg(Color::Gray),
        )));
    }
    ListItem::new(lines)
}

/// Draws one container pane.
fn draw_pane(frame: &mut Frame, area: Rect, state: &mut BrowserState, container: ContainerId) {
    let border_style = if state.active == container {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let Some(pane) = state.pane_mut(container) else {
        return;
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ({}) ", container, pane.view.card_count()));

    match &pane.view {
        ContainerView::Cards(cards) => {
            let items: Vec<ListItem> = cards.iter().map(card_item).collect();
            let list = List::new(items).block(block).highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            );
            frame.render_stateful_widget(list, area, &mut pane.list_state);
        }
        ContainerView::Message(message) => {
            let paragraph = Paragraph::new(message.as_str()).block(block);
            frame.render_widget(paragraph, area);
        }
    }
}

/// Builds the lines of a loaded detail view.
fn detail_lines(view: &DetailView) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        view.title.clone(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(tagline) = &view.tagline {
        lines.push(Line::from(Span::styled(
            tagline.clone(),
            Style::default().add_modifier(Modifier::ITALIC),
        )));
    }
    lines.push(Line::from(""));
    for (label, value) in &view.facts {
        lines.push(Line::from(vec![
            Span::styled(format!("{label}: "), Style::default().fg(Color::Cyan)),
            Span::raw(value.clone()),
        ]));
    }
    if let Some(overview) = &view.overview {
        lines.push(Line::from(""));
        lines.push(Line::from(overview.clone()));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(format!("Poster: {}", view.image.src)));
    lines.push(Line::from(format!("More: {}", view.link)));
    lines
}

/// Draws the detail pane.
fn draw_detail(frame: &mut Frame, area: Rect, state: &BrowserState) {
    let block = Block::default().borders(Borders::ALL).title(" Details ");
    let lines = match &state.detail {
        Some(DetailContent::Loaded(view)) => detail_lines(view),
        Some(DetailContent::Message(message)) => vec![Line::from(message.clone())],
        None => vec![Line::from(Span::styled(
            "Select a card and press Enter",
            Style::default().fg(Color::DarkGray),
        ))],
    };
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Draws the footer with key hints.
fn draw_footer(frame: &mut Frame, area: Rect, state: &BrowserState) {
    let hints = match state.input_mode {
        InputMode::Normal => {
            "t: Top rated  p: Popular  /: Search  ?: Persons  Tab: Pane  j/k: Move  Enter: Open  o: Web  q: Quit"
        }
        InputMode::MovieSearch | InputMode::PersonSearch => {
            "Enter: Search  Esc: Cancel  Backspace: Delete"
        }
    };
    let mut spans = vec![Span::raw(hints)];
    if state.in_flight > 0 {
        spans.push(Span::styled(
            format!("  Loading ({})...", state.in_flight),
            Style::default().fg(Color::Yellow),
        ));
    }
    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
