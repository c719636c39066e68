//! Browser TUI state management.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers};
use filmdeck_pipeline::{ClickAction, ContainerId, ContainerView, DetailContent};
use ratatui::widgets::ListState;

/// Input mode for the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Normal navigation mode.
    Normal,
    /// Editing the movie/TV search query.
    MovieSearch,
    /// Editing the person search query.
    PersonSearch,
}

/// Fetch requested by a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Reload top-rated movies.
    TopRated,
    /// Reload popular movies.
    Popular,
    /// Search movies and TV series.
    SearchMulti(String),
    /// Search persons.
    SearchPerson(String),
    /// Follow-up fetch of a clicked card.
    Click(ClickAction),
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Nothing beyond redrawing.
    None,
    /// Leave the browser.
    Quit,
    /// Start a fetch.
    Fetch(Request),
    /// Open a URL in the system browser.
    Open(String),
}

/// One container pane.
#[derive(Debug)]
pub struct Pane {
    /// Current contents.
    pub view: ContainerView,
    /// List state (handles selection and scroll).
    pub list_state: ListState,
}

impl Default for Pane {
    fn default() -> Self {
        Self {
            view: ContainerView::Cards(Vec::new()),
            list_state: ListState::default(),
        }
    }
}

/// State for the browser TUI.
#[derive(Debug)]
pub struct BrowserState {
    /// Container panes.
    panes: HashMap<ContainerId, Pane>,
    /// Focused pane.
    pub active: ContainerId,
    /// Detail view (if any card has been opened).
    pub detail: Option<DetailContent>,
    /// Current input mode.
    pub input_mode: InputMode,
    /// Movie/TV search query.
    pub movie_query: String,
    /// Person search query.
    pub person_query: String,
    /// Number of fetches still in flight.
    pub in_flight: usize,
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserState {
    /// Creates an empty state focused on the top-rated pane.
    #[must_use]
    pub fn new() -> Self {
        Self {
            panes: ContainerId::ALL
                .into_iter()
                .map(|id| (id, Pane::default()))
                .collect(),
            active: ContainerId::TopRated,
            detail: None,
            input_mode: InputMode::Normal,
            movie_query: String::new(),
            person_query: String::new(),
            in_flight: 0,
        }
    }

    /// Returns the pane for `container`.
    pub fn pane(&self, container: ContainerId) -> Option<&Pane> {
        self.panes.get(&container)
    }

    /// Returns the pane for `container` mutably.
    pub fn pane_mut(&mut self, container: ContainerId) -> Option<&mut Pane> {
        self.panes.get_mut(&container)
    }

    /// Replaces the contents of `container` and resets its cursor.
    pub fn mount(&mut self, container: ContainerId, view: ContainerView) {
        let pane = self.panes.entry(container).or_default();
        let selected = (view.card_count() > 0).then_some(0);
        pane.view = view;
        pane.list_state.select(selected);
    }

    /// Replaces the detail view.
    pub fn show_detail(&mut self, content: DetailContent) {
        self.detail = Some(content);
    }

    /// Returns the click action of the selected card in the focused pane.
    #[must_use]
    pub fn selected_action(&self) -> Option<ClickAction> {
        let pane = self.pane(self.active)?;
        let index = pane.list_state.selected()?;
        pane.view.cards().get(index).map(|card| card.action)
    }

    /// Returns the web link of the loaded detail view.
    #[must_use]
    pub fn detail_link(&self) -> Option<&str> {
        match &self.detail {
            Some(DetailContent::Loaded(view)) => Some(view.link.as_str()),
            _ => None,
        }
    }

    /// Focuses the next pane.
    pub fn cycle_pane(&mut self) {
        let active = self.active;
        if let Some(&next) = ContainerId::ALL
            .iter()
            .cycle()
            .skip_while(|&&id| id != active)
            .nth(1)
        {
            self.active = next;
        }
    }

    /// Moves the card cursor up.
    pub fn move_up(&mut self) {
        if let Some(pane) = self.pane_mut(self.active)
            && let Some(i) = pane.list_state.selected()
        {
            pane.list_state.select(Some(i.saturating_sub(1)));
        }
    }

    /// Moves the card cursor down.
    pub fn move_down(&mut self) {
        if let Some(pane) = self.pane_mut(self.active)
            && let Some(i) = pane.list_state.selected()
        {
            let last = pane.view.card_count().saturating_sub(1);
            pane.list_state.select(Some(i.saturating_add(1).min(last)));
        }
    }

    /// Handles a key press and returns the resulting command.
    pub fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> Command {
        if key == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return Command::Quit;
        }
        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::MovieSearch | InputMode::PersonSearch => self.handle_input_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyCode) -> Command {
        match key {
            KeyCode::Char('q') => return Command::Quit,
            KeyCode::Char('t') => {
                self.active = ContainerId::TopRated;
                return Command::Fetch(Request::TopRated);
            }
            KeyCode::Char('p') => {
                self.active = ContainerId::Popular;
                return Command::Fetch(Request::Popular);
            }
            KeyCode::Char('/') => self.input_mode = InputMode::MovieSearch,
            KeyCode::Char('?') => self.input_mode = InputMode::PersonSearch,
            KeyCode::Tab => self.cycle_pane(),
            KeyCode::Up | KeyCode::Char('k') => self.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::Enter => {
                if let Some(action) = self.selected_action() {
                    if matches!(action, ClickAction::PersonCredits(_)) {
                        self.active = ContainerId::SearchResults;
                    }
                    return Command::Fetch(Request::Click(action));
                }
            }
            KeyCode::Char('o') => {
                if let Some(link) = self.detail_link() {
                    return Command::Open(String::from(link));
                }
            }
            KeyCode::Esc => self.detail = None,
            _ => {}
        }
        Command::None
    }

    fn handle_input_key(&mut self, key: KeyCode) -> Command {
        let mode = self.input_mode;
        let query = match mode {
            InputMode::PersonSearch => &mut self.person_query,
            InputMode::MovieSearch | InputMode::Normal => &mut self.movie_query,
        };
        match key {
            KeyCode::Esc => {
                query.clear();
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Enter => {
                let submitted = String::from(query.trim());
                self.input_mode = InputMode::Normal;
                if submitted.is_empty() {
                    return Command::None;
                }
                self.active = ContainerId::SearchResults;
                let request = if mode == InputMode::PersonSearch {
                    Request::SearchPerson(submitted)
                } else {
                    Request::SearchMulti(submitted)
                };
                return Command::Fetch(request);
            }
            KeyCode::Backspace => {
                query.pop();
            }
            KeyCode::Char(c) => query.push(c),
            _ => {}
        }
        Command::None
    }
}
