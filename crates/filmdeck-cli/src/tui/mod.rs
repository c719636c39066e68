//! Interactive browser TUI.
//!
//! Uses `ratatui` + `crossterm` for rendering. Fetches run on the
//! current-thread runtime and are polled between input checks; a fetch
//! that resolves later overwrites whatever an earlier one mounted.
#![allow(clippy::future_not_send)]

/// Browser state types.
pub mod state;
mod ui;

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use filmdeck_api::tmdb::LocalTmdbApi;
use filmdeck_pipeline::{ContainerId, ContainerView, DetailContent, Outcome, Pipeline, Surface};
use futures::future::LocalBoxFuture;
use futures::stream::FuturesUnordered;
use futures::{FutureExt, StreamExt};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use self::state::{BrowserState, Command, Request};

/// Interval between input checks while fetches are pending.
const TICK: Duration = Duration::from_millis(50);

/// Surface that mounts views into the shared browser state.
#[derive(Debug, Clone)]
pub struct ScreenSurface {
    state: Rc<RefCell<BrowserState>>,
}

impl ScreenSurface {
    /// Wraps shared browser state.
    pub const fn new(state: Rc<RefCell<BrowserState>>) -> Self {
        Self { state }
    }
}

impl Surface for ScreenSurface {
    fn mount(&self, container: ContainerId, view: ContainerView) {
        self.state.borrow_mut().mount(container, view);
    }

    fn show_detail(&self, content: DetailContent) {
        self.state.borrow_mut().show_detail(content);
    }
}

/// Starts the pipeline operation behind `request`.
fn start<'a, A: LocalTmdbApi>(
    pipeline: &'a Pipeline<A, ScreenSurface>,
    request: Request,
) -> LocalBoxFuture<'a, Outcome> {
    match request {
        Request::TopRated => pipeline.list_top_rated().boxed_local(),
        Request::Popular => pipeline.list_popular().boxed_local(),
        Request::SearchMulti(query) => {
            async move { pipeline.search_multi(&query).await }.boxed_local()
        }
        Request::SearchPerson(query) => {
            async move { pipeline.search_person(&query).await }.boxed_local()
        }
        Request::Click(action) => pipeline.dispatch(action).boxed_local(),
    }
}

/// Runs the browser TUI until the user quits.
///
/// Top-rated and popular movies are requested on start.
///
/// # Errors
///
/// Returns an error if terminal setup or event handling fails.
pub async fn run_browser<A: LocalTmdbApi>(
    pipeline: Pipeline<A, ScreenSurface>,
    state: Rc<RefCell<BrowserState>>,
) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)
        .context("failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    let result = run_event_loop(&mut terminal, &pipeline, &state).await;

    // Cleanup (always attempt even if event loop failed)
    disable_raw_mode().context("failed to disable raw mode")?;
    crossterm::execute!(io::stdout(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;

    result
}

/// Main event loop.
async fn run_event_loop<A: LocalTmdbApi>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    pipeline: &Pipeline<A, ScreenSurface>,
    state: &Rc<RefCell<BrowserState>>,
) -> Result<()> {
    let mut pending: FuturesUnordered<LocalBoxFuture<'_, Outcome>> = FuturesUnordered::new();
    for request in [Request::TopRated, Request::Popular] {
        pending.push(start(pipeline, request));
    }
    state.borrow_mut().in_flight = pending.len();

    loop {
        terminal
            .draw(|frame| ui::draw(frame, &mut state.borrow_mut()))
            .context("failed to draw TUI")?;

        if event::poll(Duration::ZERO).context("failed to poll events")?
            && let Event::Key(key) = event::read().context("failed to read event")?
            && key.kind == KeyEventKind::Press
        {
            let command = state.borrow_mut().handle_key(key.code, key.modifiers);
            match command {
                Command::Quit => return Ok(()),
                Command::Fetch(request) => {
                    tracing::debug!(?request, "starting fetch");
                    pending.push(start(pipeline, request));
                }
                Command::Open(url) => {
                    if let Err(e) = open::that(&url) {
                        tracing::warn!(error = %e, url = %url, "failed to open browser");
                    }
                }
                Command::None => {}
            }
            state.borrow_mut().in_flight = pending.len();
        }

        tokio::select! {
            Some(outcome) = pending.next(), if !pending.is_empty() => {
                tracing::debug!(?outcome, "fetch finished");
                state.borrow_mut().in_flight = pending.len();
            }
            () = tokio::time::sleep(TICK) => {}
        }
    }
}
