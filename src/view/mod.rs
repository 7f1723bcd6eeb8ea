//! TUI rendering and terminal management (impure shell)

mod card;
mod help;
mod search_input;
mod status_bar;
mod styles;

pub use card::{
    card_height, card_lines, format_launch_date, toggle_label, LaunchCard, COLLAPSED_CARD_HEIGHT,
};
pub use help::render_help_overlay;
pub use search_input::SearchBar;
pub use status_bar::{empty_list_text, status_text, StatusBar};
pub use styles::{CardStyles, ColorConfig};

use crate::config::KeyBindings;
use crate::model::KeyAction;
use crate::source::{LaunchSource, PageLoader};
use crate::state::{search_input_handler, AppState, FocusPane, PageOutcome};
use crate::view_state::{LastCardObserver, ListViewport, ObservedCard};
use chrono::NaiveDate;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Layout, Rect},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Height of the search bar (border + content).
const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the status line.
const STATUS_BAR_HEIGHT: u16 = 1;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Startup options for the viewer.
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Launches requested per page.
    pub page_size: u32,
    /// Search term applied before the first page arrives.
    pub initial_search: Option<String>,
    /// Color settings for all widgets.
    pub color: ColorConfig,
}

impl CliArgs {
    /// Bundle the startup options.
    pub fn new(page_size: u32, initial_search: Option<String>, color: ColorConfig) -> Self {
        Self {
            page_size,
            initial_search,
            color,
        }
    }
}

/// What a frame showed of the card list.
#[derive(Debug, Clone, Copy)]
struct ListReport {
    height: u16,
    last_card: Option<ObservedCard>,
    last_in_view: bool,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B, S>
where
    B: Backend,
    S: LaunchSource,
{
    terminal: Terminal<B>,
    app_state: AppState,
    loader: PageLoader<S>,
    key_bindings: KeyBindings,
    viewport: ListViewport,
    observer: LastCardObserver,
    styles: CardStyles,
    colors: bool,
    today: NaiveDate,
    /// Height of the card list in the last frame (for page up/down).
    list_height: u16,
}

impl<S: LaunchSource> TuiApp<CrosstermBackend<Stdout>, S> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(source: S, args: CliArgs) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Self::with_terminal(terminal, source, args)
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Between input events the loop
    /// wakes every tick to collect finished page fetches.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const TICK: Duration = Duration::from_millis(100);

        self.step()?;

        loop {
            let mut dirty = false;
            if event::poll(TICK)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        dirty = true;
                    }
                    Event::Mouse(mouse) => dirty = self.handle_mouse(mouse),
                    Event::Resize(width, height) => {
                        debug!(width, height, "Terminal resized");
                        dirty = true;
                    }
                    _ => {}
                }
            }

            if self.pump() || dirty {
                self.render()?;
            }
        }
    }
}

impl<B, S> TuiApp<B, S>
where
    B: Backend,
    S: LaunchSource,
{
    /// Create the application over an existing terminal.
    ///
    /// Starts the fetch runtime; the first page is requested on the first
    /// [`step`](Self::step).
    pub fn with_terminal(terminal: Terminal<B>, source: S, args: CliArgs) -> Result<Self, TuiError> {
        info!(source = %source.describe(), page_size = args.page_size, "Starting launch viewer");
        let loader = PageLoader::new(source)?;

        let mut app_state = AppState::new(args.page_size);
        if let Some(term) = args.initial_search.as_deref() {
            app_state.set_search_term(term);
        }

        Ok(Self {
            terminal,
            app_state,
            loader,
            key_bindings: KeyBindings::default(),
            viewport: ListViewport::new(),
            observer: LastCardObserver::new(),
            styles: CardStyles::with_color_config(args.color),
            colors: args.color.colors_enabled(),
            today: chrono::Local::now().date_naive(),
            list_height: 0,
        })
    }

    /// Override the date used for "years ago" labels.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Current application state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Underlying terminal, for inspecting test buffers.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Collect finished fetches, dispatch a wanted one, and draw.
    pub fn step(&mut self) -> Result<(), TuiError> {
        self.pump();
        self.render()
    }

    /// Block up to `timeout` for the in-flight fetch, apply it and draw.
    ///
    /// Returns `None` when nothing was in flight or the fetch did not finish.
    pub fn wait_for_page(&mut self, timeout: Duration) -> Result<Option<PageOutcome>, TuiError> {
        if !self.loader.is_busy() {
            return Ok(None);
        }
        let Some(result) = self.loader.wait_next(timeout) else {
            return Ok(None);
        };
        let outcome = self.app_state.apply_page_result(result);
        self.step()?;
        Ok(Some(outcome))
    }

    /// Stop observing and cancel any in-flight fetch.
    pub fn shutdown(&mut self) {
        self.observer.detach();
        self.loader.shutdown();
    }

    /// Apply finished fetches and dispatch the wanted page, if any.
    ///
    /// Returns true if anything changed.
    fn pump(&mut self) -> bool {
        let mut changed = false;

        while let Some(result) = self.loader.try_next() {
            let outcome = self.app_state.apply_page_result(result);
            debug!(?outcome, "Page result applied");
            changed = true;
        }

        if let Some(request) = self.app_state.take_request() {
            self.loader.dispatch(request);
            changed = true;
        }

        changed
    }

    /// Draw frames and feed the last-card observer until nothing changes.
    ///
    /// A load triggered by a frame is dispatched right away and the loading
    /// state drawn in the next frame.
    fn render(&mut self) -> Result<(), TuiError> {
        const MAX_FRAMES: usize = 3;

        for _ in 0..MAX_FRAMES {
            let report = self.draw()?;
            self.observe_last_card(report);
            if !self.pump() {
                break;
            }
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<ListReport, TuiError> {
        let Self {
            terminal,
            app_state,
            viewport,
            styles,
            colors,
            today,
            ..
        } = self;

        let mut report = None;
        terminal.draw(|frame| {
            report = Some(render_frame(frame, app_state, viewport, styles, *colors, *today));
        })?;

        let report = report.unwrap_or(ListReport {
            height: 0,
            last_card: None,
            last_in_view: false,
        });
        self.list_height = report.height;
        Ok(report)
    }

    fn observe_last_card(&mut self, report: ListReport) {
        self.observer.attach(report.last_card);

        let loading = self.app_state.pagination().is_loading();
        if self.observer.observe(report.last_in_view, loading) && self.app_state.load_more() {
            debug!(page = self.app_state.pagination().page(), "Last card visible, loading more");
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Special case: Ctrl+C should always quit, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.app_state.help_visible {
            return self.handle_help_key(key);
        }

        if self.app_state.focus == FocusPane::Search && self.handle_search_key(key) {
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.app_state.help_visible = true,
            KeyAction::SelectNext => self.app_state.select_by(1),
            KeyAction::SelectPrev => self.app_state.select_by(-1),
            KeyAction::PageDown => self.app_state.select_by(self.cards_per_page()),
            KeyAction::PageUp => self.app_state.select_by(-self.cards_per_page()),
            KeyAction::SelectFirst => self.app_state.select_first(),
            KeyAction::SelectLast => self.app_state.select_last(),
            KeyAction::ToggleDetails => {
                if let Some(expanded) = self.app_state.toggle_selected_details() {
                    debug!(expanded, "Toggled launch details");
                }
            }
            KeyAction::StartSearch => self.app_state.focus = FocusPane::Search,
            KeyAction::ClearSearch => self.app_state.edit_search(search_input_handler::clear_search),
            KeyAction::LoadMore => {
                self.app_state.load_more();
            }
        }

        false
    }

    /// Keys while the help overlay is shown. Everything except close/quit
    /// is swallowed.
    fn handle_help_key(&mut self, key: KeyEvent) -> bool {
        match self.key_bindings.get(key) {
            Some(KeyAction::Quit) => true,
            Some(KeyAction::Help) => {
                self.app_state.help_visible = false;
                false
            }
            _ => {
                if key.code == KeyCode::Esc {
                    self.app_state.help_visible = false;
                }
                false
            }
        }
    }

    /// Text editing while the search bar has focus. Returns true if consumed.
    fn handle_search_key(&mut self, key: KeyEvent) -> bool {
        let edit: fn(crate::state::SearchInput) -> crate::state::SearchInput = match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.app_state
                    .edit_search(|input| search_input_handler::handle_char_input(input, ch));
                return true;
            }
            KeyCode::Esc | KeyCode::Enter | KeyCode::Down | KeyCode::Tab => {
                self.app_state.focus = FocusPane::List;
                return true;
            }
            KeyCode::Backspace => search_input_handler::handle_backspace,
            KeyCode::Delete => search_input_handler::handle_delete,
            KeyCode::Left => search_input_handler::handle_cursor_left,
            KeyCode::Right => search_input_handler::handle_cursor_right,
            KeyCode::Home => search_input_handler::handle_cursor_home,
            KeyCode::End => search_input_handler::handle_cursor_end,
            _ => return false,
        };
        self.app_state.edit_search(edit);
        true
    }

    /// Mouse wheel moves the highlight. Returns true if anything changed.
    fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.app_state.select_by(1);
                true
            }
            MouseEventKind::ScrollUp => {
                self.app_state.select_by(-1);
                true
            }
            _ => false,
        }
    }

    /// Number of collapsed cards that fit the list area.
    fn cards_per_page(&self) -> isize {
        (self.list_height / COLLAPSED_CARD_HEIGHT).max(1) as isize
    }
}

/// Render search bar, card list, status line and (optionally) help.
fn render_frame(
    frame: &mut Frame,
    state: &AppState,
    viewport: &mut ListViewport,
    styles: &CardStyles,
    colors: bool,
    today: NaiveDate,
) -> ListReport {
    let [search_area, list_area, status_area] = Layout::vertical([
        Constraint::Length(SEARCH_BAR_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(frame.area());

    frame.render_widget(
        SearchBar::new(state.search(), state.focus == FocusPane::Search).colors(colors),
        search_area,
    );
    let report = render_cards(frame, list_area, state, viewport, styles, today);
    frame.render_widget(StatusBar::new(state), status_area);

    if state.help_visible {
        render_help_overlay(frame);
    }

    report
}

fn render_cards(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    viewport: &mut ListViewport,
    styles: &CardStyles,
    today: NaiveDate,
) -> ListReport {
    let heights: Vec<u16> = state
        .visible_records()
        .map(|record| card_height(record, state.is_expanded(record.id()), area.width))
        .collect();

    let Some(last_position) = heights.len().checked_sub(1) else {
        viewport.reset();
        frame.render_widget(
            Paragraph::new(empty_list_text(state)).alignment(Alignment::Center),
            area,
        );
        return ListReport {
            height: area.height,
            last_card: None,
            last_in_view: false,
        };
    };

    viewport.ensure_visible(state.selected(), &heights, area.height);

    let mut y = area.y;
    for position in viewport.visible_range(&heights, area.height) {
        let Some(record) = state.visible_record(position) else {
            break;
        };
        let height = heights[position].min(area.bottom().saturating_sub(y));
        let card = LaunchCard::new(record, styles, today)
            .expanded(state.is_expanded(record.id()))
            .selected(position == state.selected());
        frame.render_widget(card, Rect::new(area.x, y, area.width, height));
        y = y.saturating_add(height);
    }

    let last_card = state.visible_record(last_position).map(|record| ObservedCard {
        id: record.id(),
        position: last_position,
        generation: state.pagination().pages_applied(),
    });

    ListReport {
        height: area.height,
        last_card,
        last_in_view: viewport.shows_last(&heights, area.height),
    }
}

/// Run the viewer against `source` until the user quits.
///
/// Terminal state is restored even when the loop fails.
pub fn run_with_source<S: LaunchSource>(source: S, args: CliArgs) -> Result<(), TuiError> {
    let mut app = TuiApp::new(source, args)?;

    let result = app.run();
    app.shutdown();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Extract rendered text content from a ratatui Buffer.
#[cfg(test)]
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
