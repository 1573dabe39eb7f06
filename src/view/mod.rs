//! TUI rendering and terminal management (impure shell)

pub mod constants;
pub mod footer;
pub mod index;
pub mod jump_bar;
pub mod logs;
pub mod poster_options;
pub mod posters;
pub mod selector;
mod styles;
pub mod table;
pub mod toolbar;

pub use footer::SeriesFooter;
pub use index::{render_index, IndexContext};
pub use logs::{render_logs, LogsData};
pub use posters::SeriesPosters;
pub use selector::{select, select_token, MountedRenderer, RendererKind};
pub use table::SeriesTable;

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{AppError, KeyAction, Series};
use crate::source::SeriesLibrary;
use crate::state::{
    apply_command, command_for_action, visible_series, AppState, IndexFocus, JumpBarCache,
    JumpDispatcher, JumpTarget, LogsView, Page, PageState, ScrollMove, Scrollable,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    library: SeriesLibrary,
    key_bindings: KeyBindings,
    jump_cache: JumpBarCache,
    renderer: MountedRenderer,
    /// Library items after filter and sort, in display order.
    visible: Vec<Series>,
    logs: LogsData,
    log_path: PathBuf,
    /// A library reload was requested and runs before the next event.
    refresh_pending: bool,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(config: &ResolvedConfig) -> Result<Self, AppError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        let library = SeriesLibrary::new(config.library_path.clone());
        Ok(Self::with_terminal(terminal, config, library))
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build the app around an existing terminal.
    ///
    /// An unpopulated library is scheduled for loading, so the first
    /// frame shows the loading state.
    pub fn with_terminal(terminal: Terminal<B>, config: &ResolvedConfig, library: SeriesLibrary) -> Self {
        let app_state = AppState::new(
            config.view,
            config.sort.clone(),
            config.filter,
            config.poster_options,
        );
        let renderer = select(app_state.view).mount(app_state.poster_options.options);

        let mut app = Self {
            terminal,
            app_state,
            library,
            key_bindings: KeyBindings::default(),
            jump_cache: JumpBarCache::new(),
            renderer,
            visible: Vec::new(),
            logs: LogsData::default(),
            log_path: config.log_file_path.clone(),
            refresh_pending: false,
        };

        if app.library.is_populated() {
            app.refresh_visible();
        } else {
            app.start_refresh();
        }
        app
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C)
    pub fn run(&mut self) -> Result<(), AppError> {
        // Toolbar spinners clear on the tick after their command ran.
        const TICK_INTERVAL: Duration = Duration::from_millis(250);

        self.draw()?;

        loop {
            if self.run_pending_tasks() {
                self.draw()?;
            }

            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(_, _) => self.draw()?,
                    _ => {}
                }
            } else if self.tick() {
                self.draw()?;
            }
        }
    }

    /// UI state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Backing series library.
    pub fn library(&self) -> &SeriesLibrary {
        &self.library
    }

    /// Renderer mounted for the current view.
    pub fn renderer(&self) -> &MountedRenderer {
        &self.renderer
    }

    /// Series after filter and sort, in display order.
    pub fn visible(&self) -> &[Series] {
        &self.visible
    }

    /// Data loaded for the logs page.
    pub fn logs(&self) -> &LogsData {
        &self.logs
    }

    /// Underlying terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Current page body state.
    pub fn page_state(&self) -> PageState {
        PageState::from_library(&self.library, self.visible.len())
    }

    /// Jump targets for the committed items, sort key, and direction.
    pub fn jump_targets(&mut self) -> &[JumpTarget] {
        let sort = &self.app_state.sort;
        self.jump_cache
            .get_or_compute(&self.visible, &sort.key, sort.direction)
    }

    /// How many times the jump targets were rebuilt.
    pub fn jump_computations(&self) -> usize {
        self.jump_cache.computations()
    }

    /// Run deferred work. Returns `true` if anything changed.
    pub fn run_pending_tasks(&mut self) -> bool {
        if !self.refresh_pending {
            return false;
        }
        self.refresh_pending = false;
        let ok = self.library.refresh();
        self.app_state.is_refreshing_series = false;
        info!(ok, count = self.library.items().len(), "Series library refreshed");
        self.refresh_visible();
        true
    }

    /// Timer tick. Returns `true` if a redraw is needed.
    pub fn tick(&mut self) -> bool {
        if self.app_state.is_rss_sync_executing {
            self.app_state.is_rss_sync_executing = false;
            info!("RSS sync finished");
            return true;
        }
        false
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        // Ctrl+C always quits, even inside a modal
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.app_state.poster_options.is_open {
            self.handle_poster_options_key(key);
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        match action {
            KeyAction::Quit => return true,
            KeyAction::ShowIndex => self.app_state.show_index(),
            KeyAction::ShowLogs => self.show_logs(LogsView::Table),
            _ => match self.app_state.page {
                Page::SeriesIndex => self.handle_index_action(action),
                Page::Logs(view) => self.handle_logs_action(action, view),
            },
        }
        false
    }

    fn handle_poster_options_key(&mut self, key: KeyEvent) {
        let modal = &mut self.app_state.poster_options;
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('o') => modal.close(),
            KeyCode::Char('z') => modal.cycle_size(),
            KeyCode::Char('t') => modal.toggle_title(),
            _ => return,
        }
        self.renderer.set_poster_options(modal.options);
    }

    fn handle_index_action(&mut self, action: KeyAction) {
        if let Some(command) = command_for_action(&self.app_state, action) {
            if apply_command(&mut self.app_state, command) {
                self.remount_if_needed();
                self.refresh_visible();
            }
            return;
        }

        match action {
            KeyAction::PosterOptions => {
                self.app_state.poster_options.open(self.app_state.view);
            }
            KeyAction::RefreshSeries => self.start_refresh(),
            KeyAction::RssSync => {
                info!("RSS sync started");
                self.app_state.is_rss_sync_executing = true;
            }
            KeyAction::CycleFocus => {
                let count = self.jump_bar_len();
                self.app_state.toggle_jump_bar_focus(count);
            }
            KeyAction::Back => self.app_state.focus = IndexFocus::Content,
            _ => match self.app_state.focus {
                IndexFocus::JumpBar => self.handle_jump_bar_action(action),
                IndexFocus::Content => {
                    if let Some(movement) = scroll_move(action) {
                        self.renderer.navigate(movement);
                    }
                }
            },
        }
    }

    fn handle_jump_bar_action(&mut self, action: KeyAction) {
        let count = self.jump_bar_len();
        match action {
            KeyAction::ScrollUp | KeyAction::ScrollLeft => self.app_state.move_jump_bar(-1, count),
            KeyAction::ScrollDown | KeyAction::ScrollRight => self.app_state.move_jump_bar(1, count),
            KeyAction::ScrollToTop => self.app_state.jump_bar_selected = 0,
            KeyAction::ScrollToBottom => self.app_state.jump_bar_selected = count.saturating_sub(1),
            KeyAction::Activate => {
                let targets = self.jump_targets().to_vec();
                if let Some(target) = self.app_state.selected_jump_target(&targets) {
                    self.press_jump(target);
                }
            }
            _ => {}
        }
    }

    /// Forward a jump-bar press to the mounted renderer. Nothing is
    /// mounted unless the page is loaded.
    pub fn press_jump(&mut self, target: JumpTarget) -> bool {
        let loaded = self.page_state().is_loaded();
        let renderer = loaded.then_some(&mut self.renderer as &mut dyn Scrollable);
        JumpDispatcher::new(renderer).dispatch(target)
    }

    fn handle_logs_action(&mut self, action: KeyAction, view: LogsView) {
        match action {
            KeyAction::CycleFocus => self.show_logs(view.next()),
            KeyAction::Back => self.app_state.show_index(),
            KeyAction::ScrollUp => self.logs.scroll_by(-1, view),
            KeyAction::ScrollDown => self.logs.scroll_by(1, view),
            KeyAction::PageUp => self.logs.scroll_by(-10, view),
            KeyAction::PageDown => self.logs.scroll_by(10, view),
            KeyAction::ScrollToTop => self.logs.scroll = 0,
            KeyAction::ScrollToBottom => self.logs.scroll_to_end(view),
            KeyAction::RefreshSeries => self.show_logs(view),
            _ => {}
        }
    }

    /// Switch to a logs sub-view and (re)load its data.
    pub fn show_logs(&mut self, view: LogsView) {
        self.app_state.show_logs(view);
        self.logs = LogsData::load(view, &self.log_path);
    }

    /// Navigate to a logs route. Unknown routes are ignored.
    pub fn navigate(&mut self, path: &str) -> bool {
        if !self.app_state.navigate(path) {
            debug!(path, "No logs route matched");
            return false;
        }
        if let Page::Logs(view) = self.app_state.page {
            self.logs = LogsData::load(view, &self.log_path);
        }
        true
    }

    fn start_refresh(&mut self) {
        if self.refresh_pending {
            return;
        }
        self.library.begin_fetch();
        self.app_state.is_refreshing_series = true;
        self.refresh_pending = true;
    }

    fn remount_if_needed(&mut self) {
        let kind = select(self.app_state.view);
        if kind != self.renderer.kind() {
            debug!(?kind, "Mounting renderer");
            self.renderer = kind.mount(self.app_state.poster_options.options);
        }
    }

    fn refresh_visible(&mut self) {
        self.visible = visible_series(
            self.library.items(),
            self.app_state.filter,
            &self.app_state.sort,
        );
        self.renderer.sync(&self.visible);
        let count = self.jump_bar_len();
        if self.app_state.jump_bar_selected >= count {
            self.app_state.jump_bar_selected = count.saturating_sub(1);
        }
        if count == 0 {
            self.app_state.focus = IndexFocus::Content;
        }
    }

    /// Jump-bar entries currently shown, zero unless the page is loaded.
    fn jump_bar_len(&mut self) -> usize {
        let page_state = self.page_state();
        let count = self.jump_targets().len();
        if page_state.shows_jump_bar(count) {
            count
        } else {
            0
        }
    }

    /// Render one frame of the current page.
    pub fn draw(&mut self) -> Result<(), AppError> {
        let Self {
            terminal,
            app_state,
            library,
            jump_cache,
            renderer,
            visible,
            logs,
            ..
        } = self;

        // Targets are brought up to date before anything renders them.
        let targets = jump_cache.get_or_compute(visible, &app_state.sort.key, app_state.sort.direction);
        let ctx = IndexContext {
            state: app_state,
            page_state: PageState::from_library(library, visible.len()),
            visible,
            targets,
            error: library.error(),
            library_has_items: !library.items().is_empty(),
        };

        terminal.draw(|frame| match ctx.state.page {
            Page::SeriesIndex => render_index(frame, frame.area(), &ctx, renderer),
            Page::Logs(view) => render_logs(frame, frame.area(), view, logs),
        })?;
        Ok(())
    }
}

/// Map a navigation action onto a renderer movement.
fn scroll_move(action: KeyAction) -> Option<ScrollMove> {
    Some(match action {
        KeyAction::ScrollUp => ScrollMove::Up,
        KeyAction::ScrollDown => ScrollMove::Down,
        KeyAction::ScrollLeft => ScrollMove::Left,
        KeyAction::ScrollRight => ScrollMove::Right,
        KeyAction::PageUp => ScrollMove::PageUp,
        KeyAction::PageDown => ScrollMove::PageDown,
        KeyAction::ScrollToTop => ScrollMove::Top,
        KeyAction::ScrollToBottom => ScrollMove::Bottom,
        _ => return None,
    })
}

/// Run the TUI with a resolved configuration.
///
/// With `start_route`, the app opens on that logs route instead of the
/// series index.
pub fn run_with_config(config: &ResolvedConfig, start_route: Option<&str>) -> Result<(), AppError> {
    let mut app = TuiApp::new(config)?;
    if let Some(path) = start_route {
        app.navigate(path);
    }

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), AppError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_app_tests.rs"]
mod tests;
