use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};

use crate::{
    catalog::ACTIVITIES,
    constants::{DELAY_SETTINGS, TIME_SETTINGS},
    domain::{Activity, Preferences, Suggester, suggestion_delay},
    search::SearchIndex,
    storage,
};

mod event_handlers;
mod render_views;
mod search_modal_view;
mod search_state;
mod ui_helpers;
mod view_style;

use search_state::SearchState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum UiMode {
    Setup,
    Result,
    SearchModal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SetupColumn {
    Age,
    Gender,
}

/// A pick waiting behind the artificial "thinking" delay. The activity is
/// already decided; only the reveal is deferred, so nothing shared is
/// written during the wait.
struct PendingPick {
    activity: &'static Activity,
    lucky: bool,
    reveal_at: Instant,
}

struct App {
    preferences: Preferences,
    suggester: Suggester,
    index: SearchIndex<'static>,
    rng: ThreadRng,
    ui_mode: UiMode,
    setup_column: SetupColumn,
    age_index: usize,
    gender_index: usize,
    current: Option<&'static Activity>,
    lucky: bool,
    pending: Option<PendingPick>,
    search: SearchState,
    render_needed: bool,
}

impl App {
    fn new() -> Self {
        let preferences = storage::load_preferences(&storage::get_preferences_path());

        Self {
            preferences,
            suggester: Suggester::new(),
            index: SearchIndex::build(ACTIVITIES),
            rng: rand::thread_rng(),
            ui_mode: UiMode::Setup,
            setup_column: SetupColumn::Age,
            age_index: 0,
            gender_index: 0,
            current: None,
            lucky: false,
            pending: None,
            search: SearchState::new(),
            render_needed: true,
        }
    }

    fn request_suggestion(&mut self, lucky: bool) {
        let delay = suggestion_delay(&mut self.rng);
        let activity = self
            .suggester
            .suggest(&mut self.rng, ACTIVITIES, &self.preferences, lucky);

        self.pending = Some(PendingPick {
            activity,
            lucky,
            reveal_at: Instant::now() + delay,
        });
        self.ui_mode = UiMode::Result;
        self.render_needed = true;
    }

    fn jump_to_activity(&mut self, activity: &'static Activity) {
        self.suggester.set_previous(activity.id);
        self.pending = Some(PendingPick {
            activity,
            lucky: self.lucky,
            reveal_at: Instant::now() + Duration::from_millis(DELAY_SETTINGS.jump_ms),
        });
        self.render_needed = true;
    }

    /// Promote a pending pick once its reveal time has passed.
    fn reveal_pending(&mut self) {
        match self.pending.take() {
            Some(pending) if pending.reveal_at <= Instant::now() => {
                self.current = Some(pending.activity);
                self.lucky = pending.lucky;
                self.ui_mode = UiMode::Result;
                self.render_needed = true;
            }
            other => self.pending = other,
        }
    }

    fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    fn back_to_setup(&mut self) {
        // Preferences survive; only the shown pick is discarded.
        self.current = None;
        self.lucky = false;
        self.ui_mode = UiMode::Setup;
        self.render_needed = true;
    }

    fn open_search(&mut self) {
        self.ui_mode = UiMode::SearchModal;
        self.search.clear();
        self.render_needed = true;
    }

    fn close_search(&mut self) {
        self.search.clear();
        self.ui_mode = if self.current.is_some() {
            UiMode::Result
        } else {
            UiMode::Setup
        };
        self.render_needed = true;
    }

    fn in_search_modal(&self) -> bool {
        matches!(self.ui_mode, UiMode::SearchModal)
    }

    fn modal_rect(&self, terminal_size: Rect) -> Rect {
        let target_width = terminal_size.width.saturating_mul(2) / 3;
        let target_height = (terminal_size.height.saturating_mul(2) / 3).max(10);

        let max_width = terminal_size.width.saturating_sub(2).max(1);
        let max_height = terminal_size.height.saturating_sub(2).max(1);

        let modal_width = target_width.clamp(1, max_width);
        let modal_height = target_height.clamp(1, max_height);

        let modal_x = (terminal_size.width.saturating_sub(modal_width)) / 2;
        let modal_y = (terminal_size.height.saturating_sub(modal_height)) / 2;

        Rect::new(modal_x, modal_y, modal_width, modal_height)
    }
}

pub fn run_ui() -> Result<(), io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    app.sync_setup_cursor();

    let render_rate = Duration::from_millis(1000 / TIME_SETTINGS.target_fps);
    let mut last_render = Instant::now();

    loop {
        app.reveal_pending();

        if app.render_needed && last_render.elapsed() >= render_rate {
            terminal.draw(|f| {
                app.draw_frame(f);
            })?;
            app.render_needed = false;
            last_render = Instant::now();
        }

        if event::poll(Duration::from_millis(TIME_SETTINGS.poll_ms))?
            && let Event::Key(key) = event::read()?
            && app.handle_key(key)
        {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
