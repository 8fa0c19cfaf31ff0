//! # Terminal Front End
//!
//! Owns the terminal for the lifetime of the app: draws the page, maps
//! crossterm input onto `core::Action`, and runs whatever `Effect` the
//! reducer hands back. Nothing outside this module touches ratatui or
//! crossterm.
//!
//! ## Frame pacing
//!
//! While the spinner or the `Copied!` label is showing, the loop wakes
//! every ~80ms to animate. Otherwise it blocks for up to 500ms and only
//! draws after input, a finished search or a resize.
//!
//! ## Side Effects
//!
//! `update()` never does I/O. It returns an `Effect` and `execute_effect`
//! performs it here: spawning the search task, writing the feedback log and
//! theme preference, and talking to the clipboard.

mod component;
mod components;
mod event;
pub mod markdown;
pub mod theme;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::feedback;
use crate::core::state::App;
use crate::core::storage::Store;
use crate::core::theme::Theme;
use crate::inference::{AnswerProvider, GeminiProvider, SearchError};
use crate::tui::component::EventHandler;
use crate::tui::components::{ResultViewState, SearchBar, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::theme::Palette;

/// How long the copy button reads `Copied!`.
const COPIED_DURATION: Duration = Duration::from_millis(2500);

/// Widget state that lives only in the terminal front end
pub struct TuiState {
    pub search_bar: SearchBar,
    pub result_view: ResultViewState,
    /// Set after a successful copy; further copies are ignored until it passes.
    pub copied_until: Option<Instant>,
    /// Opened lazily on first copy and kept so the selection outlives the call.
    clipboard: Option<arboard::Clipboard>,
}

impl TuiState {
    pub fn new(suggestions: Vec<String>, theme: Theme) -> Self {
        Self {
            search_bar: SearchBar::new(suggestions, Palette::for_theme(theme)),
            result_view: ResultViewState::new(),
            copied_until: None,
            clipboard: None,
        }
    }

    pub fn is_copied(&self) -> bool {
        self.copied_until.is_some_and(|until| Instant::now() < until)
    }

    fn copy_to_clipboard(&mut self, text: &str) {
        if self.is_copied() {
            return;
        }
        if self.clipboard.is_none() {
            match arboard::Clipboard::new() {
                Ok(clipboard) => self.clipboard = Some(clipboard),
                Err(e) => {
                    warn!("Clipboard unavailable: {}", e);
                    return;
                }
            }
        }
        let Some(clipboard) = self.clipboard.as_mut() else {
            return;
        };
        match clipboard.set_text(text.to_string()) {
            Ok(()) => {
                info!("Copied {} chars to clipboard", text.len());
                self.copied_until = Some(Instant::now() + COPIED_DURATION);
            }
            Err(e) => warn!("Failed to copy text: {}", e),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// Build the Gemini provider from a resolved config.
pub fn build_provider(config: &ResolvedConfig) -> Arc<dyn AnswerProvider> {
    Arc::new(
        GeminiProvider::new(
            config.api_key.clone(),
            Some(config.base_url.clone()),
            Some(config.model_name.clone()),
        )
        .with_framework(config.framework.clone()),
    )
}

/// Everything `execute_effect` needs besides the app itself.
struct EffectContext<'a> {
    store: Option<&'a Store>,
    tx: &'a mpsc::Sender<Action>,
}

/// Puts the default query in the search bar and submits it once.
fn start_initial_search(app: &mut App, tui: &mut TuiState) -> Effect {
    let query = app.default_query.clone();
    tui.search_bar.set_text(&query);
    update(app, Action::Search(query))
}

pub fn run(config: ResolvedConfig, initial_search: bool) -> std::io::Result<()> {
    let store = match Store::open_default() {
        Ok(store) => {
            info!("Preference store at {}", store.dir().display());
            Some(store)
        }
        Err(e) => {
            warn!("Preference store unavailable, nothing will persist: {}", e);
            None
        }
    };
    let theme = store.as_ref().map(Theme::load).unwrap_or_else(|| {
        Theme::resolve(None, crate::core::theme::os_prefers_dark())
    });

    let provider = build_provider(&config);
    let mut app = App::from_config(provider, theme, &config);
    let mut tui = TuiState::new(app.suggestions.clone(), app.theme);

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let ctx = EffectContext {
        store: store.as_ref(),
        tx: &tx,
    };

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    if initial_search {
        let effect = start_initial_search(&mut app, &mut tui);
        execute_effect(effect, &mut app, &mut tui, &ctx);
    }

    // Animation timer
    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame
    let mut copied_shown = false;

    loop {
        let copied = tui.is_copied();
        let animating = app.is_loading || copied;
        // Redraw once more when the Copied! label expires
        if animating || copied != copied_shown {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            copied_shown = copied;
            needs_redraw = false;
        }

        // Wake often only while something animates
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Handle everything already queued before drawing again
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let action = match event {
                TuiEvent::Resize => continue,
                TuiEvent::ForceQuit | TuiEvent::Escape => Some(Action::Quit),
                TuiEvent::ToggleTheme => Some(Action::ToggleTheme),
                TuiEvent::CopyAnswer => Some(Action::CopyAnswer),
                TuiEvent::FeedbackYes => Some(Action::Feedback(feedback::Vote::Yes)),
                TuiEvent::FeedbackNo => Some(Action::Feedback(feedback::Vote::No)),
                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown => {
                    tui.result_view.handle_event(&event);
                    None
                }
                // SearchBar handles everything else (and ignores it while loading)
                _ => match tui.search_bar.handle_event(&event) {
                    Some(SearchEvent::Submit(query)) => Some(Action::Search(query)),
                    Some(SearchEvent::ContentChanged) | None => None,
                },
            };

            if let Some(action) = action {
                let effect = update(&mut app, action);
                if execute_effect(effect, &mut app, &mut tui, &ctx) {
                    should_quit = true;
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (search results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let answered = matches!(action, Action::AnswerReady { .. });
            let effect = update(&mut app, action);
            if answered {
                tui.result_view.reset();
            }
            execute_effect(effect, &mut app, &mut tui, &ctx);
        }
    }

    ratatui::restore();
    Ok(())
}

/// Performs the I/O an `Effect` asks for. Returns true when the app should quit.
fn execute_effect(effect: Effect, app: &mut App, tui: &mut TuiState, ctx: &EffectContext<'_>) -> bool {
    match effect {
        Effect::None => {}
        Effect::Quit => return true,
        Effect::SpawnSearch { query, generation } => {
            // A new answer gets a fresh copy button and scroll position
            tui.copied_until = None;
            tui.result_view.reset();
            spawn_search(app.provider.clone(), query, generation, ctx.tx.clone());
        }
        Effect::PersistFeedback { query, vote } => match ctx.store {
            Some(store) => {
                if let Err(e) = feedback::record_feedback(store, &query, vote) {
                    warn!("Failed to save feedback: {}", e);
                }
            }
            None => warn!("Feedback not saved: no preference store"),
        },
        Effect::PersistTheme(theme) => {
            if let Some(store) = ctx.store {
                theme.persist(store);
            }
            app.status_message = format!("Theme: {theme}");
        }
        Effect::CopyToClipboard(text) => tui.copy_to_clipboard(&text),
    }
    false
}

/// Runs one search on the tokio runtime and reports back as `AnswerReady`.
///
/// The provider call runs in its own task so a panic inside it still
/// produces an answer (`SearchError::Unknown`) instead of a stuck spinner.
fn spawn_search(
    provider: Arc<dyn AnswerProvider>,
    query: String,
    generation: u64,
    tx: mpsc::Sender<Action>,
) {
    info!(
        "Spawning search (generation {}) with {}",
        generation,
        provider.name()
    );
    tokio::spawn(async move {
        let task = tokio::spawn(async move { provider.fetch_answer(&query).await });
        let outcome = match task.await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Search task failed: {}", e);
                Err(SearchError::Unknown)
            }
        };
        if tx
            .send(Action::AnswerReady {
                generation,
                outcome,
            })
            .is_err()
        {
            warn!("Failed to send answer for generation {}: receiver dropped", generation);
        }
    });
}
