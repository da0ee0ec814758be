//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and turns terminal input into `core` actions.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event routing
//!
//! Enter and the submit button never act on their own. Each one becomes a
//! `gate::Trigger`, and `gate::decide` answers Submit, InsertNewline or
//! Reject given the session's phase. Every other key goes to the input box
//! (editing) or the transcript (scrolling).
//!
//! ## Request lifecycle
//!
//! An accepted submit returns `Effect::SpawnRequest`. The loop spawns one
//! tokio task that calls the answer service and sends back exactly one
//! `Action::Settled` over an mpsc channel. The loop drains that channel
//! between frames, so settlement is applied on the UI thread like any
//! other action.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (request pending, transcript gliding to the bottom):
//!   draws every ~33ms.
//! - **Idle**: sleeps up to 500ms and redraws only on input, resize or a
//!   settlement.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::client::{AnswerClient, HttpAnswerClient};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::gate::{Decision, Trigger, decide};
use crate::core::state::Session;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, MessageListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const ANIMATION_FRAME: Duration = Duration::from_millis(33);
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of the session)
pub struct TuiState {
    pub message_list: MessageListState,
    pub input_box: InputBox,
    pub title: String,
    pub endpoint: String,
}

impl TuiState {
    pub fn new(title: String, endpoint: String, placeholder: String) -> Self {
        Self {
            message_list: MessageListState::new(),
            input_box: InputBox::new(placeholder),
            title,
            endpoint,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol lets Shift+Enter arrive as a modified Enter.
        // Terminals without it ignore the sequence; Ctrl+J still works there.
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

/// What the loop must do after routing one event.
#[derive(Debug, PartialEq)]
enum Outcome {
    Continue,
    Spawn(String),
    Quit,
}

/// Route one terminal event. Pure with respect to I/O: spawning and
/// quitting are reported back as an `Outcome`.
fn route_event(
    session: &mut Session,
    tui: &mut TuiState,
    event: TuiEvent,
    button_hit: impl Fn(u16, u16) -> bool,
) -> Outcome {
    match event {
        TuiEvent::Resize => Outcome::Continue,
        TuiEvent::Quit => match update(session, Action::Quit) {
            Effect::Quit => Outcome::Quit,
            _ => Outcome::Continue,
        },
        TuiEvent::Enter { modifier } => apply_trigger(
            session,
            tui,
            Trigger::SubmitKey {
                modifier_held: modifier,
            },
        ),
        TuiEvent::SubmitControl => apply_trigger(session, tui, Trigger::SubmitControl),
        TuiEvent::MouseClick(column, row) if button_hit(column, row) => {
            apply_trigger(session, tui, Trigger::SubmitControl)
        }
        TuiEvent::MouseClick(..) => Outcome::Continue,
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.message_list.handle_event(&event);
            Outcome::Continue
        }
        other => {
            if let Some(InputEvent::ContentChanged) = tui.input_box.handle_event(&other) {
                update(session, Action::DraftChanged(tui.input_box.text().to_string()));
            }
            Outcome::Continue
        }
    }
}

fn apply_trigger(session: &mut Session, tui: &mut TuiState, trigger: Trigger) -> Outcome {
    match decide(trigger, session.is_pending()) {
        Decision::InsertNewline => {
            tui.input_box.insert_newline();
            update(session, Action::DraftChanged(tui.input_box.text().to_string()));
            Outcome::Continue
        }
        Decision::Reject => {
            debug!("Gate rejected {:?} while pending", trigger);
            Outcome::Continue
        }
        Decision::Submit => {
            let draft = session.draft().to_string();
            match update(session, Action::Submit(draft)) {
                Effect::SpawnRequest(question) => {
                    tui.input_box.clear();
                    Outcome::Spawn(question)
                }
                Effect::Quit => Outcome::Quit,
                Effect::None => Outcome::Continue,
            }
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let client: Arc<dyn AnswerClient> = Arc::new(HttpAnswerClient::new(config.endpoint.clone()));
    let mut session = Session::new();
    let mut tui = TuiState::new(config.title, config.endpoint, config.placeholder);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true;

    'event_loop: loop {
        let animating = session.is_pending() || tui.message_list.is_animating();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &session, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating { ANIMATION_FRAME } else { IDLE_POLL };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        let frame_area = terminal.get_frame().area();
        let input_height = tui.input_box.calculate_height(frame_area.width);
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let hit = |column, row| ui::hit_test_button(column, row, frame_area, input_height);
            match route_event(&mut session, &mut tui, event, hit) {
                Outcome::Continue => {}
                Outcome::Spawn(question) => spawn_request(client.clone(), question, tx.clone()),
                Outcome::Quit => break 'event_loop,
            }
        }

        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if update(&mut session, action) == Effect::Quit {
                break 'event_loop;
            }
        }
    }

    info!(
        "Exiting with {} messages in history",
        session.history().len()
    );
    ratatui::restore();
    Ok(())
}

/// Ask `client` in the background and report the outcome as one `Action::Settled`.
fn spawn_request(client: Arc<dyn AnswerClient>, question: String, tx: mpsc::Sender<Action>) {
    info!("Spawning request to {}", client.name());
    tokio::spawn(async move {
        let started = Instant::now();
        let outcome = client.ask(&question).await;
        debug!(
            "Request settled in {}ms (ok={})",
            started.elapsed().as_millis(),
            outcome.is_ok()
        );
        if tx.send(Action::Settled(outcome)).is_err() {
            warn!("Failed to deliver settlement: receiver dropped");
        }
    });
}
