//! Runtime: event loop and input routing for the wizard.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode,
//!   bracketed paste, mouse capture).
//! - Drive a single event loop that handles input and the two deferred
//!   actions (post-commit focus shift, paste-notice auto-clear).
//! - Route events to the active screen and execute returned `Effect`s.
//! - Render only when something changed.
//!
//! A dedicated input task blocks on `crossterm::event::read()` and forwards
//! events over a channel; keeping `poll()` and `read()` on one task avoids
//! lost or delayed events in some terminals. The ticker runs fast (100 ms)
//! only while deferred actions are pending and slow (5 s) when idle.

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture, Event, KeyCode,
        KeyModifiers, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use mnemo_types::{Effect, FlowOutcome, Msg};
use rat_focus::FocusBuilder;
use ratatui::{Terminal, prelude::*};
use std::rc::Rc;
use std::time::{Duration, Instant};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};

use crate::RestoreOptions;
use crate::app::App;
use crate::ui::main_component::MainView;
use crate::ui::scheduler::{DeferredAction, FOCUS_SHIFT_DELAY, PASTE_NOTICE_TTL, TimerScheduler};

/// Spawn a dedicated input task that blocks on terminal input and forwards
/// `crossterm` events over a Tokio channel.
async fn spawn_input_task() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);

    tokio::spawn(async move {
        let sixteen_ms = Duration::from_millis(16);
        loop {
            match event::poll(sixteen_ms) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        // Hover moves carry no meaning for the wizard.
                        if matches!(&event, Event::Mouse(mouse) if mouse.kind == MouseEventKind::Moved) {
                            continue;
                        }
                        if let Err(error) = sender.send(event).await {
                            tracing::warn!("Failed to send event: {}", error);
                            break;
                        }
                    }
                    Err(error) => {
                        tracing::warn!("Failed to read event: {}", error);
                        break;
                    }
                },
                Ok(false) => {}
                Err(error) => {
                    tracing::warn!("Failed to poll for events: {}", error);
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
///
/// Bracketed paste is enabled so a terminal paste arrives as one
/// `Event::Paste` payload instead of a keystroke burst.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableBracketedPaste, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Renders a frame, rebuilding focus first so structure changes (slot grid
/// appearing or vanishing) are reflected.
fn render(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    let old_focus = std::mem::take(&mut app.focus);
    app.focus = Rc::new(FocusBuilder::rebuild_for(app, Some(Rc::unwrap_or_clone(old_focus))));
    if app.focus.focused().is_none() {
        app.focus.first();
    }
    terminal.draw(|frame| main_view.render(frame, app))?;
    Ok(())
}

/// Handle raw crossterm input events and update `App`/components.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Paste(text) => main_view.handle_message(app, &Msg::PasteCaptured(text)),
        Event::Resize(width, height) => main_view.handle_message(app, &Msg::Resize(width, height)),
        Event::FocusGained | Event::FocusLost => Vec::new(),
    }
}

/// Entry point for the wizard runtime: sets up the terminal, spawns the
/// event producer, runs the event loop until the flow terminates, and
/// performs cleanup on exit.
pub async fn run_app(options: RestoreOptions) -> Result<FlowOutcome> {
    let mut terminal = setup_terminal()?;
    let result = run_event_loop(&mut terminal, options).await;
    cleanup_terminal(&mut terminal)?;
    result
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    options: RestoreOptions,
) -> Result<FlowOutcome> {
    let mut input_receiver = spawn_input_task().await;
    let mut main_view = MainView::new();
    let mut app = App::new(&options);
    let mut scheduler = TimerScheduler::new();

    let mut effects: Vec<Effect> = Vec::with_capacity(5);

    // Ticking strategy: fast while deferred actions are pending, slow otherwise.
    let fast_interval = Duration::from_millis(100);
    let idle_interval = Duration::from_millis(5000);
    let mut current_interval = idle_interval;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    app.focus = Rc::new(FocusBuilder::build_for(&app));
    app.focus.first();
    render(terminal, &mut app, &mut main_view)?;

    let outcome = loop {
        let needs_timer = scheduler.has_pending() || !effects.is_empty();
        let target_interval = if needs_timer { fast_interval } else { idle_interval };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = time::interval(current_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        }
        let mut needs_render = false;

        tokio::select! {
            maybe_event = input_receiver.recv() => {
                match maybe_event {
                    Some(event) => {
                        if let Event::Key(key_event) = &event
                            && key_event.code == KeyCode::Char('c')
                            && key_event.modifiers.contains(KeyModifiers::CONTROL)
                        {
                            break FlowOutcome::Cancelled;
                        }
                        effects.extend(handle_input_event(&mut app, &mut main_view, event));
                        needs_render = true;
                    }
                    // Input channel closed; shut down cleanly.
                    None => break FlowOutcome::Cancelled,
                }
            }

            _ = ticker.tick() => {}

            _ = signal::ctrl_c() => break FlowOutcome::Cancelled,
        }

        for action in scheduler.take_due(Instant::now()) {
            needs_render = true;
            match action {
                // Best effort: if the target no longer exists this lands on
                // whatever the current screen offers first.
                DeferredAction::FocusFirstSlot => app.focus.first(),
                DeferredAction::ClearPasteNotice => {
                    effects.extend(main_view.handle_message(&mut app, &Msg::PasteNoticeExpired));
                }
            }
        }

        if !effects.is_empty() {
            needs_render = true;
            // Move effects out of their Vec so effects raised while processing
            // queue up for the next iteration.
            let mut effects_to_process = Vec::with_capacity(effects.len());
            effects_to_process.append(&mut effects);
            process_effects(&mut app, &mut main_view, &mut scheduler, effects_to_process, &mut effects);
        }

        if let Some(outcome) = app.outcome.take() {
            break outcome;
        }

        if needs_render {
            render(terminal, &mut app, &mut main_view)?;
        }
    };

    Ok(outcome)
}

fn process_effects(
    app: &mut App,
    main_view: &mut MainView,
    scheduler: &mut TimerScheduler,
    effects: Vec<Effect>,
    effects_out: &mut Vec<Effect>,
) {
    for effect in effects {
        match effect {
            Effect::SwitchTo(route) => main_view.set_current_route(app, route),
            Effect::FocusFirstSlot => app.focus.first(),
            Effect::ScheduleFocusFirstSlot => scheduler.schedule(DeferredAction::FocusFirstSlot, FOCUS_SHIFT_DELAY),
            Effect::SchedulePasteNoticeClear => scheduler.schedule(DeferredAction::ClearPasteNotice, PASTE_NOTICE_TTL),
            Effect::ClipboardPasteRequested => {
                match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.get_text()) {
                    Ok(text) => effects_out.extend(main_view.handle_message(app, &Msg::PasteCaptured(text))),
                    Err(error) => tracing::warn!("Clipboard read failed: {}", error),
                }
            }
            Effect::ConfirmPhrase(words) => app.outcome = Some(FlowOutcome::Confirmed { words }),
            Effect::CancelRestore => app.outcome = Some(FlowOutcome::Cancelled),
        }
    }
}
