//! Runtime: unified event loop and input routing for the TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode).
//! - Drive a single event loop that handles input, identity calls and
//!   animation ticks.
//! - Route input to the main view and execute returned `Effect`s.
//! - Render only after something changed.
//!
//! Event Loop Strategy
//! - A dedicated input task polls `crossterm` and forwards events over a
//!   channel; mouse moves are throttled to one per 16 ms.
//! - Smart ticking: fast interval (100 ms) while something animates (spinner,
//!   skeleton gate, carousel, counter, pending identity call); long interval
//!   (5 s) when idle.
//! - Navigation effects are applied first so later effects in the same batch
//!   see the new screen.
//!
//! Entry Point
//! - `run_app(shell, config, identity, preferences)` is called from `lib::run`
//!   and performs setup, event processing, and teardown.
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::{StreamExt, stream::FuturesUnordered};
use rat_focus::FocusBuilder;
use ratatui::{Terminal, prelude::*};
use tokio::task::JoinHandle;
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, info, warn};
use uikit_identity::IdentityProvider;
use uikit_types::{Effect, ExecOutcome, Msg};
use uikit_util::{AppConfig, UserPreferences};

use crate::app::{App, Shell};
use crate::cmd;
use crate::ui::components::component::Component;
use crate::ui::main_component::MainView;

/// Spawn a task that polls terminal input and forwards `crossterm` events
/// over a Tokio channel.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);
    let mut last_mouse_move = Instant::now();

    tokio::task::spawn_blocking(move || {
        let sixteen_ms = Duration::from_millis(16);
        loop {
            match event::poll(sixteen_ms) {
                Ok(false) => {
                    if sender.is_closed() {
                        break;
                    }
                }
                Ok(true) => match event::read() {
                    Ok(event) => {
                        let is_mouse_move = event.as_mouse_event().is_some_and(|e| e.kind == MouseEventKind::Moved);
                        if is_mouse_move {
                            if last_mouse_move.elapsed() < sixteen_ms {
                                continue;
                            }
                            last_mouse_move = Instant::now();
                        }
                        if let Err(e) = sender.blocking_send(event) {
                            debug!("Input channel closed: {}", e);
                            break;
                        }
                    }
                    Err(e) => {
                        warn!("Failed to read event: {}", e);
                        break;
                    }
                },
                Err(e) => {
                    warn!("Failed to poll for events: {}", e);
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).context("enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Rebuilds the focus tree, then draws the main view.
fn render(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    // Rebuild focus just before rendering so structure changes are reflected
    let old_focus = std::mem::take(&mut app.focus);
    app.focus = FocusBuilder::rebuild_for(app, Some(old_focus));
    if app.focus.focused().is_none() {
        main_view.restore_focus(app);
    }
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

/// Route one raw input event to the main view.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, Msg::Resize(width, height)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

fn is_quit(event: &Event) -> bool {
    matches!(event, Event::Key(key) if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Entry point for the TUI runtime: sets up the terminal, spawns the event
/// producer, runs the async event loop, and performs cleanup on exit.
pub async fn run_app(
    shell: Shell,
    config: AppConfig,
    identity: Arc<dyn IdentityProvider>,
    preferences: Arc<UserPreferences>,
) -> Result<()> {
    let mut input_receiver = spawn_input_thread();
    let mut main_view = MainView::default();
    let mut app = App::new(shell, &config, identity, preferences);
    info!(?shell, path = %config.initial_path, "starting ui");

    let mut terminal = setup_terminal()?;

    let mut pending_execs: FuturesUnordered<JoinHandle<ExecOutcome>> = FuturesUnordered::new();
    let mut effects: Vec<Effect> = Vec::with_capacity(5);
    // The guard stays in its loading state until the provider answers.
    if shell == Shell::Dashboard {
        effects.push(Effect::LoadSession);
    }

    // Ticking strategy: fast while animating, very slow when idle.
    let fast_interval = Duration::from_millis(100);
    let idle_interval = Duration::from_millis(5000);
    let mut current_interval = fast_interval;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    render(&mut terminal, &mut app, &mut main_view)?;

    loop {
        let needs_animation = app.needs_animation() || !effects.is_empty();
        let target_interval = if needs_animation { fast_interval } else { idle_interval };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = time::interval(current_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        }
        let mut needs_render = false;
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    // Input channel closed; shut down cleanly.
                    break;
                };
                if is_quit(&event) {
                    break;
                }
                effects.extend(handle_input_event(&mut app, &mut main_view, event));
                needs_render = true;
            }

            _ = ticker.tick() => {
                effects.extend(main_view.handle_message(&mut app, Msg::Tick));
                needs_render = needs_animation;
            }

            Some(joined) = pending_execs.next(), if !pending_execs.is_empty() => {
                let outcome = joined.unwrap_or_else(|error| ExecOutcome::Log(format!("Execution task failed: {error}")));
                effects.extend(apply_outcome(&mut app, &mut main_view, outcome));
                app.executing = !pending_execs.is_empty();
                if !app.executing {
                    app.throbber_idx = 0;
                }
                needs_render = true;
            }

            _ = signal::ctrl_c() => { break; }
        }

        // Effects can produce more effects (a message that navigates, for
        // example); drain until the batch settles.
        while !effects.is_empty() {
            let mut effects_to_process = std::mem::take(&mut effects);
            handle_navigation_effects(&mut app, &mut effects_to_process);
            process_effects(&mut app, &mut main_view, effects_to_process, &mut pending_execs, &mut effects);
            needs_render = true;
        }

        if needs_render {
            render(&mut terminal, &mut app, &mut main_view)?;
        }
    }

    cleanup_terminal(&mut terminal)?;
    info!("ui stopped");
    Ok(())
}

/// Applies `Effect::Navigate` in order and removes it from the batch.
fn handle_navigation_effects(app: &mut App, effects: &mut Vec<Effect>) {
    let navigation_effects = effects
        .extract_if(0.., |effect| matches!(effect, Effect::Navigate(_)))
        .collect::<Vec<Effect>>();

    for effect in navigation_effects {
        if let Effect::Navigate(path) = effect {
            let screen = app.navigate(&path);
            debug!(%path, ?screen, "navigation applied");
        }
    }
}

fn apply_outcome(app: &mut App, main_view: &mut MainView, outcome: ExecOutcome) -> Vec<Effect> {
    match outcome {
        ExecOutcome::Message(msg) => main_view.handle_message(app, msg),
        ExecOutcome::Log(text) => {
            info!("{text}");
            Vec::new()
        }
    }
}

fn process_effects(
    app: &mut App,
    main_view: &mut MainView,
    effects: Vec<Effect>,
    pending_execs: &mut FuturesUnordered<JoinHandle<ExecOutcome>>,
    effects_out: &mut Vec<Effect>,
) {
    if effects.is_empty() {
        return;
    }

    let command_batch = cmd::run_from_effects(app, effects);
    if !command_batch.pending.is_empty() {
        if !app.executing {
            app.throbber_idx = 0;
        }
        pending_execs.extend(command_batch.pending);
        app.executing = true;
    }

    for outcome in command_batch.immediate {
        effects_out.extend(apply_outcome(app, main_view, outcome));
    }
}
