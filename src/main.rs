//! Weather record lookup TUI

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext, TaskKey,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};
use weather_lookup::action::Action;
use weather_lookup::api;
use weather_lookup::components::{Component, LookupDisplay, LookupDisplayProps};
use weather_lookup::effect::Effect;
use weather_lookup::reducer::reducer;
use weather_lookup::state::{AppState, SPINNER_TICK_MS};

/// Weather record lookup TUI
#[derive(Parser, Debug)]
#[command(name = "weather-lookup")]
#[command(about = "Look up stored weather records by request ID")]
struct Args {
    /// Base URL of the weather data backend
    #[arg(long, default_value = api::DEFAULT_BASE_URL)]
    base_url: String,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum LookupComponentId {
    Lookup,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum LookupContext {
    Main,
}

impl EventRoutingState<LookupComponentId, LookupContext> for AppState {
    fn focused(&self) -> Option<LookupComponentId> {
        Some(LookupComponentId::Lookup)
    }

    fn modal(&self) -> Option<LookupComponentId> {
        None
    }

    fn binding_context(&self, _id: LookupComponentId) -> LookupContext {
        LookupContext::Main
    }

    fn default_context(&self) -> LookupContext {
        LookupContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        base_url,
        debug: debug_args,
    } = Args::parse();

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(|| async { Ok::<AppState, io::Error>(AppState::default()) })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, base_url, replay_actions).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

struct LookupUi {
    display: LookupDisplay,
}

impl LookupUi {
    fn new() -> Self {
        Self {
            display: LookupDisplay::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<LookupComponentId>,
    ) {
        event_ctx.set_component_area(LookupComponentId::Lookup, area);

        let props = LookupDisplayProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.display.render(frame, area, props);
    }

    fn handle_lookup_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = LookupDisplayProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self
            .display
            .handle_event(event, props)
            .into_iter()
            .collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    base_url: String,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(LookupUi::new()));
    let mut bus: EventBus<AppState, Action, LookupComponentId, LookupContext> = EventBus::new();
    let keybindings: Keybindings<LookupContext> = Keybindings::new();

    let ui_lookup = Rc::clone(&ui);
    bus.register(LookupComponentId::Lookup, move |event, state| {
        ui_lookup
            .borrow_mut()
            .handle_lookup_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            None,
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(SPINNER_TICK_MS),
                    || Action::Tick,
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, &base_url),
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, base_url: &str) {
    match effect {
        Effect::FetchRecord { id } => {
            let base_url = base_url.to_string();
            // Fixed key: a second spawn replaces (cancels) any in-flight
            // fetch instead of racing it.
            ctx.tasks().spawn(TaskKey::new("lookup"), async move {
                match api::fetch_record(&base_url, &id).await {
                    Ok(record) => Action::LookupDidLoad(record),
                    Err(e) => Action::LookupDidError(e.to_string()),
                }
            });
        }
    }
}
