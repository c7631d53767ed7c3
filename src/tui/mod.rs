pub mod app;
pub mod event;
pub mod layout;
pub mod screen;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use crate::app::{AppContext, Result};
use crate::domain::{FeedItem, FeedSource};

use self::app::TuiApp;
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// A finished fetch on its way back to the screen that started it.
struct FetchDone {
    source: FeedSource,
    generation: u64,
    outcome: Result<Vec<FeedItem>>,
}

pub async fn run(ctx: Arc<AppContext>) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, ctx: Arc<AppContext>) -> Result<()> {
    let mut app = TuiApp::new();
    let (done_tx, mut done_rx) = mpsc::unbounded_channel();
    let event_handler = EventHandler::new(Duration::from_millis(ctx.config.tui.tick_rate_ms));

    // The first tab is visible as soon as the terminal is up.
    focus_active(&mut app, &ctx, &done_tx);

    loop {
        while let Ok(done) = done_rx.try_recv() {
            app.screen_mut(done.source)
                .finish_fetch(done.generation, done.outcome);
        }

        terminal.draw(|frame| layout::render(frame, &app, &ctx.config))?;

        match event_handler.next()? {
            AppEvent::Key(key) => match Action::from(key) {
                Action::Quit => {
                    app.should_quit = true;
                }
                Action::MoveUp => {
                    app.active_screen_mut().move_up();
                }
                Action::MoveDown => {
                    app.active_screen_mut().move_down();
                }
                Action::NextTab => {
                    app.next_tab();
                    focus_active(&mut app, &ctx, &done_tx);
                }
                Action::PrevTab => {
                    app.prev_tab();
                    focus_active(&mut app, &ctx, &done_tx);
                }
                Action::Refresh => {
                    let generation = app.active_screen_mut().refresh();
                    spawn_fetch(&ctx, app.active_screen().source, generation, &done_tx);
                }
                Action::None => {}
            },
            AppEvent::Tick => {}
        }

        if app.should_quit {
            break;
        }
    }

    // Dropping the receiver here orphans any fetch still in flight; its
    // completion lands nowhere and no screen state is touched after exit.
    Ok(())
}

/// Deliver a focus event to the newly visible screen.
fn focus_active(app: &mut TuiApp, ctx: &Arc<AppContext>, done_tx: &mpsc::UnboundedSender<FetchDone>) {
    if let Some(generation) = app.active_screen_mut().on_focus() {
        spawn_fetch(ctx, app.active_screen().source, generation, done_tx);
    }
}

fn spawn_fetch(
    ctx: &Arc<AppContext>,
    source: FeedSource,
    generation: u64,
    done_tx: &mpsc::UnboundedSender<FetchDone>,
) {
    let ctx = Arc::clone(ctx);
    let done_tx = done_tx.clone();
    tokio::spawn(async move {
        let outcome = ctx.load(source).await;
        let _ = done_tx.send(FetchDone {
            source,
            generation,
            outcome,
        });
    });
}
