use crate::auth::AuthSession;
use crate::config::Config;
use crate::location::{resolve, source_from_config};
use crate::shutdown::ShutdownCoordinator;
use crate::ui::app::{App, AuthOutcome, AuthUpdate, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::terminal_guard::TerminalGuard;
use crate::vendor::Vendor;
use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc;

const UI_COMMAND_BUFFER: usize = 8;

pub fn run(config: Config, vendors: Vec<Vendor>) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;
    let auth = AuthSession::new(&config.auth).map_err(io::Error::other)?;

    let shutdown = ShutdownCoordinator::new();
    shutdown.register_signals()?;

    let mut terminal = TerminalGuard::enter()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate, shutdown.handle());

    let mut app = App::new(&config, vendors);
    let (command_tx, command_rx) = mpsc::channel(UI_COMMAND_BUFFER);
    app.set_command_sender(command_tx);
    runtime.spawn(run_commands(auth, command_rx, events.sender()));
    spawn_location_lookup(&config, events.sender());

    loop {
        terminal.draw(&app)?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => handle_event(&mut app, event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(terminal);
    runtime.shutdown_timeout(Duration::from_secs(1));
    Ok(())
}

pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Tick => app.on_tick(),
        AppEvent::Resize(cols, rows) => tracing::debug!(cols, rows, "Terminal resized"),
        AppEvent::Location(state) => app.on_location(state),
        AppEvent::Auth(update) => app.on_auth_update(update),
        AppEvent::Shutdown => app.request_quit(),
    }
}

/// Owns the session and serves the UI's auth commands one at a time.
///
/// Every command is answered with an [`AuthUpdate`] carrying the session as
/// it stands afterwards; the UI never awaits.
pub async fn run_commands(
    mut auth: AuthSession,
    mut commands: mpsc::Receiver<UiCommand>,
    events: Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        let outcome = match command {
            UiCommand::Login { username, password } => {
                match auth.login(&username, &password).await {
                    Ok(_) => AuthOutcome::LoggedIn,
                    Err(err) => AuthOutcome::LoginFailed(err),
                }
            }
            UiCommand::Logout => {
                auth.logout();
                AuthOutcome::LoggedOut
            }
        };
        let update = AuthUpdate {
            session: auth.session().clone(),
            outcome,
        };
        if events.send(AppEvent::Auth(update)).is_err() {
            break;
        }
    }
}

fn spawn_location_lookup(config: &Config, events: Sender<AppEvent>) {
    let source = source_from_config(&config.location);
    thread::spawn(move || {
        let state = resolve(source.as_ref());
        let _ = events.send(AppEvent::Location(state));
    });
}
