//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_login;

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tempfile::TempDir;
use vendorscope::auth::AuthSession;
use vendorscope::config::{AuthConfig, Config};
use vendorscope::geo::Coordinate;
use vendorscope::ui::app::App;
use vendorscope::ui::events::AppEvent;
use vendorscope::ui::login::LoginIntent;
use vendorscope::ui::runtime::{handle_event, run_commands};
use vendorscope::vendor::{build_vendors, parse_fixture, Vendor, BUNDLED_FIXTURE};

/// Port with nothing listening on it.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// One-shot login endpoint that answers `status` with a body cut short of its
/// declared length, then hangs up.
pub fn truncated_body_server(status: u16) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let url = format!(
        "http://{}/api/auth/login",
        listener.local_addr().unwrap()
    );
    let handle = thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };
        read_request(&mut stream);
        let _ = write!(
            stream,
            "HTTP/1.1 {status} Error\r\nContent-Type: application/json\r\nContent-Length: 64\r\n\r\n{{\"mess"
        );
        let _ = stream.flush();
    });
    (url, handle)
}

/// Consume one request (headers plus `Content-Length` bytes of body).
fn read_request(stream: &mut TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = match stream.read(&mut chunk) {
            Ok(0) | Err(_) => return,
            Ok(n) => n,
        };
        buf.extend_from_slice(&chunk[..n]);
        let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
        let body_len = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if buf.len() >= end + 4 + body_len {
            return;
        }
    }
}

/// Auth settings pointing at `login_url`, with short timeouts.
pub fn auth_config(login_url: &str) -> AuthConfig {
    AuthConfig {
        login_url: login_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
        ..AuthConfig::default()
    }
}

/// Write `content` to a config.toml in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Central Lagos, the default fixed location.
pub fn lagos() -> Coordinate {
    Coordinate::new(6.5244, 3.3792)
}

pub fn bundled_vendors(location: Option<Coordinate>) -> Vec<Vendor> {
    let raw = parse_fixture(BUNDLED_FIXTURE).expect("bundled fixture parses");
    build_vendors(&raw, location)
}

/// Vendor from a fixture-shaped JSON object.
pub fn vendor_from_json(json: serde_json::Value, location: Option<Coordinate>) -> Vendor {
    let fixture = serde_json::json!({ "data": { "get_nearby_vendors": [json] } });
    let raw = parse_fixture(&fixture.to_string()).expect("fixture parses");
    build_vendors(&raw, location).remove(0)
}

// -- App helpers --------------------------------------------------------------

pub fn make_app() -> App {
    App::new(&Config::default(), bundled_vendors(None))
}

/// Type into the login form the way the key handler does.
pub fn fill_login_form(app: &mut App, username: &str, password: &str) {
    for ch in username.chars() {
        app.dispatch_login(LoginIntent::InsertChar(ch));
    }
    app.dispatch_login(LoginIntent::NextField);
    for ch in password.chars() {
        app.dispatch_login(LoginIntent::InsertChar(ch));
    }
}

/// An `App` connected to a live auth worker, wired as the runtime wires it.
///
/// Must be created inside a tokio runtime.
pub struct WiredApp {
    pub app: App,
    events: Receiver<AppEvent>,
}

impl WiredApp {
    pub fn start(auth: &AuthConfig) -> Self {
        let session = AuthSession::new(auth).expect("Failed to build auth session");
        let (command_tx, command_rx) = tokio::sync::mpsc::channel(8);
        let (event_tx, events) = std::sync::mpsc::channel();
        tokio::spawn(run_commands(session, command_rx, event_tx));

        let mut app = make_app();
        app.set_command_sender(command_tx);
        Self { app, events }
    }

    /// Wait for the worker's next answer and feed it to the app.
    pub async fn settle(&mut self) {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            match self.events.try_recv() {
                Ok(event) => {
                    handle_event(&mut self.app, event);
                    return;
                }
                Err(TryRecvError::Empty) if Instant::now() < deadline => {
                    tokio::time::sleep(Duration::from_millis(10)).await;
                }
                Err(err) => panic!("auth worker did not answer: {err:?}"),
            }
        }
    }
}
