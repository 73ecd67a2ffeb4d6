use crate::auth::{AuthError, Session};
use crate::config::Config;
use crate::discovery::{apply, DiscoveryView};
use crate::location::LocationState;
use crate::ui::discovery::{DiscoveryIntent, DiscoveryReducer, DiscoveryState};
use crate::ui::filter::{FilterDialogState, FilterIntent, FilterReducer};
use crate::ui::login::{LoginFormState, LoginIntent, LoginReducer};
use crate::ui::mvi::Reducer;
use crate::ui::sort::{SortDialogState, SortIntent, SortReducer};
use crate::vendor::{refresh_distances, Vendor};
use tokio::sync::mpsc;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Login,
    Home,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PopupKind {
    Filter,
    Sort,
    Detail,
    Alert,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Main,
    Popup(PopupKind),
}

/// Work the UI loop hands to the async runtime.
#[derive(Debug)]
pub enum UiCommand {
    Login { username: String, password: String },
    Logout,
}

/// Reply to a [`UiCommand`], posted back by the auth worker.
#[derive(Debug)]
pub struct AuthUpdate {
    /// The session as the worker's `AuthSession` holds it now.
    pub session: Session,
    pub outcome: AuthOutcome,
}

#[derive(Debug)]
pub enum AuthOutcome {
    LoggedIn,
    LoginFailed(AuthError),
    LoggedOut,
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    page_size: usize,
    /// Mirror of the worker's session, replaced on every `AuthUpdate`.
    session: Session,
    vendors: Vec<Vendor>,
    location: LocationState,
    /// Login screen form (MVI pattern).
    login_form: LoginFormState,
    /// Home screen query and selection (MVI pattern).
    discovery: DiscoveryState,
    filter_dialog: FilterDialogState,
    sort_dialog: SortDialogState,
    alert: Option<String>,
    command_sender: Option<UiCommandSender>,
}

impl App {
    pub fn new(config: &Config, vendors: Vec<Vendor>) -> Self {
        let page_size = config.discovery.page_size;
        Self {
            should_quit: false,
            focus: Focus::Main,
            page_size,
            session: Session::default(),
            vendors,
            location: LocationState::default(),
            login_form: LoginFormState::default(),
            discovery: DiscoveryState::with_page_size(page_size),
            filter_dialog: FilterDialogState::default(),
            sort_dialog: SortDialogState::default(),
            alert: None,
            command_sender: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        if self.session.is_logged_in() {
            Screen::Home
        } else {
            Screen::Login
        }
    }

    pub fn popup_kind(&self) -> Option<PopupKind> {
        match self.focus {
            Focus::Popup(kind) => Some(kind),
            Focus::Main => None,
        }
    }

    pub fn close_popup(&mut self) {
        match self.focus {
            Focus::Popup(PopupKind::Filter) => self.dispatch_filter(FilterIntent::Close),
            Focus::Popup(PopupKind::Sort) => self.dispatch_sort(SortIntent::Close),
            Focus::Popup(PopupKind::Alert) => self.alert = None,
            _ => {}
        }
        self.focus = Focus::Main;
    }

    pub fn on_tick(&mut self) {}

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn location(&self) -> &LocationState {
        &self.location
    }

    pub fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn show_alert(&mut self, message: String) {
        self.alert = Some(message);
        self.focus = Focus::Popup(PopupKind::Alert);
    }

    /// Location lookup finished; distances follow the new position.
    pub fn on_location(&mut self, state: LocationState) {
        refresh_distances(&mut self.vendors, state.location());
        self.location = state;
    }

    // ========================================================================
    // Login (MVI pattern)
    // ========================================================================

    pub fn login_form(&self) -> &LoginFormState {
        &self.login_form
    }

    pub fn dispatch_login(&mut self, intent: LoginIntent) {
        dispatch_mvi!(self, login_form, LoginReducer, intent);
    }

    /// Hand the form to the auth worker. Validation happens there, before
    /// any request is sent.
    pub fn submit_login(&mut self) {
        if self.login_form.in_flight {
            return;
        }
        let command = UiCommand::Login {
            username: self.login_form.username.clone(),
            password: self.login_form.password.clone(),
        };

        if self.send_command(command) {
            self.dispatch_login(LoginIntent::Started);
        } else {
            let message = "Login service unavailable".to_string();
            self.dispatch_login(LoginIntent::Failed {
                message: message.clone(),
            });
            self.show_alert(message);
        }
    }

    /// Ask the worker to end the session. The screen changes once it answers.
    pub fn logout(&mut self) {
        self.close_popup();
        if !self.send_command(UiCommand::Logout) {
            tracing::warn!("Logout requested with no auth worker");
        }
    }

    pub fn on_auth_update(&mut self, update: AuthUpdate) {
        self.session = update.session;
        match update.outcome {
            AuthOutcome::LoggedIn => {
                self.dispatch_login(LoginIntent::Reset);
                self.focus = Focus::Main;
            }
            AuthOutcome::LoginFailed(err) if err.is_validation() => {
                self.dispatch_login(LoginIntent::ValidationFailed {
                    message: err.to_string(),
                });
            }
            AuthOutcome::LoginFailed(err) => {
                let message = err.to_string();
                self.dispatch_login(LoginIntent::Failed {
                    message: message.clone(),
                });
                self.show_alert(message);
            }
            AuthOutcome::LoggedOut => {
                self.dispatch_login(LoginIntent::Reset);
                self.discovery = DiscoveryState::with_page_size(self.page_size);
                self.close_popup();
            }
        }
    }

    // ========================================================================
    // Vendor list (MVI pattern)
    // ========================================================================

    pub fn discovery(&self) -> &DiscoveryState {
        &self.discovery
    }

    /// Current slice of vendors for the home screen.
    pub fn view(&self) -> DiscoveryView<'_> {
        apply(&self.vendors, &self.discovery.query)
    }

    pub fn dispatch_discovery(&mut self, intent: DiscoveryIntent) {
        dispatch_mvi!(self, discovery, DiscoveryReducer, intent);
    }

    pub fn selected_vendor(&self) -> Option<&Vendor> {
        self.view().items.get(self.discovery.selected).copied()
    }

    pub fn load_more(&mut self) {
        let total_matches = self.view().total_matches;
        self.dispatch_discovery(DiscoveryIntent::LoadMore { total_matches });
    }

    pub fn move_selection_up(&mut self) {
        self.dispatch_discovery(DiscoveryIntent::MoveUp);
    }

    /// Moving past the last shown row pulls in the next page first.
    pub fn move_selection_down(&mut self) {
        let (shown, has_more) = {
            let view = self.view();
            (view.items.len(), view.has_more)
        };
        if has_more && self.discovery.selected + 1 >= shown {
            self.load_more();
        }
        let shown = self.view().items.len();
        self.dispatch_discovery(DiscoveryIntent::MoveDown { shown });
    }

    pub fn open_detail(&mut self) {
        if self.selected_vendor().is_some() {
            self.focus = Focus::Popup(PopupKind::Detail);
        }
    }

    // ========================================================================
    // Filter and sort dialogs (MVI pattern)
    // ========================================================================

    pub fn filter_dialog(&self) -> &FilterDialogState {
        &self.filter_dialog
    }

    pub fn dispatch_filter(&mut self, intent: FilterIntent) {
        dispatch_mvi!(self, filter_dialog, FilterReducer, intent);
    }

    pub fn open_filter_dialog(&mut self) {
        let current = self.discovery.query.filter;
        self.dispatch_filter(FilterIntent::Open { current });
        self.focus = Focus::Popup(PopupKind::Filter);
    }

    /// Push the draft into the vendor list and close.
    pub fn apply_filter_dialog(&mut self) {
        if let Some(draft) = self.filter_dialog.draft() {
            self.dispatch_discovery(DiscoveryIntent::ApplyFilter(draft));
        }
        self.close_popup();
    }

    pub fn sort_dialog(&self) -> &SortDialogState {
        &self.sort_dialog
    }

    pub fn dispatch_sort(&mut self, intent: SortIntent) {
        dispatch_mvi!(self, sort_dialog, SortReducer, intent);
    }

    pub fn open_sort_dialog(&mut self) {
        let current = self.discovery.query.sort;
        self.dispatch_sort(SortIntent::Open { current });
        self.focus = Focus::Popup(PopupKind::Sort);
    }

    pub fn apply_sort_dialog(&mut self) {
        if let Some(key) = self.sort_dialog.focused() {
            self.dispatch_discovery(DiscoveryIntent::SelectSort(key));
        }
        self.close_popup();
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "UI command dropped");
                false
            }
        }
    }
}
