use crate::ui::login::intent::LoginIntent;
use crate::ui::login::state::{LoginField, LoginFormState};
use crate::ui::mvi::Reducer;

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginFormState;
    type Intent = LoginIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoginIntent::Reset => LoginFormState::default(),
            LoginIntent::Started => LoginFormState {
                error: None,
                in_flight: true,
                ..state
            },
            LoginIntent::Failed { message } | LoginIntent::ValidationFailed { message } => {
                LoginFormState {
                    error: Some(message),
                    in_flight: false,
                    ..state
                }
            }
            _ if state.in_flight => state,
            LoginIntent::InsertChar(ch) => {
                let mut state = state;
                match state.focused {
                    LoginField::Username => state.username.push(ch),
                    LoginField::Password => state.password.push(ch),
                }
                state
            }
            LoginIntent::Backspace => {
                let mut state = state;
                match state.focused {
                    LoginField::Username => state.username.pop(),
                    LoginField::Password => state.password.pop(),
                };
                state
            }
            LoginIntent::NextField => LoginFormState {
                focused: match state.focused {
                    LoginField::Username => LoginField::Password,
                    LoginField::Password => LoginField::Username,
                },
                ..state
            },
            LoginIntent::TogglePasswordVisibility => LoginFormState {
                show_password: !state.show_password,
                ..state
            },
        }
    }
}
