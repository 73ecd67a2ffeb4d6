use vendorscope::ui::login::{LoginField, LoginFormState, LoginIntent, LoginReducer};
use vendorscope::ui::mvi::Reducer;

fn type_text(state: LoginFormState, text: &str) -> LoginFormState {
    text.chars()
        .fold(state, |s, ch| LoginReducer::reduce(s, LoginIntent::InsertChar(ch)))
}

#[test]
fn typing_goes_to_focused_field() {
    let state = type_text(LoginFormState::default(), "ada");
    let state = LoginReducer::reduce(state, LoginIntent::NextField);
    let state = type_text(state, "secret1");

    assert_eq!(state.username, "ada");
    assert_eq!(state.password, "secret1");
    assert_eq!(state.focused, LoginField::Password);
}

#[test]
fn password_is_masked_until_revealed() {
    let state = LoginReducer::reduce(LoginFormState::default(), LoginIntent::NextField);
    let state = type_text(state, "abc");
    assert_eq!(state.password_display(), "•••");

    let state = LoginReducer::reduce(state, LoginIntent::TogglePasswordVisibility);
    assert_eq!(state.password_display(), "abc");
}

#[test]
fn backspace_edits_focused_field() {
    let state = type_text(LoginFormState::default(), "adam");
    let state = LoginReducer::reduce(state, LoginIntent::Backspace);
    assert_eq!(state.username, "ada");

    let empty = LoginReducer::reduce(LoginFormState::default(), LoginIntent::Backspace);
    assert!(empty.username.is_empty());
}

#[test]
fn edits_are_ignored_while_in_flight() {
    let state = type_text(LoginFormState::default(), "ada");
    let state = LoginReducer::reduce(state, LoginIntent::Started);
    let state = type_text(state, "xyz");
    let state = LoginReducer::reduce(state, LoginIntent::NextField);

    assert_eq!(state.username, "ada");
    assert_eq!(state.focused, LoginField::Username);
    assert!(state.in_flight);
}

#[test]
fn failure_ends_request_and_keeps_input() {
    let state = type_text(LoginFormState::default(), "ada");
    let state = LoginReducer::reduce(state, LoginIntent::Started);
    let state = LoginReducer::reduce(
        state,
        LoginIntent::Failed {
            message: "Invalid credentials".to_string(),
        },
    );

    assert!(!state.in_flight);
    assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
    assert_eq!(state.username, "ada");
}

#[test]
fn starting_clears_previous_error() {
    let state = LoginReducer::reduce(
        LoginFormState::default(),
        LoginIntent::ValidationFailed {
            message: "Please enter your password".to_string(),
        },
    );
    let state = LoginReducer::reduce(state, LoginIntent::Started);
    assert!(state.error.is_none());
}

#[test]
fn reset_clears_everything() {
    let state = type_text(LoginFormState::default(), "ada");
    let state = LoginReducer::reduce(state, LoginIntent::TogglePasswordVisibility);
    let state = LoginReducer::reduce(state, LoginIntent::Reset);
    assert_eq!(state, LoginFormState::default());
}
