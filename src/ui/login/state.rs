use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginFormState {
    pub username: String,
    pub password: String,
    pub focused: LoginField,
    pub show_password: bool,
    /// Inline error from validation or the last failed attempt.
    pub error: Option<String>,
    /// A login request is on the wire; edits are ignored until it settles.
    pub in_flight: bool,
}

impl UiState for LoginFormState {}

impl LoginFormState {
    /// Password as it should be drawn.
    pub fn password_display(&self) -> String {
        if self.show_password {
            self.password.clone()
        } else {
            "•".repeat(self.password.chars().count())
        }
    }
}
