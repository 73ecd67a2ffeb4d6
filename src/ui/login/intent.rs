use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LoginIntent {
    InsertChar(char),
    Backspace,
    NextField,
    TogglePasswordVisibility,
    /// Credentials were rejected locally; nothing was sent.
    ValidationFailed { message: String },
    /// Request sent.
    Started,
    /// Request finished with an error.
    Failed { message: String },
    /// Back to an empty form (after login or logout).
    Reset,
}

impl Intent for LoginIntent {}
