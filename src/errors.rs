use thiserror::Error;

/// Recoverable conditions surfaced to the user through the error box.
///
/// The `Display` text of each variant is exactly what the error screen shows,
/// so callers never format messages themselves.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HubError {
    /// Input did not match any menu key or displayed game number.
    #[error("Invalid selection!")]
    SelectionInvalid,

    /// A category screen expected a number and got something else.
    #[error("Please enter a valid number!")]
    SelectionNotANumber,

    /// The executable could not be resolved at launch time.
    #[error("Error: {0} not found!")]
    GameNotFound(String),

    /// Any other OS-level failure while starting the child.
    #[error("Error launching {game}: {cause}")]
    LaunchFailure { game: String, cause: String },
}

/// Render a `HubError` for the error box. Kept as a function so the state
/// machine and the runner share one entry point for user-facing text.
pub fn render_hub_error(err: &HubError) -> String {
    err.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_screen_text() {
        assert_eq!(render_hub_error(&HubError::SelectionInvalid), "Invalid selection!");
        assert_eq!(
            render_hub_error(&HubError::SelectionNotANumber),
            "Please enter a valid number!"
        );
        assert_eq!(
            render_hub_error(&HubError::GameNotFound("rogue".into())),
            "Error: rogue not found!"
        );
        let e = HubError::LaunchFailure {
            game: "nethack".into(),
            cause: "permission denied".into(),
        };
        assert_eq!(render_hub_error(&e), "Error launching nethack: permission denied");
    }
}
