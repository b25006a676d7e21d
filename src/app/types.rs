use crate::app::catalog::CategoryId;
use crate::ui::game_list::GameIndexMap;

/// Which screen the hub is on. Starts at `MainMenu`, ends at `Exiting`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationState {
    MainMenu,
    CategoryMenu(CategoryId),
    /// Transient message box; any key goes back to `return_to`.
    ErrorMessage {
        return_to: Box<NavigationState>,
        text: String,
    },
    /// A game is about to run; `from` is the category to come back to.
    Launching {
        game: String,
        from: CategoryId,
    },
    Exiting,
}

impl NavigationState {
    pub fn error(return_to: NavigationState, text: impl Into<String>) -> Self {
        NavigationState::ErrorMessage {
            return_to: Box::new(return_to),
            text: text.into(),
        }
    }
}

/// How a launched game ended, as far as the hub cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// No executable by that name could be resolved.
    NotFound,
    /// The user interrupted while the game ran.
    Interrupted,
    /// The game exited on its own. `None` when it died from a signal.
    Completed(Option<i32>),
    /// Starting the child failed for another OS-level reason.
    Failed(String),
}

/// Everything that can move the state machine forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HubEvent {
    /// A full input line (already without the newline).
    Line(String),
    /// A single key dismissed a wait screen.
    KeyPressed,
    /// Ctrl+C or end of input at a blocking read.
    Interrupted,
    Launched(LaunchOutcome),
}

/// What the runner has to wait for after drawing a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitKind {
    /// Read a line after printing `prompt`.
    Line { prompt: String },
    /// Wait for any single key.
    AnyKey,
    /// Run the named game and report back.
    Launch(String),
    /// Nothing to wait for: the hub is done.
    Exit,
}

/// A rendered screen plus what it expects next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub text: String,
    pub wait: WaitKind,
    /// Numbers valid on this screen. Empty outside category screens.
    pub index_map: GameIndexMap,
}

impl View {
    pub fn new(text: String, wait: WaitKind) -> Self {
        View {
            text,
            wait,
            index_map: GameIndexMap::new(),
        }
    }
}
