//! The menu state machine.
//!
//! `Hub::render` turns a state into screen text plus what to wait for;
//! `Hub::step` turns a state, the view that was shown and an event into the
//! next state. Neither touches the terminal or spawns processes, so the whole
//! navigation can be driven from tests.

use crate::app::catalog::{Catalog, CategoryId};
use crate::app::types::{HubEvent, LaunchOutcome, NavigationState, View, WaitKind};
use crate::errors::{render_hub_error, HubError};
use crate::fs_op::{available, Resolver};
use crate::ui::game_list::format_game_list;
use crate::ui::screens;

pub struct Hub<R> {
    catalog: Catalog,
    resolver: R,
}

impl<R: Resolver> Hub<R> {
    pub fn new(catalog: Catalog, resolver: R) -> Self {
        Hub { catalog, resolver }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Installed games of one category, rescanned on every call.
    pub fn available_games(&self, id: CategoryId) -> Vec<String> {
        match self.catalog.get(id) {
            Some(c) => available(&c.games, &self.resolver),
            None => Vec::new(),
        }
    }

    /// Compose the screen for `state` on a terminal `cols` wide.
    pub fn render(&self, state: &NavigationState, cols: usize) -> View {
        match state {
            NavigationState::MainMenu => self.main_view(cols),
            NavigationState::CategoryMenu(id) => self.category_view(*id, cols),
            NavigationState::ErrorMessage { text, .. } => {
                View::new(screens::error_box(text, cols), WaitKind::AnyKey)
            }
            NavigationState::Launching { game, .. } => View::new(
                screens::launching_banner(game, cols),
                WaitKind::Launch(game.clone()),
            ),
            NavigationState::Exiting => View::new(screens::farewell(cols), WaitKind::Exit),
        }
    }

    fn main_view(&self, cols: usize) -> View {
        View::new(
            screens::main_menu(&self.catalog, cols),
            WaitKind::Line {
                prompt: screens::main_prompt(cols),
            },
        )
    }

    fn category_view(&self, id: CategoryId, cols: usize) -> View {
        let Some(category) = self.catalog.get(id) else {
            return self.main_view(cols);
        };
        let games = self.available_games(id);
        let (panel, index_map) = format_game_list(&games, &category.name);
        let has_games = !games.is_empty();
        let wait = if has_games {
            WaitKind::Line {
                prompt: screens::GAME_PROMPT.to_string(),
            }
        } else {
            WaitKind::AnyKey
        };
        View {
            text: screens::category_screen(category, &panel, cols, has_games),
            wait,
            index_map,
        }
    }

    /// Next state after `event` arrived while `view` (rendered from `state`)
    /// was on screen.
    pub fn step(&self, state: NavigationState, view: &View, event: HubEvent) -> NavigationState {
        use NavigationState as S;

        match (state, event) {
            (S::MainMenu, HubEvent::Line(line)) => self.main_choice(line.trim()),
            (S::MainMenu, HubEvent::Interrupted) => S::Exiting,
            (S::MainMenu, _) => S::MainMenu,

            (S::CategoryMenu(id), _) if self.catalog.get(id).is_none() => S::MainMenu,
            (S::CategoryMenu(_), HubEvent::KeyPressed | HubEvent::Interrupted) => S::MainMenu,
            (S::CategoryMenu(id), HubEvent::Line(line)) => category_choice(id, line.trim(), view),
            (s @ S::CategoryMenu(_), HubEvent::Launched(_)) => s,

            (S::ErrorMessage { return_to, .. }, _) => *return_to,

            (S::Launching { game, from }, HubEvent::Launched(outcome)) => {
                after_launch(game, from, outcome)
            }
            (s @ S::Launching { .. }, _) => s,

            (S::Exiting, _) => S::Exiting,
        }
    }

    fn main_choice(&self, choice: &str) -> NavigationState {
        if choice == "0" {
            return NavigationState::Exiting;
        }
        match self.catalog.find_by_key(choice) {
            Some(id) => NavigationState::CategoryMenu(id),
            None => NavigationState::error(
                NavigationState::MainMenu,
                render_hub_error(&HubError::SelectionInvalid),
            ),
        }
    }
}

fn category_choice(id: CategoryId, choice: &str, view: &View) -> NavigationState {
    let here = NavigationState::CategoryMenu(id);
    if choice == "0" {
        return NavigationState::MainMenu;
    }
    let err = match choice.parse::<i64>() {
        Ok(n) => {
            let game = usize::try_from(n).ok().and_then(|n| view.index_map.get(n));
            match game {
                Some(game) => {
                    return NavigationState::Launching {
                        game: game.to_string(),
                        from: id,
                    }
                }
                None => HubError::SelectionInvalid,
            }
        }
        Err(_) => HubError::SelectionNotANumber,
    };
    NavigationState::error(here, render_hub_error(&err))
}

fn after_launch(game: String, from: CategoryId, outcome: LaunchOutcome) -> NavigationState {
    let back = NavigationState::CategoryMenu(from);
    match outcome {
        LaunchOutcome::Completed(_) | LaunchOutcome::Interrupted => back,
        LaunchOutcome::NotFound => {
            NavigationState::error(back, render_hub_error(&HubError::GameNotFound(game)))
        }
        LaunchOutcome::Failed(cause) => NavigationState::error(
            back,
            render_hub_error(&HubError::LaunchFailure { game, cause }),
        ),
    }
}
