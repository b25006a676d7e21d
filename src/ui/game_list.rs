//! The bordered game panel shown on a category screen.

use std::collections::BTreeMap;

use console::{pad_str, Alignment};

/// Usable columns between the two vertical borders.
pub const PANEL_INTERIOR: usize = 38;
/// Width of one column in the two-column layout.
pub const COLUMN_WIDTH: usize = 18;
/// Lists longer than this are split into two columns.
pub const TWO_COLUMN_THRESHOLD: usize = 10;

/// Mapping from the 1-based number shown next to a game to its name.
///
/// Rebuilt on every render of a category screen; keys are always `1..=N`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameIndexMap(BTreeMap<usize, String>);

impl GameIndexMap {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, number: usize, game: &str) {
        self.0.insert(number, game.to_string());
    }

    pub fn get(&self, number: usize) -> Option<&str> {
        self.0.get(&number).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn numbers(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

fn border(left: char, right: char) -> String {
    format!("{left}{}{right}", "─".repeat(PANEL_INTERIOR))
}

fn row(content: &str) -> String {
    format!("│{}│", pad_str(content, PANEL_INTERIOR, Alignment::Left, None))
}

fn empty_panel() -> String {
    [
        border('┌', '┐'),
        row(""),
        row("     ✖ No games installed! ✖"),
        row(""),
        border('├', '┤'),
        row(" Install some games:"),
        row(" $ sudo apt update"),
        row(" $ sudo apt install <game-name>"),
        border('└', '┘'),
    ]
    .join("\n")
}

/// Build the game panel for `games` under the heading `label`.
///
/// Returns the panel text and the number-to-game map matching what is drawn.
/// An empty list yields the install-hint panel and an empty map. Names wider
/// than a column are drawn in full and push past the border.
pub fn format_game_list<S: AsRef<str>>(games: &[S], label: &str) -> (String, GameIndexMap) {
    let mut map = GameIndexMap::new();
    if games.is_empty() {
        return (empty_panel(), map);
    }

    let mut lines = vec![
        border('┌', '┐'),
        format!("│{}│", pad_str(label, PANEL_INTERIOR, Alignment::Center, None)),
        border('├', '┤'),
    ];

    if games.len() > TWO_COLUMN_THRESHOLD {
        let mid = games.len().div_ceil(2);
        let (first, second) = games.split_at(mid);
        for (i, left) in first.iter().enumerate() {
            let left = left.as_ref();
            let left_cell = format!("{}) {}", i + 1, left);
            map.insert(i + 1, left);
            let right_cell = match second.get(i) {
                Some(right) => {
                    let right = right.as_ref();
                    map.insert(i + mid + 1, right);
                    format!("{}) {}", i + mid + 1, right)
                }
                None => String::new(),
            };
            lines.push(row(&format!(
                " {} {}",
                pad_str(&left_cell, COLUMN_WIDTH, Alignment::Left, None),
                right_cell
            )));
        }
    } else {
        for (i, game) in games.iter().enumerate() {
            let game = game.as_ref();
            map.insert(i + 1, game);
            lines.push(row(&format!("   {}) {}", i + 1, game)));
        }
    }

    lines.push(border('├', '┤'));
    lines.push(row("   0) Back to Main Menu"));
    lines.push(border('└', '┘'));
    (lines.join("\n"), map)
}
