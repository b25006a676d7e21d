use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::art;

/// Built-in Story / Roguelike candidates.
pub const STORY_GAMES: &[&str] = &[
    "rogue",
    "nethack",
    "crawl",
    "angband",
    "gearhead",
    "colossal-cave-adventure",
    "slashem",
    "cataclysm",
    "qud",
    "open-adventure",
    "brogue",
    "omega-rpg",
    "moria",
];

/// Built-in Action / Arcade candidates.
pub const ACTION_GAMES: &[&str] = &[
    "robotfindskitten",
    "tint",
    "tty-solitaire",
    "tetrinet-client",
    "petris",
    "greed",
    "asciijump",
    "nsnake",
    "piu-piu",
    "curseofwar",
    "ascii-patrol",
    "moon-buggy",
    "ninvaders",
    "openra",
    "openttd",
];

/// Built-in Boards / Classics candidates.
pub const BOARD_GAMES: &[&str] = &[
    "nettoe",
    "bastard tetris",
    "trader",
    "chroma-curses",
    "nudoku",
    "nbsdgames",
    "empire",
    "vitetris",
    "sudoku",
    "freesweep",
    "gnugo",
    "netris",
    "gnuminishogi",
    "cavezofphear",
    "bsdgames",
    "bastet",
    "zivot",
    "npush",
    "2048",
    "gomoku",
    "hangman",
    "atc",
    "gnome-mines",
    "gnome-sudoku",
];

/// Visual theme of a category: which header and side art it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Story,
    Action,
    Boards,
}

impl Theme {
    pub fn header(self) -> &'static str {
        match self {
            Theme::Story => art::STORY_HEADER,
            Theme::Action => art::ACTION_HEADER,
            Theme::Boards => art::BOARDS_HEADER,
        }
    }

    pub fn side_art(self) -> &'static str {
        match self {
            Theme::Story => art::STORY_ART,
            Theme::Action => art::ACTION_ART,
            Theme::Boards => art::BOARDS_ART,
        }
    }
}

/// One top-level grouping of games.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameCategory {
    /// What the user types on the main menu to open it.
    pub key: String,
    pub name: String,
    /// Candidate executable names, in display order.
    pub games: Vec<String>,
    pub theme: Theme,
}

impl GameCategory {
    pub fn new(key: &str, name: &str, games: &[&str], theme: Theme) -> Self {
        GameCategory {
            key: key.to_string(),
            name: name.to_string(),
            games: games.iter().map(|g| g.to_string()).collect(),
            theme,
        }
    }
}

/// Position of a category inside its `Catalog`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryId(pub usize);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("category `{0}` has an empty key")]
    EmptyKey(String),

    #[error("category `{0}` uses the reserved key \"0\"")]
    ReservedKey(String),

    #[error("duplicate category key `{0}`")]
    DuplicateKey(String),
}

/// Read-only table of categories handed to the menu at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<GameCategory>,
}

impl Catalog {
    /// Validate and wrap `categories`. Keys must be non-empty, unique and
    /// different from `"0"`, which always means exit/back.
    pub fn new(categories: Vec<GameCategory>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for c in &categories {
            let key = c.key.trim();
            if key.is_empty() {
                return Err(CatalogError::EmptyKey(c.name.clone()));
            }
            if key == "0" {
                return Err(CatalogError::ReservedKey(c.name.clone()));
            }
            if !seen.insert(key.to_string()) {
                return Err(CatalogError::DuplicateKey(key.to_string()));
            }
        }
        let categories = categories
            .into_iter()
            .map(|c| GameCategory { key: c.key.trim().to_string(), ..c })
            .collect();
        Ok(Catalog { categories })
    }

    /// The three categories the hub ships with.
    pub fn builtin() -> Self {
        Catalog {
            categories: vec![
                GameCategory::new("1", "Story / Roguelike", STORY_GAMES, Theme::Story),
                GameCategory::new("2", "Action / Arcade", ACTION_GAMES, Theme::Action),
                GameCategory::new("3", "Boards / Classics", BOARD_GAMES, Theme::Boards),
            ],
        }
    }

    pub fn categories(&self) -> &[GameCategory] {
        &self.categories
    }

    pub fn get(&self, id: CategoryId) -> Option<&GameCategory> {
        self.categories.get(id.0)
    }

    /// Find the category selected by a main-menu `key`.
    pub fn find_by_key(&self, key: &str) -> Option<CategoryId> {
        self.categories
            .iter()
            .position(|c| c.key == key)
            .map(CategoryId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_three_keyed_categories() {
        let cat = Catalog::builtin();
        let keys: Vec<&str> = cat.categories().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["1", "2", "3"]);
        assert_eq!(cat.categories()[0].games.len(), 13);
        assert_eq!(cat.categories()[1].games.len(), 15);
        assert_eq!(cat.categories()[2].games.len(), 24);
    }

    #[test]
    fn find_by_key_maps_to_position() {
        let cat = Catalog::builtin();
        assert_eq!(cat.find_by_key("2"), Some(CategoryId(1)));
        assert_eq!(cat.find_by_key("9"), None);
        assert_eq!(cat.find_by_key("0"), None);
    }

    #[test]
    fn rejects_reserved_and_duplicate_keys() {
        let a = GameCategory::new("0", "Zero", &["x"], Theme::Story);
        assert!(matches!(Catalog::new(vec![a]), Err(CatalogError::ReservedKey(_))));

        let a = GameCategory::new("1", "A", &["x"], Theme::Story);
        let b = GameCategory::new(" 1 ", "B", &["y"], Theme::Action);
        assert_eq!(
            Catalog::new(vec![a, b]),
            Err(CatalogError::DuplicateKey("1".to_string()))
        );

        let e = GameCategory::new("  ", "Blank", &[], Theme::Boards);
        assert!(matches!(Catalog::new(vec![e]), Err(CatalogError::EmptyKey(_))));
    }

    #[test]
    fn keys_are_trimmed() {
        let a = GameCategory::new(" 7 ", "Seven", &["x"], Theme::Boards);
        let cat = Catalog::new(vec![a]).unwrap();
        assert_eq!(cat.find_by_key("7"), Some(CategoryId(0)));
    }
}
