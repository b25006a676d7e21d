//! Full-screen text for each navigation state. No I/O here: the runner
//! clears and prints what these return.

use console::{measure_text_width, pad_str, Alignment};

use crate::app::art;
use crate::app::catalog::{Catalog, GameCategory};
use crate::ui::layout::{center_block, center_offset, side_by_side};

/// Outer width of the main menu box.
pub const MENU_BOX_WIDTH: usize = 50;
/// Minimum interior width of the launch banner.
pub const BANNER_WIDTH: usize = 30;

pub const PRESS_ANY_KEY: &str = "Press any key to continue...";
pub const GAME_PROMPT: &str = "Select game number: ";
pub const CTRL_C_HINT: &str = "Press Ctrl+C to return to menu when game exits";

fn any_key_hint() -> String {
    format!("{}{}", " ".repeat(20), PRESS_ANY_KEY)
}

fn boxed_row(content: &str, interior: usize) -> String {
    format!("│{}│", pad_str(content, interior, Alignment::Left, None))
}

/// Main header plus the category selection box.
pub fn main_menu(catalog: &Catalog, cols: usize) -> String {
    let interior = MENU_BOX_WIDTH - 2;
    let margin = " ".repeat(center_offset(cols, MENU_BOX_WIDTH));
    let blank = boxed_row("", interior);

    let mut rows = vec![format!("┌{}┐", "─".repeat(interior)), blank.clone()];
    for c in catalog.categories() {
        rows.push(boxed_row(&format!("            {}) {}", c.key, c.name), interior));
    }
    rows.push(blank.clone());
    rows.push(boxed_row("                    0) Exit", interior));
    rows.push(blank);
    rows.push(format!("└{}┘", "─".repeat(interior)));

    let boxed: Vec<String> = rows.into_iter().map(|r| format!("{margin}{r}")).collect();
    format!("{}\n\n{}\n", center_block(art::MAIN_HEADER, cols), boxed.join("\n"))
}

pub fn main_prompt(cols: usize) -> String {
    format!("{}Select category: ", " ".repeat(center_offset(cols, 20)))
}

/// Category header, then the game panel with the side art to its right.
/// `has_games == false` appends the dismiss hint instead of expecting a prompt.
pub fn category_screen(category: &GameCategory, panel: &str, cols: usize, has_games: bool) -> String {
    let header = center_block(category.theme.header(), cols);
    let body = side_by_side(panel, category.theme.side_art());
    if has_games {
        format!("{header}\n\n\n{body}\n")
    } else {
        format!("{header}\n\n{body}\n\n{GAME_PROMPT}\n{}", any_key_hint())
    }
}

/// One-line message in a double-line box, centered horizontally.
pub fn error_box(message: &str, cols: usize) -> String {
    let w = measure_text_width(message);
    let margin = " ".repeat(center_offset(cols, w + 4));
    format!(
        "\n{margin}╔{bar}╗\n{margin}║ {message} ║\n{margin}╚{bar}╝\n\n{hint}",
        bar = "═".repeat(w + 2),
        hint = any_key_hint()
    )
}

/// Banner drawn just before the game takes over the terminal.
pub fn launching_banner(game: &str, cols: usize) -> String {
    let content = format!(
        "     LAUNCHING: {}    ",
        pad_str(game, 12, Alignment::Left, None)
    );
    let interior = BANNER_WIDTH.max(measure_text_width(&content));
    let margin = " ".repeat(center_offset(cols, interior + 2));
    let hint_margin = " ".repeat(center_offset(cols, measure_text_width(CTRL_C_HINT)));
    format!(
        "\n\n{margin}╔{bar}╗\n{margin}║{body}║\n{margin}╚{bar}╝\n\n\n{hint_margin}{CTRL_C_HINT}\n",
        bar = "═".repeat(interior),
        body = pad_str(&content, interior, Alignment::Left, None),
    )
}

pub fn farewell(cols: usize) -> String {
    format!("{}\n\n", center_block(art::FAREWELL, cols))
}
