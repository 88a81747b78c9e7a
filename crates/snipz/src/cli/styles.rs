//! Styles for the snipz CLI.
//!
//! Templates refer to semantic style names only (`list-id`, `time`, `pinned`).
//! The theme below maps those names to concrete console styles. Every name a
//! template uses must be registered here: `outstanding` marks unknown names
//! with an `(!?)` indicator instead of failing.
//!
//! The theme is built once through `once_cell::sync::Lazy`.

use console::Style;
use once_cell::sync::Lazy;
use outstanding::{rgb_to_ansi256, Theme};

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const REGULAR: &str = "regular";
    pub const MUTED: &str = "muted";
    pub const PINNED: &str = "pinned";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
    pub const TITLE: &str = "title";
    pub const TIME: &str = "time";
    pub const TAGS: &str = "tags";
    pub const LIST_ID: &str = "list-id";
    pub const LIST_TITLE: &str = "list-title";
    pub const PINNED_TITLE: &str = "pinned-title";
    pub const HELP_HEADER: &str = "help-header";
    pub const HELP_SECTION: &str = "help-section";
    pub const HELP_COMMAND: &str = "help-command";
}

pub static SNIPZ_THEME: Lazy<Theme> = Lazy::new(|| {
    let muted = Style::new().color256(rgb_to_ansi256((138, 138, 138)));
    let gold = Style::new().color256(rgb_to_ansi256((196, 140, 0)));

    Theme::new()
        .add(names::REGULAR, Style::new())
        .add(names::MUTED, muted.clone())
        .add(names::PINNED, gold.clone().bold())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted.clone())
        .add(names::TITLE, Style::new().bold())
        .add(names::TIME, muted.clone().italic())
        .add(names::TAGS, Style::new().cyan())
        .add(names::LIST_ID, gold.clone())
        .add(names::LIST_TITLE, Style::new())
        .add(names::PINNED_TITLE, Style::new().bold())
        .add(names::HELP_HEADER, Style::new().bold())
        .add(names::HELP_SECTION, gold.bold())
        .add(names::HELP_COMMAND, Style::new().cyan())
});
