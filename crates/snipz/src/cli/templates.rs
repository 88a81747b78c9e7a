//! Output templates, embedded at compile time.
//!
//! Templates are minijinja, rendered by `outstanding` with a `style` filter.
//! Rows are laid out in Rust (widths, truncation, padding); templates only pick
//! styles and emit lines. Each line ends with an explicit newline in the
//! template source.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const FULL_SNIPPET_TEMPLATE: &str = include_str!("templates/full_snippet.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const STATS_TEMPLATE: &str = include_str!("templates/stats.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");
pub const HELP_TEMPLATE: &str = include_str!("templates/help.tmp");
