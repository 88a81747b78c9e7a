//! # Rendering Module
//!
//! Styled terminal output through the `outstanding` crate. Layout math (widths,
//! truncation, padding) stays in Rust because it has to be Unicode-aware; the
//! templates in `templates/` only choose styles and emit lines.
//!
//! Colors follow terminal detection unless turned off with `--no-color` or the
//! `NO_COLOR` environment variable (see [`init_color`]).

use super::styles::{names, SNIPZ_THEME};
use super::templates::{
    CONFIG_TEMPLATE, FULL_SNIPPET_TEMPLATE, LIST_TEMPLATE, MESSAGES_TEMPLATE, STATS_TEMPLATE,
};
use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;
use outstanding::{render, render_with_color, ThemeChoice};
use serde::Serialize;
use snipzapp::api::{CmdMessage, MessageLevel};
use snipzapp::model::{Snippet, Stats};
use snipzapp::normalize::title_of;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const PIN_MARKER: &str = "⚲";
pub const TIME_WIDTH: usize = 14;

pub const EMPTY_COLLECTION: &str = "Nothing saved yet. Add one with: snipz add <text>";
pub const NO_RESULTS: &str = "No results.";

static COLOR_OVERRIDE: OnceCell<Option<bool>> = OnceCell::new();

/// Fixes the color choice for the rest of the process. Call once at startup.
pub fn init_color(no_color: bool) {
    let disabled = no_color || std::env::var_os("NO_COLOR").is_some();
    let _ = COLOR_OVERRIDE.set(if disabled { Some(false) } else { None });
}

fn color_override() -> Option<bool> {
    COLOR_OVERRIDE.get().copied().flatten()
}

/// Renders `template` with the snipz theme. `None` means auto-detect.
pub fn render_template<T: Serialize>(template: &str, data: &T, use_color: Option<bool>) -> String {
    match use_color {
        Some(c) => render_with_color(template, data, ThemeChoice::from(&*SNIPZ_THEME), c),
        None => render(template, data, ThemeChoice::from(&*SNIPZ_THEME)),
    }
    .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_styled<T: Serialize>(template: &str, data: &T) -> String {
    render_template(template, data, color_override())
}

#[derive(Serialize)]
struct RowData {
    marker: String,
    id: String,
    title: String,
    title_style: &'static str,
    padding: String,
    time_ago: String,
    tags: String,
}

#[derive(Serialize)]
struct ListData {
    rows: Vec<RowData>,
    empty_message: &'static str,
    show_stats: bool,
    stats_line: String,
}

#[derive(Serialize)]
struct FullSnippetEntry {
    marker: String,
    id: String,
    time_ago: String,
    edited: Option<String>,
    char_count: String,
    tags: String,
    text: String,
}

#[derive(Serialize)]
struct FullSnippetData {
    snippets: Vec<FullSnippetEntry>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: String,
    padding: String,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

/// One row per snippet, then the totals line. An empty view explains whether
/// nothing matched or nothing exists yet.
pub fn render_snippet_list(snippets: &[Snippet], stats: Stats, title_width: usize) -> String {
    render_snippet_list_internal(snippets, stats, title_width, color_override())
}

fn render_snippet_list_internal(
    snippets: &[Snippet],
    stats: Stats,
    title_width: usize,
    use_color: Option<bool>,
) -> String {
    // room for the ellipsis title_of appends
    let column = title_width.saturating_add(1);
    let rows = snippets
        .iter()
        .map(|s| {
            let mut title = title_of(&s.text, title_width);
            if title.width() > column {
                title = truncate_to_width(&title, column);
            }
            let padding = " ".repeat(column.saturating_sub(title.width()));
            RowData {
                marker: pin_marker(s.pinned),
                id: format!("{:<8}", s.short_id()),
                title,
                title_style: if s.pinned {
                    names::PINNED_TITLE
                } else {
                    names::LIST_TITLE
                },
                padding,
                time_ago: format_time_ago(s.created_at),
                tags: format_tags(&s.tags),
            }
        })
        .collect();

    let data = ListData {
        rows,
        empty_message: if stats.total == 0 {
            EMPTY_COLLECTION
        } else {
            NO_RESULTS
        },
        show_stats: stats.total > 0,
        stats_line: stats_line(stats),
    };
    render_template(LIST_TEMPLATE, &data, use_color)
}

pub fn render_full_snippets(snippets: &[Snippet]) -> String {
    render_full_snippets_internal(snippets, color_override())
}

fn render_full_snippets_internal(snippets: &[Snippet], use_color: Option<bool>) -> String {
    let data = FullSnippetData {
        snippets: snippets
            .iter()
            .map(|s| FullSnippetEntry {
                marker: pin_marker(s.pinned),
                id: s.id.clone(),
                time_ago: format_time_ago(s.created_at).trim_start().to_string(),
                edited: (s.updated_at != s.created_at)
                    .then(|| format_time_ago(s.updated_at).trim_start().to_string()),
                char_count: char_count(&s.text),
                tags: format_tags(&s.tags),
                text: s.text.clone(),
            })
            .collect(),
    };
    render_template(FULL_SNIPPET_TEMPLATE, &data, use_color)
}

/// Renders command messages with a style per level.
pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, color_override())
}

fn render_messages_internal(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    if messages.is_empty() {
        return String::new();
    }
    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };
    render_template(MESSAGES_TEMPLATE, &data, use_color)
}

/// Prints command messages to stdout.
pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

pub fn render_stats(stats: Stats) -> String {
    render_styled(STATS_TEMPLATE, &stats)
}

/// Aligned `key = value` lines.
pub fn render_config(entries: &[(&str, String)]) -> String {
    let key_width = entries.iter().map(|(k, _)| k.width()).max().unwrap_or(0);
    let data = ConfigData {
        entries: entries
            .iter()
            .map(|(key, value)| ConfigEntry {
                key: key.to_string(),
                padding: " ".repeat(key_width - key.width()),
                value: value.clone(),
            })
            .collect(),
    };
    render_styled(CONFIG_TEMPLATE, &data)
}

fn stats_line(stats: Stats) -> String {
    format!("{} saved • pinned {}", stats.total, stats.pinned)
}

fn char_count(text: &str) -> String {
    let count = text.chars().count();
    format!("{} {}", count, if count == 1 { "char" } else { "chars" })
}

fn pin_marker(pinned: bool) -> String {
    if pinned {
        PIN_MARKER.to_string()
    } else {
        " ".to_string()
    }
}

fn format_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ")
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
