//! # CLI Layer
//!
//! This module is **one possible UI client** for snipz. It is not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Prompts for confirmation
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Build `AppContext` with the API and configuration
//! 3. **API Dispatch**: Call the matching `SnipzApi` method
//! 4. **Output Formatting**: Turn `CmdResult` into terminal output
//!
//! Errors bubble up as `SnipzError`; `main` prints them and exits with status 1.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext`
//! - `handle_*()`: Per-command handlers

use super::render::{
    init_color, print_messages, render_config, render_full_snippets, render_snippet_list,
    render_stats,
};
use super::setup::{
    print_grouped_help, print_subcommand_help, Cli, Commands, CoreCommands, DataCommands,
    MiscCommands, SnippetCommands,
};
use clap::Parser;
use snipzapp::api::{CmdMessage, Filter, SnipzApi, SortOrder};
use snipzapp::config::SnipzConfig;
use snipzapp::error::{Result, SnipzError};
use snipzapp::init::initialize;
use snipzapp::storage::fs::FileStorage;
use snipzapp::view::ViewParams;
use std::io::{BufRead, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "SNIPZ_LOG";

struct AppContext {
    api: SnipzApi<FileStorage>,
    config: SnipzConfig,
    config_dir: PathBuf,
    data_dir: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    init_color(cli.no_color);

    if cli.help {
        if cli.command.is_none() {
            print_grouped_help();
        } else {
            print_subcommand_help(&cli.command);
        }
        return Ok(());
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Core(cmd)) => match cmd {
            CoreCommands::Add {
                tags,
                pin,
                paste,
                text,
            } => handle_add(&mut ctx, text, &tags, pin, paste),
            CoreCommands::List {
                search,
                filter,
                sort,
            } => handle_list(&ctx, search, filter, sort),
        },
        Some(Commands::Snippet(cmd)) => match cmd {
            SnippetCommands::Show { ids } => handle_show(&ctx, &ids),
            SnippetCommands::Copy { id } => handle_copy(&ctx, &id),
            SnippetCommands::Edit { id, text, tags } => {
                handle_edit(&mut ctx, &id, text, tags.as_deref())
            }
            SnippetCommands::Pin { ids } => handle_pin(&mut ctx, &ids),
            SnippetCommands::Delete { ids } => handle_delete(&mut ctx, &ids),
        },
        Some(Commands::Data(cmd)) => match cmd {
            DataCommands::Clear { yes } => handle_clear(&mut ctx, yes),
            DataCommands::Stats => handle_stats(&ctx),
            DataCommands::Export { output } => handle_export(&ctx, output),
            DataCommands::Import { path } => handle_import(&mut ctx, &path),
        },
        Some(Commands::Misc(MiscCommands::Config)) => handle_config(&ctx),
        None => handle_list(&ctx, None, None, None),
    }
}

/// Logs go to stderr. `SNIPZ_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let ctx = initialize(cli.data_dir.clone())?;
    if let Some(warning) = &ctx.config_warning {
        print_messages(&[CmdMessage::warning(format!(
            "Config ignored, using defaults: {}",
            warning
        ))]);
    }

    Ok(AppContext {
        api: ctx.api,
        config: ctx.config,
        config_dir: ctx.config_dir,
        data_dir: ctx.data_dir,
    })
}

fn handle_add(
    ctx: &mut AppContext,
    words: Vec<String>,
    tags: &str,
    pin: bool,
    paste: bool,
) -> Result<()> {
    let result = if !words.is_empty() {
        ctx.api.add(&words.join(" "), tags, pin)?
    } else if paste {
        ctx.api.add_from_clipboard(tags, pin)?
    } else if !std::io::stdin().is_terminal() {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        ctx.api.add(&buffer, tags, pin)?
    } else {
        return Err(SnipzError::EmptyText);
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    ctx: &AppContext,
    search: Option<String>,
    filter: Option<Filter>,
    sort: Option<SortOrder>,
) -> Result<()> {
    let params = ViewParams::new(
        search.unwrap_or_default(),
        filter.unwrap_or_else(|| ctx.config.filter()),
        sort.unwrap_or_else(|| ctx.config.sort_order()),
    );
    debug!(?params, "listing");
    let result = ctx.api.list(&params)?;
    let stats = result.stats.unwrap_or_default();
    print!(
        "{}",
        render_snippet_list(&result.listed, stats, ctx.config.title_width())
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, ids: &[String]) -> Result<()> {
    let result = ctx.api.view(ids)?;
    print!("{}", render_full_snippets(&result.listed));
    print_messages(&result.messages);
    Ok(())
}

fn handle_copy(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.copy(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    id: &str,
    words: Vec<String>,
    tags: Option<&str>,
) -> Result<()> {
    let result = ctx.api.edit(id, &words.join(" "), tags)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_pin(ctx: &mut AppContext, ids: &[String]) -> Result<()> {
    let result = ctx.api.toggle_pin(ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: &[String]) -> Result<()> {
    let result = ctx.api.delete(ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext, yes: bool) -> Result<()> {
    let count = ctx.api.items().len();
    if count > 0 && !yes && !confirm(&format!("Delete all {} snippets? [y/N] ", count))? {
        print_messages(&[CmdMessage::info("Aborted")]);
        return Ok(());
    }
    let result = ctx.api.clear()?;
    print_messages(&result.messages);
    Ok(())
}

/// Prompts on stderr and reads one line from stdin. EOF counts as no.
fn confirm(prompt: &str) -> Result<bool> {
    let mut stderr = std::io::stderr();
    write!(stderr, "{}", prompt)?;
    stderr.flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.stats()?;
    println!("{}", render_stats(result.stats.unwrap_or_default()));
    Ok(())
}

fn handle_export(ctx: &AppContext, output: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.export()?;
    let Some(document) = result.export else {
        return Ok(());
    };
    let json = document.to_json()?;

    let path = output.unwrap_or_else(|| ctx.config.export_file.clone());
    if path == Path::new("-") {
        println!("{}", json);
        return Ok(());
    }

    std::fs::write(&path, json)?;
    let count = document.items.len();
    let noun = if count == 1 { "snippet" } else { "snippets" };
    print_messages(&[CmdMessage::success(format!(
        "Exported {} {} to {}",
        count,
        noun,
        path.display()
    ))]);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: &Path) -> Result<()> {
    let raw = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path)?
    };
    let result = ctx.api.import(&raw)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext) -> Result<()> {
    let config = &ctx.config;
    let entries = [
        ("config_dir", ctx.config_dir.display().to_string()),
        ("data_dir", ctx.data_dir.display().to_string()),
        ("default_sort", config.sort_order().to_string()),
        ("default_filter", config.filter().to_string()),
        ("title_width", config.title_width().to_string()),
        ("export_file", config.export_file.display().to_string()),
    ];
    print!("{}", render_config(&entries));
    Ok(())
}
