use super::render::render_styled;
use super::templates::HELP_TEMPLATE;
use clap::{CommandFactory, Parser, Subcommand};
use serde::Serialize;
use snipzapp::api::{Filter, SortOrder};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2026-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

const ABOUT: &str = "Save, tag, pin and search text snippets";

#[derive(Parser, Debug)]
#[command(
    name = "snipz",
    bin_name = "snipz",
    version = get_version(),
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = ABOUT, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use this directory for snippets.json
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Core,
    Snippet,
    Data,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Core => "Core Commands:",
            CommandGroup::Snippet => "Per-Snippet Commands:",
            CommandGroup::Data => "Data Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "add" | "list" => Some(CommandGroup::Core),
            "show" | "copy" | "edit" | "pin" | "delete" => Some(CommandGroup::Snippet),
            "clear" | "stats" | "export" | "import" => Some(CommandGroup::Data),
            "config" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Core,
            CommandGroup::Snippet,
            CommandGroup::Data,
            CommandGroup::Misc,
        ]
    }
}

#[derive(Serialize)]
struct HelpCommand {
    name: String,
    padding: String,
    about: String,
}

#[derive(Serialize)]
struct HelpGroup {
    heading: &'static str,
    commands: Vec<HelpCommand>,
}

#[derive(Serialize)]
struct HelpOption {
    flags: &'static str,
    padding: String,
    about: &'static str,
}

#[derive(Serialize)]
struct HelpData {
    name: &'static str,
    version: String,
    about: &'static str,
    groups: Vec<HelpGroup>,
    options_heading: &'static str,
    options: Vec<HelpOption>,
}

const OPTIONS: &[(&str, &str)] = &[
    ("-v, --verbose", "Verbose output"),
    ("    --data-dir <DIR>", "Use this directory for snippets.json"),
    ("    --no-color", "Disable colored output"),
    ("-h, --help", "Print help"),
    ("-V, --version", "Print version"),
];

const NAME_COLUMN: usize = 12;

/// Returns the grouped help output as a styled string.
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown").to_string();
    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    let groups = CommandGroup::all()
        .iter()
        .filter_map(|group| {
            let commands: Vec<HelpCommand> = subcommands
                .iter()
                .filter(|sc| {
                    !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
                })
                .map(|sc| {
                    let name = sc.get_name().to_string();
                    HelpCommand {
                        padding: " ".repeat(NAME_COLUMN.saturating_sub(name.len())),
                        name,
                        about: sc.get_about().map(|s| s.to_string()).unwrap_or_default(),
                    }
                })
                .collect();
            (!commands.is_empty()).then(|| HelpGroup {
                heading: group.heading(),
                commands,
            })
        })
        .collect();

    let flags_width = OPTIONS.iter().map(|(f, _)| f.len()).max().unwrap_or(0);
    let options = OPTIONS
        .iter()
        .map(|(flags, about)| HelpOption {
            flags,
            padding: " ".repeat(flags_width - flags.len()),
            about,
        })
        .collect();

    let data = HelpData {
        name: "snipz",
        version,
        about: ABOUT,
        groups,
        options_heading: "Options:",
        options,
    };
    render_styled(HELP_TEMPLATE, &data)
}

pub fn print_grouped_help() {
    println!("{}", get_grouped_help());
}

/// Prints help for a specific subcommand using clap's built-in rendering
pub fn print_subcommand_help(command: &Option<Commands>) {
    let name = match command {
        Some(Commands::Core(c)) => match c {
            CoreCommands::Add { .. } => "add",
            CoreCommands::List { .. } => "list",
        },
        Some(Commands::Snippet(c)) => match c {
            SnippetCommands::Show { .. } => "show",
            SnippetCommands::Copy { .. } => "copy",
            SnippetCommands::Edit { .. } => "edit",
            SnippetCommands::Pin { .. } => "pin",
            SnippetCommands::Delete { .. } => "delete",
        },
        Some(Commands::Data(c)) => match c {
            DataCommands::Clear { .. } => "clear",
            DataCommands::Stats => "stats",
            DataCommands::Export { .. } => "export",
            DataCommands::Import { .. } => "import",
        },
        Some(Commands::Misc(MiscCommands::Config)) => "config",
        None => {
            print_grouped_help();
            return;
        }
    };
    print_help_for_command(name);
}

pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();
    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            print!("{}", subcmd.render_help());
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Snippet(SnippetCommands),

    #[command(flatten)]
    Data(DataCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum CoreCommands {
    /// Save a snippet from arguments, piped input or the clipboard
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Comma-separated tags
        #[arg(short, long, default_value = "")]
        tags: String,

        /// Pin the new snippet
        #[arg(long)]
        pin: bool,

        /// Take the text from the clipboard
        #[arg(long)]
        paste: bool,

        /// Text words (joined with spaces); use -- before text that starts with -
        #[arg(num_args = 0..)]
        text: Vec<String>,
    },

    /// List snippets, pinned first
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Search text and tags
        #[arg(short, long)]
        search: Option<String>,

        /// all, pinned or unpinned
        #[arg(short, long)]
        filter: Option<Filter>,

        /// newest, oldest or alphabetical
        #[arg(long)]
        sort: Option<SortOrder>,
    },
}

#[derive(Subcommand, Debug)]
pub enum SnippetCommands {
    /// Show full snippets
    #[command(alias = "v", display_order = 10)]
    Show {
        /// Ids or id prefixes
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Copy a snippet to the clipboard
    #[command(alias = "c", display_order = 11)]
    Copy {
        /// Id or id prefix
        id: String,
    },

    /// Replace a snippet's text (and optionally its tags)
    #[command(alias = "e", display_order = 12)]
    Edit {
        /// Id or id prefix
        id: String,

        /// New text words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Comma-separated tags; keeps the current tags if omitted
        #[arg(short, long)]
        tags: Option<String>,
    },

    /// Toggle the pinned flag
    #[command(alias = "p", display_order = 13)]
    Pin {
        /// Ids or id prefixes
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Delete snippets
    #[command(alias = "rm", display_order = 14)]
    Delete {
        /// Ids or id prefixes
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Delete every snippet
    #[command(display_order = 20)]
    Clear {
        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show totals
    #[command(display_order = 21)]
    Stats,

    /// Write a JSON backup
    #[command(display_order = 22)]
    Export {
        /// Output file, or - for stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Merge a JSON backup into the collection
    #[command(display_order = 23)]
    Import {
        /// Backup file, or - for stdin
        path: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Show the effective configuration
    #[command(display_order = 30)]
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("args should parse")
    }

    #[test]
    fn add_joins_trailing_words() {
        let cli = parse(&["snipz", "add", "-t", "a,b", "--pin", "hello", "world"]);
        match cli.command {
            Some(Commands::Core(CoreCommands::Add {
                text, tags, pin, ..
            })) => {
                assert_eq!(text, vec!["hello", "world"]);
                assert_eq!(tags, "a,b");
                assert!(pin);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn list_parses_filter_and_sort() {
        let cli = parse(&["snipz", "ls", "-f", "pinned", "--sort", "alpha", "-s", "x"]);
        match cli.command {
            Some(Commands::Core(CoreCommands::List {
                search,
                filter,
                sort,
            })) => {
                assert_eq!(search.as_deref(), Some("x"));
                assert_eq!(filter, Some(Filter::Pinned));
                assert_eq!(sort, Some(SortOrder::Alphabetical));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn unknown_sort_is_rejected() {
        assert!(Cli::try_parse_from(["snipz", "list", "--sort", "sideways"]).is_err());
    }

    #[test]
    fn edit_requires_text() {
        assert!(Cli::try_parse_from(["snipz", "edit", "abc"]).is_err());
    }

    #[test]
    fn aliases_resolve() {
        assert!(matches!(
            parse(&["snipz", "rm", "abc"]).command,
            Some(Commands::Snippet(SnippetCommands::Delete { .. }))
        ));
        assert!(matches!(
            parse(&["snipz", "v", "abc"]).command,
            Some(Commands::Snippet(SnippetCommands::Show { .. }))
        ));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["snipz", "stats", "--data-dir", "/tmp/x", "--no-color"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert!(cli.no_color);
    }

    #[test]
    fn every_command_has_a_group() {
        for sc in Cli::command().get_subcommands() {
            assert!(
                CommandGroup::for_command(sc.get_name()).is_some(),
                "{} has no help group",
                sc.get_name()
            );
        }
    }

    #[test]
    fn grouped_help_lists_commands() {
        let help = get_grouped_help();
        assert!(help.contains("Core Commands:"));
        assert!(help.contains("import"));
        assert!(help.contains("--data-dir"));
    }
}
