//! # Snipz CLI
//!
//! The binary is thin: the CLI lives in `src/cli/`, while this file only calls
//! `cli::run()` and turns an error into an exit status.
//!
//! ## Workspace Structure
//!
//! - `crates/snipzapp/`: the snippet engine, with no terminal concerns
//! - `crates/snipz/`: this CLI, one client of `snipzapp`
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/snipz/src/cli/)                          │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal rendering via outstanding templates (render.rs) │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/snipzapp/src/api.rs)                     │
//! │  - Dispatches to command modules                            │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rendering with Outstanding
//!
//! Templates live in `src/cli/templates/` and are embedded with `include_str!()`.
//! `render.rs` lays rows out and hands plain data to the templates, so layout
//! changes stay in template files.
//!
//! ## Testing Approach
//!
//! - Business logic is tested in `snipzapp`, mostly against `MemStorage`.
//! - Argument parsing and rendering have unit tests next to the code.
//! - `tests/` drives the real binary with `assert_cmd` against temp directories.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
