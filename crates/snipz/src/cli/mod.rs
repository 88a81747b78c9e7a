//! # CLI Behavior
//!
//! This is **one possible UI client** for snipz, not the application itself.
//! Only this layer knows about terminal I/O, prompts and output formatting.
//!
//! For the overall architecture, see the crate-level documentation in [`crate`].
//!
//! ## Naked Execution (`snipz`)
//!
//! Running `snipz` with no arguments is `snipz list`.
//!
//! ## Where `add` Gets Its Text
//!
//! 1. **Arguments**: `snipz add buy milk -t home`
//! 2. **Clipboard**, when `--paste` is given: `snipz add --paste`
//! 3. **Piped Input**: `git log -1 | snipz add -t git`
//!
//! Blank text is never saved, whatever the source.
//!
//! ## Ids
//!
//! Every command that takes an id also takes a unique prefix of one. Lists show
//! the first eight characters, which is almost always enough.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print results
//! - `render`: Output formatting (lists, full snippets, messages)
//! - `setup`: Argument parsing via clap, grouped help
//! - `styles`: Terminal styling
//! - `templates`: Output templates

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
