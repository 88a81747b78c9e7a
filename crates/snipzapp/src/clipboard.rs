//! # Clipboard Port
//!
//! Clipboard access is best-effort. [`detect`] picks a strategy once, based on
//! what the machine offers:
//!
//! - [`SystemClipboard`]: shells out to the platform tools
//!   (`pbcopy`/`pbpaste` on macOS, `wl-copy`/`wl-paste`, `xclip` or `xsel` on
//!   Linux, `clip`/`powershell` on Windows).
//! - [`UnsupportedClipboard`]: every call fails with a clear message.
//!
//! Setting `SNIPZ_CLIPBOARD=off` forces the unsupported strategy.

use crate::error::{Result, SnipzError};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

pub const CLIPBOARD_ENV: &str = "SNIPZ_CLIPBOARD";

pub trait Clipboard {
    fn write(&self, text: &str) -> Result<()>;
    fn read(&self) -> Result<String>;
}

/// A pair of external commands: one that reads stdin into the clipboard and
/// one that prints the clipboard to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipboardTool {
    pub copy: &'static str,
    pub copy_args: &'static [&'static str],
    pub paste: &'static str,
    pub paste_args: &'static [&'static str],
}

#[cfg(target_os = "macos")]
const TOOLS: &[ClipboardTool] = &[ClipboardTool {
    copy: "pbcopy",
    copy_args: &[],
    paste: "pbpaste",
    paste_args: &[],
}];

#[cfg(target_os = "windows")]
const TOOLS: &[ClipboardTool] = &[ClipboardTool {
    copy: "clip",
    copy_args: &[],
    paste: "powershell",
    paste_args: &["-noprofile", "-command", "Get-Clipboard"],
}];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const TOOLS: &[ClipboardTool] = &[
    ClipboardTool {
        copy: "wl-copy",
        copy_args: &[],
        paste: "wl-paste",
        paste_args: &["--no-newline"],
    },
    ClipboardTool {
        copy: "xclip",
        copy_args: &["-selection", "clipboard"],
        paste: "xclip",
        paste_args: &["-selection", "clipboard", "-o"],
    },
    ClipboardTool {
        copy: "xsel",
        copy_args: &["--clipboard", "--input"],
        paste: "xsel",
        paste_args: &["--clipboard", "--output"],
    },
];

pub struct SystemClipboard {
    tool: ClipboardTool,
}

impl SystemClipboard {
    pub fn new(tool: ClipboardTool) -> Self {
        Self { tool }
    }

    pub fn tool(&self) -> ClipboardTool {
        self.tool
    }
}

impl Clipboard for SystemClipboard {
    fn write(&self, text: &str) -> Result<()> {
        let name = self.tool.copy;
        let mut child = Command::new(name)
            .args(self.tool.copy_args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| SnipzError::Clipboard(format!("Failed to spawn {}: {}", name, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| SnipzError::Clipboard(format!("Failed to write to {}: {}", name, e)))?;
        }

        let status = child
            .wait()
            .map_err(|e| SnipzError::Clipboard(format!("Failed to wait for {}: {}", name, e)))?;

        if status.success() {
            Ok(())
        } else {
            Err(SnipzError::Clipboard(format!("{} exited with error", name)))
        }
    }

    fn read(&self) -> Result<String> {
        let name = self.tool.paste;
        let output = Command::new(name)
            .args(self.tool.paste_args)
            .stderr(Stdio::null())
            .output()
            .map_err(|e| SnipzError::Clipboard(format!("Failed to execute {}: {}", name, e)))?;

        if !output.status.success() {
            return Err(SnipzError::Clipboard(format!("{} exited with error", name)));
        }
        String::from_utf8(output.stdout)
            .map_err(|e| SnipzError::Clipboard(format!("Invalid UTF-8 in clipboard: {}", e)))
    }
}

#[derive(Debug, Default)]
pub struct UnsupportedClipboard;

impl Clipboard for UnsupportedClipboard {
    fn write(&self, _text: &str) -> Result<()> {
        Err(unsupported())
    }

    fn read(&self) -> Result<String> {
        Err(unsupported())
    }
}

fn unsupported() -> SnipzError {
    SnipzError::Clipboard(
        "no clipboard tool available (install wl-clipboard, xclip or xsel)".to_string(),
    )
}

/// Chooses the clipboard strategy for this machine.
pub fn detect() -> Box<dyn Clipboard> {
    if std::env::var(CLIPBOARD_ENV).is_ok_and(|v| v.eq_ignore_ascii_case("off")) {
        debug!("clipboard disabled by {}", CLIPBOARD_ENV);
        return Box::new(UnsupportedClipboard);
    }
    let path = std::env::var_os("PATH").unwrap_or_default();
    let dirs: Vec<_> = std::env::split_paths(&path).collect();
    match find_tool(TOOLS, |name| dirs.iter().any(|dir| is_executable(dir, name))) {
        Some(tool) => {
            debug!(tool = tool.copy, "using system clipboard");
            Box::new(SystemClipboard::new(tool))
        }
        None => {
            debug!("no clipboard tool found");
            Box::new(UnsupportedClipboard)
        }
    }
}

/// First tool whose copy and paste commands both exist.
fn find_tool(tools: &[ClipboardTool], exists: impl Fn(&str) -> bool) -> Option<ClipboardTool> {
    tools
        .iter()
        .find(|tool| exists(tool.copy) && exists(tool.paste))
        .copied()
}

fn is_executable(dir: &Path, name: &str) -> bool {
    if dir.join(name).is_file() {
        return true;
    }
    cfg!(windows) && dir.join(format!("{}.exe", name)).is_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: ClipboardTool = ClipboardTool {
        copy: "a-copy",
        copy_args: &[],
        paste: "a-paste",
        paste_args: &[],
    };
    const B: ClipboardTool = ClipboardTool {
        copy: "b",
        copy_args: &["-i"],
        paste: "b",
        paste_args: &["-o"],
    };

    #[test]
    fn picks_first_complete_tool() {
        let found = find_tool(&[A, B], |name| name == "b" || name == "a-copy");
        assert_eq!(found, Some(B));
    }

    #[test]
    fn no_tool_when_nothing_installed() {
        assert_eq!(find_tool(&[A, B], |_| false), None);
    }

    #[test]
    fn unsupported_always_fails() {
        let clip = UnsupportedClipboard;
        assert!(matches!(clip.write("x"), Err(SnipzError::Clipboard(_))));
        assert!(matches!(clip.read(), Err(SnipzError::Clipboard(_))));
    }
}
