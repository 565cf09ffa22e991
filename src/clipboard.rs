use anyhow::{Context, Result};
use clipboard::{ClipboardContext, ClipboardProvider};
use std::io::Write;
use std::process::{Command, Stdio};

/// Something that can take a copy of the resolved emoji.
///
/// Copying is best effort: a `false` return only changes the status line.
pub trait ClipboardWriter {
    fn try_copy(&mut self, text: &str) -> bool;
}

/// Helpers that own the clipboard selection after we exit, per platform.
#[cfg(target_os = "macos")]
const COPY_COMMANDS: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(target_os = "windows")]
const COPY_COMMANDS: &[(&str, &[&str])] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const COPY_COMMANDS: &[(&str, &[&str])] = &[
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("wl-copy", &[]),
];

/// The OS clipboard: the `clipboard` crate, with external tools as fallback.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }

    fn copy_with_context(text: &str) -> Result<()> {
        let mut ctx: ClipboardContext = ClipboardProvider::new()
            .map_err(|e| anyhow::anyhow!("Failed to initialize clipboard: {}", e))?;
        ctx.set_contents(text.to_string())
            .map_err(|e| anyhow::anyhow!("Failed to write to clipboard: {}", e))?;
        Ok(())
    }

    fn copy_with_command(text: &str) -> Result<()> {
        for (program, args) in COPY_COMMANDS {
            match pipe_to(program, args, text) {
                Ok(()) => return Ok(()),
                Err(e) => tracing::debug!(program, error = %e, "clipboard command failed"),
            }
        }
        anyhow::bail!("No clipboard command available")
    }
}

impl ClipboardWriter for SystemClipboard {
    fn try_copy(&mut self, text: &str) -> bool {
        // X11 selections die with the owning process, so on Linux the
        // external helpers go first.
        let attempts: [fn(&str) -> Result<()>; 2] = if cfg!(target_os = "linux") {
            [Self::copy_with_command, Self::copy_with_context]
        } else {
            [Self::copy_with_context, Self::copy_with_command]
        };

        for attempt in attempts {
            match attempt(text) {
                Ok(()) => return true,
                Err(e) => tracing::debug!(error = %e, "clipboard backend failed"),
            }
        }
        false
    }
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to spawn {}", program))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .with_context(|| format!("Failed to write to {}", program))?;
    }

    let status = child
        .wait()
        .with_context(|| format!("Failed to wait for {}", program))?;

    if !status.success() {
        anyhow::bail!("{} exited with {}", program, status);
    }
    Ok(())
}

/// Never copies. Used when copying is switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

impl ClipboardWriter for NoClipboard {
    fn try_copy(&mut self, _text: &str) -> bool {
        false
    }
}

impl<T: ClipboardWriter + ?Sized> ClipboardWriter for &mut T {
    fn try_copy(&mut self, text: &str) -> bool {
        (**self).try_copy(text)
    }
}

impl<T: ClipboardWriter + ?Sized> ClipboardWriter for Box<T> {
    fn try_copy(&mut self, text: &str) -> bool {
        (**self).try_copy(text)
    }
}
