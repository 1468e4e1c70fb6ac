use anyhow::{anyhow, Context, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// System clipboard with shell-tool fallbacks for headless sessions.
pub struct Clipboard {
    primary: Option<arboard::Clipboard>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self {
            primary: arboard::Clipboard::new().ok(),
        }
    }

    pub fn copy(&mut self, text: &str) -> Result<()> {
        if let Some(primary) = self.primary.as_mut() {
            if primary.set_text(text.to_owned()).is_ok() {
                return Ok(());
            }
        }

        self.primary = None;
        for command in fallback_commands() {
            match pipe_to(command, text) {
                Ok(()) => return Ok(()),
                Err(e) => tracing::debug!("clipboard fallback {:?} failed: {e:#}", command),
            }
        }
        Err(anyhow!("no clipboard backend available"))
    }
}

impl Default for Clipboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies on a blocking thread and reports the number of bytes written.
pub async fn copy_text(text: String) -> Result<usize> {
    tokio::task::spawn_blocking(move || {
        let len = text.len();
        Clipboard::new().copy(&text).map(|()| len)
    })
    .await
    .context("clipboard task panicked")?
}

fn pipe_to(command: &[&str], text: &str) -> Result<()> {
    let (program, args) = command
        .split_first()
        .context("clipboard command missing program")?;

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to spawn {program}"))?;

    // Dropping stdin closes the pipe so the tool sees EOF
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };
    if let Err(e) = written {
        let _ = child.kill();
        let _ = child.wait();
        return Err(e).context("failed to write clipboard contents");
    }

    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(anyhow!("{program} exited with {status}"))
    }
}

#[cfg(target_os = "macos")]
fn fallback_commands() -> Vec<&'static [&'static str]> {
    vec![&["pbcopy"]]
}

#[cfg(all(unix, not(target_os = "macos")))]
fn fallback_commands() -> Vec<&'static [&'static str]> {
    vec![&["xclip", "-selection", "clipboard"], &["wl-copy"]]
}

#[cfg(target_os = "windows")]
fn fallback_commands() -> Vec<&'static [&'static str]> {
    vec![&["powershell.exe", "-NoProfile", "-Command", "Set-Clipboard"]]
}

#[cfg(not(any(unix, target_os = "windows")))]
fn fallback_commands() -> Vec<&'static [&'static str]> {
    Vec::new()
}
