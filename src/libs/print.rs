//! Sending generated files to the OS default printer.
//!
//! The capability is a single trait, [`PrintBackend`], with one backend per
//! host family picked by [`PrintDispatcher::for_host`]:
//!
//! - **Unix-like**: `lp <file>`
//! - **Windows**: the shell "print" verb through PowerShell `Start-Process`
//! - **Configured**: a user-provided command from `config.json`
//!
//! Dispatch never fails the caller: errors are logged and swallowed.

use crate::libs::config::PrinterConfig;
use crate::libs::messages::Message;
use crate::{msg_error, msg_info};
use anyhow::Result;
use std::path::Path;
use std::process::Command;

pub trait PrintBackend {
    /// Short name shown in logs.
    fn name(&self) -> String;

    /// Sends `path` to the printer.
    fn send(&self, path: &Path) -> Result<()>;
}

/// Runs an external program with fixed arguments followed by the file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBackend {
    program: String,
    args: Vec<String>,
}

impl CommandBackend {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        CommandBackend {
            program: program.into(),
            args,
        }
    }

    /// CUPS/System V `lp`, available on Linux and macOS.
    pub fn lp() -> Self {
        Self::new("lp", Vec::new())
    }
}

impl PrintBackend for CommandBackend {
    fn name(&self) -> String {
        self.program.clone()
    }

    fn send(&self, path: &Path) -> Result<()> {
        let output = Command::new(&self.program).args(&self.args).arg(path).output()?;
        if !output.status.success() {
            let stderr = decode_command_output(&output.stderr);
            anyhow::bail!(Message::PrintCommandFailed(self.program.clone(), stderr.trim().to_string()).to_string());
        }
        Ok(())
    }
}

/// Windows shell "print" verb, i.e. the file's registered print handler.
#[derive(Debug, Clone, Default)]
pub struct ShellPrintBackend;

impl PrintBackend for ShellPrintBackend {
    fn name(&self) -> String {
        "powershell Start-Process -Verb Print".to_string()
    }

    fn send(&self, path: &Path) -> Result<()> {
        let script = format!(
            "Start-Process -FilePath '{}' -Verb Print",
            path.display().to_string().replace('\'', "''")
        );
        let mut command = Command::new("powershell");
        command.args(["-NoProfile", "-NonInteractive", "-Command", &script]);
        hide_console_window(&mut command);

        let output = command.output()?;
        if !output.status.success() {
            let stderr = decode_command_output(&output.stderr);
            anyhow::bail!(Message::PrintCommandFailed("powershell".to_string(), stderr.trim().to_string()).to_string());
        }
        Ok(())
    }
}

/// Used on hosts without a known print mechanism.
#[derive(Debug, Clone)]
pub struct UnsupportedBackend {
    os: String,
}

impl UnsupportedBackend {
    pub fn new(os: impl Into<String>) -> Self {
        UnsupportedBackend { os: os.into() }
    }
}

impl PrintBackend for UnsupportedBackend {
    fn name(&self) -> String {
        format!("unsupported ({})", self.os)
    }

    fn send(&self, _path: &Path) -> Result<()> {
        anyhow::bail!(Message::PrintUnsupportedOs(self.os.clone()).to_string())
    }
}

pub struct PrintDispatcher {
    backend: Box<dyn PrintBackend>,
}

impl PrintDispatcher {
    pub fn new(backend: Box<dyn PrintBackend>) -> Self {
        PrintDispatcher { backend }
    }

    /// A configured command wins; otherwise the backend for the host OS.
    pub fn for_host(config: Option<&PrinterConfig>) -> Self {
        if let Some(printer) = config.filter(|printer| !printer.command.trim().is_empty()) {
            return Self::new(Box::new(CommandBackend::new(printer.command.trim(), printer.args.clone())));
        }
        Self::new(default_backend(std::env::consts::OS))
    }

    pub fn backend_name(&self) -> String {
        self.backend.name()
    }

    /// Sends `path` to the printer. Returns whether it was handed off;
    /// failures are only logged.
    pub fn dispatch(&self, path: &Path) -> bool {
        let display_path = path.display().to_string();
        if !path.is_file() {
            tracing::error!(path = %display_path, "file to print is missing");
            msg_error!(Message::PrintFailed(Message::PrintFileMissing(display_path).to_string()));
            return false;
        }

        msg_info!(Message::PrintSending(display_path.clone(), self.backend.name()));
        match self.backend.send(path) {
            Ok(()) => {
                tracing::info!(path = %display_path, backend = %self.backend.name(), "print job dispatched");
                msg_info!(Message::PrintSent(display_path));
                true
            }
            Err(e) => {
                tracing::error!(path = %display_path, backend = %self.backend.name(), error = %e, "print dispatch failed");
                msg_error!(Message::PrintFailed(e.to_string()));
                false
            }
        }
    }
}

fn default_backend(os: &str) -> Box<dyn PrintBackend> {
    match os {
        "windows" => Box::new(ShellPrintBackend),
        "linux" | "macos" | "freebsd" | "openbsd" | "netbsd" | "dragonfly" => Box::new(CommandBackend::lp()),
        other => Box::new(UnsupportedBackend::new(other)),
    }
}

/// Decodes command output: UTF-8 when valid, Windows-1252 otherwise
/// (Windows console tools often write in the OEM/ANSI codepage).
pub(crate) fn decode_command_output(bytes: &[u8]) -> String {
    if let Ok(utf8) = String::from_utf8(bytes.to_vec()) {
        return utf8;
    }
    encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned()
}

#[cfg(target_os = "windows")]
fn hide_console_window(command: &mut Command) {
    use std::os::windows::process::CommandExt;
    const CREATE_NO_WINDOW: u32 = 0x08000000;
    command.creation_flags(CREATE_NO_WINDOW);
}

#[cfg(not(target_os = "windows"))]
fn hide_console_window(_command: &mut Command) {}
