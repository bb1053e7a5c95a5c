//! Menu presentation over `rofi` in dmenu mode.
//!
//! rofi is used as a pure filter: options go in on stdin, the chosen
//! line comes back on stdout. An empty result means the user
//! cancelled. rofi's exit status is not consulted: cancelling exits
//! non-zero with empty output, which maps to a no-op.

use std::path::PathBuf;

use tracing::debug;

use crate::command::CommandRunner;
use crate::error::{Error, Result};

const ROFI: &str = "rofi";

// Theme files live under `<config dir>/rofi/`; their content is opaque
// here.
const LIST_THEME: &str = "rofi/wifi.rasi";
const PASSWORD_THEME: &str = "rofi/password.rasi";

/// Menu presenter: rofi invocations plus resolved theme paths.
pub struct Menu<'a> {
    runner: &'a dyn CommandRunner,
    list_theme: PathBuf,
    password_theme: PathBuf,
}

impl<'a> Menu<'a> {
    /// Resolves theme paths under the user configuration directory
    /// (`$XDG_CONFIG_HOME`, falling back to `~/.config`).
    pub fn new(runner: &'a dyn CommandRunner) -> Result<Self> {
        let config = dirs::config_dir().ok_or(Error::NoConfigDir)?;
        Ok(Self {
            runner,
            list_theme: config.join(LIST_THEME),
            password_theme: config.join(PASSWORD_THEME),
        })
    }

    /// Present `options` under `prompt`; returns the chosen label
    /// verbatim, or an empty string when the user cancels. Free text
    /// typed into rofi comes back the same way as a listed label.
    pub fn show_list(&self, prompt: &str, options: &[String]) -> Result<String> {
        debug!(prompt = %prompt, option_count = options.len(), "showing menu");
        let theme = self.list_theme.display().to_string();
        self.select(
            &["-dmenu", "-i", "-p", prompt, "-theme", &theme],
            &options.join("\n"),
        )
    }

    /// Single masked-input field; returns the entry, empty meaning
    /// cancelled or nothing typed.
    pub fn prompt_secret(&self, prompt: &str) -> Result<String> {
        debug!(prompt = %prompt, "showing password prompt");
        let theme = self.password_theme.display().to_string();
        self.select(&["-dmenu", "-password", "-p", prompt, "-theme", &theme], "")
    }

    fn select(&self, args: &[&str], input: &str) -> Result<String> {
        let output = self
            .runner
            .run_with_input(ROFI, args, input)
            .map_err(|source| Error::Spawn { tool: ROFI, source })?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
