//! Network queries and operations over the `nmcli` command-line tool.
//!
//! NetworkManager owns all actual network state; this module only
//! shells out and interprets the terse (`-t`) colon-delimited output.
//! Parsing lives in [`parse`] so the heuristics can be tested on
//! canned output.

mod parse;

use std::collections::HashSet;

use tracing::{debug, info};

use crate::command::CommandRunner;
use crate::error::{Error, Result};

pub use parse::connect_succeeded;

/// A visible access point, joined against the saved profile list.
///
/// Built fresh on every run, never persisted. An empty `security`
/// means an open network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiNetwork {
    pub ssid: String,
    pub security: String,
    pub saved: bool,
}

impl WifiNetwork {
    /// Whether connecting will need credentials.
    pub fn is_secured(&self) -> bool {
        !self.security.is_empty()
    }
}

const NMCLI: &str = "nmcli";

/// Thin wrapper over `nmcli` invocations.
pub struct NmCli<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> NmCli<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    /// Whether the WiFi radio reports exactly `enabled`.
    pub fn radio_enabled(&self) -> Result<bool> {
        let stdout = self.query(&["radio", "wifi"])?;
        Ok(parse::radio_enabled(&stdout))
    }

    /// Switch the WiFi radio on.
    pub fn enable_radio(&self) -> Result<()> {
        self.query(&["radio", "wifi", "on"])?;
        Ok(())
    }

    /// Names of saved wireless connection profiles.
    pub fn saved_profiles(&self) -> Result<HashSet<String>> {
        let stdout = self.query(&["-t", "-f", "NAME,TYPE", "connection", "show"])?;
        Ok(parse::saved_profiles(&stdout))
    }

    /// Currently visible access points, with the saved flag set from
    /// [`Self::saved_profiles`]. Hidden (empty-SSID) entries are
    /// dropped. Multiple access points with the same SSID produce
    /// multiple entries; nothing is merged.
    pub fn scan(&self) -> Result<Vec<WifiNetwork>> {
        let saved = self.saved_profiles()?;
        let stdout = self.query(&["-t", "-f", "SECURITY,SSID", "device", "wifi", "list"])?;
        let networks = parse::scan_list(&stdout, &saved);
        info!(network_count = networks.len(), "wifi scan complete");
        Ok(networks)
    }

    /// Bring up a saved profile by name. Returns captured stdout for
    /// the success heuristic. The exit status is not consulted: a
    /// wrong password exits non-zero but still surfaces as a
    /// failed-connection notification, not a fault.
    pub fn connect_saved(&self, name: &str) -> Result<String> {
        self.attempt(&["connection", "up", "id", name])
    }

    /// Connect with a password, creating a new profile on success.
    /// Same output contract as [`Self::connect_saved`].
    pub fn connect_new(&self, ssid: &str, password: &str) -> Result<String> {
        self.attempt(&["device", "wifi", "connect", ssid, "password", password])
    }

    /// Delete the profile for `name`. Its outcome is not checked.
    pub fn forget(&self, name: &str) -> Result<()> {
        self.attempt(&["connection", "delete", name])?;
        Ok(())
    }

    /// Run nmcli and require a clean exit. Used for queries, where a
    /// failure means the run cannot continue.
    fn query(&self, args: &[&str]) -> Result<String> {
        debug!(?args, "running nmcli");
        let output = self
            .runner
            .run(NMCLI, args)
            .map_err(|source| Error::Spawn { tool: NMCLI, source })?;
        if !output.status.success() {
            return Err(Error::ToolFailed {
                tool: NMCLI,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Run nmcli and hand back stdout regardless of exit status.
    /// Arguments are not logged here: connect invocations carry the
    /// password.
    fn attempt(&self, args: &[&str]) -> Result<String> {
        let output = self
            .runner
            .run(NMCLI, args)
            .map_err(|source| Error::Spawn { tool: NMCLI, source })?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
