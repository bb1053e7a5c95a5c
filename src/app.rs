//! Connection control flow.
//!
//! One pass per run: check the radio, list networks, open a submenu
//! for the selection, then connect or forget. "Back" re-enters the
//! listing loop with a fresh scan instead of recursing.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::error::Result;
use crate::icons::Icons;
use crate::menu::Menu;
use crate::nm::{connect_succeeded, NmCli};
use crate::notify::NotificationSender;

/// Where a submenu pass leaves the main loop.
enum SubmenuOutcome {
    /// Re-enter the listing with a fresh scan.
    Back,
    /// The run is finished, action taken or cancelled.
    Done,
}

pub struct App<'a> {
    nm: NmCli<'a>,
    menu: Menu<'a>,
    notifier: &'a dyn NotificationSender,
    icons: Icons,
    title: String,
}

impl<'a> App<'a> {
    pub fn new(
        nm: NmCli<'a>,
        menu: Menu<'a>,
        notifier: &'a dyn NotificationSender,
        icons: Icons,
    ) -> Self {
        let title = format!("{} WiFi Manager", icons.wifi);
        Self {
            nm,
            menu,
            notifier,
            icons,
            title,
        }
    }

    /// Run the picker once.
    ///
    /// With the radio off this only switches it on and notifies;
    /// re-invoking the tool then starts a normal pass.
    pub fn run(&self) -> Result<()> {
        if !self.nm.radio_enabled()? {
            self.nm.enable_radio()?;
            self.notifier.notify(&self.title, "WiFi Enabled");
            return Ok(());
        }

        loop {
            let networks = self.nm.scan()?;

            let mut options = Vec::with_capacity(networks.len());
            let mut by_label = HashMap::new();
            for network in networks {
                let label = format!("{} {}", self.icons.network(&network), network.ssid);
                options.push(label.clone());
                by_label.insert(label, network);
            }

            let prompt = format!("{} WiFi", self.icons.wifi);
            let selection = self.menu.show_list(&prompt, &options)?;
            if selection.is_empty() {
                return Ok(());
            }

            match by_label.get(&selection) {
                Some(network) => match self.submenu(&network.ssid, network.saved)? {
                    SubmenuOutcome::Back => continue,
                    SubmenuOutcome::Done => return Ok(()),
                },
                // Anything rofi returns that is not a listed label is
                // a manually typed SSID.
                None => {
                    debug!(ssid = %selection, "manual ssid entered");
                    self.connect(&selection, false)?;
                    return Ok(());
                }
            }
        }
    }

    /// Per-network submenu: Connect, Forget (saved only), Back.
    fn submenu(&self, ssid: &str, saved: bool) -> Result<SubmenuOutcome> {
        let connect = format!("{} Connect", self.icons.connect);
        let forget = format!("{} Forget Network", self.icons.forget);
        let back = format!("{} Back", self.icons.back);

        let mut options = vec![connect.clone()];
        if saved {
            options.push(forget.clone());
        }
        options.push(back.clone());

        let prompt = format!("{} {}", self.icons.wifi, ssid);
        let action = self.menu.show_list(&prompt, &options)?;

        if action == connect {
            self.connect(ssid, saved)?;
        } else if action == forget {
            self.forget(ssid)?;
        } else if action == back {
            return Ok(SubmenuOutcome::Back);
        }
        // Cancelled or free text: nothing to do.
        Ok(SubmenuOutcome::Done)
    }

    /// Bring up a saved profile, or collect a password and connect
    /// fresh. The outcome notification is driven by the output text,
    /// not the exit status.
    fn connect(&self, ssid: &str, saved: bool) -> Result<()> {
        let output = if saved {
            info!(ssid = %ssid, "bringing up saved profile");
            self.nm.connect_saved(ssid)?
        } else {
            let prompt = format!("{} Password for {}", self.icons.secured, ssid);
            let password = self.menu.prompt_secret(&prompt)?;
            if password.is_empty() {
                // Cancelled prompt: no attempt, no notification.
                debug!(ssid = %ssid, "password prompt cancelled");
                return Ok(());
            }
            info!(ssid = %ssid, "connecting to new network");
            self.nm.connect_new(ssid, &password)?
        };

        if connect_succeeded(&output) {
            info!(ssid = %ssid, "connected");
            self.notifier
                .notify(&self.title, &format!("{} connected ✅", ssid));
        } else {
            info!(ssid = %ssid, "connection failed");
            self.notifier
                .notify(&self.title, &format!("Failed to connect to {} ❌", ssid));
        }
        Ok(())
    }

    fn forget(&self, ssid: &str) -> Result<()> {
        info!(ssid = %ssid, "forgetting network");
        self.nm.forget(ssid)?;
        self.notifier
            .notify(&self.title, &format!("{} removed 🗑️", ssid));
        Ok(())
    }
}
