//! Display glyphs for menu labels and notifications.

use crate::nm::WifiNetwork;

/// Immutable glyph set handed to the presentation code.
///
/// Defaults are Nerd Font glyphs; swap them if the launcher font lacks
/// them.
#[derive(Debug, Clone)]
pub struct Icons {
    /// Title glyph for prompts and the notification title.
    pub wifi: &'static str,
    /// Network with a saved connection profile.
    pub known: &'static str,
    /// Open network without a profile.
    pub open: &'static str,
    /// Secured network without a profile.
    pub secured: &'static str,
    /// "Connect" submenu action.
    pub connect: &'static str,
    /// "Forget Network" submenu action.
    pub forget: &'static str,
    /// "Back" submenu action.
    pub back: &'static str,
}

impl Icons {
    /// Glyph for a network row: saved beats secured beats open.
    pub fn network(&self, network: &WifiNetwork) -> &'static str {
        if network.saved {
            self.known
        } else if network.is_secured() {
            self.secured
        } else {
            self.open
        }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            wifi: "\u{f05a9}",
            known: "\u{f0193}",
            open: "\u{f09c}",
            secured: "\u{f023}",
            connect: "\u{f817}",
            forget: "\u{f0a79}",
            back: "\u{f004d}",
        }
    }
}
