//! wifi-menu - rofi WiFi picker for NetworkManager
//!
//! Lists nearby networks in a rofi menu, connects to the selection
//! (prompting for a password when there is no saved profile), and can
//! forget saved networks. Meant to be bound to a hotkey; one
//! invocation is one pass through the menu.

use anyhow::{bail, Context, Result};
use tracing_subscriber::{prelude::*, EnvFilter};

use wifi_menu::app::App;
use wifi_menu::command::{is_command_installed, RealCommandRunner};
use wifi_menu::icons::Icons;
use wifi_menu::menu::Menu;
use wifi_menu::nm::NmCli;
use wifi_menu::notify::DesktopNotifier;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    for tool in ["nmcli", "rofi"] {
        if !is_command_installed(tool) {
            bail!("{} not found on PATH", tool);
        }
    }

    let runner = RealCommandRunner;
    let notifier = DesktopNotifier;
    let menu = Menu::new(&runner).context("resolving rofi theme paths")?;
    let app = App::new(NmCli::new(&runner), menu, &notifier, Icons::default());
    app.run().context("wifi menu pass failed")
}
