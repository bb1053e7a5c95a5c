//! Simple test binary to verify the nmcli queries work without rofi

use wifi_menu::command::RealCommandRunner;
use wifi_menu::icons::Icons;
use wifi_menu::nm::NmCli;

fn main() {
    let runner = RealCommandRunner;
    let nm = NmCli::new(&runner);
    let icons = Icons::default();

    match nm.radio_enabled() {
        Ok(enabled) => println!("WiFi radio enabled: {}", enabled),
        Err(e) => eprintln!("Radio check error: {}", e),
    }

    match nm.scan() {
        Ok(networks) => {
            println!("\nFound {} networks:\n", networks.len());
            for net in &networks {
                let security = if net.security.is_empty() {
                    "open"
                } else {
                    net.security.as_str()
                };
                println!(
                    "  {} {:<20} | {}{}",
                    icons.network(net),
                    security,
                    net.ssid,
                    if net.saved { " (saved)" } else { "" }
                );
            }
        }
        Err(e) => eprintln!("Scan error: {}", e),
    }
}
