//! Parsers for nmcli's line-oriented, colon-delimited output.
//!
//! Failure modes are explicit: a malformed line is skipped, ambiguous
//! connect output counts as failure.

use std::collections::HashSet;

use tracing::debug;

use super::WifiNetwork;

/// Type marker suffix nmcli reports for WiFi profiles
/// (`802-11-wireless`).
const WIRELESS_TYPE_SUFFIX: &str = "wireless";

/// True iff the radio status line reads exactly `enabled`.
///
/// `disabled`, empty output, and anything else ("asleep") count as
/// off.
pub fn radio_enabled(output: &str) -> bool {
    output.lines().next().map(str::trim) == Some("enabled")
}

/// Profile names from `nmcli -t -f NAME,TYPE connection show`.
///
/// Lines look like `HomeNet:802-11-wireless`. The type field follows
/// the last colon (colons inside names arrive escaped as `\:`); only
/// wireless profiles are kept.
pub fn saved_profiles(output: &str) -> HashSet<String> {
    let mut profiles = HashSet::new();
    for line in output.lines() {
        let Some((name, kind)) = line.rsplit_once(':') else {
            if !line.is_empty() {
                debug!(line = %line, "skipping malformed connection line");
            }
            continue;
        };
        if kind.ends_with(WIRELESS_TYPE_SUFFIX) {
            profiles.insert(unescape(name));
        }
    }
    profiles
}

/// Networks from `nmcli -t -f SECURITY,SSID device wifi list`.
///
/// The security field comes first so the SSID keeps any embedded
/// colons. Lines without a separator are skipped, hidden networks
/// (empty SSID) are dropped, and repeated SSIDs from multiple access
/// points all stay in the list.
pub fn scan_list(output: &str, saved: &HashSet<String>) -> Vec<WifiNetwork> {
    let mut networks = Vec::new();
    for line in output.lines() {
        let Some((security, ssid)) = line.split_once(':') else {
            if !line.is_empty() {
                debug!(line = %line, "skipping malformed scan line");
            }
            continue;
        };
        let ssid = unescape(ssid);
        if ssid.is_empty() {
            continue;
        }
        // Tabular nmcli prints `--` where terse mode leaves the field
        // empty; both mean an open network.
        let security = if security == "--" { "" } else { security };
        networks.push(WifiNetwork {
            saved: saved.contains(&ssid),
            ssid,
            security: security.to_string(),
        });
    }
    networks
}

/// Success heuristic for connect output.
///
/// nmcli reports "Connection successfully activated ..." on success;
/// anything else, including `Error: ...` lines and ambiguous text,
/// counts as failure.
pub fn connect_succeeded(output: &str) -> bool {
    output.to_lowercase().contains("successfully")
}

/// Undo nmcli's `\:` escaping in terse values.
fn unescape(field: &str) -> String {
    field.replace("\\:", ":")
}
