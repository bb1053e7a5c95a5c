//! Rofi-driven WiFi picker for NetworkManager.
//!
//! Everything hard is delegated: `nmcli` owns network state, `rofi`
//! renders the menus, the desktop daemon shows outcome notifications.
//! This crate is the glue in between: query, present, connect or
//! forget, notify.

pub mod app;
pub mod command;
pub mod error;
pub mod icons;
pub mod menu;
pub mod nm;
pub mod notify;

pub use error::{Error, Result};
