// Copyright 2025 System76 <info@system76.com>
// SPDX-License-Identifier: GPL-3.0-only

//! The menu model and the per-entry dispatch table.

use std::collections::HashMap;

use apple_menu_config::AppleMenuConfig;

use crate::fl;

/// Identity of a menu entry with a side effect. The recent-items entry is a
/// disabled placeholder and has no action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AboutThisComputer,
    SystemPreferences,
    AppStore,
    ForceQuit,
    Sleep,
    Restart,
    ShutDown,
    LockScreen,
    LogOut,
}

impl MenuAction {
    /// Command line launched for this entry, or `None` for the about
    /// dialog. Only the app-store command is user configurable.
    pub fn command<'a>(self, config: &'a AppleMenuConfig) -> Option<&'a str> {
        match self {
            Self::AboutThisComputer => None,
            Self::SystemPreferences => Some("xfce4-settings-manager"),
            Self::AppStore => Some(config.app_store_command.as_str()),
            Self::ForceQuit => Some("xkill"),
            Self::Sleep => Some("xfce4-session-logout --suspend"),
            Self::Restart => Some("xfce4-session-logout --reboot"),
            Self::ShutDown => Some("xfce4-session-logout --halt"),
            Self::LockScreen => Some("xflock4"),
            Self::LogOut => Some("xfce4-session-logout"),
        }
    }

    /// Text of the error dialog shown when the launch fails.
    pub fn failure_message(self, config: &AppleMenuConfig) -> String {
        match self {
            Self::AboutThisComputer => fl!("about-failed"),
            Self::SystemPreferences => fl!("system-preferences-failed"),
            Self::AppStore => fl!(
                "app-store-failed",
                HashMap::from_iter(vec![("command", config.app_store_command.as_str())])
            ),
            Self::ForceQuit => fl!("force-quit-failed"),
            Self::Sleep => fl!("sleep-failed"),
            Self::Restart => fl!("restart-failed"),
            Self::ShutDown => fl!("shut-down-failed"),
            Self::LockScreen => fl!("lock-screen-failed"),
            Self::LogOut => fl!("log-out-failed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    pub icon: &'static str,
    pub action: Option<MenuAction>,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    Entry(MenuEntry),
    Separator,
}

impl MenuItem {
    fn entry(label: String, icon: &'static str, action: MenuAction) -> Self {
        Self::Entry(MenuEntry {
            label,
            icon,
            action: Some(action),
            enabled: true,
        })
    }
}

/// Ordered menu contents, rebuilt whenever the preferences change.
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    pub items: Vec<MenuItem>,
    /// Alpha applied to the menu surface, `None` for host-default opacity.
    pub opacity: Option<f64>,
}

impl Menu {
    pub fn build(config: &AppleMenuConfig, username: &str) -> Self {
        let mut items = vec![
            MenuItem::entry(
                fl!("about-this-computer"),
                "computer",
                MenuAction::AboutThisComputer,
            ),
            MenuItem::Separator,
            MenuItem::entry(
                fl!("system-preferences"),
                "preferences-system",
                MenuAction::SystemPreferences,
            ),
            MenuItem::entry(
                fl!("app-store"),
                "system-software-install",
                MenuAction::AppStore,
            ),
            MenuItem::Separator,
        ];

        if config.show_recent_items {
            items.push(MenuItem::Entry(MenuEntry {
                label: fl!("recent-items"),
                icon: "document-open-recent",
                action: None,
                enabled: false,
            }));
            items.push(MenuItem::Separator);
        }

        items.extend([
            MenuItem::entry(fl!("force-quit"), "process-stop", MenuAction::ForceQuit),
            MenuItem::Separator,
            MenuItem::entry(fl!("sleep"), "system-suspend", MenuAction::Sleep),
            MenuItem::entry(fl!("restart"), "system-reboot", MenuAction::Restart),
            MenuItem::entry(fl!("shut-down"), "system-shutdown", MenuAction::ShutDown),
            MenuItem::Separator,
            MenuItem::entry(
                fl!("lock-screen"),
                "system-lock-screen",
                MenuAction::LockScreen,
            ),
            MenuItem::entry(
                fl!("log-out", HashMap::from_iter(vec![("user", username)])),
                "system-log-out",
                MenuAction::LogOut,
            ),
        ]);

        Self {
            items,
            opacity: config.opacity(),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &MenuEntry> {
        self.items.iter().filter_map(|item| match item {
            MenuItem::Entry(entry) => Some(entry),
            MenuItem::Separator => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_items_present_with_trailing_separator() {
        let config = AppleMenuConfig::default();
        let menu = Menu::build(&config, "alice");

        let position = menu
            .items
            .iter()
            .position(|item| {
                matches!(item, MenuItem::Entry(entry) if entry.action.is_none())
            })
            .expect("recent items entry missing");

        if let MenuItem::Entry(entry) = &menu.items[position] {
            assert!(!entry.enabled);
        }
        assert_eq!(menu.items[position + 1], MenuItem::Separator);
    }

    #[test]
    fn recent_items_absent_when_disabled() {
        let config = AppleMenuConfig {
            show_recent_items: false,
            ..Default::default()
        };
        let menu = Menu::build(&config, "alice");

        assert!(menu.entries().all(|entry| entry.action.is_some()));
        assert_eq!(menu.entries().count(), 9);
    }

    #[test]
    fn log_out_label_contains_username() {
        let config = AppleMenuConfig::default();
        let menu = Menu::build(&config, "alice");

        let log_out = menu
            .entries()
            .find(|entry| entry.action == Some(MenuAction::LogOut))
            .expect("log out entry missing");
        assert!(log_out.label.contains("alice"), "label: {}", log_out.label);
    }

    #[test]
    fn entry_order_is_fixed() {
        let config = AppleMenuConfig::default();
        let menu = Menu::build(&config, "alice");

        let actions: Vec<_> = menu.entries().map(|entry| entry.action).collect();
        assert_eq!(
            actions,
            vec![
                Some(MenuAction::AboutThisComputer),
                Some(MenuAction::SystemPreferences),
                Some(MenuAction::AppStore),
                None,
                Some(MenuAction::ForceQuit),
                Some(MenuAction::Sleep),
                Some(MenuAction::Restart),
                Some(MenuAction::ShutDown),
                Some(MenuAction::LockScreen),
                Some(MenuAction::LogOut),
            ]
        );
    }

    #[test]
    fn menu_opacity_follows_transparency() {
        let config = AppleMenuConfig {
            transparency: 50,
            ..Default::default()
        };
        assert_eq!(Menu::build(&config, "alice").opacity, Some(0.5));

        let config = AppleMenuConfig {
            transparency: 100,
            ..Default::default()
        };
        assert_eq!(Menu::build(&config, "alice").opacity, None);
    }

    #[test]
    fn app_store_command_comes_from_config() {
        let config = AppleMenuConfig {
            app_store_command: "flatpak run org.gnome.Software".to_owned(),
            ..Default::default()
        };
        assert_eq!(
            MenuAction::AppStore.command(&config),
            Some("flatpak run org.gnome.Software")
        );
    }

    #[test]
    fn app_store_failure_message_names_the_command() {
        let config = AppleMenuConfig {
            app_store_command: "/nonexistent-binary".to_owned(),
            ..Default::default()
        };
        assert!(MenuAction::AppStore
            .failure_message(&config)
            .contains("/nonexistent-binary"));
    }
}
