// Copyright 2025 System76 <info@system76.com>
// SPDX-License-Identifier: GPL-3.0-only

//! Headless host harness: constructs the applet the way a panel would, then
//! prints the menu or dispatches one named action. Real panels embed the
//! library and apply the effects to their own widgets.

use anyhow::{bail, Result};
use apple_menu_applet::{
    localize::localize,
    menu::{MenuAction, MenuItem},
    AppleMenuApplet, Effect, Message,
};
use apple_menu_config::AppleMenuConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let _ = tracing_log::LogTracer::init();

    tracing::info!("Starting apple-menu applet with version {VERSION}");

    localize();

    let (mut applet, effects) = AppleMenuApplet::new(AppleMenuConfig::default_path());
    apply(&effects);

    match std::env::args().nth(1) {
        Some(name) => {
            let Some(action) = action_by_name(&name) else {
                bail!("unknown menu action: {name}");
            };
            apply(&applet.update(Message::Activated(action)));
        }
        None => {
            for item in &applet.menu().items {
                match item {
                    MenuItem::Entry(entry) => println!("{}", entry.label),
                    MenuItem::Separator => println!("---"),
                }
            }
        }
    }

    Ok(())
}

fn action_by_name(name: &str) -> Option<MenuAction> {
    Some(match name {
        "about" => MenuAction::AboutThisComputer,
        "preferences" => MenuAction::SystemPreferences,
        "app-store" => MenuAction::AppStore,
        "force-quit" => MenuAction::ForceQuit,
        "sleep" => MenuAction::Sleep,
        "restart" => MenuAction::Restart,
        "shutdown" => MenuAction::ShutDown,
        "lock" => MenuAction::LockScreen,
        "logout" => MenuAction::LogOut,
        _ => return None,
    })
}

fn apply(effects: &[Effect]) {
    for effect in effects {
        match effect {
            Effect::ShowAboutDialog(info) => {
                println!(
                    "{} {} {} on {} ({})",
                    info.os_name,
                    info.kernel_release,
                    info.kernel_version,
                    info.hostname,
                    info.architecture
                );
            }
            Effect::ShowErrorDialog { message, detail } => eprintln!("{message}: {detail}"),
            other => tracing::debug!(?other, "effect"),
        }
    }
}
