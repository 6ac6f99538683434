// Copyright 2025 System76 <info@system76.com>
// SPDX-License-Identifier: GPL-3.0-only

//! Applet state and the single update entry point the host feeds.
//!
//! The host owns the real widgets; the applet owns everything else. Input
//! arrives as a [`Message`], and the returned [`Effect`]s tell the host what
//! to change on its button, menu and dialog surfaces. Spawning external
//! commands happens inside the update, fire and forget.

use std::path::PathBuf;

use apple_menu_config::AppleMenuConfig;

use crate::about::{self, SystemInfo};
use crate::launch;
use crate::menu::{Menu, MenuAction};

const HELP_URL: &str = "https://docs.xfce.org/xfce/xfce4-panel/start";

/// Panel orientation, forwarded to the button surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Discrete icon sizes derived from the panel row size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSize {
    Menu,
    SmallToolbar,
    LargeToolbar,
    Dnd,
    Dialog,
}

impl IconSize {
    pub fn for_panel_size(size: u32) -> Self {
        if size <= 16 {
            Self::Menu
        } else if size <= 22 {
            Self::SmallToolbar
        } else if size <= 24 {
            Self::LargeToolbar
        } else if size <= 32 {
            Self::Dnd
        } else {
            Self::Dialog
        }
    }

    pub fn pixels(self) -> u16 {
        match self {
            Self::Menu => 16,
            Self::SmallToolbar => 22,
            Self::LargeToolbar => 24,
            Self::Dnd => 32,
            Self::Dialog => 48,
        }
    }
}

/// Everything the host can tell the applet: button and menu notifications,
/// menu activations, panel lifecycle signals and preferences-dialog edits.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    ButtonClicked,
    MenuShown,
    MenuHidden,
    MenuDeactivated,
    Activated(MenuAction),
    PanelSizeChanged(u32),
    OrientationChanged(Orientation),
    ConfigureRequested,
    IconSelected(String),
    AppStoreCommandChanged(String),
    TransparencyChanged(i32),
    ShowRecentItemsToggled(bool),
    RecentItemsMaxChanged(i32),
    DialogHelp,
    DialogClosed,
    Save,
}

/// UI changes the host applies after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SetButtonIcon { name: String, size: IconSize },
    SetButtonSize(u32),
    SetButtonOrientation(Orientation),
    SetButtonOpacity(Option<f64>),
    SetMenuOpacity(Option<f64>),
    PopupMenu,
    PopdownMenu,
    /// The menu model changed; re-read it through [`AppleMenuApplet::menu`].
    MenuInvalidated,
    /// Modal, blocks the UI thread until dismissed.
    ShowAboutDialog(SystemInfo),
    ShowErrorDialog { message: String, detail: String },
    OpenPreferencesDialog,
    HidePreferencesDialog,
}

pub struct AppleMenuApplet {
    config: AppleMenuConfig,
    config_path: Option<PathBuf>,
    menu: Menu,
    menu_visible: bool,
    dialog_open: bool,
    panel_size: u32,
    orientation: Orientation,
    username: String,
}

impl AppleMenuApplet {
    /// Construct hook: loads the persisted settings from the host-provided
    /// path and builds the initial menu. The returned effects bring the
    /// button and menu surfaces in line with the loaded settings.
    pub fn new(config_path: Option<PathBuf>) -> (Self, Vec<Effect>) {
        let config = match config_path.as_deref() {
            Some(path) => AppleMenuConfig::load(path),
            None => AppleMenuConfig::default(),
        };

        let username = about::current_username();
        let menu = Menu::build(&config, &username);

        let applet = Self {
            config,
            config_path,
            menu,
            menu_visible: false,
            dialog_open: false,
            panel_size: 24,
            orientation: Orientation::default(),
            username,
        };

        let effects = applet.appearance_effects();
        (applet, effects)
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn config(&self) -> &AppleMenuConfig {
        &self.config
    }

    pub fn menu_visible(&self) -> bool {
        self.menu_visible
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::ButtonClicked => {
                if self.menu_visible {
                    self.menu_visible = false;
                    vec![Effect::PopdownMenu]
                } else {
                    self.menu_visible = true;
                    vec![Effect::PopupMenu]
                }
            }
            Message::MenuShown => {
                self.menu_visible = true;
                Vec::new()
            }
            Message::MenuHidden | Message::MenuDeactivated => {
                self.menu_visible = false;
                Vec::new()
            }
            Message::Activated(action) => self.dispatch(action),
            Message::PanelSizeChanged(size) => {
                self.panel_size = size;
                vec![
                    Effect::SetButtonIcon {
                        name: self.config.icon_name().to_owned(),
                        size: IconSize::for_panel_size(size),
                    },
                    Effect::SetButtonSize(size),
                ]
            }
            Message::OrientationChanged(orientation) => {
                self.orientation = orientation;
                vec![Effect::SetButtonOrientation(orientation)]
            }
            Message::ConfigureRequested => {
                self.dialog_open = true;
                vec![Effect::OpenPreferencesDialog]
            }
            Message::IconSelected(name) => {
                self.config.custom_icon_name = name;
                vec![Effect::SetButtonIcon {
                    name: self.config.icon_name().to_owned(),
                    size: IconSize::for_panel_size(self.panel_size),
                }]
            }
            Message::AppStoreCommandChanged(command) => {
                self.config.app_store_command = command;
                Vec::new()
            }
            Message::TransparencyChanged(value) => {
                self.config.transparency = value.clamp(0, 100);
                vec![
                    Effect::SetButtonOpacity(self.config.opacity()),
                    Effect::SetMenuOpacity(self.config.opacity()),
                ]
            }
            Message::ShowRecentItemsToggled(show) => {
                self.config.show_recent_items = show;
                Vec::new()
            }
            Message::RecentItemsMaxChanged(max) => {
                self.config.recent_items_max = max;
                Vec::new()
            }
            Message::DialogHelp => {
                let command = format!("exo-open --launch WebBrowser {HELP_URL}");
                if let Err(err) = launch::spawn_command_line(&command) {
                    tracing::warn!(%err, "unable to open the following url: {HELP_URL}");
                }
                Vec::new()
            }
            Message::DialogClosed => {
                self.save_config();
                self.rebuild_menu();
                self.dialog_open = false;
                vec![
                    Effect::MenuInvalidated,
                    Effect::SetMenuOpacity(self.config.opacity()),
                    Effect::HidePreferencesDialog,
                ]
            }
            Message::Save => {
                self.save_config();
                Vec::new()
            }
        }
    }

    /// One entry, one side effect. A spawn failure surfaces once as an
    /// error dialog and is then discarded; nothing is retried.
    fn dispatch(&self, action: MenuAction) -> Vec<Effect> {
        if let MenuAction::AboutThisComputer = action {
            return vec![Effect::ShowAboutDialog(SystemInfo::current())];
        }

        let Some(command) = action.command(&self.config) else {
            return Vec::new();
        };

        match launch::spawn_command_line(command) {
            Ok(()) => Vec::new(),
            Err(err) => {
                tracing::warn!(%err, ?action, "menu action failed");
                vec![Effect::ShowErrorDialog {
                    message: action.failure_message(&self.config),
                    detail: err.to_string(),
                }]
            }
        }
    }

    fn save_config(&self) {
        if let Some(path) = self.config_path.as_deref() {
            self.config.save(path);
        }
    }

    fn rebuild_menu(&mut self) {
        self.username = about::current_username();
        self.menu = Menu::build(&self.config, &self.username);
    }

    fn appearance_effects(&self) -> Vec<Effect> {
        vec![
            Effect::SetButtonIcon {
                name: self.config.icon_name().to_owned(),
                size: IconSize::for_panel_size(self.panel_size),
            },
            Effect::SetButtonOpacity(self.config.opacity()),
            Effect::SetMenuOpacity(self.config.opacity()),
        ]
    }
}

/// Lifecycle hooks the panel host drives. The host holds this capability
/// set; the applet implements it by feeding its own update loop.
pub trait PanelPlugin {
    fn save(&mut self) -> Vec<Effect>;
    fn size_changed(&mut self, size: u32) -> Vec<Effect>;
    fn orientation_changed(&mut self, orientation: Orientation) -> Vec<Effect>;
    fn configure_requested(&mut self) -> Vec<Effect>;
}

impl PanelPlugin for AppleMenuApplet {
    fn save(&mut self) -> Vec<Effect> {
        self.update(Message::Save)
    }

    fn size_changed(&mut self, size: u32) -> Vec<Effect> {
        self.update(Message::PanelSizeChanged(size))
    }

    fn orientation_changed(&mut self, orientation: Orientation) -> Vec<Effect> {
        self.update(Message::OrientationChanged(orientation))
    }

    fn configure_requested(&mut self) -> Vec<Effect> {
        self.update(Message::ConfigureRequested)
    }
}
