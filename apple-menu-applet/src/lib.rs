// Copyright 2025 System76 <info@system76.com>
// SPDX-License-Identifier: GPL-3.0-only

//! An Apple-style system menu for a desktop panel: one button, one dropdown
//! of session actions, six persisted preferences. The panel host owns the
//! widgets and the event loop; this crate owns the menu model, the action
//! dispatch and the settings.

pub mod about;
pub mod applet;
pub mod launch;
pub mod localize;
pub mod menu;

pub use applet::{AppleMenuApplet, Effect, IconSize, Message, Orientation, PanelPlugin};
pub use launch::LaunchError;
