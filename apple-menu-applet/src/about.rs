// Copyright 2025 System76 <info@system76.com>
// SPDX-License-Identifier: GPL-3.0-only

//! Live OS identification for the about dialog and the log-out label.

use rustix::system::uname;

/// Snapshot of `uname(2)`, gathered when the about dialog is requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemInfo {
    pub os_name: String,
    pub kernel_release: String,
    pub kernel_version: String,
    pub architecture: String,
    pub hostname: String,
}

impl SystemInfo {
    pub fn current() -> Self {
        let un = uname();

        Self {
            os_name: un.sysname().to_string_lossy().into_owned(),
            kernel_release: un.release().to_string_lossy().into_owned(),
            kernel_version: un.version().to_string_lossy().into_owned(),
            architecture: un.machine().to_string_lossy().into_owned(),
            hostname: un.nodename().to_string_lossy().into_owned(),
        }
    }
}

/// Name of the user the panel session runs as.
pub fn current_username() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("LOGNAME"))
        .unwrap_or_else(|_| String::from("unknown"))
}
