//! Keyboard shortcuts

use serde::Serialize;

/// Action bound to a key combination
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortcutAction {
    /// Open or close the input panel
    TogglePanel,
    /// Close the panel and drop a pending delete
    Dismiss,
    /// Read a reference from the clipboard and add it directly
    Paste,
}

impl ShortcutAction {
    /// Map a key event to an action
    ///
    /// `command` is Ctrl on most platforms and Cmd on macOS. A bare `/` only
    /// opens the panel while it is closed, so it can still be typed into it.
    pub fn from_key(key: &str, command: bool, shift: bool, panel_open: bool) -> Option<Self> {
        match key {
            "Escape" => Some(ShortcutAction::Dismiss),
            "k" | "K" if command && !shift => Some(ShortcutAction::TogglePanel),
            "v" | "V" if command && shift => Some(ShortcutAction::Paste),
            "/" if !command && !panel_open => Some(ShortcutAction::TogglePanel),
            _ => None,
        }
    }
}
