//! Translation of raw key and wheel input into zoom commands.
//!
//! Both functions are pure so the shortcut table can be tested without a
//! webview. A `Some` result means the gesture belongs to content zoom and the
//! caller must suppress the webview's native zoom for that event.

use serde::Deserialize;

/// A zoom gesture resolved from user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomCommand {
    In,
    Out,
    Reset,
}

/// Modifier keys that turn keys and wheel motion into zoom gestures
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ZoomModifiers {
    pub ctrl: bool,
    pub meta: bool,
}

impl ZoomModifiers {
    /// Ctrl on Linux/Windows, Cmd on macOS; either one is accepted everywhere
    pub fn is_active(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Key values that form a zoom shortcut together with an active modifier
pub const ZOOM_KEYS: [&str; 5] = ["+", "=", "-", "_", "0"];

/// A zoom gesture captured by the page-wide listener, as sent from the webview
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ZoomInput {
    Key {
        key: String,
        #[serde(flatten)]
        modifiers: ZoomModifiers,
    },
    Wheel {
        #[serde(rename = "deltaY")]
        delta_y: f64,
        #[serde(flatten)]
        modifiers: ZoomModifiers,
    },
}

/// Resolve a key press (the key's character value) into a zoom command.
pub fn zoom_command_for_key(key: &str, modifiers: ZoomModifiers) -> Option<ZoomCommand> {
    if !modifiers.is_active() {
        return None;
    }
    match key {
        "+" | "=" => Some(ZoomCommand::In),
        "-" | "_" => Some(ZoomCommand::Out),
        "0" => Some(ZoomCommand::Reset),
        _ => None,
    }
}

/// Resolve a wheel event into a zoom command.
///
/// Scrolling up (negative `delta_y`) zooms in. Trackpad pinch gestures arrive
/// as wheel events with Ctrl held, so they are covered too.
pub fn zoom_command_for_wheel(delta_y: f64, modifiers: ZoomModifiers) -> Option<ZoomCommand> {
    if !modifiers.is_active() || delta_y == 0.0 || delta_y.is_nan() {
        return None;
    }
    if delta_y < 0.0 {
        Some(ZoomCommand::In)
    } else {
        Some(ZoomCommand::Out)
    }
}
