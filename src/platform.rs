//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Modifier for the copy-email shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Send shortcut shown in form hints; Ctrl+S on every platform
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Copy-email shortcut shown on the contact page
#[cfg(target_os = "macos")]
pub const COPY_SHORTCUT: &str = "Cmd+Y";

#[cfg(not(target_os = "macos"))]
pub const COPY_SHORTCUT: &str = "Ctrl+Y";
