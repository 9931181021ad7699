//! Game settings and preferences
//!
//! Held in memory for the lifetime of the process; nothing is written to disk.

/// Game settings/preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    /// Outline ball circles and squid boxes under their sprites
    pub show_hitboxes: bool,
}

impl Settings {
    /// Flip the hitbox overlay, returning the new value
    pub fn toggle_hitboxes(&mut self) -> bool {
        self.show_hitboxes = !self.show_hitboxes;
        log::info!("Hitbox overlay: {}", self.show_hitboxes);
        self.show_hitboxes
    }

    /// Label shown next to the option on the settings screen
    pub fn hitboxes_label(&self) -> &'static str {
        if self.show_hitboxes { "True" } else { "False" }
    }
}
