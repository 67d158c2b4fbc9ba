//! Menu clicks, title-bar actions, and taskbar restore.

use deskdash_common::types::{WindowAction, WindowId, WindowSource};

use super::types::Slot;
use super::WindowManager;

impl WindowManager {
    /// Handle a sidebar click: create, reopen, or bring the window forward.
    pub fn handle_menu_click(&mut self, id: &str) {
        self.active_menu_item = id.to_string();

        match self.slot_of(id) {
            None => {
                let slot = self.queue.push_front();
                let window_id = WindowId::from(id);
                self.slots.push(Slot {
                    title: self.catalog.resolve_title(id),
                    id: window_id.clone(),
                    source: WindowSource::Menu,
                    open: true,
                    minimized: false,
                    maximized: false,
                });
                self.index.insert(window_id, slot);
                self.promote(slot);
                tracing::debug!(window = %id, "opened from menu");
            }
            Some(slot) if !self.slots[slot].open => {
                self.slots[slot].open = true;
                self.slots[slot].maximized = false;
                self.promote(slot);
                tracing::debug!(window = %id, "reopened");
            }
            Some(slot) => {
                self.promote(slot);
                tracing::debug!(window = %id, "brought to front");
            }
        }

        self.enforce_cap();
    }

    /// Apply a title-bar action. Returns `false` if the id is unknown.
    pub fn handle_window_action(&mut self, id: &str, action: WindowAction) -> bool {
        let Some(slot) = self.slot_of(id) else {
            tracing::debug!(window = %id, %action, "action on unknown window ignored");
            return false;
        };

        match action {
            WindowAction::Minimize => {
                let s = &mut self.slots[slot];
                s.minimized = true;
                s.maximized = false;
            }
            WindowAction::Maximize => {
                if !self.slots[slot].open {
                    tracing::debug!(window = %id, "maximize on closed window ignored");
                    return false;
                }
                if self.slots[slot].maximized {
                    self.slots[slot].maximized = false;
                } else {
                    self.promote(slot);
                    self.slots[slot].maximized = true;
                    self.enforce_cap();
                }
            }
            WindowAction::Close => {
                self.slots[slot].open = false;
            }
        }

        tracing::debug!(window = %id, %action, "window action applied");
        true
    }

    /// Restore a window from the taskbar, swapping out the rightmost visible
    /// window. Returns `false` for unknown or closed ids.
    pub fn restore_window(&mut self, id: &str) -> bool {
        let Some(slot) = self.slot_of(id) else {
            return false;
        };
        if !self.slots[slot].open {
            return false;
        }

        if let Some(rightmost) = self.rightmost_visible() {
            if rightmost != slot {
                tracing::debug!(
                    window = %id,
                    demoted = %self.slots[rightmost].id,
                    "restore swaps rightmost visible window"
                );
                self.slots[rightmost].minimized = true;
                self.slots[rightmost].maximized = false;
            }
        }

        self.promote(slot);
        self.enforce_cap();
        true
    }
}
