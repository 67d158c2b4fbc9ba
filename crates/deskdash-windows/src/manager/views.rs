//! Derived views, recomputed from the queue on every call.

use serde::Serialize;

use crate::commands::WindowCommand;
use crate::record::WindowRecord;

use super::WindowManager;

/// Everything a renderer needs to draw the desktop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DesktopView {
    pub visible_windows: Vec<WindowRecord>,
    pub minimized_windows: Vec<WindowRecord>,
    pub active_menu_item: String,
}

impl WindowManager {
    /// Open, non-minimized windows, front first.
    pub fn visible_windows(&self) -> Vec<WindowRecord> {
        self.collect_where(|rec| rec.is_open && !rec.is_minimized)
    }

    /// Open, minimized windows (the taskbar), front first.
    pub fn minimized_windows(&self) -> Vec<WindowRecord> {
        self.collect_where(|rec| rec.is_open && rec.is_minimized)
    }

    /// Every record, including closed ones, in queue order.
    pub fn all_windows(&self) -> Vec<WindowRecord> {
        self.collect_where(|_| true)
    }

    pub fn visible_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_visible()).count()
    }

    pub fn view(&self) -> DesktopView {
        DesktopView {
            visible_windows: self.visible_windows(),
            minimized_windows: self.minimized_windows(),
            active_menu_item: self.active_menu_item.clone(),
        }
    }

    /// Dispatch a renderer command. Returns whether it matched a window.
    pub fn execute(&mut self, command: WindowCommand) -> bool {
        match command {
            WindowCommand::MenuClick(id) => {
                self.handle_menu_click(id.as_str());
                true
            }
            WindowCommand::Action(id, action) => self.handle_window_action(id.as_str(), action),
            WindowCommand::Restore(id) => self.restore_window(id.as_str()),
        }
    }

    fn collect_where(&self, keep: impl Fn(&WindowRecord) -> bool) -> Vec<WindowRecord> {
        self.queue
            .iter()
            .enumerate()
            .map(|(order, slot)| self.snapshot(slot, order))
            .filter(|rec| keep(rec))
            .collect()
    }
}
