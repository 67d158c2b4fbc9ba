//! Promotion and visible-cap enforcement.

use super::WindowManager;

impl WindowManager {
    /// Move a slot to the front and make it visible. Every other window
    /// implicitly shifts back one place; any other maximized window drops
    /// its maximized state.
    pub(super) fn promote(&mut self, slot: usize) {
        self.queue.move_to_front(slot);
        self.slots[slot].minimized = false;
        for (i, other) in self.slots.iter_mut().enumerate() {
            if i != slot {
                other.maximized = false;
            }
        }
    }

    /// Minimize visible windows beyond the cap, starting from the back of
    /// the queue (least recently promoted).
    pub(super) fn enforce_cap(&mut self) {
        let overflow: Vec<usize> = self
            .queue
            .iter()
            .filter(|&slot| self.slots[slot].is_visible())
            .skip(self.max_visible)
            .collect();

        for slot in overflow {
            tracing::debug!(window = %self.slots[slot].id, "demoted by visible cap");
            self.slots[slot].minimized = true;
            self.slots[slot].maximized = false;
        }
    }

    /// The visible window closest to the back of the queue.
    pub(super) fn rightmost_visible(&self) -> Option<usize> {
        self.queue
            .iter_rev()
            .find(|&slot| self.slots[slot].is_visible())
    }
}
