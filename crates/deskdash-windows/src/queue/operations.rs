//! Mutating operations on FocusQueue: insertion and move-to-front.

use super::types::Link;
use super::FocusQueue;

impl FocusQueue {
    /// Append the next slot index at the back. Returns the new slot.
    pub fn push_back(&mut self) -> usize {
        let slot = self.links.len();
        self.links.push(Link {
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.links[tail].next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        slot
    }

    /// Insert the next slot index at the front. Returns the new slot.
    pub fn push_front(&mut self) -> usize {
        let slot = self.links.len();
        self.links.push(Link {
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(head) => self.links[head].prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
        slot
    }

    /// Move an existing slot to the front. Returns `false` if the slot is unknown.
    pub fn move_to_front(&mut self, slot: usize) -> bool {
        if !self.contains(slot) {
            return false;
        }
        if self.head == Some(slot) {
            return true;
        }

        self.unlink(slot);
        self.links[slot] = Link {
            prev: None,
            next: self.head,
        };
        match self.head {
            Some(head) => self.links[head].prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
        true
    }

    fn unlink(&mut self, slot: usize) {
        let Link { prev, next } = self.links[slot];
        match prev {
            Some(p) => self.links[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.links[n].prev = prev,
            None => self.tail = prev,
        }
    }
}
