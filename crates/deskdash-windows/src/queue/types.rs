//! Core types for the focus queue.

/// Links of one slot in the queue. Slots are indices into the manager's
/// record arena; records are never removed, so indices stay stable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct Link {
    pub(super) prev: Option<usize>,
    pub(super) next: Option<usize>,
}

/// A doubly-linked list threaded through an arena of slot indices.
///
/// The front of the queue is the most recently promoted window. A slot's
/// position in the queue is what the outside world sees as its `order`.
/// Moving a slot to the front is O(1).
#[derive(Debug, Clone, Default)]
pub struct FocusQueue {
    pub(super) links: Vec<Link>,
    pub(super) head: Option<usize>,
    pub(super) tail: Option<usize>,
}

impl FocusQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots in the queue.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Slot at the front, if any.
    pub fn front(&self) -> Option<usize> {
        self.head
    }

    /// Slot at the back, if any.
    pub fn back(&self) -> Option<usize> {
        self.tail
    }

    pub fn contains(&self, slot: usize) -> bool {
        slot < self.links.len()
    }

    /// Iterate slots front to back.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            queue: self,
            cursor: self.head,
            forward: true,
        }
    }

    /// Iterate slots back to front.
    pub fn iter_rev(&self) -> Iter<'_> {
        Iter {
            queue: self,
            cursor: self.tail,
            forward: false,
        }
    }

    /// Zero-based position of `slot` from the front. O(n).
    pub fn rank(&self, slot: usize) -> Option<usize> {
        self.iter().position(|s| s == slot)
    }
}

pub struct Iter<'a> {
    queue: &'a FocusQueue,
    cursor: Option<usize>,
    forward: bool,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let slot = self.cursor?;
        let link = self.queue.links[slot];
        self.cursor = if self.forward { link.next } else { link.prev };
        Some(slot)
    }
}
