use crate::error::HeapError;
use crate::weight::Weight;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Slot {
    /// Never inserted.
    Vacant,
    /// Queued at this index of the backing array.
    Queued(usize),
    /// Extracted; the id cannot re-enter.
    Spent,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Entry<W> {
    vertex: u32,
    priority: W,
}

/// Binary min-heap over dense vertex ids `0..capacity`.
///
/// Alongside the backing array it keeps a position index (id -> slot) that is
/// an exact inverse of the array's (slot -> id) content at all times, so any
/// queued vertex can be addressed for decrease-key without scanning. Every
/// swap updates both sides of the index together.
#[derive(Clone, Debug)]
pub struct IndexedMinHeap<W> {
    entries: Vec<Entry<W>>,
    slots: Vec<Slot>,
}

impl<W: Weight> IndexedMinHeap<W> {
    /// Creates a heap accepting ids `0..capacity`. The capacity is fixed.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            slots: vec![Slot::Vacant; capacity],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True iff `vertex` is currently queued (inserted and not yet extracted).
    #[inline]
    pub fn contains(&self, vertex: u32) -> bool {
        matches!(self.slots.get(vertex as usize), Some(Slot::Queued(_)))
    }

    /// Starts tracking `vertex` with priority [`Weight::INFINITY`].
    pub fn insert(&mut self, vertex: u32) -> Result<(), HeapError> {
        match self.slots.get(vertex as usize) {
            None => Err(HeapError::OutOfRange {
                vertex,
                capacity: self.slots.len(),
            }),
            Some(Slot::Vacant) => {
                let idx = self.entries.len();
                self.entries.push(Entry {
                    vertex,
                    priority: W::INFINITY,
                });
                self.slots[vertex as usize] = Slot::Queued(idx);
                Ok(())
            }
            Some(_) => Err(HeapError::AlreadyTracked { vertex }),
        }
    }

    /// Lowers `vertex`'s priority to `priority` and restores heap order.
    ///
    /// Only strictly smaller values apply; anything else is a silent no-op,
    /// which lets callers detect a winning update by comparing the stored
    /// priority afterwards.
    pub fn decrease_key(&mut self, vertex: u32, priority: W) -> Result<(), HeapError> {
        let idx = self.queued_index(vertex)?;
        if priority >= self.entries[idx].priority {
            return Ok(());
        }
        self.entries[idx].priority = priority;
        self.sift_up(idx);
        Ok(())
    }

    /// Returns the minimum `(vertex, priority)` without removing it.
    pub fn peek_min(&self) -> Result<(u32, W), HeapError> {
        self.entries
            .first()
            .map(|e| (e.vertex, e.priority))
            .ok_or(HeapError::Empty)
    }

    /// Removes and returns the minimum `(vertex, priority)`.
    pub fn extract_min(&mut self) -> Result<(u32, W), HeapError> {
        let Some(&root) = self.entries.first() else {
            return Err(HeapError::Empty);
        };

        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        self.entries.pop();
        self.slots[root.vertex as usize] = Slot::Spent;

        if let Some(moved) = self.entries.first() {
            self.slots[moved.vertex as usize] = Slot::Queued(0);
            self.sift_down(0);
        }

        Ok((root.vertex, root.priority))
    }

    /// Current priority of a queued vertex, in O(1).
    pub fn priority(&self, vertex: u32) -> Result<W, HeapError> {
        let idx = self.queued_index(vertex)?;
        Ok(self.entries[idx].priority)
    }

    fn queued_index(&self, vertex: u32) -> Result<usize, HeapError> {
        match self.slots.get(vertex as usize) {
            Some(Slot::Queued(idx)) => Ok(*idx),
            _ => Err(HeapError::NotTracked { vertex }),
        }
    }

    /// Swaps two backing slots and both sides of the position index together.
    fn swap_entries(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.slots[self.entries[a].vertex as usize] = Slot::Queued(a);
        self.slots[self.entries[b].vertex as usize] = Slot::Queued(b);
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.entries[parent].priority <= self.entries[idx].priority {
                break;
            }
            self.swap_entries(parent, idx);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.entries.len();
        loop {
            let left = idx * 2 + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut child = left;
            if right < len && self.entries[right].priority < self.entries[left].priority {
                child = right;
            }
            if self.entries[idx].priority <= self.entries[child].priority {
                break;
            }
            self.swap_entries(idx, child);
            idx = child;
        }
    }
}
