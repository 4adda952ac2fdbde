//! Frontier selection: discovered cells awaiting expansion.
//!
//! Cells are addressed by their flat grid index. Extraction order is lowest
//! `f` first, then lowest `h`, then earliest insertion or update. With every
//! `h` equal to 0 and uniform step costs the order is breadth-first.
//!
//! Two implementations share the [`Frontier`] contract and produce identical
//! extraction sequences:
//!
//! | Type | Extraction | Update |
//! |---|---|---|
//! | [`IndexedHeap`] | O(log n) | O(log n) decrease-key |
//! | [`ScanList`] | O(n) scan | O(n) lookup |

use std::cmp::Ordering;

/// Selection key of a frontier entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Priority {
    pub f: u32,
    pub h: u32,
}

/// The set of discovered, not yet finalized cells.
pub trait Frontier {
    /// Insert `idx`, or re-key it if already present.
    fn insert_or_update(&mut self, idx: usize, key: Priority);

    /// Remove and return the entry with the smallest key.
    fn extract_min(&mut self) -> Option<usize>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Which [`Frontier`] implementation a search uses.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrontierKind {
    #[default]
    Heap,
    Scan,
}

impl FrontierKind {
    /// Build an empty frontier sized for `capacity` cells.
    pub fn build(self, capacity: usize) -> Box<dyn Frontier> {
        match self {
            Self::Heap => Box::new(IndexedHeap::with_capacity(capacity)),
            Self::Scan => Box::new(ScanList::default()),
        }
    }
}

#[derive(Copy, Clone, Debug)]
struct Entry {
    idx: usize,
    key: Priority,
    seq: u64,
}

impl Entry {
    #[inline]
    fn rank(&self, other: &Self) -> Ordering {
        self.key
            .f
            .cmp(&other.key.f)
            .then(self.key.h.cmp(&other.key.h))
            .then(self.seq.cmp(&other.seq))
    }
}

const ABSENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// IndexedHeap
// ---------------------------------------------------------------------------

/// Binary min-heap with a position index for decrease-key.
#[derive(Clone, Debug, Default)]
pub struct IndexedHeap {
    heap: Vec<Entry>,
    /// `pos[idx]` is the heap slot of cell `idx`, or `ABSENT`.
    pos: Vec<usize>,
    seq: u64,
}

impl IndexedHeap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a heap whose position index covers `capacity` cells up front.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::new(),
            pos: vec![ABSENT; capacity],
            seq: 0,
        }
    }

    fn place(&mut self, slot: usize) {
        let idx = self.heap[slot].idx;
        self.pos[idx] = slot;
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.place(a);
        self.place(b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[slot].rank(&self.heap[parent]) != Ordering::Less {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            if left >= n {
                break;
            }
            let right = left + 1;
            let mut child = left;
            if right < n && self.heap[right].rank(&self.heap[left]) == Ordering::Less {
                child = right;
            }
            if self.heap[child].rank(&self.heap[slot]) != Ordering::Less {
                break;
            }
            self.swap(slot, child);
            slot = child;
        }
    }
}

impl Frontier for IndexedHeap {
    fn insert_or_update(&mut self, idx: usize, key: Priority) {
        if idx >= self.pos.len() {
            self.pos.resize(idx + 1, ABSENT);
        }
        self.seq += 1;
        let entry = Entry {
            idx,
            key,
            seq: self.seq,
        };
        match self.pos[idx] {
            ABSENT => {
                self.heap.push(entry);
                let slot = self.heap.len() - 1;
                self.place(slot);
                self.sift_up(slot);
            }
            slot => {
                self.heap[slot] = entry;
                self.sift_up(slot);
                let slot = self.pos[idx];
                self.sift_down(slot);
            }
        }
    }

    fn extract_min(&mut self) -> Option<usize> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let top = self.heap.pop()?;
        self.pos[top.idx] = ABSENT;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(top.idx)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

// ---------------------------------------------------------------------------
// ScanList
// ---------------------------------------------------------------------------

/// Unordered list scanned in full on every extraction.
#[derive(Clone, Debug, Default)]
pub struct ScanList {
    entries: Vec<Entry>,
    seq: u64,
}

impl Frontier for ScanList {
    fn insert_or_update(&mut self, idx: usize, key: Priority) {
        self.seq += 1;
        let entry = Entry {
            idx,
            key,
            seq: self.seq,
        };
        match self.entries.iter_mut().find(|e| e.idx == idx) {
            Some(e) => *e = entry,
            None => self.entries.push(entry),
        }
    }

    fn extract_min(&mut self) -> Option<usize> {
        let best = self
            .entries
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.rank(b))
            .map(|(i, _)| i)?;
        Some(self.entries.swap_remove(best).idx)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
