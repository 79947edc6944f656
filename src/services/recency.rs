use std::collections::{HashMap, VecDeque};

/// Default number of recently recommended ids to remember
pub const DEFAULT_CAPACITY: usize = 10;

/// Bounded FIFO of recently recommended catalog ids.
///
/// Eviction follows insertion order; membership is answered from a count map
/// so `contains` stays O(1) even when an id was appended more than once.
#[derive(Debug, Clone)]
pub struct RecencyBuffer {
    capacity: usize,
    order: VecDeque<u64>,
    counts: HashMap<u64, usize>,
}

impl Default for RecencyBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl RecencyBuffer {
    /// Creates an empty buffer remembering at most `capacity` ids
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            order: VecDeque::with_capacity(capacity + 1),
            counts: HashMap::with_capacity(capacity + 1),
        }
    }

    /// Whether `id` is among the remembered ids
    pub fn contains(&self, id: u64) -> bool {
        self.counts.contains_key(&id)
    }

    /// Appends `id` at the tail, evicting the oldest entry once over capacity
    pub fn append(&mut self, id: u64) {
        if self.capacity == 0 {
            return;
        }

        self.order.push_back(id);
        *self.counts.entry(id).or_insert(0) += 1;

        while self.order.len() > self.capacity {
            if let Some(evicted) = self.order.pop_front() {
                self.forget(evicted);
            }
        }
    }

    /// Forgets every id
    pub fn clear(&mut self) {
        self.order.clear();
        self.counts.clear();
    }

    /// Number of remembered ids, counting repeats
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing is remembered
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Ids from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.order.iter().copied()
    }

    fn forget(&mut self, id: u64) {
        if let Some(count) = self.counts.get_mut(&id) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&id);
            }
        }
    }
}
