use crate::types::ResponseTag;

/// Generational handle to a leased [`ContactRecord`].
///
/// Once the record goes back to the pool the handle stops resolving, even if
/// the slot has been leased again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactId {
    index: u32,
    generation: u32,
}

/// "This object touched `other` this tick."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactRecord<H> {
    pub other: H,
    pub response: ResponseTag,
}

struct Slot<H> {
    generation: u32,
    record: Option<ContactRecord<H>>,
}

/// Free-list arena of contact records, recycled every tick.
pub struct ContactPool<H> {
    slots: Vec<Slot<H>>,
    free: Vec<u32>,
    leased: Vec<u32>,
    fresh_allocations: usize,
}

impl<H: Copy> ContactPool<H> {
    /// Create a pool with `size` records ready to lease.
    pub fn new(size: usize) -> Self {
        let mut pool = ContactPool {
            slots: Vec::with_capacity(size),
            free: Vec::with_capacity(size),
            leased: Vec::with_capacity(size),
            fresh_allocations: 0,
        };
        for _ in 0..size {
            pool.free.push(pool.slots.len() as u32);
            pool.slots.push(Slot {
                generation: 0,
                record: None,
            });
        }
        pool.free.reverse();
        pool
    }

    /// Lease a record, growing the arena when the free list is empty.
    pub fn acquire(&mut self, record: ContactRecord<H>) -> ContactId {
        let index = match self.free.pop() {
            Some(index) => index,
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    record: None,
                });
                self.fresh_allocations += 1;
                (self.slots.len() - 1) as u32
            }
        };

        let slot = &mut self.slots[index as usize];
        slot.record = Some(record);
        self.leased.push(index);
        ContactId {
            index,
            generation: slot.generation,
        }
    }

    /// Return one record. Stale or unknown handles are ignored.
    pub fn release(&mut self, id: ContactId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        if let Some(position) = self.leased.iter().position(|&index| index == id.index) {
            self.leased.swap_remove(position);
        }
        self.recycle(id.index);
        true
    }

    /// Return every leased record. Returns how many were released.
    pub fn release_all(&mut self) -> usize {
        let released = self.leased.len();
        let mut leased = std::mem::take(&mut self.leased);
        for index in leased.drain(..) {
            self.recycle(index);
        }
        self.leased = leased;
        released
    }

    pub fn get(&self, id: ContactId) -> Option<&ContactRecord<H>> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.record.as_ref())
    }

    pub fn leased(&self) -> usize {
        self.leased.len()
    }

    pub fn free(&self) -> usize {
        self.free.len()
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Records created because the free list ran dry, over the pool's life.
    pub fn fresh_allocations(&self) -> usize {
        self.fresh_allocations
    }

    fn recycle(&mut self, index: u32) {
        let slot = &mut self.slots[index as usize];
        if slot.record.take().is_some() {
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(index);
        }
    }
}
