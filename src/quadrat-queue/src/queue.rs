use std::{
    cell::UnsafeCell,
    mem::MaybeUninit,
    sync::atomic::{AtomicU32, Ordering},
    thread,
};

use crossbeam_utils::CachePadded;

/// Maximum supported capacity.
///
/// Cursors are 32-bit and wrap around; classifying a slot relies on
/// the signed distance between its sequence and a cursor staying
/// representable, so the ring must be far smaller than the cursor
/// period.
const MAX_CAPACITY: usize = 1 << 30;

struct Slot<T> {
    /// Which logical round currently owns this slot. Wraps modulo
    /// 2^32 together with the cursors.
    sequence: AtomicU32,
    value: UnsafeCell<MaybeUninit<T>>,
}

/// A bounded lock-free MPMC queue over a fixed ring of slots.
///
/// Both endpoints are non-blocking: [`Queue::try_enqueue`] reports a
/// full ring and [`Queue::try_dequeue`] an empty one as ordinary
/// outcomes rather than errors. [`Queue::enqueue`] layers a
/// spin-with-yield retry on top for producers that have nothing else
/// to do until their item is delivered.
pub struct Queue<T> {
    buffer: Box<[Slot<T>]>,
    mask: u32,
    enqueue_pos: CachePadded<AtomicU32>,
    dequeue_pos: CachePadded<AtomicU32>,
}

unsafe impl<T: Send> Send for Queue<T> {}
unsafe impl<T: Send> Sync for Queue<T> {}

impl<T> Queue<T> {
    /// Creates a queue with room for `capacity` items.
    ///
    /// # Panics
    ///
    /// Panics when `capacity` is zero, not a power of two, or larger
    /// than 2^30. These are construction-time programming errors, not
    /// runtime conditions.
    pub fn new(capacity: usize) -> Self {
        assert!(
            capacity.is_power_of_two(),
            "queue capacity must be a nonzero power of two"
        );
        assert!(capacity <= MAX_CAPACITY, "queue capacity exceeds 2^30");

        let buffer = (0..capacity)
            .map(|i| Slot {
                sequence: AtomicU32::new(i as u32),
                value: UnsafeCell::new(MaybeUninit::uninit()),
            })
            .collect();

        Self {
            buffer,
            mask: (capacity - 1) as u32,
            enqueue_pos: CachePadded::new(AtomicU32::new(0)),
            dequeue_pos: CachePadded::new(AtomicU32::new(0)),
        }
    }

    /// Attempts one non-blocking insertion.
    ///
    /// Returns the value back through `Err` when the ring is full at
    /// the time of the attempt. On success the value becomes visible
    /// to exactly one future [`Queue::try_dequeue`].
    pub fn try_enqueue(&self, value: T) -> Result<(), T> {
        let mut pos = self.enqueue_pos.load(Ordering::Relaxed);

        loop {
            let slot = &self.buffer[(pos & self.mask) as usize];
            let seq = slot.sequence.load(Ordering::Acquire);
            let diff = seq.wrapping_sub(pos) as i32;

            if diff < 0 {
                // The slot still holds an item a full lap behind us.
                return Err(value);
            }

            if diff == 0 {
                // The slot is free for this position; race the other
                // producers for it. The sequence handoff carries the
                // synchronization, so the cursor CAS can be relaxed.
                match self.enqueue_pos.compare_exchange_weak(
                    pos,
                    pos.wrapping_add(1),
                    Ordering::Relaxed,
                    Ordering::Relaxed,
                ) {
                    Ok(_) => {
                        unsafe { (*slot.value.get()).write(value) };
                        slot.sequence
                            .store(pos.wrapping_add(1), Ordering::Release);
                        return Ok(());
                    }
                    Err(current) => pos = current,
                }
            } else {
                // Another producer already advanced past this slot.
                pos = self.enqueue_pos.load(Ordering::Relaxed);
            }
        }
    }

    /// Inserts `value`, spinning until a slot frees up.
    ///
    /// The thread is yielded between failed attempts so a consumer
    /// that would make progress can run. Under sustained overload
    /// this blocks indefinitely.
    pub fn enqueue(&self, mut value: T) {
        loop {
            match self.try_enqueue(value) {
                Ok(()) => return,
                Err(v) => value = v,
            }
            thread::yield_now();
        }
    }

    /// Attempts one non-blocking removal of the oldest unread item.
    pub fn try_dequeue(&self) -> Option<T> {
        let mut pos = self.dequeue_pos.load(Ordering::Relaxed);

        loop {
            let slot = &self.buffer[(pos & self.mask) as usize];
            let seq = slot.sequence.load(Ordering::Acquire);
            // A producer publishes pos + 1 into the slot it filled.
            let diff = seq.wrapping_sub(pos.wrapping_add(1)) as i32;

            if diff < 0 {
                return None;
            }

            if diff == 0 {
                match self.dequeue_pos.compare_exchange_weak(
                    pos,
                    pos.wrapping_add(1),
                    Ordering::Relaxed,
                    Ordering::Relaxed,
                ) {
                    Ok(_) => {
                        let value = unsafe { (*slot.value.get()).assume_init_read() };
                        // Republish the slot for the enqueuer one full
                        // lap ahead.
                        slot.sequence.store(
                            pos.wrapping_add(self.mask).wrapping_add(1),
                            Ordering::Release,
                        );
                        return Some(value);
                    }
                    Err(current) => pos = current,
                }
            } else {
                pos = self.dequeue_pos.load(Ordering::Relaxed);
            }
        }
    }

    /// Whether the cursors currently coincide.
    ///
    /// This is a snapshot, not a synchronization barrier; the answer
    /// may be stale by the time the caller acts on it.
    pub fn is_empty(&self) -> bool {
        self.enqueue_pos.load(Ordering::SeqCst) == self.dequeue_pos.load(Ordering::SeqCst)
    }

    /// The fixed number of slots in the ring.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        // Slots between the cursors still hold live values.
        while self.try_dequeue().is_some() {}
    }
}
