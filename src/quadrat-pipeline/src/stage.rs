use std::sync::atomic::{AtomicU32, Ordering};

use quadrat_queue::Queue;

/// One hop of the pipeline: a bounded queue plus a remaining-producer
/// counter.
///
/// The counter gives the stage an observable, monotonic completion
/// state without sentinel values flowing through the data channel: a
/// consumer that sees [`Stage::is_done`] return `true` knows that no
/// item will ever arrive again.
pub struct Stage<T> {
    queue: Queue<T>,
    producers: AtomicU32,
}

impl<T> Stage<T> {
    /// Creates a stage fed by `producers` upstream threads.
    ///
    /// # Panics
    ///
    /// Panics when `capacity` is not a nonzero power of two.
    pub fn new(capacity: usize, producers: u32) -> Self {
        Self {
            queue: Queue::new(capacity),
            producers: AtomicU32::new(producers),
        }
    }

    /// Inserts an item, spinning until queue space frees up.
    pub fn enqueue(&self, value: T) {
        self.queue.enqueue(value);
    }

    /// Attempts one non-blocking removal.
    pub fn try_dequeue(&self) -> Option<T> {
        self.queue.try_dequeue()
    }

    /// Signals that one producer thread will emit no more items.
    ///
    /// Must be called exactly once per producer, on the producer's
    /// own thread after its final enqueue; the completion guarantee
    /// of [`Stage::is_done`] rests on that program order.
    ///
    /// # Panics
    ///
    /// Panics when called more times than there are producers.
    pub fn done(&self) {
        let prev = self.producers.fetch_sub(1, Ordering::AcqRel);
        assert!(prev != 0, "done() called more times than there are producers");
    }

    /// Whether all producers finished and everything they emitted has
    /// been consumed. Once `true`, stays `true`.
    pub fn is_done(&self) -> bool {
        // Producer count first: a producer's enqueues precede its
        // done() in program order, so a zero count means no enqueue
        // can be in flight behind the emptiness check.
        self.producers.load(Ordering::Acquire) == 0 && self.queue.is_empty()
    }

    /// Whether the inner queue currently holds no items.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
