//! A bounded, lock-free, multi-producer multi-consumer queue.
//!
//! # Motivation
//!
//! The pipeline stages in Quadrat hand records between threads at a
//! rate where lock acquisition on every transfer would dominate the
//! actual work. This crate provides the shared channel they use
//! instead: a fixed-capacity ring where a per-slot sequence counter,
//! not a mutex, decides which thread may touch a slot.
//!
//! # Design
//!
//! The algorithm is the classic bounded MPMC ring attributed to
//! Dmitry Vyukov. Two monotonically increasing cursors identify the
//! next logical enqueue and dequeue positions and are mapped to
//! physical slots by masking, which requires the capacity to be a
//! power of two. A thread claims a position with a compare-and-swap
//! on the cursor and then owns the slot exclusively until it
//! republishes the slot's sequence counter, so payload transfer
//! itself never contends.

#![deny(
    rust_2018_idioms,
    rustdoc::broken_intra_doc_links,
    unsafe_op_in_unsafe_fn
)]

mod queue;
pub use queue::Queue;
