//! A two-stage pipeline that fans equation solving out over a pool
//! of worker threads.
//!
//! # Motivation
//!
//! Parsing and solving a single equation is cheap, but the input may
//! carry very many of them. The pipeline keeps one thread splitting
//! the input into records, a pool of solvers consuming them, and one
//! thread emitting results, with lock-free queues in between so no
//! hot-path transfer ever takes a lock.
//!
//! # Design
//!
//! Records flow producer → stage A → solvers → stage B → printer.
//! Each [`Stage`] pairs a bounded queue with a remaining-producer
//! counter, so downstream threads can distinguish "momentarily empty"
//! from "no more items will ever arrive" without sentinel values in
//! the data channel. All threads are spawned up front and joined at
//! shutdown; waiting is always a spin with a cooperative yield.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod chunks;
pub use chunks::fixed_chunks;

mod stage;
pub use stage::Stage;

mod pipeline;
pub use pipeline::Pipeline;
