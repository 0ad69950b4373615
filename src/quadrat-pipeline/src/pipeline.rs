use std::{io, panic, thread};

use quadrat_solver::{solve, Equation, Solution};

use crate::{fixed_chunks, Stage};

/// Ring capacity of both stages.
const STAGE_CAPACITY: usize = 1024;

/// Threads reserved for the producer and the printer, which run
/// alongside the solver pool.
const RESERVED_THREADS: usize = 2;

/// The number of solver threads to run when not configured
/// explicitly.
fn default_workers() -> usize {
    let parallelism = thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1);

    parallelism.saturating_sub(RESERVED_THREADS).max(1)
}

/// Orchestrates one producer, a solver pool, and one printer over a
/// pair of lock-free stages.
///
/// Results are emitted in whatever order the solvers finish; callers
/// that need input order must not use a pool larger than one.
pub struct Pipeline {
    workers: usize,
}

impl Pipeline {
    /// Creates a pipeline sized for the available hardware
    /// parallelism.
    pub fn new() -> Self {
        Self {
            workers: default_workers(),
        }
    }

    /// Overrides the number of solver threads. Values below 1 are
    /// clamped to 1.
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Runs the full pipeline over `tokens`, writing one line per
    /// equation to `out`.
    ///
    /// Blocks until every thread has joined. On return both stages
    /// are empty: every accepted record produced exactly one result.
    pub fn run<W>(&self, tokens: &[String], out: W) -> io::Result<()>
    where
        W: io::Write + Send,
    {
        let requests: Stage<Equation> = Stage::new(STAGE_CAPACITY, 1);
        let results: Stage<Solution> = Stage::new(STAGE_CAPACITY, self.workers as u32);

        log::debug!(
            "solving {} equations on {} worker threads",
            tokens.len().div_ceil(3),
            self.workers
        );

        let status = thread::scope(|s| {
            s.spawn(|| produce(tokens, &requests));

            for _ in 0..self.workers {
                s.spawn(|| solve_loop(&requests, &results));
            }

            let printer = s.spawn(|| print_loop(&results, out));
            match printer.join() {
                Ok(status) => status,
                Err(payload) => panic::resume_unwind(payload),
            }
        });

        // Termination post-condition: everything enqueued was
        // dequeued exactly once.
        assert!(requests.is_empty(), "request stage not drained");
        assert!(results.is_empty(), "result stage not drained");

        status
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

fn produce(tokens: &[String], requests: &Stage<Equation>) {
    for equation in fixed_chunks(tokens) {
        requests.enqueue(equation);
    }
    requests.done();
}

fn solve_loop(requests: &Stage<Equation>, results: &Stage<Solution>) {
    loop {
        while let Some(equation) = requests.try_dequeue() {
            results.enqueue(solve(&equation));
        }

        if requests.is_done() {
            break;
        }
        thread::yield_now();
    }

    results.done();
}

fn print_loop<W: io::Write>(results: &Stage<Solution>, mut out: W) -> io::Result<()> {
    let mut status = Ok(());

    loop {
        while let Some(solution) = results.try_dequeue() {
            // Keep draining after a write error so the solvers never
            // block on a full stage that nobody empties.
            if status.is_ok() {
                status = writeln!(out, "{solution}");
            }
        }

        if results.is_done() {
            break;
        }
        thread::yield_now();
    }

    status
}
