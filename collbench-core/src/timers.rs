//! Timing Functions
//!
//! One function per collection kind, each measuring two construction
//! strategies at a given size: repeated insertion in a loop versus a single
//! `collect()` from an iterator. Each call allocates and discards the
//! collection twice so that construction cost is isolated from measurement
//! overhead. `black_box` keeps the discarded collections from being
//! optimized away.

use std::collections::{HashMap, HashSet};
use std::hint::black_box;

use crate::{Stopwatch, TimingPair};

/// Measure building a `Vec<usize>` by `push` versus by `collect()`.
pub fn get_vec_creation_timings(size: usize) -> TimingPair {
    let sw = Stopwatch::start();
    let mut items = Vec::new();
    for i in 0..size {
        items.push(i);
    }
    let loop_secs = sw.elapsed_secs();
    drop(black_box(items));

    let sw = Stopwatch::start();
    let items: Vec<usize> = (0..size).collect();
    let comp_secs = sw.elapsed_secs();
    drop(black_box(items));

    TimingPair {
        loop_secs,
        comp_secs,
    }
}

/// Measure building a `HashMap<usize, usize>` of identity pairs by keyed
/// insertion versus by `collect()`.
pub fn get_map_creation_timings(size: usize) -> TimingPair {
    let sw = Stopwatch::start();
    let mut items = HashMap::new();
    for i in 0..size {
        items.insert(i, i);
    }
    let loop_secs = sw.elapsed_secs();
    drop(black_box(items));

    let sw = Stopwatch::start();
    let items: HashMap<usize, usize> = (0..size).map(|i| (i, i)).collect();
    let comp_secs = sw.elapsed_secs();
    drop(black_box(items));

    TimingPair {
        loop_secs,
        comp_secs,
    }
}

/// Measure building a `HashSet<usize>` by insertion versus by `collect()`.
///
/// Both strategies sample exactly `size` elements. The tool this replaces
/// bounded the one-shot strategy at `size - 1` by accident; that was
/// confirmed as a defect and is corrected here.
pub fn get_set_creation_timings(size: usize) -> TimingPair {
    let sw = Stopwatch::start();
    let mut items = HashSet::new();
    for i in 0..size {
        items.insert(i);
    }
    let loop_secs = sw.elapsed_secs();
    drop(black_box(items));

    let sw = Stopwatch::start();
    let items: HashSet<usize> = (0..size).collect();
    let comp_secs = sw.elapsed_secs();
    drop(black_box(items));

    TimingPair {
        loop_secs,
        comp_secs,
    }
}
