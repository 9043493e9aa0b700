#![warn(missing_docs)]
//! Collbench Core
//!
//! This crate provides the measurement vocabulary for the harness:
//! - `TimerDef` and the static `TIMERS` registry
//! - `Stopwatch` for wall-clock deltas
//! - The three collection-construction timing functions
//! - `SizeRange` for the sampled input sizes

mod measure;
mod range;
mod timers;

pub use measure::Stopwatch;
pub use range::SizeRange;
pub use timers::{
    get_map_creation_timings, get_set_creation_timings, get_vec_creation_timings,
};

/// Pair of wall-clock measurements for one collection kind at one size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingPair {
    /// Seconds spent building the collection by repeated insertion in a loop.
    pub loop_secs: f64,
    /// Seconds spent building the collection in one shot from an iterator.
    pub comp_secs: f64,
}

/// Timer definition held in the static registry.
#[derive(Debug, Clone, Copy)]
pub struct TimerDef {
    /// Unique identifier; also the source of the output file base name.
    pub id: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Function measuring both construction strategies at a given size.
    pub runner_fn: fn(usize) -> TimingPair,
}

/// The closed set of registered timers.
///
/// Built once at compile time and read-only thereafter; identifiers are
/// unique by construction, so a lookup never races a registration.
pub static TIMERS: &[TimerDef] = &[
    TimerDef {
        id: "get_vec_creation_timings",
        description: "Vec<usize>: push in a loop vs. collect()",
        runner_fn: get_vec_creation_timings,
    },
    TimerDef {
        id: "get_map_creation_timings",
        description: "HashMap<usize, usize>: insert in a loop vs. collect()",
        runner_fn: get_map_creation_timings,
    },
    TimerDef {
        id: "get_set_creation_timings",
        description: "HashSet<usize>: insert in a loop vs. collect()",
        runner_fn: get_set_creation_timings,
    },
];

/// Look up a timer by identifier.
pub fn find_timer(id: &str) -> Option<&'static TimerDef> {
    TIMERS.iter().find(|timer| timer.id == id)
}
