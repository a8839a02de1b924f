//! Minimal metrics registry shared by the gateway listeners.
//!
//! No metrics framework is pulled in; counters are plain atomics rendered in
//! the Prometheus text exposition format by the `/metrics` handler. The
//! registry maps counter names to slots in a `DashMap` so additional counters
//! register without touching the render path.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;

/// A single monotonically increasing metric.
///
/// The value only ever grows; there is no reset. Increments are atomic, so
/// concurrent request tasks never lose an update.
pub struct Counter {
    name: &'static str,
    help: &'static str,
    value: AtomicU64,
}

impl Counter {
    pub fn new(name: &'static str, help: &'static str) -> Self {
        Self {
            name,
            help,
            value: AtomicU64::new(0),
        }
    }

    /// Increment by 1.
    pub fn inc(&self) {
        self.add(1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, v: u64) {
        self.value.fetch_add(v, Ordering::Relaxed);
    }

    /// Current value.
    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Render the HELP/TYPE/value triplet, each line newline-terminated.
    fn render(&self, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", self.name, self.help);
        let _ = writeln!(out, "# TYPE {} counter", self.name);
        let _ = writeln!(out, "{} {}", self.name, self.get());
    }
}

/// Registry of named counters.
///
/// Constructed once by the composition root and shared into every
/// request-handling task; nothing else holds counter state. Registration is
/// idempotent per name, so racing callers cannot clobber a live counter.
#[derive(Default)]
pub struct MetricsRegistry {
    counters: DashMap<&'static str, Arc<Counter>>,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a counter, or return the existing one under that name.
    pub fn register_counter(&self, name: &'static str, help: &'static str) -> Arc<Counter> {
        let entry = self
            .counters
            .entry(name)
            .or_insert_with(|| Arc::new(Counter::new(name, help)));
        Arc::clone(&entry)
    }

    /// Look up a counter by name.
    pub fn counter(&self, name: &str) -> Option<Arc<Counter>> {
        self.counters.get(name).map(|e| Arc::clone(e.value()))
    }

    /// Render all registered counters in Prometheus text exposition format.
    ///
    /// Counters are ordered by name so the output is deterministic; each
    /// value is whatever the atomic held at the instant it was read.
    pub fn render(&self) -> String {
        let mut names: Vec<&'static str> = self.counters.iter().map(|e| *e.key()).collect();
        names.sort_unstable();

        let mut out = String::new();
        for name in names {
            if let Some(c) = self.counters.get(name) {
                c.render(&mut out);
            }
        }
        out
    }
}
