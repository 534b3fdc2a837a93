//! Caller-owned mission session.
//!
//! Lifecycle
//! - Created inactive with no mission.
//! - `start` clears history and draws a first mission.
//! - `check` is called on every relevant parameter change; a pass sets `cleared`.
//! - After a clear the caller decides when to `next` (cooldown is theirs).
//! - `next` draws uniformly among missions not yet presented in this cycle and
//!   starts a new cycle once every mission has been seen.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{current_value_label, evaluate, Mission, CATALOG, NO_VALUE};
use crate::plane::{Line, Parabola};

#[derive(Clone, Debug)]
pub struct MissionSession<R: Rng = StdRng> {
    catalog: Vec<Mission>,
    current: Option<usize>,
    active: bool,
    cleared: bool,
    presented: BTreeSet<usize>,
    rng: R,
}

impl MissionSession<StdRng> {
    /// Built-in catalog, entropy-seeded RNG.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Built-in catalog, reproducible draws.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for MissionSession<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> MissionSession<R> {
    /// Built-in catalog with a caller-supplied random source.
    pub fn with_rng(rng: R) -> Self {
        Self::with_catalog(CATALOG.to_vec(), rng)
    }

    pub fn with_catalog(catalog: Vec<Mission>, rng: R) -> Self {
        Self {
            catalog,
            current: None,
            active: false,
            cleared: false,
            presented: BTreeSet::new(),
            rng,
        }
    }

    pub fn catalog(&self) -> &[Mission] {
        &self.catalog
    }
    pub fn current(&self) -> Option<&Mission> {
        self.current.and_then(|i| self.catalog.get(i))
    }
    /// Catalog index of the current mission.
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }
    pub fn is_active(&self) -> bool {
        self.active
    }
    pub fn is_cleared(&self) -> bool {
        self.cleared
    }
    /// Catalog indices presented in the current cycle.
    pub fn presented(&self) -> &BTreeSet<usize> {
        &self.presented
    }

    pub fn start(&mut self) {
        self.active = true;
        self.cleared = false;
        self.presented.clear();
        tracing::debug!(missions = self.catalog.len(), "mission session started");
        self.next();
    }

    pub fn stop(&mut self) {
        self.active = false;
        self.current = None;
        self.cleared = false;
        tracing::debug!("mission session stopped");
    }

    /// Draw the next mission; no-op on an empty catalog.
    pub fn next(&mut self) {
        self.cleared = false;
        if self.presented.len() >= self.catalog.len() {
            self.presented.clear();
            tracing::debug!("mission cycle exhausted, resetting");
        }
        let available: Vec<usize> = (0..self.catalog.len())
            .filter(|i| !self.presented.contains(i))
            .collect();
        if available.is_empty() {
            return;
        }
        let idx = available[self.rng.gen_range(0..available.len())];
        self.presented.insert(idx);
        self.current = Some(idx);
        tracing::debug!(index = idx, title = self.catalog[idx].title, "mission selected");
    }

    /// Evaluate the current mission; `false` without one. A pass marks the session cleared.
    pub fn check(&mut self, parabola: &Parabola, line: &Line) -> bool {
        let Some(mission) = self.current().copied() else {
            return false;
        };
        let passed = evaluate(&mission, parabola, line);
        if passed && !self.cleared {
            tracing::debug!(title = mission.title, "mission cleared");
            self.cleared = true;
        }
        passed
    }

    /// Measured value of the current mission, or `NO_VALUE`.
    pub fn current_value_label(&self, parabola: &Parabola, line: &Line) -> String {
        match self.current() {
            Some(mission) => current_value_label(mission, parabola, line),
            None => NO_VALUE.to_string(),
        }
    }
}
