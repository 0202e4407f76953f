//! Ordered list of saved course ids.
//!
//! The registry stores only `(course_id, order)` pairs. Course content is
//! looked up on demand, so ids that vanish from the catalog are skipped at
//! resolve time rather than rejected at mutation time.

use std::str::FromStr;

use tracing::debug;

use crate::error::AppError;
use crate::model::{Course, CourseCatalog};

const DEFAULT_SEED: &[u32] = &[1, 3, 5];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedEntry {
    pub course_id: u32,
    pub order: u32,
}

/// Saved course ids with an explicit rank.
///
/// Invariants: a course id appears at most once, and after any removal the
/// ranks are dense and zero-based.
#[derive(Debug, Clone, Default)]
pub struct SavedCourseRegistry {
    entries: Vec<SavedEntry>,
}

impl SavedCourseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the registry in the given order; repeated ids are ignored.
    pub fn with_ids<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let mut registry = Self::new();
        for id in ids {
            if !registry.is_saved(id) {
                registry.append(id);
            }
        }
        registry
    }

    pub fn default_seed() -> Self {
        Self::with_ids(DEFAULT_SEED.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_saved(&self, course_id: u32) -> bool {
        self.entries.iter().any(|e| e.course_id == course_id)
    }

    /// Removes a saved id (closing the rank gap) or appends an unsaved one last.
    pub fn toggle_save(&mut self, course_id: u32) {
        match self.entries.iter().position(|e| e.course_id == course_id) {
            Some(idx) => {
                self.entries.remove(idx);
                self.reindex();
                debug!(course_id, remaining = self.entries.len(), "unsaved course");
            }
            None => {
                self.append(course_id);
                debug!(course_id, order = self.entries.len() - 1, "saved course");
            }
        }
    }

    pub fn move_up(&mut self, course_id: u32) {
        let sorted = self.sorted_positions();
        let Some(rank) = self.rank_of(&sorted, course_id) else {
            return;
        };
        if rank == 0 {
            return;
        }
        self.swap_orders(sorted[rank], sorted[rank - 1]);
        debug!(course_id, "moved saved course up");
    }

    pub fn move_down(&mut self, course_id: u32) {
        let sorted = self.sorted_positions();
        let Some(rank) = self.rank_of(&sorted, course_id) else {
            return;
        };
        if rank + 1 >= sorted.len() {
            return;
        }
        self.swap_orders(sorted[rank], sorted[rank + 1]);
        debug!(course_id, "moved saved course down");
    }

    pub fn apply(&mut self, op: SavedOp) {
        match op {
            SavedOp::Toggle(id) => self.toggle_save(id),
            SavedOp::MoveUp(id) => self.move_up(id),
            SavedOp::MoveDown(id) => self.move_down(id),
        }
    }

    /// Entries sorted ascending by rank.
    pub fn entries(&self) -> Vec<SavedEntry> {
        self.sorted_positions()
            .into_iter()
            .map(|pos| self.entries[pos])
            .collect()
    }

    pub fn ordered_ids(&self) -> Vec<u32> {
        self.sorted_positions()
            .into_iter()
            .map(|pos| self.entries[pos].course_id)
            .collect()
    }

    /// Maps the ordered ids through `lookup`, dropping ids it cannot find.
    pub fn resolve<T, F>(&self, mut lookup: F) -> Vec<T>
    where
        F: FnMut(u32) -> Option<T>,
    {
        self.ordered_ids()
            .into_iter()
            .filter_map(|id| {
                let found = lookup(id);
                if found.is_none() {
                    debug!(course_id = id, "saved course missing from catalog; skipped");
                }
                found
            })
            .collect()
    }

    pub fn resolve_catalog<'a>(&self, catalog: &'a CourseCatalog) -> Vec<&'a Course> {
        self.resolve(|id| catalog.lookup(id))
    }

    fn append(&mut self, course_id: u32) {
        let order = self.entries.len() as u32;
        self.entries.push(SavedEntry { course_id, order });
    }

    /// Storage positions ordered by rank; the sort is stable so equal ranks
    /// keep insertion order.
    fn sorted_positions(&self) -> Vec<usize> {
        let mut positions: Vec<usize> = (0..self.entries.len()).collect();
        positions.sort_by_key(|&pos| self.entries[pos].order);
        positions
    }

    fn rank_of(&self, sorted: &[usize], course_id: u32) -> Option<usize> {
        sorted
            .iter()
            .position(|&pos| self.entries[pos].course_id == course_id)
    }

    fn swap_orders(&mut self, a: usize, b: usize) {
        let tmp = self.entries[a].order;
        self.entries[a].order = self.entries[b].order;
        self.entries[b].order = tmp;
    }

    fn reindex(&mut self) {
        let sorted = self.entries();
        self.entries = sorted
            .into_iter()
            .enumerate()
            .map(|(rank, entry)| SavedEntry {
                course_id: entry.course_id,
                order: rank as u32,
            })
            .collect();
    }
}

/// A single saved-list mutation, written `toggle:ID`, `up:ID` or `down:ID`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavedOp {
    Toggle(u32),
    MoveUp(u32),
    MoveDown(u32),
}

impl FromStr for SavedOp {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::InvalidOp(s.to_string());
        let (verb, id) = s.trim().split_once(':').ok_or_else(invalid)?;
        let id: u32 = id.trim().parse().map_err(|_| invalid())?;
        match verb.trim().to_ascii_lowercase().as_str() {
            "toggle" => Ok(SavedOp::Toggle(id)),
            "up" => Ok(SavedOp::MoveUp(id)),
            "down" => Ok(SavedOp::MoveDown(id)),
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/saved/tests.rs"]
mod tests;
