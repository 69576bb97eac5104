//! State shared by every search worker of one solve call: the deduplicated
//! solution map and the shrinking move bound.

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::path::Path;

/// Insert-only map from canonical path key to path.
#[derive(Default, Debug)]
pub struct SolutionRegistry {
    solutions: Mutex<FxHashMap<String, Path>>,
}

impl SolutionRegistry {
    pub fn new() -> Self {
        SolutionRegistry::default()
    }

    /// Records `path`. Returns `false` if an identical path was already there.
    pub fn record(&self, path: &Path) -> bool {
        let key = path.key();
        let mut solutions = self.solutions.lock();
        if solutions.contains_key(&key) {
            return false;
        }
        solutions.insert(key, path.clone());
        true
    }

    pub fn len(&self) -> usize {
        self.solutions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consumes the registry, returning the paths ordered by canonical key.
    pub fn into_paths(self) -> Vec<Path> {
        let mut entries: Vec<(String, Path)> = self.solutions.into_inner().into_iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        entries.into_iter().map(|(_, path)| path).collect()
    }
}

/// Best known solution length, shared across workers. Only ever lowered.
///
/// Reads are relaxed: a stale, larger value only costs extra search work.
#[derive(Debug)]
pub struct SharedBound {
    moves: AtomicUsize,
}

impl SharedBound {
    pub fn new(moves: usize) -> Self {
        SharedBound {
            moves: AtomicUsize::new(moves),
        }
    }

    #[inline(always)]
    pub fn get(&self) -> usize {
        self.moves.load(Ordering::Relaxed)
    }

    /// Lowers the bound to `moves` if that is smaller. Returns whether it shrank.
    #[inline]
    pub fn shrink_to(&self, moves: usize) -> bool {
        self.moves.fetch_min(moves, Ordering::Relaxed) > moves
    }
}
