//! FlipFlopLru: approximate LRU over two generations
//!
//! New and refreshed entries live in the active generation. When it fills,
//! the passive generation is dropped wholesale and the roles swap, so
//! everything that was active becomes passive. Entries touched while passive
//! are promoted back; the rest are evicted at the next flip-flop.

use std::borrow::Borrow;
use std::collections::hash_map::Entry;
use std::hash::Hash;
use tracing::{debug, trace};

use crate::config::CacheConfig;
use crate::error::Result;
use crate::generation::{self, Pair, Side};

/// Fixed-capacity cache with two-generation eviction
///
/// Each generation holds at most `max_size` entries, so the cache holds at
/// most `2 * max_size`. References returned by [`get`](Self::get) and
/// [`put`](Self::put) borrow the cache mutably and end before the next call.
///
/// A zero-capacity cache keeps only the most recent entry in active, and it
/// ages out after two more insertions.
#[derive(Debug)]
pub struct FlipFlopLru<K, V> {
    /// Active/passive generations
    pair: Pair<K, V>,

    /// Per-generation capacity
    max_size: usize,
}

impl<K, V> FlipFlopLru<K, V>
where
    K: Hash + Eq,
{
    /// Create a new cache holding up to `max_size` entries per generation
    ///
    /// Only the active generation is reserved up front; the passive side
    /// allocates on the first flip-flop.
    pub fn new(max_size: usize) -> Self {
        Self::with_config(CacheConfig::new(max_size))
    }

    /// Create a new cache from a [`CacheConfig`]
    pub fn with_config(config: CacheConfig) -> Self {
        let passive = if config.reserve_passive { config.max_size } else { 0 };
        debug!(
            max_size = config.max_size,
            reserve_passive = config.reserve_passive,
            "creating flip-flop cache"
        );

        Self {
            pair: Pair::new(
                generation::with_capacity(config.max_size),
                generation::with_capacity(passive),
            ),
            max_size: config.max_size,
        }
    }

    /// Look up `key`, promoting it from passive to active on a passive hit
    ///
    /// If active is full when a passive entry is promoted, the cache
    /// flip-flops first and the promoted entry starts the fresh active
    /// generation.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        // Two lookups: returning the `get_mut` borrow from an `if let` keeps
        // `self` borrowed for the passive path below and fails to compile.
        if self.pair.active().contains_key(key) {
            return self.pair.active_mut().get_mut(key);
        }

        let (key, value) = self.pair.passive_mut().remove_entry(key)?;
        Some(self.promote(key, value))
    }

    /// Insert or overwrite `key` in the active generation
    ///
    /// Flip-flops first if active is full. A stale copy of `key` in passive
    /// is left alone until the next flip-flop clears it.
    pub fn put(&mut self, key: K, value: V) -> &mut V {
        if self.pair.active().len() >= self.max_size {
            self.flip_flop();
        }

        match self.pair.active_mut().entry(key) {
            Entry::Occupied(entry) => {
                let slot = entry.into_mut();
                *slot = value;
                slot
            }
            Entry::Vacant(entry) => entry.insert(value),
        }
    }

    /// Return the value for `key`, inserting `f()` on a miss
    ///
    /// Hits behave like [`get`](Self::get), misses like [`put`](Self::put).
    pub fn get_or_insert_with<F>(&mut self, key: K, f: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        if !self.pair.active().contains_key(&key) {
            if let Some((key, value)) = self.pair.passive_mut().remove_entry(&key) {
                return self.promote(key, value);
            }
            return self.put(key, f());
        }

        self.pair.active_mut().entry(key).or_insert_with(f)
    }

    /// Look up `key` without promoting it
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.pair
            .active()
            .get(key)
            .or_else(|| self.pair.passive().get(key))
    }

    /// Check whether `key` is held by either generation. Never promotes.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.pair.active().contains_key(key) || self.pair.passive().contains_key(key)
    }

    /// Reserve room for up to `min(n, max_size)` entries in both generations
    pub fn reserve(&mut self, n: usize) {
        let target = n.min(self.max_size);
        let (active, passive) = self.pair.split_mut();
        active.reserve(target.saturating_sub(active.len()));
        passive.reserve(target.saturating_sub(passive.len()));
    }

    /// Reserve room for `max_size` entries in both generations
    pub fn reserve_max(&mut self) {
        self.reserve(self.max_size);
    }

    /// Fallible [`reserve`](Self::reserve)
    pub fn try_reserve(&mut self, n: usize) -> Result<()> {
        let target = n.min(self.max_size);
        let (active, passive) = self.pair.split_mut();
        active.try_reserve(target.saturating_sub(active.len()))?;
        passive.try_reserve(target.saturating_sub(passive.len()))?;
        Ok(())
    }
}

impl<K, V> FlipFlopLru<K, V> {
    /// Per-generation capacity, fixed at construction
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Entry counts as `(active, passive)`
    pub fn size(&self) -> (usize, usize) {
        (self.pair.active().len(), self.pair.passive().len())
    }

    /// Total entries across both generations, stale duplicates included
    pub fn len(&self) -> usize {
        self.pair.active().len() + self.pair.passive().len()
    }

    /// Check if both generations are empty
    pub fn is_empty(&self) -> bool {
        self.pair.active().is_empty() && self.pair.passive().is_empty()
    }

    /// Which physical generation is currently active
    pub fn active_side(&self) -> Side {
        self.pair.active_side()
    }

    /// Empty both generations. Roles are left as they are.
    pub fn clear(&mut self) {
        let (active, passive) = self.pair.split_mut();
        debug!(active = active.len(), passive = passive.len(), "clearing cache");
        passive.clear();
        active.clear();
    }
}

impl<K, V> FlipFlopLru<K, V>
where
    K: Hash + Eq,
{
    /// Move an entry taken out of passive into active
    fn promote(&mut self, key: K, value: V) -> &mut V {
        if self.pair.active().len() >= self.max_size {
            self.flip_flop();
        }

        self.pair.active_mut().entry(key).or_insert(value)
    }

    /// Drop the passive generation and swap roles
    fn flip_flop(&mut self) {
        let evicted = self.pair.passive().len();
        self.pair.passive_mut().clear();
        self.pair.swap();

        // First flip-flop allocates the lazily reserved side; later ones are no-ops.
        let max_size = self.max_size;
        self.pair.active_mut().reserve(max_size);

        trace!(evicted, active = ?self.pair.active_side(), "flip-flop");
    }
}

impl<K: Clone, V: Clone> Clone for FlipFlopLru<K, V> {
    fn clone(&self) -> Self {
        Self {
            pair: self.pair.clone(),
            max_size: self.max_size,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.pair.clone_from(&source.pair);
        self.max_size = source.max_size;
    }
}

impl<K, V> Default for FlipFlopLru<K, V> {
    /// A zero-capacity cache
    fn default() -> Self {
        Self {
            pair: Pair::default(),
            max_size: 0,
        }
    }
}
