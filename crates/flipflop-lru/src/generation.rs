//! Generation storage and the active/passive role marker

use std::collections::HashMap;
use ahash::RandomState;

/// One of the two key-value containers making up the cache
pub(crate) type Generation<K, V> = HashMap<K, V, RandomState>;

/// Create an empty generation with room for `capacity` entries
pub(crate) fn with_capacity<K, V>(capacity: usize) -> Generation<K, V> {
    HashMap::with_capacity_and_hasher(capacity, RandomState::new())
}

/// Which physical generation currently plays the active role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// The left generation is active
    #[default]
    Left,
    /// The right generation is active
    Right,
}

impl Side {
    /// The opposite side
    pub fn other(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// The two generations plus the role marker.
///
/// Roles are resolved through accessors rather than stored references, so a
/// clone or move carries the pairing with it.
#[derive(Debug)]
pub(crate) struct Pair<K, V> {
    left: Generation<K, V>,
    right: Generation<K, V>,
    active: Side,
}

impl<K, V> Pair<K, V> {
    pub(crate) fn new(left: Generation<K, V>, right: Generation<K, V>) -> Self {
        Self {
            left,
            right,
            active: Side::Left,
        }
    }

    pub(crate) fn active_side(&self) -> Side {
        self.active
    }

    pub(crate) fn active(&self) -> &Generation<K, V> {
        match self.active {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub(crate) fn passive(&self) -> &Generation<K, V> {
        match self.active {
            Side::Left => &self.right,
            Side::Right => &self.left,
        }
    }

    pub(crate) fn active_mut(&mut self) -> &mut Generation<K, V> {
        match self.active {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub(crate) fn passive_mut(&mut self) -> &mut Generation<K, V> {
        match self.active {
            Side::Left => &mut self.right,
            Side::Right => &mut self.left,
        }
    }

    /// Both generations as `(active, passive)`
    pub(crate) fn split_mut(&mut self) -> (&mut Generation<K, V>, &mut Generation<K, V>) {
        match self.active {
            Side::Left => (&mut self.left, &mut self.right),
            Side::Right => (&mut self.right, &mut self.left),
        }
    }

    /// Swap roles. O(1), no entries move.
    pub(crate) fn swap(&mut self) {
        self.active = self.active.other();
    }
}

impl<K: Clone, V: Clone> Clone for Pair<K, V> {
    fn clone(&self) -> Self {
        Self {
            left: self.left.clone(),
            right: self.right.clone(),
            active: self.active,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.left.clone_from(&source.left);
        self.right.clone_from(&source.right);
        self.active = source.active;
    }
}

impl<K, V> Default for Pair<K, V> {
    fn default() -> Self {
        Self::new(with_capacity(0), with_capacity(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_other() {
        assert_eq!(Side::Left.other(), Side::Right);
        assert_eq!(Side::Right.other(), Side::Left);
        assert_eq!(Side::default(), Side::Left);
    }

    #[test]
    fn test_pair_swap() {
        let mut pair: Pair<u32, u32> = Pair::default();
        pair.active_mut().insert(1, 10);

        assert_eq!(pair.active_side(), Side::Left);
        assert_eq!(pair.active().len(), 1);
        assert!(pair.passive().is_empty());

        pair.swap();

        assert_eq!(pair.active_side(), Side::Right);
        assert!(pair.active().is_empty());
        assert_eq!(pair.passive().get(&1), Some(&10));
    }

    #[test]
    fn test_pair_clone_keeps_roles() {
        let mut pair: Pair<u32, u32> = Pair::default();
        pair.active_mut().insert(1, 10);
        pair.swap();
        pair.active_mut().insert(2, 20);

        let copy = pair.clone();
        assert_eq!(copy.active_side(), Side::Right);
        assert_eq!(copy.active().get(&2), Some(&20));
        assert_eq!(copy.passive().get(&1), Some(&10));

        let mut target: Pair<u32, u32> = Pair::default();
        target.active_mut().insert(9, 90);
        target.clone_from(&pair);
        assert_eq!(target.active_side(), Side::Right);
        assert_eq!(target.active().get(&2), Some(&20));
        assert_eq!(target.passive().get(&1), Some(&10));
        assert!(!target.active().contains_key(&9));
    }

    #[test]
    fn test_split_mut_matches_roles() {
        let mut pair: Pair<u32, u32> = Pair::default();
        pair.swap();
        {
            let (active, passive) = pair.split_mut();
            active.insert(1, 1);
            passive.insert(2, 2);
        }
        assert!(pair.active().contains_key(&1));
        assert!(pair.passive().contains_key(&2));
    }
}
