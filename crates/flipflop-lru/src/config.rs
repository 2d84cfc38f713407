//! Cache construction settings

/// Settings for [`FlipFlopLru::with_config`](crate::FlipFlopLru::with_config)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheConfig {
    /// Maximum number of entries per generation
    pub max_size: usize,

    /// Reserve the passive generation at construction.
    ///
    /// When false (the default) the passive side allocates on the first
    /// flip-flop, so a working set that never exceeds `max_size` only pays
    /// for one generation.
    pub reserve_passive: bool,
}

impl CacheConfig {
    /// Create a config with the given per-generation capacity
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size,
            reserve_passive: false,
        }
    }

    /// Set whether the passive generation is reserved eagerly
    pub fn reserve_passive(mut self, eager: bool) -> Self {
        self.reserve_passive = eager;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = CacheConfig::new(64);
        assert_eq!(config.max_size, 64);
        assert!(!config.reserve_passive);
        assert_eq!(CacheConfig::default().max_size, 0);
    }

    #[test]
    fn test_config_builder() {
        let config = CacheConfig::new(8).reserve_passive(true);
        assert!(config.reserve_passive);
    }
}
