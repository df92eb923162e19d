//! Configuration for a game session.

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed for reproducible word draws and lobby rolls.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.seed, 42);
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default().with_seed(123);
        assert_eq!(cfg.seed, 123);
    }
}
