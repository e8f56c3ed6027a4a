//! Configuration for tether cooking.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{TetherError, TetherResult};

/// Distance metric used to pick anchors and rest lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TetherStrategy {
    /// Straight-line distance to the closest attached particle.
    ///
    /// Fast, and adequate for flat cloth and flags. One tether per particle.
    Simple,

    /// Shortest path along the mesh edges to each attached island.
    ///
    /// Slower, better for curved or folded cloth. Requires manifold,
    /// consistently wound input.
    #[default]
    Geodesic,
}

/// Configuration parameters for tether cooking.
///
/// # Example
///
/// ```
/// use cloth_tether::{TetherConfig, TetherStrategy};
///
/// let config = TetherConfig::default();
/// assert_eq!(config.strategy, TetherStrategy::Geodesic);
///
/// let config = TetherConfig::simple().with_parallel(false);
/// assert_eq!(config.strategy, TetherStrategy::Simple);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TetherConfig {
    /// Distance metric.
    ///
    /// Default: [`TetherStrategy::Geodesic`]
    pub strategy: TetherStrategy,

    /// Upper bound on tethers per particle for the geodesic strategy.
    ///
    /// The geodesic cooker assigns one tether per attached island, keeping
    /// the nearest islands when there are more than this. Ignored by the
    /// simple strategy, which always assigns one. Must be at least `1`;
    /// every entry point taking a config rejects zero.
    /// Default: `4`
    pub max_tethers_per_particle: usize,

    /// Whether batch cooking runs meshes in parallel (via rayon).
    ///
    /// Default: `true`
    pub parallel: bool,
}

impl Default for TetherConfig {
    fn default() -> Self {
        Self {
            strategy: TetherStrategy::default(),
            max_tethers_per_particle: 4,
            parallel: true,
        }
    }
}

impl TetherConfig {
    /// Configuration for the Euclidean cooker.
    #[must_use]
    pub fn simple() -> Self {
        Self {
            strategy: TetherStrategy::Simple,
            ..Default::default()
        }
    }

    /// Configuration for the geodesic cooker.
    #[must_use]
    pub fn geodesic() -> Self {
        Self {
            strategy: TetherStrategy::Geodesic,
            ..Default::default()
        }
    }

    /// Set the distance metric.
    #[must_use]
    pub fn with_strategy(mut self, strategy: TetherStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the tether cap for the geodesic strategy.
    #[must_use]
    pub fn with_max_tethers_per_particle(mut self, max: usize) -> Self {
        self.max_tethers_per_particle = max;
        self
    }

    /// Enable or disable parallel batch cooking.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TetherError::InvalidConfig`] if `max_tethers_per_particle`
    /// is zero.
    pub fn validate(&self) -> TetherResult<()> {
        if self.max_tethers_per_particle == 0 {
            return Err(TetherError::invalid_config(
                "max_tethers_per_particle must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = TetherConfig::default();
        assert_eq!(config.strategy, TetherStrategy::Geodesic);
        assert_eq!(config.max_tethers_per_particle, 4);
        assert!(config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn presets_only_change_strategy() {
        assert_eq!(TetherConfig::simple().strategy, TetherStrategy::Simple);
        assert_eq!(TetherConfig::geodesic(), TetherConfig::default());
    }

    #[test]
    fn builders() {
        let config = TetherConfig::default()
            .with_strategy(TetherStrategy::Simple)
            .with_max_tethers_per_particle(2)
            .with_parallel(false);
        assert_eq!(config.strategy, TetherStrategy::Simple);
        assert_eq!(config.max_tethers_per_particle, 2);
        assert!(!config.parallel);
    }

    #[test]
    fn zero_cap_is_invalid() {
        let config = TetherConfig::default().with_max_tethers_per_particle(0);
        assert!(matches!(
            config.validate(),
            Err(TetherError::InvalidConfig(_))
        ));
    }
}
