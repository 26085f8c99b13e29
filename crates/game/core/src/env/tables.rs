//! Trait → stat lookup tables.
//!
//! Tables are content: `game-content` ships the built-in set and a TOML
//! loader. Every lookup is partial; an unrecognized trait returns `None` and
//! contributes nothing to derived stats.

use crate::stats::StatKind;
use crate::traits::{Flavor, TraitName};

/// Stats raised by a primary trait: `main` gets the larger bonus, `off` the
/// smaller one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrimaryStats {
    pub main: StatKind,
    pub off: StatKind,
}

impl PrimaryStats {
    pub const fn new(main: StatKind, off: StatKind) -> Self {
        Self { main, off }
    }
}

/// Read-only access to the trait tables.
pub trait TablesOracle {
    /// Main/off stat pair for a primary trait.
    fn primary_stats(&self, name: &TraitName) -> Option<PrimaryStats>;

    /// Stat raised by a secondary trait, searched across every flavor group.
    fn secondary_stat(&self, name: &TraitName) -> Option<StatKind>;

    /// Stat raised by a nurture trait.
    fn nurture_stat(&self, name: &TraitName) -> Option<StatKind>;

    /// Secondary traits belonging to a catalyst flavor.
    ///
    /// This is the bonus-trait list consulted when a creature holds a
    /// catalyst during a compatibility check.
    fn flavor_traits(&self, flavor: Flavor) -> &[TraitName];
}
