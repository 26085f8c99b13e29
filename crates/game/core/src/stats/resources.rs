//! Hit point pool.
//!
//! The maximum is derived from stats; the current value is game state that is
//! persisted independently of the maximum.

/// Current and maximum hit points of a creature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hitpoints {
    pub current: u32,
    pub max: u32,
}

impl Hitpoints {
    pub const fn new(current: u32, max: u32) -> Self {
        Self { current, max }
    }

    /// Full pool.
    pub const fn at_max(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Applies a newly derived maximum, clamping the current value down to it.
    pub fn rescale(&mut self, max: u32) {
        self.max = max;
        self.current = self.current.min(max);
    }

    pub const fn is_down(&self) -> bool {
        self.current == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rescale_clamps_current() {
        let mut hp = Hitpoints::new(180, 200);
        hp.rescale(150);
        assert_eq!(hp, Hitpoints::new(150, 150));

        hp.rescale(300);
        assert_eq!(hp, Hitpoints::new(150, 300));
    }
}
