#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use snapshot::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod snapshot;
mod types;

/// Hidden per-level pairing: clicking `trigger` additionally toggles `effect`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MysteryRule {
    trigger: Cell,
    effect: Cell,
}

impl MysteryRule {
    pub const fn new_unchecked(trigger: Cell, effect: Cell) -> Self {
        Self { trigger, effect }
    }

    /// The effect must land on a square the base mirror rule does not already
    /// toggle for this trigger.
    pub fn new(trigger: Cell, effect: Cell) -> Result<Self> {
        let trigger = validate_index(trigger)?;
        let effect = validate_index(effect)?;
        if effect == trigger || effect == mirror(trigger) {
            return Err(GameError::RedundantRule);
        }
        Ok(Self::new_unchecked(trigger, effect))
    }

    pub const fn trigger(self) -> Cell {
        self.trigger
    }

    pub const fn effect(self) -> Cell {
        self.effect
    }

    pub const fn fires_on(self, index: Cell) -> bool {
        self.trigger == index
    }
}

/// Outcome of applying a single click.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    Continue,
    LevelComplete,
    GameComplete,
    ClickLimitExceeded,
}

impl ClickOutcome {
    /// Whether this outcome could have caused an update to the board.
    pub const fn has_update(self) -> bool {
        use ClickOutcome::*;
        match self {
            Continue => true,
            LevelComplete => true,
            GameComplete => true,
            ClickLimitExceeded => false,
        }
    }

    /// Terminal outcomes accept no further clicks until the session is reset.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::GameComplete | Self::ClickLimitExceeded)
    }
}

/// What a single click did, for incremental rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct ClickReport {
    pub clicks: ClickCount,
    /// Squares whose state changed, in index order. Toggles compose by xor,
    /// so a square hit an even number of times within one click is absent.
    pub changed: SmallVec<[Cell; 12]>,
    pub outcome: ClickOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mystery_rule_rejects_trigger_and_its_mirror_as_effect() {
        assert_eq!(MysteryRule::new(3, 3), Err(GameError::RedundantRule));
        assert_eq!(MysteryRule::new(3, mirror(3)), Err(GameError::RedundantRule));
        assert_eq!(MysteryRule::new(16, 0), Err(GameError::InvalidIndex));
        assert_eq!(MysteryRule::new(0, 16), Err(GameError::InvalidIndex));

        let rule = MysteryRule::new(3, 7).unwrap();
        assert_eq!(rule.trigger(), 3);
        assert_eq!(rule.effect(), 7);
        assert!(rule.fires_on(3));
        assert!(!rule.fires_on(7));
    }

    #[test]
    fn click_limit_outcome_is_terminal_without_update() {
        assert!(ClickOutcome::ClickLimitExceeded.is_terminal());
        assert!(!ClickOutcome::ClickLimitExceeded.has_update());
        assert!(ClickOutcome::GameComplete.is_terminal());
        assert!(ClickOutcome::GameComplete.has_update());
        assert!(!ClickOutcome::Continue.is_terminal());
        assert!(!ClickOutcome::LevelComplete.is_terminal());
    }
}
