use serde::{Deserialize, Serialize};

/// Canonical player-visible state of a single square.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Off,
    On,
}

impl CellState {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }

    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Off
    }
}
