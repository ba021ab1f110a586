use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Levels in a full run.
pub const MAX_LEVELS: Level = 10;

/// Clicks allowed within a single level before the session ends.
pub const MAX_CLICKS: ClickCount = 100;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SessionState {
    Ready,
    Active,
    Exhausted,
    Completed,
}

impl SessionState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Exhausted | Self::Completed)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Ready
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleSession {
    board: Array2<CellState>,
    level: Level,
    clicks: ClickCount,
    rules: Vec<MysteryRule>,
    state: SessionState,
}

impl PuzzleSession {
    pub fn new() -> Self {
        Self {
            board: Array2::default((GRID_DIM, GRID_DIM).to_nd_index()),
            level: 1,
            clicks: 0,
            rules: Vec::new(),
            state: Default::default(),
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn clicks(&self) -> ClickCount {
        self.clicks
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn rules(&self) -> &[MysteryRule] {
        &self.rules
    }

    pub fn cell_at(&self, index: Cell) -> CellState {
        self.board[index.to_nd_index()]
    }

    pub fn is_won(&self) -> bool {
        self.board.iter().all(|cell| cell.is_on())
    }

    /// Wipes board and click progress for the current level. Draws one new
    /// mystery rule on the first visit to a level; replays never redraw.
    pub fn start_level(&mut self, generator: &mut impl MysteryGenerator) -> Snapshot {
        self.board.fill(CellState::Off);
        self.clicks = 0;
        self.state = SessionState::Ready;

        if usize::from(self.level) > self.rules.len() {
            let rule = generator.generate();
            log::debug!("level {} unlocked mystery rule {:?}", self.level, rule);
            self.rules.push(rule);
        }

        Snapshot::from_session(self)
    }

    pub fn apply_click(&mut self, index: Cell) -> Result<ClickReport> {
        let index = validate_index(index)?;
        self.check_not_finished()?;

        self.clicks += 1;

        if self.clicks >= MAX_CLICKS {
            // the triggering click is counted but never lands
            self.state = SessionState::Exhausted;
            log::debug!("click limit reached on level {}", self.level);
            return Ok(ClickReport {
                clicks: self.clicks,
                changed: SmallVec::new(),
                outcome: ClickOutcome::ClickLimitExceeded,
            });
        }

        let mut toggle_mask: u16 = 0;
        toggle_mask ^= 1 << index;
        toggle_mask ^= 1 << mirror(index);
        for rule in &self.rules {
            if rule.fires_on(index) {
                toggle_mask ^= 1 << rule.effect();
            }
        }

        let mut changed = SmallVec::new();
        for cell in 0..CELL_COUNT {
            if toggle_mask & (1 << cell) != 0 {
                self.board[cell.to_nd_index()] = self.board[cell.to_nd_index()].toggled();
                changed.push(cell);
            }
        }

        self.mark_started();

        let outcome = if self.is_won() {
            if self.level < MAX_LEVELS {
                self.level += 1;
                ClickOutcome::LevelComplete
            } else {
                self.state = SessionState::Completed;
                ClickOutcome::GameComplete
            }
        } else {
            ClickOutcome::Continue
        };

        Ok(ClickReport {
            clicks: self.clicks,
            changed,
            outcome,
        })
    }

    /// Returns to level 1 with no accumulated rules. Always succeeds.
    pub fn reset(&mut self) -> Snapshot {
        log::debug!("session reset from level {}", self.level);
        self.board.fill(CellState::Off);
        self.level = 1;
        self.clicks = 0;
        self.rules.clear();
        self.state = SessionState::Ready;
        Snapshot::from_session(self)
    }

    fn mark_started(&mut self) {
        if matches!(self.state, SessionState::Ready) {
            self.state = SessionState::Active;
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

impl Default for PuzzleSession {
    fn default() -> Self {
        Self::new()
    }
}
