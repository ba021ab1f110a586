use serde::{Deserialize, Serialize};

use crate::*;

/// Read-only view of a session, flattened row-major for the presentation
/// layer.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub level: Level,
    pub clicks: ClickCount,
    pub cells: [CellState; CELL_COUNT as usize],
}

impl Snapshot {
    pub fn from_session(session: &PuzzleSession) -> Self {
        let mut cells = [CellState::Off; CELL_COUNT as usize];
        for (index, cell) in cells.iter_mut().enumerate() {
            *cell = session.cell_at(index as Cell);
        }
        Self {
            level: session.level(),
            clicks: session.clicks(),
            cells,
        }
    }

    pub fn is_won(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_on())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::VecDeque;

    struct OneRule(VecDeque<MysteryRule>);

    impl MysteryGenerator for OneRule {
        fn generate(&mut self) -> MysteryRule {
            self.0.pop_front().unwrap()
        }
    }

    #[test]
    fn snapshot_mirrors_the_session_cells() {
        let mut generator = OneRule(VecDeque::from([MysteryRule::new(15, 1).unwrap()]));
        let mut session = PuzzleSession::new();
        session.start_level(&mut generator);
        session.apply_click(6).unwrap();

        let snapshot = Snapshot::from_session(&session);

        assert_eq!(snapshot.level, 1);
        assert_eq!(snapshot.clicks, 1);
        assert_eq!(snapshot.cells[6], CellState::On);
        assert_eq!(snapshot.cells[usize::from(mirror(6))], CellState::On);
        assert_eq!(snapshot.cells[0], CellState::Off);
        assert!(!snapshot.is_won());
    }
}
