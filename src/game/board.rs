use serde::Serialize;

use crate::models::{CellRole, Letter};

/// Number of cells in the row
pub const BOARD_LEN: usize = 7;

/// Marker for an empty cell inside a spelled word
pub const GAP: char = '.';

/// Role of each cell in the reference layout
pub const LAYOUT: [CellRole; BOARD_LEN] = [
    CellRole::Plain,
    CellRole::Plain,
    CellRole::Plain,
    CellRole::DoubleLetter,
    CellRole::Plain,
    CellRole::Plain,
    CellRole::DoubleWord,
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("cell {0} is off the board")]
    CellOutOfRange(usize),
    #[error("cell {0} is already occupied")]
    CellOccupied(usize),
    #[error("cell {0} is empty")]
    CellEmpty(usize),
    #[error("rack slot {0} holds no tile")]
    RackSlotEmpty(usize),
    #[error("the round has been scored")]
    RoundClosed,
}

#[derive(Debug, Clone, Serialize)]
pub struct Cell {
    pub index: usize,
    pub role: CellRole,
    pub occupant: Option<Letter>,
}

/// A single row of cells that holds one word
#[derive(Debug, Clone)]
pub struct Board {
    cells: [Cell; BOARD_LEN],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: std::array::from_fn(|index| Cell {
                index,
                role: LAYOUT[index],
                occupant: None,
            }),
        }
    }

    pub fn place(&mut self, index: usize, letter: Letter) -> Result<(), PlacementError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(PlacementError::CellOutOfRange(index))?;
        if cell.occupant.is_some() {
            return Err(PlacementError::CellOccupied(index));
        }
        cell.occupant = Some(letter);
        Ok(())
    }

    /// Remove and return the tile on `index`, if any
    pub fn clear(&mut self, index: usize) -> Option<Letter> {
        self.cells.get_mut(index).and_then(|cell| cell.occupant.take())
    }

    /// Letters across the row with `.` for gaps, outer gaps trimmed.
    ///
    /// Interior gaps stay in the result so a split word never validates.
    pub fn spelled_word(&self) -> String {
        let row: String = self
            .cells
            .iter()
            .map(|cell| cell.occupant.map_or(GAP, Letter::as_char))
            .collect();
        row.trim_matches(GAP).to_string()
    }

    /// Occupied cells with their tiles, in index order
    pub fn occupied_cells(&self) -> Vec<(&Cell, Letter)> {
        self.cells
            .iter()
            .filter_map(|cell| cell.occupant.map(|letter| (cell, letter)))
            .collect()
    }

    /// Lift every tile off the board
    pub fn take_all(&mut self) -> Vec<Letter> {
        self.cells
            .iter_mut()
            .filter_map(|cell| cell.occupant.take())
            .collect()
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.occupant.is_none())
    }
}
