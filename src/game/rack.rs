use crate::models::Letter;

/// The player's drawn, unplaced tiles
#[derive(Debug)]
pub struct Rack {
    tiles: Vec<Letter>,
    capacity: usize,
}

impl Rack {
    pub fn new(capacity: usize) -> Self {
        Self {
            tiles: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Replace the rack contents with a fresh draw
    pub fn refill(&mut self, letters: Vec<Letter>) {
        debug_assert!(letters.len() <= self.capacity);
        self.tiles = letters;
    }

    /// Add a tile coming back from the board
    pub fn push(&mut self, letter: Letter) {
        self.tiles.push(letter);
    }

    /// Take the tile in `slot` off the rack
    pub fn take(&mut self, slot: usize) -> Option<Letter> {
        (slot < self.tiles.len()).then(|| self.tiles.remove(slot))
    }

    /// Empty the rack, returning what was on it
    pub fn take_all(&mut self) -> Vec<Letter> {
        std::mem::take(&mut self.tiles)
    }

    pub fn tiles(&self) -> &[Letter] {
        &self.tiles
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
