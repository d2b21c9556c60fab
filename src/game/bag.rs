use rand::Rng;

use super::catalog::TileCatalog;
use crate::models::Letter;

/// Pool of tiles that have not been drawn yet
#[derive(Debug, Default)]
pub struct TileBag {
    letters: Vec<Letter>,
}

impl TileBag {
    /// Create a bag holding every tile the catalog supplies
    pub fn from_catalog(catalog: &TileCatalog) -> Self {
        let mut bag = Self::default();
        bag.refill(catalog);
        bag
    }

    /// Reset the contents to the full multiset described by the catalog
    pub fn refill(&mut self, catalog: &TileCatalog) {
        self.letters.clear();
        for tile in catalog.definitions() {
            self.letters
                .extend(std::iter::repeat_n(tile.letter, tile.supply as usize));
        }
    }

    /// Fisher-Yates shuffle of the remaining tiles
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        for i in (1..self.letters.len()).rev() {
            let j = rng.random_range(0..=i);
            self.letters.swap(i, j);
        }
    }

    /// Shuffle, then take up to `n` tiles off the top
    pub fn draw(&mut self, n: usize, rng: &mut impl Rng) -> Vec<Letter> {
        self.shuffle(rng);
        let n = n.min(self.letters.len());
        self.letters.drain(..n).collect()
    }

    /// Remove one occurrence of `letter`, returning whether one was present
    pub fn remove(&mut self, letter: Letter) -> bool {
        match self.letters.iter().position(|&l| l == letter) {
            Some(idx) => {
                self.letters.swap_remove(idx);
                true
            }
            None => false,
        }
    }

    /// Return tiles to the pool
    pub fn put_back(&mut self, letters: impl IntoIterator<Item = Letter>) {
        self.letters.extend(letters);
    }

    /// Number of copies of `letter` still in the bag
    pub fn count(&self, letter: Letter) -> usize {
        self.letters.iter().filter(|&&l| l == letter).count()
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn catalog() -> TileCatalog {
        TileCatalog::parse(
            r#"{"pieces": {"A": {"value": 1, "amount": 4}, "B": {"value": 3, "amount": 2}, "Z": {"value": 10, "amount": 1}}}"#,
        )
        .unwrap()
    }

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    fn sorted(bag: &TileBag) -> Vec<Letter> {
        let mut letters = bag.letters.clone();
        letters.sort();
        letters
    }

    #[test]
    fn test_refill_matches_supply() {
        let bag = TileBag::from_catalog(&catalog());
        assert_eq!(bag.len(), 7);
        assert_eq!(bag.count(letter('A')), 4);
        assert_eq!(bag.count(letter('B')), 2);
        assert_eq!(bag.count(letter('Z')), 1);
    }

    #[test]
    fn test_shuffle_preserves_multiset() {
        let mut bag = TileBag::from_catalog(&catalog());
        let before = sorted(&bag);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            bag.shuffle(&mut rng);
            assert_eq!(sorted(&bag), before);
        }
    }

    #[test]
    fn test_shuffle_reaches_every_position() {
        // The lone Z should land in each of the 7 slots over enough shuffles
        let mut bag = TileBag::from_catalog(&catalog());
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 7];

        for _ in 0..500 {
            bag.shuffle(&mut rng);
            let idx = bag.letters.iter().position(|&l| l == letter('Z')).unwrap();
            seen[idx] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_draw_removes_drawn_tiles() {
        let mut bag = TileBag::from_catalog(&catalog());
        let mut rng = StdRng::seed_from_u64(1);

        let drawn = bag.draw(5, &mut rng);
        assert_eq!(drawn.len(), 5);
        assert_eq!(bag.len(), 2);

        let mut combined = bag.letters.clone();
        combined.extend(&drawn);
        combined.sort();
        assert_eq!(combined, sorted(&TileBag::from_catalog(&catalog())));
    }

    #[test]
    fn test_draw_more_than_available() {
        let mut bag = TileBag::from_catalog(&catalog());
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(bag.draw(10, &mut rng).len(), 7);
        assert!(bag.is_empty());
        assert!(bag.draw(7, &mut rng).is_empty());
    }

    #[test]
    fn test_remove_single_occurrence() {
        let mut bag = TileBag::from_catalog(&catalog());

        assert!(bag.remove(letter('A')));
        assert_eq!(bag.count(letter('A')), 3);

        assert!(bag.remove(letter('Z')));
        assert!(!bag.remove(letter('Z')));
        assert!(!bag.remove(letter('Q')));
        assert_eq!(bag.len(), 5);
    }

    #[test]
    fn test_put_back() {
        let mut bag = TileBag::from_catalog(&catalog());
        let mut rng = StdRng::seed_from_u64(9);
        let drawn = bag.draw(3, &mut rng);

        bag.put_back(drawn);
        assert_eq!(sorted(&bag), sorted(&TileBag::from_catalog(&catalog())));
    }

    #[test]
    fn test_empty_catalog_gives_empty_bag() {
        let bag = TileBag::from_catalog(&TileCatalog::empty());
        assert!(bag.is_empty());
    }
}
