use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tokio::fs;

use crate::{
    error::LoadError,
    models::{Letter, TileDefinition},
};

/// One entry of the `pieces` object, e.g. `"A": { "value": 1, "amount": 9 }`
#[derive(Debug, Deserialize)]
struct PieceEntry {
    value: u32,
    amount: u32,
}

/// Point values and bag supply for every usable letter
#[derive(Debug, Default)]
pub struct TileCatalog {
    tiles: BTreeMap<Letter, TileDefinition>,
}

impl TileCatalog {
    /// Load the catalog from a `pieces.json` file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await.map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::parse(&content)?;

        tracing::info!(
            "Loaded {} tile definitions ({} tiles in a full bag)",
            catalog.len(),
            catalog.total_supply()
        );

        Ok(catalog)
    }

    /// Parse `{ "pieces": { "<letter>": { "value": n, "amount": n }, ... } }`.
    ///
    /// A malformed entry only makes its own letter unusable; it is logged and skipped.
    pub fn parse(content: &str) -> Result<Self, LoadError> {
        let document: Value = serde_json::from_str(content)?;
        let pieces = document
            .get("pieces")
            .and_then(Value::as_object)
            .ok_or(LoadError::MissingPieces)?;

        let mut tiles = BTreeMap::new();
        for (key, raw) in pieces {
            let letter = match Letter::try_from(key.as_str()) {
                Ok(letter) => letter,
                Err(e) => {
                    tracing::warn!("Skipping tile catalog entry: {}", e);
                    continue;
                }
            };
            match PieceEntry::deserialize(raw) {
                Ok(entry) => {
                    tiles.insert(
                        letter,
                        TileDefinition {
                            letter,
                            value: entry.value,
                            supply: entry.amount,
                        },
                    );
                }
                Err(e) => {
                    tracing::warn!("Skipping malformed tile catalog entry for {}: {}", letter, e);
                }
            }
        }

        Ok(Self { tiles })
    }

    /// Create a catalog with no letters; nothing can be drawn from it
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn value_of(&self, letter: Letter) -> Option<u32> {
        self.tiles.get(&letter).map(|tile| tile.value)
    }

    pub fn supply_of(&self, letter: Letter) -> Option<u32> {
        self.tiles.get(&letter).map(|tile| tile.supply)
    }

    /// All definitions in letter order
    pub fn definitions(&self) -> impl Iterator<Item = &TileDefinition> {
        self.tiles.values()
    }

    /// Number of tiles in a freshly filled bag
    pub fn total_supply(&self) -> usize {
        self.tiles.values().map(|tile| tile.supply as usize).sum()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
