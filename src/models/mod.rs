pub mod tile;

pub use tile::{CellRole, Letter, TileDefinition};
