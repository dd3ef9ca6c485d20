use serde::Serialize;

use crate::{
    game::Grid,
    models::{Position, Tile},
};

/// What a tap on a tile did to the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectOutcome {
    /// The tile was appended to the chain at `order`
    Extended { order: usize },
    /// The tile was already chained; it and every later tile were dropped
    Rewound { removed: usize },
    /// The tile does not touch the end of the chain, nothing changed
    NotAdjacent,
    /// No tile at that position, nothing changed
    OutOfBounds,
    /// Selection is frozen because the game is over
    Ignored,
}

impl SelectOutcome {
    /// True if the chain changed
    pub fn changed(&self) -> bool {
        matches!(self, Self::Extended { .. } | Self::Rewound { .. })
    }
}

/// Maintains the ordered chain of selected tiles on a grid.
///
/// Chain order lives on the tiles themselves (`selection_order`), so the
/// chain is always read back from the grid rather than stored twice.
pub struct SelectionController;

impl SelectionController {
    /// Tap a tile.
    ///
    /// Tapping a chained tile rewinds the chain to just before it. Tapping an
    /// unchained tile appends it if the chain is empty or the tile touches
    /// the current tail; otherwise nothing happens.
    pub fn toggle_select(grid: &mut Grid, pos: Position) -> SelectOutcome {
        let Some(tile) = grid.get(pos) else {
            return SelectOutcome::OutOfBounds;
        };

        if let Some(order) = tile.selection_order() {
            let mut removed = 0;
            for tile in grid.tiles_mut() {
                if tile.selection_order().is_some_and(|o| o >= order) {
                    tile.deselect();
                    removed += 1;
                }
            }
            return SelectOutcome::Rewound { removed };
        }

        if let Some(tail) = Self::tail(grid) {
            if !Grid::is_adjacent(tail.position(), pos) {
                return SelectOutcome::NotAdjacent;
            }
        }

        let order = Self::len(grid);
        if let Some(tile) = grid.get_mut(pos) {
            tile.select(order);
        }
        SelectOutcome::Extended { order }
    }

    /// Selected tiles in chain order
    pub fn chain(grid: &Grid) -> Vec<&Tile> {
        let mut chain: Vec<&Tile> = grid.tiles().filter(|t| t.is_selected()).collect();
        chain.sort_by_key(|t| t.selection_order());
        chain
    }

    /// The chain read as a word
    pub fn current_chain(grid: &Grid) -> String {
        Self::chain(grid).iter().map(|t| t.letter()).collect()
    }

    /// Most recently added tile, if any
    pub fn tail(grid: &Grid) -> Option<&Tile> {
        grid.tiles()
            .filter(|t| t.is_selected())
            .max_by_key(|t| t.selection_order())
    }

    pub fn len(grid: &Grid) -> usize {
        grid.tiles().filter(|t| t.is_selected()).count()
    }

    /// Drop the whole chain
    pub fn clear(grid: &mut Grid) {
        for tile in grid.tiles_mut() {
            tile.deselect();
        }
    }
}
