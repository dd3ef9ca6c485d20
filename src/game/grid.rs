use crate::{
    game::ContentError,
    models::{Position, Tile},
    utils::letters::normalize_letter,
};

/// Largest supported board side, in tiles
pub const MAX_GRID_SIDE: usize = 12;

/// Rectangular board of letter tiles, one tile per coordinate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Vec<Vec<Tile>>,
    cols: usize,
}

impl Grid {
    /// Build a board from rows of letters.
    ///
    /// Rows must all have the same non-zero length and every character must be
    /// an ASCII letter; lowercase letters are stored uppercase.
    pub fn from_letters(rows: &[Vec<char>]) -> Result<Self, ContentError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if cols == 0 {
            return Err(ContentError::EmptyGrid);
        }
        if rows.len() > MAX_GRID_SIDE || cols > MAX_GRID_SIDE {
            return Err(ContentError::GridTooLarge {
                rows: rows.len(),
                cols,
                max: MAX_GRID_SIDE,
            });
        }

        let mut tiles = Vec::with_capacity(rows.len());
        for (row, letters) in rows.iter().enumerate() {
            if letters.len() != cols {
                return Err(ContentError::RaggedGrid {
                    row,
                    expected: cols,
                    found: letters.len(),
                });
            }

            let mut tile_row = Vec::with_capacity(cols);
            for (col, &ch) in letters.iter().enumerate() {
                let letter = normalize_letter(ch).ok_or_else(|| ContentError::InvalidTile {
                    row,
                    col,
                    value: ch.to_string(),
                })?;
                tile_row.push(Tile::new(letter, Position::new(row, col)));
            }
            tiles.push(tile_row);
        }

        Ok(Self { tiles, cols })
    }

    pub fn rows(&self) -> usize {
        self.tiles.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn tile_count(&self) -> usize {
        self.rows() * self.cols
    }

    pub fn get(&self, pos: Position) -> Option<&Tile> {
        self.tiles.get(pos.row)?.get(pos.col)
    }

    pub(crate) fn get_mut(&mut self, pos: Position) -> Option<&mut Tile> {
        self.tiles.get_mut(pos.row)?.get_mut(pos.col)
    }

    /// All tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().flatten()
    }

    pub(crate) fn tiles_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.tiles.iter_mut().flatten()
    }

    /// Copy of the tile matrix for rendering
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.tiles.clone()
    }

    /// Check if two positions touch, diagonals included.
    /// A position is never adjacent to itself.
    pub fn is_adjacent(a: Position, b: Position) -> bool {
        let row_diff = a.row.abs_diff(b.row);
        let col_diff = a.col.abs_diff(b.col);

        row_diff <= 1 && col_diff <= 1 && (row_diff + col_diff > 0)
    }
}
