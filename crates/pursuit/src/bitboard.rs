use std::fmt;

use crate::Position;

/// Row stride of the bit layout; also the largest supported board side.
pub(crate) const STRIDE: u8 = 11;

/// A 128-bit set of board cells, used for the obstacle layer.
/// Bit `row * 11 + col` corresponds to cell (row, col), so any board up to
/// 11×11 fits and the whole set is `Copy`.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Obstacles(u128);

impl Obstacles {
    /// Empty set (no cells blocked)
    pub const EMPTY: Obstacles = Obstacles(0);

    #[inline]
    const fn bit(pos: Position) -> u128 {
        1u128 << (pos.row as u32 * STRIDE as u32 + pos.col as u32)
    }

    /// Returns true if no cells are set
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the given cell is blocked
    ///
    /// Cells outside the 11×11 layout are never contained.
    #[inline]
    pub const fn contains(self, pos: Position) -> bool {
        pos.row < STRIDE && pos.col < STRIDE && self.0 & Self::bit(pos) != 0
    }

    /// Blocks the given cell, returning false if it was already blocked
    ///
    /// The cell must lie within the 11×11 layout.
    #[inline]
    pub fn insert(&mut self, pos: Position) -> bool {
        debug_assert!(pos.row < STRIDE && pos.col < STRIDE);
        let was_set = self.contains(pos);
        self.0 |= Self::bit(pos);
        !was_set
    }

    /// Returns the number of blocked cells
    #[inline]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Iterates blocked cells in row-major order
    #[inline]
    pub fn iter(self) -> ObstaclesIter {
        ObstaclesIter(self.0)
    }
}

/// Iterator over the cells of an [`Obstacles`] set
pub struct ObstaclesIter(u128);

impl Iterator for ObstaclesIter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Position::new(index / STRIDE, index % STRIDE))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count_ones() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for ObstaclesIter {}

impl IntoIterator for Obstacles {
    type Item = Position;
    type IntoIter = ObstaclesIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Position> for Obstacles {
    fn from_iter<I: IntoIterator<Item = Position>>(cells: I) -> Self {
        let mut set = Obstacles::EMPTY;
        for pos in cells {
            set.insert(pos);
        }
        set
    }
}

impl fmt::Debug for Obstacles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
