use ndarray::Array2;

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for lit-cell counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let dim = self.dim();
        let size = (dim.0.try_into().unwrap(), dim.1.try_into().unwrap());
        NeighborIter::new(index, size)
    }
}

// Orthogonal neighbors only; the flip rule never touches diagonals.
const DISPLACEMENTS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn neighbors_of(center: Coord2, bounds: Coord2) -> Vec<Coord2> {
        NeighborIter::new(center, bounds).collect()
    }

    #[test]
    fn interior_cell_has_four_neighbors() {
        let mut neighbors = neighbors_of((2, 2), (5, 5));
        neighbors.sort_unstable();
        assert_eq!(neighbors, [(1, 2), (2, 1), (2, 3), (3, 2)]);
    }

    #[test]
    fn corner_cell_has_two_neighbors() {
        let mut neighbors = neighbors_of((0, 0), (5, 5));
        neighbors.sort_unstable();
        assert_eq!(neighbors, [(0, 1), (1, 0)]);

        let mut neighbors = neighbors_of((4, 4), (5, 5));
        neighbors.sort_unstable();
        assert_eq!(neighbors, [(3, 4), (4, 3)]);
    }

    #[test]
    fn edge_cell_has_three_neighbors() {
        let mut neighbors = neighbors_of((0, 2), (5, 5));
        neighbors.sort_unstable();
        assert_eq!(neighbors, [(0, 1), (0, 3), (1, 2)]);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert!(neighbors_of((0, 0), (1, 1)).is_empty());
    }
}
