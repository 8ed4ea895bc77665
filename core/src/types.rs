/// Side length of the square grid.
pub type Side = u8;

/// Count type used for hole counts and total-cell counts.
pub type CellCount = u16;

/// Flat row-major cell address, `index = row * size + col`.
pub type CellIndex = u16;

pub const fn total_cells(size: Side) -> CellCount {
    let size = size as CellCount;
    size.saturating_mul(size)
}

pub const fn cell_index(row: Side, col: Side, size: Side) -> CellIndex {
    row as CellIndex * size as CellIndex + col as CellIndex
}

pub const fn cell_coords(index: CellIndex, size: Side) -> (Side, Side) {
    let size = size as CellIndex;
    ((index / size) as Side, (index % size) as Side)
}

/// Conversion from a flat cell address to an `ndarray` two-dimensional index.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self, size: Side) -> Self::Output;
}

impl ToNdIndex for CellIndex {
    type Output = [usize; 2];

    fn to_nd_index(self, size: Side) -> Self::Output {
        let (row, col) = cell_coords(self, size);
        [row as usize, col as usize]
    }
}

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `(row, col)`, returning a value only when it remains in bounds.
///
/// Working in two dimensions makes row wraparound impossible by construction:
/// a cell in the leftmost column has no `col - 1` neighbor at all, rather than
/// one that lands in the previous row.
fn apply_delta(coords: (Side, Side), delta: (isize, isize), size: Side) -> Option<(Side, Side)> {
    let (row, col) = coords;
    let (drow, dcol) = delta;

    let next_row = row.checked_add_signed(drow.try_into().ok()?)?;
    if next_row >= size {
        return None;
    }

    let next_col = col.checked_add_signed(dcol.try_into().ok()?)?;
    if next_col >= size {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterator over the valid neighbors of one cell: 8 for interior cells,
/// 5 on edges, 3 in corners.
#[derive(Debug)]
pub struct NeighborIter {
    center: (Side, Side),
    size: Side,
    index: u8,
}

impl NeighborIter {
    fn new(center: (Side, Side), size: Side) -> Self {
        Self {
            center,
            size,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = CellIndex;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.size);
            self.index += 1;

            if let Some((row, col)) = next_item {
                return Some(cell_index(row, col, self.size));
            }
        }
    }
}

/// Valid neighbor addresses of `index` on a `size`-by-`size` grid.
///
/// Pure function of the grid geometry; independent of hole placement.
pub fn neighbors_of(index: CellIndex, size: Side) -> NeighborIter {
    NeighborIter::new(cell_coords(index, size), size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;
    use alloc::vec::Vec;

    fn collect(index: CellIndex, size: Side) -> BTreeSet<CellIndex> {
        neighbors_of(index, size).collect()
    }

    #[test]
    fn corner_cells_have_three_neighbors() {
        for corner in [0, 2, 6, 8] {
            assert_eq!(collect(corner, 3).len(), 3, "corner {corner}");
        }
        assert_eq!(collect(0, 3), BTreeSet::from([1, 3, 4]));
    }

    #[test]
    fn edge_cells_have_five_neighbors() {
        for edge in [1, 3, 5, 7] {
            assert_eq!(collect(edge, 3).len(), 5, "edge {edge}");
        }
        assert_eq!(collect(3, 3), BTreeSet::from([0, 1, 4, 6, 7]));
    }

    #[test]
    fn interior_cells_have_eight_neighbors() {
        assert_eq!(
            collect(4, 3),
            BTreeSet::from([0, 1, 2, 3, 5, 6, 7, 8])
        );
        for index in 0..total_cells(5) {
            let (row, col) = cell_coords(index, 5);
            if (1..4).contains(&row) && (1..4).contains(&col) {
                assert_eq!(collect(index, 5).len(), 8, "interior {index}");
            }
        }
    }

    #[test]
    fn no_row_wraparound() {
        // leftmost column of row 1 on a 4x4 grid: nothing from column 3
        let neighbors = collect(4, 4);
        assert!(!neighbors.contains(&3));
        assert!(!neighbors.contains(&7));
        assert!(!neighbors.contains(&11));
        // rightmost column of row 1: nothing from column 0 of rows 1..3
        let neighbors = collect(7, 4);
        assert!(!neighbors.contains(&4));
        assert!(!neighbors.contains(&8));
        assert_eq!(neighbors, BTreeSet::from([2, 3, 6, 10, 11]));
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        assert_eq!(neighbors_of(0, 1).count(), 0);
    }

    #[test]
    fn coords_round_trip() {
        let size = 7;
        let all: Vec<CellIndex> = (0..total_cells(size)).collect();
        for index in all {
            let (row, col) = cell_coords(index, size);
            assert_eq!(cell_index(row, col, size), index);
        }
    }
}
