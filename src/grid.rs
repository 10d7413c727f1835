use crate::cell::Cell;
use std::fmt;

/// A square lattice of cells stored row-major.
///
/// All access is bounds-checked; asking for a cell outside the grid is a
/// bug in the caller and panics with the offending coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an empty grid of `size` x `size` cells.
    ///
    /// Panics when `size` is zero.
    pub fn new(size: usize) -> Grid {
        if size == 0 {
            panic!("Grid size must be greater than zero!");
        }

        Grid {
            size,
            cells: vec![Cell::new(); size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        let index = self.index(row, col);
        &self.cells[index]
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        let index = self.index(row, col);
        &mut self.cells[index]
    }

    /// Marks the cell at `pos` as a nest and registers each listed ant as
    /// an initial occupant.
    pub fn put_nest(&mut self, pos: (usize, usize), ant_ids: &[usize]) {
        let cell = self.cell_mut(pos.0, pos.1);
        cell.put_nest();
        for &id in ant_ids {
            cell.add_ant(id);
        }
    }

    /// Adds `amount` food units to the cell at `pos`.
    pub fn put_food(&mut self, pos: (usize, usize), amount: usize) {
        self.cell_mut(pos.0, pos.1).put_food(amount);
    }

    /// Runs scent decay on every cell.
    pub fn update_scent(&mut self, now: usize, ttl: usize) {
        for cell in &mut self.cells {
            cell.update_scent(now, ttl);
        }
    }

    /// True when no food is left outside a nest. This is the natural
    /// termination signal for a foraging run.
    pub fn all_food_collected(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.has_nest() || !cell.has_food())
    }

    /// Food units still waiting for collection in the field.
    pub fn food_outside_nests(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| !cell.has_nest())
            .map(|cell| cell.food_amount())
            .sum()
    }

    /// Food units delivered to nests so far.
    pub fn food_in_nests(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.has_nest())
            .map(|cell| cell.food_amount())
            .sum()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        if row >= self.size || col >= self.size {
            panic!(
                "Cell ({}, {}) is out of bounds for a {}x{} grid!",
                row, col, self.size, self.size
            );
        }

        row * self.size + col
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "A {}x{} terrain as follows:", self.size, self.size)?;

        for row in 0..self.size {
            for col in 0..self.size {
                let cell = self.cell(row, col);
                if cell.has_nest() || cell.has_food() || cell.scent() > 0 || cell.has_ants() {
                    writeln!(f, "Cell ({}, {}):", row, col)?;
                    write!(f, "{}", cell)?;
                }
            }
        }

        writeln!(f, "All other cells are empty.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_creating_a_grid_all_cells_start_empty() {
        let grid = Grid::new(3);

        assert_eq!(grid.size(), 3);
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(*grid.cell(row, col), Cell::new());
            }
        }
    }

    #[test]
    #[should_panic(expected = "Grid size must be greater than zero!")]
    fn when_creating_a_grid_of_size_zero_a_panic_occurs() {
        Grid::new(0);
    }

    #[test]
    #[should_panic(expected = "Cell (3, 0) is out of bounds for a 3x3 grid!")]
    fn when_accessing_a_row_outside_the_grid_a_panic_occurs() {
        let grid = Grid::new(3);
        grid.cell(3, 0);
    }

    #[test]
    #[should_panic(expected = "Cell (0, 3) is out of bounds for a 3x3 grid!")]
    fn when_accessing_a_column_outside_the_grid_a_panic_occurs() {
        let grid = Grid::new(3);
        grid.cell(0, 3);
    }

    #[test]
    fn when_putting_a_nest_the_listed_ants_become_occupants() {
        let mut grid = Grid::new(3);

        grid.put_nest((1, 1), &[0, 1, 2]);

        let cell = grid.cell(1, 1);
        assert!(cell.has_nest());
        assert_eq!(cell.occupants().to_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn when_putting_food_twice_the_cell_accumulates_it() {
        let mut grid = Grid::new(3);

        grid.put_food((0, 2), 2);
        grid.put_food((0, 2), 1);

        assert_eq!(grid.cell(0, 2).food_amount(), 3);
    }

    #[test]
    fn when_updating_scent_every_cell_decays() {
        let mut grid = Grid::new(3);
        grid.cell_mut(0, 0).add_scent(1);
        grid.cell_mut(2, 2).add_scent(3);

        grid.update_scent(7, 5);

        assert_eq!(grid.cell(0, 0).scent(), 0);
        assert_eq!(grid.cell(2, 2).scent(), 1);
    }

    #[test]
    fn when_food_remains_outside_a_nest_not_all_food_is_collected() {
        let mut grid = Grid::new(3);
        grid.put_nest((1, 1), &[]);
        grid.put_food((0, 0), 1);

        assert!(!grid.all_food_collected());
    }

    #[test]
    fn when_the_only_food_left_sits_in_nests_all_food_is_collected() {
        let mut grid = Grid::new(3);
        grid.put_nest((1, 1), &[]);
        grid.put_food((1, 1), 4);

        assert!(grid.all_food_collected());
    }

    #[test]
    fn when_the_grid_has_no_food_at_all_everything_counts_as_collected() {
        let grid = Grid::new(2);

        assert!(grid.all_food_collected());
    }

    #[test]
    fn when_summing_food_nest_stock_and_field_stock_are_kept_apart() {
        let mut grid = Grid::new(3);
        grid.put_nest((1, 1), &[]);
        grid.put_food((1, 1), 2);
        grid.put_food((0, 0), 3);
        grid.put_food((2, 2), 1);

        assert_eq!(grid.food_in_nests(), 2);
        assert_eq!(grid.food_outside_nests(), 4);
    }

    #[test]
    fn when_displaying_a_grid_only_cells_of_note_are_listed() {
        let mut grid = Grid::new(3);
        grid.put_nest((1, 1), &[]);
        grid.put_food((0, 0), 2);

        let text = format!("{}", grid);

        assert!(text.contains("A 3x3 terrain as follows:"));
        assert!(text.contains("Cell (0, 0):"));
        assert!(text.contains("Cell (1, 1):"));
        assert!(!text.contains("Cell (2, 2):"));
        assert!(text.contains("All other cells are empty."));
    }
}
