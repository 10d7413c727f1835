use crate::grid::Grid;
use rand::Rng;
use serde::Serialize;
use std::fmt;

/// The four orthogonal step directions.
///
/// `ALL` lists them in the fixed priority order that breaks homing ties:
/// up, then down, then left, then right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The neighbor of `pos` one step in this direction, or `None` when the
    /// step would leave a `size` x `size` grid.
    pub fn step(self, pos: (usize, usize), size: usize) -> Option<(usize, usize)> {
        let (row, col) = pos;
        match self {
            Direction::Up => (row > 0).then(|| (row - 1, col)),
            Direction::Down => (row + 1 < size).then(|| (row + 1, col)),
            Direction::Left => (col > 0).then(|| (row, col - 1)),
            Direction::Right => (col + 1 < size).then(|| (row, col + 1)),
        }
    }
}

/// What an ant is up to, as reported to the outside world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AntStatus {
    /// Standing on its nest, still holding the food it brought back.
    AtNestWithFood,
    /// Standing on its nest with nothing to deliver.
    AtNestIdle,
    /// Carrying food back toward its nest.
    ReturningWithFood,
    /// Standing on a cell with food it has not picked up yet.
    FoundFood,
    /// Wandering the grid looking for food.
    Searching,
}

impl fmt::Display for AntStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sentence = match self {
            AntStatus::AtNestWithFood => "It has returned to its nest and has food to deliver.",
            AntStatus::AtNestIdle => "It is at its nest and does not hold any food.",
            AntStatus::ReturningWithFood => "It is going back to its nest with food.",
            AntStatus::FoundFood => "It has found food!",
            AntStatus::Searching => "It is out looking for food.",
        };
        write!(f, "{}", sentence)
    }
}

/// A foraging ant.
///
/// While searching, the ant walks toward the strongest scent among its
/// legal neighbors and breaks ties at random; the cell it just left is
/// never legal. While carrying food, it lays scent on the trail and always
/// steps onto the neighbor closest to its nest by Manhattan distance.
#[derive(Debug)]
pub struct Ant {
    id: usize,
    position: (usize, usize),
    previous: Option<(usize, usize)>,
    home: (usize, usize),
    carrying_food: bool,
}

impl Ant {
    /// Creates an ant standing on its home nest, not carrying anything.
    pub fn new(id: usize, home: (usize, usize)) -> Ant {
        Ant {
            id,
            position: home,
            previous: None,
            home,
            carrying_food: false,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// The ant's position as (row, col).
    pub fn position(&self) -> (usize, usize) {
        self.position
    }

    /// The position of the nest the ant delivers to.
    pub fn home(&self) -> (usize, usize) {
        self.home
    }

    pub fn carries_food(&self) -> bool {
        self.carrying_food
    }

    pub fn is_at_nest(&self) -> bool {
        self.position == self.home
    }

    /// Whether `pos` is the cell the ant stood on before its last move.
    pub fn was_at(&self, pos: (usize, usize)) -> bool {
        self.previous == Some(pos)
    }

    /// Performs the ant's move for `tick`: one searching or homing turn.
    pub fn step<R: Rng>(&mut self, tick: usize, grid: &mut Grid, rng: &mut R) {
        if self.carrying_food {
            self.return_home(tick, grid);
        } else {
            self.search_food(tick, grid, rng);
        }
    }

    /// The ant's current activity, derived from its own flags and the cell
    /// it stands on.
    pub fn status(&self, grid: &Grid) -> AntStatus {
        let cell = grid.cell(self.position.0, self.position.1);
        if self.is_at_nest() {
            if self.carrying_food {
                AntStatus::AtNestWithFood
            } else {
                AntStatus::AtNestIdle
            }
        } else if self.carrying_food {
            AntStatus::ReturningWithFood
        } else if cell.has_food() && !cell.has_nest() {
            AntStatus::FoundFood
        } else {
            AntStatus::Searching
        }
    }

    fn search_food<R: Rng>(&mut self, tick: usize, grid: &mut Grid, rng: &mut R) {
        let current = grid.cell(self.position.0, self.position.1);
        if current.has_food() && !current.has_nest() {
            grid.cell_mut(self.position.0, self.position.1).take_food();
            self.carrying_food = true;
            // Pick-up and the first homeward move share a turn.
            self.return_home(tick, grid);
            return;
        }

        // Score the orthogonal neighbors by scent. Out-of-bounds cells and
        // the cell the ant just left are not candidates.
        let mut best: Vec<(usize, usize)> = Vec::with_capacity(4);
        let mut best_scent = 0;
        for direction in Direction::ALL {
            if let Some(next) = direction.step(self.position, grid.size()) {
                if self.was_at(next) {
                    continue;
                }
                let scent = grid.cell(next.0, next.1).scent();
                if best.is_empty() || scent > best_scent {
                    best.clear();
                    best.push(next);
                    best_scent = scent;
                } else if scent == best_scent {
                    best.push(next);
                }
            }
        }

        let destination = if best.is_empty() {
            // Every neighbor is blocked; fall back to the cell the ant came
            // from. With no previous cell (a 1x1 grid) there is nowhere to
            // go at all.
            match self.previous {
                Some(previous) => previous,
                None => return,
            }
        } else {
            best[rng.gen_range(0..best.len())]
        };

        self.commit_move(grid, destination);
    }

    fn return_home(&mut self, tick: usize, grid: &mut Grid) {
        if self.is_at_nest() {
            grid.cell_mut(self.position.0, self.position.1).put_food(1);
            self.carrying_food = false;
            // Unloading consumes the whole turn.
            return;
        }

        // Mark the trail for other foragers before leaving the cell.
        grid.cell_mut(self.position.0, self.position.1)
            .add_scent(tick);

        // Step onto the neighbor closest to home. A strict comparison keeps
        // the first minimum in the up, down, left, right order, so homing
        // is deterministic.
        let mut destination = None;
        let mut best_distance = usize::MAX;
        for direction in Direction::ALL {
            if let Some(next) = direction.step(self.position, grid.size()) {
                let distance = manhattan(next, self.home);
                if distance < best_distance {
                    best_distance = distance;
                    destination = Some(next);
                }
            }
        }

        if let Some(next) = destination {
            self.commit_move(grid, next);
        }
    }

    fn commit_move(&mut self, grid: &mut Grid, destination: (usize, usize)) {
        grid.cell_mut(self.position.0, self.position.1)
            .remove_ant(self.id);
        self.previous = Some(self.position);
        self.position = destination;
        grid.cell_mut(destination.0, destination.1).add_ant(self.id);
    }
}

fn manhattan(a: (usize, usize), b: (usize, usize)) -> usize {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn carrying_ant(id: usize, position: (usize, usize), home: (usize, usize)) -> Ant {
        Ant {
            id,
            position,
            previous: None,
            home,
            carrying_food: true,
        }
    }

    fn occupied_grid(size: usize, id: usize, position: (usize, usize)) -> Grid {
        let mut grid = Grid::new(size);
        grid.cell_mut(position.0, position.1).add_ant(id);
        grid
    }

    #[test]
    fn when_creating_an_ant_it_starts_at_its_nest_without_food() {
        let ant = Ant::new(3, (1, 2));

        assert_eq!(ant.id(), 3);
        assert_eq!(ant.position(), (1, 2));
        assert_eq!(ant.home(), (1, 2));
        assert!(ant.is_at_nest());
        assert!(!ant.carries_food());
        assert!(!ant.was_at((1, 2)));
    }

    #[test]
    fn when_a_step_would_leave_the_grid_there_is_no_neighbor() {
        assert_eq!(Direction::Up.step((0, 1), 3), None);
        assert_eq!(Direction::Down.step((2, 1), 3), None);
        assert_eq!(Direction::Left.step((1, 0), 3), None);
        assert_eq!(Direction::Right.step((1, 2), 3), None);
    }

    #[test]
    fn when_a_step_stays_inside_the_grid_the_neighbor_is_returned() {
        assert_eq!(Direction::Up.step((1, 1), 3), Some((0, 1)));
        assert_eq!(Direction::Down.step((1, 1), 3), Some((2, 1)));
        assert_eq!(Direction::Left.step((1, 1), 3), Some((1, 0)));
        assert_eq!(Direction::Right.step((1, 1), 3), Some((1, 2)));
    }

    #[test]
    fn when_searching_the_ant_follows_the_strongest_scent() {
        let mut grid = occupied_grid(3, 0, (1, 1));
        grid.cell_mut(0, 1).add_scent(1);
        grid.cell_mut(0, 1).add_scent(1);
        grid.cell_mut(2, 1).add_scent(1);
        let mut ant = Ant::new(0, (1, 1));
        let mut rng = StdRng::seed_from_u64(0);

        ant.step(1, &mut grid, &mut rng);

        assert_eq!(ant.position(), (0, 1));
        assert_eq!(grid.cell(0, 1).occupants().to_vec(), vec![0]);
        assert!(!grid.cell(1, 1).has_ants());
        assert!(ant.was_at((1, 1)));
    }

    #[test]
    fn when_searching_the_previous_cell_is_never_chosen_even_with_the_strongest_scent() {
        let mut grid = occupied_grid(3, 7, (1, 1));
        for _ in 0..9 {
            grid.cell_mut(0, 1).add_scent(1);
        }

        // Whatever the seed draws, the just-visited cell stays off the table.
        for seed in 0..20 {
            let mut ant = Ant {
                id: 7,
                position: (1, 1),
                previous: Some((0, 1)),
                home: (1, 1),
                carrying_food: false,
            };
            let mut board = grid.clone();
            let mut rng = StdRng::seed_from_u64(seed);

            ant.step(1, &mut board, &mut rng);

            assert_ne!(ant.position(), (0, 1));
            assert!([(2, 1), (1, 0), (1, 2)].contains(&ant.position()));
        }
    }

    #[test]
    fn when_all_neighbors_tie_on_scent_each_can_be_drawn() {
        let grid = occupied_grid(3, 0, (1, 1));
        let mut seen = Vec::new();

        for seed in 0..80 {
            let mut ant = Ant::new(0, (1, 1));
            let mut board = grid.clone();
            let mut rng = StdRng::seed_from_u64(seed);

            ant.step(1, &mut board, &mut rng);

            if !seen.contains(&ant.position()) {
                seen.push(ant.position());
            }
        }

        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn when_standing_on_food_the_ant_picks_it_up_and_starts_home_the_same_turn() {
        let mut grid = occupied_grid(3, 4, (0, 0));
        grid.put_food((0, 0), 1);
        let mut ant = Ant {
            id: 4,
            position: (0, 0),
            previous: None,
            home: (1, 1),
            carrying_food: false,
        };
        let mut rng = StdRng::seed_from_u64(0);

        ant.step(5, &mut grid, &mut rng);

        assert!(ant.carries_food());
        assert!(!grid.cell(0, 0).has_food());
        assert_eq!(grid.cell(0, 0).scent(), 1);
        assert_eq!(ant.position(), (1, 0));
        assert_eq!(grid.cell(1, 0).occupants().to_vec(), vec![4]);
    }

    #[test]
    fn when_standing_on_a_nest_with_stored_food_the_ant_does_not_take_it() {
        let mut grid = occupied_grid(3, 0, (1, 1));
        grid.put_nest((1, 1), &[]);
        grid.put_food((1, 1), 3);
        let mut ant = Ant::new(0, (1, 1));
        let mut rng = StdRng::seed_from_u64(0);

        ant.step(1, &mut grid, &mut rng);

        assert!(!ant.carries_food());
        assert_eq!(grid.cell(1, 1).food_amount(), 3);
    }

    #[test]
    fn when_homing_the_first_direction_in_the_priority_order_wins_distance_ties() {
        // From (1, 0) toward (0, 1) both up and right close the distance;
        // up is scanned first.
        let mut grid = occupied_grid(3, 2, (1, 0));
        let mut ant = carrying_ant(2, (1, 0), (0, 1));
        let mut rng = StdRng::seed_from_u64(0);

        ant.step(3, &mut grid, &mut rng);

        assert_eq!(ant.position(), (0, 0));
    }

    #[test]
    fn when_homing_the_ant_lays_scent_on_the_cell_it_leaves() {
        let mut grid = occupied_grid(3, 0, (2, 1));
        let mut ant = carrying_ant(0, (2, 1), (0, 1));
        let mut rng = StdRng::seed_from_u64(0);

        ant.step(9, &mut grid, &mut rng);

        assert_eq!(grid.cell(2, 1).scent(), 1);
        assert_eq!(ant.position(), (1, 1));
        assert!(ant.carries_food());
    }

    #[test]
    fn when_a_carrying_ant_reaches_its_nest_it_unloads_and_stays_put() {
        let mut grid = occupied_grid(3, 0, (1, 1));
        grid.put_nest((1, 1), &[]);
        let mut ant = carrying_ant(0, (1, 1), (1, 1));
        let mut rng = StdRng::seed_from_u64(0);

        ant.step(4, &mut grid, &mut rng);

        assert!(!ant.carries_food());
        assert_eq!(ant.position(), (1, 1));
        assert_eq!(grid.cell(1, 1).food_amount(), 1);
        assert_eq!(grid.cell(1, 1).scent(), 0);
    }

    #[test]
    fn when_the_grid_is_a_single_cell_the_ant_stays_put() {
        let mut grid = occupied_grid(1, 0, (0, 0));
        let mut ant = Ant::new(0, (0, 0));
        let mut rng = StdRng::seed_from_u64(0);

        ant.step(1, &mut grid, &mut rng);

        assert_eq!(ant.position(), (0, 0));
        assert_eq!(grid.cell(0, 0).occupants().to_vec(), vec![0]);
    }

    #[test]
    fn when_cornered_against_its_previous_cell_the_ant_takes_the_free_neighbor() {
        // A corner cell has two neighbors; with one of them just visited
        // only the other remains, scented or not.
        let mut grid = Grid::new(2);
        grid.cell_mut(0, 0).add_ant(5);
        let mut ant = Ant {
            id: 5,
            position: (0, 0),
            previous: Some((0, 1)),
            home: (0, 0),
            carrying_food: false,
        };
        let mut rng = StdRng::seed_from_u64(0);

        ant.step(1, &mut grid, &mut rng);

        assert_eq!(ant.position(), (1, 0));
    }

    #[test]
    fn when_an_ant_moves_its_id_lives_in_exactly_one_occupant_set() {
        let mut grid = occupied_grid(3, 0, (1, 1));
        let mut ant = Ant::new(0, (1, 1));
        let mut rng = StdRng::seed_from_u64(17);

        for tick in 1..=10 {
            ant.step(tick, &mut grid, &mut rng);

            let mut memberships = 0;
            for row in 0..3 {
                for col in 0..3 {
                    if grid.cell(row, col).occupants().contains(&0) {
                        memberships += 1;
                    }
                }
            }
            assert_eq!(memberships, 1);
        }
    }

    #[test]
    fn when_reporting_status_each_state_maps_to_its_sentence() {
        assert_eq!(
            format!("{}", AntStatus::FoundFood),
            "It has found food!"
        );
        assert_eq!(
            format!("{}", AntStatus::AtNestWithFood),
            "It has returned to its nest and has food to deliver."
        );
        assert_eq!(
            format!("{}", AntStatus::AtNestIdle),
            "It is at its nest and does not hold any food."
        );
        assert_eq!(
            format!("{}", AntStatus::ReturningWithFood),
            "It is going back to its nest with food."
        );
        assert_eq!(
            format!("{}", AntStatus::Searching),
            "It is out looking for food."
        );
    }

    #[test]
    fn when_an_ant_stands_on_uncollected_food_its_status_reports_the_find() {
        let mut grid = occupied_grid(3, 0, (0, 2));
        grid.put_food((0, 2), 1);
        let ant = Ant {
            id: 0,
            position: (0, 2),
            previous: None,
            home: (1, 1),
            carrying_food: false,
        };

        assert_eq!(ant.status(&grid), AntStatus::FoundFood);
    }

    #[test]
    fn when_an_ant_carries_food_away_from_its_nest_its_status_is_returning() {
        let grid = occupied_grid(3, 0, (2, 2));
        let ant = carrying_ant(0, (2, 2), (0, 0));

        assert_eq!(ant.status(&grid), AntStatus::ReturningWithFood);
    }

    #[test]
    fn when_an_ant_sits_on_its_nest_the_status_depends_on_its_load() {
        let mut grid = occupied_grid(3, 0, (1, 1));
        grid.put_nest((1, 1), &[]);

        let idle = Ant::new(0, (1, 1));
        assert_eq!(idle.status(&grid), AntStatus::AtNestIdle);

        let loaded = carrying_ant(1, (1, 1), (1, 1));
        assert_eq!(loaded.status(&grid), AntStatus::AtNestWithFood);
    }

    #[test]
    fn when_an_empty_handed_ant_roams_empty_land_its_status_is_searching() {
        let grid = occupied_grid(3, 0, (2, 0));
        let ant = Ant {
            id: 0,
            position: (2, 0),
            previous: None,
            home: (0, 0),
            carrying_food: false,
        };

        assert_eq!(ant.status(&grid), AntStatus::Searching);
    }
}
