use std::collections::VecDeque;
use std::fmt;

/// A single location on the grid.
///
/// A cell tracks whether a nest sits on it, how much food it holds, the
/// scent trail as a queue of deposit timestamps, and which ants currently
/// occupy it. Food on a nest cell counts as stored; food anywhere else is
/// waiting for collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    nest: bool,
    food: usize,
    deposits: VecDeque<usize>,
    occupants: Vec<usize>,
}

impl Cell {
    /// Creates an empty cell: no nest, no food, no scent, no ants.
    pub fn new() -> Cell {
        Cell::default()
    }

    /// Marks the cell as a nest. Idempotent.
    pub fn put_nest(&mut self) {
        self.nest = true;
    }

    pub fn has_nest(&self) -> bool {
        self.nest
    }

    pub fn has_food(&self) -> bool {
        self.food > 0
    }

    pub fn food_amount(&self) -> usize {
        self.food
    }

    /// Adds `amount` food units to the cell.
    pub fn put_food(&mut self, amount: usize) {
        self.food += amount;
    }

    /// Withdraws a single food unit.
    ///
    /// Panics when the cell is a nest or holds no food; either withdrawal
    /// is a bookkeeping bug in the caller, not a condition to clamp.
    pub fn take_food(&mut self) {
        if self.nest {
            panic!("Cannot take food from a nest cell!");
        }
        if self.food == 0 {
            panic!("Cannot take food from an empty cell!");
        }
        self.food -= 1;
    }

    /// The current scent level: one unit per live deposit.
    pub fn scent(&self) -> usize {
        self.deposits.len()
    }

    /// Records a scent deposit made at `tick`.
    ///
    /// The simulation clock is monotonic, so deposits arrive in
    /// nondecreasing tick order; `update_scent` relies on that.
    pub fn add_scent(&mut self, tick: usize) {
        self.deposits.push_back(tick);
    }

    /// Expires every deposit older than `ttl` ticks. A deposit aged exactly
    /// `ttl` still counts.
    ///
    /// Expired deposits cluster at the front of the queue, so the purge
    /// stops at the first live one and costs time proportional to the
    /// number of deposits dropped.
    pub fn update_scent(&mut self, now: usize, ttl: usize) {
        while let Some(&oldest) = self.deposits.front() {
            if now - oldest > ttl {
                self.deposits.pop_front();
            } else {
                break;
            }
        }
    }

    pub fn has_ants(&self) -> bool {
        !self.occupants.is_empty()
    }

    /// The ids of the ants standing on this cell, in arrival order.
    pub fn occupants(&self) -> &[usize] {
        &self.occupants
    }

    /// Registers ant `id` as an occupant.
    ///
    /// Panics when the id is already present.
    pub fn add_ant(&mut self, id: usize) {
        if self.occupants.contains(&id) {
            panic!("Ant {} is already an occupant of this cell!", id);
        }
        self.occupants.push(id);
    }

    /// Removes ant `id` from the occupant set.
    ///
    /// Panics when the id is not present.
    pub fn remove_ant(&mut self, id: usize) {
        match self.occupants.iter().position(|&occupant| occupant == id) {
            Some(index) => {
                self.occupants.remove(index);
            }
            None => panic!("Ant {} is not an occupant of this cell!", id),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nest {
            writeln!(f, "\tCell with a nest.")?;
        } else {
            writeln!(f, "\tCell with no nest.")?;
        }

        if self.nest && self.food > 0 {
            writeln!(f, "\t- Food stored in the nest: {}", self.food)?;
        }
        if !self.nest && self.food > 0 {
            writeln!(f, "\t- Food available for collection: {}", self.food)?;
        }
        if self.food == 0 {
            writeln!(f, "\t- There is no food.")?;
        }

        if self.scent() > 0 {
            writeln!(f, "\t- Scent level: {}", self.scent())?;
        }

        if self.occupants.is_empty() {
            writeln!(f, "\t- There are no ants on this cell.")
        } else {
            writeln!(f, "\t- There are {} ants on this cell.", self.occupants.len())
        }
    }
}
