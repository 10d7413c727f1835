use crate::ant::Ant;
use crate::grid::Grid;
use crossterm::{
    cursor::Hide,
    execute,
    style::{Color, Print, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::collections::HashMap;
use std::io::{stdout, Write};

/// Draws the run to the console: a header with the run's vitals, then one
/// glyph per cell.
///
/// Ants render as `a` (or `A` when an occupant carries food), nests as `N`,
/// food as `*` and scented land as `+`.
pub fn draw(grid: &Grid, ants: &[Ant], tick: usize) {
    let mut stdout = stdout();

    let carrying = ants.iter().filter(|ant| ant.carries_food()).count();
    // Whether any occupant of a cell carries food, for the glyph choice
    let mut carriers: HashMap<(usize, usize), bool> = HashMap::new();
    for ant in ants {
        let entry = carriers.entry(ant.position()).or_insert(false);
        *entry = *entry || ant.carries_food();
    }

    // Display information about the run
    execute!(
        stdout,
        Clear(ClearType::All),
        Hide,
        Print("Tick: "),
        Print(tick.to_string()),
        Print("\nAnts carrying food: "),
        Print(carrying.to_string()),
        Print("/"),
        Print(ants.len().to_string()),
        Print("\nFood in the field: "),
        Print(grid.food_outside_nests().to_string()),
        Print("\nFood stored in nests: "),
        Print(grid.food_in_nests().to_string()),
        Print("\n\n")
    )
    .unwrap();

    // Display the grid
    for row in 0..grid.size() {
        for col in 0..grid.size() {
            let cell = grid.cell(row, col);
            let (glyph, color) = if cell.has_ants() {
                match carriers.get(&(row, col)) {
                    Some(true) => ('A', Color::Red),
                    _ => ('a', Color::Yellow),
                }
            } else if cell.has_nest() {
                ('N', Color::White)
            } else if cell.has_food() {
                ('*', Color::Green)
            } else if cell.scent() > 0 {
                ('+', Color::DarkGrey)
            } else {
                ('.', Color::Grey)
            };

            execute!(
                stdout,
                SetForegroundColor(color),
                Print(glyph),
                SetForegroundColor(Color::Reset)
            )
            .unwrap();
        }
        execute!(stdout, Print("\n")).unwrap();
    }

    stdout.flush().unwrap();
}
