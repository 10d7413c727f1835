use crate::error::{ParseError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A complete foraging setup: grid dimension, colony size, scent lifetime,
/// tick budget and the layout of nests and food.
///
/// Scenarios load from a small text format or from JSON; both run the same
/// validation. The text format takes one directive per line followed by the
/// layout rows:
///
/// ```text
/// size 5
/// ants 2
/// ttl 10
/// budget 300
/// tribe crimson
/// m .....
/// m .N...
/// m ...3.
/// m .....
/// m .....
/// ```
///
/// Layout glyphs: `.` is empty land, `N` a nest, `*` a single food unit and
/// `1`-`9` a pile of that many units.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Grid dimension; the grid is `size` x `size`.
    pub size: usize,
    /// Number of ants, homed round-robin across the nests in layout order.
    pub ants: usize,
    /// How many ticks a scent deposit stays counted.
    pub scent_ttl: usize,
    /// Maximum number of ticks before the run is cut off.
    pub tick_budget: usize,
    /// Display label for the colony. No effect on behavior.
    #[serde(default)]
    pub tribe: Option<String>,
    /// Nest positions as (row, col).
    pub nests: Vec<(usize, usize)>,
    /// Food placements as ((row, col), amount).
    pub food: Vec<((usize, usize), usize)>,
}

impl Scenario {
    /// Parses the text format.
    pub fn parse(contents: &str) -> Result<Scenario> {
        let size = directive(contents, "size")?;
        let ants = directive(contents, "ants")?;
        let scent_ttl = directive(contents, "ttl")?;
        let tick_budget = directive(contents, "budget")?;
        let tribe = Regex::new(r"(?m)^\s*tribe (\w+)")
            .unwrap()
            .captures(contents)
            .map(|captures| captures.get(1).unwrap().as_str().to_string());

        let rows: Vec<&str> = Regex::new(r"(?m)^\s*m (.*)$")
            .unwrap()
            .captures_iter(contents)
            .map(|captures| captures.get(1).unwrap().as_str().trim())
            .collect();

        if rows.len() != size {
            return Err(ParseError::InvalidLine(format!(
                "expected {} layout rows, found {}",
                size,
                rows.len()
            )));
        }

        let mut nests = Vec::new();
        let mut food = Vec::new();
        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() != size {
                return Err(ParseError::InvalidLine(format!(
                    "layout row {} has {} glyphs, expected {}",
                    row,
                    line.chars().count(),
                    size
                )));
            }

            for (col, glyph) in line.chars().enumerate() {
                match glyph {
                    '.' => {}
                    'N' => nests.push((row, col)),
                    '*' => food.push(((row, col), 1)),
                    '1'..='9' => food.push(((row, col), glyph.to_digit(10).unwrap() as usize)),
                    _ => {
                        return Err(ParseError::InvalidLine(format!(
                            "unexpected glyph '{}' at row {}, column {}",
                            glyph, row, col
                        )))
                    }
                }
            }
        }

        let scenario = Scenario {
            size,
            ants,
            scent_ttl,
            tick_budget,
            tribe,
            nests,
            food,
        };
        scenario.validate()?;

        Ok(scenario)
    }

    /// Reads a scenario from a file. A `.json` extension deserializes the
    /// JSON representation; anything else parses as the text format.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Scenario> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        if path.extension().map_or(false, |extension| extension == "json") {
            let scenario: Scenario = serde_json::from_str(&contents)?;
            scenario.validate()?;
            Ok(scenario)
        } else {
            Scenario::parse(&contents)
        }
    }

    fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(ParseError::InvalidLine(
                "size must be greater than zero".to_string(),
            ));
        }
        if self.tick_budget == 0 {
            return Err(ParseError::InvalidLine(
                "budget must be greater than zero".to_string(),
            ));
        }
        if self.ants > 0 && self.nests.is_empty() {
            return Err(ParseError::MissingNest);
        }

        for &(row, col) in &self.nests {
            if row >= self.size || col >= self.size {
                return Err(ParseError::InvalidLine(format!(
                    "nest ({}, {}) lies outside the {}x{} grid",
                    row, col, self.size, self.size
                )));
            }
        }
        for &((row, col), amount) in &self.food {
            if row >= self.size || col >= self.size {
                return Err(ParseError::InvalidLine(format!(
                    "food at ({}, {}) lies outside the {}x{} grid",
                    row, col, self.size, self.size
                )));
            }
            if amount == 0 {
                return Err(ParseError::InvalidLine(format!(
                    "food at ({}, {}) has a zero amount",
                    row, col
                )));
            }
        }

        Ok(())
    }
}

fn directive(contents: &str, name: &'static str) -> Result<usize> {
    let pattern = format!(r"(?m)^\s*{} (\d+)", name);
    match Regex::new(&pattern).unwrap().captures(contents) {
        Some(captures) => captures
            .get(1)
            .unwrap()
            .as_str()
            .parse()
            .map_err(|_| ParseError::InvalidLine(format!("`{}` value is out of range", name))),
        None => Err(ParseError::MissingDirective(name)),
    }
}
