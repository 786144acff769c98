//! Newtype wrappers for the values exchanged with the game loop.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A move on the grid.
///
/// `Stop` is the engine's no-op move: it may appear in legal sets but is
/// never learned over and never predicted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
    Stop,
}

impl Direction {
    /// The four moves in label order (0-3).
    pub const CARDINALS: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The move that undoes this one. `Stop` reverses to itself.
    pub fn reverse(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Stop => Direction::Stop,
        }
    }

    /// Unit grid offset `(dx, dy)`; north is +y.
    pub fn offset(self) -> (i64, i64) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::Stop => (0, 0),
        }
    }

    pub fn is_stop(self) -> bool {
        self == Direction::Stop
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
            Direction::Stop => "Stop",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(Direction::North),
            "east" | "e" => Ok(Direction::East),
            "south" | "s" => Ok(Direction::South),
            "west" | "w" => Ok(Direction::West),
            "stop" => Ok(Direction::Stop),
            _ => Err(Error::ParseDirection {
                input: s.to_string(),
                expected: "north, east, south, west, stop".to_string(),
            }),
        }
    }
}

/// Formats a legal set for error messages and logs.
pub(crate) fn format_directions(actions: &[Direction]) -> String {
    actions
        .iter()
        .map(Direction::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A class label: 0 = North, 1 = East, 2 = South, 3 = West.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Label(u8);

impl Label {
    /// Number of labels the classifier distinguishes.
    pub const COUNT: usize = 4;

    /// Create a label, validating it names one of the four moves.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLabel`] for values >= 4.
    pub fn new(value: u8) -> Result<Self> {
        if (value as usize) < Self::COUNT {
            Ok(Label(value))
        } else {
            Err(Error::InvalidLabel { value })
        }
    }

    /// All labels in scan order. Tie-breaking relies on this order.
    pub fn all() -> impl Iterator<Item = Label> {
        (0..Self::COUNT as u8).map(Label)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn direction(self) -> Direction {
        Direction::CARDINALS[self.index()]
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Largest feature value the training format can express.
pub const MAX_FEATURE_VALUE: u8 = 4;

/// Local state observed by the agent, one small integer per feature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureVector(Vec<u8>);

impl FeatureVector {
    pub fn new(values: Vec<u8>) -> Self {
        FeatureVector(values)
    }

    /// Parse a string of digits such as `"0101"`.
    ///
    /// Whitespace is ignored; any other character outside `0-4` is an error.
    pub fn from_digits(digits: &str) -> Result<Self> {
        digits
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|character| match character.to_digit(10) {
                Some(d) if d <= MAX_FEATURE_VALUE as u32 => Ok(d as u8),
                _ => Err(Error::InvalidFeature { character }),
            })
            .collect::<Result<Vec<_>>>()
            .map(FeatureVector)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A feature counts as present when its value is non-zero.
    pub fn is_present(&self, index: usize) -> bool {
        self.0.get(index).is_some_and(|&v| v != 0)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for FeatureVector {
    fn from(values: Vec<u8>) -> Self {
        FeatureVector(values)
    }
}

impl fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in &self.0 {
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// A point on the grid. Engines may report fractional positions for
/// agents that are between cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }

    /// The grid cell, truncating toward zero.
    pub fn cell(&self) -> (i64, i64) {
        (self.x.trunc() as i64, self.y.trunc() as i64)
    }
}

impl From<(i64, i64)> for Position {
    fn from((x, y): (i64, i64)) -> Self {
        Position::new(x as f64, y as f64)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Opaque key identifying a game state in the Q-table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateKey(String);

impl StateKey {
    pub fn new(key: impl Into<String>) -> Self {
        StateKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StateKey {
    fn from(key: &str) -> Self {
        StateKey(key.to_string())
    }
}

impl From<String> for StateKey {
    fn from(key: String) -> Self {
        StateKey(key)
    }
}

/// Keys a state by the agent's grid cell.
impl From<Position> for StateKey {
    fn from(position: Position) -> Self {
        let (x, y) = position.cell();
        StateKey(format!("{x},{y}"))
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_pairs() {
        for direction in Direction::CARDINALS {
            assert_ne!(direction.reverse(), direction);
            assert_eq!(direction.reverse().reverse(), direction);
        }
        assert_eq!(Direction::Stop.reverse(), Direction::Stop);
    }

    #[test]
    fn test_label_maps_to_cardinal_order() {
        let directions: Vec<Direction> = Label::all().map(Label::direction).collect();
        assert_eq!(directions, Direction::CARDINALS.to_vec());
        assert!(matches!(Label::new(4), Err(Error::InvalidLabel { value: 4 })));
    }

    #[test]
    fn test_feature_digits() {
        let features = FeatureVector::from_digits("0 1 4").unwrap();
        assert_eq!(features.as_slice(), &[0, 1, 4]);
        assert!(!features.is_present(0));
        assert!(features.is_present(2));
        assert!(!features.is_present(7));
        assert!(FeatureVector::from_digits("15").is_err());
    }

    #[test]
    fn test_position_cell_truncates() {
        assert_eq!(Position::new(3.5, 2.9).cell(), (3, 2));
        assert_eq!(StateKey::from(Position::new(3.5, 2.0)).as_str(), "3,2");
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("north".parse::<Direction>().unwrap(), Direction::North);
        assert_eq!(" W ".parse::<Direction>().unwrap(), Direction::West);
        assert!("up".parse::<Direction>().is_err());
    }
}
