use serde::{Deserialize, Serialize};
use std::fmt;

pub const EMPTY_ROLL_NUMBER: &str = "EMPTY";
pub const EMPTY_BRANCH: &str = "---";

/// Upper bound on seats across all rooms accepted by configuration.
pub const MAX_SEATS: usize = 1_000_000;

pub const DEFAULT_BRANCHES: [&str; 5] = ["CSE", "IT", "EXCP", "RAI", "ENTC"];

/// A student as read from the input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub roll_number: String,
    pub branch: String,
}

impl Student {
    pub fn new(roll_number: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            roll_number: roll_number.into(),
            branch: branch.into(),
        }
    }
}

/// One cell of the room grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Seat {
    #[default]
    Empty,
    Occupied(Student),
}

impl Seat {
    pub fn roll_number(&self) -> &str {
        match self {
            Seat::Empty => EMPTY_ROLL_NUMBER,
            Seat::Occupied(student) => &student.roll_number,
        }
    }

    pub fn branch(&self) -> &str {
        match self {
            Seat::Empty => EMPTY_BRANCH,
            Seat::Occupied(student) => &student.branch,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Seat::Empty)
    }

    pub fn student(&self) -> Option<&Student> {
        match self {
            Seat::Empty => None,
            Seat::Occupied(student) => Some(student),
        }
    }
}

// Exports always spell out the sentinel, so a seat serializes the same way
// whether it is taken or not.
impl Serialize for Seat {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Student::new(self.roll_number(), self.branch()).serialize(serializer)
    }
}

/// 1-indexed seat coordinates as shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SeatPosition {
    pub room: usize,
    pub row: usize,
    pub bench: usize,
}

impl fmt::Display for SeatPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ROOM {}, Row {}, Bench {}", self.room, self.row, self.bench)
    }
}

/// Dimensions of every exam room. All rooms share one shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomLayout {
    pub rooms: usize,
    pub rows: usize,
    pub columns: usize,
}

impl RoomLayout {
    pub fn new(rooms: usize, rows: usize, columns: usize) -> Self {
        Self {
            rooms,
            rows,
            columns,
        }
    }

    pub fn seats_per_room(&self) -> usize {
        self.rows.saturating_mul(self.columns)
    }

    /// Saturates instead of overflowing. Layouts that have not been through
    /// `checked_capacity` (as config validation does) may report a size no
    /// grid can be allocated for.
    pub fn capacity(&self) -> usize {
        self.rooms.saturating_mul(self.seats_per_room())
    }

    /// Total seats, or `None` when the product does not fit in `usize`.
    pub fn checked_capacity(&self) -> Option<usize> {
        self.rows
            .checked_mul(self.columns)
            .and_then(|per_room| per_room.checked_mul(self.rooms))
    }

    /// Maps a fill-order index to its display coordinates.
    pub fn position_of(&self, index: usize) -> SeatPosition {
        let per_room = self.seats_per_room();
        SeatPosition {
            room: index / per_room + 1,
            row: (index % per_room) / self.columns + 1,
            bench: index % self.columns + 1,
        }
    }

    pub fn index_of(&self, position: SeatPosition) -> Option<usize> {
        let in_range = (1..=self.rooms).contains(&position.room)
            && (1..=self.rows).contains(&position.row)
            && (1..=self.columns).contains(&position.bench);
        in_range.then(|| {
            (position.room - 1) * self.seats_per_room()
                + (position.row - 1) * self.columns
                + (position.bench - 1)
        })
    }
}

impl Default for RoomLayout {
    fn default() -> Self {
        Self::new(5, 4, 5)
    }
}

/// Output flavours for the exported plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Text => "text",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        };
        f.write_str(name)
    }
}
