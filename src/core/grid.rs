use crate::domain::model::{RoomLayout, Seat, SeatPosition, Student};

/// Every seat across all rooms, stored flat in fill order
/// (room, then row, then bench).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomGrid {
    layout: RoomLayout,
    seats: Vec<Seat>,
}

impl RoomGrid {
    pub fn new(layout: RoomLayout) -> Self {
        Self {
            layout,
            seats: vec![Seat::Empty; layout.capacity()],
        }
    }

    pub fn layout(&self) -> RoomLayout {
        self.layout
    }

    pub fn capacity(&self) -> usize {
        self.seats.len()
    }

    pub fn get(&self, position: SeatPosition) -> Option<&Seat> {
        self.layout
            .index_of(position)
            .and_then(|index| self.seats.get(index))
    }

    /// Seats a student at a fill-order index. A seat is written at most
    /// once; taken or out-of-range seats leave the grid untouched and the
    /// student is handed back.
    pub fn place(&mut self, index: usize, student: Student) -> Result<SeatPosition, Student> {
        match self.seats.get_mut(index) {
            Some(seat) if seat.is_empty() => {
                *seat = Seat::Occupied(student);
                Ok(self.layout.position_of(index))
            }
            _ => Err(student),
        }
    }

    pub fn is_vacant(&self, index: usize) -> bool {
        self.seats.get(index).is_some_and(Seat::is_empty)
    }

    /// Seats with their coordinates, in fill order.
    pub fn positions(&self) -> impl Iterator<Item = (SeatPosition, &Seat)> {
        let layout = self.layout;
        self.seats
            .iter()
            .enumerate()
            .map(move |(index, seat)| (layout.position_of(index), seat))
    }

    pub fn occupied(&self) -> usize {
        self.seats.iter().filter(|seat| !seat.is_empty()).count()
    }

    /// One slice per room.
    pub fn rooms(&self) -> impl Iterator<Item = &[Seat]> {
        self.seats.chunks(self.layout.seats_per_room().max(1))
    }

    /// First seat whose roll number matches, scanning in fill order.
    /// Vacant seats compare as `EMPTY`.
    pub fn search(&self, roll_number: &str) -> Option<SeatPosition> {
        self.positions()
            .find(|(_, seat)| seat.roll_number() == roll_number)
            .map(|(position, _)| position)
    }
}
