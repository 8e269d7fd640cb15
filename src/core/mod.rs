pub mod allocator;
pub mod engine;
pub mod grid;
pub mod queue;
pub mod render;
pub mod roster;

pub use crate::domain::model::{RoomLayout, Seat, SeatPosition, Student};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
