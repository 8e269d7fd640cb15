pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::LocalStorage;
pub use app::SearchSession;
pub use config::SeatingConfig;
pub use crate::core::{
    allocator::RoundRobinAllocator,
    engine::{SeatingEngine, SeatingPlan},
    grid::RoomGrid,
    roster::BranchRoster,
};
pub use utils::error::{Result, SeatingError};
