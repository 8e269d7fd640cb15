pub mod run;
pub mod search;

pub use run::search_then_export;
pub use search::{SearchOutcome, SearchSession};
