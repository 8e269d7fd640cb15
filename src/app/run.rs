use crate::app::search::SearchSession;
use crate::core::engine::{SeatingEngine, SeatingPlan};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// Runs the interactive search and then exports the plan. A broken console
/// ends the search but never skips the export.
pub fn search_then_export<S, C, R, W>(
    engine: &SeatingEngine<S, C>,
    plan: &SeatingPlan,
    input: R,
    output: W,
) -> Result<String>
where
    S: Storage,
    C: ConfigProvider,
    R: BufRead,
    W: Write,
{
    if let Err(e) = SearchSession::new(&plan.grid).run(input, output) {
        tracing::error!("Search session ended early: {}", e);
    }
    engine.export(plan)
}
