use crate::core::allocator::{AllocationReport, RoundRobinAllocator};
use crate::core::grid::RoomGrid;
use crate::core::render;
use crate::core::roster::{BranchRoster, LoadReport};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::{Result, SeatingError};

/// A filled grid together with what happened while building it.
#[derive(Debug, Clone)]
pub struct SeatingPlan {
    pub grid: RoomGrid,
    pub load: LoadReport,
    pub allocation: AllocationReport,
}

pub struct SeatingEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    allocator: RoundRobinAllocator,
}

impl<S: Storage, C: ConfigProvider> SeatingEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            allocator: RoundRobinAllocator::new(),
        }
    }

    /// Reads the input file into branch queues. The file is read in full
    /// before anything is seated.
    pub fn load(&self) -> Result<(BranchRoster, LoadReport)> {
        let path = self.config.input_path();
        tracing::info!("Loading students from {}", path);

        let data = self
            .storage
            .read_file(path)
            .map_err(|e| SeatingError::InputUnavailable {
                path: path.to_string(),
                message: e.to_string(),
            })?;
        let text = String::from_utf8_lossy(&data);

        let mut roster = BranchRoster::new(self.config.branch_order().iter().cloned());
        let report = roster.load_str(&text);

        tracing::info!("Loaded {} student(s)", report.accepted);
        if !report.unrecognized.is_empty() {
            tracing::warn!(
                "{} record(s) with an unrecognized branch were skipped",
                report.unrecognized.len()
            );
        }
        if report.malformed > 0 {
            tracing::debug!("{} malformed record(s) skipped", report.malformed);
        }

        Ok((roster, report))
    }

    pub fn build_plan(&self) -> Result<SeatingPlan> {
        let (mut roster, load) = self.load()?;

        let layout = self.config.layout();
        tracing::debug!(
            "Allocating into {} room(s) of {}x{} ({} seats)",
            layout.rooms,
            layout.rows,
            layout.columns,
            layout.capacity()
        );
        let mut grid = RoomGrid::new(layout);
        let allocation = self.allocator.allocate(&mut roster, &mut grid);

        Ok(SeatingPlan {
            grid,
            load,
            allocation,
        })
    }

    /// Writes the plan in the configured format, replacing any previous
    /// file. Returns the path written.
    pub fn export(&self, plan: &SeatingPlan) -> Result<String> {
        let path = self.config.output_path();
        let format = self.config.export_format();
        tracing::info!("Exporting seating plan as {} to {}", format, path);

        let content = render::render(&plan.grid, format)?;
        self.storage
            .write_file(path, content.as_bytes())
            .map_err(|e| SeatingError::ExportFailed {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        Ok(path.to_string())
    }
}
