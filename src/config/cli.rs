use crate::config::toml_config::TomlConfig;
use crate::config::SeatingConfig;
use crate::domain::model::{ExportFormat, RoomLayout};
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "exam-seating")]
#[command(about = "Round-robin exam hall seating planner")]
pub struct CliConfig {
    /// Student list: whitespace-separated `<roll> <branch>` pairs
    #[arg(short, long)]
    pub input: Option<String>,

    /// File the seating plan is exported to (overwritten)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Optional TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long)]
    pub rooms: Option<usize>,

    #[arg(long)]
    pub rows: Option<usize>,

    #[arg(long)]
    pub columns: Option<usize>,

    /// Branch codes in round-robin order
    #[arg(long, value_delimiter = ',')]
    pub branches: Option<Vec<String>>,

    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Skip the interactive roll-number search
    #[arg(long)]
    pub no_search: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl CliConfig {
    /// Defaults, then `--config`, then the flags on this command line.
    pub fn resolve(&self) -> Result<SeatingConfig> {
        let mut config = SeatingConfig::default();

        if let Some(path) = &self.config {
            tracing::debug!("Reading settings from {}", path);
            config = TomlConfig::from_file(path)?.apply_to(config);
        }

        Ok(self.apply_to(config))
    }

    fn apply_to(&self, base: SeatingConfig) -> SeatingConfig {
        let mut config = base;

        if let Some(input) = &self.input {
            config.input_path = input.clone();
        }
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        config.layout = RoomLayout::new(
            self.rooms.unwrap_or(config.layout.rooms),
            self.rows.unwrap_or(config.layout.rows),
            self.columns.unwrap_or(config.layout.columns),
        );
        if let Some(branches) = &self.branches {
            config.branches = branches.clone();
        }
        if let Some(format) = self.format {
            config.export_format = format;
        }

        config
    }
}
