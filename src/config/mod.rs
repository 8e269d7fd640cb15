#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::{ExportFormat, RoomLayout, DEFAULT_BRANCHES, MAX_SEATS};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SeatingError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_INPUT_FILE: &str = "students.txt";
pub const DEFAULT_OUTPUT_FILE: &str = "seating_plan.txt";

/// Fully resolved settings for one run: defaults, then the TOML file,
/// then command-line overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatingConfig {
    pub input_path: String,
    pub output_path: String,
    pub layout: RoomLayout,
    pub branches: Vec<String>,
    pub export_format: ExportFormat,
}

impl Default for SeatingConfig {
    fn default() -> Self {
        Self {
            input_path: DEFAULT_INPUT_FILE.to_string(),
            output_path: DEFAULT_OUTPUT_FILE.to_string(),
            layout: RoomLayout::default(),
            branches: DEFAULT_BRANCHES.iter().map(|b| b.to_string()).collect(),
            export_format: ExportFormat::default(),
        }
    }
}

impl ConfigProvider for SeatingConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn layout(&self) -> RoomLayout {
        self.layout
    }

    fn branch_order(&self) -> &[String] {
        &self.branches
    }

    fn export_format(&self) -> ExportFormat {
        self.export_format
    }
}

impl Validate for SeatingConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("files.input", &self.input_path)?;
        validation::validate_path("files.output", &self.output_path)?;
        validation::validate_positive_number("layout.rooms", self.layout.rooms, 1)?;
        validation::validate_positive_number("layout.rows", self.layout.rows, 1)?;
        validation::validate_positive_number("layout.columns", self.layout.columns, 1)?;
        match self.layout.checked_capacity() {
            Some(seats) if seats <= MAX_SEATS => {}
            _ => {
                return Err(SeatingError::InvalidConfigValueError {
                    field: "layout".to_string(),
                    value: format!(
                        "{}x{}x{}",
                        self.layout.rooms, self.layout.rows, self.layout.columns
                    ),
                    reason: format!("Total seats must not exceed {}", MAX_SEATS),
                });
            }
        }
        validation::validate_branch_codes("branches.order", &self.branches)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_exam_hall() {
        let config = SeatingConfig::default();
        assert_eq!(config.input_path(), "students.txt");
        assert_eq!(config.output_path(), "seating_plan.txt");
        assert_eq!(config.layout().capacity(), 100);
        assert_eq!(
            config.branch_order(),
            &["CSE", "IT", "EXCP", "RAI", "ENTC"].map(String::from)
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_sized_layout_is_rejected() {
        let config = SeatingConfig {
            layout: RoomLayout::new(3, 0, 5),
            ..SeatingConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_layout_is_rejected() {
        let overflowing = SeatingConfig {
            layout: RoomLayout::new(1 << 33, 1 << 33, 5),
            ..SeatingConfig::default()
        };
        assert!(matches!(
            overflowing.validate(),
            Err(SeatingError::InvalidConfigValueError { ref field, .. }) if field == "layout"
        ));

        let too_many_seats = SeatingConfig {
            layout: RoomLayout::new(2_000_000, 2_000_000, 2_000_000),
            ..SeatingConfig::default()
        };
        assert!(too_many_seats.validate().is_err());

        let at_limit = SeatingConfig {
            layout: RoomLayout::new(1_000, 100, 10),
            ..SeatingConfig::default()
        };
        assert!(at_limit.validate().is_ok());
    }
}
