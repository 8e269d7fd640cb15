use crate::core::grid::RoomGrid;
use crate::domain::model::SeatPosition;
use std::io::{self, BufRead, Write};

pub const EXIT_KEYWORD: &str = "exit";
pub const PROMPT: &str = "Enter Roll Number to find (or type 'exit' to quit): ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(SeatPosition),
    NotFound,
}

pub fn lookup(grid: &RoomGrid, roll_number: &str) -> SearchOutcome {
    match grid.search(roll_number) {
        Some(position) => SearchOutcome::Found(position),
        None => SearchOutcome::NotFound,
    }
}

pub fn describe(roll_number: &str, outcome: &SearchOutcome) -> String {
    match outcome {
        SearchOutcome::Found(position) => {
            format!("--> FOUND: Student {} is in {}", roll_number, position)
        }
        SearchOutcome::NotFound => format!(
            "--> NOT FOUND: Student {} is NOT in the seating plan.",
            roll_number
        ),
    }
}

/// Prompt-and-answer loop over a finished seating plan.
pub struct SearchSession<'a> {
    grid: &'a RoomGrid,
}

impl<'a> SearchSession<'a> {
    pub fn new(grid: &'a RoomGrid) -> Self {
        Self { grid }
    }

    /// Runs until `exit` is entered or input ends. Each whitespace-separated
    /// token is one query. Returns the number of queries answered.
    pub fn run<R: BufRead, W: Write>(&self, reader: R, mut writer: W) -> io::Result<usize> {
        let mut answered = 0;

        writeln!(writer, "\n--- Student Search Tool ---")?;
        write!(writer, "{}", PROMPT)?;
        writer.flush()?;

        for line in reader.lines() {
            let line = line?;
            for token in line.split_whitespace() {
                if token == EXIT_KEYWORD {
                    writeln!(writer, "Exiting search tool.")?;
                    return Ok(answered);
                }

                let outcome = lookup(self.grid, token);
                tracing::debug!("Search for {}: {:?}", token, outcome);
                writeln!(writer, "{}", describe(token, &outcome))?;
                answered += 1;

                write!(writer, "{}", PROMPT)?;
                writer.flush()?;
            }
        }

        writeln!(writer)?;
        tracing::debug!("Search input closed after {} queries", answered);
        Ok(answered)
    }
}
