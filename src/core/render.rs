use crate::core::grid::RoomGrid;
use crate::domain::model::{ExportFormat, RoomLayout, Seat};
use crate::utils::error::{Result, SeatingError};
use serde::Serialize;

pub const PLAN_TITLE: &str = "--- Exam Hall Seating Plan ---";
pub const PLAN_FOOTER: &str = "---------------------------------";

fn format_seat(seat: &Seat) -> String {
    format!("{:<10} ({:<4})\t", seat.roll_number(), seat.branch())
}

/// Text rendering shared by the console and the `text` export.
pub fn render_plan(grid: &RoomGrid) -> String {
    let columns = grid.layout().columns.max(1);
    let mut out = String::new();
    out.push_str(PLAN_TITLE);
    out.push('\n');

    for (room_index, room) in grid.rooms().enumerate() {
        out.push_str(&format!("\n--- ROOM {} ---\n", room_index + 1));
        for row in room.chunks(columns) {
            for seat in row {
                out.push_str(&format_seat(seat));
            }
            out.push('\n');
        }
    }

    out
}

/// What the console shows after allocation.
pub fn render_console(grid: &RoomGrid) -> String {
    format!("\n{}\n{}\n", render_plan(grid), PLAN_FOOTER)
}

#[derive(Debug, Serialize)]
struct CsvSeat<'a> {
    room: usize,
    row: usize,
    bench: usize,
    roll_number: &'a str,
    branch: &'a str,
}

pub fn render_csv(grid: &RoomGrid) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for (position, seat) in grid.positions() {
        writer.serialize(CsvSeat {
            room: position.room,
            row: position.row,
            bench: position.bench,
            roll_number: seat.roll_number(),
            branch: seat.branch(),
        })?;
    }
    let data = writer
        .into_inner()
        .map_err(|e| SeatingError::IoError(e.into_error()))?;
    String::from_utf8(data)
        .map_err(|e| SeatingError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

#[derive(Debug, Serialize)]
struct JsonPlan<'a> {
    layout: RoomLayout,
    rooms: Vec<JsonRoom<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonRoom<'a> {
    room: usize,
    rows: Vec<&'a [Seat]>,
}

pub fn render_json(grid: &RoomGrid) -> Result<String> {
    let columns = grid.layout().columns.max(1);
    let plan = JsonPlan {
        layout: grid.layout(),
        rooms: grid
            .rooms()
            .enumerate()
            .map(|(index, seats)| JsonRoom {
                room: index + 1,
                rows: seats.chunks(columns).collect(),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&plan)?)
}

pub fn render(grid: &RoomGrid, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Text => Ok(render_plan(grid)),
        ExportFormat::Csv => render_csv(grid),
        ExportFormat::Json => render_json(grid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Student;

    fn sample_grid() -> RoomGrid {
        let mut grid = RoomGrid::new(RoomLayout::new(2, 1, 2));
        grid.place(0, Student::new("S1", "CSE")).unwrap();
        grid.place(1, Student::new("S2", "IT")).unwrap();
        grid.place(2, Student::new("S3", "ENTC")).unwrap();
        grid
    }

    #[test]
    fn test_render_plan_layout() {
        let text = render_plan(&sample_grid());
        let expected = "--- Exam Hall Seating Plan ---\n\
             \n--- ROOM 1 ---\n\
             S1         (CSE )\tS2         (IT  )\t\n\
             \n--- ROOM 2 ---\n\
             S3         (ENTC)\tEMPTY      (--- )\t\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_seat_cells_pad_roll_and_branch() {
        assert_eq!(format_seat(&Seat::Empty), "EMPTY      (--- )\t");
        let long = Seat::Occupied(Student::new("2024CSE0001", "EXCP"));
        assert_eq!(format_seat(&long), "2024CSE0001 (EXCP)\t");
    }

    #[test]
    fn test_console_wraps_plan_with_footer() {
        let grid = sample_grid();
        let console = render_console(&grid);
        assert!(console.starts_with("\n--- Exam Hall Seating Plan ---\n"));
        assert!(console.ends_with("\n---------------------------------\n"));
        assert!(console.contains(&render_plan(&grid)));
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let grid = sample_grid();
        assert_eq!(render_plan(&grid), render_plan(&grid));
        assert_eq!(render_csv(&grid).unwrap(), render_csv(&grid).unwrap());
    }

    #[test]
    fn test_render_csv_lists_every_seat() {
        let csv = render_csv(&sample_grid()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "room,row,bench,roll_number,branch");
        assert_eq!(lines[1], "1,1,1,S1,CSE");
        assert_eq!(lines[4], "2,1,2,EMPTY,---");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_render_json_nests_rooms_and_rows() {
        let json = render_json(&sample_grid()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["layout"]["rooms"], 2);
        assert_eq!(value["rooms"][0]["rows"][0][1]["roll_number"], "S2");
        assert_eq!(value["rooms"][1]["rows"][0][1]["branch"], "---");
    }
}
