use crate::core::grid::RoomGrid;
use crate::core::roster::BranchRoster;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllocationReport {
    pub seated: usize,
    /// Students still queued once every seat was taken.
    pub unseated: usize,
    /// Seated count per branch, in round-robin order.
    pub per_branch: Vec<(String, usize)>,
}

/// Fills a grid by taking one student per branch in turn.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobinAllocator;

impl RoundRobinAllocator {
    pub fn new() -> Self {
        Self
    }

    /// Walks the vacant seats in fill order. Each seat goes to the branch
    /// whose turn it is, skipping branches with nobody left; the turn then
    /// moves on to the next branch regardless of who was seated. Stops as
    /// soon as every queue is empty. Students left over when seats run out
    /// stay in the roster.
    pub fn allocate(&self, roster: &mut BranchRoster, grid: &mut RoomGrid) -> AllocationReport {
        let branch_count = roster.branch_count();
        let mut per_branch: Vec<(String, usize)> =
            roster.branch_codes().map(|code| (code.to_string(), 0)).collect();
        let mut seated = 0;
        let mut turn = 0;

        for index in 0..grid.capacity() {
            if roster.all_empty() {
                break;
            }
            if !grid.is_vacant(index) {
                continue;
            }

            while roster.slot_is_empty(turn) {
                turn = (turn + 1) % branch_count;
            }

            let (branch, queue) = roster.slot_mut(turn);
            let Some(student) = queue.dequeue() else {
                break;
            };
            tracing::trace!("Seat {} -> {} ({})", index, student.roll_number, branch);

            // vacancy was checked above
            if grid.place(index, student).is_ok() {
                per_branch[turn].1 += 1;
                seated += 1;
            }

            turn = (turn + 1) % branch_count;
        }

        let unseated = roster.remaining();
        if unseated > 0 {
            tracing::warn!(
                "Seating capacity of {} exhausted: {} student(s) were not seated",
                grid.capacity(),
                unseated
            );
        }
        tracing::debug!("Seated {} student(s), {} unseated", seated, unseated);

        AllocationReport {
            seated,
            unseated,
            per_branch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{RoomLayout, SeatPosition};

    fn fill_order(grid: &RoomGrid) -> Vec<(String, String)> {
        grid.positions()
            .filter_map(|(_, seat)| seat.student())
            .map(|s| (s.roll_number.clone(), s.branch.clone()))
            .collect()
    }

    fn allocate(input: &str, layout: RoomLayout) -> (RoomGrid, AllocationReport, BranchRoster) {
        let mut roster = BranchRoster::default();
        roster.load_str(input);
        let mut grid = RoomGrid::new(layout);
        let report = RoundRobinAllocator::new().allocate(&mut roster, &mut grid);
        (grid, report, roster)
    }

    #[test]
    fn test_empty_branch_turns_are_skipped() {
        let (grid, report, _) = allocate("S1 CSE\nS2 IT\nS3 CSE\n", RoomLayout::new(1, 2, 2));

        assert_eq!(
            fill_order(&grid),
            vec![
                ("S1".to_string(), "CSE".to_string()),
                ("S2".to_string(), "IT".to_string()),
                ("S3".to_string(), "CSE".to_string()),
            ]
        );
        assert_eq!(report.seated, 3);
        assert_eq!(report.unseated, 0);
        assert!(grid
            .get(SeatPosition { room: 1, row: 2, bench: 2 })
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_first_cycle_follows_branch_order() {
        let input = "E1 ENTC R1 RAI X1 EXCP I1 IT C1 CSE E2 ENTC C2 CSE";
        let (grid, _, _) = allocate(input, RoomLayout::default());

        let branches: Vec<String> = fill_order(&grid).into_iter().map(|(_, b)| b).collect();
        assert_eq!(
            &branches[..5],
            &["CSE", "IT", "EXCP", "RAI", "ENTC"].map(String::from)
        );
        assert_eq!(&branches[5..], &["CSE", "ENTC"].map(String::from));
    }

    #[test]
    fn test_turn_advances_after_every_placement() {
        // CSE has 3, IT has 1: after IT dries up CSE takes every seat.
        let (grid, report, _) = allocate("A CSE B CSE C CSE D IT", RoomLayout::new(1, 1, 4));
        let rolls: Vec<String> = fill_order(&grid).into_iter().map(|(r, _)| r).collect();
        assert_eq!(rolls, vec!["A", "D", "B", "C"]);
        assert_eq!(
            report.per_branch,
            vec![
                ("CSE".to_string(), 3),
                ("IT".to_string(), 1),
                ("EXCP".to_string(), 0),
                ("RAI".to_string(), 0),
                ("ENTC".to_string(), 0),
            ]
        );
    }

    #[test]
    fn test_capacity_overflow_truncates_silently() {
        let input: String = (1..=10).map(|i| format!("S{} CSE\n", i)).collect();
        let (grid, report, roster) = allocate(&input, RoomLayout::new(2, 2, 2));

        assert_eq!(report.seated, 8);
        assert_eq!(report.unseated, 2);
        assert_eq!(grid.occupied(), 8);
        assert_eq!(roster.remaining(), 2);
        assert_eq!(grid.search("S8"), Some(SeatPosition { room: 2, row: 2, bench: 2 }));
        assert_eq!(grid.search("S9"), None);
    }

    #[test]
    fn test_no_students_leaves_grid_empty() {
        let (grid, report, _) = allocate("", RoomLayout::new(1, 2, 2));
        assert_eq!(grid.occupied(), 0);
        assert_eq!(report.seated, 0);
    }

    #[test]
    fn test_every_student_is_seated_exactly_once() {
        let branches = ["CSE", "IT", "EXCP", "RAI", "ENTC"];
        let input: String = (0..37)
            .map(|i| format!("R{:03} {}\n", i, branches[(i * 7 + i / 3) % 5]))
            .collect();
        let (grid, report, _) = allocate(&input, RoomLayout::new(2, 4, 5));

        assert_eq!(report.seated, 37);
        let mut rolls: Vec<String> = fill_order(&grid).into_iter().map(|(r, _)| r).collect();
        rolls.sort();
        rolls.dedup();
        assert_eq!(rolls.len(), 37);
        for i in 0..37 {
            assert!(grid.search(&format!("R{:03}", i)).is_some());
        }
        // seats fill contiguously from the front
        let occupied: Vec<bool> = grid.positions().map(|(_, s)| !s.is_empty()).collect();
        assert!(occupied[..37].iter().all(|&o| o));
        assert!(occupied[37..].iter().all(|&o| !o));
    }

    #[test]
    fn test_pre_seated_grid_keeps_existing_seats() {
        let mut roster = BranchRoster::default();
        roster.load_str("S1 CSE S2 IT");
        let mut grid = RoomGrid::new(RoomLayout::new(1, 1, 3));
        grid.place(0, crate::domain::model::Student::new("X", "RAI"))
            .unwrap();

        let report = RoundRobinAllocator::new().allocate(&mut roster, &mut grid);
        assert_eq!(report.seated, 2);
        let rolls: Vec<String> = fill_order(&grid).into_iter().map(|(r, _)| r).collect();
        assert_eq!(rolls, vec!["X", "S1", "S2"]);
    }
}
