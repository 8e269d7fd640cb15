use crate::core::queue::GroupQueue;
use crate::domain::model::{Student, DEFAULT_BRANCHES};

/// Outcome of bucketing an input file into branch queues.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub accepted: usize,
    /// Roll numbers whose branch code is not in the configured order.
    pub unrecognized: Vec<String>,
    /// Trailing token without a branch partner.
    pub malformed: usize,
}

impl LoadReport {
    pub fn dropped(&self) -> usize {
        self.unrecognized.len() + self.malformed
    }
}

/// One queue per recognized branch, in round-robin order.
#[derive(Debug, Clone)]
pub struct BranchRoster {
    branches: Vec<(String, GroupQueue)>,
}

impl BranchRoster {
    pub fn new<I, S>(order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            branches: order
                .into_iter()
                .map(|code| (code.into(), GroupQueue::new()))
                .collect(),
        }
    }

    /// Routes a student to its branch queue. Returns `false` if the
    /// branch is not one of ours.
    pub fn enqueue(&mut self, student: Student) -> bool {
        match self.queue_mut(&student.branch) {
            Some(queue) => {
                queue.enqueue(student);
                true
            }
            None => false,
        }
    }

    /// Reads `<roll> <branch>` pairs from whitespace-separated text.
    /// Line breaks carry no meaning; only token order does.
    pub fn load_str(&mut self, text: &str) -> LoadReport {
        let mut report = LoadReport::default();
        let mut tokens = text.split_whitespace();

        while let Some(roll_number) = tokens.next() {
            let Some(branch) = tokens.next() else {
                tracing::debug!("Skipping unpaired trailing token '{}'", roll_number);
                report.malformed += 1;
                break;
            };

            if self.enqueue(Student::new(roll_number, branch)) {
                report.accepted += 1;
            } else {
                tracing::debug!(
                    "Dropping {}: branch '{}' is not recognized",
                    roll_number,
                    branch
                );
                report.unrecognized.push(roll_number.to_string());
            }
        }

        report
    }

    pub fn branch_codes(&self) -> impl Iterator<Item = &str> {
        self.branches.iter().map(|(code, _)| code.as_str())
    }

    pub fn queue(&self, branch: &str) -> Option<&GroupQueue> {
        self.branches
            .iter()
            .find(|(code, _)| code == branch)
            .map(|(_, queue)| queue)
    }

    fn queue_mut(&mut self, branch: &str) -> Option<&mut GroupQueue> {
        self.branches
            .iter_mut()
            .find(|(code, _)| code == branch)
            .map(|(_, queue)| queue)
    }

    pub fn branch_count(&self) -> usize {
        self.branches.len()
    }

    /// Queue at a round-robin slot, with its branch code.
    pub(crate) fn slot_mut(&mut self, turn: usize) -> (&str, &mut GroupQueue) {
        let slot = &mut self.branches[turn];
        (slot.0.as_str(), &mut slot.1)
    }

    pub(crate) fn slot_is_empty(&self, turn: usize) -> bool {
        self.branches[turn].1.is_empty()
    }

    pub fn all_empty(&self) -> bool {
        self.branches.iter().all(|(_, queue)| queue.is_empty())
    }

    pub fn remaining(&self) -> usize {
        self.branches.iter().map(|(_, queue)| queue.len()).sum()
    }
}

impl Default for BranchRoster {
    fn default() -> Self {
        Self::new(DEFAULT_BRANCHES)
    }
}
