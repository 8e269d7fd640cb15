use crate::domain::model::Student;
use std::collections::VecDeque;

/// FIFO of students sharing one branch, kept in input order.
#[derive(Debug, Clone, Default)]
pub struct GroupQueue {
    students: VecDeque<Student>,
}

impl GroupQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, student: Student) {
        self.students.push_back(student);
    }

    /// `None` signals the queue has run dry.
    pub fn dequeue(&mut self) -> Option<Student> {
        self.students.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }
}
