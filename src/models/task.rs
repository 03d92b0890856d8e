//! Task model.
//!
//! A task is a unit of work inside a project: a date range, a completion
//! percentage, an optional assignee, and an optional set of required
//! skills. A task occupies its assignee only while `completion < 100`;
//! the date range is inclusive on both ends.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A unit of work to be staffed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: String,
    /// Task name.
    pub name: String,
    /// Owning project.
    pub project_id: String,
    /// Assigned resource, if any.
    pub assignee: Option<String>,
    /// First day of work (inclusive).
    pub start: NaiveDate,
    /// Last day of work (inclusive).
    pub end: NaiveDate,
    /// Percent complete, 0-100.
    pub completion: u8,
    /// Skills required to perform this task (skill ids, in display order).
    pub required_skills: Vec<String>,
    /// Task that must finish before this one starts, if any.
    /// Carried for Gantt rendering; the availability engine ignores it.
    pub predecessor: Option<String>,
}

/// Computed state of a task relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Completion is 100%.
    Completed,
    /// End date has passed without completion.
    Overdue,
    /// Work has started (completion above zero).
    InProgress,
    /// Start date reached but no progress recorded yet.
    Starting,
    /// Start date still in the future.
    Pending,
}

impl Task {
    /// Creates a new unassigned task with default dates.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        project_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            project_id: project_id.into(),
            assignee: None,
            start: NaiveDate::default(),
            end: NaiveDate::default(),
            completion: 0,
            required_skills: Vec::new(),
            predecessor: None,
        }
    }

    /// Assigns the task to a resource.
    pub fn with_assignee(mut self, resource_id: impl Into<String>) -> Self {
        self.assignee = Some(resource_id.into());
        self
    }

    /// Sets the start and end dates (both inclusive).
    pub fn with_dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Sets the completion percentage, capped at 100.
    pub fn with_completion(mut self, completion: u8) -> Self {
        self.completion = completion.min(100);
        self
    }

    /// Adds a required skill.
    pub fn with_required_skill(mut self, skill_id: impl Into<String>) -> Self {
        self.required_skills.push(skill_id.into());
        self
    }

    /// Sets the predecessor task.
    pub fn with_predecessor(mut self, task_id: impl Into<String>) -> Self {
        self.predecessor = Some(task_id.into());
        self
    }

    /// Whether the task is finished (completion at 100%).
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.completion >= 100
    }

    /// Whether the task still occupies its assignee.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.completion < 100
    }

    /// Whether this task's date range overlaps `[start, end]`.
    ///
    /// Inclusive on both bounds: a task ending exactly on `start` or
    /// starting exactly on `end` overlaps.
    #[inline]
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start <= end && self.end >= start
    }

    /// Computed state relative to `as_of`.
    ///
    /// Completion dominates: a finished task is `Completed` even past its
    /// end date. An unfinished task past its end date is `Overdue`.
    pub fn status(&self, as_of: NaiveDate) -> TaskStatus {
        if self.completion >= 100 {
            TaskStatus::Completed
        } else if self.end < as_of {
            TaskStatus::Overdue
        } else if self.completion > 0 {
            TaskStatus::InProgress
        } else if self.start <= as_of {
            TaskStatus::Starting
        } else {
            TaskStatus::Pending
        }
    }
}
