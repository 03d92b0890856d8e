//! Per-resource task reports.
//!
//! Builds the data behind the workload report screen and its export: for
//! each resource, the tasks assigned to it within an optional date
//! filter, each annotated with its computed status, plus workload
//! statistics.
//!
//! The reference date for status computation is an explicit parameter so
//! the same dataset always produces the same report.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Resource, Task, TaskStatus};

/// Filter for [`resource_report`].
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    /// Report only this resource. `None` reports everyone with matching
    /// tasks.
    pub resource_id: Option<String>,
    /// Keep only tasks starting on or after this date.
    pub from: Option<NaiveDate>,
    /// Keep only tasks ending on or before this date.
    pub to: Option<NaiveDate>,
}

impl ReportFilter {
    /// Creates an unrestricted filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the report to one resource.
    pub fn with_resource(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    /// Keeps only tasks starting on or after `from`.
    pub fn with_from(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }

    /// Keeps only tasks ending on or before `to`.
    pub fn with_to(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }
}

/// A task row in a resource's report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    /// The task.
    pub task: Task,
    /// Computed state relative to the report's reference date.
    pub status: TaskStatus,
}

/// Workload statistics for one resource's filtered tasks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskStats {
    /// Matching tasks.
    pub total: usize,
    /// Tasks at 100% completion.
    pub completed: usize,
    /// Tasks below 100%.
    pub pending: usize,
    /// Completed share as a percentage, rounded to one decimal.
    /// Zero when there are no tasks.
    pub performance: f64,
}

/// One resource's section of the workload report.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceReport {
    /// The resource reported on.
    pub resource: Resource,
    /// Matching tasks, latest end date first.
    pub entries: Vec<ReportEntry>,
    /// Statistics over the matching tasks.
    pub stats: TaskStats,
}

/// Builds per-resource workload reports.
///
/// Resources are reported in ascending id order. When no specific
/// resource is requested, resources with no matching tasks are omitted;
/// a specifically requested resource is always included, even with an
/// empty task list.
pub fn resource_report(
    resources: &[Resource],
    tasks: &[Task],
    filter: &ReportFilter,
    as_of: NaiveDate,
) -> Vec<ResourceReport> {
    let mut selected: Vec<&Resource> = match &filter.resource_id {
        Some(id) => resources.iter().filter(|r| &r.id == id).collect(),
        None => resources.iter().collect(),
    };
    selected.sort_by(|a, b| a.id.cmp(&b.id));

    let mut reports = Vec::new();
    for resource in selected {
        let mut matching: Vec<&Task> = tasks
            .iter()
            .filter(|t| t.assignee.as_deref() == Some(resource.id.as_str()))
            .filter(|t| filter.from.is_none_or(|from| t.start >= from))
            .filter(|t| filter.to.is_none_or(|to| t.end <= to))
            .collect();

        if matching.is_empty() && filter.resource_id.is_none() {
            continue;
        }

        matching.sort_by(|a, b| b.end.cmp(&a.end).then_with(|| a.id.cmp(&b.id)));

        let total = matching.len();
        let completed = matching.iter().filter(|t| t.is_complete()).count();
        let performance = if total == 0 {
            0.0
        } else {
            (completed as f64 / total as f64 * 1000.0).round() / 10.0
        };

        reports.push(ResourceReport {
            resource: resource.clone(),
            entries: matching
                .into_iter()
                .map(|task| ReportEntry {
                    status: task.status(as_of),
                    task: task.clone(),
                })
                .collect(),
            stats: TaskStats {
                total,
                completed,
                pending: total - completed,
                performance,
            },
        });
    }

    reports
}
