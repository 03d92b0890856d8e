//! Dashboard indicators.
//!
//! Computes the management dashboard's headline counters and groupings
//! from a full dataset.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Projects | Count of all projects |
//! | Active Resources | Resources with the active flag set |
//! | Pending Tasks | Tasks with completion < 100 |
//! | Completed Tasks | Tasks with completion = 100 |
//! | Projects by Unit | Project count per business unit (donut chart) |
//! | Busiest Resources | Top 5 by open-task count (bar chart) |
//! | Cost Center Groups | Projects grouped by cost center (accordion) |

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{BusinessUnit, Project, Resource, Task};

/// One bar of the workload chart: a resource and its open-task count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceLoad {
    /// Resource identifier.
    pub resource_id: String,
    /// Display name.
    pub name: String,
    /// Number of tasks assigned to this resource with completion < 100.
    pub open_tasks: usize,
}

/// Projects sharing a cost center.
#[derive(Debug, Clone, Serialize)]
pub struct CostCenterGroup {
    /// The cost center label.
    pub cost_center: String,
    /// Member projects, ordered by estimated end date.
    pub projects: Vec<Project>,
}

/// Management dashboard indicators.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardKpi {
    /// Count of all projects.
    pub total_projects: usize,
    /// Resources with the active flag set.
    pub active_resources: usize,
    /// Count of all tasks.
    pub total_tasks: usize,
    /// Tasks with completion < 100.
    pub pending_tasks: usize,
    /// Tasks with completion = 100.
    pub completed_tasks: usize,
    /// Project count per business unit.
    pub projects_by_unit: HashMap<BusinessUnit, usize>,
    /// Top 5 resources by open-task count, descending.
    pub busiest_resources: Vec<ResourceLoad>,
    /// Projects grouped by non-empty cost center, groups ordered by
    /// cost center label.
    pub cost_center_groups: Vec<CostCenterGroup>,
}

impl DashboardKpi {
    /// Computes dashboard indicators from a dataset.
    pub fn calculate(projects: &[Project], resources: &[Resource], tasks: &[Task]) -> Self {
        let pending_tasks = tasks.iter().filter(|t| t.is_open()).count();

        let mut projects_by_unit: HashMap<BusinessUnit, usize> = HashMap::new();
        for project in projects {
            *projects_by_unit.entry(project.business_unit).or_insert(0) += 1;
        }

        let mut open_by_resource: HashMap<&str, usize> = HashMap::new();
        for task in tasks.iter().filter(|t| t.is_open()) {
            if let Some(assignee) = &task.assignee {
                *open_by_resource.entry(assignee.as_str()).or_insert(0) += 1;
            }
        }
        let mut busiest: Vec<ResourceLoad> = resources
            .iter()
            .map(|r| ResourceLoad {
                resource_id: r.id.clone(),
                name: r.name.clone(),
                open_tasks: open_by_resource.get(r.id.as_str()).copied().unwrap_or(0),
            })
            .collect();
        busiest.sort_by(|a, b| {
            b.open_tasks
                .cmp(&a.open_tasks)
                .then_with(|| a.resource_id.cmp(&b.resource_id))
        });
        busiest.truncate(5);

        let mut by_cost_center: HashMap<&str, Vec<Project>> = HashMap::new();
        for project in projects {
            if !project.cost_center.is_empty() {
                by_cost_center
                    .entry(project.cost_center.as_str())
                    .or_default()
                    .push(project.clone());
            }
        }
        let mut cost_center_groups: Vec<CostCenterGroup> = by_cost_center
            .into_iter()
            .map(|(cost_center, mut projects)| {
                projects.sort_by(|a, b| {
                    a.estimated_end
                        .cmp(&b.estimated_end)
                        .then_with(|| a.id.cmp(&b.id))
                });
                CostCenterGroup {
                    cost_center: cost_center.to_string(),
                    projects,
                }
            })
            .collect();
        cost_center_groups.sort_by(|a, b| a.cost_center.cmp(&b.cost_center));

        Self {
            total_projects: projects.len(),
            active_resources: resources.iter().filter(|r| r.active).count(),
            total_tasks: tasks.len(),
            pending_tasks,
            completed_tasks: tasks.len() - pending_tasks,
            projects_by_unit,
            busiest_resources: busiest,
            cost_center_groups,
        }
    }
}
